//! Stake split across outcomes and the payout each leg returns.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::{Price, Stake};

/// Stake and payout for one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeLeg {
    /// Canonical outcome name.
    pub outcome: String,
    /// Bookmaker the stake goes to.
    pub platform: String,
    /// Price the stake is placed at.
    pub price: Price,
    /// Share of the total stake, four decimal places.
    pub fraction: Decimal,
    /// Amount to place, two decimal places.
    pub stake: Stake,
    /// Returned if this outcome wins.
    pub gross_payout: Stake,
    /// `gross_payout - total_stake`.
    pub net_gain: Stake,
}

/// Full stake allocation for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Total stake split across the legs.
    pub total_stake: Stake,
    /// `1 - Σ 1/price`, as a fraction.
    pub margin: Decimal,
    /// Margin as a percentage, two decimal places.
    pub margin_pct: Decimal,
    /// `total_stake * margin`, two decimal places.
    pub expected_profit: Stake,
    /// Sum of leg fractions. Drifts from one by rounding only.
    pub fraction_sum: Decimal,
    /// One leg per outcome, in canonical order.
    pub legs: Vec<StakeLeg>,
}

impl Allocation {
    /// Sum of all leg stakes.
    #[must_use]
    pub fn staked(&self) -> Stake {
        self.legs.iter().map(|leg| leg.stake).sum()
    }

    /// Smallest net gain across legs: the amount actually locked in.
    #[must_use]
    pub fn guaranteed_gain(&self) -> Option<Stake> {
        self.legs.iter().map(|leg| leg.net_gain).min()
    }

    /// Largest difference between any two legs' net gain.
    #[must_use]
    pub fn payout_spread(&self) -> Stake {
        let max = self.legs.iter().map(|leg| leg.net_gain).max();
        match (max, self.guaranteed_gain()) {
            (Some(max), Some(min)) => max - min,
            _ => Decimal::ZERO,
        }
    }
}
