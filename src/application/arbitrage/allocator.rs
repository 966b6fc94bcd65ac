//! Stake allocation that equalizes the payout across outcomes.
//!
//! Each outcome receives its own implied probability plus a share of the
//! margin proportional to that implied probability. The resulting fractions
//! are the normalised implied probabilities, so every leg returns the same
//! gross payout up to rounding.
//!
//! Rounding happens in a fixed order and always half-to-even:
//! fraction (4 places), stake (2), gross payout (2), net gain (2).

use rust_decimal::Decimal;
use tracing::debug;

use super::evaluator::{implied_probability, margin_pct, total_implied_probability};
use crate::domain::money::{round_dp, round_money, FRACTION_DP};
use crate::domain::{Allocation, BestPriceVector, Stake, StakeLeg};

/// Split `total_stake` across the best prices.
///
/// Does not gate on profitability: a non-positive margin yields legs with a
/// guaranteed loss. Returns `None` when the vector is empty, has an unquoted
/// outcome, or a payout does not fit in a `Decimal`.
#[must_use]
pub fn allocate(best_prices: &BestPriceVector, total_stake: Stake) -> Option<Allocation> {
    let total_implied = total_implied_probability(best_prices)?;
    let margin = Decimal::ONE - total_implied;

    let mut legs = Vec::with_capacity(best_prices.len());
    let mut fraction_sum = Decimal::ZERO;

    for entry in best_prices {
        let price = entry.price();
        let implied = implied_probability(price)?;
        let share = implied / total_implied;

        let fraction = round_dp(implied + margin * share, FRACTION_DP);
        let stake = round_money(total_stake.checked_mul(fraction)?);
        let Some(gross_payout) = stake.checked_mul(price).map(round_money) else {
            debug!(%stake, %price, "Payout overflows, no allocation");
            return None;
        };
        let net_gain = round_money(gross_payout - total_stake);

        fraction_sum += fraction;
        legs.push(StakeLeg {
            outcome: entry.outcome().to_string(),
            platform: entry.platform().to_string(),
            price,
            fraction,
            stake,
            gross_payout,
            net_gain,
        });
    }

    debug!(
        fraction_sum = %round_money(fraction_sum),
        legs = legs.len(),
        "Computed stake allocation"
    );

    Some(Allocation {
        total_stake,
        margin,
        margin_pct: margin_pct(total_implied),
        expected_profit: round_money(total_stake * margin),
        fraction_sum,
        legs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BestPrice;
    use rust_decimal_macros::dec;

    fn vector(entries: &[(&str, &str, Decimal)]) -> BestPriceVector {
        entries
            .iter()
            .map(|(outcome, platform, price)| BestPrice::new(*outcome, *platform, *price))
            .collect()
    }

    #[test]
    fn two_way_allocation_matches_hand_computation() {
        let best = vector(&[("Home", "X", dec!(2.10)), ("Away", "Y", dec!(2.20))]);

        let allocation = allocate(&best, dec!(100)).unwrap();

        assert_eq!(allocation.margin_pct, dec!(6.93));
        assert_eq!(allocation.expected_profit, dec!(6.93));

        let home = &allocation.legs[0];
        assert_eq!(home.platform, "X");
        assert_eq!(home.fraction, dec!(0.5116));
        assert_eq!(home.stake, dec!(51.16));
        assert_eq!(home.gross_payout, dec!(107.44));
        assert_eq!(home.net_gain, dec!(7.44));

        let away = &allocation.legs[1];
        assert_eq!(away.fraction, dec!(0.4884));
        assert_eq!(away.stake, dec!(48.84));
        assert_eq!(away.gross_payout, dec!(107.45));
        assert_eq!(away.net_gain, dec!(7.45));

        assert_eq!(allocation.fraction_sum, dec!(1.0000));
    }

    #[test]
    fn break_even_book_splits_evenly_with_zero_gain() {
        let best = vector(&[("Home", "X", dec!(2.0)), ("Away", "Y", dec!(2.0))]);

        let allocation = allocate(&best, dec!(100)).unwrap();

        for leg in &allocation.legs {
            assert_eq!(leg.stake, dec!(50));
            assert_eq!(leg.gross_payout, dec!(100));
            assert_eq!(leg.net_gain, Decimal::ZERO);
        }
        assert_eq!(allocation.expected_profit, Decimal::ZERO);
    }

    #[test]
    fn overround_book_allocates_a_guaranteed_loss() {
        let best = vector(&[("Home", "X", dec!(1.80)), ("Away", "X", dec!(1.80))]);

        let allocation = allocate(&best, dec!(100)).unwrap();

        assert!(allocation.legs.iter().all(|leg| leg.net_gain < Decimal::ZERO));
        assert_eq!(allocation.legs[0].net_gain, dec!(-10.00));
        assert_eq!(allocation.expected_profit, dec!(-11.11));
    }

    #[test]
    fn three_way_payouts_are_equalized() {
        let best = vector(&[
            ("Home", "A", dec!(3.2)),
            ("Draw", "B", dec!(3.9)),
            ("Away", "C", dec!(3.8)),
        ]);

        let allocation = allocate(&best, dec!(100)).unwrap();

        assert!(allocation.payout_spread() <= dec!(0.02));
        assert!((allocation.staked() - dec!(100)).abs() <= dec!(0.05));
        assert!(allocation.guaranteed_gain().unwrap() > Decimal::ZERO);
    }

    #[test]
    fn oversized_stake_has_no_allocation() {
        let best = vector(&[("Home", "X", dec!(2.10)), ("Away", "Y", dec!(2.20))]);

        assert!(allocate(&best, Decimal::MAX).is_none());
    }

    #[test]
    fn incomplete_vector_has_no_allocation() {
        let best: BestPriceVector =
            vec![BestPrice::new("Home", "X", dec!(2.5)), BestPrice::unquoted("Away")]
                .into_iter()
                .collect();

        assert!(allocate(&best, dec!(100)).is_none());
        assert!(allocate(&BestPriceVector::default(), dec!(100)).is_none());
    }
}
