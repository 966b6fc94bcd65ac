//! Monetary and probability types plus the rounding rules shared by the engine.
//!
//! All arithmetic runs on [`Decimal`] so that prices quoted as `2.10` stay
//! exactly `2.10`. Rounding is half-to-even at every step that reports a
//! figure, which keeps stake splits reproducible.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal odds: payout multiplier per unit staked.
pub type Price = Decimal;

/// Amount of money placed (or returned) on a bet.
pub type Stake = Decimal;

/// Implied probability derived from a price.
pub type Probability = Decimal;

/// Decimal places kept for stake fractions.
pub const FRACTION_DP: u32 = 4;

/// Decimal places kept for money amounts and percentages.
pub const MONEY_DP: u32 = 2;

/// Decimal places a summed implied probability is normalised to.
///
/// `1/3` is not representable, so three prices of `3.0` would otherwise sum
/// to `0.999…9` and look like an arbitrage.
pub const PROBABILITY_DP: u32 = 15;

/// Round half-to-even to `dp` decimal places.
#[must_use]
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Round a money amount or percentage to two decimal places.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_dp(value, MONEY_DP)
}

/// Whether a price can take part in arbitrage math.
///
/// Anything at or below `1.0` pays back no more than the stake.
#[must_use]
pub fn is_valid_price(price: Price) -> bool {
    price > Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_money_is_half_even() {
        assert_eq!(round_money(dec!(2.675)), dec!(2.68));
        assert_eq!(round_money(dec!(2.665)), dec!(2.66));
        assert_eq!(round_money(dec!(-11.115)), dec!(-11.12));
    }

    #[test]
    fn round_dp_keeps_shorter_values() {
        assert_eq!(round_dp(dec!(0.5), FRACTION_DP), dec!(0.5));
        assert_eq!(round_dp(dec!(0.51163), FRACTION_DP), dec!(0.5116));
    }

    #[test]
    fn price_validity() {
        assert!(is_valid_price(dec!(1.01)));
        assert!(!is_valid_price(Decimal::ONE));
        assert!(!is_valid_price(Decimal::ZERO));
        assert!(!is_valid_price(dec!(-2)));
    }
}
