//! Implied-probability math and arbitrage classification.

use rust_decimal::Decimal;

use crate::domain::money::{round_dp, round_money, PROBABILITY_DP};
use crate::domain::{BestPriceVector, Evaluation, Price, Probability};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Implied probability `1 / price`, or `None` for a non-positive price.
#[must_use]
pub fn implied_probability(price: Price) -> Option<Probability> {
    if price <= Decimal::ZERO {
        return None;
    }
    Some(Decimal::ONE / price)
}

/// Sum of implied probabilities over the vector.
///
/// `None` when the vector is empty or any outcome is still unquoted; a
/// missing outcome would otherwise make the book look cheaper than it is.
#[must_use]
pub fn total_implied_probability(best_prices: &BestPriceVector) -> Option<Probability> {
    if !best_prices.is_complete() {
        return None;
    }

    let total = best_prices
        .prices()
        .map(implied_probability)
        .sum::<Option<Decimal>>()?;

    Some(round_dp(total, PROBABILITY_DP))
}

/// Whether the combined implied probability is strictly below one.
#[must_use]
pub fn is_arbitrable(best_prices: &BestPriceVector) -> bool {
    total_implied_probability(best_prices).is_some_and(|total| total < Decimal::ONE)
}

/// Margin as a percentage, two decimal places. Negative when the book is
/// overround.
#[must_use]
pub fn margin(best_prices: &BestPriceVector) -> Option<Decimal> {
    total_implied_probability(best_prices).map(margin_pct)
}

/// Classify a vector in one pass.
#[must_use]
pub fn evaluate(best_prices: &BestPriceVector) -> Option<Evaluation> {
    let total_implied = total_implied_probability(best_prices)?;
    Some(Evaluation {
        total_implied,
        margin_pct: margin_pct(total_implied),
        arbitrable: total_implied < Decimal::ONE,
    })
}

pub(crate) fn margin_pct(total_implied: Probability) -> Decimal {
    round_money((Decimal::ONE - total_implied) * HUNDRED)
}
