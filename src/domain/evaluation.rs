//! Arbitrage classification of a best-price vector.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::Probability;

/// Outcome of evaluating a complete best-price vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Sum of implied probabilities across all outcomes.
    pub total_implied: Probability,
    /// `(1 - total_implied) * 100`, rounded to two places. Negative for an
    /// overround book.
    pub margin_pct: Decimal,
    /// Strictly below one. A break-even book is not arbitrable.
    pub arbitrable: bool,
}
