//! Best available price per outcome across bookmakers.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::{is_valid_price, Price};

/// Platform name recorded for an outcome no bookmaker has validly quoted.
pub const UNQUOTED_PLATFORM: &str = "undefined";

/// Best price seen so far for one outcome position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPrice {
    outcome: String,
    platform: String,
    price: Price,
}

impl BestPrice {
    /// Create an entry for a quoted price.
    pub fn new(outcome: impl Into<String>, platform: impl Into<String>, price: Price) -> Self {
        Self {
            outcome: outcome.into(),
            platform: platform.into(),
            price,
        }
    }

    /// Sentinel entry: no valid quote seen yet.
    pub fn unquoted(outcome: impl Into<String>) -> Self {
        Self::new(outcome, UNQUOTED_PLATFORM, Decimal::ZERO)
    }

    /// Canonical outcome name for this position.
    #[must_use]
    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    /// Bookmaker offering the price.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// False while the entry still holds the sentinel.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        is_valid_price(self.price)
    }

    /// Replace price and platform together.
    pub(crate) fn replace(&mut self, platform: &str, price: Price) {
        self.platform = platform.to_string();
        self.price = price;
    }
}

/// Per-outcome maximum prices for one event, in canonical outcome order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BestPriceVector(Vec<BestPrice>);

impl BestPriceVector {
    pub fn new(entries: Vec<BestPrice>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[BestPrice] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the vector is non-empty and every outcome has a valid quote.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(BestPrice::is_quoted)
    }

    /// Prices in outcome order.
    pub fn prices(&self) -> impl Iterator<Item = Price> + '_ {
        self.0.iter().map(BestPrice::price)
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [BestPrice] {
        &mut self.0
    }
}

impl FromIterator<BestPrice> for BestPriceVector {
    fn from_iter<I: IntoIterator<Item = BestPrice>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BestPriceVector {
    type Item = &'a BestPrice;
    type IntoIter = std::slice::Iter<'a, BestPrice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
