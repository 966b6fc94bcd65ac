//! Bookmaker quote types.
//!
//! - [`OutcomeQuote`] - One bookmaker's price for one outcome
//! - [`BookmakerQuotes`] - One bookmaker's full set of prices for an event

use std::result::Result;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::{is_valid_price, Price};

/// One bookmaker's decimal price for one outcome of an event.
///
/// Any price is accepted so that feed data can be carried as-is; the
/// selector ignores quotes that fail [`OutcomeQuote::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeQuote {
    name: String,
    price: Price,
}

impl OutcomeQuote {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Outcome name as quoted by the bookmaker (team, side, "Draw").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decimal price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Whether the price can take part in arbitrage math.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_price(self.price)
    }
}

/// A bookmaker's full set of outcome quotes for one event and market.
///
/// Outcomes keep the order the bookmaker published them in. Positional
/// selection assumes that order matches across bookmakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmakerQuotes {
    platform: String,
    outcomes: Vec<OutcomeQuote>,
}

impl BookmakerQuotes {
    /// Create a quote set without validation.
    pub fn new(platform: impl Into<String>, outcomes: Vec<OutcomeQuote>) -> Self {
        Self {
            platform: platform.into(),
            outcomes,
        }
    }

    /// Create a quote set, rejecting an empty outcome list.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyOutcomes`] when `outcomes` is empty.
    pub fn try_new(
        platform: impl Into<String>,
        outcomes: Vec<OutcomeQuote>,
    ) -> Result<Self, DomainError> {
        if outcomes.is_empty() {
            return Err(DomainError::EmptyOutcomes);
        }
        Ok(Self::new(platform, outcomes))
    }

    /// Bookmaker display name.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Quotes in published order.
    #[must_use]
    pub fn outcomes(&self) -> &[OutcomeQuote] {
        &self.outcomes
    }

    /// Number of quoted outcomes.
    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Find a quote by outcome name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&OutcomeQuote> {
        let wanted = name.trim();
        self.outcomes
            .iter()
            .find(|o| o.name.trim().eq_ignore_ascii_case(wanted))
    }
}
