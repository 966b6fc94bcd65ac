//! The Odds API response types.
//!
//! An odds payload is a JSON array of events:
//! ```json
//! [{"id":"e1","sport_key":"soccer_epl","home_team":"A","away_team":"B",
//!   "bookmakers":[{"key":"book","title":"Book","markets":[
//!     {"key":"h2h","outcomes":[{"name":"A","price":2.1},{"name":"B","price":1.9}]}]}]}]
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{BookmakerQuotes, Event, EventId, OutcomeQuote, Sport, SportKey};
use crate::error::Result;

/// Decode a raw odds payload into domain events for `market`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Json`] if the payload is not an event array.
pub fn decode_events(payload: &str, market: &str) -> Result<Vec<Event>> {
    let events: Vec<OddsApiEvent> = serde_json::from_str(payload)?;
    Ok(events.iter().map(|e| e.to_event(market)).collect())
}

/// Entry of the `/v4/sports` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiSport {
    pub key: String,
    #[serde(default)]
    pub group: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub has_outrights: bool,
}

impl From<OddsApiSport> for Sport {
    fn from(s: OddsApiSport) -> Self {
        Self {
            key: SportKey::from(s.key),
            title: s.title,
            group: s.group,
            active: s.active,
            has_outrights: s.has_outrights,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiEvent {
    pub id: String,
    #[serde(default)]
    pub sport_key: Option<String>,
    #[serde(default)]
    pub sport_title: Option<String>,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub bookmakers: Vec<OddsApiBookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiBookmaker {
    #[serde(default)]
    pub key: Option<String>,
    pub title: String,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub markets: Vec<OddsApiMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsApiOutcome>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiOutcome {
    pub name: String,
    pub price: Decimal,
}

impl OddsApiBookmaker {
    /// Quote set for `market`, or `None` if this bookmaker does not offer it
    /// or lists it without outcomes.
    #[must_use]
    pub fn quotes(&self, market: &str) -> Option<BookmakerQuotes> {
        let market = self.markets.iter().find(|m| m.key == market)?;
        let outcomes = market
            .outcomes
            .iter()
            .map(|o| OutcomeQuote::new(o.name.clone(), o.price))
            .collect();
        BookmakerQuotes::try_new(self.title.clone(), outcomes)
            .inspect_err(|err| debug!(bookmaker = %self.title, error = %err, "Skipping bookmaker"))
            .ok()
    }
}

impl OddsApiEvent {
    /// Convert to a domain [`Event`], keeping only `market` quotes.
    ///
    /// Bookmaker order is preserved; it decides ties between equal prices.
    #[must_use]
    pub fn to_event(&self, market: &str) -> Event {
        let bookmakers = self
            .bookmakers
            .iter()
            .filter_map(|b| b.quotes(market))
            .collect();

        let mut event = Event::new(
            EventId::from(self.id.clone()),
            self.home_team.clone().unwrap_or_default(),
            self.away_team.clone().unwrap_or_default(),
            bookmakers,
        );
        if let Some(key) = &self.sport_key {
            event = event.with_sport(SportKey::from(key.clone()), self.sport_title.clone());
        }
        if let Some(time) = self.commence_time {
            event = event.with_commence_time(time);
        }
        event
    }
}
