//! Sporting event carrying every bookmaker's quotes for one market.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{EventId, SportKey};
use super::quote::BookmakerQuotes;

/// A match between two sides with the quote sets collected for it.
///
/// Team names and sport are only used for reporting; events are independent
/// of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    sport_key: Option<SportKey>,
    sport_title: Option<String>,
    home_team: String,
    away_team: String,
    commence_time: Option<DateTime<Utc>>,
    bookmakers: Vec<BookmakerQuotes>,
}

impl Event {
    /// Create a new event.
    pub fn new(
        id: EventId,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        bookmakers: Vec<BookmakerQuotes>,
    ) -> Self {
        Self {
            id,
            sport_key: None,
            sport_title: None,
            home_team: home_team.into(),
            away_team: away_team.into(),
            commence_time: None,
            bookmakers,
        }
    }

    /// Attach the sport this event belongs to.
    #[must_use]
    pub fn with_sport(mut self, key: SportKey, title: Option<String>) -> Self {
        self.sport_key = Some(key);
        self.sport_title = title;
        self
    }

    /// Attach the scheduled start time.
    #[must_use]
    pub fn with_commence_time(mut self, commence_time: DateTime<Utc>) -> Self {
        self.commence_time = Some(commence_time);
        self
    }

    #[must_use]
    pub const fn id(&self) -> &EventId {
        &self.id
    }

    #[must_use]
    pub const fn sport_key(&self) -> Option<&SportKey> {
        self.sport_key.as_ref()
    }

    #[must_use]
    pub fn sport_title(&self) -> Option<&str> {
        self.sport_title.as_deref()
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub const fn commence_time(&self) -> Option<DateTime<Utc>> {
        self.commence_time
    }

    /// Quote sets in feed order. Order matters for tie-breaking.
    #[must_use]
    pub fn bookmakers(&self) -> &[BookmakerQuotes] {
        &self.bookmakers
    }

    /// Short `Home VS Away` label for reports and logs.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} VS {}", self.home_team, self.away_team)
    }
}
