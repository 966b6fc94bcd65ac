//! Per-event result of running the arbitrage engine.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::allocation::Allocation;
use super::best_price::BestPriceVector;
use super::evaluation::Evaluation;
use super::event::Event;
use super::id::{EventId, SportKey};

/// Reporting priority of an analysed event.
///
/// Lower is more important. The numeric value is the minimum report
/// verbosity at which the event is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Arbitrable with a margin at or above the configured threshold.
    AboveThreshold = 0,
    /// Arbitrable, but below the threshold.
    Arbitrable = 1,
    /// Evaluated, not arbitrable.
    Evaluated = 2,
}

impl Priority {
    /// Minimum verbosity needed to show an event with this priority.
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Identifying details of the analysed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub id: EventId,
    pub sport_key: Option<SportKey>,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: Option<DateTime<Utc>>,
    pub bookmaker_count: usize,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().clone(),
            sport_key: event.sport_key().cloned(),
            home_team: event.home_team().to_string(),
            away_team: event.away_team().to_string(),
            commence_time: event.commence_time(),
            bookmaker_count: event.bookmakers().len(),
        }
    }
}

impl EventSummary {
    /// `Home VS Away`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} VS {}", self.home_team, self.away_team)
    }
}

/// Everything the engine concluded about one event.
///
/// `evaluation.arbitrable` and `above_threshold` are independent: the
/// threshold only decides how prominently an arbitrage is reported, and an
/// allocation is computed for every arbitrable event whose payouts fit in a
/// `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventAnalysis {
    pub event: EventSummary,
    pub best_prices: BestPriceVector,
    pub evaluation: Evaluation,
    pub above_threshold: bool,
    pub allocation: Option<Allocation>,
}

impl EventAnalysis {
    #[must_use]
    pub const fn is_arbitrable(&self) -> bool {
        self.evaluation.arbitrable
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        if !self.evaluation.arbitrable {
            Priority::Evaluated
        } else if self.above_threshold {
            Priority::AboveThreshold
        } else {
            Priority::Arbitrable
        }
    }

    /// Minimum report verbosity at which this event is shown.
    #[must_use]
    pub const fn report_level(&self) -> u8 {
        self.priority().level()
    }
}
