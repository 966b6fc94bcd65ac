//! Odds feed port.
//!
//! A feed lists sports, returns raw odds payloads, and knows how to decode
//! its own payload format into domain events. Raw payloads are kept so they
//! can be cached byte-for-byte.

use async_trait::async_trait;

use crate::domain::{Event, Sport, SportKey};
use crate::error::Result;

/// Source of bookmaker odds.
#[async_trait]
pub trait OddsFeed: Send + Sync {
    /// Sports currently offered by the feed.
    async fn sports(&self) -> Result<Vec<Sport>>;

    /// Raw odds payload for every upcoming event of `sport`.
    async fn odds(&self, sport: &SportKey) -> Result<String>;

    /// Decode a payload returned by [`OddsFeed::odds`] into events.
    fn decode(&self, payload: &str) -> Result<Vec<Event>>;
}
