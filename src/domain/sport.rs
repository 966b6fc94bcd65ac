//! Sports offered by the odds feed.

use serde::{Deserialize, Serialize};

use super::id::SportKey;

/// A sport (league or competition) the feed can return odds for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub key: SportKey,
    pub title: String,
    pub group: String,
    pub active: bool,
    /// Outright (futures) markets have no head-to-head outcomes.
    pub has_outrights: bool,
}
