//! Odds cache port.

use crate::domain::SportKey;
use crate::error::Result;

/// Storage for raw odds payloads, one entry per sport.
pub trait OddsCache: Send + Sync {
    /// Load the stored payload, if any.
    fn load(&self, sport: &SportKey) -> Result<Option<String>>;

    /// Store a payload, replacing any previous one.
    fn store(&self, sport: &SportKey, payload: &str) -> Result<()>;

    /// Remove the stored payload. Returns whether one existed.
    ///
    /// Used to drop a payload that no longer decodes.
    fn remove(&self, sport: &SportKey) -> Result<bool>;
}
