//! Odds cache location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where raw odds payloads are kept between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache directory. Unset means `~/.surebet/odds`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}
