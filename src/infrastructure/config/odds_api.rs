//! Odds feed connection settings.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};

/// Environment variable holding the odds API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// Settings for the odds HTTP API.
///
/// The key itself is never read from the config file: it comes from
/// `ODDS_API_KEY` or from the file named by `api_key_file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bookmaker regions, comma separated (`eu`, `uk`, `us`, `au`).
    #[serde(default = "default_regions")]
    pub regions: String,
    /// Single market key to request and analyse (`h2h` is the moneyline
    /// market).
    #[serde(default = "default_markets")]
    pub markets: String,
    /// Only `decimal` is supported; prices are treated as decimal odds.
    #[serde(default = "default_odds_format")]
    pub odds_format: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Request timeout (milliseconds).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Attempts per request, including the first.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Base delay between attempts, doubled each retry (milliseconds).
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com".into()
}

fn default_regions() -> String {
    "eu".into()
}

fn default_markets() -> String {
    "h2h".into()
}

fn default_odds_format() -> String {
    "decimal".into()
}

fn default_date_format() -> String {
    "iso".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_retry_max_attempts() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            regions: default_regions(),
            markets: default_markets(),
            odds_format: default_odds_format(),
            date_format: default_date_format(),
            timeout_ms: default_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            api_key_file: None,
        }
    }
}

impl OddsApiConfig {
    /// Resolve the API key from the environment, then from `api_key_file`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when neither source yields a
    /// non-empty key, or an I/O config error if the key file is unreadable.
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
        if let Some(path) = &self.api_key_file {
            let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
            let key = contents.trim();
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
        Err(Error::MissingApiKey)
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" });
        }
        if let Err(e) = url::Url::parse(&self.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            });
        }
        if self.regions.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "regions" });
        }
        if self.markets.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "markets" });
        }
        if self.markets.contains(',') {
            return Err(ConfigError::InvalidValue {
                field: "markets",
                reason: format!("only one market per scan is analysed, got {:?}", self.markets),
            });
        }
        if self.odds_format != "decimal" {
            return Err(ConfigError::InvalidValue {
                field: "odds_format",
                reason: format!("only \"decimal\" is supported, got {:?}", self.odds_format),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
