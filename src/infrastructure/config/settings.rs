//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to its defaults. The odds API key is taken from the
//! environment, never from the file itself.
//!
//! # Example
//!
//! ```no_run
//! use surebet::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::logging::LoggingConfig;
use super::odds_api::OddsApiConfig;
use crate::application::arbitrage::AnalysisConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stake, reporting threshold and outcome alignment.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Odds feed connection settings.
    #[serde(default)]
    pub odds_api: OddsApiConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a non-positive stake)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "format",
                    reason: format!("expected \"pretty\" or \"json\", got {other:?}"),
                }
                .into());
            }
        }
        self.analysis.validate()?;
        self.odds_api.validate()?;
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Render the effective configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::arbitrage::OutcomeAlignment;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.analysis.stake, dec!(100));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
            [logging]
            level = "debug"
            format = "json"

            [analysis]
            stake = 250
            threshold = 1.5
            alignment = "by_name"

            [odds_api]
            regions = "uk,eu"
            retry_max_attempts = 5

            [cache]
            dir = "/tmp/odds"
        "#;

        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.analysis.stake, dec!(250));
        assert_eq!(config.analysis.threshold, dec!(1.5));
        assert_eq!(config.analysis.alignment, OutcomeAlignment::ByName);
        assert_eq!(config.odds_api.regions, "uk,eu");
        assert_eq!(config.odds_api.retry_max_attempts, 5);
        assert_eq!(config.odds_api.markets, "h2h");
        assert_eq!(
            config.cache.dir.as_deref(),
            Some(std::path::Path::new("/tmp/odds"))
        );
    }

    #[test]
    fn rejects_negative_stake() {
        let err = Config::parse_toml("[analysis]\nstake = -5").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "stake", .. })
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::parse_toml("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "format",
                ..
            })
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::parse_toml("[analysis\nstake = 1").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn effective_config_round_trips_through_toml() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(Config::parse_toml(&rendered).unwrap(), config);
    }
}
