//! Analysis parameters passed explicitly into the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::selector::OutcomeAlignment;
use crate::domain::Stake;
use crate::error::ConfigError;

/// Configuration for arbitrage analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Total amount split across the outcomes of an arbitrable event.
    #[serde(default = "default_stake")]
    pub stake: Stake,

    /// Margin percentage at or above which an arbitrage is reported with top
    /// priority. Does not decide whether an event is arbitrable.
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,

    /// How outcomes are matched across bookmakers.
    #[serde(default)]
    pub alignment: OutcomeAlignment,
}

fn default_stake() -> Stake {
    Decimal::ONE_HUNDRED
}

fn default_threshold() -> Decimal {
    Decimal::TWO
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stake: default_stake(),
            threshold: default_threshold(),
            alignment: OutcomeAlignment::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject a non-positive stake or a negative threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stake <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "stake",
                reason: format!("must be positive, got {}", self.stake),
            });
        }
        if self.threshold < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "threshold",
                reason: format!("must not be negative, got {}", self.threshold),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_classic_settings() {
        let config = AnalysisConfig::default();
        assert_eq!(config.stake, dec!(100));
        assert_eq!(config.threshold, dec!(2));
        assert_eq!(config.alignment, OutcomeAlignment::Positional);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_stake() {
        let config = AnalysisConfig {
            stake: Decimal::ZERO,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "stake", .. })
        ));
    }

    #[test]
    fn rejects_negative_threshold() {
        let config = AnalysisConfig {
            threshold: dec!(-0.5),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "threshold",
                ..
            })
        ));
    }

    #[test]
    fn deserializes_partial_table() {
        let config: AnalysisConfig = toml::from_str("alignment = \"by_name\"").unwrap();
        assert_eq!(config.alignment, OutcomeAlignment::ByName);
        assert_eq!(config.stake, dec!(100));
    }
}
