//! Command-line interface definitions.
//!
//! Defines the CLI structure for the surebet application using `clap`.
//! `-v` is counted: it widens the report (0 shows only arbitrages above the
//! threshold, 1 every arbitrage, 2 best prices for every event) and from
//! three upward also raises the log level.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::application::arbitrage::{AnalysisConfig, OutcomeAlignment};

/// Sports bookmaker arbitrage finder
#[derive(Parser, Debug)]
#[command(name = "surebet")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase report verbosity (repeat up to -vvvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the surebet CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch odds for every sport (or the given ones) and report arbitrages
    Scan(ScanArgs),

    /// Analyse odds files already on disk, without touching the network
    Analyze(AnalyzeArgs),

    /// List the sports offered by the odds feed
    Sports(ConfigPathArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `surebet config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional config file path shared by most commands.
#[derive(Parser, Debug, Default)]
pub struct ConfigPathArg {
    /// Configuration file (defaults to ~/.surebet/config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Command-line overrides of the `[analysis]` section.
#[derive(Parser, Debug, Default, Clone)]
pub struct AnalysisArgs {
    /// Total amount to split across outcomes
    #[arg(long)]
    pub stake: Option<Decimal>,

    /// Margin percentage that marks an arbitrage as top priority
    #[arg(long)]
    pub threshold: Option<Decimal>,

    /// Match outcomes across bookmakers by name instead of position
    #[arg(long)]
    pub by_name: bool,
}

impl AnalysisArgs {
    /// Apply the overrides on top of `config`.
    #[must_use]
    pub fn apply(&self, mut config: AnalysisConfig) -> AnalysisConfig {
        if let Some(stake) = self.stake {
            config.stake = stake;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.by_name {
            config.alignment = OutcomeAlignment::ByName;
        }
        config
    }
}

/// Arguments for `scan`.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Sport keys to scan (default: every sport the feed lists)
    #[arg(short, long = "sport", value_name = "KEY")]
    pub sports: Vec<String>,

    /// Refetch odds even when a cached file exists
    #[arg(long)]
    pub refresh: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments for `analyze`.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Odds payload files, as stored in the cache
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub config: ConfigPathArg,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}
