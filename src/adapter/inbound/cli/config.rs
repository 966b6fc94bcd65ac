//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use super::{output, paths};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::odds_api::API_KEY_ENV;
use crate::infrastructure::config::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the config at `path`, the default file if it exists, or defaults.
///
/// # Errors
///
/// Returns read, parse and validation errors of the chosen file.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match paths::resolve_config(path) {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Set {API_KEY_ENV} environment variable"));
    output::note("3. Run: surebet scan");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;

    if output::is_json() {
        output::json_output(serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    match paths::resolve_config(path) {
        Some(path) => output::field("Path", path.display()),
        None => output::field("Path", "(defaults)"),
    }

    output::section("Analysis");
    output::field("Stake", config.analysis.stake);
    output::field("Threshold", format!("{}%", config.analysis.threshold));
    output::field("Alignment", format!("{:?}", config.analysis.alignment));

    output::section("Odds API");
    output::field("URL", &config.odds_api.base_url);
    output::field("Regions", &config.odds_api.regions);
    output::field("Markets", &config.odds_api.markets);
    output::field("Timeout", format!("{}ms", config.odds_api.timeout_ms));
    output::field("Attempts", config.odds_api.retry_max_attempts);
    if config.odds_api.api_key().is_ok() {
        output::success("API key found");
    } else {
        output::warning(&format!("API key not set ({API_KEY_ENV})"));
    }

    output::section("Cache");
    output::field("Directory", paths::cache_dir(&config.cache).display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    output::section("Config Validation");
    let Some(path) = paths::resolve_config(path) else {
        output::note("No config file, defaults apply");
        output::success("Defaults are valid");
        return Ok(());
    };

    output::field("Path", path.display());
    Config::load(&path)?;
    output::success("Config file is valid");
    output::field(
        "Next",
        format!("surebet config show -c {}", path.display()),
    );

    Ok(())
}
