//! Path utilities for surebet.
//!
//! All data lives under `~/.surebet/`:
//! - `~/.surebet/config.toml` - main configuration
//! - `~/.surebet/odds/` - cached odds payloads, one file per sport

use std::path::{Path, PathBuf};

use crate::infrastructure::config::CacheConfig;

/// Returns the surebet home directory (`~/.surebet/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".surebet")
}

/// Returns the default config file path (`~/.surebet/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default odds cache directory (`~/.surebet/odds/`).
pub fn default_cache_dir() -> PathBuf {
    home_dir().join("odds")
}

/// Cache directory from config, falling back to the default.
pub fn cache_dir(config: &CacheConfig) -> PathBuf {
    config.dir.clone().unwrap_or_else(default_cache_dir)
}

/// Config path to use: the explicit one, else the default if it exists.
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(default_config()).filter(|p| p.is_file()),
    }
}
