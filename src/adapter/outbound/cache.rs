//! Filesystem cache of raw odds payloads.
//!
//! Layout: one `<sport>.json` file per sport under the cache directory. A
//! file that exists is trusted as-is; delete it (or scan with `--refresh`)
//! to fetch fresh odds.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::SportKey;
use crate::error::Result;
use crate::port::OddsCache;

/// [`OddsCache`] backed by JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    /// Cache rooted at `dir`. The directory is created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the payload for `sport`.
    #[must_use]
    pub fn path_for(&self, sport: &SportKey) -> PathBuf {
        let name: String = sport
            .as_str()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl OddsCache for JsonFileCache {
    fn load(&self, sport: &SportKey) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(sport)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, sport: &SportKey, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(sport);
        fs::write(&path, payload)?;
        debug!(path = %path.display(), bytes = payload.len(), "Cached odds");
        Ok(())
    }

    fn remove(&self, sport: &SportKey) -> Result<bool> {
        match fs::remove_file(self.path_for(sport)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
