// Best-effort autosave: the current document markup is written to one
// fixed file on a recurring tick, and offered back exactly once at the
// next startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Fixed persistence interval. Not configurable; a failed write is simply
/// retried on the next tick.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum AutosaveError {
    #[error("failed to write autosave file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct AutosaveStore {
    path: PathBuf,
}

impl AutosaveStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored snapshot, if one exists. Never mutates or
    /// removes the file; declining a restore leaves it in place.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(snapshot) if !snapshot.is_empty() => Some(snapshot),
            Ok(_) => None,
            Err(_err) => {
                #[cfg(debug_assertions)]
                eprintln!(
                    "No autosave snapshot at {}: {}",
                    self.path.display(),
                    _err
                );
                None
            }
        }
    }

    pub fn save(&self, markup: &str) -> Result<(), AutosaveError> {
        fs::write(&self.path, markup).map_err(|source| AutosaveError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Tick body for `Task::perform`. Failures are reported to the caller,
/// which swallows them; autosave is best-effort by contract.
pub async fn persist(path: String, markup: String) -> Result<(), String> {
    AutosaveStore::new(&path)
        .save(&markup)
        .map_err(|err| err.to_string())
}

/// "HH:MM:SS" label for the status bar after a successful tick.
pub fn wall_clock_label() -> String {
    match time::format_description::parse("[hour]:[minute]:[second]") {
        Ok(format) => time::OffsetDateTime::now_utc()
            .format(&format)
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}
