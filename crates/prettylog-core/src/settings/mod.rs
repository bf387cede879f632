//! Logger settings
//!
//! `Settings` holds the two knobs of the logger (whether records are appended
//! to a file, and where) and prepares the log directory via [`Settings::load`].
//! Settings can also be read from a YAML or JSON file, see [`Settings::from_file`].

mod error;
mod file;

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub use error::{SettingsError, SettingsResult};

/// Name of the append-only record file inside the log directory
pub const LOG_FILE_NAME: &str = "log.txt";

/// Default log directory
pub const DEFAULT_LOG_DIRECTORY: &str = "./logs/";

/// Timestamp format of probe file names
pub const PROBE_FILE_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Logger configuration
///
/// Fields are public and may be changed by the embedding application at any
/// time. A [`Logger`](crate::Logger) reads them without locking, so changes
/// must not race with active logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Append records to `<log_directory>/log.txt`
    pub file_logging_enabled: bool,
    /// Directory holding `log.txt` and probe files
    pub log_directory: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_logging_enabled: true,
            log_directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl Settings {
    /// Create settings with defaults (file logging on, `./logs/`)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.file_logging_enabled = enabled;
        self
    }

    pub fn with_log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_directory = dir.into();
        self
    }

    /// Path of the append-only record file
    pub fn log_file_path(&self) -> PathBuf {
        self.log_directory.join(LOG_FILE_NAME)
    }

    /// Path of the probe file created by a `load` at `now`
    pub fn probe_file_path(&self, now: DateTime<Local>) -> PathBuf {
        self.log_directory
            .join(format!("{}.log", now.format(PROBE_FILE_FORMAT)))
    }

    /// Prepare the log directory, printing a warning on failure
    ///
    /// Failure is not fatal: logging continues and file writes report their
    /// own errors. Safe to call repeatedly.
    pub fn load(&self) {
        if let Err(e) = self.try_load() {
            println!("{}", e);
        }
    }

    /// Prepare the log directory and return the probe file path
    ///
    /// Creates the directory (recursively) if absent, then opens a dated probe
    /// file in append mode and closes it right away. Existing files are never
    /// truncated.
    pub fn try_load(&self) -> SettingsResult<PathBuf> {
        self.try_load_at(Local::now())
    }

    fn try_load_at(&self, now: DateTime<Local>) -> SettingsResult<PathBuf> {
        create_directory(&self.log_directory)?;

        let probe = self.probe_file_path(now);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&probe)
            .map_err(|source| SettingsError::ProbeFailed {
                path: probe.clone(),
                source,
            })?;

        Ok(probe)
    }
}

fn create_directory(dir: &Path) -> SettingsResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| SettingsError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })
}
