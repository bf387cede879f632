//! Settings errors

use std::path::PathBuf;

/// Errors that can occur while loading or preparing settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported settings file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to create log directory: {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create log file: {}", path.display())]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
