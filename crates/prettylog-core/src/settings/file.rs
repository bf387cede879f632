//! File-based settings (YAML or JSON)
//!
//! User-level settings live at `<config dir>/prettylog/config.yaml`
//! (~/.config on Linux, ~/Library/Application Support on macOS).

use std::fs;
use std::path::{Path, PathBuf};

use super::{Settings, SettingsError, SettingsResult};

impl Settings {
    /// Read settings from a `.yaml`/`.yml` or `.json` file
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                let content = fs::read_to_string(path)?;
                Self::from_yaml(&content)
            }
            Some("json") => {
                let content = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn from_yaml(content: &str) -> SettingsResult<Self> {
        serde_yaml::from_str(content).map_err(|e| SettingsError::Yaml(e.to_string()))
    }

    pub fn to_yaml(&self) -> SettingsResult<String> {
        serde_yaml::to_string(self).map_err(|e| SettingsError::Yaml(e.to_string()))
    }

    /// Location of the user-level settings file
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("prettylog").join("config.yaml")
    }

    /// User-level settings, or defaults if the file is absent or unreadable
    pub fn user() -> Self {
        let path = Self::user_config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::from_file(&path).unwrap_or_default()
    }
}
