// Shelfmark store settings
// Connection settings for the remote record store: loading, saving, and
// environment overrides. Stored as a JSON file; a missing file yields
// defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::errors::SettingsError;

const ENV_STORE_URL: &str = "SHELFMARK_STORE_URL";
const ENV_API_KEY: &str = "SHELFMARK_API_KEY";

/// Connection settings for the remote record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Base URL of the platform, e.g. `https://abc.example.co`.
    pub base_url: String,
    /// Public API key presented alongside the user's access token.
    pub api_key: String,
    /// Table holding bookmark rows.
    pub table: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            table: "bookmarks".to_string(),
        }
    }
}

impl StoreSettings {
    /// Loads settings from a JSON file.
    ///
    /// If the file does not exist, returns default settings.
    /// If the file exists but is malformed, returns a serialization error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read settings file: {}", e)))?;
        serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse settings file: {}", e))
        })
    }

    /// Saves the settings as pretty-printed JSON, creating parent
    /// directories if they don't exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create settings directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write settings file: {}", e)))
    }

    /// Applies environment overrides, for deployments configured without a
    /// settings file.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ENV_STORE_URL) {
            self.base_url = url;
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            self.api_key = key;
        }
        self
    }
}
