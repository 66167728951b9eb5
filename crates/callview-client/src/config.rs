//! Configuration for the conversation log client.
//!
//! The hosting environment supplies the backend location; everything else
//! has defaults matching the original call assistant backend.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "CALLVIEW_BASE_URL";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the call assistant backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the conversation log endpoint.
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// HTTP timeout in seconds for the fetch.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".into()
}

fn default_log_path() -> String {
    "/conversation-log".into()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_path: default_log_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    /// Load configuration from a file, applying the environment override.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let mut config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.apply_env_override();
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    ///
    /// The environment override applies either way.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.apply_env_override();
            Ok(config)
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Full URL of the conversation log endpoint.
    pub fn log_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.log_path
        )
    }

    fn apply_env_override(&mut self) {
        self.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
    }

    fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }
}

/// Errors that can occur loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// JSON parse error.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}
