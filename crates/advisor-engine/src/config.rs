//! Configuration for advisor.
//!
//! Stored as JSON. Every field has a default, so a partial file (or none at
//! all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::service::{
    ConversationService, HttpConversationService, MockConversationService, DEFAULT_ENDPOINT,
};

/// Directory holding the project-local configuration.
pub const CONFIG_DIR: &str = ".advisor";

/// Main configuration for advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Conversation endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Which conversation service to use.
    #[serde(default)]
    pub service: ServiceKind,

    /// How many UI ticks a notification stays on screen.
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: usize,

    /// File receiving log output while the terminal UI is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_toast_ticks() -> usize {
    // 5 seconds at the 4 Hz tick rate
    20
}

/// Conversation service selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// POST to `endpoint`.
    #[default]
    Http,
    /// Deterministic offline replies.
    Mock,
}

impl Config {
    /// Default config file location under `root`.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join("config.json")
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
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

    /// Build the conversation service this config selects.
    pub fn build_service(&self) -> Arc<dyn ConversationService> {
        match self.service {
            ServiceKind::Http => Arc::new(HttpConversationService::new(self.endpoint.clone())),
            ServiceKind::Mock => Arc::new(MockConversationService),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service: ServiceKind::default(),
            toast_ticks: default_toast_ticks(),
            log_file: None,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:3000/api/ai/conversation");
        assert_eq!(config.service, ServiceKind::Http);
        assert_eq!(config.toast_ticks, 20);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"service":"mock"}"#).unwrap();
        assert_eq!(config.service, ServiceKind::Mock);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::default_path(dir.path());

        let config = Config {
            endpoint: "https://example.com/api/ai/conversation".into(),
            log_file: Some(dir.path().join("advisor.log")),
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
