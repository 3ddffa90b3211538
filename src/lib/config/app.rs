use super::error::ConfigError;
use crate::constants::{DEFAULT_CHAT_PATH, DEFAULT_ENDPOINT, DEFAULT_LOG_FILE, WELCOME_MESSAGE};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from chat.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, e.g. `http://127.0.0.1:5000`
    pub endpoint: String,
    /// Route appended to `endpoint`
    pub chat_path: String,
    /// Greeting shown when a session starts; empty disables it
    pub welcome_message: String,
    /// Optional upper bound for one backend call
    pub request_timeout_secs: Option<u64>,
    /// Where logs go while the TUI owns the terminal
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            welcome_message: WELCOME_MESSAGE.to_string(),
            request_timeout_secs: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Replace the endpoint, e.g. from a CLI flag
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        self.endpoint = endpoint.trim().to_string();
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn welcome(&self) -> Option<&str> {
        let message = self.welcome_message.trim();
        (!message.is_empty()).then_some(message)
    }
}
