use super::CONFIG_PATH;
use super::app::AppConfig;
use super::error::ConfigError;
use crate::constants::{ENDPOINT_ENV, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub endpoint: Option<String>,
    pub chat_path: Option<String>,
    pub welcome_message: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path.
///
/// An explicit path must exist. Without one the default path is tried and
/// built-in defaults are used when it is absent. `LIFELINE_ENDPOINT`
/// overrides the endpoint from the file.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let env_endpoint = std::env::var(ENDPOINT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    load_with_override(path, env_endpoint)
}

/// Same as [`load_config`] with the endpoint override passed in explicitly
pub fn load_with_override(
    path: Option<&Path>,
    endpoint_override: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut raw = match path {
        Some(path) => read_config(path)?,
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                RawConfig::default()
            }
            other => other?,
        },
    };

    if let Some(endpoint) = endpoint_override {
        debug!(endpoint = endpoint.as_str(), "Endpoint overridden from environment");
        raw.endpoint = Some(endpoint);
    }

    validate_and_build(raw)
}

/// Parse configuration text without touching the filesystem
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: PathBuf::from("<inline>"),
        source,
    })?;
    validate_and_build(raw)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading chat configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build(raw: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let endpoint = match raw.endpoint {
        Some(endpoint) if endpoint.trim().is_empty() => return Err(ConfigError::MissingEndpoint),
        Some(endpoint) => endpoint.trim().to_string(),
        None => defaults.endpoint,
    };
    let chat_path = match raw.chat_path {
        Some(path) if path.trim().is_empty() => return Err(ConfigError::MissingChatPath),
        Some(path) => path.trim().to_string(),
        None => defaults.chat_path,
    };
    if raw.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidTimeout);
    }
    let log_file = raw
        .log_file
        .map(|file| PathBuf::from(shellexpand::tilde(&file).into_owned()))
        .unwrap_or(defaults.log_file);

    Ok(AppConfig {
        endpoint,
        chat_path,
        welcome_message: raw.welcome_message.unwrap_or(defaults.welcome_message),
        request_timeout_secs: raw.request_timeout_secs,
        log_file,
    })
}
