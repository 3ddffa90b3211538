//! Top-level application error

use crate::application::stdio::StdioError;
use crate::config::ConfigError;
use crate::infrastructure::backend::BackendError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Stdio(#[from] StdioError),

    #[error("failed to open log file {path:?}: {source}")]
    LogFile {
        path: std::path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
