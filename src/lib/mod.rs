pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod tui;

pub use application::{controller, stdio};
pub use cli::{Cli, OutputFormat, RunMode};
pub use config::AppConfig;
pub use error::AppError;
pub use infrastructure::backend;

use application::controller::ChatController;
use infrastructure::backend::HttpChatBackend;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(endpoint) = cli.endpoint.clone() {
        config = config.with_endpoint(endpoint)?;
    }

    init_tracing(cli.mode, &config.log_file)?;
    info!("Starting lifeline-chat");
    debug!(
        mode = ?cli.mode,
        format = ?cli.format,
        config = ?cli.config,
        "CLI arguments parsed"
    );

    let backend = Arc::new(HttpChatBackend::from_config(&config)?);
    let endpoint = backend.url().to_string();
    info!(
        url = endpoint.as_str(),
        timeout_secs = config.request_timeout_secs,
        "Chat backend configured"
    );

    let mut controller = ChatController::new(backend);
    if let Some(welcome) = config.welcome() {
        controller.greet(welcome);
    }

    info!(mode = ?cli.mode, "Running client in selected mode");
    match cli.mode {
        RunMode::Tui => {
            tui::run_chat(&mut controller, &endpoint).await?;
        }
        RunMode::Stdio => {
            stdio::run(&mut controller, cli.format).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// The TUI owns the terminal, so its logs go to `log_file`; STDIO mode
/// logs to stderr and keeps stdout for the conversation.
fn init_tracing(mode: RunMode, log_file: &Path) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    // A subscriber may already be installed when embedded; keep it.
    let _ = match mode {
        RunMode::Tui => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .map_err(|source| AppError::LogFile {
                    path: log_file.to_path_buf(),
                    source,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        RunMode::Stdio => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
