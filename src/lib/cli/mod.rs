use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "lifeline-chat",
    version,
    about = "Terminal chat client for a supportive-conversation backend"
)]
pub struct Cli {
    /// Path to chat.toml (defaults to config/chat.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Backend base URL, overrides config and LIFELINE_ENDPOINT
    #[arg(long)]
    pub endpoint: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Output format for STDIO mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen interactive chat
    Tui,
    /// One message per stdin line, replies on stdout
    Stdio,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain terminal text, links as `label <url>`
    #[default]
    Text,
    /// HTML fragments, one `<div>` per message
    Html,
}
