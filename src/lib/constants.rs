//! Application constants
//!
//! Single source of truth for paths, wire values and fixed texts.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/chat.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding the backend endpoint
pub const ENDPOINT_ENV: &str = "LIFELINE_ENDPOINT";

/// Default backend endpoint (scheme, host and port only)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Default chat route on the backend
pub const DEFAULT_CHAT_PATH: &str = "/api/chat";

/// Default log file used while the TUI owns the terminal
pub const DEFAULT_LOG_FILE: &str = "lifeline-chat.log";

/// Classification value that marks a reply as urgent
pub const URGENT_MESSAGE_TYPE: &str = "Potential Suicide Post";

/// Bot text shown when the backend could not be reached or understood
pub const FAILURE_MESSAGE: &str = "I'm sorry, I couldn't process your message. Please try again.";

/// Greeting appended when a session starts
pub const WELCOME_MESSAGE: &str = "Hello! I'm here to chat with you. How are you feeling today?";
