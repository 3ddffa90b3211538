//! TUI Chat interface module
//!
//! - state.rs: view-only state (scroll, spinner, status line)
//! - ui.rs: rendering of the log, input and chrome
//! - input.rs: key handling
//! - runner.rs: event loop tying the controller to the terminal

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{InputAction, handle_input};
pub use runner::run_chat;
pub use state::{ChatState, REPLY_FAILED_STATUS};
pub use ui::ChatUI;
