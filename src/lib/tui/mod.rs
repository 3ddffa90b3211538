//! TUI module for terminal user interface using Ratatui
//!
//! Provides the full-screen chat view.

pub mod screens;
mod terminal;
pub mod theme;

pub use screens::run_chat;
pub use terminal::{TerminalSession, Tui};
