//! Chat domain: messages and the append-only chat log

pub mod log;
pub mod types;

pub use log::{ChatLog, LogEntry, TypingHandle};
pub use types::{Message, Sender};
