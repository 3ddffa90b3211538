//! Append-only chat log with per-submission typing placeholders

use super::types::Message;
use std::fmt;
use uuid::Uuid;

/// Token identifying one typing placeholder.
///
/// Each submission gets its own handle, so completing one reply can never
/// remove the placeholder that belongs to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypingHandle(Uuid);

impl TypingHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TypingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visible row of the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Message(Message),
    Typing(TypingHandle),
}

impl LogEntry {
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            LogEntry::Message(message) => Some(message),
            LogEntry::Typing(_) => None,
        }
    }

    pub fn is_typing(&self) -> bool {
        matches!(self, LogEntry::Typing(_))
    }
}

/// Ordered, append-only sequence of messages.
///
/// Messages are only ever pushed; the sole removable entries are typing
/// placeholders, and only by the handle that created them.
#[derive(Debug, Default, Clone)]
pub struct ChatLog {
    entries: Vec<LogEntry>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the log
    pub fn push(&mut self, message: Message) {
        self.entries.push(LogEntry::Message(message));
    }

    /// Append a typing placeholder and return its handle
    pub fn show_typing(&mut self) -> TypingHandle {
        let handle = TypingHandle::new();
        self.entries.push(LogEntry::Typing(handle));
        handle
    }

    /// Remove the placeholder created for `handle`.
    ///
    /// Returns false when no such placeholder is present.
    pub fn remove_typing(&mut self, handle: TypingHandle) -> bool {
        let position = self
            .entries
            .iter()
            .position(|entry| *entry == LogEntry::Typing(handle));
        match position {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(LogEntry::as_message)
    }

    pub fn typing_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_typing()).count()
    }

    pub fn is_typing(&self) -> bool {
        self.typing_count() > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
