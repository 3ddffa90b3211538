//! Message types

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Never mutated once it is in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Only ever set on bot messages
    pub urgent: bool,
    /// `h:mm AM/PM` label taken when the message was appended
    pub time: String,
}

impl Message {
    pub fn user(text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            urgent: false,
            time: time.into(),
        }
    }

    pub fn bot(text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            urgent: false,
            time: time.into(),
        }
    }

    pub fn urgent_bot(text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            urgent: true,
            ..Self::bot(text, time)
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}
