//! Chat view controller
//!
//! Owns the chat log and the input field and runs the send/receive cycle:
//! user message, typing placeholder, one backend call, then either the bot
//! reply or the fixed failure text.

use super::input::InputField;
use crate::constants::FAILURE_MESSAGE;
use crate::domain::{ChatLog, Message, TypingHandle};
use crate::infrastructure::backend::{BackendError, ChatBackend, ChatReply, ChatRequest};
use crate::render::{Clock, SystemClock, format_clock};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A submission waiting for its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub handle: TypingHandle,
    pub request: ChatRequest,
}

pub struct ChatController<B: ChatBackend> {
    backend: Arc<B>,
    clock: Arc<dyn Clock>,
    log: ChatLog,
    input: InputField,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            clock: Arc::new(SystemClock),
            log: ChatLog::new(),
            input: InputField::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn backend(&self) -> Arc<B> {
        self.backend.clone()
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    /// True while at least one reply is outstanding
    pub fn is_awaiting_reply(&self) -> bool {
        self.log.is_typing()
    }

    /// Append the session greeting as a bot message
    pub fn greet(&mut self, text: &str) {
        let time = self.time_label();
        self.log.push(Message::bot(text, time));
    }

    /// Record the user message and show a typing placeholder.
    ///
    /// Returns `None` without touching the log or the input field when
    /// `text` is blank.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let time = self.time_label();
        self.log.push(Message::user(text, time));
        self.input.clear();
        let handle = self.log.show_typing();
        debug!(%handle, "Awaiting reply");

        Some(PendingReply {
            handle,
            request: ChatRequest::new(text),
        })
    }

    /// Same as [`begin_submit`](Self::begin_submit) using the input field
    pub fn begin_submit_input(&mut self) -> Option<PendingReply> {
        let text = self.input.text().to_string();
        self.begin_submit(&text)
    }

    /// Resolve the submission identified by `handle`.
    ///
    /// Removes exactly that placeholder, then appends the reply or the
    /// failure text. Failures go to the diagnostic log only.
    pub fn complete(&mut self, handle: TypingHandle, outcome: Result<ChatReply, BackendError>) {
        if !self.log.remove_typing(handle) {
            warn!(%handle, "Reply arrived for an unknown or finished submission");
            return;
        }

        let time = self.time_label();
        match outcome {
            Ok(reply) => {
                let urgent = reply.is_urgent();
                info!(
                    urgent,
                    message_type = reply.message_type.as_deref(),
                    "Bot reply received"
                );
                let message = if urgent {
                    Message::urgent_bot(reply.response, time)
                } else {
                    Message::bot(reply.response, time)
                };
                self.log.push(message);
            }
            Err(err) => {
                error!(error = %err, kind = err.kind(), "Chat backend request failed");
                self.log.push(Message::bot(FAILURE_MESSAGE, time));
            }
        }
    }

    /// Run a full send/receive cycle for `text`.
    ///
    /// Returns false when the text was blank and nothing happened.
    pub async fn submit(&mut self, text: &str) -> bool {
        let Some(pending) = self.begin_submit(text) else {
            return false;
        };
        let outcome = self.backend.send(pending.request).await;
        self.complete(pending.handle, outcome);
        true
    }

    /// Submit whatever is in the input field
    pub async fn submit_input(&mut self) -> bool {
        let text = self.input.text().to_string();
        self.submit(&text).await
    }

    fn time_label(&self) -> String {
        format_clock(self.clock.now())
    }
}
