//! Backend traits

use super::types::{BackendError, ChatReply, ChatRequest};
use async_trait::async_trait;

/// Anything that can answer a single chat message
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one message and wait for the reply. No retries are attempted.
    async fn send(&self, request: ChatRequest) -> Result<ChatReply, BackendError>;
}
