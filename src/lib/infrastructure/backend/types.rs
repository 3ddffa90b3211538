//! Backend types - request, reply and error

use crate::constants::URGENT_MESSAGE_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful reply. Fields beyond these two are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub message_type: Option<String>,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            message_type: None,
        }
    }

    pub fn with_message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    /// True only for the crisis classification; anything else, including a
    /// missing field, is a normal reply.
    pub fn is_urgent(&self) -> bool {
        self.message_type.as_deref() == Some(URGENT_MESSAGE_TYPE)
    }
}

/// Backend errors. The controller treats every variant the same way.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("network error calling '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend '{url}' answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("backend '{url}' returned an unreadable reply: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub fn status(url: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Short tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::InvalidEndpoint { .. } => "invalid_endpoint",
            BackendError::Client { .. } => "client",
            BackendError::Network { source, .. } if source.is_timeout() => "timeout",
            BackendError::Network { .. } => "network",
            BackendError::Status { .. } => "status",
            BackendError::Decode { .. } => "decode",
        }
    }
}
