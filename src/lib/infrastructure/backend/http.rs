//! HTTP chat backend

use super::traits::ChatBackend;
use super::types::{BackendError, ChatReply, ChatRequest};
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

/// Posts each message as JSON to `{endpoint}{chat_path}`
#[derive(Clone)]
pub struct HttpChatBackend {
    url: String,
    http: Client,
}

impl HttpChatBackend {
    /// `timeout` of `None` waits for the backend indefinitely.
    pub fn new(
        endpoint: &str,
        chat_path: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let url = build_url(endpoint, chat_path);
        let parsed =
            Url::parse(&url).map_err(|e| BackendError::invalid_endpoint(endpoint, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::invalid_endpoint(
                endpoint,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|source| BackendError::Client { source })?;

        Ok(Self { url, http })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::new(&config.endpoint, &config.chat_path, config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply, BackendError> {
        info!(
            url = self.url.as_str(),
            chars = request.message.chars().count(),
            "Sending message to chat backend"
        );

        let response = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::network(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::status(&self.url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::network(&self.url, e))?;
        let reply: ChatReply =
            serde_json::from_str(&body).map_err(|e| BackendError::decode(&self.url, e))?;

        debug!(
            message_type = reply.message_type.as_deref(),
            "Received reply from chat backend"
        );
        Ok(reply)
    }
}

/// Join endpoint and path with exactly one slash between them
fn build_url(endpoint: &str, path: &str) -> String {
    let base = endpoint.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    format!("{base}/{path}")
}
