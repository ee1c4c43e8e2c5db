//! Remote completion fallback client
//!
//! When neither the FAQ nor a keyword rule matches, the router submits the
//! full ordered conversation to an external completion collaborator and
//! awaits a single reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::FallbackConfig;
use crate::types::Message;

/// Completion fallback errors
#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {0}")]
    ServerError(reqwest::StatusCode),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Seam for the completion collaborator.
///
/// Production uses [`HttpCompletionClient`]; tests script the outcome.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submit the ordered conversation history and await the reply text.
    async fn complete(&self, history: &[Message]) -> Result<String, FallbackError>;
}

// ============================================================================
// Wire Shapes
// ============================================================================

/// Request body: the ordered history as `{role, content}` pairs.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [Message],
}

/// Response body: a single `{message: {content}}` payload.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client for the completion collaborator.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCompletionClient {
    /// Build a client for the configured endpoint.
    pub fn new(config: &FallbackConfig) -> Result<Self, FallbackError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The configured endpoint, for logging.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionClient {
    async fn complete(&self, history: &[Message]) -> Result<String, FallbackError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&CompletionRequest { messages: history })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FallbackError::ServerError(resp.status()));
        }

        let body = resp.bytes().await?;
        let parsed: CompletionResponse = serde_json::from_slice(&body)?;
        Ok(parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let history = vec![Message::user("hi"), Message::assistant("hello")];
        let json = serde_json::to_string(&CompletionRequest { messages: &history })
            .expect("serialize request");
        assert_eq!(
            json,
            r#"{"messages":[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]}"#
        );
    }

    #[test]
    fn test_response_body_shape() {
        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"message":{"content":"the reply"}}"#)
                .expect("parse response");
        assert_eq!(parsed.message.content, "the reply");
    }

    #[test]
    fn test_malformed_response_is_rejected() {
        // Wrong nesting: content at the top level
        let err = serde_json::from_str::<CompletionResponse>(r#"{"content":"the reply"}"#);
        assert!(err.is_err());
    }
}
