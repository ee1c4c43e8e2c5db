//! Intent resolution pipeline
//!
//! Given raw user text and the latest reading (possibly absent), produces
//! exactly one assistant response by checking, in strict priority order:
//! exact FAQ match, keyword rule match, then the remote completion
//! fallback. Every submission appends exactly one user message and one
//! assistant message to the conversation log — even when the fallback
//! fails.

use tracing::{debug, warn};

use super::fallback::CompletionBackend;
use super::faq;
use super::log::ConversationLog;
use super::rules::KeywordRule;
use crate::telemetry::SharedReading;
use crate::types::Message;

/// Fixed user-visible reply when the completion collaborator fails.
pub const FALLBACK_FAILURE_REPLY: &str = "Error fetching response. Try again.";

/// Routes user submissions to a response source and records the exchange.
///
/// The router holds no resolution state of its own — each call is a
/// function of the input text, the latest reading, and the history so far,
/// plus the append side effects on the log.
pub struct IntentRouter<B: CompletionBackend> {
    log: ConversationLog,
    backend: B,
    latest: SharedReading,
}

impl<B: CompletionBackend> IntentRouter<B> {
    /// Create a router over a completion backend and the telemetry
    /// channel's latest-reading cell.
    pub fn new(backend: B, latest: SharedReading) -> Self {
        Self {
            log: ConversationLog::new(),
            backend,
            latest,
        }
    }

    /// The conversation so far, in append order.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Handle one user submission.
    ///
    /// Appends the user message verbatim before any resolution runs, so a
    /// fallback request always includes its own triggering message. Returns
    /// the appended assistant message, or `None` for whitespace-only input
    /// (which appends nothing).
    pub async fn handle_submission(&mut self, input: &str) -> Option<Message> {
        if input.trim().is_empty() {
            return None;
        }

        self.log.append(Message::user(input));

        let lowered = input.to_lowercase();
        let reply = if let Some(answer) = faq::find_match(input) {
            debug!("Resolved submission from FAQ");
            answer.to_string()
        } else if let Some(rule) = KeywordRule::match_input(&lowered) {
            debug!(rule = ?rule, "Resolved submission from keyword rule");
            let reading = self.latest.read().await.clone();
            rule.respond(reading.as_ref())
        } else {
            match self.backend.complete(self.log.messages()).await {
                Ok(content) => content,
                Err(e) => {
                    // Recovered locally: the failure reply is appended like
                    // any other assistant message so the log stays
                    // consistent with what was shown.
                    warn!(error = %e, "Completion fallback failed");
                    FALLBACK_FAILURE_REPLY.to_string()
                }
            }
        };

        self.log.append(Message::assistant(reply));
        self.log.last().cloned()
    }
}
