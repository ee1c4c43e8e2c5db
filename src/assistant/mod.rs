//! Conversational assistant core
//!
//! Resolves free-text user input against, in strict priority order:
//! an exact-FAQ substring matcher, keyword-triggered local responders
//! computed from the latest sensor reading, and finally a remote
//! completion fallback. Every submission appends exactly one user message
//! and one assistant message to the conversation log.

pub mod faq;
mod fallback;
mod log;
mod router;
mod rules;

pub use fallback::{CompletionBackend, FallbackError, HttpCompletionClient};
pub use log::ConversationLog;
pub use router::{IntentRouter, FALLBACK_FAILURE_REPLY};
pub use rules::KeywordRule;
