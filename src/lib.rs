//! AeroSense Assistant Core
//!
//! Telemetry ingestion and message routing for the AeroSense air-quality
//! dashboard assistant.
//!
//! ## Architecture
//!
//! - **Telemetry Channel**: persistent WebSocket connection to the sensor
//!   device with automatic fixed-delay reconnection; exposes the latest
//!   decoded reading
//! - **Intent Router**: resolves user text against FAQ entries, keyword
//!   rules computed from the latest reading, then a remote completion
//!   fallback
//! - **Conversation Log**: append-only record of the exchange, doubling as
//!   the context sent to the completion collaborator
//!
//! The core is embedded in the dashboard shell; it exposes no CLI or server
//! surface of its own.

pub mod assistant;
pub mod config;
pub mod telemetry;
pub mod types;

// Re-export configuration
pub use config::{AssistantConfig, FallbackConfig, TelemetryConfig};

// Re-export commonly used types
pub use types::{AirQualityBand, Message, Reading, Role};

// Re-export telemetry components
pub use telemetry::{ChannelState, ChannelStats, SharedReading, TelemetryChannel};

// Re-export assistant components
pub use assistant::{
    CompletionBackend, ConversationLog, FallbackError, HttpCompletionClient, IntentRouter,
    FALLBACK_FAILURE_REPLY,
};
