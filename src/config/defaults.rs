//! Built-in default constants for the assistant core.
//!
//! Centralises the timing and endpoint values; every one of these can be
//! overridden from `assistant.toml`.

// ============================================================================
// Telemetry Channel
// ============================================================================

/// Default sensor WebSocket port — the device firmware serves on 81.
pub const TELEMETRY_PORT: u16 = 81;

/// Host used when neither config nor the embedding shell supplies one.
pub const TELEMETRY_HOST: &str = "localhost";

/// Delay before the single reconnection attempt scheduled after a closed
/// connection (seconds). Fixed backoff: no doubling, no attempt cap.
pub const RECONNECT_DELAY_SECS: u64 = 5;

/// Handshake timeout for a WebSocket connection attempt (seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Completion Fallback
// ============================================================================

/// Default completion endpoint — the dashboard shell's chat route.
pub const CHAT_ENDPOINT: &str = "http://localhost:3000/api/chat";

/// HTTP client timeout for completion requests (seconds).
pub const CHAT_TIMEOUT_SECS: u64 = 30;
