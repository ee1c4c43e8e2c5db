//! Assistant Configuration Module
//!
//! Provides configuration for the telemetry channel and completion fallback,
//! loaded from TOML files with environment-variable overrides.
//!
//! ## Loading Order
//!
//! 1. `AEROSENSE_CONFIG` environment variable (path to TOML file)
//! 2. `assistant.toml` in the current working directory
//! 3. Built-in defaults
//!
//! Individual fields can then be overridden with `AEROSENSE_WS_HOST`,
//! `AEROSENSE_WS_PORT`, and `AEROSENSE_CHAT_ENDPOINT`.
//!
//! ## Usage
//!
//! Call `config::init()` once at startup of the embedding shell, then
//! `config::get()` anywhere:
//!
//! ```ignore
//! // In the shell's startup path:
//! config::init(AssistantConfig::load());
//!
//! // Anywhere in the codebase:
//! let port = config::get().telemetry.port;
//! ```
//!
//! Components also accept explicit config values, so tests never need the
//! global.

mod assistant_config;
pub mod defaults;

pub use assistant_config::*;

use std::sync::OnceLock;

/// Global assistant configuration, initialized once at startup.
static ASSISTANT_CONFIG: OnceLock<AssistantConfig> = OnceLock::new();

/// Initialize the global assistant configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: AssistantConfig) {
    if ASSISTANT_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global assistant configuration.
///
/// Panics if `init()` has not been called. This is by design — a missing
/// config is a fatal startup error, not a recoverable condition.
pub fn get() -> &'static AssistantConfig {
    ASSISTANT_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    ASSISTANT_CONFIG.get().is_some()
}
