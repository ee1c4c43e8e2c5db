//! Assistant configuration structs and TOML loading
//!
//! Every timing and endpoint value the core uses is a field here. Each
//! struct implements `Default` with values matching the built-in constants,
//! so behaviour is unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the assistant core.
///
/// Load with `AssistantConfig::load()` which searches:
/// 1. `$AEROSENSE_CONFIG` env var
/// 2. `./assistant.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Telemetry channel settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Completion fallback settings
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Telemetry channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Use an encrypted connection (`wss://`). Set when the embedding page
    /// was itself loaded over an encrypted transport.
    #[serde(default)]
    pub secure: bool,

    /// Sensor device host. `None` falls back to the embedding host, or
    /// `localhost` when the shell supplies none.
    #[serde(default)]
    pub host: Option<String>,

    /// Sensor device WebSocket port
    #[serde(default = "default_telemetry_port")]
    pub port: u16,

    /// Delay before the reconnection attempt after a closed connection (seconds)
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_secs: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            secure: false,
            host: None,
            port: defaults::TELEMETRY_PORT,
            reconnect_delay_secs: defaults::RECONNECT_DELAY_SECS,
        }
    }
}

/// Completion fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Completion collaborator endpoint (absolute URL)
    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,

    /// HTTP timeout for completion requests (seconds)
    #[serde(default = "default_chat_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::CHAT_ENDPOINT.to_string(),
            request_timeout_secs: defaults::CHAT_TIMEOUT_SECS,
        }
    }
}

fn default_telemetry_port() -> u16 {
    defaults::TELEMETRY_PORT
}

fn default_reconnect_delay() -> u64 {
    defaults::RECONNECT_DELAY_SECS
}

fn default_chat_endpoint() -> String {
    defaults::CHAT_ENDPOINT.to_string()
}

fn default_chat_timeout() -> u64 {
    defaults::CHAT_TIMEOUT_SECS
}

// ============================================================================
// Loading
// ============================================================================

impl AssistantConfig {
    /// Load configuration using the standard search order, then apply
    /// environment-variable overrides.
    ///
    /// Never fails: a missing or malformed file logs a warning and falls
    /// back to the built-in defaults.
    pub fn load() -> Self {
        let mut config = Self::load_file_or_default();
        config.apply_env_overrides();
        config
    }

    fn load_file_or_default() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("AEROSENSE_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded assistant config from AEROSENSE_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from AEROSENSE_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "AEROSENSE_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./assistant.toml
        let local = PathBuf::from("assistant.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded assistant config from ./assistant.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./assistant.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No assistant.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

        if config.telemetry.reconnect_delay_secs == 0 {
            warn!("telemetry.reconnect_delay_secs is 0 — reconnection will retry immediately");
        }

        Ok(config)
    }

    /// Apply environment-variable overrides on top of loaded values.
    ///
    /// Precedence for each field: env var > TOML > default.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("AEROSENSE_WS_HOST").ok(),
            std::env::var("AEROSENSE_WS_PORT").ok(),
            std::env::var("AEROSENSE_CHAT_ENDPOINT").ok(),
        );
    }

    /// Override host, port, and endpoint from optional raw values.
    ///
    /// Split out from the env reads so tests can exercise precedence
    /// without mutating the process environment.
    fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
        endpoint: Option<String>,
    ) {
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            self.telemetry.host = Some(host);
        }
        if let Some(raw) = port {
            match raw.parse::<u16>() {
                Ok(port) => self.telemetry.port = port,
                Err(_) => warn!(value = %raw, "Ignoring non-numeric AEROSENSE_WS_PORT"),
            }
        }
        if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
            self.fallback.endpoint = endpoint;
        }
    }
}
