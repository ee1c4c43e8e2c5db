//! Sensor endpoint URL derivation

use crate::config::{defaults, TelemetryConfig};

/// Derive the sensor WebSocket URL from channel settings.
///
/// Scheme is `wss` iff the embedding transport is encrypted; host falls back
/// to [`defaults::TELEMETRY_HOST`] when the config supplies none.
pub fn telemetry_url(config: &TelemetryConfig) -> String {
    let scheme = if config.secure { "wss" } else { "ws" };
    let host = config.host.as_deref().unwrap_or(defaults::TELEMETRY_HOST);
    format!("{scheme}://{host}:{port}", port = config.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_explicit_settings() {
        let config = TelemetryConfig {
            secure: false,
            host: Some("192.168.4.1".to_string()),
            port: 81,
            ..TelemetryConfig::default()
        };
        assert_eq!(telemetry_url(&config), "ws://192.168.4.1:81");
    }

    #[test]
    fn test_secure_scheme() {
        let config = TelemetryConfig {
            secure: true,
            host: Some("sensor.example.com".to_string()),
            port: 443,
            ..TelemetryConfig::default()
        };
        assert_eq!(telemetry_url(&config), "wss://sensor.example.com:443");
    }

    #[test]
    fn test_defaults_applied_when_config_is_silent() {
        let config = TelemetryConfig::default();
        assert_eq!(
            telemetry_url(&config),
            format!("ws://localhost:{}", defaults::TELEMETRY_PORT)
        );
    }
}
