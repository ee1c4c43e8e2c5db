//! Sensor reading snapshot and wire-frame decoding

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single decoded telemetry snapshot from the sensor device.
///
/// Produced only by the telemetry channel on successful decode of an
/// inbound frame. Immutable once created; a newer reading replaces an
/// older one wholesale, never field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Particulate matter 2.5 concentration (µg/m³)
    pub pm25: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Ambient temperature (°C)
    pub temperature: f64,
    /// Heart rate (BPM)
    pub heart_rate: f64,
    /// Blood oxygen saturation (%)
    pub spo2: f64,
    /// Instant the frame was decoded
    pub captured_at: DateTime<Utc>,
}

/// Raw JSON frame as emitted by the device firmware.
///
/// Field names are the firmware's contract: camelCase, all five present
/// and numeric. A frame missing any field fails decode and is dropped.
#[derive(Debug, Deserialize)]
struct WireFrame {
    pm25: f64,
    humidity: f64,
    temperature: f64,
    #[serde(rename = "heartRate")]
    heart_rate: f64,
    #[serde(rename = "spO2")]
    spo2: f64,
}

impl Reading {
    /// Decode a telemetry text frame, stamping the capture instant.
    ///
    /// The device does not timestamp frames; `captured_at` is the decode
    /// time on this side of the connection.
    pub fn decode(frame: &str) -> Result<Self, serde_json::Error> {
        let wire: WireFrame = serde_json::from_str(frame)?;
        Ok(Self {
            pm25: wire.pm25,
            humidity: wire.humidity,
            temperature: wire.temperature,
            heart_rate: wire.heart_rate,
            spo2: wire.spo2,
            captured_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_frame() {
        let frame = r#"{"pm25":14.25,"humidity":48.2,"temperature":22.5,"heartRate":72,"spO2":97.5}"#;
        let reading = Reading::decode(frame).expect("valid frame should decode");

        assert!((reading.pm25 - 14.25).abs() < f64::EPSILON);
        assert!((reading.humidity - 48.2).abs() < f64::EPSILON);
        assert!((reading.temperature - 22.5).abs() < f64::EPSILON);
        assert!((reading.heart_rate - 72.0).abs() < f64::EPSILON);
        assert!((reading.spo2 - 97.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        // No heartRate
        let frame = r#"{"pm25":14.25,"humidity":48.2,"temperature":22.5,"spO2":97.5}"#;
        assert!(Reading::decode(frame).is_err());
    }

    #[test]
    fn test_decode_rejects_non_numeric_value() {
        let frame =
            r#"{"pm25":"high","humidity":48.2,"temperature":22.5,"heartRate":72,"spO2":97.5}"#;
        assert!(Reading::decode(frame).is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Reading::decode("&&0108,72!!").is_err());
        assert!(Reading::decode("").is_err());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let frame = r#"{"pm25":1.0,"humidity":2.0,"temperature":3.0,"heartRate":4,"spO2":5.0,"firmware":"v2"}"#;
        assert!(Reading::decode(frame).is_ok());
    }
}
