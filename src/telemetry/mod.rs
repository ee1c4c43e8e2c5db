//! Sensor telemetry ingestion
//!
//! Maintains the long-lived WebSocket connection to the sensor device and
//! exposes the most recent successfully decoded [`Reading`](crate::types::Reading).

mod channel;
mod endpoint;

pub use channel::{ChannelState, ChannelStats, SharedReading, TelemetryChannel};
pub use endpoint::telemetry_url;
