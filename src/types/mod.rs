//! Shared data structures for the assistant core
//!
//! This module defines the core types flowing through the pipeline:
//! - Reading: decoded sensor snapshot (telemetry channel output)
//! - Message / Role: conversation entries (router and fallback wire format)
//! - thresholds: PM2.5 band boundaries and vital-sign limits

mod message;
mod reading;
// Public because it contains the const sub-modules which must remain
// accessible as `types::thresholds::pm25_bands` etc.
pub mod thresholds;

pub use message::*;
pub use reading::*;
pub use thresholds::*;
