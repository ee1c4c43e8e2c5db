//! Telemetry channel with automatic reconnection
//!
//! Owns the WebSocket connection to the sensor device. Inbound text frames
//! are decoded into [`Reading`]s; the latest decoded reading replaces the
//! previous one (last-writer-wins, no buffering, no history). Malformed
//! frames are dropped without surfacing an error — the channel stays
//! resilient to partial or garbled device output.
//!
//! Connection loss is never fatal: every closure not initiated by
//! [`stop()`](TelemetryChannel::stop) schedules exactly one reconnection
//! attempt after a fixed delay, indefinitely.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::endpoint;
use crate::config::{defaults, TelemetryConfig};
use crate::types::Reading;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Shared cell holding the most recent decoded reading.
///
/// Written by the channel task, read by the router and the dashboard shell.
/// Readers always see the most recently completed write — replacement is a
/// single value swap under the lock.
pub type SharedReading = Arc<RwLock<Option<Reading>>>;

// ============================================================================
// Channel State
// ============================================================================

/// Connection lifecycle state, observable through a watch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// A connection attempt is in flight
    Connecting,
    /// Handshake succeeded; frames are being consumed
    Open,
    /// Connection lost or torn down
    Closed,
}

impl std::fmt::Display for ChannelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelState::Connecting => write!(f, "Connecting"),
            ChannelState::Open => write!(f, "Open"),
            ChannelState::Closed => write!(f, "Closed"),
        }
    }
}

/// Counters accumulated over the channel task's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Frames successfully decoded into readings
    pub frames_received: u64,
    /// Frames dropped as malformed
    pub frames_dropped: u64,
    /// Reconnection attempts made after lost connections
    pub reconnect_attempts: u64,
}

// ============================================================================
// Telemetry Channel
// ============================================================================

/// Handle to the running telemetry channel task.
///
/// One channel exists per assistant-view lifetime: created with
/// [`start()`](Self::start) on mount, torn down with
/// [`stop()`](Self::stop) on unmount.
pub struct TelemetryChannel {
    latest: SharedReading,
    state_rx: watch::Receiver<ChannelState>,
    cancel: CancellationToken,
    task: JoinHandle<ChannelStats>,
}

impl TelemetryChannel {
    /// Spawn the connection task and return its handle.
    ///
    /// The task connects to the URL derived from `config` (scheme, host,
    /// port per [`endpoint::telemetry_url`]) and keeps reconnecting until
    /// [`stop()`](Self::stop).
    pub fn start(config: TelemetryConfig) -> Self {
        let latest: SharedReading = Arc::new(RwLock::new(None));
        let (state_tx, state_rx) = watch::channel(ChannelState::Connecting);
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run_channel(
            config,
            Arc::clone(&latest),
            state_tx,
            cancel.clone(),
        ));

        Self {
            latest,
            state_rx,
            cancel,
            task,
        }
    }

    /// Clone of the shared latest-reading cell, for wiring into the router.
    pub fn latest_cell(&self) -> SharedReading {
        Arc::clone(&self.latest)
    }

    /// The most recent successfully decoded reading, if any frame has
    /// arrived yet. Stays populated across reconnection gaps
    /// (stale-but-present rather than surfacing a hole).
    pub async fn latest(&self) -> Option<Reading> {
        self.latest.read().await.clone()
    }

    /// Current connection state.
    pub fn state(&self) -> ChannelState {
        *self.state_rx.borrow()
    }

    /// Subscribe to connection state transitions.
    pub fn state_changes(&self) -> watch::Receiver<ChannelState> {
        self.state_rx.clone()
    }

    /// Caller-initiated teardown: closes the active connection and
    /// suppresses the reconnection that would otherwise follow.
    ///
    /// Returns the channel's lifetime counters.
    pub async fn stop(self) -> ChannelStats {
        self.cancel.cancel();
        self.task.await.unwrap_or_default()
    }
}

// ============================================================================
// Connection Task
// ============================================================================

async fn run_channel(
    config: TelemetryConfig,
    latest: SharedReading,
    state_tx: watch::Sender<ChannelState>,
    cancel: CancellationToken,
) -> ChannelStats {
    let url = endpoint::telemetry_url(&config);
    let mut stats = ChannelStats::default();

    loop {
        let _ = state_tx.send(ChannelState::Connecting);

        let connect = tokio::select! {
            () = cancel.cancelled() => break,
            result = tokio::time::timeout(
                Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
                connect_async(url.as_str()),
            ) => result,
        };

        match connect {
            Ok(Ok((stream, _response))) => {
                let _ = state_tx.send(ChannelState::Open);
                info!(url = %url, "Connected to sensor device");
                pump_frames(stream, &latest, &cancel, &mut stats).await;
            }
            Ok(Err(e)) => {
                warn!(url = %url, error = %e, "Telemetry connection failed");
            }
            Err(_) => {
                warn!(
                    url = %url,
                    timeout_secs = defaults::CONNECT_TIMEOUT_SECS,
                    "Telemetry connection attempt timed out"
                );
            }
        }

        let _ = state_tx.send(ChannelState::Closed);
        if cancel.is_cancelled() {
            break;
        }

        // Exactly one reconnection attempt per closure event, after a fixed
        // delay. stop() aborts the wait.
        tokio::select! {
            () = cancel.cancelled() => break,
            () = tokio::time::sleep(Duration::from_secs(config.reconnect_delay_secs)) => {
                stats.reconnect_attempts += 1;
                warn!(
                    attempt = stats.reconnect_attempts,
                    delay_secs = config.reconnect_delay_secs,
                    "Reconnecting to sensor device"
                );
            }
        }
    }

    let _ = state_tx.send(ChannelState::Closed);
    stats
}

/// Consume frames from an open connection until it closes or teardown.
async fn pump_frames(
    mut stream: WsStream,
    latest: &SharedReading,
    cancel: &CancellationToken,
    stats: &mut ChannelStats,
) {
    loop {
        let frame = tokio::select! {
            () = cancel.cancelled() => break,
            frame = stream.next() => frame,
        };

        match frame {
            Some(Ok(WsMessage::Text(text))) => match Reading::decode(&text) {
                Ok(reading) => {
                    stats.frames_received += 1;
                    *latest.write().await = Some(reading);
                }
                Err(e) => {
                    // Malformed frames are dropped; the previous reading
                    // stays authoritative.
                    stats.frames_dropped += 1;
                    warn!(error = %e, "Dropping malformed telemetry frame");
                }
            },
            Some(Ok(WsMessage::Close(_))) => {
                info!("Sensor device closed the connection");
                return;
            }
            // Binary frames and ping/pong control traffic carry no readings.
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                // Logged only; the close sequence that follows drives recovery.
                warn!(error = %e, "Telemetry transport error");
                return;
            }
            None => return,
        }
    }

    // Only reached on caller-initiated teardown: close politely before the
    // stream is dropped.
    let _ = stream.close(None).await;
}
