//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::detector::GasLevel;
use crate::fsm::Mode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries initial mode).
    Started(Mode),

    /// The mode machine changed mode on this tick.
    ModeChanged { from: Mode, to: Mode },

    /// The debounced detector started reporting gas.
    GasDetected,

    /// The debounced detector stopped reporting gas.
    GasCleared,

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryData {
    pub mode: Mode,
    pub gas_reading: GasLevel,
    pub gas_detected: bool,
    pub hazard_count: u8,
    pub gas_out_ticks: u8,
    pub button_pressed: bool,
    pub tick_count: u64,
    pub transitions: u64,
}
