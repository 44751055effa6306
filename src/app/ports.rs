//! Port traits — the hexagonal boundary between the controller and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (clock, button, gas sensor, display, buzzer, event
//! sinks) implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Ports are infallible on purpose: an input that cannot be read is a
//! platform fault, and the adapter is responsible for reporting it and
//! handing the core a fail-safe value.

use crate::detector::GasLevel;
use crate::fsm::Mode;

/// Millisecond clock reading.  Wraps at `u32::MAX`.
pub type Millis = u32;

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter.
pub trait ClockPort {
    /// Milliseconds since boot, wrapping at the native width.
    fn now_millis(&self) -> Millis;
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Instantaneous input reads, sampled once per fired tick.
pub trait InputPort {
    /// Current button level (`true` = pressed).
    fn button_pressed(&mut self) -> bool;

    /// Gas concentration proxy on the 0-100 scale.
    fn gas_reading(&mut self) -> GasLevel;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Actuation driven by the mode machine.  Both methods are called once
/// on every fired tick.
pub trait OutputPort {
    /// Tell the display which page / mode is current.
    fn show_mode(&mut self, mode: Mode);

    /// Drive the buzzer / alarm LED.  `true` exactly while in ALARM.
    fn set_alarm(&mut self, active: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
