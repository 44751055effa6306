//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | mode={:?} | gas={} detected={} count={} | \
                     gas_out={} | button={} | ticks={} transitions={}",
                    t.mode,
                    t.gas_reading,
                    t.gas_detected,
                    t.hazard_count,
                    t.gas_out_ticks,
                    t.button_pressed,
                    t.tick_count,
                    t.transitions,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::GasDetected => {
                warn!("GAS | hazard detected");
            }
            AppEvent::GasCleared => {
                info!("GAS | hazard cleared");
            }
            AppEvent::Started(mode) => {
                info!("START | initial_mode={:?}", mode);
            }
        }
    }
}
