//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the clock, button, gas sensor and alarm output, exposing them
//! through [`ClockPort`], [`InputPort`] and [`OutputPort`].  Pins come in
//! as `embedded-hal` traits, so the same adapter runs against ESP-IDF
//! `PinDriver`s on target and mock pins on the host.

use embedded_hal::digital::{InputPin, OutputPin};
use log::info;

use crate::adapters::time::MonotonicClock;
use crate::app::ports::{ClockPort, InputPort, Millis, OutputPort};
use crate::detector::GasLevel;
use crate::drivers::button::Button;
use crate::drivers::buzzer::AlarmBuzzer;
use crate::fsm::Mode;
use crate::sensors::gas::GasSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<B, Z> {
    clock: MonotonicClock,
    button: Button<B>,
    gas: GasSensor,
    alarm: AlarmBuzzer<Z>,
    /// Mode currently on the display, for change logging.
    shown: Option<Mode>,
}

impl<B: InputPin, Z: OutputPin> HardwareAdapter<B, Z> {
    pub fn new(
        clock: MonotonicClock,
        button: Button<B>,
        gas: GasSensor,
        alarm: AlarmBuzzer<Z>,
    ) -> Self {
        Self {
            clock,
            button,
            gas,
            alarm,
            shown: None,
        }
    }

    /// Mode most recently pushed to the display.
    pub fn shown_mode(&self) -> Option<Mode> {
        self.shown
    }

    /// Whether the alarm output is currently driven.
    pub fn alarm_on(&self) -> bool {
        self.alarm.is_active()
    }
}

// ── ClockPort implementation ──────────────────────────────────

impl<B, Z> ClockPort for HardwareAdapter<B, Z> {
    fn now_millis(&self) -> Millis {
        self.clock.now_millis()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<B: InputPin, Z> InputPort for HardwareAdapter<B, Z> {
    fn button_pressed(&mut self) -> bool {
        self.button.is_pressed()
    }

    fn gas_reading(&mut self) -> GasLevel {
        self.gas.read()
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<B, Z: OutputPin> OutputPort for HardwareAdapter<B, Z> {
    fn show_mode(&mut self, mode: Mode) {
        // Page rendering belongs to the display driver; this board only
        // reports which page is up.
        if self.shown != Some(mode) {
            info!("display: {:?}", mode);
            self.shown = Some(mode);
        }
    }

    fn set_alarm(&mut self, active: bool) {
        self.alarm.set_active(active);
    }
}
