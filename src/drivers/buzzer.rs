//! Alarm output driver (piezo buzzer and/or alarm LED on one GPIO).

use embedded_hal::digital::OutputPin;
use log::{info, warn};

pub struct AlarmBuzzer<P> {
    pin: P,
    active: bool,
}

impl<P: OutputPin> AlarmBuzzer<P> {
    /// Wrap the pin and drive it low.
    pub fn new(mut pin: P) -> Self {
        if pin.set_low().is_err() {
            warn!("buzzer: initial set_low failed");
        }
        Self { pin, active: false }
    }

    /// Drive the alarm.  The pin is rewritten on every call so a glitched
    /// output recovers on the next tick.
    pub fn set_active(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            warn!("buzzer: GPIO write failed (on={})", on);
            return;
        }
        if on != self.active {
            info!("buzzer: {}", if on { "ON" } else { "off" });
        }
        self.active = on;
    }

    /// Last successfully written state.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
