//! Push-button driver over an `embedded-hal` input pin.
//!
//! The scan loop samples the level once per tick and uses it directly as
//! the click signal; there is no software debounce here.  A board that
//! needs one should filter the contact electrically.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::error::{Result, SensorError};

pub struct Button<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    /// `active_low`: the pin reads low while the button is held
    /// (switch to ground with a pull-up).
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Read the pressed state, surfacing pin errors.
    pub fn read(&mut self) -> Result<bool> {
        let low = self
            .pin
            .is_low()
            .map_err(|_| SensorError::GpioReadFailed)?;
        Ok(low == self.active_low)
    }

    /// Pressed state for the scan loop.  A failed read counts as released.
    pub fn is_pressed(&mut self) -> bool {
        match self.read() {
            Ok(pressed) => pressed,
            Err(e) => {
                warn!("button: {e}, treating as released");
                false
            }
        }
    }
}
