//! Analog gas sensor driver (MQ-series module).
//!
//! Reads the sensor's analog output through an ESP32-S3 ADC channel and
//! scales the raw count linearly onto the 0-100 gas scale.  No
//! calibration curve is applied: 100 means "ADC at full scale".
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::detector::{GAS_SCALE_MAX, GasLevel};

#[cfg(not(target_os = "espidf"))]
static SIM_GAS_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject the raw ADC count the simulated sensor will report.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_gas_adc(raw: u16) {
    SIM_GAS_ADC.store(raw, Ordering::Relaxed);
}

/// Map a raw count onto the 0-100 scale, clamping above full scale.
pub fn scale_to_level(raw: u16, full_scale: u16) -> GasLevel {
    if full_scale == 0 {
        return 0;
    }
    let scaled = u32::from(raw) * u32::from(GAS_SCALE_MAX) / u32::from(full_scale);
    scaled.min(u32::from(GAS_SCALE_MAX)) as GasLevel
}

pub struct GasSensor {
    full_scale: u16,
    last_raw: u16,
}

impl GasSensor {
    pub fn new(full_scale: u16) -> Self {
        Self {
            full_scale,
            last_raw: 0,
        }
    }

    /// Sample once and return the scaled level.
    pub fn read(&mut self) -> GasLevel {
        self.last_raw = self.read_adc();
        scale_to_level(self.last_raw, self.full_scale)
    }

    /// A failed conversion repeats the previous count rather than
    /// reporting clean air.
    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        use crate::drivers::hw_init;
        match hw_init::adc1_read(hw_init::ADC1_CH_GAS) {
            Some(raw) => raw,
            None => {
                log::warn!(
                    "gas: {}, holding last count {}",
                    crate::error::SensorError::AdcReadFailed,
                    self.last_raw
                );
                self.last_raw
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_GAS_ADC.load(Ordering::Relaxed)
    }
}
