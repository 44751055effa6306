//! Asymmetric debounce for the hazard signal: slow to raise, instant to
//! clear.
//!
//! Each update applies two rules, in order:
//!
//! 1. **Accumulate** — a hazardous reading bumps the counter (saturating at
//!    the threshold).  Once the counter reaches the threshold the result
//!    is `true`.
//! 2. **Clear** — a clear reading zeroes the counter and forces the result
//!    to `false`, whatever rule 1 concluded.
//!
//! A hazardous reading that has not yet filled the counter yields `false`.
//! Any single clear reading wins, so a signal hovering around the
//! threshold never latches the alarm.

use log::{debug, info};

use super::GasLevel;
use crate::config::SystemConfig;

/// Debounced hazard detector.  Owns the consecutive-hazard counter.
#[derive(Debug, Clone)]
pub struct DebouncedGasDetector {
    hazard_threshold: GasLevel,
    debounce_ticks: u8,
    /// Consecutive hazardous readings, in `0..=debounce_ticks`.
    count: u8,
    detected: bool,
}

impl DebouncedGasDetector {
    pub fn new(hazard_threshold: GasLevel, debounce_ticks: u8) -> Self {
        Self {
            hazard_threshold,
            debounce_ticks,
            count: 0,
            detected: false,
        }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.gas_hazard_threshold, config.gas_debounce_ticks)
    }

    /// Feed one tick's reading and return whether gas is detected.
    pub fn update(&mut self, reading: GasLevel) -> bool {
        let hazardous = self.is_hazardous(reading);
        let mut detected = false;

        // Rule 1: accumulate.
        if hazardous && self.count < self.debounce_ticks {
            self.count += 1;
        }
        if self.count >= self.debounce_ticks {
            detected = true;
        }

        // Rule 2: clear.
        if !hazardous {
            self.count = 0;
            detected = false;
        }

        if detected != self.detected {
            if detected {
                info!(
                    "gas: hazard confirmed after {} ticks (reading {})",
                    self.count, reading
                );
            } else {
                info!("gas: hazard cleared (reading {})", reading);
            }
        } else if hazardous && !detected {
            debug!(
                "gas: hazardous reading {} ({}/{})",
                reading, self.count, self.debounce_ticks
            );
        }

        self.detected = detected;
        detected
    }

    /// Whether a reading is on the hazardous side of the threshold.
    pub fn is_hazardous(&self, reading: GasLevel) -> bool {
        reading >= self.hazard_threshold
    }

    /// Current consecutive-hazard count.
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Result of the most recent update.
    pub fn detected(&self) -> bool {
        self.detected
    }
}
