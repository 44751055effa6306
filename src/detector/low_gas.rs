//! Instantaneous "gas is back to safe levels" check.

use super::GasLevel;
use crate::config::SystemConfig;

/// Stateless threshold comparison.  No filtering: the ALARM state builds
/// its own streak counter on top of this.
#[derive(Debug, Clone, Copy)]
pub struct LowGasDetector {
    safe_threshold: GasLevel,
}

impl LowGasDetector {
    pub fn new(safe_threshold: GasLevel) -> Self {
        Self { safe_threshold }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.gas_safe_threshold)
    }

    /// `true` when the reading is strictly below the safe threshold.
    pub fn is_low(&self, reading: GasLevel) -> bool {
        reading < self.safe_threshold
    }
}
