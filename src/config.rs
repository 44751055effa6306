//! System configuration parameters
//!
//! All tunable parameters for the gas alarm controller.  The defaults are
//! the values the device ships with; a board variant may construct its own
//! `SystemConfig` and pass it to [`AppService::new`](crate::app::service::AppService::new).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Minimum spacing between scan ticks (milliseconds).  A tick fires
    /// when strictly more than this has elapsed since the previous one.
    pub scan_period_ms: u32,
    /// Fired ticks between telemetry events.
    pub telemetry_interval_ticks: u32,

    // --- Gas thresholds (0-100 scale) ---
    /// Readings at or above this value count as hazardous.
    pub gas_hazard_threshold: u8,
    /// Consecutive hazardous ticks required before gas is reported.
    pub gas_debounce_ticks: u8,
    /// Readings strictly below this value count as "gas low" in ALARM.
    pub gas_safe_threshold: u8,
    /// ALARM is left once the gas-low streak exceeds this many ticks.
    pub alarm_clear_ticks: u8,

    // --- Hardware ---
    /// Button pulls the pin low when pressed.
    pub button_active_low: bool,
    /// ADC count corresponding to 100 on the gas scale.
    pub gas_adc_full_scale: u16,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            scan_period_ms: 100,          // ~10 Hz
            telemetry_interval_ticks: 50, // ~5 s

            // Gas
            gas_hazard_threshold: 80,
            gas_debounce_ticks: 20, // ~2 s of hazardous readings
            gas_safe_threshold: 30,
            alarm_clear_ticks: 10, // leaves ALARM on the 11th low tick

            // Hardware
            button_active_low: true,
            gas_adc_full_scale: 4095, // 12-bit ADC
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Values are rejected, never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.scan_period_ms == 0 {
            return Err(Error::Config("scan period must be non-zero"));
        }
        // The wrapped clock gap never exceeds u32::MAX.
        if self.scan_period_ms == u32::MAX {
            return Err(Error::Config("scan period must be below u32::MAX"));
        }
        if self.telemetry_interval_ticks == 0 {
            return Err(Error::Config("telemetry interval must be non-zero"));
        }
        if self.gas_hazard_threshold == 0 || self.gas_hazard_threshold > 100 {
            return Err(Error::Config("hazard threshold must be in 1..=100"));
        }
        if self.gas_safe_threshold >= self.gas_hazard_threshold {
            return Err(Error::Config("safe threshold must be below hazard threshold"));
        }
        if self.gas_debounce_ticks == 0 {
            return Err(Error::Config("debounce ticks must be non-zero"));
        }
        // The u8 exit streak saturates at u8::MAX and must still exceed this.
        if self.alarm_clear_ticks == u8::MAX {
            return Err(Error::Config("alarm clear ticks must be below 255"));
        }
        if self.gas_adc_full_scale == 0 {
            return Err(Error::Config("ADC full scale must be non-zero"));
        }
        Ok(())
    }
}
