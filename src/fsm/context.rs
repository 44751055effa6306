//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` holds this tick's sampled inputs, the detectors the state
//! handlers consult, the ALARM exit streak, and the outputs the handlers
//! request.  The engine owns it for the lifetime of the controller.

use crate::config::SystemConfig;
use crate::detector::{DebouncedGasDetector, GasLevel, LowGasDetector};

// ---------------------------------------------------------------------------
// Inputs (written once per tick by the service, read by handlers)
// ---------------------------------------------------------------------------

/// Inputs sampled once at the start of a fired tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInputs {
    /// Button level at tick time, used directly as the click signal.
    pub button_pressed: bool,
    /// Gas reading on the 0-100 scale.
    pub gas_reading: GasLevel,
}

// ---------------------------------------------------------------------------
// Outputs (written by handlers, applied by the service)
// ---------------------------------------------------------------------------

/// Outputs requested by state handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeOutputs {
    /// Buzzer / alarm LED drive.  Raised on entering ALARM, dropped on exit.
    pub alarm_active: bool,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Inputs --
    pub inputs: TickInputs,

    // -- Detectors --
    /// Hazard detector, advanced only on AIR_LIGHT / HUM_TEMP ticks.
    pub gas: DebouncedGasDetector,
    /// Safe-level check, consulted only on ALARM ticks.
    pub low_gas: LowGasDetector,
    /// Consecutive "gas low" ticks while in ALARM.  Zeroed on entry.
    pub gas_out_ticks: u8,

    // -- Outputs --
    pub outputs: ModeOutputs,

    // -- Configuration --
    pub config: SystemConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            inputs: TickInputs::default(),
            gas: DebouncedGasDetector::from_config(&config),
            low_gas: LowGasDetector::from_config(&config),
            gas_out_ticks: 0,
            outputs: ModeOutputs::default(),
            config,
        }
    }
}
