//! Gas detectors — turn raw 0-100 gas readings into booleans.
//!
//! | Detector                 | State           | Used in               |
//! |--------------------------|-----------------|-----------------------|
//! | [`DebouncedGasDetector`] | hazard counter  | AIR_LIGHT, HUM_TEMP   |
//! | [`LowGasDetector`]       | none            | ALARM                 |
//!
//! Both take the reading sampled once at the start of the tick, so the two
//! never disagree about what the sensor said.

pub mod debounce;
pub mod low_gas;

pub use debounce::DebouncedGasDetector;
pub use low_gas::LowGasDetector;

/// Gas reading on the 0-100 scale.
pub type GasLevel = u8;

/// Upper end of the gas scale.
pub const GAS_SCALE_MAX: GasLevel = 100;
