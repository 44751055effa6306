//! Sensor drivers.
//!
//! The gas sensor is the only analog input.  The button lives in
//! [`drivers`](crate::drivers) since it is a plain digital pin.

pub mod gas;
