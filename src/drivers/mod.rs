//! Input/output drivers and peripheral bring-up.

pub mod button;
pub mod buzzer;
pub mod hw_init;
