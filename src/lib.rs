//! Gas alarm controller library.
//!
//! Exposes the pure-logic modules (scan scheduler, gas detectors, mode
//! state machine, application service) for integration testing, plus the
//! drivers and adapters the firmware binary wires together.  All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod detector;
pub mod error;
pub mod fsm;
pub mod scheduler;

pub mod adapters;
pub mod drivers;
pub mod sensors;
