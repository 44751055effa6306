//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements              | Connects to                 |
//! |------------|-------------------------|-----------------------------|
//! | `hardware` | ClockPort, InputPort,   | Button pin, gas ADC,        |
//! |            | OutputPort              | alarm pin, display          |
//! | `log_sink` | EventSink               | Serial log output           |
//! | `time`     | ClockPort               | ESP32 high-resolution timer |

pub mod hardware;
pub mod log_sink;
pub mod time;
