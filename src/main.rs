//! Gas alarm firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  HardwareAdapter (Clock + Input + Output)   LogEventSink │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AppService (pure logic)                 │  │
//! │  │  ScanScheduler · Gas detectors · Mode FSM          │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use gasalarm::adapters::hardware::HardwareAdapter;
use gasalarm::adapters::log_sink::LogEventSink;
use gasalarm::adapters::time::MonotonicClock;
use gasalarm::app::service::AppService;
use gasalarm::config::SystemConfig;
use gasalarm::drivers::button::Button;
use gasalarm::drivers::buzzer::AlarmBuzzer;
use gasalarm::drivers::hw_init;
use gasalarm::sensors::gas::GasSensor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("GasAlarm v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(gasalarm::error::Error::from)?;

    let peripherals = Peripherals::take()?;
    // Button on GPIO16 (pull-up), alarm output on GPIO4, gas on ADC1 CH4.
    let mut button_pin = PinDriver::input(peripherals.pins.gpio16)?;
    button_pin.set_pull(if config.button_active_low {
        Pull::Up
    } else {
        Pull::Down
    })?;
    let alarm_pin = PinDriver::output(peripherals.pins.gpio4)?;

    let mut hw = HardwareAdapter::new(
        MonotonicClock::new(),
        Button::new(button_pin, config.button_active_low),
        GasSensor::new(config.gas_adc_full_scale),
        AlarmBuzzer::new(alarm_pin),
    );
    let mut log_sink = LogEventSink::new();

    // ── 4. App service ────────────────────────────────────────
    let mut app = AppService::new(config)?;
    app.start(&mut log_sink);

    info!("System ready. Entering scan loop.");

    // ── 5. Scan loop ──────────────────────────────────────────
    // Poll far faster than the scan period; the scheduler drops the
    // extra calls.  The 1 ms delay yields to the idle task so the task
    // watchdog stays fed.
    loop {
        app.poll(&mut hw, &mut log_sink);
        FreeRtos::delay_ms(1);
    }
}
