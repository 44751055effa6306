//! Integration tests: AppService → detectors → FSM → outputs/events.

use crate::mock_hw::{make_app, tick, ticks, OutputCall};

use gasalarm::app::events::AppEvent;
use gasalarm::app::service::TRANSITION_HISTORY_LEN;
use gasalarm::fsm::Mode;

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_emits_initial_mode() {
    let (app, _hw, sink) = make_app();
    assert_eq!(app.mode(), Mode::AirLight);
    assert_eq!(sink.events, vec![AppEvent::Started(Mode::AirLight)]);
}

// ── Outputs every tick ────────────────────────────────────────

#[test]
fn every_tick_reports_mode_and_alarm_once() {
    let (mut app, mut hw, mut sink) = make_app();
    ticks(&mut app, &mut hw, &mut sink, 3);
    assert_eq!(
        hw.calls,
        vec![
            OutputCall::ShowMode(Mode::AirLight),
            OutputCall::SetAlarm(false),
            OutputCall::ShowMode(Mode::AirLight),
            OutputCall::SetAlarm(false),
            OutputCall::ShowMode(Mode::AirLight),
            OutputCall::SetAlarm(false),
        ]
    );
}

#[test]
fn inputs_are_sampled_once_per_tick() {
    let (mut app, mut hw, mut sink) = make_app();
    ticks(&mut app, &mut hw, &mut sink, 5);
    assert_eq!(hw.button_reads, 5);
    assert_eq!(hw.gas_reads, 5);
}

// ── Button ────────────────────────────────────────────────────

#[test]
fn button_switches_display_page() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.button = true;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::HumTemp);
    assert_eq!(hw.shown_modes(), vec![Mode::HumTemp]);
    assert_eq!(sink.mode_changes(), vec![(Mode::AirLight, Mode::HumTemp)]);

    hw.button = false;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::HumTemp);

    hw.button = true;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::AirLight);
}

// ── Gas alarm ─────────────────────────────────────────────────

#[test]
fn sustained_gas_raises_alarm_after_twenty_ticks() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.gas = 90;
    ticks(&mut app, &mut hw, &mut sink, 19);
    assert_eq!(app.mode(), Mode::AirLight);
    assert!(!hw.alarm_on());

    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::Alarm);
    assert!(app.alarm_active());
    assert!(hw.alarm_on());
    assert_eq!(sink.count(|e| *e == AppEvent::GasDetected), 1);
    assert_eq!(sink.mode_changes(), vec![(Mode::AirLight, Mode::Alarm)]);
}

#[test]
fn gas_wins_over_same_tick_button() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.gas = 90;
    ticks(&mut app, &mut hw, &mut sink, 19);

    hw.button = true;
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::Alarm);
    // One change only, straight to ALARM.
    assert_eq!(sink.mode_changes(), vec![(Mode::AirLight, Mode::Alarm)]);
}

#[test]
fn flickering_sensor_never_alarms() {
    let (mut app, mut hw, mut sink) = make_app();
    for i in 0..200 {
        hw.gas = if i % 5 == 4 { 60 } else { 95 };
        tick(&mut app, &mut hw, &mut sink);
    }
    assert_eq!(app.mode(), Mode::AirLight);
    assert_eq!(sink.count(|e| *e == AppEvent::GasDetected), 0);
}

#[test]
fn out_of_range_reading_is_clamped_to_hazard() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.gas = 250;
    ticks(&mut app, &mut hw, &mut sink, 20);
    assert_eq!(app.mode(), Mode::Alarm);
    assert_eq!(app.build_telemetry().gas_reading, 100);
}

#[test]
fn alarm_clears_after_eleven_low_ticks() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.gas = 90;
    ticks(&mut app, &mut hw, &mut sink, 20);
    assert_eq!(app.mode(), Mode::Alarm);

    hw.gas = 5;
    ticks(&mut app, &mut hw, &mut sink, 10);
    assert_eq!(app.mode(), Mode::Alarm);
    assert!(hw.alarm_on());

    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::AirLight);
    assert!(!hw.alarm_on());
    assert_eq!(
        sink.mode_changes(),
        vec![(Mode::AirLight, Mode::Alarm), (Mode::Alarm, Mode::AirLight)]
    );

    // The hazard detector resumes on the next display tick and drops.
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(sink.count(|e| *e == AppEvent::GasCleared), 1);
}

#[test]
fn middling_reading_holds_alarm() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.gas = 90;
    ticks(&mut app, &mut hw, &mut sink, 20);

    // Below hazard but above the safe threshold.
    hw.gas = 50;
    ticks(&mut app, &mut hw, &mut sink, 100);
    assert_eq!(app.mode(), Mode::Alarm);
    assert_eq!(app.build_telemetry().gas_out_ticks, 0);
}

#[test]
fn button_does_nothing_in_alarm() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.gas = 90;
    ticks(&mut app, &mut hw, &mut sink, 20);

    hw.button = true;
    ticks(&mut app, &mut hw, &mut sink, 5);
    assert_eq!(app.mode(), Mode::Alarm);
}

// ── Telemetry & diagnostics ───────────────────────────────────

#[test]
fn telemetry_every_fifty_ticks() {
    let (mut app, mut hw, mut sink) = make_app();
    ticks(&mut app, &mut hw, &mut sink, 49);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Telemetry(_))), 0);
    tick(&mut app, &mut hw, &mut sink);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Telemetry(_))), 1);
    ticks(&mut app, &mut hw, &mut sink, 50);
    assert_eq!(sink.count(|e| matches!(e, AppEvent::Telemetry(_))), 2);

    match sink.events.last() {
        Some(AppEvent::Telemetry(t)) => {
            assert_eq!(t.tick_count, 100);
            assert_eq!(t.mode, Mode::AirLight);
        }
        other => panic!("expected telemetry, got {:?}", other),
    }
}

#[test]
fn transition_history_keeps_most_recent() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.button = true;
    ticks(&mut app, &mut hw, &mut sink, 12);

    let history: Vec<_> = app.recent_transitions().collect();
    assert_eq!(history.len(), TRANSITION_HISTORY_LEN);
    assert_eq!(history.first().map(|t| t.tick), Some(5));
    assert_eq!(history.last().map(|t| t.tick), Some(12));
    // Tick 12 is an even toggle, back to AIR_LIGHT.
    assert_eq!(history.last().map(|t| t.to), Some(Mode::AirLight));
}
