//! Integration tests: clock → scan scheduler gating through the service.

use crate::mock_hw::{make_app, tick};

#[test]
fn no_tick_until_period_exceeded() {
    let (mut app, mut hw, mut sink) = make_app();
    for t in 0..=100 {
        hw.now = t;
        assert!(!app.poll(&mut hw, &mut sink));
    }
    assert!(hw.calls.is_empty());
    hw.now = 101;
    assert!(app.poll(&mut hw, &mut sink));
    assert_eq!(app.tick_count(), 1);
    assert_eq!(app.last_tick_millis(), 101);
}

#[test]
fn fast_polling_yields_one_tick_per_period() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut fired = 0;
    for t in 1..=1000 {
        hw.now = t;
        if app.poll(&mut hw, &mut sink) {
            fired += 1;
        }
    }
    // Ticks at 101, 202, ..., 909.
    assert_eq!(fired, 9);
    assert_eq!(app.tick_count(), 9);
    assert_eq!(hw.button_reads, 9);
}

#[test]
fn skipped_polls_do_not_replay_ticks() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = 10_000;
    assert!(app.poll(&mut hw, &mut sink));
    assert!(!app.poll(&mut hw, &mut sink));
    assert_eq!(app.tick_count(), 1);
}

#[test]
fn ticks_continue_across_clock_rollover() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = u32::MAX - 150;
    assert!(app.poll(&mut hw, &mut sink));

    // 151 ms later the counter has wrapped to 0.
    hw.now = 0;
    assert!(app.poll(&mut hw, &mut sink));

    hw.now = 50;
    assert!(!app.poll(&mut hw, &mut sink));

    for _ in 0..10 {
        tick(&mut app, &mut hw, &mut sink);
    }
    assert_eq!(app.tick_count(), 12);
}

#[test]
fn gas_debounce_survives_rollover() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.now = u32::MAX - 1000;
    hw.gas = 90;
    for _ in 0..20 {
        tick(&mut app, &mut hw, &mut sink);
    }
    assert!(hw.now < 2000, "clock should have wrapped");
    assert!(app.alarm_active());
}
