//! Mock hardware adapter for integration tests.
//!
//! A settable clock and inputs, plus a record of every output call so
//! tests can assert on the full actuation history.

use gasalarm::app::events::AppEvent;
use gasalarm::app::ports::{ClockPort, EventSink, InputPort, Millis, OutputPort};
use gasalarm::app::service::AppService;
use gasalarm::config::SystemConfig;
use gasalarm::fsm::Mode;

/// Spacing used by [`tick`], one more than the default scan period.
pub const TICK_MS: Millis = 101;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OutputCall {
    ShowMode(Mode),
    SetAlarm(bool),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub now: Millis,
    pub button: bool,
    pub gas: u8,
    pub calls: Vec<OutputCall>,
    pub button_reads: usize,
    pub gas_reads: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            now: 0,
            button: false,
            gas: 0,
            calls: Vec::new(),
            button_reads: 0,
            gas_reads: 0,
        }
    }

    pub fn advance(&mut self, ms: Millis) {
        self.now = self.now.wrapping_add(ms);
    }

    pub fn alarm_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                OutputCall::SetAlarm(on) => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn shown_modes(&self) -> Vec<Mode> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                OutputCall::ShowMode(m) => Some(*m),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for MockHardware {
    fn now_millis(&self) -> Millis {
        self.now
    }
}

impl InputPort for MockHardware {
    fn button_pressed(&mut self) -> bool {
        self.button_reads += 1;
        self.button
    }

    fn gas_reading(&mut self) -> u8 {
        self.gas_reads += 1;
        self.gas
    }
}

impl OutputPort for MockHardware {
    fn show_mode(&mut self, mode: Mode) {
        self.calls.push(OutputCall::ShowMode(mode));
    }

    fn set_alarm(&mut self, active: bool) {
        self.calls.push(OutputCall::SetAlarm(active));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn mode_changes(&self) -> Vec<(Mode, Mode)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ModeChanged { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Helpers ───────────────────────────────────────────────────

#[allow(dead_code)]
pub fn make_app() -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default()).unwrap();
    let hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

/// Advance the clock past one scan period and poll; the tick must fire.
#[allow(dead_code)]
pub fn tick(app: &mut AppService, hw: &mut MockHardware, sink: &mut RecordingSink) {
    hw.advance(TICK_MS);
    assert!(app.poll(hw, sink), "expected a tick at t={}", hw.now);
}

#[allow(dead_code)]
pub fn ticks(app: &mut AppService, hw: &mut MockHardware, sink: &mut RecordingSink, n: usize) {
    for _ in 0..n {
        tick(app, hw, sink);
    }
}
