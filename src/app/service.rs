//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the scan scheduler, the mode FSM and its context.
//! The host calls [`AppService::poll`] as fast as it likes; real work only
//! happens on fired ticks.
//!
//! ```text
//!   ClockPort ──▶ ┌────────────────────────────┐ ──▶ OutputPort
//!   InputPort ──▶ │         AppService         │ ──▶ EventSink
//!                 │ Scheduler · Detectors · FSM│
//!                 └────────────────────────────┘
//! ```

use heapless::HistoryBuffer;
use log::{debug, info};

use crate::config::SystemConfig;
use crate::detector::GAS_SCALE_MAX;
use crate::error::Result;
use crate::fsm::context::{FsmContext, TickInputs};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, Mode};
use crate::scheduler::ScanScheduler;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ClockPort, EventSink, InputPort, Millis, OutputPort};

/// Number of recent mode transitions kept for diagnostics.
pub const TRANSITION_HISTORY_LEN: usize = 8;

/// One recorded mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    /// Fired tick on which the change happened.
    pub tick: u64,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    scheduler: ScanScheduler<Millis>,
    fsm: Fsm,
    ctx: FsmContext,
    tick_count: u64,
    telemetry_interval: u32,
    ticks_since_telemetry: u32,
    history: HistoryBuffer<Transition, TRANSITION_HISTORY_LEN>,
}

impl AppService {
    /// Construct the service from a validated configuration.
    ///
    /// Does **not** start the FSM; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Result<Self> {
        config.validate()?;

        let scheduler = ScanScheduler::new(u64::from(config.scan_period_ms));
        let telemetry_interval = config.telemetry_interval_ticks;
        let ctx = FsmContext::new(config);
        let fsm = Fsm::new(build_state_table(), Mode::AirLight);

        Ok(Self {
            scheduler,
            fsm,
            ctx,
            tick_count: 0,
            telemetry_interval,
            ticks_since_telemetry: 0,
            history: HistoryBuffer::new(),
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in its initial mode (AIR_LIGHT).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_mode()));
        info!("AppService started in {:?}", self.fsm.current_mode());
    }

    // ── Per-poll entry point ──────────────────────────────────

    /// Run the scheduler gate and, if a tick fires, one full control
    /// cycle.  Returns `true` when a tick fired.
    ///
    /// `hw` implements all three hardware ports so a single `&mut` covers
    /// them.
    pub fn poll(
        &mut self,
        hw: &mut (impl ClockPort + InputPort + OutputPort),
        sink: &mut impl EventSink,
    ) -> bool {
        let now = hw.now_millis();
        if !self.scheduler.maybe_tick(now) {
            return false;
        }
        self.tick(hw, sink);
        true
    }

    /// One control cycle: sample inputs → FSM → outputs → events.
    fn tick(&mut self, hw: &mut (impl InputPort + OutputPort), sink: &mut impl EventSink) {
        self.tick_count += 1;
        let prev_mode = self.fsm.current_mode();
        let was_detected = self.ctx.gas.detected();

        // 1. Sample every input exactly once.
        let button_pressed = hw.button_pressed();
        let gas_reading = hw.gas_reading().min(GAS_SCALE_MAX);
        self.ctx.inputs = TickInputs {
            button_pressed,
            gas_reading,
        };
        debug!(
            "tick {}: button={} gas={}",
            self.tick_count, button_pressed, gas_reading
        );

        // 2. Mode machine
        self.fsm.tick(&mut self.ctx);
        let mode = self.fsm.current_mode();

        // 3. Outputs, every tick
        hw.show_mode(mode);
        hw.set_alarm(self.ctx.outputs.alarm_active);

        // 4. Events
        match (was_detected, self.ctx.gas.detected()) {
            (false, true) => sink.emit(&AppEvent::GasDetected),
            (true, false) => sink.emit(&AppEvent::GasCleared),
            _ => {}
        }

        if mode != prev_mode {
            self.history.write(Transition {
                from: prev_mode,
                to: mode,
                tick: self.tick_count,
            });
            sink.emit(&AppEvent::ModeChanged {
                from: prev_mode,
                to: mode,
            });
        }

        self.ticks_since_telemetry += 1;
        if self.ticks_since_telemetry >= self.telemetry_interval {
            self.ticks_since_telemetry = 0;
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            mode: self.fsm.current_mode(),
            gas_reading: self.ctx.inputs.gas_reading,
            gas_detected: self.ctx.gas.detected(),
            hazard_count: self.ctx.gas.count(),
            gas_out_ticks: self.ctx.gas_out_ticks,
            button_pressed: self.ctx.inputs.button_pressed,
            tick_count: self.tick_count,
            transitions: self.fsm.transition_count(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.fsm.current_mode()
    }

    /// `true` exactly while in ALARM.
    pub fn alarm_active(&self) -> bool {
        self.ctx.outputs.alarm_active
    }

    /// Fired ticks since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clock reading of the last fired tick.
    pub fn last_tick_millis(&self) -> Millis {
        self.scheduler.last_tick()
    }

    /// Recent mode transitions, oldest first.
    pub fn recent_transitions(&self) -> impl Iterator<Item = &Transition> {
        self.history.oldest_ordered()
    }

    /// The live configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.ctx.config
    }
}
