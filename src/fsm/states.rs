//! Concrete mode handler functions and table builder.
//!
//! Each mode is defined by plain `fn` pointers, with no closures and no
//! heap.
//!
//! ```text
//!               [button]
//!  AIR_LIGHT ◀────────────▶ HUM_TEMP
//!      ▲  │                    │
//!      │  └──[gas detected]────┴──▶ ALARM
//!      │                              │
//!      └─────[gas low > N ticks]──────┘
//! ```
//!
//! In AIR_LIGHT and HUM_TEMP the rules run in a fixed order: the button
//! rule first, then the gas rule.  Both look at the same sampled inputs,
//! and a later rule's verdict replaces an earlier one, so gas always wins
//! over a same-tick button press.

use super::context::FsmContext;
use super::{Mode, StateDescriptor};
use log::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static mode table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; Mode::COUNT] {
    [
        // Index 0 — AirLight
        StateDescriptor {
            id: Mode::AirLight,
            name: "AirLight",
            on_enter: None,
            on_exit: None,
            on_update: air_light_update,
        },
        // Index 1 — HumTemp
        StateDescriptor {
            id: Mode::HumTemp,
            name: "HumTemp",
            on_enter: None,
            on_exit: None,
            on_update: hum_temp_update,
        },
        // Index 2 — Alarm
        StateDescriptor {
            id: Mode::Alarm,
            name: "Alarm",
            on_enter: Some(alarm_enter),
            on_exit: Some(alarm_exit),
            on_update: alarm_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  Display modes
// ═══════════════════════════════════════════════════════════════════════════

/// Shared rule list for the two display modes.  `toggle_to` is where a
/// button press leads.
fn display_mode_rules(ctx: &mut FsmContext, toggle_to: Mode) -> Option<Mode> {
    let mut next = None;

    if ctx.inputs.button_pressed {
        next = Some(toggle_to);
    }

    if ctx.gas.update(ctx.inputs.gas_reading) {
        next = Some(Mode::Alarm);
    }

    next
}

fn air_light_update(ctx: &mut FsmContext) -> Option<Mode> {
    display_mode_rules(ctx, Mode::HumTemp)
}

fn hum_temp_update(ctx: &mut FsmContext) -> Option<Mode> {
    display_mode_rules(ctx, Mode::AirLight)
}

// ═══════════════════════════════════════════════════════════════════════════
//  ALARM — hazard confirmed, wait for sustained low readings
// ═══════════════════════════════════════════════════════════════════════════

fn alarm_enter(ctx: &mut FsmContext) {
    ctx.gas_out_ticks = 0;
    ctx.outputs.alarm_active = true;
    warn!(
        "ALARM: gas hazard (reading {}), alarm raised",
        ctx.inputs.gas_reading
    );
}

fn alarm_exit(ctx: &mut FsmContext) {
    ctx.outputs.alarm_active = false;
    info!(
        "ALARM: gas low for {} ticks, alarm lowered",
        ctx.gas_out_ticks
    );
}

fn alarm_update(ctx: &mut FsmContext) -> Option<Mode> {
    if ctx.low_gas.is_low(ctx.inputs.gas_reading) {
        ctx.gas_out_ticks = ctx.gas_out_ticks.saturating_add(1);
    } else {
        ctx.gas_out_ticks = 0;
    }

    if ctx.gas_out_ticks > ctx.config.alarm_clear_ticks {
        return Some(Mode::AirLight);
    }

    None
}
