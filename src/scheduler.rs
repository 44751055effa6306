//! Scan scheduler — gates all per-tick work behind a minimum period.
//!
//! The host loop calls [`ScanScheduler::maybe_tick`] as often as it likes
//! with the current clock reading.  Most calls are no-ops; a tick fires
//! only once strictly more than `period` has elapsed since the last one.
//!
//! ```text
//!   now_millis() ──▶ maybe_tick(now) ──[fired]──▶ sample inputs ──▶ FSM
//!                          │
//!                      [not yet]
//!                          ▼
//!                       return
//! ```
//!
//! Elapsed time is the *wrapping* difference `now - last`, so the gate
//! keeps working when the millisecond counter rolls over.  The comparison
//! is strict (`>`), giving an "at least every period, drifting slightly"
//! cadence rather than a precise timer.

/// A fixed-width unsigned clock reading that wraps at its maximum value.
pub trait Timestamp: Copy + Eq + core::fmt::Debug {
    /// Zero reading.
    const ZERO: Self;

    /// Wrapping difference `self - earlier`, widened to `u64`.
    fn wrapping_elapsed(self, earlier: Self) -> u64;
}

macro_rules! impl_timestamp {
    ($($t:ty),*) => {
        $(
            impl Timestamp for $t {
                const ZERO: Self = 0;

                fn wrapping_elapsed(self, earlier: Self) -> u64 {
                    self.wrapping_sub(earlier) as u64
                }
            }
        )*
    };
}

impl_timestamp!(u8, u16, u32, u64);

/// Periodic tick gate.  Owns the time of the last fired tick.
#[derive(Debug, Clone)]
pub struct ScanScheduler<T: Timestamp = u32> {
    period: u64,
    last_tick: T,
}

impl<T: Timestamp> ScanScheduler<T> {
    /// Create a scheduler whose first tick fires once the clock passes
    /// `period` (the last tick time starts at zero).
    pub fn new(period: u64) -> Self {
        Self {
            period,
            last_tick: T::ZERO,
        }
    }

    /// Fire a tick if `now` is strictly more than one period past the last
    /// fired tick.  On fire, `now` becomes the new reference; otherwise
    /// nothing changes.
    pub fn maybe_tick(&mut self, now: T) -> bool {
        if now.wrapping_elapsed(self.last_tick) > self.period {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Clock reading at which the last tick fired.
    pub fn last_tick(&self) -> T {
        self.last_tick
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
