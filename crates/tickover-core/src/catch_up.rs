//! AFK catch-up arithmetic.
//!
//! Given the unix timestamp recorded when a timer was last observed and
//! the current time, these functions reconcile the gap into a number of
//! completed cycles plus a new remaining-time value, without having
//! ticked during the gap. The countdown is treated as a continuous
//! sawtooth of period `initial`.

use crate::state::TimerState;

/// What a catch-up pass did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatchUp {
    /// Cycles completed during the gap (after any one-shot clamp).
    pub completed: i32,
    /// The wall clock was behind `last`; the gap was clamped to zero.
    pub clock_went_backward: bool,
}

/// Advance `state` across a wall-clock gap ending at `now`.
///
/// Pure with respect to everything but `state`. No-op when the timer was
/// never started (`initial == 0`) or is already ended (non-repeating,
/// zero remaining). Backward clock jumps are clamped: the gap is treated
/// as zero rather than assuming a monotonic wall clock.
pub fn catch_up(state: &mut TimerState, repeat: bool, now: i64) -> CatchUp {
    if state.initial <= 0.0 || state.is_ended(repeat) {
        return CatchUp::default();
    }

    let gap = now - state.last;
    let clock_went_backward = gap < 0;

    // Time already spent in the partial cycle plus the gap itself.
    // `current` is clamped into its domain first so a corrupt record
    // cannot drive the elapsed total negative.
    let in_cycle = state.initial - state.current.clamp(0.0, state.initial);
    let elapsed_total = gap.max(0) as f32 + in_cycle;

    // float-to-int casts saturate, which caps absurd gaps at i32::MAX.
    let completed = (elapsed_total / state.initial).floor() as i32;

    state.cycles = state.cycles.saturating_add(completed);
    state.current = state.initial - (elapsed_total % state.initial);
    state.last = now;

    let mut completed_after_clamp = completed;
    if !repeat {
        let before = state.cycles;
        state.cycles = state.cycles.min(1);
        completed_after_clamp -= before - state.cycles;
        if state.cycles > 0 {
            state.current = 0.0;
        }
    }

    CatchUp {
        completed: completed_after_clamp.max(0),
        clock_went_backward,
    }
}
