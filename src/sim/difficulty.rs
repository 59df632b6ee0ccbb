//! Score and speed ramp
//!
//! A fixed-rate timer (10 Hz by default) drives the score. Every increment
//! also nudges the scroll speed up, with no cap.

use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the score timer by `dt` seconds. Returns the number of increments.
pub fn advance(state: &mut GameState, tuning: &Tuning, dt: f32) -> u32 {
    let period = tuning.score_period_ms;
    if !state.is_running() || !(period > 0.0) {
        return 0;
    }

    state.score_timer_ms += dt * 1000.0;
    let fires = (state.score_timer_ms / period).floor();
    state.score_timer_ms = (state.score_timer_ms - fires * period).max(0.0);

    let fired = fires as u32;
    for _ in 0..fired {
        increment(state, tuning);
    }
    fired
}

/// One score timer fire
pub fn increment(state: &mut GameState, tuning: &Tuning) {
    state.score += 1;
    state.speed += tuning.speed_step;

    if is_milestone(state.score, tuning.milestone_every) {
        state.events.push(GameEvent::Milestone { score: state.score });
    }
}

pub fn is_milestone(score: u64, every: u64) -> bool {
    every > 0 && score.is_multiple_of(every)
}
