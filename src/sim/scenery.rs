//! Background scrolling: ground texture, clouds and the drifting pickup

use super::state::GameState;
use crate::consts::INTRO_STEP_MS;
use crate::tuning::Tuning;

/// Scroll everything that isn't an obstacle
pub fn scroll(state: &mut GameState, tuning: &Tuning) {
    if !state.is_running() {
        return;
    }
    let vp = tuning.viewport;

    state.ground.tile_offset += state.speed;

    for cloud in &mut state.clouds {
        cloud.pos.x -= tuning.cloud_speed;
        if cloud.right_edge() < 0.0 {
            cloud.pos.x = vp.width + tuning.wrap_margin;
        }
    }

    if state.pickup.alive {
        state.pickup.pos.x -= state.speed * tuning.pickup_drift;
        if state.pickup.rect().right() < 0.0 {
            state.pickup.pos.x = vp.width * 2.0 + tuning.wrap_margin;
        }
    }
}

/// Outcome of one start sequence step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroProgress {
    Unrolling,
    Done,
}

/// Advance the start sequence: the character runs in while the ground strip
/// unrolls to full width, one step every 1/60 s.
pub fn advance_intro(state: &mut GameState, tuning: &Tuning, dt: f32) -> IntroProgress {
    let full_width = tuning.viewport.width;
    state.intro_timer_ms += dt * 1000.0;

    while state.intro_timer_ms >= INTRO_STEP_MS {
        state.intro_timer_ms -= INTRO_STEP_MS;
        state.character.vel.x = tuning.intro_run_speed;

        if state.ground.width < full_width {
            state.ground.width += tuning.intro_ground_step;
        }
        if state.ground.width >= full_width {
            state.ground.width = full_width;
            state.character.vel.x = 0.0;
            state.intro_timer_ms = 0.0;
            return IntroProgress::Done;
        }
    }
    IntroProgress::Unrolling
}
