//! Procedural obstacle spawner
//!
//! Spawning is paced by an accumulator that grows with both elapsed time and
//! scroll speed, so faster runs also spawn more often.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Advance the spawn accumulator; spawn one obstacle when it fills up.
/// Returns the new obstacle's ID.
pub fn advance(state: &mut GameState, tuning: &Tuning, dt: f32, rng: &mut impl Rng) -> Option<u32> {
    if !state.is_running() {
        return None;
    }

    let delta_ms = dt * 1000.0;
    state.spawn_timer += delta_ms * state.speed * tuning.spawn_rate_factor;
    if state.spawn_timer < tuning.spawn_threshold {
        return None;
    }

    state.spawn_timer = 0.0;
    Some(spawn(state, tuning, rng))
}

/// Create one random obstacle past the right edge
pub fn spawn(state: &mut GameState, tuning: &Tuning, rng: &mut impl Rng) -> u32 {
    let vp = tuning.viewport;
    let kind = ObstacleKind::from_roll(rng.random_range(0..ObstacleKind::COUNT));
    let distance = tuning.spawn_distance_min
        + if tuning.spawn_distance_range > 0 {
            rng.random_range(0..tuning.spawn_distance_range)
        } else {
            0
        };

    let y = if kind.is_flying() {
        vp.ground_y() - rng.random::<f32>() * tuning.flyer_height_range
    } else {
        vp.ground_y()
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind,
        pos: Vec2::new(vp.width + distance as f32, y),
    });
    log::debug!("Spawned obstacle {} ({:?}) at distance {}", id, kind, distance);
    id
}

/// Scroll obstacles left by the current speed and retire the ones that left
/// the screen
pub fn scroll(state: &mut GameState, tuning: &Tuning) {
    if !state.is_running() {
        return;
    }

    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }

    let retire_x = tuning.retire_x;
    state.obstacles.retain(|o| {
        let keep = o.pos.x >= retire_x;
        if !keep {
            log::debug!("Retired obstacle {}", o.id);
        }
        keep
    });
}

/// Remove one obstacle. Returns false if it was already gone.
pub fn retire(state: &mut GameState, id: u32) -> bool {
    let before = state.obstacles.len();
    state.obstacles.retain(|o| o.id != id);
    state.obstacles.len() != before
}

/// Drop every live obstacle
pub fn clear(state: &mut GameState) {
    state.obstacles.clear();
}
