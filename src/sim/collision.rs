//! Collision detection
//!
//! Everything collides as axis-aligned rectangles. Touching edges do not
//! count as overlap.

use serde::{Deserialize, Serialize};

use super::state::{Character, Obstacle, Pickup};

/// Axis-aligned rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// First obstacle (in creation order) overlapping the character
pub fn first_obstacle_hit<'a>(character: &Character, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let body = character.rect();
    obstacles.iter().find(|o| body.intersects(&o.rect()))
}

/// Collect the pickup if the character touches it.
///
/// Returns true only on the tick the pickup is collected; a dead pickup
/// never reports again.
pub fn collect_pickup(character: &mut Character, pickup: &mut Pickup) -> bool {
    if !pickup.alive || !character.rect().intersects(&pickup.rect()) {
        return false;
    }
    pickup.alive = false;
    character.can_duck = true;
    true
}

/// Consume the start trigger if the character touches it
pub fn check_start_trigger(character: &Character, trigger: &mut Option<Rect>) -> bool {
    match trigger {
        Some(rect) if character.rect().intersects(rect) => {
            *trigger = None;
            true
        }
        _ => false,
    }
}
