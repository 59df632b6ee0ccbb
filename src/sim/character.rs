//! Character controller
//!
//! State machine for the player: Idle → Running ⇄ Ducking → Dead → Running.
//! Input handlers return whether they did anything so the caller can raise
//! feedback events.

use super::state::{Character, CharacterState, Hitbox, Pose};
use crate::consts::CHARACTER_FRAME_HEIGHT;
use crate::tuning::Tuning;

/// Jump if standing on the ground. Mid-air jumps are ignored.
pub fn jump(character: &mut Character, tuning: &Tuning) -> bool {
    if character.state == CharacterState::Dead {
        return false;
    }
    if !character.grounded(tuning.viewport.ground_y()) {
        return false;
    }
    character.vel.y = -tuning.jump_impulse;
    true
}

/// Duck on the ground, or dive faster when airborne
///
/// Needs the duck pickup. The hitbox only changes when grounded; in the air
/// the character keeps its standing box and falls at `fast_fall_speed`.
pub fn duck(character: &mut Character, tuning: &Tuning) -> bool {
    if !character.can_duck {
        return false;
    }
    if !matches!(
        character.state,
        CharacterState::Running | CharacterState::Ducking
    ) {
        return false;
    }

    if character.grounded(tuning.viewport.ground_y()) {
        character.hitbox = Hitbox::DUCKING;
        character.pose = Pose::Duck;
    } else {
        character.vel.y = tuning.fast_fall_speed;
    }
    character.state = CharacterState::Ducking;
    true
}

/// Duck released: back to the standing box
pub fn stand(character: &mut Character) {
    if character.state == CharacterState::Dead {
        return;
    }
    character.hitbox = Hitbox::STANDING;
    if character.state == CharacterState::Ducking {
        character.state = CharacterState::Running;
        character.pose = Pose::Run;
    }
}

/// Apply gravity and velocity for one step
///
/// The ground line and the top of the viewport both stop the character.
pub fn integrate(character: &mut Character, tuning: &Tuning, dt: f32) {
    if character.state == CharacterState::Dead {
        return;
    }

    let ground_y = tuning.viewport.ground_y();
    character.vel.y += tuning.gravity * dt;
    character.pos += character.vel * dt;

    if character.pos.y >= ground_y {
        character.pos.y = ground_y;
        character.vel.y = 0.0;
    }
    if character.pos.y - CHARACTER_FRAME_HEIGHT < 0.0 {
        character.pos.y = CHARACTER_FRAME_HEIGHT;
        character.vel.y = character.vel.y.max(0.0);
    }
    character.pos.x = character.pos.x.max(0.0);
}

/// Pick the pose from the current contact and hitbox
pub fn update_pose(character: &mut Character, ground_y: f32) {
    character.pose = match character.state {
        CharacterState::Dead => Pose::Hurt,
        CharacterState::Idle => Pose::Idle,
        _ if !character.grounded(ground_y) => Pose::Idle,
        _ if character.hitbox.is_ducking() => Pose::Duck,
        _ => Pose::Run,
    };
}

/// Freeze on a lethal hit
pub fn kill(character: &mut Character) {
    character.state = CharacterState::Dead;
    character.pose = Pose::Hurt;
    character.vel = glam::Vec2::ZERO;
}

/// Come back from the dead for a new run
pub fn revive(character: &mut Character) {
    character.state = CharacterState::Running;
    character.hitbox = Hitbox::STANDING;
    character.vel = glam::Vec2::ZERO;
    character.pose = Pose::Run;
}
