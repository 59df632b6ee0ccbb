//! Idle/demo mode AI
//!
//! Reads the state and produces the inputs a (not very clever) player would.

use super::collision::Rect;
use super::state::{CharacterState, GamePhase, GameState, Hitbox};
use crate::consts::CHARACTER_FRAME_HEIGHT;
use crate::sim::session::InputEvent;
use crate::tuning::Tuning;

/// Ticks of warning the AI wants before an obstacle arrives
const REACTION_TICKS: f32 = 6.0;

pub fn decide(state: &GameState, tuning: &Tuning) -> Vec<InputEvent> {
    let character = &state.character;
    let ground_y = tuning.viewport.ground_y();

    match state.phase {
        GamePhase::GameOver => return vec![InputEvent::RestartActivated],
        // Jump into the start trigger
        GamePhase::Idle => return vec![InputEvent::JumpPressed],
        GamePhase::Intro | GamePhase::Running => {}
    }

    let body = character.rect();
    let standing_top = ground_y - CHARACTER_FRAME_HEIGHT + Hitbox::STANDING.offset_y;
    let ducking_top = ground_y - CHARACTER_FRAME_HEIGHT + Hitbox::DUCKING.offset_y;
    let lookahead = state.speed * REACTION_TICKS + 20.0;

    let threat: Option<Rect> = state
        .obstacles
        .iter()
        .map(|o| o.rect())
        .filter(|r| r.right() > body.x)
        .filter(|r| r.x - body.right() <= lookahead)
        // Passes overhead even when standing
        .filter(|r| r.bottom() > standing_top)
        .min_by(|a, b| a.x.total_cmp(&b.x));

    let mut events = Vec::new();
    match threat {
        Some(r) if character.can_duck && r.bottom() <= ducking_top => {
            if character.state != CharacterState::Ducking {
                events.push(InputEvent::DuckPressed);
            }
        }
        Some(_) => {
            if character.state == CharacterState::Ducking {
                events.push(InputEvent::DuckReleased);
            }
            events.push(InputEvent::JumpPressed);
        }
        None => {
            if character.state == CharacterState::Ducking {
                events.push(InputEvent::DuckReleased);
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, ObstacleKind};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running() -> (GameState, Tuning) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(&tuning, &mut rng);
        state.phase = GamePhase::Running;
        state.character.state = CharacterState::Running;
        (state, tuning)
    }

    #[test]
    fn test_restarts_after_death() {
        let (mut state, tuning) = running();
        state.phase = GamePhase::GameOver;
        assert_eq!(decide(&state, &tuning), vec![InputEvent::RestartActivated]);
    }

    #[test]
    fn test_jumps_at_close_cactus() {
        let (mut state, tuning) = running();
        state.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::GroundSmall(2),
            pos: Vec2::new(120.0, 340.0),
        });
        assert_eq!(decide(&state, &tuning), vec![InputEvent::JumpPressed]);
    }

    #[test]
    fn test_ignores_far_cactus() {
        let (mut state, tuning) = running();
        state.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::GroundSmall(2),
            pos: Vec2::new(900.0, 340.0),
        });
        assert!(decide(&state, &tuning).is_empty());
    }

    #[test]
    fn test_ducks_under_mid_flyer_when_allowed() {
        let (mut state, tuning) = running();
        state.character.can_duck = true;
        state.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::Flying,
            pos: Vec2::new(120.0, 300.0),
        });
        assert_eq!(decide(&state, &tuning), vec![InputEvent::DuckPressed]);
    }
}
