//! Presentation snapshot
//!
//! Everything a renderer or HUD needs for one frame, detached from the live
//! state so it can be serialized or sent elsewhere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{CharacterState, GamePhase, GameState, ObstacleKind, Pose};
use crate::format_score;
use crate::highscores::HighScore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterView {
    /// Bottom-left corner of the sprite frame
    pub pos: Vec2,
    pub pose: Pose,
    pub state: CharacterState,
    pub hitbox: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub hitbox: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    pub tick: u64,
    pub phase: GamePhase,
    pub running: bool,
    pub character: CharacterView,
    pub obstacles: Vec<ObstacleView>,
    /// `None` once collected
    pub pickup: Option<Rect>,
    /// Hidden until the run starts
    pub clouds: Option<Vec<Vec2>>,
    pub ground_width: f32,
    pub ground_offset: f32,
    pub score: u64,
    /// Zero-padded score, hidden until the run starts
    pub score_text: Option<String>,
    pub high_score: u64,
    /// Shown once the first run has ended
    pub high_score_text: Option<String>,
    /// Game-over screen with restart button
    pub restart_available: bool,
}

impl FrameView {
    pub fn capture(state: &GameState, high_score: &HighScore) -> Self {
        let c = &state.character;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            running: state.is_running(),
            character: CharacterView {
                pos: c.pos,
                pose: c.pose,
                state: c.state,
                hitbox: c.rect(),
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    pos: o.pos,
                    hitbox: o.rect(),
                })
                .collect(),
            pickup: state.pickup.alive.then(|| state.pickup.rect()),
            clouds: state
                .hud_visible
                .then(|| state.clouds.iter().map(|cl| cl.pos).collect()),
            ground_width: state.ground.width,
            ground_offset: state.ground.tile_offset,
            score: state.score,
            score_text: state.hud_visible.then(|| format_score(state.score)),
            high_score: high_score.best(),
            high_score_text: high_score.display(),
            restart_available: state.game_over_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_view_hides_hud() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let state = GameState::new(&tuning, &mut rng);
        let view = FrameView::capture(&state, &HighScore::new());
        assert!(!view.running);
        assert!(view.score_text.is_none());
        assert!(view.clouds.is_none());
        assert!(view.high_score_text.is_none());
        assert!(view.pickup.is_some());
        assert!(!view.restart_available);
    }

    #[test]
    fn test_view_serializes() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState::new(&tuning, &mut rng);
        state.hud_visible = true;
        state.score = 42;
        let json = serde_json::to_string(&FrameView::capture(&state, &HighScore::new())).unwrap();
        assert!(json.contains("\"score_text\":\"00042\""));
    }
}
