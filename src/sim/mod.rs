//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives as tick deltas
//! - Injected, seedable RNG only
//! - Stable iteration order (obstacles in creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod character;
pub mod collision;
pub mod difficulty;
pub mod scenery;
pub mod session;
pub mod spawner;
pub mod state;
pub mod view;

pub use collision::Rect;
pub use session::{GameSession, InputEvent, TickInput, sanitize_delta};
pub use state::{
    Character, CharacterState, GameEvent, GamePhase, GameState, Hitbox, Obstacle, ObstacleKind,
    Pickup, Pose,
};
pub use view::FrameView;
