//! Game state and core simulation types
//!
//! Screen coordinates: x grows right, y grows down. Entity `pos.y` is the
//! bottom edge of its sprite (bottom-left anchor), so a grounded entity has
//! `pos.y == viewport.height`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to reach the start trigger
    Idle,
    /// Start sequence: ground strip unrolling, not yet scoring
    Intro,
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Character state machine tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterState {
    Idle,
    Running,
    Ducking,
    Dead,
}

/// Sprite pose shown for the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    /// Standing still, also used while airborne
    Idle,
    Run,
    Duck,
    Hurt,
}

/// Collision box relative to the sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the sprite frame to the top of the box
    pub offset_y: f32,
}

impl Hitbox {
    pub const STANDING: Hitbox = Hitbox {
        width: CHARACTER_FRAME_WIDTH,
        height: CHARACTER_FRAME_HEIGHT,
        offset_y: 0.0,
    };

    pub const DUCKING: Hitbox = Hitbox {
        width: 118.0,
        height: 62.0,
        offset_y: 32.0,
    };

    pub fn is_ducking(&self) -> bool {
        *self == Self::DUCKING
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Bottom-left corner of the sprite frame
    pub pos: Vec2,
    pub vel: Vec2,
    pub hitbox: Hitbox,
    pub state: CharacterState,
    pub pose: Pose,
    /// Unlocked by the duck pickup, never revoked within a session
    pub can_duck: bool,
}

impl Character {
    pub fn new(ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, ground_y),
            vel: Vec2::ZERO,
            hitbox: Hitbox::STANDING,
            state: CharacterState::Idle,
            pose: Pose::Idle,
            can_duck: false,
        }
    }

    /// World-space collision rectangle
    pub fn rect(&self) -> Rect {
        let frame_top = self.pos.y - CHARACTER_FRAME_HEIGHT;
        Rect::new(
            self.pos.x,
            frame_top + self.hitbox.offset_y,
            self.hitbox.width,
            self.hitbox.height,
        )
    }

    /// Standing on the ground line and not moving up
    pub fn grounded(&self, ground_y: f32) -> bool {
        self.pos.y >= ground_y && self.vel.y >= 0.0
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Small cactus cluster of 1..=3
    GroundSmall(u8),
    /// Large cactus cluster of 1..=3
    GroundLarge(u8),
    /// Bird
    Flying,
}

impl ObstacleKind {
    /// Number of distinct obstacle categories
    pub const COUNT: u32 = 7;

    /// Map a uniform roll in `0..COUNT` to a kind. The last category flies.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=2 => ObstacleKind::GroundLarge(roll as u8 + 1),
            3..=5 => ObstacleKind::GroundSmall(roll as u8 - 2),
            _ => ObstacleKind::Flying,
        }
    }

    /// Sprite size (width, height)
    pub fn size(&self) -> Vec2 {
        match *self {
            ObstacleKind::GroundSmall(n) => Vec2::new(34.0 * n as f32, 70.0),
            ObstacleKind::GroundLarge(n) => Vec2::new(50.0 * n as f32, 100.0),
            ObstacleKind::Flying => Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
        }
    }

    /// Collision height; flyers are forgiving on near misses
    pub fn hitbox_height(&self) -> f32 {
        match self {
            ObstacleKind::Flying => FLYER_HEIGHT / FLYER_HITBOX_SHRINK,
            _ => self.size().y,
        }
    }

    pub fn is_flying(&self) -> bool {
        matches!(self, ObstacleKind::Flying)
    }
}

/// An obstacle entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Bottom-left corner of the sprite
    pub pos: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        let size = self.kind.size();
        Rect::new(
            self.pos.x,
            self.pos.y - size.y,
            size.x,
            self.kind.hitbox_height(),
        )
    }
}

/// The duck-enabler pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    /// Bottom-left corner of the sprite
    pub pos: Vec2,
    pub size: f32,
    /// False once collected; never comes back
    pub alive: bool,
}

impl Pickup {
    /// Place the pickup somewhere two to three screens ahead
    pub fn spawn(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let vp = tuning.viewport;
        Self {
            pos: Vec2::new(
                vp.width * 2.5 + rng.random::<f32>() * vp.width,
                rng.random::<f32>() * vp.height,
            ),
            size: tuning.pickup_size,
            alive: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y - self.size, self.size, self.size)
    }
}

/// Background cloud (center anchored)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
}

impl Cloud {
    pub fn right_edge(&self) -> f32 {
        self.pos.x + CLOUD_WIDTH / 2.0
    }
}

/// Scrolling ground strip
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ground {
    /// Revealed width; grows during the start sequence
    pub width: f32,
    /// Texture scroll offset
    pub tile_offset: f32,
}

/// Events raised during a tick, drained at its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    Hit { obstacle_id: u32 },
    Milestone { score: u64 },
    PickupCollected,
    IntroStarted,
    RunStarted,
    Restarted,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub character: Character,
    /// Live obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    pub pickup: Pickup,
    pub clouds: Vec<Cloud>,
    pub ground: Ground,
    /// Touching this while idle begins the start sequence; `None` once consumed
    pub start_trigger: Option<Rect>,
    pub score: u64,
    /// Scroll speed (px/tick)
    pub speed: f32,
    /// Spawn accumulator
    pub spawn_timer: f32,
    /// Score timer accumulator (ms)
    pub score_timer_ms: f32,
    /// Start sequence step accumulator (ms)
    pub intro_timer_ms: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Clouds and score text shown
    pub hud_visible: bool,
    pub game_over_visible: bool,
    /// Pending events for this tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let vp = tuning.viewport;
        Self {
            phase: GamePhase::Idle,
            character: Character::new(vp.ground_y()),
            obstacles: Vec::new(),
            pickup: Pickup::spawn(tuning, rng),
            clouds: vec![
                Cloud {
                    pos: Vec2::new(vp.width / 2.0, 170.0),
                },
                Cloud {
                    pos: Vec2::new(vp.width / 1.5, 120.0),
                },
                Cloud {
                    pos: Vec2::new(vp.width - 80.0, 80.0),
                },
            ],
            ground: Ground {
                width: CHARACTER_FRAME_WIDTH,
                tile_offset: 0.0,
            },
            start_trigger: Some(Rect::new(
                0.0,
                START_TRIGGER_BOTTOM - START_TRIGGER_SIZE,
                START_TRIGGER_SIZE,
                START_TRIGGER_SIZE,
            )),
            score: 0,
            speed: tuning.base_speed,
            spawn_timer: 0.0,
            score_timer_ms: 0.0,
            intro_timer_ms: 0.0,
            time_ticks: 0,
            hud_visible: false,
            game_over_visible: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The running flag: scoring, scrolling and spawning are active
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Zero score, speed and every timer
    pub fn reset_run(&mut self, tuning: &Tuning) {
        self.score = 0;
        self.speed = tuning.base_speed;
        self.spawn_timer = 0.0;
        self.score_timer_ms = 0.0;
        self.obstacles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_kind_roll_covers_all_categories() {
        let kinds: Vec<_> = (0..ObstacleKind::COUNT).map(ObstacleKind::from_roll).collect();
        assert_eq!(kinds.iter().filter(|k| k.is_flying()).count(), 1);
        assert!(kinds.contains(&ObstacleKind::GroundSmall(1)));
        assert!(kinds.contains(&ObstacleKind::GroundSmall(3)));
        assert!(kinds.contains(&ObstacleKind::GroundLarge(1)));
        assert!(kinds.contains(&ObstacleKind::GroundLarge(3)));
    }

    #[test]
    fn test_flying_hitbox_is_shorter_than_sprite() {
        let bird = Obstacle {
            id: 1,
            kind: ObstacleKind::Flying,
            pos: Vec2::new(100.0, 300.0),
        };
        let rect = bird.rect();
        assert!(rect.h < FLYER_HEIGHT);
        assert_eq!(rect.y, 300.0 - FLYER_HEIGHT);
    }

    #[test]
    fn test_ducking_hitbox_sits_on_ground() {
        let mut dino = Character::new(340.0);
        dino.hitbox = Hitbox::DUCKING;
        let rect = dino.rect();
        assert_eq!(rect.bottom(), 340.0);
        assert_eq!(rect.w, 118.0);
        assert_eq!(rect.h, 62.0);
    }

    #[test]
    fn test_new_state_is_idle() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        let state = GameState::new(&tuning, &mut rng);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(!state.is_running());
        assert!(state.start_trigger.is_some());
        assert!(state.pickup.alive);
        assert!(state.pickup.pos.x >= tuning.viewport.width * 2.5);
        assert_eq!(state.speed, tuning.base_speed);
    }
}
