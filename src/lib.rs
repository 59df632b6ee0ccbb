//! Dino Run - an endless side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (character, obstacles, collisions, scoring)
//! - `clock`: Tick time sources
//! - `feedback`: Fire-and-forget cue sinks (audio/visual hooks)
//! - `highscores`: Volatile best-score tracking
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod feedback;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use clock::{ClockSource, ClockTick, FixedStepClock, ScriptedClock};
pub use feedback::{Cue, FeedbackSink, LogFeedback, NullFeedback};
pub use highscores::HighScore;
pub use sim::{GameSession, InputEvent, TickInput};
pub use tuning::{Tuning, Viewport};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest delta a single tick will simulate (seconds)
    pub const MAX_TICK_DELTA: f32 = 1.0;

    /// Viewport defaults
    pub const VIEWPORT_WIDTH: f32 = 1000.0;
    pub const VIEWPORT_HEIGHT: f32 = 340.0;

    /// Character sprite frame
    pub const CHARACTER_FRAME_WIDTH: f32 = 88.0;
    pub const CHARACTER_FRAME_HEIGHT: f32 = 94.0;

    /// Score timer period (10 increments per second)
    pub const SCORE_PERIOD_MS: f32 = 100.0;
    /// Start sequence step period
    pub const INTRO_STEP_MS: f32 = 1000.0 / 60.0;

    /// Flying obstacle sprite frame
    pub const FLYER_WIDTH: f32 = 92.0;
    pub const FLYER_HEIGHT: f32 = 77.0;
    /// Flying hitbox is the visual height divided by this
    pub const FLYER_HITBOX_SHRINK: f32 = 1.5;

    /// Cloud decoration width
    pub const CLOUD_WIDTH: f32 = 92.0;

    /// Start trigger (default 32x32 body, bottom-left anchored)
    pub const START_TRIGGER_SIZE: f32 = 32.0;
    pub const START_TRIGGER_BOTTOM: f32 = 80.0;
}

/// Zero-pad a score to five digits. Wider values are shown in full.
pub fn format_score(score: u64) -> String {
    format!("{score:05}")
}

/// HUD text for the high score
pub fn format_high_score(score: u64) -> String {
    format!("HI {}", format_score(score))
}
