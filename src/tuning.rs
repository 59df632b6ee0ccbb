//! Game balance and geometry
//!
//! Every number the simulation depends on lives here so runs can be
//! re-tuned from a JSON file without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Fixed play-field size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Y coordinate of the ground line (bottom edge, y grows downward)
    pub fn ground_y(&self) -> f32 {
        self.height
    }
}

/// Data-driven game balance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub viewport: Viewport,

    // === Character ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Upward speed applied on jump (px/s)
    pub jump_impulse: f32,
    /// Downward speed applied when ducking in mid-air (px/s)
    pub fast_fall_speed: f32,

    // === Difficulty ===
    /// Scroll speed at the start of every run (px/tick)
    pub base_speed: f32,
    /// Scroll speed added on every score increment
    pub speed_step: f32,
    /// Score timer period (ms)
    pub score_period_ms: f32,
    /// Milestone cue every N points
    pub milestone_every: u64,

    // === Spawner ===
    /// Accumulator gain: `delta_ms * speed * spawn_rate_factor`
    pub spawn_rate_factor: f32,
    /// Accumulator value that triggers a spawn
    pub spawn_threshold: f32,
    /// Minimum spawn distance past the right edge
    pub spawn_distance_min: u32,
    /// Random extra spawn distance, `0..spawn_distance_range`
    pub spawn_distance_range: u32,
    /// Flying obstacles spawn up to this far above the ground
    pub flyer_height_range: f32,
    /// Obstacles with `x` left of this are retired
    pub retire_x: f32,

    // === Start sequence ===
    /// Ground width revealed per intro step (px)
    pub intro_ground_step: f32,
    /// Character run-in speed during the intro (px/s)
    pub intro_run_speed: f32,

    // === Scenery ===
    /// Cloud drift per tick (px)
    pub cloud_speed: f32,
    /// Gap past the right edge where scenery re-enters
    pub wrap_margin: f32,
    /// Pickup drifts at this fraction of scroll speed
    pub pickup_drift: f32,
    /// Pickup sprite size (px)
    pub pickup_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),

            gravity: 5000.0,
            jump_impulse: 1600.0,
            fast_fall_speed: 800.0,

            base_speed: 10.0,
            speed_step: 0.01,
            score_period_ms: crate::consts::SCORE_PERIOD_MS,
            milestone_every: 100,

            spawn_rate_factor: 0.08,
            spawn_threshold: 1500.0,
            spawn_distance_min: 600,
            spawn_distance_range: 300,
            flyer_height_range: 130.0,
            retire_x: -120.0,

            intro_ground_step: 34.0,
            intro_run_speed: 80.0,

            cloud_speed: 0.5,
            wrap_margin: 30.0,
            pickup_drift: 0.5,
            pickup_size: 48.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON (for dumping a starting point to edit)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning.sanitized();
                }
                Err(e) => log::warn!("Bad tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read tuning file {}: {}", path.display(), e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Clamp values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.viewport.width > 0.0) || !(self.viewport.height > 0.0) {
            self.viewport = defaults.viewport;
        }
        if !(self.score_period_ms > 0.0) {
            self.score_period_ms = defaults.score_period_ms;
        }
        if self.milestone_every == 0 {
            self.milestone_every = defaults.milestone_every;
        }
        self.speed_step = self.speed_step.max(0.0);
        self.spawn_rate_factor = self.spawn_rate_factor.max(0.0);
        if !(self.intro_ground_step > 0.0) {
            self.intro_ground_step = defaults.intro_ground_step;
        }
        self
    }
}
