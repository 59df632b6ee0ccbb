//! Game session
//!
//! Owns every piece of mutable state and advances it one tick at a time.
//! Inputs are drained in order at the start of a tick; events raised during
//! the tick are handed to the feedback sink at the end of it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::autopilot;
use super::character;
use super::collision::{check_start_trigger, collect_pickup, first_obstacle_hit};
use super::difficulty;
use super::scenery::{self, IntroProgress};
use super::spawner;
use super::state::{CharacterState, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind};
use super::view::FrameView;
use crate::clock::{ClockSource, ClockTick};
use crate::consts::MAX_TICK_DELTA;
use crate::feedback::{Cue, FeedbackSink, NullFeedback};
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Discrete, edge-triggered input events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    JumpPressed,
    DuckPressed,
    DuckReleased,
    RestartActivated,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events since the previous tick, oldest first
    pub events: Vec<InputEvent>,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

impl TickInput {
    pub fn events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            idle_mode: false,
        }
    }

    pub fn single(event: InputEvent) -> Self {
        Self::events([event])
    }
}

/// A play session: one character, one obstacle field, one high score
pub struct GameSession<F: FeedbackSink = NullFeedback, R: Rng = Pcg32> {
    state: GameState,
    tuning: Tuning,
    high_score: HighScore,
    feedback: F,
    rng: R,
    /// Events dispatched during the last tick
    last_events: Vec<GameEvent>,
}

impl<F: FeedbackSink> GameSession<F, Pcg32> {
    /// Create a session with a seeded PCG random source
    pub fn new(seed: u64, tuning: Tuning, feedback: F) -> Self {
        log::info!("Session created with seed: {}", seed);
        Self::with_rng(tuning, feedback, Pcg32::seed_from_u64(seed))
    }
}

impl<F: FeedbackSink, R: Rng> GameSession<F, R> {
    /// Create a session with any random source
    pub fn with_rng(tuning: Tuning, feedback: F, mut rng: R) -> Self {
        let tuning = tuning.sanitized();
        let state = GameState::new(&tuning, &mut rng);
        Self {
            state,
            tuning,
            high_score: HighScore::new(),
            feedback,
            rng,
            last_events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    /// Events raised during the most recent tick
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Presentation snapshot of the current state
    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.state, &self.high_score)
    }

    /// Begin the start sequence without waiting for the trigger.
    /// Returns false if the session already started.
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::Idle {
            return false;
        }
        self.state.start_trigger = None;
        self.begin_intro();
        true
    }

    /// Start a new run after a game over. Returns false outside game over.
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("Restart ignored in phase {:?}", self.state.phase);
            return false;
        }

        character::revive(&mut self.state.character);
        self.state.reset_run(&self.tuning);
        self.state.phase = GamePhase::Running;
        self.state.game_over_visible = false;
        self.state.events.push(GameEvent::Restarted);
        log::info!("Run restarted (best so far: {})", self.high_score.best());
        true
    }

    /// Place an obstacle at `x` (debug/testing)
    ///
    /// Ground obstacles sit on the ground line; flyers take the highest
    /// line they can spawn on.
    pub fn place_obstacle(&mut self, kind: ObstacleKind, x: f32) -> u32 {
        let id = self.state.next_entity_id();
        let ground_y = self.tuning.viewport.ground_y();
        let y = if kind.is_flying() {
            ground_y - self.tuning.flyer_height_range
        } else {
            ground_y
        };
        self.state.obstacles.push(Obstacle {
            id,
            kind,
            pos: glam::Vec2::new(x, y),
        });
        id
    }

    /// Advance with a delta from a clock
    pub fn tick_clock(&mut self, clock: &mut impl ClockSource, input: &TickInput) -> ClockTick {
        let t = clock.next_tick();
        self.tick(input, t.delta);
        t
    }

    /// Advance the session by `dt` seconds
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        let dt = sanitize_delta(dt);
        self.state.time_ticks += 1;

        if input.idle_mode {
            let events = autopilot::decide(&self.state, &self.tuning);
            for event in events.into_iter().chain(input.events.iter().copied()) {
                self.handle_input(event);
            }
        } else {
            for &event in &input.events {
                self.handle_input(event);
            }
        }

        let ground_y = self.tuning.viewport.ground_y();
        match self.state.phase {
            GamePhase::Idle => {
                character::integrate(&mut self.state.character, &self.tuning, dt);
                character::update_pose(&mut self.state.character, ground_y);
                if check_start_trigger(&self.state.character, &mut self.state.start_trigger) {
                    self.begin_intro();
                }
            }

            GamePhase::Intro => {
                let progress = scenery::advance_intro(&mut self.state, &self.tuning, dt);
                character::integrate(&mut self.state.character, &self.tuning, dt);
                character::update_pose(&mut self.state.character, ground_y);
                if progress == IntroProgress::Done {
                    self.begin_run();
                }
            }

            GamePhase::Running => {
                difficulty::advance(&mut self.state, &self.tuning, dt);
                spawner::advance(&mut self.state, &self.tuning, dt, &mut self.rng);
                spawner::scroll(&mut self.state, &self.tuning);
                scenery::scroll(&mut self.state, &self.tuning);
                character::integrate(&mut self.state.character, &self.tuning, dt);
                character::update_pose(&mut self.state.character, ground_y);
                self.check_collisions();
            }

            GamePhase::GameOver => {}
        }

        self.dispatch_events();
    }

    fn handle_input(&mut self, event: InputEvent) {
        let state = &mut self.state;
        match event {
            InputEvent::JumpPressed => {
                if state.phase == GamePhase::GameOver {
                    return;
                }
                if character::jump(&mut state.character, &self.tuning) {
                    state.events.push(GameEvent::Jump);
                }
            }
            InputEvent::DuckPressed => {
                character::duck(&mut state.character, &self.tuning);
            }
            InputEvent::DuckReleased => {
                character::stand(&mut state.character);
            }
            InputEvent::RestartActivated => {
                self.restart();
            }
        }
    }

    fn check_collisions(&mut self) {
        let hit = first_obstacle_hit(&self.state.character, &self.state.obstacles).map(|o| o.id);
        if let Some(obstacle_id) = hit {
            self.game_over(obstacle_id);
            return;
        }

        if collect_pickup(&mut self.state.character, &mut self.state.pickup) {
            log::info!("Duck pickup collected");
            self.state.events.push(GameEvent::PickupCollected);
        }
    }

    fn begin_intro(&mut self) {
        self.state.phase = GamePhase::Intro;
        self.state.character.state = CharacterState::Running;
        self.state.intro_timer_ms = 0.0;
        self.state.events.push(GameEvent::IntroStarted);
        log::info!("Start sequence begun");
    }

    fn begin_run(&mut self) {
        self.state.reset_run(&self.tuning);
        self.state.phase = GamePhase::Running;
        self.state.hud_visible = true;
        self.state.events.push(GameEvent::RunStarted);
        log::info!("Run started");
    }

    fn game_over(&mut self, obstacle_id: u32) {
        let score = self.state.score;
        character::kill(&mut self.state.character);
        self.state.phase = GamePhase::GameOver;
        let new_best = self.high_score.record(score);
        self.state.reset_run(&self.tuning);
        self.state.game_over_visible = true;
        self.state.events.push(GameEvent::Hit { obstacle_id });

        if new_best {
            log::info!("Game over: score {} (new best)", score);
        } else {
            log::info!("Game over: score {} (best {})", score, self.high_score.best());
        }
    }

    fn dispatch_events(&mut self) {
        self.last_events = std::mem::take(&mut self.state.events);
        for event in &self.last_events {
            let cue = match event {
                GameEvent::Jump => Cue::Jump,
                GameEvent::Hit { .. } => Cue::Hit,
                GameEvent::Milestone { .. } => Cue::Milestone,
                GameEvent::PickupCollected => Cue::PickupCollected,
                GameEvent::IntroStarted | GameEvent::RunStarted | GameEvent::Restarted => continue,
            };
            self.feedback.play(cue);
        }
    }
}

/// Negative or non-finite deltas become zero; long stalls are capped at
/// [`MAX_TICK_DELTA`]
pub fn sanitize_delta(dt: f32) -> f32 {
    if !(dt.is_finite() && dt >= 0.0) {
        log::warn!("Clamping bad tick delta {} to 0", dt);
        return 0.0;
    }
    if dt > MAX_TICK_DELTA {
        log::debug!("Capping tick delta {} to {}", dt, MAX_TICK_DELTA);
        return MAX_TICK_DELTA;
    }
    dt
}
