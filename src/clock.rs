//! Tick time sources
//!
//! The session never reads wall time itself; a host hands it deltas, either
//! directly or through a [`ClockSource`].

use serde::{Deserialize, Serialize};

/// Time information for a single tick (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClockTick {
    /// Total time since the clock started
    pub elapsed: f32,
    /// Time since the previous tick
    pub delta: f32,
}

/// Supplies one [`ClockTick`] per simulation step
pub trait ClockSource {
    fn next_tick(&mut self) -> ClockTick;
}

/// Constant timestep clock
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    dt: f32,
    elapsed: f32,
}

impl FixedStepClock {
    pub fn new(dt: f32) -> Self {
        Self { dt, elapsed: 0.0 }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(crate::consts::SIM_DT)
    }
}

impl ClockSource for FixedStepClock {
    fn next_tick(&mut self) -> ClockTick {
        self.elapsed += self.dt;
        ClockTick {
            elapsed: self.elapsed,
            delta: self.dt,
        }
    }
}

/// Replays a fixed list of deltas, then repeats the last one
///
/// Useful for reproducing jittery frame timing (and bad deltas) in tests.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    deltas: Vec<f32>,
    cursor: usize,
    elapsed: f32,
}

impl ScriptedClock {
    pub fn new(deltas: Vec<f32>) -> Self {
        Self {
            deltas,
            cursor: 0,
            elapsed: 0.0,
        }
    }
}

impl ClockSource for ScriptedClock {
    fn next_tick(&mut self) -> ClockTick {
        let delta = match self.deltas.get(self.cursor) {
            Some(&d) => {
                self.cursor += 1;
                d
            }
            None => self.deltas.last().copied().unwrap_or(0.0),
        };
        self.elapsed += delta;
        ClockTick {
            elapsed: self.elapsed,
            delta,
        }
    }
}
