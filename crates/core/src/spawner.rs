//! Spawner module - periodic obstacle source
//!
//! Accumulates elapsed game time and produces one obstacle per full spawn
//! period, at a uniform random column along the top of the canvas. The
//! spawner owns the game's RNG; feeding it only from [`GameState::tick`]
//! guarantees that a finished game can never spawn (the base invariant that
//! the tick timer and spawn timer stop together).
//!
//! [`GameState::tick`]: crate::game_state::GameState::tick

use crate::game_state::Obstacle;
use crate::rng::SimpleRng;
use crate::types::{CANVAS_WIDTH, OBSTACLE_HEIGHT, OBSTACLE_WIDTH, SPAWN_INTERVAL_MS};

/// Periodic obstacle source
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
    timer_ms: u32,
}

impl Spawner {
    /// Create a spawner with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            timer_ms: 0,
        }
    }

    /// Advance the spawn timer by `elapsed_ms`.
    ///
    /// Returns a new obstacle when a full spawn period has accumulated.
    /// At the fixed 16ms step size at most one period can complete per call;
    /// leftover time carries over so the cadence stays exact.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Obstacle> {
        self.timer_ms += elapsed_ms;
        if self.timer_ms < SPAWN_INTERVAL_MS {
            return None;
        }
        self.timer_ms -= SPAWN_INTERVAL_MS;

        let x = self.rng.next_range((CANVAS_WIDTH - OBSTACLE_WIDTH) as u32) as i32;
        Some(Obstacle::new(x, -OBSTACLE_HEIGHT))
    }

    /// Current RNG state (for replaying a game)
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Milliseconds accumulated toward the next spawn
    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }
}
