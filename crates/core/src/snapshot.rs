//! Read-only render projection of the game state.
//!
//! The display layer never touches `GameState` directly; it reads a
//! `GameSnapshot` written once per frame. Snapshots are reusable so the
//! render path stays allocation-free.

use arrayvec::ArrayVec;

use crate::game_state::{Obstacle, Player};
use crate::types::MAX_OBSTACLES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub player: Player,
    pub obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    pub score: u32,
    pub game_over: bool,
    pub started: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.player = Player::new();
        self.obstacles.clear();
        self.score = 0;
        self.game_over = false;
        self.started = false;
    }

    /// True while the session is running and obstacles keep falling.
    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            player: Player::new(),
            obstacles: ArrayVec::new(),
            score: 0,
            game_over: false,
            started: false,
        }
    }
}
