//! Game state module - manages the complete game state
//!
//! This module ties together the core components: player, obstacles, spawner,
//! and score. It owns the fixed-timestep tick that advances obstacles, tests
//! collisions, drops offscreen obstacles, and feeds the spawner.

use arrayvec::ArrayVec;

use crate::spawner::Spawner;
use crate::types::{
    GameAction, Rect, CANVAS_HEIGHT, CANVAS_WIDTH, MAX_OBSTACLES, OBSTACLE_HEIGHT, OBSTACLE_SPEED,
    OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_SPAWN_X, PLAYER_STEP, PLAYER_WIDTH, PLAYER_Y,
};

/// The player-controlled square
///
/// Moves horizontally in fixed steps; `y` never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    /// Create a player at the spawn column
    pub fn new() -> Self {
        Self {
            x: PLAYER_SPAWN_X,
            y: PLAYER_Y,
        }
    }

    /// Bounding rectangle for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A falling obstacle square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
}

impl Obstacle {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Bounding rectangle for collision and rendering
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    /// True once the obstacle has fully passed the bottom canvas edge
    pub fn is_offscreen(&self) -> bool {
        self.y > CANVAS_HEIGHT
    }
}

/// Complete game state
///
/// The single mutable container for one session: player position, live
/// obstacles, score, and lifecycle flags. Everything the renderer needs is
/// exported through [`snapshot_into`](GameState::snapshot_into).
#[derive(Debug, Clone)]
pub struct GameState {
    player: Player,
    obstacles: ArrayVec<Obstacle, MAX_OBSTACLES>,
    spawner: Spawner,
    score: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            player: Player::new(),
            obstacles: ArrayVec::new(),
            spawner: Spawner::new(seed),
            score: 0,
            game_over: false,
            started: false,
        }
    }

    /// Arm the session. `tick` is a no-op until this is called.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Apply a player action.
    ///
    /// Moves are guarded at the canvas edges and ignored once the game is
    /// over. Returns whether the player moved.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => {
                if self.player.x > 0 {
                    self.player.x -= PLAYER_STEP;
                    return true;
                }
                false
            }
            GameAction::MoveRight => {
                if self.player.x < CANVAS_WIDTH - PLAYER_WIDTH {
                    self.player.x += PLAYER_STEP;
                    return true;
                }
                false
            }
        }
    }

    /// Insert an obstacle directly, bypassing the spawner.
    ///
    /// Used for scenario setup in tests. Returns false when the collection
    /// is at capacity.
    pub fn push_obstacle(&mut self, obstacle: Obstacle) -> bool {
        self.obstacles.try_push(obstacle).is_ok()
    }

    /// Main game tick - advance one fixed timestep of `elapsed_ms`.
    ///
    /// Order is load-bearing: score, then advance each obstacle and test the
    /// advanced position against the player, then drop offscreen obstacles in
    /// one pass, then let the spawner run. A newborn obstacle first advances
    /// on the following tick, and the tick that ends the game does not spawn.
    ///
    /// Returns false without touching anything when the session has not
    /// started or is already over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        self.score += 1;

        let mut game_ended = false;
        let player_rect = self.player.rect();
        for obstacle in self.obstacles.iter_mut() {
            obstacle.y += OBSTACLE_SPEED;

            // Post-advance collision test. A hit ends the game but the pass
            // keeps running so every obstacle advances exactly once this
            // tick; multiple hits on one tick collapse into a single end.
            if player_rect.overlaps(&obstacle.rect()) {
                game_ended = true;
            }
        }

        self.obstacles.retain(|o| !o.is_offscreen());

        if game_ended {
            self.end_game();
            return true;
        }

        if let Some(obstacle) = self.spawner.update(elapsed_ms) {
            // A full collection drops the spawn; capacity is sized so this
            // cannot happen while the tick keeps removing offscreen
            // obstacles.
            let _ = self.obstacles.try_push(obstacle);
        }

        true
    }

    /// End the session.
    ///
    /// Idempotent: calling this on a finished game changes nothing. The tick
    /// and the spawner are both disarmed by the same flag, so no score,
    /// movement, or spawn can take effect afterwards.
    pub fn end_game(&mut self) {
        self.game_over = true;
    }

    /// Current RNG state of the spawner (for replaying a game)
    pub fn rng_state(&self) -> u32 {
        self.spawner.rng_state()
    }

    /// Write the render projection into a reusable snapshot without
    /// allocating.
    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.player = self.player;
        out.obstacles.clear();
        for obstacle in &self.obstacles {
            let _ = out.obstacles.try_push(*obstacle);
        }
        out.score = self.score;
        out.game_over = self.game_over;
        out.started = self.started;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
