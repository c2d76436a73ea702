//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, terminal I/O, or wall-clock
//! timers, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every tick can be stepped explicitly from tests
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation tick processing
//!
//! # Module Structure
//!
//! - [`game_state`]: Complete game state including player, obstacles, score
//! - [`spawner`]: Periodic obstacle source with a random horizontal offset
//! - [`rng`]: Simple LCG for deterministic random spawn columns
//! - [`snapshot`]: Read-only render projection of the game state
//!
//! # Game Rules
//!
//! - The player is a 50x50 square on a fixed row near the bottom of a
//!   600x600 canvas, moving 100 pixels per key press, guarded at the
//!   canvas edges.
//! - Obstacles are 50x50 squares spawned every 2 seconds at a random
//!   column, just above the visible canvas, falling 10 pixels per tick.
//! - Score increments once per tick while the game is active.
//! - Any bounding-box overlap between the player and an obstacle ends the
//!   session; nothing mutates afterwards.
//!
//! # Example
//!
//! ```
//! use tui_dodge_core::GameState;
//! use tui_dodge_types::{GameAction, TICK_MS};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.tick(TICK_MS);
//!
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system: call
//! [`GameState::tick`](game_state::GameState::tick) every 16ms of game time.
//! The spawner is fed from inside the tick, so a finished or un-started game
//! can neither advance nor spawn.

pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use tui_dodge_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Obstacle, Player};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawner::Spawner;
