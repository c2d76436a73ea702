//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Canvas Dimensions
//!
//! The game simulates a fixed logical pixel canvas:
//!
//! - **Width**: 600 logical pixels
//! - **Height**: 600 logical pixels
//!
//! The terminal layer scales logical pixels down to character cells; the
//! simulation itself never deals in cells.
//!
//! # Entity Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_WIDTH` / `PLAYER_HEIGHT` | 50 | Player square size |
//! | `PLAYER_STEP` | 100 | Horizontal displacement per move action |
//! | `PLAYER_SPAWN_X` | 95 | Starting column (canvas/5 - width/2) |
//! | `PLAYER_Y` | 530 | Fixed row (canvas - height - bottom margin) |
//! | `OBSTACLE_WIDTH` / `OBSTACLE_HEIGHT` | 50 | Obstacle square size |
//! | `OBSTACLE_SPEED` | 10 | Descent in pixels per tick |
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SPAWN_INTERVAL_MS` | 2000 | Period between obstacle spawns |
//!
//! # Examples
//!
//! ```
//! use tui_dodge_types::{Rect, CANVAS_WIDTH, PLAYER_SPAWN_X, PLAYER_Y};
//!
//! assert_eq!(CANVAS_WIDTH, 600);
//! assert_eq!(PLAYER_SPAWN_X, 95);
//! assert_eq!(PLAYER_Y, 530);
//!
//! let a = Rect::new(0, 0, 50, 50);
//! let b = Rect::new(25, 25, 50, 50);
//! assert!(a.overlaps(&b));
//! ```

/// Canvas width in logical pixels
pub const CANVAS_WIDTH: i32 = 600;

/// Canvas height in logical pixels
pub const CANVAS_HEIGHT: i32 = 600;

/// Player square width in logical pixels
pub const PLAYER_WIDTH: i32 = 50;

/// Player square height in logical pixels
pub const PLAYER_HEIGHT: i32 = 50;

/// Horizontal displacement per move action
pub const PLAYER_STEP: i32 = 100;

/// Gap between the player and the bottom canvas edge
pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

/// Player starting column: one fifth across the canvas, centered on the square
pub const PLAYER_SPAWN_X: i32 = CANVAS_WIDTH / 5 - PLAYER_WIDTH / 2;

/// Player row; the player never moves vertically
pub const PLAYER_Y: i32 = CANVAS_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN;

/// Obstacle square width in logical pixels
pub const OBSTACLE_WIDTH: i32 = 50;

/// Obstacle square height in logical pixels
pub const OBSTACLE_HEIGHT: i32 = 50;

/// Obstacle descent in logical pixels per tick
pub const OBSTACLE_SPEED: i32 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Period between obstacle spawns in milliseconds
pub const SPAWN_INTERVAL_MS: u32 = 2000;

/// Hard capacity of the live obstacle collection.
///
/// At one spawn per 2000ms and a ~1.1s obstacle lifetime, at most two
/// obstacles are ever live; the cap exists so the collection can stay
/// allocation-free.
pub const MAX_OBSTACLES: usize = 32;

/// Game actions that can be applied to modify game state
///
/// The player only moves horizontally; each action is one fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the player one step left
    MoveLeft,
    /// Move the player one step right
    MoveRight,
}

/// Axis-aligned rectangle in logical pixel coordinates
///
/// Both the player and obstacles are represented as `Rect`s for collision
/// testing and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Axis-aligned bounding-box overlap test
    ///
    /// Strict inequalities: rectangles that merely share an edge do not
    /// overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dodge_types::Rect;
    ///
    /// let a = Rect::new(0, 0, 50, 50);
    /// assert!(a.overlaps(&Rect::new(49, 49, 50, 50)));
    /// assert!(!a.overlaps(&Rect::new(50, 0, 50, 50))); // edge-touching
    /// assert!(!a.overlaps(&Rect::new(100, 100, 50, 50)));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_layout_constants() {
        // Derived constants pin the original layout arithmetic.
        assert_eq!(PLAYER_SPAWN_X, 95);
        assert_eq!(PLAYER_Y, 530);
        assert_eq!(CANVAS_WIDTH - PLAYER_WIDTH, 550);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Rect::new(10, 10, 50, 50);
        let b = Rect::new(40, 40, 50, 50);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(25, 25, 10, 10);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn edge_touching_is_not_overlap() {
        let a = Rect::new(0, 0, 50, 50);
        // Shares the right edge.
        assert!(!a.overlaps(&Rect::new(50, 0, 50, 50)));
        // Shares the bottom edge.
        assert!(!a.overlaps(&Rect::new(0, 50, 50, 50)));
        // Shares only a corner.
        assert!(!a.overlaps(&Rect::new(50, 50, 50, 50)));
    }
}
