//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. One key press is
//! one fixed player step; there is no auto-repeat state, so the mapping is a
//! pure function.

pub mod map;

pub use tui_dodge_types as types;

pub use map::{handle_key_event, should_quit};
