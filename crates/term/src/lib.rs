//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map the logical pixel canvas to character cells in one place
//! - Keep the scene mapper pure so it can be unit-tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_dodge_core as core;
pub use tui_dodge_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
