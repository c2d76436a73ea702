//! tui-dodge (workspace facade crate).
//!
//! This package keeps the public `tui_dodge::{core,input,term,types}` API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_dodge_core as core;
pub use tui_dodge_input as input;
pub use tui_dodge_term as term;
pub use tui_dodge_types as types;
