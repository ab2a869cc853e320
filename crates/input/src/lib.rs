//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events onto the abstract [`crate::types::Key`] set and
//! exposes an [`InputSource`] that the runner polls once per frame without
//! blocking. A scripted source stands in for the terminal in tests.

pub mod map;
pub mod source;

pub use tui_snake_types as types;

pub use map::{map_event, map_key, should_quit};
pub use source::{InputSource, ScriptedInput, TerminalInput};
