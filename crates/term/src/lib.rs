//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSession`] into a plain framebuffer (no widget
//! toolkit), then flushes only the changed cells to the terminal.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: session to framebuffer, pure and unit-testable
//! - [`renderer`]: alternate screen handling and diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{segment_color, AnchorY, GameView, Viewport, GRADIENT_LENGTH, RAINBOW};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
