//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has no dependency on the terminal or any other I/O apart from reading
//! configuration, which makes it:
//!
//! - **Deterministic**: Same seed and same inputs produce the same game
//! - **Testable**: Every rule can be driven frame by frame from a test
//! - **Portable**: Runs headless, in the terminal, or in a benchmark
//!
//! # Module Structure
//!
//! - [`board`]: Grid of cells (free, wall, snake body, food)
//! - [`snake`]: Ordered body, direction with reversal guard, growth and speed
//! - [`food`]: Uniform placement on free cells
//! - [`menu`]: Entries and selection for the non-playing states
//! - [`session`]: State machine, movement tick, collisions and scoring
//! - [`config`]: Validated settings from defaults, JSON or environment
//! - [`rng`]: Seeded randomness
//!
//! # Game Rules
//!
//! - **Deferred growth**: Eating food grows the snake on the following move
//! - **Tail chasing**: Moving into the tail cell is legal when the tail leaves it
//! - **Warning frames**: A collision straight ahead is forgiven for a configurable
//!   number of ticks so the player can still turn away
//! - **Speed**: One step faster every 5 segments, clamped to `[1, max]`
//! - **Victory**: No free cell left for the next food item
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameSession, SnakeConfig};
//! use tui_snake_types::{InputEvent, Key, SessionState};
//!
//! let mut session = GameSession::new(SnakeConfig::default().with_seed(1)).unwrap();
//! assert_eq!(session.state(), SessionState::Menu);
//!
//! // "PLAY" is the first main menu entry
//! session.frame(Some(InputEvent::Key(Key::Confirm)), 0).unwrap();
//! assert_eq!(session.state(), SessionState::Play);
//!
//! // Advance one movement tick
//! let interval = session.snake().tick_interval_ms();
//! session.frame(None, interval).unwrap();
//! assert!(session.verify_invariants().is_ok());
//! ```
//!
//! # Timing
//!
//! The host calls [`GameSession::frame`](session::GameSession::frame) once per
//! frame (every [`FRAME_MS`](types::FRAME_MS)) with the elapsed time. The snake
//! moves once `1000 / speed` milliseconds have accumulated.

pub mod board;
pub mod config;
pub mod food;
pub mod menu;
pub mod rng;
pub mod session;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, SnakeConfig};
pub use food::place_food;
pub use menu::{Menu, MenuEntry, MenuKind};
pub use rng::SessionRng;
pub use session::{FrameEvents, GameEvent, GameSession, InvariantViolation};
pub use snake::Snake;
