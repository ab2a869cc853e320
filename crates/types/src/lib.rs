//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Board Defaults
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: board midpoint, snake extending to the left
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame pacing interval (~60 FPS) |
//! | `DEFAULT_BASE_SPEED` | 5 | Movement ticks per second at the initial length |
//! | `DEFAULT_MAX_SPEED` | 12 | Speed cap |
//! | `MIN_SPEED` | 1 | Speed floor |
//! | `SPEED_STEP_LENGTH` | 5 | Length increments per speed step |
//!
//! A snake moving at speed `s` advances once every `1000 / s` milliseconds,
//! independent of how often frames are rendered.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Coord, Direction, Key};
//!
//! let head = Coord::new(2, 2);
//! assert_eq!(head.step(Direction::Right), Coord::new(3, 2));
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert_eq!(Key::Left.direction(), Some(Direction::Left));
//! assert_eq!(Key::Confirm.direction(), None);
//! ```

use std::fmt;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Default number of segments at the start of a game
pub const DEFAULT_INITIAL_LENGTH: u16 = 3;

/// Default speed (movement ticks per second)
pub const DEFAULT_BASE_SPEED: u32 = 5;

/// Default speed cap
pub const DEFAULT_MAX_SPEED: u32 = 12;

/// Speed never drops below this value
pub const MIN_SPEED: u32 = 1;

/// Every this many segments the snake speeds up by one
pub const SPEED_STEP_LENGTH: usize = 5;

/// Default score awarded per food eaten
pub const DEFAULT_FOOD_REWARD: u32 = 10;

/// Default number of grace ticks before a collision is fatal
pub const DEFAULT_WARNING_FRAMES: u32 = 1;

/// Frame pacing interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_are_consistent() {
        assert!(DEFAULT_MAX_SPEED >= DEFAULT_BASE_SPEED);
        assert!(DEFAULT_BASE_SPEED >= MIN_SPEED);
        assert!((DEFAULT_INITIAL_LENGTH as u32) < (DEFAULT_BOARD_WIDTH as u32) * (DEFAULT_BOARD_HEIGHT as u32));
        assert!(DEFAULT_INITIAL_LENGTH <= DEFAULT_BOARD_WIDTH / 2 + 1);
    }

    #[test]
    fn opposite_pairs() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
    }

    #[test]
    fn step_moves_one_cell() {
        let c = Coord::new(0, 0);
        assert_eq!(c.step(Direction::Up), Coord::new(0, -1));
        assert_eq!(c.step(Direction::Down), Coord::new(0, 1));
        assert_eq!(c.step(Direction::Left), Coord::new(-1, 0));
        assert!(c.is_adjacent(c.step(Direction::Right)));
        assert!(!c.is_adjacent(Coord::new(1, 1)));
        assert!(!c.is_adjacent(c));
    }
}

/// Grid-relative cell coordinate
///
/// Signed so that the lookahead one step past any edge is representable;
/// the board decides what is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one cell away in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// True if `other` is exactly one cardinal step away
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement direction of the snake
///
/// Opposite pairs are Up/Down and Left/Right. A snake may never turn
/// directly into its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector (dx, dy); y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Occupancy state of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Free,
    Wall,
    SnakeBody,
    Food,
}

/// Top-level game state
///
/// The same value names the menu shown while the game is not in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Menu,
    Play,
    Pause,
    Victory,
    Defeat,
    /// Terminal state; the frame loop stops when it sees it
    Exit,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Menu => "menu",
            SessionState::Play => "play",
            SessionState::Pause => "pause",
            SessionState::Victory => "victory",
            SessionState::Defeat => "defeat",
            SessionState::Exit => "exit",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical keys understood by the game
///
/// Input backends map their raw events onto these. `Escape` doubles as the
/// cancel key in the game-over menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Escape,
}

impl Key {
    /// The movement direction for directional keys
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Confirm | Key::Escape => None,
        }
    }
}

/// One polled input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Window (terminal) close request
    Close,
}
