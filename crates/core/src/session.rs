//! Game session - the top-level state machine
//!
//! This module ties together the board, the snake and food placement. It owns
//! the score, the movement timer and the menu/play/pause/victory/defeat
//! lifecycle, and it is the only code that mutates the board or the snake.
//!
//! Every snake mutation is followed immediately by the matching board
//! mutation, so the two representations never drift apart. The invariants
//! are checked after each movement tick in debug builds.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::board::Board;
use crate::config::{ConfigError, SnakeConfig};
use crate::food::place_food;
use crate::menu::Menu;
use crate::rng::SessionRng;
use crate::snake::Snake;
use crate::types::{CellState, Coord, Direction, InputEvent, Key, SessionState};

/// Something observable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged {
        from: SessionState,
        to: SessionState,
    },
    Turned(Direction),
    Moved {
        head: Coord,
    },
    AteFood {
        at: Coord,
        score: u32,
    },
    FoodPlaced(Coord),
    /// A collision was deferred by a grace tick
    Warned {
        frames: u32,
    },
}

/// Upper bound on events produced by a single frame
pub const MAX_FRAME_EVENTS: usize = 8;

pub type FrameEvents = ArrayVec<GameEvent, MAX_FRAME_EVENTS>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("board marks {board} snake cells but the snake has {snake} segments")]
    BodyCountMismatch { board: usize, snake: usize },
    #[error("segment {0} is not marked as snake body on the board")]
    SegmentNotOnBoard(Coord),
    #[error("segment {0} appears more than once")]
    DuplicateSegment(Coord),
    #[error("segments {0} and {1} are not adjacent")]
    BrokenBody(Coord, Coord),
    #[error("{0} food cells on the board during play")]
    MultipleFood(usize),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SnakeConfig,
    state: SessionState,
    board: Board,
    snake: Snake,
    /// Present in every state except Play and Exit
    menu: Option<Menu>,
    rng: SessionRng,
    score: u32,
    /// Milliseconds accumulated towards the next movement tick
    timer_ms: u32,
    warning_frames: u32,
    games_started: u32,
}

impl GameSession {
    /// Create a session sitting in the main menu
    ///
    /// Fails fast on an invalid configuration.
    pub fn new(config: SnakeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (board, snake) = build_playfield(&config);
        let rng = SessionRng::from_seed_option(config.seed);
        log::info!(
            "session created: {}x{} board, seed {}",
            config.board_width,
            config.board_height,
            rng.seed()
        );

        Ok(Self {
            config,
            state: SessionState::Menu,
            board,
            snake,
            menu: Menu::for_state(SessionState::Menu),
            rng,
            score: 0,
            timer_ms: 0,
            warning_frames: 0,
            games_started: 0,
        })
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }

    pub fn warning_frames(&self) -> u32 {
        self.warning_frames
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether `from -> to` may be requested from outside the simulation
    ///
    /// Defeat and Victory are outcomes of a tick and cannot be requested.
    pub fn transition_allowed(from: SessionState, to: SessionState) -> bool {
        use SessionState as S;

        match (from, to) {
            (S::Exit, _) => false,
            (_, S::Exit) => true,
            (S::Menu, S::Play) => true,
            (S::Play, S::Pause) => true,
            (S::Pause, S::Play) | (S::Pause, S::Menu) => true,
            (S::Victory, S::Menu) | (S::Defeat, S::Menu) => true,
            _ => false,
        }
    }

    /// Ask for a state change (menu selections end up here)
    ///
    /// Returns `Ok(false)` and changes nothing when the transition is not
    /// allowed. Menu -> Play starts a new game.
    pub fn request_transition(&mut self, target: SessionState) -> Result<bool, ConfigError> {
        let mut events = FrameEvents::new();
        self.try_transition(target, &mut events)
    }

    /// Reset the playfield, score and timers for a fresh game
    ///
    /// The session state is left alone; choosing PLAY in the main menu runs
    /// this on the way into Play.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        let mut events = FrameEvents::new();
        self.start_new_game(&mut events)
    }

    /// Run one frame: apply at most one input event, then advance the
    /// simulation by `elapsed_ms` if the game is in play
    pub fn frame(
        &mut self,
        input: Option<InputEvent>,
        elapsed_ms: u32,
    ) -> Result<FrameEvents, ConfigError> {
        let mut events = FrameEvents::new();

        let key = match input {
            Some(InputEvent::Close) => {
                if self.state != SessionState::Exit {
                    self.enter(SessionState::Exit, &mut events);
                }
                return Ok(events);
            }
            Some(InputEvent::Key(key)) => Some(key),
            None => None,
        };

        match self.state {
            SessionState::Play => self.play_frame(key, elapsed_ms, &mut events)?,
            SessionState::Exit => {}
            SessionState::Menu
            | SessionState::Pause
            | SessionState::Victory
            | SessionState::Defeat => {
                if let Some(key) = key {
                    self.menu_frame(key, &mut events)?;
                }
            }
        }

        Ok(events)
    }

    /// Check that the board and the snake agree
    pub fn verify_invariants(&self) -> Result<(), InvariantViolation> {
        let board = self.board.count(CellState::SnakeBody);
        let snake = self.snake.len();
        if board != snake {
            return Err(InvariantViolation::BodyCountMismatch { board, snake });
        }

        let mut seen = HashSet::with_capacity(snake);
        for &segment in self.snake.segments() {
            if !self.board.contains(segment) || self.board.get(segment) != CellState::SnakeBody {
                return Err(InvariantViolation::SegmentNotOnBoard(segment));
            }
            if !seen.insert(segment) {
                return Err(InvariantViolation::DuplicateSegment(segment));
            }
        }

        let segments = self.snake.segments();
        for (&a, &b) in segments.iter().zip(segments.iter().skip(1)) {
            if !self.adjacent(a, b) {
                return Err(InvariantViolation::BrokenBody(a, b));
            }
        }

        if self.state == SessionState::Play {
            let food = self.board.count(CellState::Food);
            if food > 1 {
                return Err(InvariantViolation::MultipleFood(food));
            }
        }
        Ok(())
    }

    fn try_transition(
        &mut self,
        target: SessionState,
        events: &mut FrameEvents,
    ) -> Result<bool, ConfigError> {
        if !Self::transition_allowed(self.state, target) {
            log::debug!("rejected transition {} -> {}", self.state, target);
            return Ok(false);
        }

        if self.state == SessionState::Menu && target == SessionState::Play {
            self.start_new_game(events)?;
        }
        self.enter(target, events);
        Ok(true)
    }

    fn enter(&mut self, target: SessionState, events: &mut FrameEvents) {
        let from = self.state;
        self.state = target;
        self.menu = Menu::for_state(target);
        log::info!("state {from} -> {target} (score {})", self.score);
        push(events, GameEvent::StateChanged { from, to: target });
    }

    fn start_new_game(&mut self, events: &mut FrameEvents) -> Result<(), ConfigError> {
        self.config.validate()?;

        let (board, snake) = build_playfield(&self.config);
        self.board = board;
        self.snake = snake;
        self.score = 0;
        self.timer_ms = 0;
        self.warning_frames = 0;
        self.games_started = self.games_started.wrapping_add(1);

        // Validation keeps the snake smaller than the board, so a free cell exists.
        if let Some(at) = place_food(&mut self.board, &mut self.rng) {
            push(events, GameEvent::FoodPlaced(at));
        }

        log::info!(
            "new game #{}: snake of {} at {}",
            self.games_started,
            self.snake.len(),
            self.snake.head()
        );
        Ok(())
    }

    fn menu_frame(&mut self, key: Key, events: &mut FrameEvents) -> Result<(), ConfigError> {
        if key == Key::Escape {
            let target = match self.state {
                SessionState::Pause => Some(SessionState::Play),
                SessionState::Victory | SessionState::Defeat => Some(SessionState::Menu),
                _ => None,
            };
            if let Some(target) = target {
                self.try_transition(target, events)?;
            }
            return Ok(());
        }

        let Some(menu) = self.menu.as_mut() else {
            return Ok(());
        };
        if let Some(target) = menu.handle_key(key) {
            self.try_transition(target, events)?;
        }
        Ok(())
    }

    fn play_frame(
        &mut self,
        key: Option<Key>,
        elapsed_ms: u32,
        events: &mut FrameEvents,
    ) -> Result<(), ConfigError> {
        match key {
            Some(Key::Escape) => {
                self.try_transition(SessionState::Pause, events)?;
                return Ok(());
            }
            Some(key) => {
                if let Some(dir) = key.direction() {
                    self.steer(dir, events);
                }
            }
            None => {}
        }

        self.tick(elapsed_ms, events);
        Ok(())
    }

    fn steer(&mut self, dir: Direction, events: &mut FrameEvents) {
        let before = self.snake.direction();
        if self.snake.set_direction(dir) && dir != before {
            push(events, GameEvent::Turned(dir));
        }
    }

    /// Movement tick, gated by the snake's speed
    fn tick(&mut self, elapsed_ms: u32, events: &mut FrameEvents) {
        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        if self.timer_ms < self.snake.tick_interval_ms() {
            return;
        }
        self.timer_ms = 0;

        let next = self.next_head();
        let tail = self.snake.tail();
        let tail_vacates = self.snake.growth_pending() == 0;

        if self.is_fatal(next, tail, tail_vacates) {
            // A wiggle that ends back on the heading still counts as straight.
            let turned = self.snake.direction() != self.snake.heading();
            if !turned && self.warning_frames < self.config.warning_frame_allowance {
                self.warning_frames += 1;
                log::debug!(
                    "collision ahead at {next}, warning frame {}/{}",
                    self.warning_frames,
                    self.config.warning_frame_allowance
                );
                push(
                    events,
                    GameEvent::Warned {
                        frames: self.warning_frames,
                    },
                );
                return;
            }

            log::info!("collision at {next}");
            self.enter(SessionState::Defeat, events);
            return;
        }

        self.warning_frames = 0;

        // Clear the tail before the move so food can never be placed on a
        // cell the snake is about to leave but still marks.
        if tail_vacates {
            self.board.set(tail, CellState::Free);
        }
        let ate = self.board.get(next) == CellState::Food;
        self.snake.advance_to(next);
        self.board.set(next, CellState::SnakeBody);
        log::trace!("head -> {next}");
        push(events, GameEvent::Moved { head: next });

        if ate {
            self.snake.grow();
            self.score = self.score.saturating_add(self.config.food_reward);
            push(
                events,
                GameEvent::AteFood {
                    at: next,
                    score: self.score,
                },
            );

            match place_food(&mut self.board, &mut self.rng) {
                Some(at) => push(events, GameEvent::FoodPlaced(at)),
                None => {
                    log::info!("board full");
                    self.enter(SessionState::Victory, events);
                }
            }
        }

        debug_assert_eq!(self.verify_invariants(), Ok(()));
    }

    fn next_head(&self) -> Coord {
        let next = self.snake.next_head_position();
        if self.config.wrap_around {
            self.board.wrap(next)
        } else {
            next
        }
    }

    /// The tail cell is only safe when it is actually vacated this tick
    fn is_fatal(&self, next: Coord, tail: Coord, tail_vacates: bool) -> bool {
        if !self.board.contains(next) {
            return true;
        }
        match self.board.get(next) {
            CellState::Wall => true,
            CellState::SnakeBody => !(next == tail && tail_vacates),
            CellState::Free | CellState::Food => false,
        }
    }

    fn adjacent(&self, a: Coord, b: Coord) -> bool {
        if a.is_adjacent(b) {
            return true;
        }
        self.config.wrap_around
            && Direction::ALL
                .iter()
                .any(|&dir| self.board.wrap(a.step(dir)) == b)
    }
}

fn build_playfield(config: &SnakeConfig) -> (Board, Snake) {
    let mut board = Board::new(config.board_width, config.board_height);
    let snake = Snake::new(
        board.midpoint(),
        config.initial_snake_length as usize,
        config.base_speed,
        config.max_speed,
    );
    for &segment in snake.segments() {
        board.set(segment, CellState::SnakeBody);
    }
    (board, snake)
}

fn push(events: &mut FrameEvents, event: GameEvent) {
    // Bounded by the frame structure; a dropped event only loses a log line.
    let _ = events.try_push(event);
}
