//! Snake module - the ordered body and its movement rules
//!
//! The body is an owned `VecDeque<Coord>` with the head at the front and the
//! tail at the back. Moving pushes a new head and pops the tail; growth is
//! deferred, so a pending growth simply skips one tail pop on a later move.
//!
//! The snake knows nothing about the board. [`crate::session::GameSession`]
//! mirrors every move onto the board right after it happens.

use std::collections::VecDeque;

use crate::types::{Coord, Direction, MIN_SPEED, SPEED_STEP_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Head at index 0, tail at the back
    body: VecDeque<Coord>,
    /// Direction used by the next move
    direction: Direction,
    /// Direction of the last committed move
    heading: Direction,
    speed: u32,
    base_speed: u32,
    max_speed: u32,
    initial_length: usize,
    growth_pending: u32,
}

impl Snake {
    /// Create a snake whose head is at `start`, body extending to the left
    ///
    /// The snake faces Right. `initial_length` is clamped to at least one
    /// segment.
    pub fn new(start: Coord, initial_length: usize, base_speed: u32, max_speed: u32) -> Self {
        let initial_length = initial_length.max(1);
        let body = (0..initial_length)
            .map(|i| Coord::new(start.x - i as i32, start.y))
            .collect();

        let mut snake = Self {
            body,
            direction: Direction::Right,
            heading: Direction::Right,
            speed: base_speed,
            base_speed,
            max_speed,
            initial_length,
            growth_pending: 0,
        };
        snake.speed = snake.speed_for_length();
        snake
    }

    /// Segments from head to tail
    pub fn segments(&self) -> &VecDeque<Coord> {
        &self.body
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn tail(&self) -> Coord {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.body.contains(&at)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Movement ticks per second
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Milliseconds between two movement ticks at the current speed
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.speed.max(MIN_SPEED)
    }

    pub fn growth_pending(&self) -> u32 {
        self.growth_pending
    }

    /// Request a new direction for the next move
    ///
    /// Returns false when the request is a reversal, either of the pending
    /// direction or of the direction last moved in. Two quick turns between
    /// ticks therefore cannot fold the head back onto the neck.
    // Deliberately stricter than rejecting only the opposite of `direction`.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.direction) || dir.is_opposite(self.heading) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Where the head lands on the next move (no wrapping)
    pub fn next_head_position(&self) -> Coord {
        self.head().step(self.direction)
    }

    /// Move one cell in the current direction
    ///
    /// Returns the vacated tail cell, or None on a growth move.
    pub fn advance(&mut self) -> Option<Coord> {
        let next = self.next_head_position();
        self.advance_to(next)
    }

    /// Move the head onto `next`, which the caller has already resolved
    /// (wrap-around mode folds the lookahead back onto the board first)
    pub fn advance_to(&mut self, next: Coord) -> Option<Coord> {
        let vacated = if self.growth_pending > 0 {
            self.growth_pending -= 1;
            None
        } else {
            self.body.pop_back()
        };

        self.body.push_front(next);
        self.heading = self.direction;

        if vacated.is_none() {
            self.speed = self.speed_for_length();
        }
        vacated
    }

    /// Queue one segment of growth for a later move
    pub fn grow(&mut self) {
        self.growth_pending += 1;
    }

    /// Drop the tail segment; a single-segment snake is left alone
    pub fn shrink(&mut self) -> Option<Coord> {
        if self.body.len() <= 1 {
            return None;
        }
        let removed = self.body.pop_back();
        self.speed = self.speed_for_length();
        removed
    }

    /// One speed step per `SPEED_STEP_LENGTH` segments gained over the start,
    /// clamped to `[MIN_SPEED, max_speed]`
    fn speed_for_length(&self) -> u32 {
        let steps = (self.body.len() / SPEED_STEP_LENGTH) as i64
            - (self.initial_length / SPEED_STEP_LENGTH) as i64;
        let speed = (self.base_speed as i64 + steps).max(MIN_SPEED as i64);
        (speed as u32).min(self.max_speed.max(MIN_SPEED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_at(x: i32, y: i32, len: usize) -> Snake {
        Snake::new(Coord::new(x, y), len, 1, 10)
    }

    #[test]
    fn test_new_extends_backwards_from_head() {
        let snake = snake_at(5, 5, 3);
        let segments: Vec<_> = snake.segments().iter().copied().collect();
        assert_eq!(
            segments,
            vec![Coord::new(5, 5), Coord::new(4, 5), Coord::new(3, 5)]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.growth_pending(), 0);
    }

    #[test]
    fn test_zero_length_is_clamped() {
        let snake = snake_at(0, 0, 0);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = snake_at(5, 5, 3);
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.next_head_position(), Coord::new(6, 5));
    }

    #[test]
    fn test_double_turn_cannot_reverse_before_moving() {
        let mut snake = snake_at(5, 5, 3);
        assert!(snake.set_direction(Direction::Up));
        // Heading is still Right, so Left would fold onto the neck.
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Up);

        snake.advance();
        assert_eq!(snake.heading(), Direction::Up);
        assert!(snake.set_direction(Direction::Left));
    }

    #[test]
    fn test_set_direction_takes_effect_on_next_move() {
        let mut snake = snake_at(5, 5, 3);
        assert!(snake.set_direction(Direction::Down));
        assert_eq!(snake.head(), Coord::new(5, 5));

        snake.advance();
        assert_eq!(snake.head(), Coord::new(5, 6));
    }

    #[test]
    fn test_advance_pops_tail() {
        let mut snake = snake_at(5, 5, 3);
        let vacated = snake.advance();
        assert_eq!(vacated, Some(Coord::new(3, 5)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Coord::new(6, 5));
        assert_eq!(snake.tail(), Coord::new(4, 5));
    }

    #[test]
    fn test_growth_is_deferred_to_next_move() {
        let mut snake = snake_at(5, 5, 3);
        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.growth_pending(), 1);

        let vacated = snake.advance();
        assert_eq!(vacated, None);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Coord::new(3, 5));
        assert_eq!(snake.growth_pending(), 0);

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_speed_steps_every_five_segments() {
        let mut snake = Snake::new(Coord::new(10, 0), 3, 2, 4);
        assert_eq!(snake.speed(), 2);

        // 3 -> 5 segments crosses one multiple of five.
        snake.grow();
        snake.grow();
        snake.advance();
        assert_eq!(snake.speed(), 2);
        snake.advance();
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.speed(), 3);

        for _ in 0..10 {
            snake.grow();
            snake.advance();
        }
        assert_eq!(snake.len(), 15);
        assert_eq!(snake.speed(), 4, "capped at max speed");
    }

    #[test]
    fn test_shrink_lowers_speed_symmetrically() {
        let mut snake = Snake::new(Coord::new(10, 0), 5, 3, 10);
        assert_eq!(snake.speed(), 3);
        snake.grow();
        snake.advance();
        for _ in 0..4 {
            snake.grow();
            snake.advance();
        }
        assert_eq!(snake.len(), 10);
        assert_eq!(snake.speed(), 4);

        assert!(snake.shrink().is_some());
        assert_eq!(snake.len(), 9);
        assert_eq!(snake.speed(), 3);

        while snake.shrink().is_some() {}
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.speed(), 2);
    }

    #[test]
    fn test_tick_interval_follows_speed() {
        let snake = Snake::new(Coord::new(3, 0), 1, 4, 10);
        assert_eq!(snake.tick_interval_ms(), 250);
    }
}
