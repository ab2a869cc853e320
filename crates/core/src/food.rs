//! Food placement
//!
//! Stateless: every call enumerates the board's free cells afresh and turns
//! one of them into food.

use crate::board::Board;
use crate::rng::SessionRng;
use crate::types::{CellState, Coord};

/// Place one food item on a uniformly random free cell
///
/// Returns the chosen cell, or None when the board has no free cell left,
/// which the session reads as a win. A single candidate is taken directly
/// without consulting the RNG.
pub fn place_food(board: &mut Board, rng: &mut SessionRng) -> Option<Coord> {
    let free = board.free_cells();
    let at = match free.len() {
        0 => return None,
        1 => free[0],
        n => free[rng.index(n)],
    };
    board.set(at, CellState::Food);
    log::debug!("food placed at {at} ({} free cells)", free.len() - 1);
    Some(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_places_nothing() {
        let mut board = Board::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                board.set(Coord::new(x, y), CellState::SnakeBody);
            }
        }
        let mut rng = SessionRng::new(1);

        assert!(board.free_cells().is_empty());
        assert_eq!(place_food(&mut board, &mut rng), None);
        assert_eq!(board.count(CellState::Food), 0);
    }

    #[test]
    fn test_single_free_cell_is_used() {
        let mut board = Board::new(3, 1);
        board.set(Coord::new(0, 0), CellState::SnakeBody);
        board.set(Coord::new(2, 0), CellState::Wall);
        let mut rng = SessionRng::new(1);

        assert_eq!(place_food(&mut board, &mut rng), Some(Coord::new(1, 0)));
        assert_eq!(board.get(Coord::new(1, 0)), CellState::Food);
        assert!(board.is_complete());
    }

    #[test]
    fn test_food_only_lands_on_free_cells() {
        let mut rng = SessionRng::new(42);
        for _ in 0..200 {
            let mut board = Board::new(4, 4);
            for x in 0..4 {
                board.set(Coord::new(x, 1), CellState::SnakeBody);
            }
            let at = place_food(&mut board, &mut rng).unwrap();
            assert_ne!(at.y, 1);
            assert_eq!(board.count(CellState::Food), 1);
            assert_eq!(board.count(CellState::SnakeBody), 4);
        }
    }

    #[test]
    fn test_placement_reaches_every_free_cell() {
        let mut rng = SessionRng::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let mut board = Board::new(3, 3);
            board.set(Coord::new(1, 1), CellState::SnakeBody);
            seen.insert(place_food(&mut board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 8);
    }
}
