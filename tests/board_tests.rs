//! Board tests - occupancy grid and free-cell enumeration

use tui_snake::core::Board;
use tui_snake::types::{CellState, Coord};

#[test]
fn test_board_new_all_free() {
    let board = Board::new(6, 4);
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 4);
    assert_eq!(board.capacity(), 24);

    for y in 0..4 {
        for x in 0..6 {
            let at = Coord::new(x, y);
            assert!(board.contains(at), "cell {at} should be on the board");
            assert_eq!(board.get(at), CellState::Free);
        }
    }
    assert_eq!(board.free_cells().len(), 24);
}

#[test]
fn test_board_out_of_bounds_reads_free_and_ignores_writes() {
    let mut board = Board::new(3, 3);

    for at in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(3, 0),
        Coord::new(0, 3),
    ] {
        assert!(!board.contains(at));
        assert_eq!(board.get(at), CellState::Free);
        assert!(!board.set(at, CellState::Wall));
    }
    assert_eq!(board.count(CellState::Wall), 0);
}

#[test]
fn test_board_set_and_count() {
    let mut board = Board::new(4, 4);
    assert!(board.set(Coord::new(1, 2), CellState::SnakeBody));
    assert!(board.set(Coord::new(2, 2), CellState::SnakeBody));
    assert!(board.set(Coord::new(3, 0), CellState::Food));
    assert!(board.set(Coord::new(0, 0), CellState::Wall));

    assert_eq!(board.count(CellState::SnakeBody), 2);
    assert_eq!(board.count(CellState::Food), 1);
    assert_eq!(board.count(CellState::Wall), 1);
    assert_eq!(board.count(CellState::Free), 12);
    assert!(!board.is_free(Coord::new(1, 2)));
}

#[test]
fn test_free_cells_row_major_and_exclusive() {
    let mut board = Board::new(3, 2);
    board.set(Coord::new(1, 0), CellState::SnakeBody);
    board.set(Coord::new(0, 1), CellState::Food);

    assert_eq!(
        board.free_cells(),
        vec![
            Coord::new(0, 0),
            Coord::new(2, 0),
            Coord::new(1, 1),
            Coord::new(2, 1)
        ]
    );

    let mut buf = vec![Coord::new(9, 9)];
    board.free_cells_into(&mut buf);
    assert_eq!(buf, board.free_cells());
}

#[test]
fn test_full_board_has_no_free_cells() {
    let mut board = Board::new(2, 2);
    for at in board.free_cells() {
        board.set(at, CellState::Wall);
    }
    assert!(board.free_cells().is_empty());
    assert!(board.is_complete());

    board.clear();
    assert_eq!(board.count(CellState::Free), 4);
}

#[test]
fn test_midpoint_and_wrap() {
    let board = Board::new(5, 4);
    assert_eq!(board.midpoint(), Coord::new(2, 2));

    assert_eq!(board.wrap(Coord::new(5, 1)), Coord::new(0, 1));
    assert_eq!(board.wrap(Coord::new(-1, 1)), Coord::new(4, 1));
    assert_eq!(board.wrap(Coord::new(2, -1)), Coord::new(2, 3));
    assert_eq!(board.wrap(Coord::new(2, 4)), Coord::new(2, 0));
}
