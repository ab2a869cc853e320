//! Board module - the grid occupancy model
//!
//! The board is a W x H grid where each cell is Free, Wall, SnakeBody or Food.
//! Uses a flat row-major vector (y * width + x) allocated once per game.
//! Coordinates: (x, y) where x grows to the right and y grows downwards.
//!
//! Reads outside the board return [`CellState::Free`] and writes outside the
//! board are ignored. Callers rely on this to keep boundary logic simple; the
//! bounds question is asked explicitly through [`Board::contains`].

use crate::types::{CellState, Coord};

/// The game board - flat vector of cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<CellState>,
}

impl Board {
    /// Create a new board with every cell Free
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Free; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if !self.contains(at) {
            return None;
        }
        Some((at.y as usize) * (self.width as usize) + (at.x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Check if a coordinate lies on the board
    pub fn contains(&self, at: Coord) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < self.width as i32 && at.y < self.height as i32
    }

    /// Get the cell at `at`; Free when out of bounds
    pub fn get(&self, at: Coord) -> CellState {
        self.index(at)
            .map(|idx| self.cells[idx])
            .unwrap_or(CellState::Free)
    }

    /// Set the cell at `at`
    /// Returns false (and changes nothing) if out of bounds
    pub fn set(&mut self, at: Coord, state: CellState) -> bool {
        match self.index(at) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Check if the cell at `at` is Free (out of bounds counts as Free)
    pub fn is_free(&self, at: Coord) -> bool {
        self.get(at) == CellState::Free
    }

    /// True once no Free cell remains
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&CellState::Free)
    }

    /// Number of cells currently in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Collect every Free coordinate, row by row
    ///
    /// The board changes every tick, so this is recomputed on each call.
    pub fn free_cells(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.count(CellState::Free));
        self.free_cells_into(&mut out);
        out
    }

    /// Same as [`Board::free_cells`] but reuses the caller's buffer
    pub fn free_cells_into(&self, out: &mut Vec<Coord>) {
        out.clear();
        let width = self.width as usize;
        out.extend(
            self.cells
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == CellState::Free)
                .map(|(i, _)| Coord::new((i % width) as i32, (i / width) as i32)),
        );
    }

    /// Center cell, rounded towards the bottom-right on even sizes
    pub fn midpoint(&self) -> Coord {
        Coord::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Fold a coordinate back onto the board (wrap-around mode)
    pub fn wrap(&self, at: Coord) -> Coord {
        if self.width == 0 || self.height == 0 {
            return at;
        }
        Coord::new(
            at.x.rem_euclid(self.width as i32),
            at.y.rem_euclid(self.height as i32),
        )
    }

    /// Read-only view of the cells in row-major order
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Reset every cell to Free
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Free);
    }
}
