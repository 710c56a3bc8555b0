//! Board module - manages the occupancy grid
//!
//! The board is a 10x21 grid: 20 visible rows plus one hidden vanish row on
//! top (row 0). Each cell is empty or holds the kind of the piece committed
//! there. Storage is a flat row-major array, so line clears shift rows in
//! place without allocating.
//!
//! Coordinates are (row, col): row 0..=20 top to bottom, col 0..=9 left to right.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_COLUMNS, HIDDEN_ROWS, TOTAL_ROWS};

const WIDTH: usize = BOARD_COLUMNS as usize;
const HEIGHT: usize = TOTAL_ROWS as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one `clear_full_lines` call, top to bottom.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 21 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= HEIGHT as i8 || col < 0 || col >= WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn columns(&self) -> u8 {
        BOARD_COLUMNS
    }

    /// Rows including the hidden vanish row
    pub fn rows(&self) -> u8 {
        TOTAL_ROWS
    }

    /// Get cell at (row, col), None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether every occupied cell of `shape`, with its origin at (row, col),
    /// lands on an empty in-bounds cell. Empty shape cells are never checked.
    ///
    /// Rows above the grid count as out of bounds.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        shape
            .filled_cells()
            .all(|(dr, dc)| matches!(self.get(row + dr, col + dc), Some(None)))
    }

    /// Write `kind` into every occupied cell of `shape` at (row, col).
    ///
    /// Returns true when any written cell lies in the hidden vanish row or
    /// above it: the terminal overflow signal. Cells outside the grid are
    /// skipped.
    pub fn commit(&mut self, shape: &Shape, kind: PieceKind, row: i8, col: i8) -> bool {
        let mut overflow = false;
        for (dr, dc) in shape.filled_cells() {
            let r = row + dr;
            if r < HIDDEN_ROWS as i8 {
                overflow = true;
            }
            self.set(r, col + dc, Some(kind));
        }
        overflow
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).map_or(false, |cells| cells.iter().all(Option::is_some))
    }

    /// Cells of one row, None if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= HEIGHT {
            return None;
        }
        let start = row * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Remove every full row, hidden row included, and pull the rows above
    /// down. The vacated rows at the top are empty.
    ///
    /// Returns the removed row indices (pre-clear coordinates, top to bottom).
    pub fn clear_full_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = HEIGHT;

        // Scan bottom-up, compacting kept rows towards the bottom.
        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        self.cells[..write_row * WIDTH].fill(None);

        cleared.reverse();
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill every column of `row` except those in `gaps`.
    pub fn fill_row_except(&mut self, row: i8, gaps: &[i8], kind: PieceKind) {
        for col in 0..WIDTH as i8 {
            if !gaps.contains(&col) {
                self.set(row, col, Some(kind));
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(20, 9), Some(209));
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(21, 0), None);
        assert_eq!(Board::index(-1, 0), None);
    }

    #[test]
    fn commit_reports_overflow_only_in_vanish_row() {
        let o = base_shape(PieceKind::O);

        let mut board = Board::new();
        assert!(board.commit(&o, PieceKind::O, 0, 4));
        assert_eq!(board.get(0, 4), Some(Some(PieceKind::O)));
        assert_eq!(board.get(1, 5), Some(Some(PieceKind::O)));

        let mut board = Board::new();
        assert!(!board.commit(&o, PieceKind::O, 1, 4));
    }

    #[test]
    fn clear_keeps_row_order_of_survivors() {
        let mut board = Board::new();
        board.fill_row_except(20, &[], PieceKind::I);
        board.set(19, 0, Some(PieceKind::T));
        board.fill_row_except(18, &[], PieceKind::I);
        board.set(17, 1, Some(PieceKind::S));

        let cleared = board.clear_full_lines();

        assert_eq!(cleared.as_slice(), &[18, 20]);
        assert_eq!(board.get(20, 0), Some(Some(PieceKind::T)));
        assert_eq!(board.get(19, 1), Some(Some(PieceKind::S)));
        assert!(board.row(18).unwrap().iter().all(Option::is_none));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn clear_scans_hidden_row() {
        let mut board = Board::new();
        board.fill_row_except(0, &[], PieceKind::Z);
        board.set(5, 5, Some(PieceKind::L));

        let cleared = board.clear_full_lines();

        assert_eq!(cleared.as_slice(), &[0]);
        assert!(board.row(0).unwrap().iter().all(Option::is_none));
        assert_eq!(board.get(5, 5), Some(Some(PieceKind::L)));
    }
}
