//! Active piece controller
//!
//! Owns the falling piece's orientation and position. Every mutation is
//! collision-checked against the board; a rejected move leaves the piece
//! untouched and simply returns false.

use crate::board::Board;
use crate::lock_delay::LockDelay;
use crate::pieces::{base_shape, spawn_column, Shape, SPAWN_ROW};
use crate::types::PieceKind;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation (base shape after 0..=3 clockwise turns)
    pub shape: Shape,
    /// Matrix origin row, in board coordinates (hidden row included)
    pub row: i8,
    /// Matrix origin column
    pub col: i8,
    /// Hard-dropped; no further input is accepted
    pub committed: bool,
    pub lock: LockDelay,
}

impl ActivePiece {
    /// A fresh piece in its spawn orientation and position, all flags cleared.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            row: SPAWN_ROW,
            col: spawn_column(kind),
            committed: false,
            lock: LockDelay::new(),
        }
    }

    pub fn in_grace(&self) -> bool {
        self.lock.in_grace()
    }

    pub fn grace_cooldown(&self) -> bool {
        self.lock.cooldown()
    }

    /// Whether the piece fits where it is
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.row, self.col)
    }

    /// Whether one gravity step is legal
    pub fn can_descend(&self, board: &Board) -> bool {
        board.can_place(&self.shape, self.row + 1, self.col)
    }

    /// Shift by (d_row, d_col) if the target position is legal.
    pub fn try_move(&mut self, board: &Board, d_row: i8, d_col: i8) -> bool {
        if !board.can_place(&self.shape, self.row + d_row, self.col + d_col) {
            return false;
        }
        self.row += d_row;
        self.col += d_col;
        true
    }

    /// Rotate clockwise in place (no kicks) if the new orientation fits.
    pub fn try_rotate_cw(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotate_cw();
        if !board.can_place(&rotated, self.row, self.col) {
            return false;
        }
        self.shape = rotated;
        true
    }

    /// Lowest row the piece could occupy at its current column and orientation.
    pub fn ghost_row(&self, board: &Board) -> i8 {
        let mut row = self.row;
        while board.can_place(&self.shape, row + 1, self.col) {
            row += 1;
        }
        row
    }

    /// Drop to the ghost row and mark the piece committed.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self, board: &Board) -> u8 {
        let target = self.ghost_row(board);
        let distance = (target - self.row) as u8;
        self.row = target;
        self.committed = true;
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_positions() {
        let t = ActivePiece::spawn(PieceKind::T);
        assert_eq!((t.row, t.col), (0, 3));
        let o = ActivePiece::spawn(PieceKind::O);
        assert_eq!((o.row, o.col), (0, 4));
        assert!(!o.committed && !o.in_grace() && !o.grace_cooldown());
    }

    #[test]
    fn rejected_move_leaves_piece_unchanged() {
        let board = Board::new();
        let mut piece = ActivePiece::spawn(PieceKind::O);
        for _ in 0..4 {
            assert!(piece.try_move(&board, 0, 1));
        }
        let before = piece;
        assert!(!piece.try_move(&board, 0, 1));
        assert_eq!(piece, before);
    }

    #[test]
    fn rotation_is_rejected_without_kicks() {
        let mut board = Board::new();
        let mut piece = ActivePiece::spawn(PieceKind::I);
        // The vertical I occupies column col + 2.
        board.set(3, 5, Some(PieceKind::Z));
        let before = piece;
        assert!(!piece.try_rotate_cw(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn ghost_row_does_not_move_piece() {
        let board = Board::new();
        let piece = ActivePiece::spawn(PieceKind::O);
        assert_eq!(piece.ghost_row(&board), 19);
        assert_eq!(piece.row, 0);
    }

    #[test]
    fn hard_drop_marks_committed() {
        let board = Board::new();
        let mut piece = ActivePiece::spawn(PieceKind::T);
        let distance = piece.hard_drop(&board);
        assert_eq!(distance, 19);
        assert_eq!(piece.row, 19);
        assert!(piece.committed);
        assert!(!piece.can_descend(&board));
    }
}
