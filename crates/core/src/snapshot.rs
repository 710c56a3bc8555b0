//! Read-only view of the engine, produced once per frame.
//!
//! Views and observers only ever see this; they never reach into `GameState`.

use arrayvec::ArrayVec;

use crate::active::ActivePiece;
use crate::lock_delay::LockPhase;
use crate::pieces::Shape;
use crate::types::{
    Cell, PieceColor, PieceKind, BOARD_COLUMNS, HIDDEN_ROWS, MAX_PREVIEW_LEN, VISIBLE_ROWS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub shape: Shape,
    /// Board row of the matrix origin (hidden row included)
    pub row: i8,
    pub col: i8,
    pub committed: bool,
}

impl ActiveSnapshot {
    /// Occupied cells in visible-row coordinates; cells in the vanish row are
    /// dropped.
    pub fn visible_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        visible_cells_at(&self.shape, self.row, self.col)
    }

    /// Occupied cells of the ghost projection in visible-row coordinates.
    pub fn ghost_cells(&self, ghost_row: i8) -> impl Iterator<Item = (u8, u8)> + '_ {
        visible_cells_at(&self.shape, ghost_row, self.col)
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            color: value.kind.color(),
            shape: value.shape,
            row: value.row,
            col: value.col,
            committed: value.committed,
        }
    }
}

fn visible_cells_at(shape: &Shape, row: i8, col: i8) -> impl Iterator<Item = (u8, u8)> + '_ {
    shape.filled_cells().filter_map(move |(dr, dc)| {
        let r = row + dr - HIDDEN_ROWS as i8;
        let c = col + dc;
        if r < 0 || r >= VISIBLE_ROWS as i8 || c < 0 || c >= BOARD_COLUMNS as i8 {
            return None;
        }
        Some((r as u8, c as u8))
    })
}

pub type VisibleGrid = [[Cell; BOARD_COLUMNS as usize]; VISIBLE_ROWS as usize];

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Committed cells of the visible rows (the vanish row is not included)
    pub board: VisibleGrid,
    pub active: Option<ActiveSnapshot>,
    /// Board row the active piece would land on
    pub ghost_row: Option<i8>,
    pub hold: Option<PieceKind>,
    pub hold_locked: bool,
    pub next: ArrayVec<PieceKind, MAX_PREVIEW_LEN>,
    pub lines_cleared: u32,
    pub level: u32,
    pub fall_interval_ms: f64,
    pub lock_phase: LockPhase,
    pub piece_id: u32,
    pub episode_id: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Color of a committed visible cell
    pub fn color_at(&self, row: usize, col: usize) -> Option<PieceColor> {
        self.board
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
            .map(|kind| kind.color())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLUMNS as usize]; VISIBLE_ROWS as usize],
            active: None,
            ghost_row: None,
            hold: None,
            hold_locked: false,
            next: ArrayVec::new(),
            lines_cleared: 0,
            level: 1,
            fall_interval_ms: 0.0,
            lock_phase: LockPhase::Falling,
            piece_id: 0,
            episode_id: 0,
            paused: false,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_shape;

    #[test]
    fn vanish_row_cells_are_not_visible() {
        let snap = ActiveSnapshot {
            kind: PieceKind::T,
            color: PieceColor::Purple,
            shape: base_shape(PieceKind::T),
            row: 0,
            col: 3,
            committed: false,
        };
        let cells: Vec<_> = snap.visible_cells().collect();
        assert_eq!(cells, vec![(0, 3), (0, 4), (0, 5)]);
    }

    #[test]
    fn color_at_maps_kind_to_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Some(PieceKind::L);
        assert_eq!(snap.color_at(19, 0), Some(PieceColor::Orange));
        assert_eq!(snap.color_at(19, 1), None);
        assert_eq!(snap.color_at(40, 0), None);
    }
}
