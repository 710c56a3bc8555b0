//! Pieces module - rotation tables and spawn offsets
//!
//! Every kind is a square boolean matrix (2x2, 3x3 or 4x4). Rotation is the
//! same transform for all kinds: transpose, then reverse the rows. There is no
//! wall-kick table; a rotation either fits in place or is rejected.
//! Shapes follow the guideline spawn orientations: https://tetris.wiki/SRS

use crate::types::PieceKind;

/// Largest matrix edge among the seven kinds (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Spawn row for every kind (the hidden vanish row).
pub const SPAWN_ROW: i8 = 0;

/// Square occupancy matrix of a piece orientation.
///
/// Only the top-left `size x size` block is meaningful; the rest stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from `N x N` rows of 0/1 flags.
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE);
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Matrix edge length
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Occupied cells as (row, col) offsets from the matrix origin.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |r| {
            (0..n)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// 90° clockwise rotation: `new[r][c] = old[n - 1 - c][r]`.
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: Shape = Shape::from_rows([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_SHAPE: Shape = Shape::from_rows([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

const O_SHAPE: Shape = Shape::from_rows([
    [1, 1],
    [1, 1],
]);

const S_SHAPE: Shape = Shape::from_rows([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const T_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_SHAPE: Shape = Shape::from_rows([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Spawn orientation of a kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Spawn column of the matrix origin.
///
/// Center-left for every kind; the 2-wide O matrix sits one column further
/// right so its cells land on the two center columns.
/// https://harddrop.com/wiki/Spawn_Location
pub fn spawn_column(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::O => 4,
        _ => 3,
    }
}
