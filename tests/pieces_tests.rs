//! Piece shape and rotation tests

use stackfall::core::{base_shape, spawn_column, Shape};
use stackfall::types::PieceKind;

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    let mut cells: Vec<_> = shape.filled_cells().collect();
    cells.sort_unstable();
    cells
}

#[test]
fn every_kind_has_four_cells() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        assert_eq!(shape.filled_cells().count(), 4, "{kind:?}");
        assert_eq!(shape.rotate_cw().filled_cells().count(), 4, "{kind:?}");
    }
}

#[test]
fn matrix_sizes() {
    assert_eq!(base_shape(PieceKind::I).size(), 4);
    assert_eq!(base_shape(PieceKind::O).size(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(base_shape(kind).size(), 3, "{kind:?}");
    }
}

#[test]
fn four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let base = base_shape(kind);
        let mut shape = base;
        for _ in 0..4 {
            shape = shape.rotate_cw();
        }
        assert_eq!(shape, base, "{kind:?}");
    }
}

#[test]
fn o_rotation_is_a_no_op() {
    let o = base_shape(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn t_rotates_clockwise() {
    let t = base_shape(PieceKind::T);
    assert_eq!(cells(&t), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    // Pointing right.
    assert_eq!(cells(&t.rotate_cw()), vec![(0, 1), (1, 1), (1, 2), (2, 1)]);
    // Pointing down.
    assert_eq!(
        cells(&t.rotate_cw().rotate_cw()),
        vec![(1, 0), (1, 1), (1, 2), (2, 1)]
    );
}

#[test]
fn vertical_i_uses_third_column() {
    let i = base_shape(PieceKind::I).rotate_cw();
    assert_eq!(cells(&i), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
}

#[test]
fn spawn_columns() {
    assert_eq!(spawn_column(PieceKind::O), 4);
    for kind in PieceKind::ALL.into_iter().filter(|k| *k != PieceKind::O) {
        assert_eq!(spawn_column(kind), 3, "{kind:?}");
    }
}
