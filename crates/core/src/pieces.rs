//! Pieces module - Tetromino shapes and SRS rotation system
//!
//! Shapes are static `(col, row)` offsets inside a 4x4 box whose top-left
//! corner is the piece anchor. Kick offsets follow the SRS tables with `dy`
//! pointing up, so a kick `(dx, dy)` moves the anchor to
//! `(row - dy, col + dx)`.
//! Reference: https://tetris.wiki/SRS

use crate::grid::Grid;
use crate::types::{PieceDirection, PieceType, RotateDir};

/// Offset of a single mino relative to piece anchor, `(col, row)`
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece type and direction
pub fn get_shape(kind: PieceType, direction: PieceDirection) -> PieceShape {
    match kind {
        PieceType::I => get_i_shape(direction),
        PieceType::O => O_SHAPE,
        PieceType::T => get_t_shape(direction),
        PieceType::S => get_s_shape(direction),
        PieceType::Z => get_z_shape(direction),
        PieceType::J => get_j_shape(direction),
        PieceType::L => get_l_shape(direction),
    }
}

fn get_i_shape(direction: PieceDirection) -> PieceShape {
    match direction {
        PieceDirection::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        PieceDirection::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        PieceDirection::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        PieceDirection::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O is the same in every direction
const O_SHAPE: PieceShape = [(1, 0), (2, 0), (1, 1), (2, 1)];

fn get_t_shape(direction: PieceDirection) -> PieceShape {
    match direction {
        PieceDirection::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceDirection::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        PieceDirection::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        PieceDirection::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_s_shape(direction: PieceDirection) -> PieceShape {
    match direction {
        PieceDirection::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceDirection::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        PieceDirection::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        PieceDirection::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_z_shape(direction: PieceDirection) -> PieceShape {
    match direction {
        PieceDirection::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        PieceDirection::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        PieceDirection::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        PieceDirection::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn get_j_shape(direction: PieceDirection) -> PieceShape {
    match direction {
        PieceDirection::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceDirection::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        PieceDirection::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        PieceDirection::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn get_l_shape(direction: PieceDirection) -> PieceShape {
    match direction {
        PieceDirection::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        PieceDirection::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        PieceDirection::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        PieceDirection::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// Absolute `(row, col)` cells of a piece configuration.
pub fn cells(
    kind: PieceType,
    direction: PieceDirection,
    anchor_row: i32,
    anchor_col: i32,
) -> [(i32, i32); 4] {
    get_shape(kind, direction).map(|(dc, dr)| (anchor_row + dr as i32, anchor_col + dc as i32))
}

/// Whether the piece can occupy this configuration: all four cells inside the
/// grid and `Empty`. Every movement, gravity, rotation and spawn check goes
/// through here.
pub fn fits(
    grid: &Grid,
    kind: PieceType,
    direction: PieceDirection,
    anchor_row: i32,
    anchor_col: i32,
) -> bool {
    cells(kind, direction, anchor_row, anchor_col)
        .iter()
        .all(|&(row, col)| grid.is_free(row, col))
}

/// Lowest anchor row reachable by dropping straight down from `anchor_row`.
pub fn drop_row(
    grid: &Grid,
    kind: PieceType,
    direction: PieceDirection,
    anchor_row: i32,
    anchor_col: i32,
) -> i32 {
    let mut row = anchor_row;
    while fits(grid, kind, direction, row + 1, anchor_col) {
        row += 1;
    }
    row
}

/// SRS wall kick data
/// Each entry is a `(dx, dy)` offset, `dy` up; entry 0 is the in-place test.
pub type KickTable = [[(i8, i8); 5]; 8];

/// O never needs a kick.
const O_KICKS: [(i8, i8); 1] = [(0, 0)];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // 0->1 (N->E, clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 0->3 (N->W, counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->0 (E->N, counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2 (E->S, clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1 (S->E, counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 2->3 (S->W, clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3->2 (W->S, counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0 (W->N, clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// I piece kick table (different from JLSTZ)
const I_KICKS: KickTable = [
    // 0->1 (N->E)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 0->3 (N->W)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 1->0 (E->N)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 1->2 (E->S)
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2->1 (S->E)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // 2->3 (S->W)
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3->2 (W->S)
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 3->0 (W->N)
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Get the kick index for a rotation transition
fn get_kick_index(from: PieceDirection, dir: RotateDir) -> usize {
    match (from, dir) {
        (PieceDirection::North, RotateDir::Cw) => 0,
        (PieceDirection::North, RotateDir::Ccw) => 1,
        (PieceDirection::East, RotateDir::Ccw) => 2,
        (PieceDirection::East, RotateDir::Cw) => 3,
        (PieceDirection::South, RotateDir::Ccw) => 4,
        (PieceDirection::South, RotateDir::Cw) => 5,
        (PieceDirection::West, RotateDir::Ccw) => 6,
        (PieceDirection::West, RotateDir::Cw) => 7,
    }
}

/// Ordered kick candidates for rotating `kind` out of `from` in sense `dir`.
pub fn kick_offsets(kind: PieceType, from: PieceDirection, dir: RotateDir) -> &'static [(i8, i8)] {
    match kind {
        PieceType::O => &O_KICKS,
        PieceType::I => &I_KICKS[get_kick_index(from, dir)],
        _ => &JLSTZ_KICKS[get_kick_index(from, dir)],
    }
}

/// A committed rotation: new direction, the winning kick and the new anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    pub direction: PieceDirection,
    pub kick: (i8, i8),
    pub anchor_row: i32,
    pub anchor_col: i32,
}

/// Try to rotate a piece with wall kicks
///
/// Candidates are tried in table order and the first that fits wins. Returns
/// `None` when every candidate collides, in which case nothing should change.
pub fn try_rotate(
    grid: &Grid,
    kind: PieceType,
    from: PieceDirection,
    anchor_row: i32,
    anchor_col: i32,
    dir: RotateDir,
) -> Option<Rotation> {
    let direction = from.rotate(dir);

    kick_offsets(kind, from, dir)
        .iter()
        .map(|&(dx, dy)| Rotation {
            direction,
            kick: (dx, dy),
            anchor_row: anchor_row - dy as i32,
            anchor_col: anchor_col + dx as i32,
        })
        .find(|r| fits(grid, kind, direction, r.anchor_row, r.anchor_col))
}
