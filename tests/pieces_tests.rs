//! Pieces tests - shapes, collision and SRS rotation with wall kicks

use tetris_rule::core::{cells, drop_row, fits, get_shape, kick_offsets, try_rotate, Grid};
use tetris_rule::types::{PieceDirection, PieceType, RotateDir};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(
        get_shape(PieceType::I, PieceDirection::North),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceType::I, PieceDirection::East),
        [(2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north = get_shape(PieceType::O, PieceDirection::North);
    for dir in [PieceDirection::East, PieceDirection::South, PieceDirection::West] {
        assert_eq!(get_shape(PieceType::O, dir), north);
    }
}

#[test]
fn test_every_shape_fits_the_box() {
    for kind in PieceType::ALL {
        for dir in [
            PieceDirection::North,
            PieceDirection::East,
            PieceDirection::South,
            PieceDirection::West,
        ] {
            for (col, row) in get_shape(kind, dir) {
                assert!((0..4).contains(&col) && (0..4).contains(&row));
            }
        }
    }
}

#[test]
fn test_cells_are_row_col_from_anchor() {
    assert_eq!(
        cells(PieceType::T, PieceDirection::North, 5, 2),
        [(5, 3), (6, 2), (6, 3), (6, 4)]
    );
}

// ============== Collision Tests ==============

#[test]
fn test_fits_rejects_walls_floor_and_filled_cells() {
    let mut grid = Grid::new(20, 10, 16, 16);
    assert!(fits(&grid, PieceType::I, PieceDirection::North, 0, 0));
    assert!(!fits(&grid, PieceType::I, PieceDirection::North, 0, 7));
    assert!(!fits(&grid, PieceType::I, PieceDirection::East, 17, 0));

    grid.fill(1, 2, PieceType::Z);
    assert!(!fits(&grid, PieceType::I, PieceDirection::North, 0, 0));
}

#[test]
fn test_drop_row_stops_on_stack() {
    let mut grid = Grid::new(20, 10, 16, 16);
    assert_eq!(drop_row(&grid, PieceType::O, PieceDirection::North, 0, 3), 18);
    grid.fill(12, 4, PieceType::L);
    assert_eq!(drop_row(&grid, PieceType::O, PieceDirection::North, 0, 3), 10);
}

// ============== SRS Tests ==============

#[test]
fn test_kick_tables_start_in_place() {
    for kind in PieceType::ALL {
        for dir in [RotateDir::Cw, RotateDir::Ccw] {
            let kicks = kick_offsets(kind, PieceDirection::North, dir);
            assert_eq!(kicks[0], (0, 0));
        }
    }
    assert_eq!(kick_offsets(PieceType::O, PieceDirection::North, RotateDir::Cw).len(), 1);
    assert_eq!(kick_offsets(PieceType::I, PieceDirection::North, RotateDir::Cw).len(), 5);
}

#[test]
fn test_jlstz_north_to_east_kicks() {
    assert_eq!(
        kick_offsets(PieceType::T, PieceDirection::North, RotateDir::Cw),
        &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)]
    );
}

#[test]
fn test_rotation_in_open_space_uses_no_kick() {
    let grid = Grid::new(20, 10, 16, 16);
    let rotated =
        try_rotate(&grid, PieceType::J, PieceDirection::North, 5, 4, RotateDir::Ccw).unwrap();
    assert_eq!(rotated.direction, PieceDirection::West);
    assert_eq!(rotated.kick, (0, 0));
    assert_eq!((rotated.anchor_row, rotated.anchor_col), (5, 4));
}

#[test]
fn test_rotation_kicks_left_when_blocked() {
    let mut grid = Grid::new(20, 10, 16, 16);
    grid.fill(5, 5, PieceType::Z);
    let rotated =
        try_rotate(&grid, PieceType::T, PieceDirection::North, 3, 4, RotateDir::Cw).unwrap();
    assert_eq!(rotated.direction, PieceDirection::East);
    assert_eq!(rotated.kick, (-1, 0));
    assert_eq!((rotated.anchor_row, rotated.anchor_col), (3, 3));
}

#[test]
fn test_i_rotation_off_left_wall_kicks_right() {
    let grid = Grid::new(20, 10, 16, 16);
    // West I hugging the wall sits in box column 1, so its anchor is at -1.
    let rotated =
        try_rotate(&grid, PieceType::I, PieceDirection::West, 5, -1, RotateDir::Cw).unwrap();
    assert_eq!(rotated.direction, PieceDirection::North);
    assert!(fits(&grid, PieceType::I, rotated.direction, rotated.anchor_row, rotated.anchor_col));
    assert!(rotated.anchor_col >= 0);
}

#[test]
fn test_rotation_fails_when_every_kick_collides() {
    let mut grid = Grid::new(6, 4, 16, 16);
    for row in 0..6 {
        for col in 0..4 {
            grid.fill(row, col, PieceType::O);
        }
    }
    // Free only the cells of a North T at the origin.
    for (row, col) in cells(PieceType::T, PieceDirection::North, 0, 0) {
        grid.clear_cell(row as usize, col as usize);
    }
    assert!(try_rotate(&grid, PieceType::T, PieceDirection::North, 0, 0, RotateDir::Cw).is_none());
}
