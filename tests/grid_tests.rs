//! Grid tests - occupancy, bounds and simultaneous line clearing

use tetris_rule::core::Grid;
use tetris_rule::types::{CellStatus, PieceType};

fn fill_row(grid: &mut Grid, row: usize, kind: PieceType) {
    for col in 0..grid.cols {
        grid.fill(row, col, kind);
    }
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(20, 10, 16, 16);
    assert_eq!(grid.occ.len(), 200);
    assert_eq!(grid.filled_count(), 0);
    for row in 0..20 {
        for col in 0..10 {
            assert_eq!(grid.status(row, col), CellStatus::Empty);
        }
    }
}

#[test]
fn test_out_of_bounds_is_not_free() {
    let grid = Grid::new(20, 10, 16, 16);
    assert!(!grid.is_free(-1, 0));
    assert!(!grid.is_free(0, -1));
    assert!(!grid.is_free(20, 0));
    assert!(!grid.is_free(0, 10));
    assert!(grid.is_free(19, 9));
    assert_eq!(grid.checked_index(20, 0), None);
    assert_eq!(grid.checked_index(1, 2), Some(12));
}

#[test]
#[should_panic(expected = "outside")]
fn test_index_outside_grid_panics() {
    let grid = Grid::new(4, 4, 8, 8);
    grid.index(4, 0);
}

#[test]
fn test_single_full_row_clears_and_shifts() {
    let mut grid = Grid::new(6, 4, 8, 8);
    fill_row(&mut grid, 5, PieceType::I);
    grid.fill(4, 1, PieceType::T);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared, vec![5]);
    assert_eq!(grid.cell(5, 1), Some(PieceType::T));
    assert_eq!(grid.cell(4, 1), None);
    assert_eq!(grid.filled_count(), 1);
}

#[test]
fn test_non_adjacent_rows_clear_together() {
    let mut grid = Grid::new(6, 4, 8, 8);
    fill_row(&mut grid, 5, PieceType::I);
    grid.fill(4, 0, PieceType::S);
    fill_row(&mut grid, 3, PieceType::J);
    grid.fill(2, 3, PieceType::Z);

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // Each survivor drops by the number of cleared rows below it.
    assert_eq!(grid.cell(5, 0), Some(PieceType::S));
    assert_eq!(grid.cell(4, 3), Some(PieceType::Z));
    assert_eq!(grid.filled_count(), 2);
    for col in 0..4 {
        assert_eq!(grid.cell(0, col), None);
        assert_eq!(grid.cell(1, col), None);
    }
}

#[test]
fn test_full_board_clears_completely() {
    let mut grid = Grid::new(4, 4, 8, 8);
    for row in 0..4 {
        fill_row(&mut grid, row, PieceType::O);
    }
    assert_eq!(grid.clear_full_rows().len(), 4);
    assert_eq!(grid.filled_count(), 0);
}

#[test]
fn test_no_full_rows_is_a_no_op() {
    let mut grid = Grid::new(4, 4, 8, 8);
    grid.fill(3, 0, PieceType::L);
    let before = grid.clone();
    assert!(grid.clear_full_rows().is_empty());
    assert_eq!(grid, before);
}

#[test]
fn test_pixel_cell_conversion_respects_origin() {
    let grid = Grid::with_origin(20, 10, 16, 24, 100, 50);
    assert_eq!(grid.to_pixel(2, 3), (148, 98));
    assert_eq!(grid.to_cell(148, 98), (2, 3));
    assert_eq!(grid.to_cell(84, 26), (-1, -1));
}
