//! Grid module - the occupancy board
//!
//! The grid is `rows x cols` cells stored in two parallel flat vectors,
//! row-major (`row * cols + col`). `occ` carries the rule-relevant occupancy;
//! `occ_type` carries the piece type that filled a cell so renderers can colour
//! it. `occ_type` is only meaningful where `occ` is `Filled`.
//!
//! Pixel geometry (`cell_w`, `cell_h`, origin) is stored alongside for
//! translating piece positions; collision math never looks at it.

use crate::types::{CellStatus, PieceType};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cell_w: i32,
    pub cell_h: i32,
    pub origin_x: i32,
    pub origin_y: i32,
    pub occ: Vec<CellStatus>,
    pub occ_type: Vec<PieceType>,
}

impl Grid {
    /// Create an empty grid. Dimensions are validated by `Settings`.
    pub fn new(rows: usize, cols: usize, cell_w: i32, cell_h: i32) -> Self {
        Self::with_origin(rows, cols, cell_w, cell_h, 0, 0)
    }

    pub fn with_origin(
        rows: usize,
        cols: usize,
        cell_w: i32,
        cell_h: i32,
        origin_x: i32,
        origin_y: i32,
    ) -> Self {
        let size = rows * cols;
        Self {
            rows,
            cols,
            cell_w,
            cell_h,
            origin_x,
            origin_y,
            occ: vec![CellStatus::Empty; size],
            occ_type: vec![PieceType::I; size],
        }
    }

    /// Flat index of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the grid.
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Signed-coordinate lookup; `None` when outside the grid.
    #[inline(always)]
    pub fn checked_index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(
            self.checked_index(row, col).map(|idx| self.occ[idx]),
            Some(CellStatus::Empty)
        )
    }

    pub fn status(&self, row: usize, col: usize) -> CellStatus {
        self.occ[self.index(row, col)]
    }

    /// Piece type of a filled cell, `None` when empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<PieceType> {
        let idx = self.index(row, col);
        match self.occ[idx] {
            CellStatus::Filled => Some(self.occ_type[idx]),
            CellStatus::Empty => None,
        }
    }

    pub fn fill(&mut self, row: usize, col: usize, kind: PieceType) {
        let idx = self.index(row, col);
        self.occ[idx] = CellStatus::Filled;
        self.occ_type[idx] = kind;
    }

    pub fn clear_cell(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.occ[idx] = CellStatus::Empty;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.occ[start..start + self.cols]
            .iter()
            .all(|cell| *cell == CellStatus::Filled)
    }

    pub fn filled_count(&self) -> usize {
        self.occ.iter().filter(|c| **c == CellStatus::Filled).count()
    }

    /// Remove every full row at once and compact the rows above.
    ///
    /// Returns the cleared row indices (pre-compaction), bottom to top. Full
    /// rows are decided against the grid as it was on entry, so scan order
    /// never matters.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let width = self.cols;
        let mut cleared = Vec::new();
        let mut write_row = self.rows;

        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    let dst = write_row * width;
                    self.occ.copy_within(src..src + width, dst);
                    self.occ_type.copy_within(src..src + width, dst);
                }
            }
        }

        for cell in &mut self.occ[..write_row * width] {
            *cell = CellStatus::Empty;
        }

        cleared
    }

    /// Pixel position of the top-left corner of `(row, col)`. Accepts cells
    /// outside the grid since piece anchors may sit off the edge.
    pub fn to_pixel(&self, row: i32, col: i32) -> (i32, i32) {
        (
            self.origin_x + col * self.cell_w,
            self.origin_y + row * self.cell_h,
        )
    }

    /// Cell `(row, col)` of a grid-aligned pixel position.
    pub fn to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        debug_assert!(
            (x - self.origin_x) % self.cell_w == 0 && (y - self.origin_y) % self.cell_h == 0,
            "pixel position ({x}, {y}) is not grid-aligned"
        );
        (
            (y - self.origin_y).div_euclid(self.cell_h),
            (x - self.origin_x).div_euclid(self.cell_w),
        )
    }

    /// Rows as `Option<PieceType>` per cell, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<Option<PieceType>>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.cell(row, col)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        let grid = Grid::new(20, 10, 16, 16);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 9), 9);
        assert_eq!(grid.index(1, 0), 10);
        assert_eq!(grid.index(19, 9), 199);
        assert_eq!(grid.checked_index(-1, 0), None);
        assert_eq!(grid.checked_index(0, 10), None);
        assert_eq!(grid.checked_index(20, 0), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_out_of_range_panics() {
        let grid = Grid::new(4, 4, 16, 16);
        grid.index(4, 0);
    }

    #[test]
    fn test_parallel_vectors_have_grid_size() {
        let grid = Grid::new(7, 5, 8, 8);
        assert_eq!(grid.occ.len(), 35);
        assert_eq!(grid.occ_type.len(), 35);
    }

    #[test]
    fn test_clear_full_rows_keeps_types_aligned() {
        let mut grid = Grid::new(4, 3, 16, 16);
        grid.fill(1, 0, PieceType::T);
        for col in 0..3 {
            grid.fill(2, col, PieceType::I);
        }
        grid.fill(3, 2, PieceType::Z);

        let cleared = grid.clear_full_rows();

        assert_eq!(cleared, vec![2]);
        assert_eq!(grid.cell(2, 0), Some(PieceType::T));
        assert_eq!(grid.cell(3, 2), Some(PieceType::Z));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_pixel_roundtrip_with_origin() {
        let grid = Grid::with_origin(20, 10, 16, 24, 8, 4);
        let (x, y) = grid.to_pixel(3, -1);
        assert_eq!((x, y), (8 - 16, 4 + 72));
        assert_eq!(grid.to_cell(x, y), (3, -1));
    }
}
