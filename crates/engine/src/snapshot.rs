//! Read-only views for renderers and other collaborators.

use serde::Serialize;

use tetris_rule_core::{cells, drop_row};

use crate::systems::piece_at;
use crate::types::{PieceDirection, PieceStatus, PieceType};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub piece_type: PieceType,
    pub direction: PieceDirection,
    pub status: PieceStatus,
    /// Pixel position of the anchor.
    pub x: i32,
    pub y: i32,
    /// Anchor cell.
    pub row: i32,
    pub col: i32,
    /// Occupied `(row, col)` cells.
    pub cells: [(i32, i32); 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Option<PieceType>>>,
}

impl GridSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<PieceType> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

/// Occupancy of every grid cell; the active piece is not included.
pub fn grid_snapshot(world: &World) -> GridSnapshot {
    GridSnapshot {
        rows: world.grid.rows,
        cols: world.grid.cols,
        cells: world.grid.to_rows(),
    }
}

/// Configuration of the active piece.
pub fn active_piece(world: &World) -> Option<ActiveSnapshot> {
    let entity = world.active_entity()?;
    let (meta, row, col) = piece_at(world, entity)?;
    let pos = world.store.position.get(entity)?;
    Some(ActiveSnapshot {
        piece_type: meta.piece_type,
        direction: meta.direction,
        status: meta.status,
        x: pos.x,
        y: pos.y,
        row,
        col,
        cells: cells(meta.piece_type, meta.direction, row, col),
    })
}

/// Anchor row the active piece would land on if dropped straight down.
pub fn ghost_row(world: &World) -> Option<i32> {
    let active = active_piece(world)?;
    Some(drop_row(&world.grid, active.piece_type, active.direction, active.row, active.col))
}

/// Text rendering, `.` for empty, piece letters for filled, `#` for the
/// active piece. Mostly useful in logs and tests.
pub fn render_text(world: &World) -> String {
    let snapshot = grid_snapshot(world);
    let active = active_piece(world);
    let mut out = String::with_capacity((snapshot.cols + 1) * snapshot.rows);
    for (row, line) in snapshot.cells.iter().enumerate() {
        for (col, cell) in line.iter().enumerate() {
            let is_active = active
                .map(|a| a.cells.contains(&(row as i32, col as i32)))
                .unwrap_or(false);
            out.push(match (is_active, cell) {
                (true, _) => '#',
                (false, Some(kind)) => kind.as_char(),
                (false, None) => '.',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::make_world;
    use tetris_rule_core::Settings;

    #[test]
    fn snapshots_describe_the_spawned_piece() {
        let world = make_world(&Settings::default()).unwrap();
        let active = active_piece(&world).unwrap();
        assert_eq!((active.row, active.col), world.spawn_anchor());
        assert_eq!((active.x, active.y), (48, 48));
        assert_eq!(active.status, PieceStatus::Falling);

        let grid = grid_snapshot(&world);
        assert_eq!((grid.rows, grid.cols), (20, 10));
        assert_eq!(grid.filled_count(), 0);

        // Every north shape bottoms out on box row 1.
        assert_eq!(ghost_row(&world), Some(18));
    }

    #[test]
    fn render_marks_active_and_filled_cells() {
        let mut world = make_world(&Settings::new(4, 4, 8, 8, 30, 0.0)).unwrap();
        world.grid.fill(3, 0, PieceType::Z);
        let text = render_text(&world);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with('Z'));
        assert_eq!(text.matches('#').count(), 4);
    }
}
