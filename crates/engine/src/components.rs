//! Components attached to piece entities, and the table set that stores them.

use tetris_rule_core::{Entities, Entity, Grid, Table};

use crate::types::{PieceDirection, PieceStatus, PieceType, RotateDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetriminoMeta {
    pub piece_type: PieceType,
    pub direction: PieceDirection,
    pub status: PieceStatus,
}

impl TetriminoMeta {
    pub fn spawned(piece_type: PieceType) -> Self {
        Self {
            piece_type,
            direction: PieceDirection::North,
            status: PieceStatus::Falling,
        }
    }
}

/// Pixel position of the piece anchor. Always a whole number of cells away
/// from the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn at_cell(grid: &Grid, row: i32, col: i32) -> Self {
        let (x, y) = grid.to_pixel(row, col);
        Self { x, y }
    }

    /// Anchor `(row, col)` on `grid`.
    pub fn cell(&self, grid: &Grid) -> (i32, i32) {
        grid.to_cell(self.x, self.y)
    }
}

/// Marker for the entity under player and gravity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivePiece;

/// Seconds spent `Landed`. Only present on landed pieces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LockTimer {
    pub sec: f64,
}

/// Fractional cells of gravity accumulated but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FallProgress {
    pub cells: f64,
}

/// One-tick rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateIntent {
    pub dir: RotateDir,
}

impl RotateIntent {
    pub fn cw() -> Self {
        Self { dir: RotateDir::Cw }
    }

    pub fn ccw() -> Self {
        Self { dir: RotateDir::Ccw }
    }
}

/// One-tick horizontal shift request, in cells (`-1` left, `+1` right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub dx: i32,
}

/// One-tick drop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIntent {
    Soft,
    Hard,
}

/// Every component table, plus the entity allocator they are keyed by.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub entities: Entities,
    pub meta: Table<TetriminoMeta>,
    pub position: Table<Position>,
    pub active: Table<ActivePiece>,
    pub lock_timer: Table<LockTimer>,
    pub fall: Table<FallProgress>,
    pub rotate_intent: Table<RotateIntent>,
    pub move_intent: Table<MoveIntent>,
    pub drop_intent: Table<DropIntent>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> Entity {
        self.entities.create()
    }

    /// Destroy an entity and detach every component it carried.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.entities.destroy(entity) {
            return false;
        }
        self.meta.remove(entity);
        self.position.remove(entity);
        self.active.remove(entity);
        self.lock_timer.remove(entity);
        self.fall.remove(entity);
        self.rotate_intent.remove(entity);
        self.move_intent.remove(entity);
        self.drop_intent.remove(entity);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Entities carrying `ActivePiece`.
    pub fn active_entities(&self) -> Vec<Entity> {
        self.active.entities()
    }
}
