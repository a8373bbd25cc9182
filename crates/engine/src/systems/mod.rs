//! Tick systems, one module per pipeline stage.
//!
//! Each system is a plain function over `(&mut World, &Env, &mut TickState)`.
//! `TickState` carries facts one stage hands to a later one within the same
//! tick and is dropped when the tick ends.

pub mod game_over;
pub mod gravity;
pub mod intent;
pub mod line_clear;
pub mod lock;
pub mod movement;
pub mod rotation;

use tetris_rule_core::{fits, Entity};

use crate::components::{FallProgress, LockTimer, TetriminoMeta};
use crate::types::PieceStatus;
use crate::world::World;

/// Facts shared between stages of a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickState {
    /// The active piece was shifted or rotated this tick.
    pub disturbed: bool,
    /// The active piece was hard-dropped and must lock now.
    pub hard_dropped: bool,
    /// A piece merged into the grid and a new one spawned.
    pub merged: bool,
    /// Rows removed by the line clear stage.
    pub rows_cleared: usize,
}

/// Type and anchor cell of a piece entity.
pub(crate) fn piece_at(world: &World, entity: Entity) -> Option<(TetriminoMeta, i32, i32)> {
    let meta = *world.store.meta.get(entity)?;
    let (row, col) = world.store.position.get(entity)?.cell(&world.grid);
    Some((meta, row, col))
}

/// Whether the cell row directly below the piece is open.
pub(crate) fn has_room_below(world: &World, entity: Entity) -> bool {
    match piece_at(world, entity) {
        Some((meta, row, col)) => fits(&world.grid, meta.piece_type, meta.direction, row + 1, col),
        None => false,
    }
}

/// Move a piece down by `rows` cells.
pub(crate) fn shift_down(world: &mut World, entity: Entity, rows: i32) {
    let cell_h = world.grid.cell_h;
    if let Some(pos) = world.store.position.get_mut(entity) {
        pos.y += rows * cell_h;
    }
}

/// `Falling` -> `Landed`: start the lock timer and drop pending fall distance.
pub(crate) fn land(world: &mut World, entity: Entity) {
    if let Some(meta) = world.store.meta.get_mut(entity) {
        meta.status = PieceStatus::Landed;
    }
    if !world.store.lock_timer.contains(entity) {
        world.store.lock_timer.insert(entity, LockTimer::default());
    }
    world.store.fall.insert(entity, FallProgress::default());
}

/// `Landed` -> `Falling`: the lock timer goes away with the status.
pub(crate) fn unland(world: &mut World, entity: Entity) {
    if let Some(meta) = world.store.meta.get_mut(entity) {
        meta.status = PieceStatus::Falling;
    }
    world.store.lock_timer.remove(entity);
    world.store.fall.insert(entity, FallProgress::default());
}
