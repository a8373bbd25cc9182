//! Stage 4: support re-check, drop intents and gravity.

use log::trace;

use tetris_rule_core::{drop_row, Entity};

use crate::components::{DropIntent, FallProgress};
use crate::env::Env;
use crate::systems::{has_room_below, land, piece_at, shift_down, unland, TickState};
use crate::types::PieceStatus;
use crate::world::World;

/// Accumulated distance within this of a whole cell counts as the whole cell.
const CELL_EPSILON: f64 = 1e-9;

pub fn apply_gravity(world: &mut World, env: &Env, tick: &mut TickState) {
    let Some(entity) = world.active_entity() else {
        return;
    };

    // A landed piece that was moved or rotated this tick falls again if the
    // row below opened up.
    if tick.disturbed
        && status(world, entity) == Some(PieceStatus::Landed)
        && has_room_below(world, entity)
    {
        trace!("{} lost support", entity);
        unland(world, entity);
    }

    match world.store.drop_intent.remove(entity) {
        Some(DropIntent::Soft) => {
            if has_room_below(world, entity) {
                shift_down(world, entity, 1);
                if status(world, entity) == Some(PieceStatus::Landed) {
                    unland(world, entity);
                }
            } else if status(world, entity) == Some(PieceStatus::Falling) {
                land(world, entity);
            }
        }
        Some(DropIntent::Hard) => {
            if let Some((meta, row, col)) = piece_at(world, entity) {
                let floor = drop_row(&world.grid, meta.piece_type, meta.direction, row, col);
                shift_down(world, entity, floor - row);
                land(world, entity);
                tick.hard_dropped = true;
                trace!("{} hard dropped {} rows", entity, floor - row);
            }
        }
        None => {}
    }

    fall(world, env, entity);
}

fn status(world: &World, entity: Entity) -> Option<PieceStatus> {
    world.store.meta.get(entity).map(|m| m.status)
}

/// Advance a falling piece by the whole cells its accumulated distance has
/// crossed. Landing discards whatever fraction is left.
fn fall(world: &mut World, env: &Env, entity: Entity) {
    let drop_rate = env.settings.drop_rate;
    if drop_rate <= 0.0 || status(world, entity) != Some(PieceStatus::Falling) {
        return;
    }

    let mut progress = world.store.fall.get(entity).copied().unwrap_or_default().cells;
    progress += env.dt / drop_rate;

    while progress + CELL_EPSILON >= 1.0 {
        progress = (progress - 1.0).max(0.0);
        if has_room_below(world, entity) {
            shift_down(world, entity, 1);
        } else {
            trace!("{} landed", entity);
            land(world, entity);
            return;
        }
    }

    world.store.fall.insert(entity, FallProgress { cells: progress });
}
