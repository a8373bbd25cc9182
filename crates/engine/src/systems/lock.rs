//! Stages 5 and 6: lock timers, then merge-and-respawn.

use log::debug;

use tetris_rule_core::{cells, Entity};

use crate::components::LockTimer;
use crate::env::Env;
use crate::systems::{piece_at, TickState};
use crate::types::PieceStatus;
use crate::world::World;

/// Advance the timer of every landed piece by `dt`. Falling pieces carry no
/// timer.
pub fn tick_lock_timers(world: &mut World, env: &Env, _tick: &mut TickState) {
    for (entity, meta) in world.store.meta.iter().map(|(e, m)| (e, *m)).collect::<Vec<_>>() {
        match meta.status {
            PieceStatus::Landed => {
                let sec = world.store.lock_timer.get(entity).map_or(0.0, |t| t.sec);
                world
                    .store
                    .lock_timer
                    .insert(entity, LockTimer { sec: sec + env.dt });
            }
            PieceStatus::Falling => {
                world.store.lock_timer.remove(entity);
            }
        }
    }
}

/// Merge a landed piece whose timer passed the lock delay (or that was
/// hard-dropped), then spawn its replacement.
pub fn merge_and_respawn(world: &mut World, env: &Env, tick: &mut TickState) {
    let Some(entity) = world.active_entity() else {
        return;
    };
    let Some((meta, _, _)) = piece_at(world, entity) else {
        return;
    };
    if meta.status != PieceStatus::Landed {
        return;
    }

    let elapsed = world.store.lock_timer.get(entity).map_or(0.0, |t| t.sec);
    if !(tick.hard_dropped || elapsed > env.settings.lock_delay) {
        return;
    }

    merge(world, entity);
    let next = world.spawn_piece();
    tick.merged = true;
    debug!("{} locked after {:.3}s, {} now active", entity, elapsed, next);
}

/// Write the piece into the grid and destroy its entity.
fn merge(world: &mut World, entity: Entity) {
    let Some((meta, row, col)) = piece_at(world, entity) else {
        return;
    };
    for (r, c) in cells(meta.piece_type, meta.direction, row, col) {
        assert!(
            world.grid.checked_index(r, c).is_some(),
            "{entity} merges outside the grid at ({r}, {c})"
        );
        world.grid.fill(r as usize, c as usize, meta.piece_type);
    }
    world.store.destroy(entity);
}
