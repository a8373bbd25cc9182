//! Stage 3: resolve rotation intents with SRS wall kicks.

use log::trace;

use tetris_rule_core::try_rotate;

use crate::components::Position;
use crate::env::Env;
use crate::systems::{piece_at, TickState};
use crate::world::World;

/// Commit the first kick candidate that fits, or leave the piece untouched.
/// Status is never changed here; gravity re-checks support afterwards.
pub fn resolve_rotations(world: &mut World, _env: &Env, tick: &mut TickState) {
    for entity in world.store.rotate_intent.entities() {
        let Some(intent) = world.store.rotate_intent.remove(entity) else {
            continue;
        };
        let Some((meta, row, col)) = piece_at(world, entity) else {
            continue;
        };

        let rotation = try_rotate(
            &world.grid,
            meta.piece_type,
            meta.direction,
            row,
            col,
            intent.dir,
        );
        let Some(rotation) = rotation else {
            trace!("{} {:?} rotation {:?} rejected", entity, meta.piece_type, intent.dir);
            continue;
        };

        trace!(
            "{} {:?} {:?} -> {:?} with kick {:?}",
            entity,
            meta.piece_type,
            meta.direction,
            rotation.direction,
            rotation.kick
        );
        if let Some(meta) = world.store.meta.get_mut(entity) {
            meta.direction = rotation.direction;
        }
        let pos = Position::at_cell(&world.grid, rotation.anchor_row, rotation.anchor_col);
        world.store.position.insert(entity, pos);
        tick.disturbed = true;
    }
}
