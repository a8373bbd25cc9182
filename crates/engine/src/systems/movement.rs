//! Stage 2: resolve horizontal move intents.

use log::trace;

use tetris_rule_core::fits;

use crate::env::Env;
use crate::systems::{piece_at, TickState};
use crate::world::World;

/// Shift one cell per intent when the target fits; the intent is consumed
/// either way.
pub fn resolve_moves(world: &mut World, _env: &Env, tick: &mut TickState) {
    for entity in world.store.move_intent.entities() {
        let Some(intent) = world.store.move_intent.remove(entity) else {
            continue;
        };
        let Some((meta, row, col)) = piece_at(world, entity) else {
            continue;
        };

        let step = intent.dx.signum();
        if step == 0 || !fits(&world.grid, meta.piece_type, meta.direction, row, col + step) {
            trace!("{} move {:+} blocked", entity, step);
            continue;
        }

        let cell_w = world.grid.cell_w;
        if let Some(pos) = world.store.position.get_mut(entity) {
            pos.x += step * cell_w;
        }
        tick.disturbed = true;
    }
}
