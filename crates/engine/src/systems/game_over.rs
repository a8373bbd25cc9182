//! Stage 8: raise game over when the active piece has no legal configuration.

use log::info;

use tetris_rule_core::fits;

use crate::env::Env;
use crate::systems::{piece_at, TickState};
use crate::world::World;

pub fn check_game_over(world: &mut World, _env: &Env, _tick: &mut TickState) {
    let Some(entity) = world.active_entity() else {
        return;
    };
    let Some((meta, row, col)) = piece_at(world, entity) else {
        return;
    };
    if fits(&world.grid, meta.piece_type, meta.direction, row, col) {
        return;
    }

    world.raise_gameover();
    info!(
        "game over: {:?} cannot occupy row {}, column {} ({} lines cleared)",
        meta.piece_type,
        row,
        col,
        world.lines_cleared()
    );
}
