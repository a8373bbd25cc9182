//! Fixed-order tick pipeline.
//!
//! Every `step_world` call runs the stages below exactly once, in order,
//! against the same world:
//!
//! 1. intent translation
//! 2. horizontal moves
//! 3. rotation (SRS)
//! 4. support re-check, drops and gravity
//! 5. lock timers
//! 6. merge and respawn
//! 7. line clear
//! 8. game-over check
//!
//! Merge sees the post-rotation, post-gravity piece; the game-over check sees
//! the post-merge, post-spawn board. The same sequence of `(input, dt)` pairs
//! always produces the same world.

use crate::env::Env;
use crate::systems::{game_over, gravity, intent, line_clear, lock, movement, rotation, TickState};
use crate::types::PieceStatus;
use crate::world::World;

/// One pipeline stage.
pub type System = fn(&mut World, &Env, &mut TickState);

pub const PIPELINE: [(&str, System); 8] = [
    ("translate_input", intent::translate_input),
    ("resolve_moves", movement::resolve_moves),
    ("resolve_rotations", rotation::resolve_rotations),
    ("apply_gravity", gravity::apply_gravity),
    ("tick_lock_timers", lock::tick_lock_timers),
    ("merge_and_respawn", lock::merge_and_respawn),
    ("clear_lines", line_clear::clear_lines),
    ("check_game_over", game_over::check_game_over),
];

/// Advance the world by one tick.
///
/// A world that is already over is left untouched.
///
/// # Panics
///
/// Panics if `env.dt` is negative or not finite, or if the world does not
/// hold exactly one active piece on entry.
pub fn step_world(world: &mut World, env: &Env) -> TickState {
    assert!(
        env.dt.is_finite() && env.dt >= 0.0,
        "tick dt must be finite and non-negative, got {}",
        env.dt
    );
    let mut tick = TickState::default();
    if world.is_gameover() {
        return tick;
    }
    assert_consistent(world, "tick start");

    for (name, system) in PIPELINE {
        system(world, env, &mut tick);
        if cfg!(debug_assertions) {
            assert_consistent(world, name);
        }
    }

    world.advance_tick_count();
    tick
}

pub fn is_gameover(world: &World) -> bool {
    world.is_gameover()
}

fn assert_consistent(world: &World, stage: &str) {
    let active = world.store.active_entities();
    assert_eq!(
        active.len(),
        1,
        "expected exactly one active piece after {stage}, found {}",
        active.len()
    );
    assert_eq!(world.grid.occ.len(), world.grid.rows * world.grid.cols);
    assert_eq!(world.grid.occ_type.len(), world.grid.occ.len());
    for (entity, _) in world.store.lock_timer.iter() {
        let landed = world
            .store
            .meta
            .get(entity)
            .is_some_and(|m| m.status == PieceStatus::Landed);
        assert!(landed, "{entity} has a lock timer but is not landed after {stage}");
    }
}
