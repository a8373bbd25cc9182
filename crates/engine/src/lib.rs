//! Tick pipeline for the falling-block rule engine.
//!
//! A [`World`] owns the entity store, the grid and per-run counters.
//! [`step_world`] advances it by one tick given an [`Env`] (input snapshot,
//! settings, elapsed seconds). Everything is single-threaded and
//! deterministic: the same settings and the same sequence of `(input, dt)`
//! pairs always yield the same world.
//!
//! # Module Structure
//!
//! - [`components`]: per-piece data and the entity store
//! - [`env`]: the per-tick environment and input snapshot
//! - [`world`]: world construction and spawn logic
//! - [`systems`]: one module per pipeline stage
//! - [`pipeline`]: the fixed stage order and `step_world`
//! - [`snapshot`]: read-only views for renderers
//!
//! # Example
//!
//! ```
//! use tetris_rule_core::Settings;
//! use tetris_rule_engine::{active_piece, make_world, step_world, Env, InputSnapshot};
//! use tetris_rule_engine::types::Action;
//!
//! let settings = Settings::default();
//! let mut world = make_world(&settings).unwrap();
//! let before = active_piece(&world).unwrap();
//!
//! let input = InputSnapshot::from_actions([Action::MoveLeft]);
//! step_world(&mut world, &Env::new(&input, &settings, settings.frame_dt()));
//!
//! let after = active_piece(&world).unwrap();
//! assert_eq!(after.col, before.col - 1);
//! ```

pub mod components;
pub mod env;
pub mod pipeline;
pub mod snapshot;
pub mod systems;
pub mod world;

pub use tetris_rule_types as types;

pub use components::{
    ActivePiece, Components, DropIntent, FallProgress, LockTimer, MoveIntent, Position,
    RotateIntent, TetriminoMeta,
};
pub use env::{Env, InputSnapshot};
pub use pipeline::{is_gameover, step_world};
pub use snapshot::{
    active_piece, ghost_row, grid_snapshot, render_text, ActiveSnapshot, GridSnapshot,
};
pub use systems::TickState;
pub use world::{make_world, World};
