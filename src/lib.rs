//! Falling-block rule engine (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_rule::{core,engine,types}` and carries the
//! logging setup shared by the binary and integration tests.

pub mod logging;

pub use tetris_rule_core as core;
pub use tetris_rule_engine as engine;
pub use tetris_rule_types as types;
