//! Core rule data - pure, deterministic, and testable
//!
//! This crate holds the leaf pieces of the rule engine: the occupancy grid,
//! the static piece catalog with its collision test and SRS kick search, the
//! seeded spawn randomizer, run settings, construction errors and the
//! entity store the engine builds its world on.
//!
//! # Module Structure
//!
//! - [`grid`]: row-major occupancy board with simultaneous line clearing
//! - [`pieces`]: tetromino shapes, `fits`, and SRS rotation with wall kicks
//! - [`rng`]: 7-bag random piece generation
//! - [`settings`]: caller-owned run configuration and patches
//! - [`entity`]: generational entity ids and component tables
//! - [`error`]: construction failures
//!
//! # Example
//!
//! ```
//! use tetris_rule_core::{fits, try_rotate, Grid};
//! use tetris_rule_core::types::{PieceDirection, PieceType, RotateDir};
//!
//! let grid = Grid::new(20, 10, 16, 16);
//! assert!(fits(&grid, PieceType::T, PieceDirection::North, 3, 3));
//!
//! let rotated = try_rotate(&grid, PieceType::T, PieceDirection::North, 3, 3, RotateDir::Cw)
//!     .expect("open board");
//! assert_eq!(rotated.direction, PieceDirection::East);
//! assert_eq!(rotated.kick, (0, 0));
//! ```

pub mod entity;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod settings;

pub use tetris_rule_types as types;

pub use entity::{Entities, Entity, Table};
pub use error::Error;
pub use grid::Grid;
pub use pieces::{cells, drop_row, fits, get_shape, kick_offsets, try_rotate, Rotation};
pub use rng::{PieceQueue, SimpleRng};
pub use settings::{Settings, SettingsPatch};
