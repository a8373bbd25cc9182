//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the rule engine.
//! All types are plain data with no behaviour beyond small conversions, making
//! them usable from the grid, the entity store, the tick pipeline and any
//! renderer that consumes snapshots.
//!
//! # Coordinates
//!
//! Grid cells are addressed as `(row, col)` with row 0 at the top. Piece
//! shapes are expressed as `(col, row)` offsets from the top-left corner of a
//! 4x4 bounding box anchored at the piece position.
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOCK_DELAY_SEC` | 0.3 | Seconds a landed piece rests before merging |
//! | `SPAWN_ROW` | 3 | Preferred spawn anchor row |
//! | `PIECE_BOX` | 4 | Side of the shape bounding box in cells |
//!
//! # Examples
//!
//! ```
//! use tetris_rule_types::{PieceDirection, PieceType, RotateDir};
//!
//! let parsed = PieceType::from_str("t").unwrap();
//! assert_eq!(parsed, PieceType::T);
//!
//! let dir = PieceDirection::North.rotate(RotateDir::Cw);
//! assert_eq!(dir, PieceDirection::East);
//! ```

use serde::{Deserialize, Serialize};

/// Default lock delay in seconds.
pub const LOCK_DELAY_SEC: f64 = 0.3;

/// Preferred spawn anchor row; clamped to the grid by the spawner.
pub const SPAWN_ROW: usize = 3;

/// Side length of a piece bounding box in cells.
pub const PIECE_BOX: usize = 4;

/// Default seed for the piece queue.
pub const DEFAULT_SEED: u32 = 1;

/// The seven tetromino piece types
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceType {
    /// All types in catalog order.
    pub const ALL: [PieceType; 7] = [
        PieceType::I,
        PieceType::O,
        PieceType::T,
        PieceType::S,
        PieceType::Z,
        PieceType::J,
        PieceType::L,
    ];

    /// Parse piece type from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rule_types::PieceType;
    ///
    /// assert_eq!(PieceType::from_str("i"), Some(PieceType::I));
    /// assert_eq!(PieceType::from_str("O"), Some(PieceType::O));
    /// assert_eq!(PieceType::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceType::I),
            "o" => Some(PieceType::O),
            "t" => Some(PieceType::T),
            "s" => Some(PieceType::S),
            "z" => Some(PieceType::Z),
            "j" => Some(PieceType::J),
            "l" => Some(PieceType::L),
            _ => None,
        }
    }

    /// Single uppercase letter, used by text renderers.
    pub fn as_char(&self) -> char {
        match self {
            PieceType::I => 'I',
            PieceType::O => 'O',
            PieceType::T => 'T',
            PieceType::S => 'S',
            PieceType::Z => 'Z',
            PieceType::J => 'J',
            PieceType::L => 'L',
        }
    }
}

/// Rotational sense of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotateDir {
    /// Clockwise, `+1`
    Cw,
    /// Counter-clockwise, `-1`
    Ccw,
}

impl RotateDir {
    /// Signed step in the direction cycle.
    pub fn step(&self) -> i8 {
        match self {
            RotateDir::Cw => 1,
            RotateDir::Ccw => -1,
        }
    }

    /// Build from a signed step; anything other than `+1`/`-1` is rejected.
    pub fn from_step(step: i8) -> Option<Self> {
        match step {
            1 => Some(RotateDir::Cw),
            -1 => Some(RotateDir::Ccw),
            _ => None,
        }
    }
}

/// Piece orientation following the Super Rotation System (SRS)
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceDirection {
    North,
    East,
    South,
    West,
}

impl PieceDirection {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetris_rule_types::PieceDirection;
    ///
    /// assert_eq!(PieceDirection::North.rotate_cw(), PieceDirection::East);
    /// assert_eq!(PieceDirection::West.rotate_cw(), PieceDirection::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            PieceDirection::North => PieceDirection::East,
            PieceDirection::East => PieceDirection::South,
            PieceDirection::South => PieceDirection::West,
            PieceDirection::West => PieceDirection::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use tetris_rule_types::PieceDirection;
    ///
    /// assert_eq!(PieceDirection::North.rotate_ccw(), PieceDirection::West);
    /// assert_eq!(PieceDirection::East.rotate_ccw(), PieceDirection::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            PieceDirection::North => PieceDirection::West,
            PieceDirection::West => PieceDirection::South,
            PieceDirection::South => PieceDirection::East,
            PieceDirection::East => PieceDirection::North,
        }
    }

    /// One step in the given rotational sense.
    pub fn rotate(&self, dir: RotateDir) -> Self {
        match dir {
            RotateDir::Cw => self.rotate_cw(),
            RotateDir::Ccw => self.rotate_ccw(),
        }
    }
}

/// Whether a piece is free-falling or resting on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceStatus {
    Falling,
    Landed,
}

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Empty,
    Filled,
}

/// Logical input actions consumed by the tick pipeline.
///
/// Decoding keys or gamepads into these is left to the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down immediately
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}

impl Action {
    /// Parse action from its camelCase name.
    ///
    /// ```
    /// use tetris_rule_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("hardDrop"), Some(Action::HardDrop));
    /// assert_eq!(Action::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "softdrop" => Some(Action::SoftDrop),
            "harddrop" => Some(Action::HardDrop),
            "rotatecw" => Some(Action::RotateCw),
            "rotateccw" => Some(Action::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::SoftDrop => "softDrop",
            Action::HardDrop => "hardDrop",
            Action::RotateCw => "rotateCw",
            Action::RotateCcw => "rotateCcw",
        }
    }
}
