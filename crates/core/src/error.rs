//! Construction errors.
//!
//! Only settings that cannot produce a legal starting world end up here.
//! Gameplay termination is world state (`is_gameover`), and contract
//! violations inside a tick panic.

/// Errors returned while building or reconfiguring a world.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The grid cannot hold the 4x4 spawn box.
    #[error("grid must be at least {min}x{min} cells, got {columns} columns x {rows} rows")]
    GridTooSmall { columns: i32, rows: i32, min: usize },

    #[error("cell size must be positive, got {width}x{height}")]
    InvalidCellSize { width: i32, height: i32 },

    #[error("fps must be positive")]
    InvalidFps,

    #[error("drop rate must be a finite, non-negative number of seconds per cell, got {0}")]
    InvalidDropRate(f64),

    #[error("lock delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidLockDelay(f64),

    #[error("grid of {columns}x{rows} cells exceeds the {max} cell limit")]
    GridTooLarge { columns: i32, rows: i32, max: usize },

    /// Some piece anchor on this grid has no `i32` pixel coordinate.
    #[error("{axis} pixel coordinates overflow: origin {origin}, {cells} cells of {size}px")]
    PixelOverflow {
        axis: &'static str,
        origin: i32,
        cells: i32,
        size: i32,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}
