//! The world: entity store, grid singleton and per-run state.

use log::debug;

use tetris_rule_core::{Entity, Error, Grid, PieceQueue, Settings};

use crate::components::{ActivePiece, Components, FallProgress, Position, TetriminoMeta};
use crate::types::PieceType;

#[derive(Debug, Clone)]
pub struct World {
    /// Piece entities and their components.
    pub store: Components,
    /// The board. Fixed dimensions for the life of the world.
    pub grid: Grid,
    queue: PieceQueue,
    spawn_anchor: (i32, i32),
    gameover: bool,
    lines_cleared: u32,
    pieces_spawned: u32,
    tick_count: u64,
}

/// Build a world with an empty grid and the first piece at the spawn anchor.
///
/// A validated grid always has room for the spawn box, so the first piece
/// always fits.
pub fn make_world(settings: &Settings) -> Result<World, Error> {
    settings.validate()?;

    let grid = Grid::with_origin(
        settings.rows as usize,
        settings.columns as usize,
        settings.cell_width,
        settings.cell_height,
        settings.origin_x,
        settings.origin_y,
    );

    let mut world = World {
        store: Components::new(),
        grid,
        queue: PieceQueue::new(settings.seed),
        spawn_anchor: settings.spawn_anchor(),
        gameover: false,
        lines_cleared: 0,
        pieces_spawned: 0,
        tick_count: 0,
    };

    world.spawn_piece();

    debug!(
        "world ready: {}x{} grid, spawn anchor {:?}, seed {}",
        world.grid.cols, world.grid.rows, world.spawn_anchor, settings.seed
    );
    Ok(world)
}

impl World {
    /// Create the next active piece at the spawn anchor. Legality is left to
    /// the game-over check.
    pub(crate) fn spawn_piece(&mut self) -> Entity {
        let piece_type = self.queue.draw();
        self.spawn_piece_of(piece_type)
    }

    pub(crate) fn spawn_piece_of(&mut self, piece_type: PieceType) -> Entity {
        let (row, col) = self.spawn_anchor;
        let entity = self.store.create();
        self.store.active.insert(entity, ActivePiece);
        self.store.meta.insert(entity, TetriminoMeta::spawned(piece_type));
        self.store
            .position
            .insert(entity, Position::at_cell(&self.grid, row, col));
        self.store.fall.insert(entity, FallProgress::default());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        debug!("spawned {:?} as {} at row {}, column {}", piece_type, entity, row, col);
        entity
    }

    /// The entity currently carrying `ActivePiece`.
    pub fn active_entity(&self) -> Option<Entity> {
        self.store.active.entities().first().copied()
    }

    /// Anchor `(row, col)` where new pieces appear.
    pub fn spawn_anchor(&self) -> (i32, i32) {
        self.spawn_anchor
    }

    pub fn is_gameover(&self) -> bool {
        self.gameover
    }

    pub(crate) fn raise_gameover(&mut self) {
        self.gameover = true;
    }

    /// Full rows removed since construction.
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub(crate) fn add_lines_cleared(&mut self, count: u32) {
        self.lines_cleared = self.lines_cleared.saturating_add(count);
    }

    /// Pieces spawned since construction, the first one included.
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Completed `step_world` calls.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub(crate) fn advance_tick_count(&mut self) {
        self.tick_count += 1;
    }

    /// Upcoming spawn types, next first.
    pub fn next_pieces(&self, count: usize) -> Vec<PieceType> {
        self.queue.peek(count)
    }
}
