//! Spawn randomizer - seeded 7-bag piece selection
//!
//! Each bag holds one of every piece type, shuffled with a small LCG so a
//! given seed always yields the same spawn sequence. The queue is the only
//! source of piece types for spawns.

use crate::types::PieceType;

/// Simple LCG (Linear Congruential Generator)
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would never leave zero
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    bag: [PieceType; 7],
    bag_index: usize,
    rng: SimpleRng,
    seed: u32,
}

impl PieceQueue {
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: PieceType::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
            seed,
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag = PieceType::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece, refilling the bag when it runs dry.
    pub fn draw(&mut self) -> PieceType {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// The next `count` pieces `draw` would return, without consuming them.
    pub fn peek(&self, count: usize) -> Vec<PieceType> {
        let mut preview = self.clone();
        (0..count).map(|_| preview.draw()).collect()
    }

    /// Seed the queue was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_SEED)
    }
}
