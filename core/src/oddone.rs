use rand::prelude::*;

use crate::{GameError, Latch, Result};

/// 3×3 grid of positions.
pub const GRID_SIZE: usize = 9;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpotOutcome {
    Ignored,
    Won,
}

impl SpotOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Nine identical symbols, except one odd index drawn at construction.
/// Spotting the odd one completes the level immediately; everything else is
/// a silent no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct OddOneEngine {
    odd_index: u8,
    completed: Latch,
}

impl OddOneEngine {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self {
            odd_index: rng.random_range(0..GRID_SIZE as u8),
            completed: Latch::default(),
        }
    }

    pub const fn odd_index(&self) -> u8 {
        self.odd_index
    }

    pub fn is_odd(&self, index: usize) -> bool {
        usize::from(self.odd_index) == index
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    pub fn spot(&mut self, index: usize) -> Result<SpotOutcome> {
        if index >= GRID_SIZE {
            return Err(GameError::InvalidIndex);
        }

        if self.is_odd(index) && self.completed.fire() {
            log::debug!("odd one spotted at {}", index);
            Ok(SpotOutcome::Won)
        } else {
            Ok(SpotOutcome::Ignored)
        }
    }
}
