use serde::{Deserialize, Serialize};

use crate::{LevelDescriptor, LEVELS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Intro,
    Playing,
    Reveal,
}

impl GamePhase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Intro
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AdvanceOutcome {
    /// The signal arrived outside the playing phase and was dropped.
    Ignored,
    Advanced,
    Revealed,
}

impl AdvanceOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Owns the session phase and the active level index. The index only moves
/// forward, one step per honored completion signal, and the phase walks
/// Intro → Playing → Reveal with no way back short of rebuilding the whole
/// session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    phase: GamePhase,
    level: u8,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn total_levels() -> u8 {
        LEVELS.len() as u8
    }

    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub fn descriptor(&self) -> LevelDescriptor {
        LEVELS[usize::from(self.level)]
    }

    /// Leaves the intro screen. Returns whether anything changed.
    pub fn start(&mut self) -> bool {
        if matches!(self.phase, GamePhase::Intro) {
            log::debug!("session started");
            self.phase = GamePhase::Playing;
            true
        } else {
            false
        }
    }

    /// Honors a level's completion signal: steps to the next level, or
    /// enters the reveal phase after the last one.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.phase.is_playing() {
            log::warn!("completion signal outside playing phase, ignored");
            return AdvanceOutcome::Ignored;
        }

        if usize::from(self.level) + 1 < LEVELS.len() {
            self.level += 1;
            log::debug!("advanced to level {}", self.level + 1);
            AdvanceOutcome::Advanced
        } else {
            log::debug!("last level complete, revealing");
            self.phase = GamePhase::Reveal;
            AdvanceOutcome::Revealed
        }
    }
}
