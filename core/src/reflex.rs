use rand::prelude::*;

use crate::Latch;

/// Taps needed to win.
pub const WIN_TAPS: u8 = 5;

/// Interval of the autonomous target relocation, in milliseconds.
pub const RELOCATE_INTERVAL_MS: u32 = 1_200;

/// Inset margin keeping the target fully on-screen; both normalized axes
/// stay inside `[INSET_MIN, INSET_MAX]`.
pub const INSET_MIN: f32 = 0.10;
pub const INSET_MAX: f32 = 0.90;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapOutcome {
    Ignored,
    /// Hit registered, target relocated.
    Caught,
    /// Hit registered and the threshold reached; the target stays put.
    Won,
}

impl TapOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A dodging target at a normalized 2D position plus a hit counter. The
/// counter only increases, and only on successful taps.
#[derive(Clone, Debug)]
pub struct ReflexEngine {
    position: (f32, f32),
    hits: u8,
    rng: SmallRng,
    completed: Latch,
}

impl ReflexEngine {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let position = Self::draw_position(&mut rng);
        Self {
            position,
            hits: 0,
            rng,
            completed: Latch::default(),
        }
    }

    fn draw_position(rng: &mut SmallRng) -> (f32, f32) {
        (
            rng.random_range(INSET_MIN..=INSET_MAX),
            rng.random_range(INSET_MIN..=INSET_MAX),
        )
    }

    /// Normalized `(x, y)`, each axis in `[INSET_MIN, INSET_MAX]`.
    pub const fn position(&self) -> (f32, f32) {
        self.position
    }

    pub const fn hits(&self) -> u8 {
        self.hits
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    /// Moves the target to a fresh random position. Driven by the periodic
    /// timer as well as by successful taps; inert once the level is won.
    pub fn relocate(&mut self) -> bool {
        if self.completed.fired() {
            return false;
        }
        self.position = Self::draw_position(&mut self.rng);
        true
    }

    /// Registers a hit on the target. No cooldown, no miss penalty.
    pub fn tap(&mut self) -> TapOutcome {
        if self.completed.fired() {
            return TapOutcome::Ignored;
        }

        self.hits += 1;
        if self.hits >= WIN_TAPS {
            let _ = self.completed.fire();
            log::debug!("target caught {} times, won", self.hits);
            TapOutcome::Won
        } else {
            self.relocate();
            TapOutcome::Caught
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_inset(axis: f32) -> bool {
        (INSET_MIN..=INSET_MAX).contains(&axis)
    }

    #[test]
    fn positions_never_leave_the_inset_range() {
        for seed in 0..16 {
            let mut engine = ReflexEngine::new(seed);
            for _ in 0..100 {
                let (x, y) = engine.position();
                assert!(in_inset(x) && in_inset(y), "seed {seed}: ({x}, {y})");
                engine.relocate();
            }
        }
    }

    #[test]
    fn relocation_moves_the_target() {
        let mut engine = ReflexEngine::new(1);
        let before = engine.position();
        engine.relocate();
        assert_ne!(before, engine.position());
    }

    #[test]
    fn counter_increases_only_on_taps() {
        let mut engine = ReflexEngine::new(2);
        assert_eq!(engine.hits(), 0);
        engine.relocate();
        assert_eq!(engine.hits(), 0);
        assert_eq!(engine.tap(), TapOutcome::Caught);
        assert_eq!(engine.hits(), 1);
    }

    #[test]
    fn completion_fires_exactly_at_the_threshold() {
        let mut engine = ReflexEngine::new(3);
        for expected in 1..WIN_TAPS {
            assert_eq!(engine.tap(), TapOutcome::Caught);
            assert_eq!(engine.hits(), expected);
            assert!(!engine.is_completed());
        }

        let position = engine.position();
        assert_eq!(engine.tap(), TapOutcome::Won);
        assert!(engine.is_completed());
        // the winning tap does not relocate the target
        assert_eq!(engine.position(), position);
    }

    #[test]
    fn taps_after_the_win_are_ignored() {
        let mut engine = ReflexEngine::new(4);
        for _ in 0..WIN_TAPS {
            engine.tap();
        }
        assert_eq!(engine.tap(), TapOutcome::Ignored);
        assert_eq!(engine.hits(), WIN_TAPS);
        assert!(!engine.relocate());
    }
}
