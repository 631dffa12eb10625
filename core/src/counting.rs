use rand::prelude::*;
use smallvec::SmallVec;

use crate::Latch;

/// Inclusive range the true chip count is drawn from.
pub const CHIP_MIN: u8 = 3;
pub const CHIP_MAX: u8 = 7;

/// Inclusive range the filler candidates are drawn from.
pub const FILLER_MIN: u8 = 1;
pub const FILLER_MAX: u8 = 10;

pub const CHOICE_COUNT: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    Ignored,
    Won,
}

impl PickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// One true chip count plus three decoys, presented sorted ascending. Only
/// picking the true count completes the level; anything else is a silent
/// no-op with unlimited attempts.
#[derive(Clone, Debug, PartialEq)]
pub struct CountingEngine {
    chips: u8,
    choices: SmallVec<[u8; CHOICE_COUNT]>,
    completed: Latch,
}

impl CountingEngine {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let chips = rng.random_range(CHIP_MIN..=CHIP_MAX);

        let mut choices: SmallVec<[u8; CHOICE_COUNT]> = SmallVec::new();
        choices.push(chips);
        while choices.len() < CHOICE_COUNT {
            let filler = rng.random_range(FILLER_MIN..=FILLER_MAX);
            if !choices.contains(&filler) {
                choices.push(filler);
            }
        }
        choices.sort_unstable();

        Self {
            chips,
            choices,
            completed: Latch::default(),
        }
    }

    /// The true chip count to be found.
    pub const fn chips(&self) -> u8 {
        self.chips
    }

    /// The four unique candidate answers, sorted ascending.
    pub fn choices(&self) -> &[u8] {
        &self.choices
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    pub fn pick(&mut self, candidate: u8) -> PickOutcome {
        if candidate == self.chips && self.completed.fire() {
            log::debug!("counted {} chips correctly", candidate);
            PickOutcome::Won
        } else {
            PickOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_set_has_four_unique_members_containing_the_count() {
        for seed in 0..64 {
            let engine = CountingEngine::new(seed);
            let choices = engine.choices();

            assert_eq!(choices.len(), CHOICE_COUNT, "seed {seed}");
            assert!(choices.contains(&engine.chips()), "seed {seed}");
            for (i, choice) in choices.iter().enumerate() {
                assert!(!choices[..i].contains(choice), "seed {seed}");
            }
        }
    }

    #[test]
    fn choices_are_sorted_ascending() {
        for seed in 0..64 {
            let engine = CountingEngine::new(seed);
            assert!(engine.choices().is_sorted(), "seed {seed}");
        }
    }

    #[test]
    fn chip_count_stays_in_range() {
        for seed in 0..64 {
            let chips = CountingEngine::new(seed).chips();
            assert!((CHIP_MIN..=CHIP_MAX).contains(&chips), "seed {seed}");
        }
    }

    #[test]
    fn only_the_true_count_wins() {
        let mut engine = CountingEngine::new(9);
        let chips = engine.chips();

        let decoys: smallvec::SmallVec<[u8; CHOICE_COUNT]> = engine
            .choices()
            .iter()
            .copied()
            .filter(|&choice| choice != chips)
            .collect();
        for decoy in decoys {
            assert_eq!(engine.pick(decoy), PickOutcome::Ignored);
            assert!(!engine.is_completed());
        }

        assert_eq!(engine.pick(chips), PickOutcome::Won);
        assert!(engine.is_completed());
        // completion cannot re-fire
        assert_eq!(engine.pick(chips), PickOutcome::Ignored);
    }
}
