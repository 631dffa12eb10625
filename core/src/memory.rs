use rand::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{GameError, Latch, Result};

pub const PAIR_COUNT: usize = 4;
pub const CARD_COUNT: usize = PAIR_COUNT * 2;

/// How long a mismatched pair stays visible before flipping back down, in
/// milliseconds.
pub const MISMATCH_DELAY_MS: u32 = 1_000;

/// Delay between the last match and the completion signal, in milliseconds.
pub const WIN_DELAY_MS: u32 = 1_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u8,
    /// Symbol index in `[0, PAIR_COUNT)`; each symbol appears on exactly
    /// two cards.
    pub symbol: u8,
    /// Only ever transitions false → true.
    pub matched: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    Ignored,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card matched the first; both are locked face up.
    Matched,
    /// Second card did not match; both stay visible until
    /// [`MemoryEngine::resolve_mismatch`].
    Mismatch,
    /// The final pair matched.
    Won,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Four shuffled symbol pairs; at most two cards face up and unmatched at a
/// time. The shuffle is fixed for the engine's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryEngine {
    cards: [Card; CARD_COUNT],
    face_up: SmallVec<[u8; 2]>,
    pending_mismatch: bool,
    completed: Latch,
}

impl MemoryEngine {
    pub fn new(seed: u64) -> Self {
        let mut cards: [Card; CARD_COUNT] = core::array::from_fn(|i| Card {
            id: i as u8,
            symbol: (i % PAIR_COUNT) as u8,
            matched: false,
        });
        cards.shuffle(&mut SmallRng::seed_from_u64(seed));

        Self {
            cards,
            face_up: SmallVec::new(),
            pending_mismatch: false,
            completed: Latch::default(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether the card at `index` currently shows its face (matched or
    /// part of the face-up selection).
    pub fn is_face_up(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .is_some_and(|card| card.matched || self.face_up.contains(&(index as u8)))
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.matched).count()
    }

    pub const fn has_pending_mismatch(&self) -> bool {
        self.pending_mismatch
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    /// Turns the card at `index` face up. Matched cards, already face-up
    /// cards, and any card while a mismatch is pending are no-ops.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome> {
        if index >= CARD_COUNT {
            return Err(GameError::InvalidIndex);
        }
        let index = index as u8;

        if self.pending_mismatch
            || self.face_up.len() == 2
            || self.face_up.contains(&index)
            || self.cards[usize::from(index)].matched
        {
            return Ok(FlipOutcome::Ignored);
        }

        self.face_up.push(index);
        let &[first, second] = &self.face_up[..] else {
            return Ok(FlipOutcome::Revealed);
        };

        if self.cards[usize::from(first)].symbol == self.cards[usize::from(second)].symbol {
            self.cards[usize::from(first)].matched = true;
            self.cards[usize::from(second)].matched = true;
            self.face_up.clear();

            if self.matched_count() == CARD_COUNT && self.completed.fire() {
                log::debug!("all pairs matched");
                Ok(FlipOutcome::Won)
            } else {
                Ok(FlipOutcome::Matched)
            }
        } else {
            self.pending_mismatch = true;
            Ok(FlipOutcome::Mismatch)
        }
    }

    /// Flips a mismatched pair back down. Returns whether anything changed.
    pub fn resolve_mismatch(&mut self) -> bool {
        if self.pending_mismatch {
            self.face_up.clear();
            self.pending_mismatch = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pairs up card indices by symbol for deterministic optimal play.
    fn pairs(engine: &MemoryEngine) -> [(usize, usize); PAIR_COUNT] {
        let mut result = [(usize::MAX, usize::MAX); PAIR_COUNT];
        for (index, card) in engine.cards().iter().enumerate() {
            let slot = &mut result[usize::from(card.symbol)];
            if slot.0 == usize::MAX {
                slot.0 = index;
            } else {
                slot.1 = index;
            }
        }
        result
    }

    #[test]
    fn every_symbol_appears_exactly_twice() {
        for seed in 0..32 {
            let engine = MemoryEngine::new(seed);
            for symbol in 0..PAIR_COUNT as u8 {
                let count = engine
                    .cards()
                    .iter()
                    .filter(|card| card.symbol == symbol)
                    .count();
                assert_eq!(count, 2, "symbol {symbol} with seed {seed}");
            }
        }
    }

    #[test]
    fn shuffle_is_fixed_per_seed() {
        assert_eq!(MemoryEngine::new(3).cards(), MemoryEngine::new(3).cards());
    }

    #[test]
    fn optimal_play_wins_in_four_matches() {
        let mut engine = MemoryEngine::new(11);
        let pairs = pairs(&engine);

        for (n, &(a, b)) in pairs.iter().enumerate() {
            assert_eq!(engine.flip(a).unwrap(), FlipOutcome::Revealed);
            let expected = if n + 1 == PAIR_COUNT {
                FlipOutcome::Won
            } else {
                FlipOutcome::Matched
            };
            assert_eq!(engine.flip(b).unwrap(), expected);
        }
        assert_eq!(engine.matched_count(), CARD_COUNT);
        assert!(engine.is_completed());
    }

    #[test]
    fn mismatch_blocks_a_third_flip_until_resolved() {
        let mut engine = MemoryEngine::new(11);
        let pairs = pairs(&engine);
        let (a, _) = pairs[0];
        let (b, _) = pairs[1];

        assert_eq!(engine.flip(a).unwrap(), FlipOutcome::Revealed);
        assert_eq!(engine.flip(b).unwrap(), FlipOutcome::Mismatch);
        assert!(engine.is_face_up(a) && engine.is_face_up(b));

        // nothing may be flipped while the mismatch is showing
        assert_eq!(engine.flip(pairs[2].0).unwrap(), FlipOutcome::Ignored);

        assert!(engine.resolve_mismatch());
        assert!(!engine.is_face_up(a) && !engine.is_face_up(b));
        assert!(!engine.resolve_mismatch());
        assert_eq!(engine.flip(pairs[2].0).unwrap(), FlipOutcome::Revealed);
    }

    #[test]
    fn matched_and_face_up_cards_are_no_ops() {
        let mut engine = MemoryEngine::new(5);
        let pairs = pairs(&engine);
        let (a, b) = pairs[0];

        engine.flip(a).unwrap();
        assert_eq!(engine.flip(a).unwrap(), FlipOutcome::Ignored);

        assert_eq!(engine.flip(b).unwrap(), FlipOutcome::Matched);
        assert_eq!(engine.flip(a).unwrap(), FlipOutcome::Ignored);
        assert_eq!(engine.flip(b).unwrap(), FlipOutcome::Ignored);
    }

    #[test]
    fn matched_flag_never_reverts() {
        let mut engine = MemoryEngine::new(5);
        let pairs = pairs(&engine);
        let (a, b) = pairs[0];

        engine.flip(a).unwrap();
        engine.flip(b).unwrap();
        engine.resolve_mismatch();
        assert!(engine.cards()[a].matched);
        assert!(engine.cards()[b].matched);
    }

    #[test]
    fn out_of_range_flip_is_an_error() {
        let mut engine = MemoryEngine::new(0);
        assert_eq!(engine.flip(CARD_COUNT), Err(GameError::InvalidIndex));
    }
}
