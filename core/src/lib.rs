#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use code::*;
pub use counting::*;
pub use decorate::*;
pub use error::*;
pub use memory::*;
pub use oddone::*;
pub use progression::*;
pub use quiet::*;
pub use reflex::*;
pub use reveal::*;
pub use trivia::*;

mod code;
mod counting;
mod decorate;
mod error;
mod memory;
mod oddone;
mod progression;
mod quiet;
mod reflex;
mod reveal;
mod trivia;

/// The eight mini-game kinds, in no particular order; the play order is
/// fixed by [`LEVELS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelKind {
    Trivia,
    Memory,
    Reflex,
    Counting,
    Decorate,
    OddOne,
    Quiet,
    Code,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub kind: LevelKind,
    pub title: &'static str,
}

impl LevelDescriptor {
    const fn new(kind: LevelKind, title: &'static str) -> Self {
        Self { kind, title }
    }
}

/// The fixed level order of a session.
pub const LEVELS: [LevelDescriptor; 8] = [
    LevelDescriptor::new(LevelKind::Trivia, "Level 1: Elf Wisdom"),
    LevelDescriptor::new(LevelKind::Memory, "Level 2: Toy Match"),
    LevelDescriptor::new(LevelKind::Reflex, "Level 3: Catch the Elf"),
    LevelDescriptor::new(LevelKind::Counting, "Level 4: Cookie Count"),
    LevelDescriptor::new(LevelKind::Decorate, "Level 5: Light the Tree"),
    LevelDescriptor::new(LevelKind::OddOne, "Level 6: Sad Elf Spotter"),
    LevelDescriptor::new(LevelKind::Quiet, "Level 7: Sneak Past Santa"),
    LevelDescriptor::new(LevelKind::Code, "Level 8: The Secret Code"),
];

/// One-shot guard backing every engine's completion signal. An engine may
/// only report its winning outcome on the call that fires the latch, so the
/// signal cannot re-fire within one activation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    /// Returns `true` exactly once.
    pub fn fire(&mut self) -> bool {
        !core::mem::replace(&mut self.fired, true)
    }

    pub const fn fired(self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = Latch::default();
        assert!(!latch.fired());
        assert!(latch.fire());
        assert!(latch.fired());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn level_order_matches_the_session_script() {
        use LevelKind::*;
        let kinds: [LevelKind; 8] = core::array::from_fn(|i| LEVELS[i].kind);
        assert_eq!(
            kinds,
            [Trivia, Memory, Reflex, Counting, Decorate, OddOne, Quiet, Code]
        );
    }

    #[test]
    fn level_titles_are_unique() {
        for (i, level) in LEVELS.iter().enumerate() {
            assert!(
                !LEVELS[..i].iter().any(|other| other.title == level.title),
                "duplicate title: {}",
                level.title
            );
        }
    }
}
