use yew::prelude::*;

pub(crate) use code::CodeLevel;
pub(crate) use counting::CountingLevel;
pub(crate) use decorate::DecorateLevel;
pub(crate) use memory::MemoryLevel;
pub(crate) use oddone::OddOneLevel;
pub(crate) use quiet::QuietLevel;
pub(crate) use reflex::ReflexLevel;
pub(crate) use trivia::TriviaLevel;

mod code;
mod counting;
mod decorate;
mod memory;
mod oddone;
mod quiet;
mod reflex;
mod trivia;

/// The activation boundary every level is instantiated with: a single
/// zero-argument completion callback plus the active flag.
#[derive(Properties, Clone, PartialEq)]
pub(crate) struct LevelProps {
    pub on_complete: Callback<()>,
    #[prop_or(true)]
    pub active: bool,
    #[prop_or_default]
    pub seed: u64,
}

/// Emits the completion signal, unless the level has been deactivated.
pub(crate) fn emit_if_active(active: bool, on_complete: &Callback<()>) {
    if active {
        on_complete.emit(());
    } else {
        log::warn!("completion signal while inactive, dropped");
    }
}

impl LevelProps {
    pub(crate) fn complete(&self) {
        emit_if_active(self.active, &self.on_complete);
    }
}
