use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Closed,
    Opened,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Closed
    }
}

/// The chest gate shown after the last level: a one-way Closed → Opened
/// transition. The only thing left after opening is a full-session restart,
/// done by rebuilding everything from scratch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    state: RevealState,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> RevealState {
        self.state
    }

    pub const fn is_opened(&self) -> bool {
        matches!(self.state, RevealState::Opened)
    }

    /// Opens the chest. Returns whether this call performed the transition.
    pub fn open(&mut self) -> bool {
        if self.is_opened() {
            return false;
        }
        log::debug!("chest opened");
        self.state = RevealState::Opened;
        true
    }
}
