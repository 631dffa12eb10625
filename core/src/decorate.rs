use crate::{GameError, Latch, Result};

pub const BULB_COUNT: usize = 5;

/// Delay between the last bulb lighting up and the completion signal, in
/// milliseconds.
pub const ALL_LIT_DELAY_MS: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    Ignored,
    Toggled,
    /// This toggle lit the final bulb.
    AllLit,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Five independent light bulbs; each toggle flips exactly one. Completion
/// is reported the instant all five are lit at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecorateEngine {
    bulbs: [bool; BULB_COUNT],
    completed: Latch,
}

impl DecorateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bulbs(&self) -> &[bool] {
        &self.bulbs
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome> {
        let bulb = self.bulbs.get_mut(index).ok_or(GameError::InvalidIndex)?;
        if self.completed.fired() {
            return Ok(ToggleOutcome::Ignored);
        }

        *bulb = !*bulb;
        if self.bulbs.iter().all(|&lit| lit) && self.completed.fire() {
            log::debug!("all bulbs lit");
            Ok(ToggleOutcome::AllLit)
        } else {
            Ok(ToggleOutcome::Toggled)
        }
    }
}
