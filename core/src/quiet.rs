use crate::Latch;

/// Fill tick period while holding, in milliseconds.
pub const TICK_MS: u32 = 30;

/// Progress added per tick; together with [`TICK_MS`] this fills the bar in
/// roughly two seconds of continuous holding.
pub const TICK_STEP: f32 = 1.5;

pub const FULL_PROGRESS: f32 = 100.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Ignored,
    Rising,
    /// Progress just reached the top; fires at most once.
    Filled,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Hold-to-fill progress in `[0, 100]`. Releasing before the bar is full
/// resets it to exactly zero; there is no partial credit. The driving timer
/// lives with the caller and must only tick while `holding` is true.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuietEngine {
    progress: f32,
    holding: bool,
    completed: Latch,
}

impl QuietEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn progress(&self) -> f32 {
        self.progress
    }

    pub const fn holding(&self) -> bool {
        self.holding
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    /// Begins holding. Returns whether the hold state changed, i.e. whether
    /// the caller should start the tick timer.
    pub fn press(&mut self) -> bool {
        if self.completed.fired() || self.holding {
            return false;
        }
        self.holding = true;
        true
    }

    /// Ends holding. Before completion this wipes all accumulated progress.
    pub fn release(&mut self) -> bool {
        if !self.holding {
            return false;
        }
        self.holding = false;
        if !self.completed.fired() {
            self.progress = 0.0;
        }
        true
    }

    /// One timer tick. Ticks that race a release or arrive after completion
    /// are dropped.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.holding || self.completed.fired() {
            return TickOutcome::Ignored;
        }

        self.progress += TICK_STEP;
        if self.progress >= FULL_PROGRESS {
            self.progress = FULL_PROGRESS;
            let _ = self.completed.fire();
            log::debug!("snuck past");
            TickOutcome::Filled
        } else {
            TickOutcome::Rising
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold_until_full(engine: &mut QuietEngine) -> u32 {
        assert!(engine.press());
        let mut ticks = 0;
        loop {
            ticks += 1;
            match engine.tick() {
                TickOutcome::Rising => {}
                TickOutcome::Filled => return ticks,
                TickOutcome::Ignored => panic!("tick ignored while holding"),
            }
        }
    }

    #[test]
    fn ticks_without_holding_are_ignored() {
        let mut engine = QuietEngine::new();
        assert_eq!(engine.tick(), TickOutcome::Ignored);
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn release_before_full_resets_to_exactly_zero() {
        let mut engine = QuietEngine::new();
        engine.press();
        for _ in 0..10 {
            engine.tick();
        }
        assert!(engine.progress() > 0.0);

        assert!(engine.release());
        assert_eq!(engine.progress(), 0.0);
        assert!(!engine.is_completed());

        // re-pressing resumes from scratch
        assert!(engine.press());
        assert_eq!(engine.tick(), TickOutcome::Rising);
        assert_eq!(engine.progress(), TICK_STEP);
    }

    #[test]
    fn progress_never_exceeds_the_cap() {
        let mut engine = QuietEngine::new();
        hold_until_full(&mut engine);
        assert_eq!(engine.progress(), FULL_PROGRESS);

        engine.tick();
        assert_eq!(engine.progress(), FULL_PROGRESS);
    }

    #[test]
    fn filled_fires_exactly_once_per_activation() {
        let mut engine = QuietEngine::new();
        let ticks = hold_until_full(&mut engine);
        // 100 / 1.5 rounds up to 67 ticks
        assert_eq!(ticks, 67);
        assert!(engine.is_completed());

        assert_eq!(engine.tick(), TickOutcome::Ignored);
        assert!(engine.release());
        assert_eq!(engine.progress(), FULL_PROGRESS);
        assert!(!engine.press());
    }

    #[test]
    fn double_press_and_double_release_are_no_ops() {
        let mut engine = QuietEngine::new();
        assert!(engine.press());
        assert!(!engine.press());
        assert!(engine.release());
        assert!(!engine.release());
    }
}
