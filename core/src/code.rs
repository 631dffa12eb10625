use alloc::string::String;
use smallvec::SmallVec;

use crate::{GameError, Latch, Result};

pub const CODE_LEN: usize = 4;

/// The date of Christmas, MMDD.
pub const SECRET: [u8; CODE_LEN] = [1, 2, 2, 5];

/// Delay before an accepted code completes the level, or a rejected one
/// clears the buffer, in milliseconds.
pub const SETTLE_DELAY_MS: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    /// Digit appended, buffer not yet full.
    Pending,
    /// Buffer filled with the secret code.
    Accepted,
    /// Buffer filled with anything else; it stays visible until cleared.
    Rejected,
}

impl KeyOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A keypad buffer of up to four decimal digits checked against the fixed
/// secret. Wrong codes cost nothing; the buffer is cleared and the player
/// retries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CodeEngine {
    buffer: SmallVec<[u8; CODE_LEN]>,
    completed: Latch,
}

impl CodeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digits(&self) -> &[u8] {
        &self.buffer
    }

    /// The buffer as text, for display.
    pub fn entry(&self) -> String {
        self.buffer
            .iter()
            .map(|&digit| char::from(b'0' + digit))
            .collect()
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    /// Appends a digit while the buffer has room. On reaching four digits
    /// the buffer is judged against the secret.
    pub fn press_digit(&mut self, digit: u8) -> Result<KeyOutcome> {
        if digit > 9 {
            return Err(GameError::InvalidDigit);
        }
        if self.completed.fired() || self.buffer.len() == CODE_LEN {
            return Ok(KeyOutcome::Ignored);
        }

        self.buffer.push(digit);
        if self.buffer.len() < CODE_LEN {
            return Ok(KeyOutcome::Pending);
        }

        if self.buffer[..] == SECRET && self.completed.fire() {
            log::debug!("secret code accepted");
            Ok(KeyOutcome::Accepted)
        } else {
            Ok(KeyOutcome::Rejected)
        }
    }

    /// Empties the buffer, whatever its length. Returns whether anything
    /// changed.
    pub fn clear(&mut self) -> bool {
        if self.completed.fired() || self.buffer.is_empty() {
            return false;
        }
        self.buffer.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(engine: &mut CodeEngine, digits: &[u8]) -> KeyOutcome {
        let mut last = KeyOutcome::Ignored;
        for &digit in digits {
            last = engine.press_digit(digit).unwrap();
        }
        last
    }

    #[test]
    fn the_secret_code_is_accepted() {
        let mut engine = CodeEngine::new();
        assert_eq!(press_all(&mut engine, &SECRET), KeyOutcome::Accepted);
        assert!(engine.is_completed());
    }

    #[test]
    fn a_wrong_code_is_rejected_and_cleared_for_retry() {
        let mut engine = CodeEngine::new();
        assert_eq!(press_all(&mut engine, &[1, 2, 2, 4]), KeyOutcome::Rejected);
        assert!(!engine.is_completed());
        // full rejected buffer ignores further digits until cleared
        assert_eq!(engine.press_digit(5).unwrap(), KeyOutcome::Ignored);

        assert!(engine.clear());
        assert_eq!(press_all(&mut engine, &SECRET), KeyOutcome::Accepted);
    }

    #[test]
    fn buffer_never_exceeds_four_digits() {
        let mut engine = CodeEngine::new();
        for digit in 0..8 {
            let _ = engine.press_digit(digit % 10).unwrap();
            assert!(engine.digits().len() <= CODE_LEN);
        }
    }

    #[test]
    fn explicit_clear_works_at_any_length() {
        let mut engine = CodeEngine::new();
        assert!(!engine.clear());

        engine.press_digit(7).unwrap();
        engine.press_digit(7).unwrap();
        assert!(engine.clear());
        assert_eq!(engine.entry(), "");
    }

    #[test]
    fn entry_renders_the_buffer_digits() {
        let mut engine = CodeEngine::new();
        press_all(&mut engine, &[1, 2]);
        assert_eq!(engine.entry(), "12");
    }

    #[test]
    fn non_digit_input_is_an_error() {
        let mut engine = CodeEngine::new();
        assert_eq!(engine.press_digit(10), Err(GameError::InvalidDigit));
    }

    #[test]
    fn clear_during_the_accept_window_changes_nothing() {
        let mut engine = CodeEngine::new();
        press_all(&mut engine, &SECRET);

        // the player mashing CLR while the accepted code settles must not
        // disturb the completed engine or its displayed entry
        assert!(!engine.clear());
        assert!(engine.is_completed());
        assert_eq!(engine.entry(), "1225");
        assert_eq!(engine.press_digit(0).unwrap(), KeyOutcome::Ignored);
    }

    #[test]
    fn completion_cannot_refire() {
        let mut engine = CodeEngine::new();
        press_all(&mut engine, &SECRET);
        assert_eq!(engine.press_digit(1).unwrap(), KeyOutcome::Ignored);
        assert!(!engine.clear());
    }
}
