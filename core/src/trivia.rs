use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{GameError, Latch, Result};

pub const OPTION_COUNT: usize = 4;

/// Delay before a resolved guess advances the level (correct) or resets the
/// selection (incorrect), in milliseconds.
pub const RESULT_DELAY_MS: u32 = 1_500;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl TriviaQuestion {
    /// Checks the question invariant: non-empty text, exactly four unique
    /// options, and a correct answer that is (case-sensitively) one of them.
    pub fn validate(&self) -> Result<()> {
        if self.question.is_empty() {
            return Err(GameError::EmptyQuestion);
        }
        if self.options.len() != OPTION_COUNT {
            return Err(GameError::WrongOptionCount {
                expected: OPTION_COUNT,
                got: self.options.len(),
            });
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(GameError::DuplicateOption);
            }
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(GameError::AnswerNotInOptions);
        }
        Ok(())
    }
}

const POOL: &[(&str, [&str; OPTION_COUNT], &str)] = &[
    (
        "What is the name of the Grinch's dog?",
        ["Max", "Rex", "Spot", "Buddy"],
        "Max",
    ),
    (
        "What color is Rudolph's famous nose?",
        ["Red", "Green", "Blue", "Gold"],
        "Red",
    ),
    (
        "How many reindeer pull Santa's sleigh, counting Rudolph?",
        ["Nine", "Eight", "Ten", "Twelve"],
        "Nine",
    ),
    (
        "Where does Santa Claus live?",
        ["The North Pole", "The South Pole", "The Moon", "A desert island"],
        "The North Pole",
    ),
    (
        "What plant do people kiss under at Christmas?",
        ["Mistletoe", "Holly", "Ivy", "A cactus"],
        "Mistletoe",
    ),
];

fn question_at(index: usize) -> TriviaQuestion {
    let (question, options, correct_answer) = POOL[index];
    TriviaQuestion {
        question: question.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
    }
}

/// The deterministic known-good question substituted on any fetch failure.
pub fn fallback_question() -> TriviaQuestion {
    question_at(0)
}

/// Draws a uniformly random question from the built-in pool.
pub fn pool_question(seed: u64) -> TriviaQuestion {
    let mut rng = SmallRng::seed_from_u64(seed);
    question_at(rng.random_range(0..POOL.len()))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriviaState {
    Loading,
    AwaitingGuess,
    Correct,
    Incorrect,
    /// No usable question arrived; the level offers a skip instead of
    /// stalling the session.
    Failed,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    Ignored,
    Correct,
    Incorrect,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriviaEngine {
    state: TriviaState,
    question: Option<TriviaQuestion>,
    selected: Option<usize>,
    completed: Latch,
}

impl TriviaEngine {
    pub fn new() -> Self {
        Self {
            state: TriviaState::Loading,
            question: None,
            selected: None,
            completed: Latch::default(),
        }
    }

    pub const fn state(&self) -> TriviaState {
        self.state
    }

    pub fn question(&self) -> Option<&TriviaQuestion> {
        self.question.as_ref()
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_completed(&self) -> bool {
        self.completed.fired()
    }

    /// Installs the fetched question, moving Loading → AwaitingGuess. A
    /// question failing the invariant is rejected without a state change.
    pub fn question_loaded(&mut self, question: TriviaQuestion) -> Result<()> {
        question.validate()?;
        if matches!(self.state, TriviaState::Loading) {
            self.question = Some(question);
            self.state = TriviaState::AwaitingGuess;
        }
        Ok(())
    }

    /// Marks the load as unrecoverable; the level then offers a skip.
    pub fn load_failed(&mut self) {
        if matches!(self.state, TriviaState::Loading) {
            log::warn!("trivia question unavailable, offering skip");
            self.state = TriviaState::Failed;
        }
    }

    /// Resolves a guess. Guesses outside AwaitingGuess are dropped; there is
    /// no penalty and no attempt limit.
    pub fn guess(&mut self, option: usize) -> Result<GuessOutcome> {
        if !matches!(self.state, TriviaState::AwaitingGuess) {
            return Ok(GuessOutcome::Ignored);
        }
        let Some(question) = self.question.as_ref() else {
            return Ok(GuessOutcome::Ignored);
        };
        let answer = question.options.get(option).ok_or(GameError::InvalidIndex)?;

        self.selected = Some(option);
        if *answer == question.correct_answer {
            self.state = TriviaState::Correct;
            Ok(GuessOutcome::Correct)
        } else {
            self.state = TriviaState::Incorrect;
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// Clears an incorrect selection, returning to AwaitingGuess.
    pub fn clear_incorrect(&mut self) -> bool {
        if matches!(self.state, TriviaState::Incorrect) {
            self.state = TriviaState::AwaitingGuess;
            self.selected = None;
            true
        } else {
            false
        }
    }

    /// Fires the completion signal, valid once a guess resolved correct or
    /// the level was skipped from the failed state. Returns `true` only the
    /// first time.
    pub fn complete(&mut self) -> bool {
        matches!(self.state, TriviaState::Correct | TriviaState::Failed) && self.completed.fire()
    }
}

impl Default for TriviaEngine {
    fn default() -> Self {
        Self::new()
    }
}
