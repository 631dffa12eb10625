use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Index out of range")]
    InvalidIndex,
    #[error("Not a decimal digit")]
    InvalidDigit,
    #[error("Question text is empty")]
    EmptyQuestion,
    #[error("Question must have exactly {expected} options, got {got}")]
    WrongOptionCount { expected: usize, got: usize },
    #[error("Question options are not unique")]
    DuplicateOption,
    #[error("Correct answer is not one of the options")]
    AnswerNotInOptions,
}

pub type Result<T> = core::result::Result<T, GameError>;
