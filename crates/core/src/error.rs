use thiserror::Error;

/// Misuse of the quiz state machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot create quiz with no questions")]
    Empty,

    #[error("quiz is finished, no more questions available")]
    Finished,
}

/// Raised when an untyped payload does not have the question schema.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("expected an array of questions")]
    NotAnArray,

    /// A single value failed the question checks. Raised when one question
    /// is decoded on its own; list parsing reports `InvalidQuestion` instead.
    #[error("value does not match the question schema")]
    NotAQuestion,

    #[error("question at index {index} is malformed")]
    InvalidQuestion { index: usize },

    #[error("failed to decode questions: {0}")]
    Decode(#[source] serde_json::Error),
}
