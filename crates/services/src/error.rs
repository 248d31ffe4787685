//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::{QuizError, ValidationError};

/// Errors emitted while obtaining question data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read questions from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch questions: {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unsupported question source: {0}")]
    InvalidLocation(String),
    #[error("questions payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid data format: questions array is malformed ({0})")]
    Malformed(#[from] ValidationError),
    #[error("no questions available")]
    NoQuestions,
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
