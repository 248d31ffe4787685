#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod quiz;
pub mod validate;

pub use error::{QuizError, ValidationError};
pub use model::{Difficulty, ParseDifficultyError, Question, QuestionId, QuizProgress, QuizResult};
pub use quiz::{Quiz, QuizState};
