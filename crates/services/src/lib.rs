#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod sessions;
pub mod source;

pub use error::{LoadError, QuizServiceError};
pub use loader::QuestionLoader;
pub use source::{FileSource, HttpSource, QuestionSource, StaticSource, source_for_location};

pub use sessions::{
    AnswerFeedback, AnswerOutcome, OptionMark, QuestionView, QuizLoopService, ResultVerdict,
};
