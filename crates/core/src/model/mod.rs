mod difficulty;
mod ids;
mod question;
mod result;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use ids::QuestionId;
pub use question::Question;
pub use result::{QuizProgress, QuizResult};
