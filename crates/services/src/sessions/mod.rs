mod feedback;
mod view;
mod workflow;

// Public API of the quiz session subsystem.
pub use feedback::{AnswerFeedback, OptionMark};
pub use view::{QuestionView, ResultVerdict};
pub use workflow::{AnswerOutcome, QuizLoopService};
