use quiz_core::{Difficulty, Quiz, QuestionId};

/// Presentation-agnostic snapshot of the question on screen.
///
/// No pre-formatted strings; the presentation layer decides layout and
/// styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub number: usize,
    pub total: usize,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub options: Vec<String>,
    /// `number / total` as a rounded percentage.
    pub progress_percent: u8,
}

impl QuestionView {
    /// Snapshot the current question, or `None` once the quiz is finished.
    #[must_use]
    pub fn from_quiz(quiz: &Quiz) -> Option<Self> {
        let question = quiz.current_question().ok()?;
        let progress = quiz.progress();
        Some(Self {
            id: question.id(),
            number: progress.number,
            total: progress.total,
            difficulty: question.difficulty(),
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            progress_percent: progress.percent(),
        })
    }
}

/// Coarse verdict for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultVerdict {
    Outstanding,
    Great,
    NotBad,
    KeepLearning,
}

impl ResultVerdict {
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => Self::Outstanding,
            70..=89 => Self::Great,
            50..=69 => Self::NotBad,
            _ => Self::KeepLearning,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ResultVerdict::Outstanding => "Outstanding! You're a TypeScript expert!",
            ResultVerdict::Great => "Great job! You have a good understanding!",
            ResultVerdict::NotBad => "Not bad! Keep practicing!",
            ResultVerdict::KeepLearning => "Keep learning! TypeScript takes time to master.",
        }
    }
}
