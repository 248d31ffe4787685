use std::fmt;

use crate::error::QuizError;
use crate::model::{Question, QuizProgress, QuizResult};

/// Where a quiz is in its single forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress,
    Finished,
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// One play-through over a fixed, non-empty list of questions.
///
/// Steps through the questions in order. [`Quiz::check_answer`] is the only
/// mutation: it scores the current question and moves to the next one. Once
/// every question has been answered the quiz is finished for good; play again
/// with a new `Quiz`.
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: usize,
}

impl Quiz {
    /// Create a quiz positioned on the first question with a zero score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            questions,
            current: 0,
            score: 0,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.current >= self.questions.len() {
            QuizState::Finished
        } else {
            QuizState::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state() == QuizState::Finished
    }

    /// The question awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` once all questions have been answered.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.questions.get(self.current).ok_or(QuizError::Finished)
    }

    /// Correct answer of the current question, readable before
    /// [`Quiz::check_answer`] moves past it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` once all questions have been answered.
    pub fn current_correct_answer(&self) -> Result<&str, QuizError> {
        self.current_question().map(Question::correct_answer)
    }

    /// Score `selected` against the current question and advance.
    ///
    /// Comparison is exact: case-sensitive, no trimming. The position advances
    /// whether or not the answer was right.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if the quiz is already finished.
    pub fn check_answer(&mut self, selected: &str) -> Result<bool, QuizError> {
        let is_correct = self.current_correct_answer()? == selected;
        if is_correct {
            self.score += 1;
        }
        self.current += 1;
        Ok(is_correct)
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// 1-based number of the current question.
    ///
    /// Returns `total_questions() + 1` once finished, which means "no current
    /// question".
    #[must_use]
    pub fn current_question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Snapshot of the score so far; valid in either state.
    #[must_use]
    pub fn result(&self) -> QuizResult {
        QuizResult::new(self.questions.len(), self.score)
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.total_questions();
        let answered = self.current.min(total);
        QuizProgress {
            number: self.current_question_number(),
            total,
            answered,
            remaining: total - answered,
            is_finished: self.is_finished(),
        }
    }
}

impl fmt::Debug for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quiz")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
