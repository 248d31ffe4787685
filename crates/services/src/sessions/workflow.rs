use log::debug;

use quiz_core::Quiz;

use super::feedback::AnswerFeedback;
use crate::error::QuizServiceError;
use crate::loader::QuestionLoader;

/// Result of answering a single question in a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub feedback: AnswerFeedback,
    pub is_finished: bool,
}

/// Orchestrates quiz start and answering.
#[derive(Clone)]
pub struct QuizLoopService {
    loader: QuestionLoader,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(loader: QuestionLoader) -> Self {
        Self { loader }
    }

    /// Load questions and start a new quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Load` when questions cannot be loaded.
    pub async fn start_quiz(&self) -> Result<Quiz, QuizServiceError> {
        let questions = self.loader.load().await?;
        Ok(Quiz::new(questions)?)
    }

    /// Answer the current question and report what to highlight.
    ///
    /// The correct answer and options are read before the quiz advances.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the quiz is already finished.
    pub fn answer_current(
        &self,
        quiz: &mut Quiz,
        selected: &str,
    ) -> Result<AnswerOutcome, QuizServiceError> {
        let question = quiz.current_question()?;
        let question_id = question.id();
        let options = question.options().to_vec();
        let correct_answer = quiz.current_correct_answer()?.to_owned();

        let is_correct = quiz.check_answer(selected)?;
        debug!(
            "question {question_id} answered ({}), score {}/{}",
            if is_correct { "correct" } else { "wrong" },
            quiz.score(),
            quiz.total_questions()
        );

        Ok(AnswerOutcome {
            feedback: AnswerFeedback::new(
                question_id,
                &options,
                selected,
                &correct_answer,
                is_correct,
            ),
            is_finished: quiz.is_finished(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::sessions::OptionMark;
    use crate::source::StaticSource;
    use quiz_core::QuizError;

    const PAYLOAD: &str = r#"[
        {"id": 1, "question": "Q1", "options": ["A", "B"], "correctAnswer": "A", "difficulty": "easy"},
        {"id": 2, "question": "Q2", "options": ["A", "B"], "correctAnswer": "B", "difficulty": "hard"}
    ]"#;

    fn service(body: &str) -> QuizLoopService {
        QuizLoopService::new(QuestionLoader::new(Arc::new(StaticSource::new(body))))
    }

    #[tokio::test]
    async fn answers_flow_through_to_result() {
        let svc = service(PAYLOAD);
        let mut quiz = svc.start_quiz().await.unwrap();

        let first = svc.answer_current(&mut quiz, "A").unwrap();
        assert!(first.feedback.is_correct);
        assert!(!first.is_finished);

        let second = svc.answer_current(&mut quiz, "A").unwrap();
        assert!(!second.feedback.is_correct);
        assert_eq!(second.feedback.correct_answer, "B");
        assert_eq!(
            second.feedback.marks,
            vec![OptionMark::Incorrect, OptionMark::Correct]
        );
        assert!(second.is_finished);

        assert_eq!(quiz.result().percentage, 50);
    }

    #[tokio::test]
    async fn answering_finished_quiz_fails() {
        let svc = service(PAYLOAD);
        let mut quiz = svc.start_quiz().await.unwrap();
        svc.answer_current(&mut quiz, "A").unwrap();
        svc.answer_current(&mut quiz, "B").unwrap();

        let err = svc.answer_current(&mut quiz, "B").unwrap_err();
        assert!(matches!(err, QuizServiceError::Quiz(QuizError::Finished)));
    }

    #[tokio::test]
    async fn empty_payload_never_starts_a_quiz() {
        let err = service("[]").start_quiz().await.unwrap_err();
        assert!(matches!(
            err,
            QuizServiceError::Load(crate::error::LoadError::NoQuestions)
        ));
    }
}
