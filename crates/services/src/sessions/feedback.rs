use quiz_core::QuestionId;

/// How an option should be highlighted after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
    Neutral,
}

/// Outcome of answering one question, captured before the quiz advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_id: QuestionId,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
    /// One mark per option, in option order.
    pub marks: Vec<OptionMark>,
}

impl AnswerFeedback {
    #[must_use]
    pub fn new(
        question_id: QuestionId,
        options: &[String],
        selected: &str,
        correct_answer: &str,
        is_correct: bool,
    ) -> Self {
        let marks = options
            .iter()
            .map(|option| {
                if option == correct_answer {
                    OptionMark::Correct
                } else if option == selected && !is_correct {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Neutral
                }
            })
            .collect();

        Self {
            question_id,
            selected: selected.to_owned(),
            correct_answer: correct_answer.to_owned(),
            is_correct,
            marks,
        }
    }
}
