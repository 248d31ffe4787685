use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{Difficulty, QuestionId};
use crate::validate;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Deserialisation goes through [`validate::is_question`], so a `Question`
/// only ever exists for data that passed the structural checks. Fields are
/// private and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    difficulty: Difficulty,
}

/// Wire shape, only reachable after the value passed validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    id: QuestionId,
    question: String,
    options: Vec<String>,
    correct_answer: String,
    difficulty: Difficulty,
}

impl Question {
    /// Build a question from already-typed parts.
    #[must_use]
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
            difficulty,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id.clone()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the correct answer is literally one of the options.
    ///
    /// Validation does not require this; callers may use it to flag
    /// questions nobody can answer correctly.
    #[must_use]
    pub fn has_matching_option(&self) -> bool {
        self.options.iter().any(|opt| *opt == self.correct_answer)
    }
}

impl TryFrom<Value> for Question {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !validate::is_question(&value) {
            return Err(ValidationError::NotAQuestion);
        }
        let record: QuestionRecord =
            serde_json::from_value(value).map_err(ValidationError::Decode)?;
        Ok(Self {
            id: record.id,
            prompt: record.question,
            options: record.options,
            correct_answer: record.correct_answer,
            difficulty: record.difficulty,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": 7,
            "question": "Which keyword declares a constant?",
            "options": ["let", "const", "var"],
            "correctAnswer": "const",
            "difficulty": "easy"
        })
    }

    #[test]
    fn deserializes_wire_names() {
        let question: Question = serde_json::from_value(sample()).unwrap();

        assert_eq!(question.id(), QuestionId::new(7));
        assert_eq!(question.prompt(), "Which keyword declares a constant?");
        assert_eq!(question.options().len(), 3);
        assert_eq!(question.correct_answer(), "const");
        assert_eq!(question.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn deserialize_rejects_invalid_shape() {
        let mut value = sample();
        value["difficulty"] = json!("expert");

        let err = Question::try_from(value).unwrap_err();
        assert!(matches!(err, ValidationError::NotAQuestion));
        assert!(serde_json::from_str::<Question>(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let question: Question = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&question).unwrap();

        assert_eq!(value, sample());
    }

    #[test]
    fn matching_option_is_reported_not_enforced() {
        let question = Question::new(
            QuestionId::new(1),
            "2 + 2?",
            vec!["3".into(), "5".into()],
            "4",
            Difficulty::Medium,
        );

        assert!(!question.has_matching_option());
    }
}
