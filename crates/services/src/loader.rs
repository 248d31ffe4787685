use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::Value;

use quiz_core::validate;
use quiz_core::Question;

use crate::error::LoadError;
use crate::source::QuestionSource;

/// Fetches, parses and validates a question set.
///
/// The quiz only ever sees what comes out of [`QuestionLoader::load`]: a
/// typed, non-empty list.
#[derive(Clone)]
pub struct QuestionLoader {
    source: Arc<dyn QuestionSource>,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &dyn QuestionSource {
        self.source.as_ref()
    }

    /// Load questions from the configured source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when retrieval fails, the payload is not JSON, the
    /// payload does not have the question shape, or it holds no questions.
    pub async fn load(&self) -> Result<Vec<Question>, LoadError> {
        let location = self.source.describe();
        debug!("fetching questions from {location}");

        let body = self.source.fetch().await?;
        let questions = parse_payload(&body)?;

        for question in questions.iter().filter(|q| !q.has_matching_option()) {
            warn!(
                "question {} has a correct answer that is not among its options",
                question.id()
            );
        }

        info!("loaded {} questions from {location}", questions.len());
        Ok(questions)
    }
}

/// Parse and validate a raw JSON payload.
///
/// # Errors
///
/// Returns `LoadError::Json`, `LoadError::Malformed` or `LoadError::NoQuestions`.
pub fn parse_payload(body: &str) -> Result<Vec<Question>, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    let questions = validate::parse_questions(value)?;

    if questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::ValidationError;

    const ONE_QUESTION: &str = r#"[{
        "id": 1,
        "question": "Which type has exactly two values?",
        "options": ["boolean", "string"],
        "correctAnswer": "boolean",
        "difficulty": "easy"
    }]"#;

    #[test]
    fn parses_valid_payload() {
        let questions = parse_payload(ONE_QUESTION).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer(), "boolean");
    }

    #[test]
    fn empty_array_means_no_questions() {
        let err = parse_payload("[]").unwrap_err();
        assert!(matches!(err, LoadError::NoQuestions));
        assert_eq!(err.to_string(), "no questions available");
    }

    #[test]
    fn non_json_is_reported() {
        assert!(matches!(parse_payload("<html>").unwrap_err(), LoadError::Json(_)));
    }

    #[test]
    fn malformed_shape_is_reported() {
        let err = parse_payload(r#"{"questions": []}"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed(ValidationError::NotAnArray)
        ));

        let err = parse_payload(r#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed(ValidationError::InvalidQuestion { index: 0 })
        ));
    }
}
