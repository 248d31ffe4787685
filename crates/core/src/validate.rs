//! Structural checks for untyped question payloads.
//!
//! The predicates never fail; they classify. [`parse_questions`] turns a
//! negative classification into a [`ValidationError`].

use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{Difficulty, Question, QuestionId};

/// True iff `value` is a string equal to one of the difficulty labels.
#[must_use]
pub fn is_difficulty(value: &Value) -> bool {
    value.as_str().and_then(Difficulty::from_label).is_some()
}

/// True iff `value` is an object with the question fields and types.
///
/// `id` may be any JSON number without a fractional part (`1`, `1.0`,
/// `1e2`). Unknown keys are ignored. Option membership of `correctAnswer`,
/// empty `options` and duplicate ids are not checked.
#[must_use]
pub fn is_question(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    let id_ok = matches!(
        obj.get("id"),
        Some(Value::Number(id)) if QuestionId::from_number(id).is_some()
    );
    let prompt_ok = obj.get("question").is_some_and(Value::is_string);
    let options_ok = obj
        .get("options")
        .and_then(Value::as_array)
        .is_some_and(|opts| opts.iter().all(Value::is_string));
    let answer_ok = obj.get("correctAnswer").is_some_and(Value::is_string);
    let difficulty_ok = obj.get("difficulty").is_some_and(is_difficulty);

    id_ok && prompt_ok && options_ok && answer_ok && difficulty_ok
}

/// True iff `value` is an array whose every element passes [`is_question`].
///
/// An empty array passes.
#[must_use]
pub fn is_question_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(is_question))
}

/// Index of the first element failing [`is_question`], if any.
#[must_use]
pub fn first_invalid_index(value: &Value) -> Option<usize> {
    value
        .as_array()?
        .iter()
        .position(|item| !is_question(item))
}

/// Validate and convert a parsed payload into typed questions.
///
/// Emptiness is accepted here; rejecting it is up to the caller.
///
/// # Errors
///
/// Returns `ValidationError::NotAnArray` when the payload is not an array and
/// `ValidationError::InvalidQuestion` naming the first malformed element.
pub fn parse_questions(value: Value) -> Result<Vec<Question>, ValidationError> {
    if !value.is_array() {
        return Err(ValidationError::NotAnArray);
    }
    if let Some(index) = first_invalid_index(&value) {
        return Err(ValidationError::InvalidQuestion { index });
    }

    serde_json::from_value(value).map_err(ValidationError::Decode)
}
