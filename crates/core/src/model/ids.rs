use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Lower bound of `i64` as an exactly representable `f64` (-2^63).
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
/// Upper bound (exclusive) of `i64` as an exactly representable `f64` (2^63).
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Identifier carried by a question payload.
///
/// Any JSON number with no fractional part is an id: `1`, `1.0`, `1e2` and
/// integers beyond `i64` all qualify. Float spellings of values that fit an
/// `i64` are normalised, so `1.0` and `1` are the same id. Uniqueness is not
/// enforced; two questions may share an id.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Number);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(Number::from(id))
    }

    /// Interpret a JSON number as an id, or `None` if it has a fractional part.
    #[must_use]
    pub fn from_number(number: &Number) -> Option<Self> {
        if number.is_i64() || number.is_u64() {
            return Some(Self(number.clone()));
        }

        let value = number.as_f64()?;
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if (I64_MIN_F64..I64_END_F64).contains(&value) {
            #[allow(clippy::cast_possible_truncation)]
            return Some(Self::new(value as i64));
        }
        Some(Self(number.clone()))
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = Number::deserialize(deserializer)?;
        Self::from_number(&number)
            .ok_or_else(|| de::Error::custom(format!("question id must be a whole number, got {number}")))
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
