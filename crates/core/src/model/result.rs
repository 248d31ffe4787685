use serde::Serialize;

/// Snapshot of a quiz outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub percentage: u8,
}

impl QuizResult {
    /// Compute a result for `correct_answers` out of `total_questions`.
    ///
    /// The percentage is rounded to the nearest integer with halves rounding
    /// up. A zero total yields 0%.
    #[must_use]
    pub fn new(total_questions: usize, correct_answers: usize) -> Self {
        Self {
            total_questions,
            correct_answers,
            percentage: rounded_percentage(correct_answers, total_questions),
        }
    }
}

/// Aggregated view of quiz progress, useful for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question on screen (`total + 1` once finished).
    pub number: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

impl QuizProgress {
    /// `number / total` as a rounded percentage, capped at 100.
    #[must_use]
    pub fn percent(&self) -> u8 {
        rounded_percentage(self.number, self.total)
    }
}

pub(crate) fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    // round(part / whole * 100) == floor((200 * part + whole) / (2 * whole))
    let pct = (part * 200 + whole) / (whole * 2);
    u8::try_from(pct).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_round_to_nearest() {
        assert_eq!(QuizResult::new(3, 1).percentage, 33);
        assert_eq!(QuizResult::new(3, 2).percentage, 67);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(QuizResult::new(8, 1).percentage, 13);
        assert_eq!(QuizResult::new(200, 1).percentage, 1);
    }

    #[test]
    fn bounds() {
        assert_eq!(QuizResult::new(4, 0).percentage, 0);
        assert_eq!(QuizResult::new(4, 4).percentage, 100);
        assert_eq!(QuizResult::new(0, 0).percentage, 0);
    }

    #[test]
    fn progress_percent_is_capped() {
        let progress = |number, total| QuizProgress {
            number,
            total,
            answered: number.saturating_sub(1),
            remaining: total.saturating_sub(number - 1),
            is_finished: number > total,
        };

        assert_eq!(progress(2, 4).percent(), 50);
        assert_eq!(progress(1, 3).percent(), 33);
        assert_eq!(progress(5, 4).percent(), 100);
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(QuizResult::new(2, 1)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"totalQuestions": 2, "correctAnswers": 1, "percentage": 50})
        );
    }
}
