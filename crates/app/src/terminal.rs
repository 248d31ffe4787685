//! Plain-text rendering of quiz screens.
//!
//! Every function returns a `String`; printing and input live in `main`.

use std::fmt::Write as _;

use quiz_core::{Difficulty, QuizResult};
use services::{AnswerFeedback, OptionMark, QuestionView, ResultVerdict};

const TITLE: &str = "TypeScript Quiz";
const BAR_WIDTH: usize = 20;

/// ANSI styling switch; off when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_owned()
        }
    }
}

#[must_use]
pub fn difficulty_badge(difficulty: Difficulty, style: Style) -> String {
    let code = match difficulty {
        Difficulty::Easy => "32",
        Difficulty::Medium => "33",
        Difficulty::Hard => "31",
    };
    style.paint(code, &format!("[{difficulty}]"))
}

#[must_use]
pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[must_use]
pub fn render_loading() -> String {
    "Loading questions...".into()
}

#[must_use]
pub fn render_question(view: &QuestionView, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(
        out,
        "Question {} of {} {}",
        view.number,
        view.total,
        progress_bar(view.progress_percent)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Difficulty: {}", difficulty_badge(view.difficulty, style));
    let _ = writeln!(out, "{}", view.prompt);
    let _ = writeln!(out);
    for (index, option) in view.options.iter().enumerate() {
        let _ = writeln!(out, "  {}) {option}", index + 1);
    }
    if view.options.is_empty() {
        let _ = writeln!(out, "  (no options listed)");
    }
    out
}

#[must_use]
pub fn render_feedback(view: &QuestionView, feedback: &AnswerFeedback, style: Style) -> String {
    let mut out = String::new();
    for (index, (option, mark)) in view.options.iter().zip(&feedback.marks).enumerate() {
        let line = format!("  {}) {option}", index + 1);
        let line = match mark {
            OptionMark::Correct => style.paint("32", &format!("{line}  <- correct")),
            OptionMark::Incorrect => style.paint("31", &format!("{line}  <- your answer")),
            OptionMark::Neutral => line,
        };
        let _ = writeln!(out, "{line}");
    }
    let verdict = if feedback.is_correct {
        style.paint("32", "Correct!")
    } else {
        style.paint("31", &format!("Wrong. The answer is: {}", feedback.correct_answer))
    };
    let _ = writeln!(out, "{verdict}");
    out
}

#[must_use]
pub fn render_result(result: &QuizResult) -> String {
    let verdict = ResultVerdict::from_percentage(result.percentage);
    let mut out = String::new();
    let _ = writeln!(out, "Quiz Completed!");
    let _ = writeln!(out, "  Total Questions: {}", result.total_questions);
    let _ = writeln!(out, "  Correct Answers: {}", result.correct_answers);
    let _ = writeln!(out, "  Percentage:      {}%", result.percentage);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", verdict.message());
    out
}

#[must_use]
pub fn render_error(message: &str, style: Style) -> String {
    format!("{} {message}\n", style.paint("31", "Error:"))
}

/// Map a line of input to one of `options`.
///
/// Accepts a 1-based option number or the exact option text (surrounding
/// whitespace ignored). With no options, any non-blank text is taken as the
/// answer. Returns `None` when nothing matches.
#[must_use]
pub fn parse_selection<'a>(input: &'a str, options: &'a [String]) -> Option<&'a str> {
    let input = input.trim();
    if options.is_empty() {
        return (!input.is_empty()).then_some(input);
    }
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| options.get(index))
            .map(String::as_str);
    }
    options
        .iter()
        .find(|option| option.as_str() == input)
        .map(String::as_str)
}

/// Re-prompt text after `parse_selection` rejected a line.
#[must_use]
pub fn selection_hint(options: &[String]) -> String {
    match options.len() {
        0 => "Type your answer.".to_owned(),
        1 => "Enter 1 or the option text.".to_owned(),
        n => format!("Enter an option number between 1 and {n}, or the option text."),
    }
}

/// Interpret a yes/no answer; anything other than y/yes is no.
#[must_use]
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
