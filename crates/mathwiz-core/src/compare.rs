//! Answer comparison policies.
//!
//! Every comparison returns a verdict. Unknown kinds and kind/answer pairs
//! that don't fit together are incorrect, never an error.

use crate::decode::parse_number;
use crate::model::{ExpectedAnswer, QuestionType};

/// Numeric answers within this distance of the expected value are correct.
pub const NUMERIC_TOLERANCE: f64 = 0.001;

/// Which comparison policy applies to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// Float equality within [`NUMERIC_TOLERANCE`].
    Numeric,
    /// Trimmed, case-insensitive.
    Text,
    /// Trimmed, case-sensitive.
    Exact,
    /// Trimmed, case-insensitive `true` / `false`.
    TrueFalse,
    /// Matches the single correct option, or any entry of a list.
    Choice,
    /// A stored type nothing knows how to grade.
    Unsupported,
}

impl AnswerKind {
    /// The policy for a quiz question, taken from its own type.
    pub fn for_question(question_type: &QuestionType) -> Self {
        match question_type {
            QuestionType::MultipleChoice => AnswerKind::Choice,
            QuestionType::TrueFalse => AnswerKind::TrueFalse,
            QuestionType::Numeric => AnswerKind::Numeric,
            QuestionType::Code => AnswerKind::Exact,
            QuestionType::Other(_) => AnswerKind::Unsupported,
        }
    }

    /// The policy for a practice problem, taken from the decoded payload.
    ///
    /// A string payload always compares as `Text`, so practice `code`
    /// answers are case-insensitive.
    pub fn for_practice(expected: &ExpectedAnswer) -> Self {
        match expected {
            ExpectedAnswer::Numeric(_) => AnswerKind::Numeric,
            ExpectedAnswer::Text(_) => AnswerKind::Text,
            ExpectedAnswer::OneOf(_) => AnswerKind::Choice,
        }
    }
}

/// Decide whether `submitted` is correct for `expected` under `kind`.
pub fn compare(kind: AnswerKind, expected: &ExpectedAnswer, submitted: &str) -> bool {
    match (kind, expected) {
        (AnswerKind::Numeric, ExpectedAnswer::Numeric(value)) => {
            // NaN on either side fails the comparison.
            (parse_number(submitted) - value).abs() < NUMERIC_TOLERANCE
        }
        (AnswerKind::Text | AnswerKind::TrueFalse | AnswerKind::Choice, ExpectedAnswer::Text(s)) => {
            eq_ignore_case(s, submitted)
        }
        (AnswerKind::Exact, ExpectedAnswer::Text(s)) => s.trim() == submitted.trim(),
        (AnswerKind::Choice, ExpectedAnswer::OneOf(choices)) => {
            choices.iter().any(|choice| eq_ignore_case(choice, submitted))
        }
        // Unsupported kinds, and kinds paired with a shape they can't judge.
        _ => false,
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
