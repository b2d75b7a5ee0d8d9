//! Core data model types for mathwiz.
//!
//! These mirror the rows of the content store: practice problems, quizzes and
//! quiz questions, plus the result types the engine hands back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The declared type of a practice problem.
///
/// Stored values that aren't recognized are kept in `Other` rather than
/// rejected, so a bad row never stops a pack from loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProblemType {
    MultipleChoice,
    Code,
    Numeric,
    Text,
    Other(String),
}

impl ProblemType {
    /// Returns `true` if the stored value was one of the known types.
    pub fn is_known(&self) -> bool {
        !matches!(self, ProblemType::Other(_))
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemType::MultipleChoice => write!(f, "multiple_choice"),
            ProblemType::Code => write!(f, "code"),
            ProblemType::Numeric => write!(f, "numeric"),
            ProblemType::Text => write!(f, "text"),
            ProblemType::Other(other) => write!(f, "{other}"),
        }
    }
}

impl From<String> for ProblemType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "multiple_choice" => ProblemType::MultipleChoice,
            "code" => ProblemType::Code,
            "numeric" => ProblemType::Numeric,
            "text" => ProblemType::Text,
            _ => ProblemType::Other(s),
        }
    }
}

impl From<ProblemType> for String {
    fn from(t: ProblemType) -> Self {
        t.to_string()
    }
}

/// The declared type of a quiz question. Selects the comparison policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    Numeric,
    Code,
    Other(String),
}

impl QuestionType {
    pub fn is_known(&self) -> bool {
        !matches!(self, QuestionType::Other(_))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::TrueFalse => write!(f, "true_false"),
            QuestionType::Numeric => write!(f, "numeric"),
            QuestionType::Code => write!(f, "code"),
            QuestionType::Other(other) => write!(f, "{other}"),
        }
    }
}

impl From<String> for QuestionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "multiple_choice" => QuestionType::MultipleChoice,
            "true_false" => QuestionType::TrueFalse,
            "numeric" => QuestionType::Numeric,
            "code" => QuestionType::Code,
            _ => QuestionType::Other(s),
        }
    }
}

impl From<QuestionType> for String {
    fn from(t: QuestionType) -> Self {
        t.to_string()
    }
}

/// Lesson difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A single ungraded exercise attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub id: i64,
    pub lesson_id: i64,
    /// The question text shown to the learner.
    pub question: String,
    pub problem_type: ProblemType,
    /// JSON-encoded expected answer: a number, a string, or a list of strings.
    pub answer: String,
    /// JSON-encoded ordered list of hint strings.
    #[serde(default)]
    pub hints: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<Difficulty>,
    /// Never scored; practice problems are pass/fail only.
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub sort_order: i64,
}

/// A points-weighted question belonging to a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub quiz_id: i64,
    pub question: String,
    pub question_type: QuestionType,
    /// JSON-encoded list of options. Display only; never used for grading.
    #[serde(default)]
    pub options: Option<String>,
    /// For multiple choice this is the literal option text, not an index.
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub sort_order: i64,
}

/// A quiz and, once loaded, its ordered questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    #[serde(default)]
    pub lesson_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Minutes. Informational only.
    #[serde(default)]
    pub time_limit: Option<u32>,
    /// Percentage threshold (0-100). Meeting it passes.
    pub passing_score: u32,
    #[serde(default = "default_true")]
    pub is_published: bool,
    /// `None` until the question set has been loaded.
    #[serde(default)]
    pub questions: Option<Vec<QuizQuestion>>,
}

fn default_points() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// A decoded expected answer for a practice problem or quiz question.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedAnswer {
    Numeric(f64),
    Text(String),
    OneOf(Vec<String>),
}

/// The outcome of checking a single quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub correct: bool,
    pub points: u32,
    /// Only present when the answer was correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// The outcome of checking a practice problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeFeedback {
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One row of the quiz result ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: i64,
    pub correct: bool,
    pub points: u32,
}

/// Aggregate result of scoring a quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u64,
    pub total_points: u64,
    pub percentage: f64,
    pub passed: bool,
    pub results: Vec<QuestionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_keeps_unknown_values() {
        let parsed: QuestionType = serde_json::from_str("\"fill_in\"").unwrap();
        assert_eq!(parsed, QuestionType::Other("fill_in".into()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"fill_in\"");

        let known: QuestionType = serde_json::from_str("\"true_false\"").unwrap();
        assert_eq!(known, QuestionType::TrueFalse);
    }

    #[test]
    fn problem_type_display() {
        assert_eq!(ProblemType::MultipleChoice.to_string(), "multiple_choice");
        assert_eq!(ProblemType::from("text".to_string()), ProblemType::Text);
        assert!(!ProblemType::from("essay".to_string()).is_known());
    }

    #[test]
    fn difficulty_parse() {
        assert_eq!(
            "Beginner".parse::<Difficulty>().unwrap(),
            Difficulty::Beginner
        );
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn quiz_result_uses_camel_case_keys() {
        let result = QuizResult {
            score: 3,
            total_points: 5,
            percentage: 60.0,
            passed: true,
            results: vec![QuestionResult {
                question_id: 7,
                correct: true,
                points: 3,
            }],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalPoints"], 5);
        assert_eq!(json["results"][0]["questionId"], 7);
    }

    #[test]
    fn feedback_omits_missing_explanation() {
        let feedback = PracticeFeedback {
            correct: false,
            explanation: None,
        };
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(json, r#"{"correct":false}"#);
    }
}
