//! Content pack validation.
//!
//! Catches data problems that would otherwise only show up when a learner
//! submits an answer.

use std::collections::HashSet;

use mathwiz_core::decode;
use mathwiz_core::model::{ExpectedAnswer, ProblemType, QuestionType};

use crate::pack::ContentPack;

/// What a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Problem(i64),
    Quiz(i64),
    Question(i64),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Problem(id) => write!(f, "problem {id}"),
            Subject::Quiz(id) => write!(f, "quiz {id}"),
            Subject::Question(id) => write!(f, "question {id}"),
        }
    }
}

/// A warning from content pack validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub subject: Subject,
    pub message: String,
}

/// Validate a content pack for common issues.
pub fn validate_pack(pack: &ContentPack) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |subject: Subject, message: String| {
        warnings.push(ValidationWarning { subject, message });
    };

    let mut seen_problems = HashSet::new();
    for problem in &pack.problems {
        let subject = Subject::Problem(problem.id);
        if !seen_problems.insert(problem.id) {
            warn(subject, format!("duplicate problem ID: {}", problem.id));
        }
        if !problem.problem_type.is_known() {
            warn(
                subject,
                format!("unrecognized problem_type: {}", problem.problem_type),
            );
        }
        match decode::expected_answer(problem) {
            Ok(ExpectedAnswer::Numeric(_)) => {}
            Ok(_) if problem.problem_type == ProblemType::Numeric => warn(
                subject,
                "numeric problem answer is not a number; it will be compared as text".into(),
            ),
            Ok(_) => {}
            Err(e) => warn(subject, e.to_string()),
        }
        if let Err(e) = decode::hints(problem) {
            warn(subject, e.to_string());
        }
        if problem.question.trim().is_empty() {
            warn(subject, "question is empty".into());
        }
    }

    let mut seen_quizzes = HashSet::new();
    let mut seen_questions = HashSet::new();
    for quiz in &pack.quizzes {
        let subject = Subject::Quiz(quiz.id);
        if !seen_quizzes.insert(quiz.id) {
            warn(subject, format!("duplicate quiz ID: {}", quiz.id));
        }
        if quiz.passing_score > 100 {
            warn(
                subject,
                format!("passing_score {} is above 100; nobody can pass", quiz.passing_score),
            );
        }

        let questions = quiz.questions.as_deref().unwrap_or_default();
        if questions.is_empty() && quiz.is_published {
            warn(subject, "published quiz has no questions".into());
        }

        for question in questions {
            let subject = Subject::Question(question.id);
            if !seen_questions.insert(question.id) {
                warn(subject, format!("duplicate question ID: {}", question.id));
            }
            if !question.question_type.is_known() {
                warn(
                    subject,
                    format!(
                        "unrecognized question_type: {}; answers will never be correct",
                        question.question_type
                    ),
                );
            }
            if question.points == 0 {
                warn(subject, "question is worth 0 points".into());
            }
            if question.question_type == QuestionType::Numeric
                && decode::parse_number(&question.correct_answer).is_nan()
            {
                warn(
                    subject,
                    format!(
                        "numeric correct_answer is not a number: {:?}",
                        question.correct_answer
                    ),
                );
            }
            match decode::options(question) {
                Ok(options) => {
                    if question.question_type == QuestionType::MultipleChoice
                        && !options.is_empty()
                        && !options.iter().any(|o| {
                            o.trim().to_lowercase()
                                == question.correct_answer.trim().to_lowercase()
                        })
                    {
                        warn(subject, "correct_answer is not one of the options".into());
                    }
                }
                Err(e) => warn(subject, e.to_string()),
            }
        }
    }

    warnings
}
