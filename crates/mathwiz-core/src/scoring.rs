//! Quiz scoring.
//!
//! Each question is all-or-nothing: full points when correct, zero otherwise.
//! A question with no submitted answer scores exactly like a wrong one.

use std::collections::HashMap;
use std::sync::Arc;

use crate::compare::{compare, AnswerKind};
use crate::decode;
use crate::error::{Entity, EvalError, Result};
use crate::model::{EvaluationResult, QuestionResult, Quiz, QuizQuestion, QuizResult};
use crate::traits::ContentRepository;

/// A learner's answers keyed by question id.
pub type Submission = HashMap<i64, String>;

/// Scores quiz submissions against stored questions.
#[derive(Clone)]
pub struct QuizScorer {
    repo: Arc<dyn ContentRepository>,
}

impl QuizScorer {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    /// Score a full quiz submission.
    ///
    /// Fails with `NotFound` if the quiz doesn't exist or its questions
    /// aren't loaded; it never returns a zeroed result in that case.
    pub async fn calculate_score(&self, quiz_id: i64, answers: &Submission) -> Result<QuizResult> {
        let quiz = self
            .repo
            .quiz_with_questions(quiz_id)
            .await
            .map_err(EvalError::Repository)?
            .ok_or_else(|| EvalError::not_found(Entity::Quiz, quiz_id))?;

        score_quiz(&quiz, answers)
    }

    /// Check a single quiz question.
    pub async fn check_question(&self, question_id: i64, submitted: &str) -> Result<EvaluationResult> {
        let question = self
            .repo
            .quiz_question(question_id)
            .await
            .map_err(EvalError::Repository)?
            .ok_or_else(|| EvalError::not_found(Entity::Question, question_id))?;

        let correct = evaluate(&question, submitted);
        Ok(EvaluationResult {
            correct,
            points: if correct { question.points } else { 0 },
            explanation: if correct { question.explanation } else { None },
        })
    }
}

/// Score a quiz that has already been fetched.
///
/// `NotFound` if its questions aren't loaded.
pub fn score_quiz(quiz: &Quiz, answers: &Submission) -> Result<QuizResult> {
    let questions = quiz
        .questions
        .as_deref()
        .ok_or_else(|| EvalError::not_found(Entity::Quiz, quiz.id))?;

    let result = score_questions(questions, quiz.passing_score, answers);

    tracing::info!(
        quiz_id = quiz.id,
        score = result.score,
        total_points = result.total_points,
        percentage = result.percentage,
        passed = result.passed,
        "scored quiz submission"
    );

    Ok(result)
}

/// Score already-loaded questions. Ledger order follows `questions`.
pub fn score_questions(
    questions: &[QuizQuestion],
    passing_score: u32,
    answers: &Submission,
) -> QuizResult {
    // Summed in u64: many u32 point values can exceed u32::MAX.
    let mut score = 0u64;
    let mut total_points = 0u64;
    let mut results = Vec::with_capacity(questions.len());

    for question in questions {
        total_points += u64::from(question.points);

        let correct = answers
            .get(&question.id)
            .is_some_and(|answer| evaluate(question, answer));
        let points = if correct { question.points } else { 0 };
        score += u64::from(points);

        results.push(QuestionResult {
            question_id: question.id,
            correct,
            points,
        });
    }

    let percentage = if total_points > 0 {
        score as f64 / total_points as f64 * 100.0
    } else {
        0.0
    };

    QuizResult {
        score,
        total_points,
        percentage,
        passed: percentage >= f64::from(passing_score),
        results,
    }
}

fn evaluate(question: &QuizQuestion, submitted: &str) -> bool {
    let kind = AnswerKind::for_question(&question.question_type);
    let expected = decode::question_answer(question);
    let correct = compare(kind, &expected, submitted);
    tracing::debug!(
        question_id = question.id,
        question_type = %question.question_type,
        correct,
        "evaluated quiz question"
    );
    correct
}
