//! Practice problem answer checking and hints.

use std::sync::Arc;

use crate::compare::{compare, AnswerKind};
use crate::decode;
use crate::error::{Entity, EvalError, Result};
use crate::hints::reveal;
use crate::model::PracticeFeedback;
use crate::traits::ContentRepository;

/// Checks learner answers to practice problems.
#[derive(Clone)]
pub struct PracticeService {
    repo: Arc<dyn ContentRepository>,
}

impl PracticeService {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    /// Check a submitted answer. The explanation is only revealed when the
    /// answer is correct.
    pub async fn check_answer(&self, problem_id: i64, submitted: &str) -> Result<PracticeFeedback> {
        let problem = self
            .repo
            .practice_problem(problem_id)
            .await
            .map_err(EvalError::Repository)?
            .ok_or_else(|| EvalError::not_found(Entity::Problem, problem_id))?;

        let expected = decode::expected_answer(&problem)?;
        let kind = AnswerKind::for_practice(&expected);
        let correct = compare(kind, &expected, submitted);

        tracing::debug!(
            problem_id,
            problem_type = %problem.problem_type,
            ?kind,
            correct,
            "checked practice answer"
        );

        Ok(PracticeFeedback {
            correct,
            explanation: if correct { problem.explanation } else { None },
        })
    }

    /// Fetch the hint at a 1-based `level`.
    ///
    /// An unknown problem, a problem without hints, and a level past the last
    /// hint all yield `None`.
    pub async fn hint(&self, problem_id: i64, level: u32) -> Result<Option<String>> {
        let Some(problem) = self
            .repo
            .practice_problem(problem_id)
            .await
            .map_err(EvalError::Repository)?
        else {
            return Ok(None);
        };

        let hints = decode::hints(&problem)?;
        Ok(reveal(&hints, level).map(str::to_owned))
    }
}
