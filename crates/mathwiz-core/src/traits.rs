//! The content store seam.
//!
//! The engine only ever reads. Implementations live outside this crate
//! (see `mathwiz-content` for the in-memory pack-backed one).

use async_trait::async_trait;

use crate::model::{Difficulty, PracticeProblem, Quiz, QuizQuestion};

/// Read-only access to lesson content.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Look up a practice problem by id.
    async fn practice_problem(&self, id: i64) -> anyhow::Result<Option<PracticeProblem>>;

    /// Look up a published quiz with its questions loaded, in `sort_order`.
    async fn quiz_with_questions(&self, id: i64) -> anyhow::Result<Option<Quiz>>;

    /// Look up a single quiz question by id.
    async fn quiz_question(&self, id: i64) -> anyhow::Result<Option<QuizQuestion>>;

    /// Practice problems for a lesson in `sort_order`, optionally filtered
    /// by difficulty.
    async fn practice_problems(
        &self,
        lesson_id: i64,
        difficulty: Option<Difficulty>,
    ) -> anyhow::Result<Vec<PracticeProblem>>;

    /// Published quizzes attached to a lesson. Questions are not loaded.
    async fn quizzes_for_lesson(&self, lesson_id: i64) -> anyhow::Result<Vec<Quiz>>;
}
