//! In-memory content repository built from content packs.

use std::collections::HashMap;

use async_trait::async_trait;

use mathwiz_core::model::{Difficulty, PracticeProblem, Quiz, QuizQuestion};
use mathwiz_core::traits::ContentRepository;

use crate::pack::ContentPack;

/// Serves problems and quizzes from memory.
///
/// Unpublished quizzes are never returned by quiz lookups. Their questions
/// stay reachable by id through `quiz_question`.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    problems: HashMap<i64, PracticeProblem>,
    quizzes: HashMap<i64, Quiz>,
    questions: HashMap<i64, QuizQuestion>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from packs. On id collisions the later pack wins.
    pub fn from_packs(packs: &[ContentPack]) -> Self {
        let mut repo = Self::new();
        let mut packs = packs.iter().cloned();
        if let Some(mut merged) = packs.next() {
            for pack in packs {
                merged.merge(pack);
            }
            for problem in merged.problems {
                repo.insert_problem(problem);
            }
            for quiz in merged.quizzes {
                repo.insert_quiz(quiz);
            }
        }
        tracing::debug!(
            problems = repo.problems.len(),
            quizzes = repo.quizzes.len(),
            questions = repo.questions.len(),
            "content repository loaded"
        );
        repo
    }

    pub fn insert_problem(&mut self, problem: PracticeProblem) {
        if let Some(previous) = self.problems.insert(problem.id, problem) {
            tracing::warn!("problem {} defined more than once", previous.id);
        }
    }

    /// Insert a quiz. Its questions are sorted by `sort_order`, ties broken
    /// by id.
    pub fn insert_quiz(&mut self, mut quiz: Quiz) {
        if let Some(questions) = quiz.questions.as_mut() {
            questions.sort_by_key(|q| (q.sort_order, q.id));
            for question in questions.iter() {
                if self.questions.insert(question.id, question.clone()).is_some() {
                    tracing::warn!("question {} defined more than once", question.id);
                }
            }
        }
        let quiz_id = quiz.id;
        if self.quizzes.insert(quiz_id, quiz).is_some() {
            tracing::warn!("quiz {quiz_id} defined more than once");
        }
    }

    fn published_quiz(&self, id: i64) -> Option<&Quiz> {
        self.quizzes.get(&id).filter(|q| q.is_published)
    }
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn practice_problem(&self, id: i64) -> anyhow::Result<Option<PracticeProblem>> {
        Ok(self.problems.get(&id).cloned())
    }

    async fn quiz_with_questions(&self, id: i64) -> anyhow::Result<Option<Quiz>> {
        Ok(self.published_quiz(id).cloned())
    }

    async fn quiz_question(&self, id: i64) -> anyhow::Result<Option<QuizQuestion>> {
        Ok(self.questions.get(&id).cloned())
    }

    async fn practice_problems(
        &self,
        lesson_id: i64,
        difficulty: Option<Difficulty>,
    ) -> anyhow::Result<Vec<PracticeProblem>> {
        let mut problems: Vec<PracticeProblem> = self
            .problems
            .values()
            .filter(|p| p.lesson_id == lesson_id)
            .filter(|p| difficulty.is_none() || p.difficulty_level == difficulty)
            .cloned()
            .collect();
        problems.sort_by_key(|p| (p.sort_order, p.id));
        Ok(problems)
    }

    async fn quizzes_for_lesson(&self, lesson_id: i64) -> anyhow::Result<Vec<Quiz>> {
        let mut quizzes: Vec<Quiz> = self
            .quizzes
            .values()
            .filter(|q| q.is_published && q.lesson_id == Some(lesson_id))
            .map(|q| Quiz {
                questions: None,
                ..q.clone()
            })
            .collect();
        quizzes.sort_by_key(|q| q.id);
        Ok(quizzes)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::pack::parse_pack_str;
    use crate::pack::tests::VALID_TOML;
    use mathwiz_core::{Entity, EvalError, PracticeService, QuizScorer, Submission};

    fn repo() -> InMemoryRepository {
        let pack = parse_pack_str(VALID_TOML, &PathBuf::from("geometry.toml")).unwrap();
        InMemoryRepository::from_packs(&[pack])
    }

    #[tokio::test]
    async fn questions_come_back_sorted() {
        let mut repo = repo();
        let mut quiz = repo.quiz_with_questions(100).await.unwrap().unwrap();
        quiz.id = 200;
        if let Some(questions) = quiz.questions.as_mut() {
            questions.reverse();
            for q in questions.iter_mut() {
                q.id += 1000;
                q.quiz_id = 200;
            }
        }
        repo.insert_quiz(quiz);

        let quiz = repo.quiz_with_questions(200).await.unwrap().unwrap();
        let ids: Vec<i64> = quiz.questions.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2001, 2002, 2003]);
    }

    #[tokio::test]
    async fn unpublished_quizzes_are_hidden() {
        let mut repo = repo();
        let mut hidden = repo.quiz_with_questions(100).await.unwrap().unwrap();
        hidden.id = 300;
        hidden.is_published = false;
        if let Some(questions) = hidden.questions.as_mut() {
            questions.truncate(1);
            questions[0].id = 3001;
            questions[0].quiz_id = 300;
        }
        repo.insert_quiz(hidden);

        let question = repo.quiz_question(3001).await.unwrap().unwrap();
        assert_eq!(question.quiz_id, 300);

        assert!(repo.quiz_with_questions(300).await.unwrap().is_none());
        assert_eq!(repo.quizzes_for_lesson(10).await.unwrap().len(), 1);

        let scorer = QuizScorer::new(Arc::new(repo));
        let err = scorer
            .calculate_score(300, &Submission::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EvalError::NotFound {
                entity: Entity::Quiz,
                id: 300
            }
        ));
    }

    #[tokio::test]
    async fn later_pack_overrides_earlier() {
        let base = parse_pack_str(VALID_TOML, &PathBuf::from("geometry.toml")).unwrap();
        let mut revised = base.clone();
        revised.id = "revised".into();
        revised.problems.retain(|p| p.id == 1);
        revised.problems[0].answer = "6".into();
        if let Some(questions) = revised.quizzes[0].questions.as_mut() {
            questions.truncate(1);
        }

        let repo = InMemoryRepository::from_packs(&[base, revised]);
        let problem = repo.practice_problem(1).await.unwrap().unwrap();
        assert_eq!(problem.answer, "6");
        assert!(repo.practice_problem(2).await.unwrap().is_some());

        let quiz = repo.quiz_with_questions(100).await.unwrap().unwrap();
        assert_eq!(quiz.questions.unwrap().len(), 1);
        assert!(repo.quiz_question(1002).await.unwrap().is_none());
        assert!(InMemoryRepository::from_packs(&[])
            .quiz_with_questions(100)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn filters_problems_by_difficulty() {
        let repo = repo();
        let all = repo.practice_problems(10, None).await.unwrap();
        assert_eq!(
            all.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let beginner = repo
            .practice_problems(10, Some(Difficulty::Beginner))
            .await
            .unwrap();
        assert_eq!(beginner.len(), 2);
        assert!(repo.practice_problems(99, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lesson_quizzes_do_not_load_questions() {
        let quizzes = repo().quizzes_for_lesson(10).await.unwrap();
        assert_eq!(quizzes.len(), 1);
        assert!(quizzes[0].questions.is_none());
    }

    #[tokio::test]
    async fn scores_a_pack_quiz() {
        let scorer = QuizScorer::new(Arc::new(repo()));
        let answers: Submission = [(1002, "TRUE".to_string()), (1003, "hypotenuse".to_string())]
            .into_iter()
            .collect();
        let result = scorer.calculate_score(100, &answers).await.unwrap();
        assert_eq!(result.score, 8);
        assert_eq!(result.total_points, 10);
        assert!(result.passed);
    }

    #[tokio::test]
    async fn checks_pack_practice_problems() {
        let practice = PracticeService::new(Arc::new(repo()));
        let feedback = practice.check_answer(1, "5.0").await.unwrap();
        assert!(feedback.correct);
        assert_eq!(
            feedback.explanation.as_deref(),
            Some("The square root of 25 is 5.")
        );
        assert!(practice.check_answer(3, " Hypotenuse ").await.unwrap().correct);
        assert_eq!(
            practice.hint(1, 2).await.unwrap().as_deref(),
            Some("3² + 4² = 25")
        );
    }
}
