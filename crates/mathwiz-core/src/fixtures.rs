//! In-crate fixture repository for unit tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::model::{Difficulty, PracticeProblem, ProblemType, QuestionType, Quiz, QuizQuestion};
use crate::traits::ContentRepository;

#[derive(Default)]
pub struct FixtureRepository {
    pub problems: HashMap<i64, PracticeProblem>,
    pub quizzes: HashMap<i64, Quiz>,
    pub questions: HashMap<i64, QuizQuestion>,
}

impl FixtureRepository {
    pub fn with_problem(mut self, problem: PracticeProblem) -> Self {
        self.problems.insert(problem.id, problem);
        self
    }

    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        for q in quiz.questions.iter().flatten() {
            self.questions.insert(q.id, q.clone());
        }
        self.quizzes.insert(quiz.id, quiz);
        self
    }
}

#[async_trait]
impl ContentRepository for FixtureRepository {
    async fn practice_problem(&self, id: i64) -> anyhow::Result<Option<PracticeProblem>> {
        Ok(self.problems.get(&id).cloned())
    }

    async fn quiz_with_questions(&self, id: i64) -> anyhow::Result<Option<Quiz>> {
        Ok(self.quizzes.get(&id).cloned())
    }

    async fn quiz_question(&self, id: i64) -> anyhow::Result<Option<QuizQuestion>> {
        Ok(self.questions.get(&id).cloned())
    }

    async fn practice_problems(
        &self,
        lesson_id: i64,
        difficulty: Option<Difficulty>,
    ) -> anyhow::Result<Vec<PracticeProblem>> {
        Ok(self
            .problems
            .values()
            .filter(|p| p.lesson_id == lesson_id)
            .filter(|p| difficulty.is_none() || p.difficulty_level == difficulty)
            .cloned()
            .collect())
    }

    async fn quizzes_for_lesson(&self, lesson_id: i64) -> anyhow::Result<Vec<Quiz>> {
        Ok(self
            .quizzes
            .values()
            .filter(|q| q.lesson_id == Some(lesson_id))
            .cloned()
            .collect())
    }
}

pub fn problem(id: i64, problem_type: ProblemType, answer: &str) -> PracticeProblem {
    PracticeProblem {
        id,
        lesson_id: 1,
        question: format!("Problem {id}"),
        problem_type,
        answer: answer.into(),
        hints: None,
        explanation: None,
        difficulty_level: None,
        points: 1,
        sort_order: id,
    }
}

pub fn question(id: i64, question_type: QuestionType, correct: &str, points: u32) -> QuizQuestion {
    QuizQuestion {
        id,
        quiz_id: 0,
        question: format!("Question {id}"),
        question_type,
        options: None,
        correct_answer: correct.into(),
        explanation: None,
        points,
        sort_order: id,
    }
}

pub fn quiz(id: i64, passing_score: u32, mut questions: Vec<QuizQuestion>) -> Quiz {
    for q in &mut questions {
        q.quiz_id = id;
    }
    Quiz {
        id,
        lesson_id: Some(1),
        title: format!("Quiz {id}"),
        description: None,
        time_limit: None,
        passing_score,
        is_published: true,
        questions: Some(questions),
    }
}
