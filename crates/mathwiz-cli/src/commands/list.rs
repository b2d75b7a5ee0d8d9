//! The `mathwiz list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use mathwiz_core::model::Difficulty;
use mathwiz_core::traits::ContentRepository;

use super::Source;

pub async fn execute(source: &Source, lesson_id: i64, difficulty: Option<String>) -> Result<()> {
    let difficulty = difficulty
        .map(|d| d.parse::<Difficulty>().map_err(|e| anyhow::anyhow!("{}", e)))
        .transpose()?;

    let (_, repo) = source.repository()?;
    let problems = repo.practice_problems(lesson_id, difficulty).await?;
    let quizzes = repo.quizzes_for_lesson(lesson_id).await?;

    println!("Lesson {lesson_id}: {} problem(s), {} quiz(zes)", problems.len(), quizzes.len());

    if !problems.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Problem", "Type", "Difficulty", "Question"]);
        for p in &problems {
            table.add_row(vec![
                Cell::new(p.id),
                Cell::new(&p.problem_type),
                Cell::new(
                    p.difficulty_level
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into()),
                ),
                Cell::new(&p.question),
            ]);
        }
        println!("{table}");
    }

    if !quizzes.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Quiz", "Title", "Passing score"]);
        for q in &quizzes {
            table.add_row(vec![
                Cell::new(q.id),
                Cell::new(&q.title),
                Cell::new(format!("{}%", q.passing_score)),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
