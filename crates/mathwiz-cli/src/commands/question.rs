//! The `mathwiz question` command.

use anyhow::Result;

use mathwiz_core::QuizScorer;

use super::Source;

pub async fn execute(source: &Source, question_id: i64, answer: &str) -> Result<()> {
    let (_, repo) = source.repository()?;
    let scorer = QuizScorer::new(repo);

    let result = scorer.check_question(question_id, answer).await?;
    if result.correct {
        println!("Correct! (+{} points)", result.points);
        if let Some(explanation) = result.explanation {
            println!("{explanation}");
        }
    } else {
        println!("Incorrect (0 points)");
    }

    Ok(())
}
