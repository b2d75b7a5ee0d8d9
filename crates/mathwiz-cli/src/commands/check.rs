//! The `mathwiz check` command.

use anyhow::Result;

use mathwiz_core::PracticeService;

use super::Source;

pub async fn execute(source: &Source, problem_id: i64, answer: &str) -> Result<()> {
    let (_, repo) = source.repository()?;
    let practice = PracticeService::new(repo);

    let feedback = practice.check_answer(problem_id, answer).await?;
    if feedback.correct {
        println!("Correct!");
        if let Some(explanation) = feedback.explanation {
            println!("{explanation}");
        }
    } else {
        println!("Try again!");
    }

    Ok(())
}
