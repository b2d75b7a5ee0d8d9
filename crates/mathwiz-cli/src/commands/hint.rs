//! The `mathwiz hint` command.

use anyhow::Result;

use mathwiz_core::PracticeService;

use super::Source;

pub async fn execute(source: &Source, problem_id: i64, level: u32) -> Result<()> {
    let (_, repo) = source.repository()?;
    let practice = PracticeService::new(repo);

    match practice.hint(problem_id, level).await? {
        Some(hint) => println!("Hint {level}: {hint}"),
        None => println!("No more hints available."),
    }

    Ok(())
}
