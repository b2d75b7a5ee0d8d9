//! The `mathwiz validate` command.

use anyhow::Result;

use mathwiz_content::validate::validate_pack;

use super::Source;

pub fn execute(source: &Source) -> Result<()> {
    let (_, packs) = source.packs()?;

    let mut total_warnings = 0;

    for pack in &packs {
        let questions: usize = pack
            .quizzes
            .iter()
            .map(|q| q.questions.as_ref().map_or(0, Vec::len))
            .sum();
        println!(
            "Content pack: {} ({} problems, {} quizzes, {} questions)",
            pack.name,
            pack.problems.len(),
            pack.quizzes.len(),
            questions
        );

        let warnings = validate_pack(pack);
        for w in &warnings {
            println!("  [{}] WARNING: {}", w.subject, w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All content packs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
