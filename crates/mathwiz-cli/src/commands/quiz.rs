//! The `mathwiz quiz` command.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Table};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mathwiz_core::model::QuizResult;
use mathwiz_core::scoring::score_quiz;
use mathwiz_core::traits::ContentRepository;
use mathwiz_core::{Entity, EvalError, Submission};

use super::Source;

/// A saved quiz scoring report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub quiz_id: i64,
    pub quiz_title: String,
    pub result: QuizResult,
}

impl QuizReport {
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}

pub async fn execute(
    source: &Source,
    quiz_id: i64,
    answers_path: PathBuf,
    format: Option<String>,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let (config, repo) = source.repository()?;
    let format = format.unwrap_or_else(|| config.default_format.clone());
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: {format} (expected text or json)"
    );

    let answers = read_answers(&answers_path)?;
    let quiz = repo
        .quiz_with_questions(quiz_id)
        .await?
        .ok_or_else(|| EvalError::not_found(Entity::Quiz, quiz_id))?;
    let result = score_quiz(&quiz, &answers)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    if output.is_some() || save {
        let report = QuizReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz_id,
            quiz_title: quiz.title,
            result,
        };
        let path = output.unwrap_or_else(|| {
            config
                .output_dir
                .join(format!("quiz-{quiz_id}-{}.json", report.id))
        });
        report.save_json(&path)?;
        eprintln!("Report saved to {}", path.display());
    }

    Ok(())
}

/// Read a JSON object of `{"<question id>": "<answer>"}`. Numeric answers
/// are accepted and kept in their textual form.
fn read_answers(path: &Path) -> Result<Submission> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers: {}", path.display()))?
    };

    let raw: HashMap<String, serde_json::Value> =
        serde_json::from_str(&content).context("answers must be a JSON object")?;

    raw.into_iter()
        .map(|(key, value)| -> Result<(i64, String)> {
            let id = key
                .trim()
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("invalid question id: '{key}'"))?;
            let answer = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => anyhow::bail!("unsupported answer for question {id}: {other}"),
            };
            Ok((id, answer))
        })
        .collect()
}

fn print_result(result: &QuizResult) {
    let mut table = Table::new();
    table.set_header(vec!["Question", "Result", "Points"]);

    for entry in &result.results {
        table.add_row(vec![
            Cell::new(entry.question_id),
            Cell::new(if entry.correct { "correct" } else { "incorrect" }),
            Cell::new(entry.points),
        ]);
    }

    println!("{table}");
    println!(
        "Score: {}/{} ({:.1}%) {}",
        result.score,
        result.total_points,
        result.percentage,
        if result.passed { "PASSED" } else { "FAILED" }
    );
}
