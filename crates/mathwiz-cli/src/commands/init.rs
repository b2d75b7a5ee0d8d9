//! The `mathwiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathwiz.toml").exists() {
        println!("mathwiz.toml already exists, skipping.");
    } else {
        std::fs::write("mathwiz.toml", SAMPLE_CONFIG)?;
        println!("Created mathwiz.toml");
    }

    std::fs::create_dir_all("content")?;
    let example_path = std::path::Path::new("content/example.toml");
    if example_path.exists() {
        println!("content/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_PACK)?;
        println!("Created content/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: mathwiz validate");
    println!("  2. Run: mathwiz check --problem 1 --answer 42");
    println!("  3. Run: mathwiz hint --problem 1 --level 1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathwiz configuration

content_path = "./content"
output_dir = "./mathwiz-results"
default_format = "text"
"#;

const EXAMPLE_PACK: &str = r#"[pack]
id = "example"
name = "Example Lessons"
description = "A small content pack to get started"

[[problems]]
id = 1
lesson_id = 1
question = "What is 6 × 7?"
problem_type = "numeric"
answer = "42"
hints = '["Six groups of seven.", "7 + 7 + 7 + 7 + 7 + 7"]'
explanation = "6 × 7 = 42."
difficulty = "beginner"
sort_order = 1

[[problems]]
id = 2
lesson_id = 1
question = "How many degrees are in a right angle?"
problem_type = "multiple_choice"
answer = '["90", "ninety"]'
difficulty = "beginner"
sort_order = 2

[[quizzes]]
id = 1
lesson_id = 1
title = "Multiplication check"
passing_score = 60

[[quizzes.questions]]
id = 1
question = "What is 3 × 4?"
question_type = "numeric"
correct_answer = "12"
points = 2
sort_order = 1

[[quizzes.questions]]
id = 2
question = "Multiplying by zero always gives zero."
question_type = "true_false"
correct_answer = "true"
points = 1
sort_order = 2
"#;
