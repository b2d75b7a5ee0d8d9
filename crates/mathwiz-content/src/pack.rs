//! TOML content pack parser.
//!
//! A content pack holds problems, quizzes and quiz questions as the content
//! store keeps them, JSON text columns included.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use mathwiz_core::model::{Difficulty, PracticeProblem, ProblemType, QuestionType, Quiz, QuizQuestion};

/// A parsed content pack.
#[derive(Debug, Clone)]
pub struct ContentPack {
    pub id: String,
    pub name: String,
    pub description: String,
    pub problems: Vec<PracticeProblem>,
    /// Quizzes with their questions loaded.
    pub quizzes: Vec<Quiz>,
}

impl ContentPack {
    /// Fold `other` into this pack. A problem or quiz in `other` replaces
    /// one with the same id here, keeping its position; new ids are appended.
    /// A replaced quiz takes its whole question set with it.
    pub fn merge(&mut self, other: ContentPack) {
        for problem in other.problems {
            match self.problems.iter_mut().find(|p| p.id == problem.id) {
                Some(existing) => {
                    tracing::debug!(problem = problem.id, pack = %other.id, "problem overridden");
                    *existing = problem;
                }
                None => self.problems.push(problem),
            }
        }
        for quiz in other.quizzes {
            match self.quizzes.iter_mut().find(|q| q.id == quiz.id) {
                Some(existing) => {
                    tracing::debug!(quiz = quiz.id, pack = %other.id, "quiz overridden");
                    *existing = quiz;
                }
                None => self.quizzes.push(quiz),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlPackFile {
    pack: TomlPackHeader,
    #[serde(default)]
    problems: Vec<TomlProblem>,
    #[serde(default)]
    quizzes: Vec<TomlQuiz>,
}

#[derive(Debug, Deserialize)]
struct TomlPackHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlProblem {
    id: i64,
    lesson_id: i64,
    question: String,
    problem_type: String,
    answer: String,
    #[serde(default)]
    hints: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default = "default_points")]
    points: u32,
    #[serde(default)]
    sort_order: i64,
}

#[derive(Debug, Deserialize)]
struct TomlQuiz {
    id: i64,
    #[serde(default)]
    lesson_id: Option<i64>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    time_limit: Option<u32>,
    #[serde(default = "default_passing_score")]
    passing_score: u32,
    #[serde(default = "default_true")]
    is_published: bool,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: i64,
    question: String,
    question_type: String,
    correct_answer: String,
    #[serde(default)]
    options: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default = "default_points")]
    points: u32,
    #[serde(default)]
    sort_order: i64,
}

fn default_points() -> u32 {
    1
}

fn default_passing_score() -> u32 {
    70
}

fn default_true() -> bool {
    true
}

/// Parse a single TOML file into a `ContentPack`.
pub fn parse_pack(path: &Path) -> Result<ContentPack> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content pack: {}", path.display()))?;

    parse_pack_str(&content, path)
}

/// Parse a TOML string into a `ContentPack` (useful for testing).
pub fn parse_pack_str(content: &str, source_path: &Path) -> Result<ContentPack> {
    let parsed: TomlPackFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let problems = parsed
        .problems
        .into_iter()
        .map(|p| {
            let difficulty_level = p
                .difficulty
                .map(|d| {
                    d.parse::<Difficulty>()
                        .map_err(|e| anyhow::anyhow!("problem {}: {}", p.id, e))
                })
                .transpose()?;

            Ok(PracticeProblem {
                id: p.id,
                lesson_id: p.lesson_id,
                question: p.question,
                problem_type: ProblemType::from(p.problem_type),
                answer: p.answer,
                hints: p.hints,
                explanation: p.explanation,
                difficulty_level,
                points: p.points,
                sort_order: p.sort_order,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let quizzes = parsed
        .quizzes
        .into_iter()
        .map(|q| {
            let quiz_id = q.id;
            let questions = q
                .questions
                .into_iter()
                .map(|question| QuizQuestion {
                    id: question.id,
                    quiz_id,
                    question: question.question,
                    question_type: QuestionType::from(question.question_type),
                    options: question.options,
                    correct_answer: question.correct_answer,
                    explanation: question.explanation,
                    points: question.points,
                    sort_order: question.sort_order,
                })
                .collect();

            Quiz {
                id: q.id,
                lesson_id: q.lesson_id,
                title: q.title,
                description: q.description,
                time_limit: q.time_limit,
                passing_score: q.passing_score,
                is_published: q.is_published,
                questions: Some(questions),
            }
        })
        .collect();

    Ok(ContentPack {
        id: parsed.pack.id,
        name: parsed.pack.name,
        description: parsed.pack.description,
        problems,
        quizzes,
    })
}

/// Recursively load all `.toml` content packs from a directory.
pub fn load_pack_directory(dir: &Path) -> Result<Vec<ContentPack>> {
    let mut packs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    // read_dir order is platform dependent; later packs override earlier ones.
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            packs.extend(load_pack_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_pack(&path) {
                Ok(pack) => packs.push(pack),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(packs)
}

/// Load a single pack file, or every pack under a directory.
pub fn load_content(path: &Path) -> Result<Vec<ContentPack>> {
    if path.is_dir() {
        load_pack_directory(path)
    } else {
        Ok(vec![parse_pack(path)?])
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) const VALID_TOML: &str = r#"
[pack]
id = "geometry"
name = "Geometry Basics"
description = "Triangles and friends"

[[problems]]
id = 1
lesson_id = 10
question = "A right triangle has legs 3 and 4. How long is the hypotenuse?"
problem_type = "numeric"
answer = "5"
hints = '["Use the Pythagorean theorem.", "3² + 4² = 25"]'
explanation = "The square root of 25 is 5."
difficulty = "beginner"
sort_order = 1

[[problems]]
id = 2
lesson_id = 10
question = "How many sides does a square have?"
problem_type = "multiple_choice"
answer = '["4", "four"]'
difficulty = "beginner"
sort_order = 2

[[problems]]
id = 3
lesson_id = 10
question = "Name the longest side of a right triangle."
problem_type = "text"
answer = '"hypotenuse"'
difficulty = "intermediate"
sort_order = 3

[[quizzes]]
id = 100
lesson_id = 10
title = "Triangles"
passing_score = 60

[[quizzes.questions]]
id = 1001
question = "The angles of a triangle sum to how many degrees?"
question_type = "numeric"
correct_answer = "180"
points = 2
sort_order = 1

[[quizzes.questions]]
id = 1002
question = "Every square is a rectangle."
question_type = "true_false"
correct_answer = "true"
points = 3
sort_order = 2

[[quizzes.questions]]
id = 1003
question = "Which side is opposite the right angle?"
question_type = "multiple_choice"
options = '["Leg", "Hypotenuse", "Base"]'
correct_answer = "Hypotenuse"
explanation = "The hypotenuse is always opposite the right angle."
points = 5
sort_order = 3
"#;

    #[test]
    fn parse_valid_pack() {
        let pack = parse_pack_str(VALID_TOML, &PathBuf::from("geometry.toml")).unwrap();
        assert_eq!(pack.id, "geometry");
        assert_eq!(pack.problems.len(), 3);
        assert_eq!(pack.problems[0].problem_type, ProblemType::Numeric);
        assert_eq!(
            pack.problems[0].difficulty_level,
            Some(Difficulty::Beginner)
        );
        assert_eq!(pack.quizzes.len(), 1);

        let questions = pack.quizzes[0].questions.as_ref().unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.quiz_id == 100));
        assert_eq!(questions[1].question_type, QuestionType::TrueFalse);
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[pack]
id = "minimal"
name = "Minimal"

[[problems]]
id = 1
lesson_id = 1
question = "2 + 2"
problem_type = "numeric"
answer = "4"

[[quizzes]]
id = 1
title = "Empty"
"#;
        let pack = parse_pack_str(toml, &PathBuf::from("minimal.toml")).unwrap();
        assert!(pack.description.is_empty());
        assert_eq!(pack.problems[0].points, 1);
        assert!(pack.problems[0].hints.is_none());
        assert_eq!(pack.quizzes[0].passing_score, 70);
        assert!(pack.quizzes[0].is_published);
        assert_eq!(pack.quizzes[0].questions.as_deref().map(<[_]>::len), Some(0));
    }

    #[test]
    fn unknown_types_are_kept() {
        let toml = r#"
[pack]
id = "odd"
name = "Odd"

[[quizzes]]
id = 1
title = "Odd"

[[quizzes.questions]]
id = 1
question = "Explain."
question_type = "essay"
correct_answer = "anything"
"#;
        let pack = parse_pack_str(toml, &PathBuf::from("odd.toml")).unwrap();
        let questions = pack.quizzes[0].questions.as_ref().unwrap();
        assert_eq!(questions[0].question_type, QuestionType::Other("essay".into()));
    }

    #[test]
    fn bad_difficulty_is_an_error() {
        let toml = r#"
[pack]
id = "bad"
name = "Bad"

[[problems]]
id = 7
lesson_id = 1
question = "?"
problem_type = "text"
answer = '"x"'
difficulty = "impossible"
"#;
        let err = parse_pack_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("problem 7"));
    }

    #[test]
    fn merge_later_pack_wins() {
        let mut base = parse_pack_str(VALID_TOML, &PathBuf::from("geometry.toml")).unwrap();
        let overlay = parse_pack_str(
            r#"
[pack]
id = "fixes"
name = "Fixes"

[[problems]]
id = 2
lesson_id = 10
question = "How many sides does a triangle have?"
problem_type = "numeric"
answer = "3"

[[problems]]
id = 50
lesson_id = 11
question = "2 + 2"
problem_type = "numeric"
answer = "4"

[[quizzes]]
id = 100
title = "Triangles, revised"

[[quizzes.questions]]
id = 1004
question = "Angles in a triangle sum to?"
question_type = "numeric"
correct_answer = "180"
"#,
            &PathBuf::from("fixes.toml"),
        )
        .unwrap();

        base.merge(overlay);

        assert_eq!(base.id, "geometry");
        let ids: Vec<i64> = base.problems.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 50]);
        assert_eq!(base.problems[1].answer, "3");

        assert_eq!(base.quizzes.len(), 1);
        assert_eq!(base.quizzes[0].title, "Triangles, revised");
        let questions: Vec<i64> = base.quizzes[0]
            .questions
            .as_ref()
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(questions, vec![1004]);
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_pack_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("geometry.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "[pack").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let packs = load_pack_directory(dir.path()).unwrap();
        assert_eq!(packs.len(), 1);
        assert_eq!(packs[0].id, "geometry");
    }

    #[test]
    fn load_content_accepts_file_or_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lessons");
        std::fs::create_dir_all(&nested).unwrap();
        let file = nested.join("geometry.toml");
        std::fs::write(&file, VALID_TOML).unwrap();

        assert_eq!(load_content(&file).unwrap().len(), 1);
        assert_eq!(load_content(dir.path()).unwrap().len(), 1);
        assert!(load_content(&dir.path().join("missing.toml")).is_err());
    }
}
