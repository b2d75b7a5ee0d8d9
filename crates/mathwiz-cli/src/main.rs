//! mathwiz CLI: check answers and score quizzes from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mathwiz", version, about = "Answer checking and quiz scoring for mathwiz lessons")]
struct Cli {
    /// Content pack file or directory (overrides config)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an answer to a practice problem
    Check {
        /// Practice problem id
        #[arg(long)]
        problem: i64,

        /// The submitted answer
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
    },

    /// Reveal a hint for a practice problem
    Hint {
        /// Practice problem id
        #[arg(long)]
        problem: i64,

        /// Hint level, starting at 1
        #[arg(long, default_value = "1")]
        level: u32,
    },

    /// Score a full quiz submission
    Quiz {
        /// Quiz id
        #[arg(long)]
        quiz: i64,

        /// JSON file mapping question ids to answers ("-" for stdin)
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Save a JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Save a JSON report into the configured output directory
        #[arg(long)]
        save: bool,
    },

    /// Check an answer to a single quiz question
    Question {
        /// Quiz question id
        #[arg(long)]
        question: i64,

        /// The submitted answer
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
    },

    /// List practice problems and quizzes for a lesson
    List {
        /// Lesson id
        #[arg(long)]
        lesson: i64,

        /// Filter problems by difficulty: beginner, intermediate, advanced
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Validate content packs
    Validate,

    /// Create starter config and example content pack
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathwiz=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();
    let source = commands::Source {
        content: cli.content,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Check { problem, answer } => {
            commands::check::execute(&source, problem, &answer).await
        }
        Commands::Hint { problem, level } => commands::hint::execute(&source, problem, level).await,
        Commands::Quiz {
            quiz,
            answers,
            format,
            output,
            save,
        } => commands::quiz::execute(&source, quiz, answers, format, output, save).await,
        Commands::Question { question, answer } => {
            commands::question::execute(&source, question, &answer).await
        }
        Commands::List { lesson, difficulty } => {
            commands::list::execute(&source, lesson, difficulty).await
        }
        Commands::Validate => commands::validate::execute(&source),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
