use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use timed_quiz::config::{DEFAULT_LIMIT_SECS, DEFAULT_QUESTIONS_PATH};
use timed_quiz::{
    LineInput, Quiz, QuizConfig, QuizError, QuizOutcome, ReportFormat, StopReason, report,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file of `question,answer` rows
    #[arg(short, long, visible_alias = "csv", default_value = DEFAULT_QUESTIONS_PATH)]
    file: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(short, long, default_value_t = DEFAULT_LIMIT_SECS, allow_negative_numbers = true)]
    limit: i64,

    /// Shuffle the order of the questions
    #[arg(short, long)]
    shuffle: bool,

    /// How to print the final score
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("timed_quiz=warn")),
        )
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(QuizOutcome {
            reason: StopReason::InputError { detail },
            ..
        }) => {
            eprintln!("Error: quiz stopped early: {}", detail);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<QuizOutcome, QuizError> {
    let config = QuizConfig::new(args.file, args.limit, args.shuffle, args.format)?;
    let quiz = Quiz::from_csv(&config.file)?.shuffled(config.shuffle);

    let mut stdout = io::stdout();
    let outcome = quiz.run(config.limit, LineInput::stdin(), &mut stdout).await?;

    let summary = report::render(&outcome, config.format).map_err(io::Error::from)?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", summary)?;
    stdout.flush()?;

    Ok(outcome)
}
