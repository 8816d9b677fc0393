//! # timed-quiz
//!
//! A terminal quiz that reads `question,answer` rows from a CSV file and
//! asks them under a single wall-clock deadline.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use timed_quiz::{LineInput, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load questions from a CSV file and shuffle them
//!     let quiz = Quiz::from_csv("problems.csv")?.shuffled(true);
//!
//!     // Ask them on stdin/stdout with a 30 second limit
//!     let outcome = quiz
//!         .run(Duration::from_secs(30), LineInput::stdin(), &mut std::io::stdout())
//!         .await?;
//!     println!("asked={} correct={}", outcome.tally.asked, outcome.tally.correct);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
mod data;
pub mod engine;
mod models;
pub mod normalize;
pub mod report;
pub mod shuffle;

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

pub use config::{ConfigError, QuizConfig};
pub use data::{LoadError, load_questions_from_csv, load_questions_from_reader};
pub use engine::{AnswerSource, Deadline, LineInput, QuizEngine};
pub use models::{Question, QuizOutcome, QuizState, ScoreTally, StopReason};
pub use report::ReportFormat;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Invalid command-line settings.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Error loading questions from file.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded question set ready to be asked.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a quiz from a CSV file of `question,answer` rows.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_csv("problems.csv").expect("Failed to load quiz");
    /// ```
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_csv(path)?;
        Ok(Self::new(questions))
    }

    /// Randomize question order when `enabled`.
    pub fn shuffled(self, enabled: bool) -> Self {
        Self::new(shuffle::randomize(self.questions, enabled))
    }

    /// Ask every question, reading answers from `source` and writing prompts
    /// to `output`, until the time limit passes or the questions run out.
    pub async fn run<S, W>(
        self,
        limit: Duration,
        source: S,
        output: &mut W,
    ) -> Result<QuizOutcome, QuizError>
    where
        S: AnswerSource,
        W: Write,
    {
        let engine = QuizEngine::new(self.questions, limit, source);
        Ok(engine.run(output).await?)
    }
}
