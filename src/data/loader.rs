use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::models::Question;

const READER_ORIGIN: &str = "<input>";

/// Errors raised while loading a question file. Loading is all-or-nothing:
/// the first bad row aborts the load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row has no answer column.
    #[error("line {line}: expected a question and an answer, found {fields} field(s)")]
    MissingAnswer { line: u64, fields: usize },

    /// A row has an empty question.
    #[error("line {line}: question text is empty")]
    EmptyPrompt { line: u64 },

    /// The file is not valid CSV.
    #[error("failed to parse CSV: {0}")]
    Parse(#[source] csv::Error),

    /// The file contains no rows at all.
    #[error("{} must contain at least one question", path.display())]
    Empty { path: PathBuf },
}

impl LoadError {
    /// True for errors caused by the file's contents rather than its availability.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            LoadError::MissingAnswer { .. } | LoadError::EmptyPrompt { .. } | LoadError::Parse(_)
        )
    }
}

/// Loads `question,answer` rows from a CSV file, preserving row order.
pub fn load_questions_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = read_questions(file, path)?;
    tracing::info!(count = questions.len(), path = %path.display(), "loaded questions");
    Ok(questions)
}

/// Same as [`load_questions_from_csv`] for an already-open source.
pub fn load_questions_from_reader<R: Read>(reader: R) -> Result<Vec<Question>, LoadError> {
    read_questions(reader, Path::new(READER_ORIGIN))
}

fn read_questions<R: Read>(reader: R, origin: &Path) -> Result<Vec<Question>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|err| classify(err, origin))?;
        questions.push(parse_row(&record)?);
    }

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: origin.to_path_buf(),
        });
    }

    Ok(questions)
}

fn parse_row(record: &StringRecord) -> Result<Question, LoadError> {
    let line = record.position().map_or(0, |position| position.line());

    let (Some(prompt), Some(answer)) = (record.get(0), record.get(1)) else {
        return Err(LoadError::MissingAnswer {
            line,
            fields: record.len(),
        });
    };

    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(LoadError::EmptyPrompt { line });
    }

    Ok(Question::new(prompt, answer))
}

fn classify(err: csv::Error, origin: &Path) -> LoadError {
    if err.is_io_error() {
        LoadError::SourceUnavailable {
            path: origin.to_path_buf(),
            source: io::Error::from(err),
        }
    } else {
        LoadError::Parse(err)
    }
}
