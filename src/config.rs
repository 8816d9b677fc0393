//! Validated run configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::report::ReportFormat;

pub const DEFAULT_QUESTIONS_PATH: &str = "problems.csv";
pub const DEFAULT_LIMIT_SECS: i64 = 30;

/// Rejected command-line settings. Nothing is loaded or asked when these occur.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{} is not a .csv file", .0.display())]
    NotCsv(PathBuf),

    #[error("time limit must be a positive number of seconds, got {0}")]
    NonPositiveLimit(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub file: PathBuf,
    pub limit: Duration,
    pub shuffle: bool,
    pub format: ReportFormat,
}

impl QuizConfig {
    pub fn new(
        file: PathBuf,
        limit_secs: i64,
        shuffle: bool,
        format: ReportFormat,
    ) -> Result<Self, ConfigError> {
        let is_csv = file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(ConfigError::NotCsv(file));
        }

        let limit = u64::try_from(limit_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::NonPositiveLimit(limit_secs))?;

        Ok(Self {
            file,
            limit: Duration::from_secs(limit),
            shuffle,
            format,
        })
    }
}
