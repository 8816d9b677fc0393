use serde::Serialize;

use super::ScoreTally;

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StopReason {
    /// The session deadline passed.
    TimeExpired,
    /// Every question was answered.
    Exhausted,
    /// Standard input closed or failed while waiting for an answer.
    InputError { detail: String },
}

impl StopReason {
    pub fn input_closed() -> Self {
        StopReason::InputError {
            detail: "input closed".to_string(),
        }
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self, StopReason::InputError { .. })
    }
}

/// Lifecycle of the quiz engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    AwaitingStart,
    Running,
    Stopped(StopReason),
}

/// Final result handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    #[serde(flatten)]
    pub tally: ScoreTally,
    pub total: usize,
    pub reason: StopReason,
}
