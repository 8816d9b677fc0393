//! Final score output.

use clap::ValueEnum;

use crate::models::QuizOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render(outcome: &QuizOutcome, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(outcome)),
        ReportFormat::Json => serde_json::to_string(outcome),
    }
}

fn render_text(outcome: &QuizOutcome) -> String {
    format!(
        "You scored {} out of {}.\nasked={} correct={}",
        outcome.tally.correct, outcome.total, outcome.tally.asked, outcome.tally.correct
    )
}
