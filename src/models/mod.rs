mod question;
mod state;
mod tally;

pub use question::Question;
pub use state::{QuizOutcome, QuizState, StopReason};
pub use tally::ScoreTally;
