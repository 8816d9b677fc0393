use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep_until};

/// The single point in time after which no answer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Starts the countdown now.
    pub fn after(limit: Duration) -> Self {
        Self {
            at: Instant::now() + limit,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn has_expired(&self) -> bool {
        Instant::now() >= self.at
    }

    /// A timer that completes when the deadline is reached.
    pub fn expiry(&self) -> Sleep {
        sleep_until(self.at)
    }
}
