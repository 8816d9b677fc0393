use serde::Serialize;

/// Running score for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    pub asked: usize,
    pub correct: usize,
}

impl ScoreTally {
    pub fn record(&mut self, was_correct: bool) {
        self.asked += 1;
        if was_correct {
            self.correct += 1;
        }
    }
}
