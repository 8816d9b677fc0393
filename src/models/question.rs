use crate::normalize::normalize;

/// A single prompt and the answer that scores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into().trim().to_string(),
        }
    }

    /// Returns true if `raw` matches the expected answer once both are normalized.
    pub fn accepts(&self, raw: &str) -> bool {
        normalize(&self.answer) == normalize(raw)
    }
}
