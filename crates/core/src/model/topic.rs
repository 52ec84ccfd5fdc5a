use serde::{Deserialize, Serialize};

/// Subject/topic pair typed in by the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub subject: String,
    pub topic: String,
}

impl Topic {
    #[must_use]
    pub fn new(subject: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            subject: subject.into().trim().to_string(),
            topic: topic.into().trim().to_string(),
        }
    }

    /// Human-readable form used inside prompts, e.g. "ownership in Rust".
    ///
    /// Falls back to the bare subject when no topic was given.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.topic.is_empty() {
            self.subject.clone()
        } else {
            format!("{} in {}", self.topic, self.subject)
        }
    }
}
