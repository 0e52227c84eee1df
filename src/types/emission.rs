use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single string published by the feed, with the feed's own timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emission {
    pub text: String,
    pub emitted_at: DateTime<Utc>,
}

impl Emission {
    pub fn new(text: impl Into<String>, emitted_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            emitted_at,
        }
    }
}
