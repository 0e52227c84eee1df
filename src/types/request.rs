use serde::{Deserialize, Serialize};

/// What a caller asked about the feed.
///
/// Produced by an external classifier; consumed here as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum RequestKind {
    /// Current emission rate.
    Frequency,
    /// Number of emissions made so far.
    Count,
    /// The most recent emission.
    LastValue,
    /// When the feed will emit the given string.
    EtaFor(String),
    Help,
    Unknown,
}
