use std::fmt;

use thiserror::Error;

/// Which end of a string a boundary character was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => f.write_str("start"),
            Edge::End => f.write_str("end"),
        }
    }
}

/// Structurally invalid input.
///
/// These are expected outcomes, not faults: callers branch on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("String is empty")]
    EmptyString,

    #[error("String has {length} characters, the maximum is {max}")]
    TooLong { length: usize, max: usize },

    #[error("Character {ch:?} at position {position} is outside the alphabet")]
    OutsideAlphabet { ch: char, position: usize },

    #[error("Boundary character at the {0} of the string")]
    BoundaryAtEdge(Edge),

    #[error("Sequence numbers start at 1")]
    RankZero,

    #[error("Sequence number {0} lies beyond the longest allowed string")]
    RankOutOfRange(String),

    #[error("Sample window holds {0} timestamp(s), at least 2 are required")]
    WindowTooSmall(usize),

    #[error("Sample window is not ordered most-recent-first at index {0}")]
    UnorderedWindow(usize),
}
