pub mod feed;
pub mod humanize;
pub mod projector;
pub mod stats;

pub use feed::{EmissionFeed, MemoryFeed};
pub use humanize::{describe_eta, distance_in_words, with_delimiters, EtaDescription};
pub use projector::TimeProjector;
pub use stats::{FeedStats, StatsError};
