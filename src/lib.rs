//! Sequence numbering and emission-time projection for enumerating feeds.
//!
//! `ascii-eta` models a feed that publishes every valid string over a
//! bounded alphabet in canonical order (shorter first, then by positional
//! value, never starting or ending with the boundary character). It maps
//! strings to exact 1-based ranks in closed form, estimates the feed's
//! current emission interval from recent timestamps, and projects when a
//! given target string will appear. All computations are pure and
//! deterministic; ranks are arbitrary-precision integers throughout.

pub mod alphabet;
pub mod config;
pub mod numbering;
pub mod projection;
pub mod rate;
pub mod types;

pub use alphabet::Alphabet;
pub use config::{ConfigError, EngineConfig};
pub use numbering::SequenceNumbering;
pub use projection::{EmissionFeed, FeedStats, MemoryFeed, StatsError, TimeProjector};
pub use rate::RateEstimator;
