use std::convert::Infallible;

use crate::types::Emission;

/// Read access to the observed feed.
///
/// Implementations own transport, retries and snapshot consistency; the
/// engine only consumes what they return.
pub trait EmissionFeed {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Up to `count` emissions, most-recent-first.
    fn recent_emissions(&self, count: usize) -> Result<Vec<Emission>, Self::Error>;

    /// `None` when the feed has not emitted anything yet.
    fn latest_emission(&self) -> Result<Option<Emission>, Self::Error> {
        Ok(self.recent_emissions(1)?.into_iter().next())
    }

    /// Total number of emissions made so far.
    fn emission_count(&self) -> Result<u64, Self::Error>;
}

/// A fixed history held in memory, for replays and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeed {
    // most-recent-first
    emissions: Vec<Emission>,
}

impl MemoryFeed {
    /// Accepts emissions in any order.
    pub fn new(mut emissions: Vec<Emission>) -> Self {
        emissions.sort_by(|a, b| b.emitted_at.cmp(&a.emitted_at));
        Self { emissions }
    }

    pub fn push(&mut self, emission: Emission) {
        let at = self
            .emissions
            .partition_point(|existing| existing.emitted_at > emission.emitted_at);
        self.emissions.insert(at, emission);
    }

    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }
}

impl EmissionFeed for MemoryFeed {
    type Error = Infallible;

    fn recent_emissions(&self, count: usize) -> Result<Vec<Emission>, Self::Error> {
        Ok(self.emissions.iter().take(count).cloned().collect())
    }

    fn emission_count(&self) -> Result<u64, Self::Error> {
        Ok(self.emissions.len() as u64)
    }
}
