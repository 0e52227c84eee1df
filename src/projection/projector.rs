use std::convert::Infallible;

use tracing::debug;

use crate::numbering::SequenceNumbering;
use crate::types::{Emission, Eta, Projection, Rate};

/// Combines sequence numbers with an observed rate into an arrival estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeProjector {
    numbering: SequenceNumbering,
}

impl TimeProjector {
    pub fn new(numbering: SequenceNumbering) -> Self {
        Self { numbering }
    }

    pub fn numbering(&self) -> &SequenceNumbering {
        &self.numbering
    }

    /// Estimate when `target` will be emitted, given the latest emission and rate.
    ///
    /// Order of checks: the target must have a rank, then an already-passed
    /// target wins over a stale rate.
    pub fn project(&self, target: &str, latest: &Emission, rate: &Rate) -> Projection {
        match self.project_with(target, latest, || Ok::<Rate, Infallible>(*rate)) {
            Ok(projection) => projection,
            Err(never) => match never {},
        }
    }

    /// Like [`TimeProjector::project`], but the rate is only requested once
    /// both strings are ranked and the target still lies ahead of the feed.
    pub fn project_with<E>(
        &self,
        target: &str,
        latest: &Emission,
        rate: impl FnOnce() -> Result<Rate, E>,
    ) -> Result<Projection, E> {
        let target_rank = match self.numbering.rank_of(target) {
            Ok(rank) => rank,
            Err(rejection) => return Ok(Projection::DomainRejected(rejection)),
        };
        // A feed that emitted something outside the alphabet cannot anchor a projection.
        let current_rank = match self.numbering.rank_of(&latest.text) {
            Ok(rank) => rank,
            Err(rejection) => return Ok(Projection::DomainRejected(rejection)),
        };

        debug!(%target_rank, %current_rank, "ranked target against latest emission");

        if target_rank <= current_rank {
            return Ok(Projection::AlreadyEmitted {
                target: target_rank,
                current: current_rank,
            });
        }

        let interval = match rate()? {
            Rate::Interval(interval) => interval,
            Rate::Stale(signal) => return Ok(Projection::Stale(signal)),
        };

        let emissions_ahead = target_rank.as_biguint() - current_rank.as_biguint();
        Ok(Projection::Projected(Eta {
            from: latest.emitted_at,
            emissions_ahead,
            interval,
        }))
    }
}
