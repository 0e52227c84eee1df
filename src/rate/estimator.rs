use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::config::settings::check_staleness_multiplier;
use crate::config::{ConfigError, DEFAULT_STALENESS_MULTIPLIER};
use crate::types::{DomainError, Rate, StaleSignal};

/// Derives a representative inter-arrival interval from recent timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateEstimator {
    staleness_multiplier: u32,
}

impl Default for RateEstimator {
    fn default() -> Self {
        Self {
            staleness_multiplier: DEFAULT_STALENESS_MULTIPLIER,
        }
    }
}

impl RateEstimator {
    /// Rejects a multiplier of zero (every feed would look stale) and one
    /// past `i32::MAX`.
    pub fn new(staleness_multiplier: u32) -> Result<Self, ConfigError> {
        check_staleness_multiplier(staleness_multiplier)?;
        Ok(Self {
            staleness_multiplier,
        })
    }

    pub fn staleness_multiplier(&self) -> u32 {
        self.staleness_multiplier
    }

    /// `window` is ordered most-recent-first.
    ///
    /// The feed counts as stale when the time since the latest emission is
    /// strictly greater than `multiplier × median`; exactly at the threshold
    /// it is still live.
    pub fn estimate_interval(
        &self,
        window: &[DateTime<Utc>],
        now: DateTime<Utc>,
    ) -> Result<Rate, DomainError> {
        let median = median_gap(window)?;
        let since_last = now - window[0];

        // A threshold past TimeDelta's range can never be exceeded.
        let threshold = i32::try_from(self.staleness_multiplier)
            .ok()
            .and_then(|multiplier| median.checked_mul(multiplier));
        let stale = threshold.is_some_and(|threshold| since_last > threshold);

        debug!(
            samples = window.len(),
            median_ms = median.num_milliseconds(),
            since_last_ms = since_last.num_milliseconds(),
            "estimated emission interval"
        );

        if stale {
            info!(
                median_ms = median.num_milliseconds(),
                since_last_ms = since_last.num_milliseconds(),
                "feed appears to have stopped emitting"
            );
            return Ok(Rate::Stale(StaleSignal { median, since_last }));
        }

        Ok(Rate::Interval(median))
    }
}

/// Median of the gaps between consecutive timestamps (most-recent-first).
///
/// With an even number of gaps this is the upper of the two middle values,
/// never their mean: `[10, 20, 30, 40]` gives 30.
pub fn median_gap(window: &[DateTime<Utc>]) -> Result<TimeDelta, DomainError> {
    if window.len() < 2 {
        return Err(DomainError::WindowTooSmall(window.len()));
    }

    let mut gaps = Vec::with_capacity(window.len() - 1);
    for (index, pair) in window.windows(2).enumerate() {
        let gap = pair[0] - pair[1];
        if gap < TimeDelta::zero() {
            return Err(DomainError::UnorderedWindow(index + 1));
        }
        gaps.push(gap);
    }

    gaps.sort();
    Ok(gaps[gaps.len() / 2])
}
