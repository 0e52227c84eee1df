use chrono::{DateTime, TimeDelta, Utc};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::types::emission::Emission;
use crate::types::rejection::DomainError;
use crate::types::sequence::{decimal, SequenceNumber};

/// The feed looks stopped: nothing arrived for far longer than the usual gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleSignal {
    pub median: TimeDelta,
    pub since_last: TimeDelta,
}

/// Outcome of rate estimation over a sample window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    /// Representative gap between two consecutive emissions.
    Interval(TimeDelta),
    Stale(StaleSignal),
}

impl Rate {
    pub fn interval(&self) -> Option<TimeDelta> {
        match self {
            Rate::Interval(interval) => Some(*interval),
            Rate::Stale(_) => None,
        }
    }
}

/// Estimated arrival of a target string: `from + emissions_ahead * interval`.
///
/// The offset is kept exact; far-away targets routinely land outside any
/// calendar a `DateTime` can represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eta {
    /// Timestamp of the latest observed emission.
    pub from: DateTime<Utc>,
    pub emissions_ahead: BigUint,
    pub interval: TimeDelta,
}

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

impl Eta {
    /// Exact distance from `from` in nanoseconds, the full precision of `TimeDelta`.
    pub fn offset_nanos(&self) -> BigUint {
        if self.interval < TimeDelta::zero() {
            return BigUint::zero();
        }
        // Non-negative, so both parts are non-negative.
        let interval_ns = BigUint::from(self.interval.num_seconds().unsigned_abs())
            * NANOS_PER_SECOND
            + self.interval.subsec_nanos().unsigned_abs();
        &self.emissions_ahead * &interval_ns
    }

    /// Distance from `from` in whole milliseconds, rounded down.
    pub fn offset_millis(&self) -> BigUint {
        self.offset_nanos() / NANOS_PER_MILLI
    }

    /// Calendar timestamp, or `None` if it falls outside the representable range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let nanos = self.offset_nanos();
        let seconds = (&nanos / NANOS_PER_SECOND).to_i64()?;
        let subsec = (&nanos % NANOS_PER_SECOND).to_i64()?;
        let offset = TimeDelta::try_seconds(seconds)?.checked_add(&TimeDelta::nanoseconds(subsec))?;
        self.from.checked_add_signed(offset)
    }
}

/// Answer to "when will the feed emit X".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    Projected(Eta),
    /// Target ranks at or before the latest emission.
    AlreadyEmitted {
        target: SequenceNumber,
        current: SequenceNumber,
    },
    Stale(StaleSignal),
    DomainRejected(DomainError),
}

/// Typed answer for each [`RequestKind`](crate::types::RequestKind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Rate(Rate),
    Count(u64),
    Latest(Emission),
    Estimate {
        target: String,
        projection: Projection,
    },
    Help,
    Unknown,
}

/// Serializable record of one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Fingerprint of the configuration the ranks were computed under.
    pub config_version: String,
    pub target: String,
    pub generated_at: DateTime<Utc>,
    pub outcome: ReportOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Projected {
        from: DateTime<Utc>,
        #[serde(with = "decimal")]
        emissions_ahead: BigUint,
        interval_ms: i64,
        #[serde(with = "decimal")]
        offset_ms: BigUint,
        at: Option<DateTime<Utc>>,
    },
    AlreadyEmitted {
        target_rank: SequenceNumber,
        current_rank: SequenceNumber,
    },
    Stale {
        median_ms: i64,
        since_last_ms: i64,
    },
    Rejected {
        reason: String,
    },
}

impl From<&Projection> for ReportOutcome {
    fn from(projection: &Projection) -> Self {
        match projection {
            Projection::Projected(eta) => ReportOutcome::Projected {
                from: eta.from,
                emissions_ahead: eta.emissions_ahead.clone(),
                interval_ms: eta.interval.num_milliseconds(),
                offset_ms: eta.offset_millis(),
                at: eta.timestamp(),
            },
            Projection::AlreadyEmitted { target, current } => ReportOutcome::AlreadyEmitted {
                target_rank: target.clone(),
                current_rank: current.clone(),
            },
            Projection::Stale(signal) => ReportOutcome::Stale {
                median_ms: signal.median.num_milliseconds(),
                since_last_ms: signal.since_last.num_milliseconds(),
            },
            Projection::DomainRejected(rejection) => ReportOutcome::Rejected {
                reason: rejection.to_string(),
            },
        }
    }
}
