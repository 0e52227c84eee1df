use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::projection::feed::EmissionFeed;
use crate::projection::projector::TimeProjector;
use crate::rate::RateEstimator;
use crate::types::{
    Answer, DomainError, Emission, EstimateReport, Projection, Rate, ReportOutcome, RequestKind,
};

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Feed error: {0}")]
    Feed(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Feed has not emitted anything yet")]
    EmptyFeed,
}

fn feed_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> StatsError {
    StatsError::Feed(Box::new(err))
}

/// Answers questions about a live feed.
///
/// Holds no state of its own beyond configuration: every call pulls a fresh
/// sample from the feed.
pub struct FeedStats<F> {
    config: EngineConfig,
    config_version: String,
    projector: TimeProjector,
    estimator: RateEstimator,
    feed: F,
}

impl<F> FeedStats<F>
where
    F: EmissionFeed,
{
    pub fn new(config: EngineConfig, feed: F) -> Result<Self, ConfigError> {
        let numbering = config.numbering()?;
        let config_version = config.fingerprint()?;
        let estimator = RateEstimator::new(config.staleness_multiplier)?;

        Ok(Self {
            config,
            config_version,
            projector: TimeProjector::new(numbering),
            estimator,
            feed,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_version(&self) -> &str {
        &self.config_version
    }

    pub fn projector(&self) -> &TimeProjector {
        &self.projector
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn recent_interval(&self, now: DateTime<Utc>) -> Result<Rate, StatsError> {
        let requested = self.config.sample_window_size;
        let emissions = self.feed.recent_emissions(requested).map_err(feed_error)?;
        if emissions.len() < requested {
            warn!(
                requested,
                received = emissions.len(),
                "feed returned a short sample window"
            );
        }

        let window: Vec<DateTime<Utc>> = emissions.iter().map(|e| e.emitted_at).collect();
        Ok(self.estimator.estimate_interval(&window, now)?)
    }

    pub fn emission_count(&self) -> Result<u64, StatsError> {
        self.feed.emission_count().map_err(feed_error)
    }

    pub fn latest_emission(&self) -> Result<Emission, StatsError> {
        self.feed
            .latest_emission()
            .map_err(feed_error)?
            .ok_or(StatsError::EmptyFeed)
    }

    /// Estimate when the feed will emit `target`.
    ///
    /// An invalid target is rejected before the feed is consulted, and the
    /// sample window is only fetched for a target the feed has not reached.
    pub fn estimate_for(&self, target: &str, now: DateTime<Utc>) -> Result<Projection, StatsError> {
        if let Err(rejection) = self.projector.numbering().validate(target) {
            debug!(%rejection, "target rejected");
            return Ok(Projection::DomainRejected(rejection));
        }

        let latest = self.latest_emission()?;
        self.projector
            .project_with(target, &latest, || self.recent_interval(now))
    }

    /// [`FeedStats::estimate_for`], stamped with the configuration fingerprint.
    pub fn report(&self, target: &str, now: DateTime<Utc>) -> Result<EstimateReport, StatsError> {
        let projection = self.estimate_for(target, now)?;
        Ok(EstimateReport {
            config_version: self.config_version.clone(),
            target: target.to_string(),
            generated_at: now,
            outcome: ReportOutcome::from(&projection),
        })
    }

    pub fn answer(&self, request: &RequestKind, now: DateTime<Utc>) -> Result<Answer, StatsError> {
        let answer = match request {
            RequestKind::Frequency => Answer::Rate(self.recent_interval(now)?),
            RequestKind::Count => Answer::Count(self.emission_count()?),
            RequestKind::LastValue => Answer::Latest(self.latest_emission()?),
            RequestKind::EtaFor(target) => Answer::Estimate {
                target: target.clone(),
                projection: self.estimate_for(target, now)?,
            },
            RequestKind::Help => Answer::Help,
            RequestKind::Unknown => Answer::Unknown,
        };
        Ok(answer)
    }
}
