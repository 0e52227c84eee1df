pub mod estimator;

pub use estimator::{median_gap, RateEstimator};
