//! Streaming statistics over trial samples.
//!
//! Trials are folded one at a time (Welford running moments plus success
//! counters); raw samples are never retained.

pub mod aggregator;
pub mod welford;
pub mod wilson;

pub use aggregator::{AggregateError, TrialAggregator, TrialStatistics};
pub use welford::RunningStats;
pub use wilson::{wilson_interval, z_score};
