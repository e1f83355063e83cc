//! Fold trial samples into the statistics a result is built from.

use stride_core::types::{ConfidenceInterval, SimulationMetrics};

use super::welford::RunningStats;
use super::wilson::wilson_interval;
use crate::sampler::TrialSample;

/// Numeric failures inside the fold. Any of these means a sampler or
/// aggregator bug, never bad user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    #[error("non-finite {field} in trial {trial}: {value}")]
    NonFiniteSample {
        field: &'static str,
        trial: u64,
        value: f64,
    },

    #[error("no trials were aggregated")]
    NoTrials,

    #[error("Wilson interval undefined for {successes}/{trials}")]
    IntervalUndefined { successes: u64, trials: u64 },
}

/// Streaming fold over one project's trials.
///
/// Owned by exactly one project task; never shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TrialAggregator {
    skill_growth: RunningStats,
    synergy: RunningStats,
    alignment: RunningStats,
    successes: u64,
    trials: u64,
}

/// Final statistics of an aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStatistics {
    pub trials: u64,
    pub successes: u64,
    pub success_probability: f64,
    pub confidence_interval: ConfidenceInterval,
    pub metrics: SimulationMetrics,
}

impl TrialAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial. Rejects non-finite values before they reach the moments.
    pub fn push(&mut self, sample: &TrialSample) -> Result<(), AggregateError> {
        let trial = self.trials + 1;
        for (field, value) in [
            ("skill_growth", sample.skill_growth),
            ("synergy", sample.synergy),
            ("alignment", sample.alignment),
            ("composite_score", sample.composite_score),
        ] {
            if !value.is_finite() {
                return Err(AggregateError::NonFiniteSample { field, trial, value });
            }
        }

        self.skill_growth.push(sample.skill_growth);
        self.synergy.push(sample.synergy);
        self.alignment.push(sample.alignment);
        if sample.success {
            self.successes += 1;
        }
        self.trials = trial;
        Ok(())
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// `successes / trials`; 0 before any trial.
    pub fn success_probability(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }

    /// Compute probability, Wilson interval at critical value `z`, and mean
    /// sub-scores.
    pub fn finalize(&self, z: f64) -> Result<TrialStatistics, AggregateError> {
        if self.trials == 0 {
            return Err(AggregateError::NoTrials);
        }
        let confidence_interval = wilson_interval(self.successes, self.trials, z).ok_or(
            AggregateError::IntervalUndefined {
                successes: self.successes,
                trials: self.trials,
            },
        )?;

        Ok(TrialStatistics {
            trials: self.trials,
            successes: self.successes,
            success_probability: self.success_probability(),
            confidence_interval,
            metrics: SimulationMetrics {
                expected_skill_gain: self.skill_growth.mean(),
                peer_synergy_score: self.synergy.mean(),
                goal_alignment_score: self.alignment.mean(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::z_score;

    const Z95: f64 = 1.959_963_984_540_054;

    fn sample(growth: f64, synergy: f64, alignment: f64, success: bool) -> TrialSample {
        TrialSample {
            skill_growth: growth,
            synergy,
            alignment,
            composite_score: if success { 0.8 } else { 0.2 },
            success,
        }
    }

    #[test]
    fn test_probability_and_means() {
        let mut agg = TrialAggregator::new();
        agg.push(&sample(1.0, 6.0, 4.0, true)).unwrap();
        agg.push(&sample(0.0, 8.0, 6.0, false)).unwrap();
        agg.push(&sample(0.5, 7.0, 5.0, true)).unwrap();
        agg.push(&sample(0.5, 7.0, 5.0, false)).unwrap();

        let stats = agg.finalize(Z95).unwrap();
        assert_eq!(stats.trials, 4);
        assert_eq!(stats.successes, 2);
        assert_eq!(stats.success_probability, 0.5);
        assert!((stats.metrics.expected_skill_gain - 0.5).abs() < 1e-12);
        assert!((stats.metrics.peer_synergy_score - 7.0).abs() < 1e-12);
        assert!((stats.metrics.goal_alignment_score - 5.0).abs() < 1e-12);
        assert!(stats.confidence_interval.contains(0.5));
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let mut agg = TrialAggregator::new();
        agg.push(&sample(1.0, 6.0, 4.0, true)).unwrap();
        let err = agg.push(&sample(f64::NAN, 6.0, 4.0, true)).unwrap_err();
        assert!(matches!(
            err,
            AggregateError::NonFiniteSample { field: "skill_growth", trial: 2, .. }
        ));
        // The rejected trial is not counted.
        assert_eq!(agg.trials(), 1);
    }

    #[test]
    fn test_finalize_requires_trials() {
        assert_eq!(
            TrialAggregator::new().finalize(Z95).unwrap_err(),
            AggregateError::NoTrials
        );
    }

    #[test]
    fn test_wider_level_wider_interval() {
        let mut agg = TrialAggregator::new();
        for i in 0..200 {
            agg.push(&sample(1.0, 6.0, 4.0, i % 3 == 0)).unwrap();
        }
        let narrow = agg.finalize(z_score(0.8).unwrap()).unwrap();
        let wide = agg.finalize(z_score(0.99).unwrap()).unwrap();
        assert!(wide.confidence_interval.width() > narrow.confidence_interval.width());
        assert_eq!(wide.success_probability, narrow.success_probability);
    }
}
