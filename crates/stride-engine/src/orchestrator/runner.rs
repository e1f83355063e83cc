//! The trial loop.

use crate::sampler::TrialSampler;
use crate::stats::{AggregateError, TrialAggregator};

use super::deadline::StopReason;

/// How a trial loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialLoopOutcome {
    pub executed: u64,
    /// Set when the loop ended before reaching the requested count.
    pub stopped: Option<StopReason>,
}

/// Run up to `requested` trials, folding each into `aggregator`.
///
/// Trials run in chunks of `interval`; `should_stop` is polled before every
/// chunk, including the first, so a batch that is already out of time runs
/// no trials at all.
pub fn run_trials<F>(
    sampler: &mut TrialSampler,
    aggregator: &mut TrialAggregator,
    requested: u32,
    interval: u32,
    mut should_stop: F,
) -> Result<TrialLoopOutcome, AggregateError>
where
    F: FnMut() -> Option<StopReason>,
{
    let requested = u64::from(requested);
    let interval = u64::from(interval.max(1));
    let mut executed = 0u64;

    while executed < requested {
        if let Some(reason) = should_stop() {
            return Ok(TrialLoopOutcome {
                executed,
                stopped: Some(reason),
            });
        }
        let chunk = interval.min(requested - executed);
        for _ in 0..chunk {
            aggregator.push(&sampler.next_trial())?;
        }
        executed += chunk;
    }

    Ok(TrialLoopOutcome {
        executed,
        stopped: None,
    })
}

#[cfg(test)]
mod tests {
    use stride_core::model::{PriorityWeights, RawWeights};

    use super::*;
    use crate::sampler::{SamplerSettings, TrialParams};

    fn sampler() -> TrialSampler {
        TrialSampler::new(
            5,
            TrialParams {
                gap_magnitude: 2.0,
                synergy_baseline: 6.0,
                interaction_count: 2,
                alignment_baseline: 6.0,
            },
            PriorityWeights::normalize(RawWeights::new(1.0, 1.0, 1.0)).unwrap(),
            SamplerSettings::default(),
        )
    }

    #[test]
    fn test_runs_to_completion() {
        let mut agg = TrialAggregator::new();
        let outcome = run_trials(&mut sampler(), &mut agg, 1000, 64, || None).unwrap();
        assert_eq!(outcome.executed, 1000);
        assert_eq!(outcome.stopped, None);
        assert_eq!(agg.trials(), 1000);
    }

    #[test]
    fn test_stops_at_chunk_boundary() {
        let mut agg = TrialAggregator::new();
        let mut polls = 0;
        let outcome = run_trials(&mut sampler(), &mut agg, 1000, 100, || {
            polls += 1;
            (polls > 3).then_some(StopReason::DeadlineExpired)
        })
        .unwrap();
        assert_eq!(outcome.executed, 300);
        assert_eq!(outcome.stopped, Some(StopReason::DeadlineExpired));
        assert_eq!(agg.trials(), 300);
    }

    #[test]
    fn test_stop_before_first_chunk_runs_nothing() {
        let mut agg = TrialAggregator::new();
        let outcome =
            run_trials(&mut sampler(), &mut agg, 1000, 100, || Some(StopReason::Cancelled)).unwrap();
        assert_eq!(outcome.executed, 0);
        assert_eq!(agg.trials(), 0);
    }

    #[test]
    fn test_last_chunk_is_partial() {
        let mut agg = TrialAggregator::new();
        let mut polls = 0;
        let outcome = run_trials(&mut sampler(), &mut agg, 250, 100, || {
            polls += 1;
            None
        })
        .unwrap();
        assert_eq!(outcome.executed, 250);
        assert_eq!(polls, 3);
    }
}
