//! Package an aggregator's final state into an immutable result.

use stride_core::errors::SimulationError;
use stride_core::types::{ProjectId, ResultParts, SimulationResult, UserId};

use crate::sampler::SimulationKey;
use crate::stats::{z_score, TrialAggregator};

/// Who and what a result is about.
#[derive(Debug, Clone)]
pub struct ProjectIdentity {
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub project_name: Option<String>,
    pub seed: u64,
    pub requested_trials: u32,
    /// Batch-wide model fingerprint, folded into the simulation id.
    pub fingerprint: u64,
}

/// Builds [`SimulationResult`]s at a fixed confidence level.
#[derive(Debug, Clone, Copy)]
pub struct ResultAssembler {
    confidence_level: f64,
    z: f64,
}

impl ResultAssembler {
    /// `None` if `confidence_level` has no finite critical value.
    pub fn new(confidence_level: f64) -> Option<Self> {
        let z = z_score(confidence_level)?;
        Some(Self {
            confidence_level,
            z,
        })
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Finalize the aggregator and freeze the outcome.
    ///
    /// Fails with `InternalComputation` if the statistics are undefined or any
    /// value falls outside its range.
    pub fn assemble(
        &self,
        identity: ProjectIdentity,
        aggregator: &TrialAggregator,
    ) -> Result<SimulationResult, SimulationError> {
        let project_id = identity.project_id;
        let internal = |message: String| SimulationError::InternalComputation {
            project_id,
            message,
        };

        let stats = aggregator
            .finalize(self.z)
            .map_err(|e| internal(e.to_string()))?;
        let trial_count = u32::try_from(stats.trials)
            .map_err(|_| internal(format!("trial count {} exceeds u32", stats.trials)))?;

        SimulationResult::from_parts(ResultParts {
            simulation_id: SimulationKey {
                user_id: identity.user_id,
                project_id,
                seed: identity.seed,
                requested_trials: identity.requested_trials,
                trial_count,
                fingerprint: identity.fingerprint,
            }
            .simulation_id(),
            user_id: identity.user_id,
            project_id,
            project_name: identity.project_name,
            success_probability: stats.success_probability,
            confidence_interval: stats.confidence_interval,
            confidence_level: self.confidence_level,
            metrics: stats.metrics,
            trial_count,
            requested_trials: identity.requested_trials,
            seed: identity.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::TrialSample;

    fn identity(requested: u32) -> ProjectIdentity {
        ProjectIdentity {
            user_id: UserId(1),
            project_id: ProjectId(5),
            project_name: None,
            seed: 1234,
            requested_trials: requested,
            fingerprint: 77,
        }
    }

    fn assembler() -> ResultAssembler {
        ResultAssembler::new(0.95).unwrap()
    }

    fn filled(trials: u32) -> TrialAggregator {
        let mut agg = TrialAggregator::new();
        for i in 0..trials {
            agg.push(&TrialSample {
                skill_growth: 0.4,
                synergy: 6.0,
                alignment: 5.0,
                composite_score: 0.5,
                success: i % 4 == 0,
            })
            .unwrap();
        }
        agg
    }

    #[test]
    fn test_assemble_full_run() {
        let result = assembler().assemble(identity(100), &filled(100)).unwrap();
        assert_eq!(result.trial_count(), 100);
        assert!(!result.degraded());
        assert_eq!(result.success_probability(), 0.25);
        assert_eq!(result.seed(), 1234);
        assert!(result.simulation_id().starts_with("sim-"));
    }

    #[test]
    fn test_assemble_partial_run_is_degraded() {
        let result = assembler().assemble(identity(1000), &filled(40)).unwrap();
        assert_eq!(result.trial_count(), 40);
        assert!(result.degraded());
    }

    #[test]
    fn test_assemble_empty_is_internal_error() {
        let err = assembler()
            .assemble(identity(10), &TrialAggregator::new())
            .unwrap_err();
        assert!(matches!(err, SimulationError::InternalComputation { .. }));
    }

    #[test]
    fn test_degraded_run_gets_its_own_id() {
        let full = assembler().assemble(identity(100), &filled(100)).unwrap();
        let partial = assembler().assemble(identity(100), &filled(60)).unwrap();
        assert_ne!(full.simulation_id(), partial.simulation_id());
    }

    #[test]
    fn test_level_without_critical_value_rejected() {
        assert!(ResultAssembler::new(1.0 - f64::EPSILON / 2.0).is_none());
        assert!(ResultAssembler::new(1.0).is_none());
        assert_eq!(assembler().confidence_level(), 0.95);
    }
}
