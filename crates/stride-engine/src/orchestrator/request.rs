//! Simulation requests and their validation.

use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use stride_core::config::EngineSettings;
use stride_core::errors::SimulationError;
use stride_core::model::{PriorityWeights, RawWeights};
use stride_core::types::{ProjectId, UserId};

use crate::sampler::default_base_seed;

/// One `simulate` call's input, as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub user_id: UserId,
    pub candidate_project_ids: Vec<ProjectId>,
    #[serde(rename = "priorityWeights")]
    pub weights: RawWeights,
    /// Trials per project; the configured default when absent.
    #[serde(rename = "simulationTrials", default, skip_serializing_if = "Option::is_none")]
    pub trials: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Time budget in milliseconds, measured from the start of the call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_ms: Option<u64>,
}

/// A request that passed validation, with every default resolved.
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub user_id: UserId,
    /// Candidates in request order, duplicates removed.
    pub project_ids: Vec<ProjectId>,
    pub weights: PriorityWeights,
    pub trials: u32,
    pub base_seed: u64,
    pub deadline: Option<Instant>,
}

impl SimulationRequest {
    pub fn new<I>(user_id: UserId, candidate_project_ids: I, weights: RawWeights) -> Self
    where
        I: IntoIterator<Item = ProjectId>,
    {
        Self {
            user_id,
            candidate_project_ids: candidate_project_ids.into_iter().collect(),
            weights,
            trials: None,
            seed: None,
            deadline_ms: None,
        }
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = Some(trials);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_deadline(mut self, budget: Duration) -> Self {
        self.deadline_ms = Some(u64::try_from(budget.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Check the request and resolve defaults against `settings`.
    ///
    /// `started` anchors the deadline budget.
    pub fn validate(
        &self,
        settings: &EngineSettings,
        started: Instant,
    ) -> Result<SimulationPlan, SimulationError> {
        if self.candidate_project_ids.is_empty() {
            return Err(SimulationError::invalid_input(
                "candidate project list is empty",
            ));
        }

        let trials = self.trials.unwrap_or(settings.default_trials);
        if trials == 0 {
            return Err(SimulationError::invalid_input("simulation trials must be positive"));
        }
        if trials > settings.max_trials {
            return Err(SimulationError::invalid_input(format!(
                "simulation trials {trials} exceed the maximum of {}",
                settings.max_trials
            )));
        }

        let weights = PriorityWeights::normalize(self.weights)?;

        let mut seen = FxHashSet::default();
        let project_ids: Vec<ProjectId> = self
            .candidate_project_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let base_seed = self
            .seed
            .or(settings.base_seed)
            .unwrap_or_else(|| default_base_seed(self.user_id));
        let deadline = self
            .deadline_ms
            .and_then(|ms| started.checked_add(Duration::from_millis(ms)));

        Ok(SimulationPlan {
            user_id: self.user_id,
            project_ids,
            weights,
            trials,
            base_seed,
            deadline,
        })
    }
}
