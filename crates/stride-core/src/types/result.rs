//! Simulation output types: per-project results, error entries, batch results.

use serde::{Deserialize, Serialize};

use super::identifiers::{ProjectId, UserId};
use crate::constants::PROFICIENCY_MAX;
use crate::errors::SimulationError;

/// Two-sided confidence interval on the success probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Both bounds finite, inside [0, 1], and ordered.
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite()
            && self.upper.is_finite()
            && (0.0..=1.0).contains(&self.lower)
            && (0.0..=1.0).contains(&self.upper)
            && self.lower <= self.upper
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Mean sub-scores observed across all executed trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    /// Mean skill growth per trial, in proficiency points.
    pub expected_skill_gain: f64,
    /// Mean sampled peer synergy, on the [0, 10] scale.
    pub peer_synergy_score: f64,
    /// Mean sampled goal alignment, on the [0, 10] scale.
    pub goal_alignment_score: f64,
}

/// Everything needed to build a [`SimulationResult`].
///
/// Built by result assembly; validated once by [`SimulationResult::from_parts`].
#[derive(Debug, Clone)]
pub struct ResultParts {
    pub simulation_id: String,
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub project_name: Option<String>,
    pub success_probability: f64,
    pub confidence_interval: ConfidenceInterval,
    pub confidence_level: f64,
    pub metrics: SimulationMetrics,
    pub trial_count: u32,
    pub requested_trials: u32,
    pub seed: u64,
}

/// Immutable outcome of simulating one (user, project) pair.
///
/// Fields are private and there is no mutating API: a recomputation
/// requires a new engine call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    simulation_id: String,
    user_id: UserId,
    project_id: ProjectId,
    project_name: Option<String>,
    success_probability: f64,
    confidence_interval: ConfidenceInterval,
    confidence_level: f64,
    metrics: SimulationMetrics,
    trial_count: u32,
    requested_trials: u32,
    seed: u64,
    degraded: bool,
}

impl SimulationResult {
    /// Validate and freeze a set of result parts.
    ///
    /// Any non-finite or out-of-range value is an internal computation error:
    /// the sampler and aggregator are expected never to produce one.
    pub fn from_parts(parts: ResultParts) -> Result<Self, SimulationError> {
        let fail = |message: String| SimulationError::InternalComputation {
            project_id: parts.project_id,
            message,
        };

        if parts.trial_count == 0 {
            return Err(fail("result assembled from zero trials".to_string()));
        }
        if parts.trial_count > parts.requested_trials {
            return Err(fail(format!(
                "executed {} trials but only {} were requested",
                parts.trial_count, parts.requested_trials
            )));
        }
        let p = parts.success_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(fail(format!("success probability out of range: {p}")));
        }
        let ci = parts.confidence_interval;
        if !ci.is_valid() || !ci.contains(p) {
            return Err(fail(format!(
                "confidence interval [{}, {}] invalid for probability {p}",
                ci.lower, ci.upper
            )));
        }
        if !(parts.confidence_level > 0.0 && parts.confidence_level < 1.0) {
            return Err(fail(format!(
                "confidence level out of range: {}",
                parts.confidence_level
            )));
        }
        let m = parts.metrics;
        for (name, value) in [
            ("expected_skill_gain", m.expected_skill_gain),
            ("peer_synergy_score", m.peer_synergy_score),
            ("goal_alignment_score", m.goal_alignment_score),
        ] {
            if !value.is_finite() || !(0.0..=PROFICIENCY_MAX).contains(&value) {
                return Err(fail(format!("{name} out of range: {value}")));
            }
        }

        Ok(Self {
            degraded: parts.trial_count < parts.requested_trials,
            simulation_id: parts.simulation_id,
            user_id: parts.user_id,
            project_id: parts.project_id,
            project_name: parts.project_name,
            success_probability: p,
            confidence_interval: ci,
            confidence_level: parts.confidence_level,
            metrics: m,
            trial_count: parts.trial_count,
            requested_trials: parts.requested_trials,
            seed: parts.seed,
        })
    }

    pub fn simulation_id(&self) -> &str {
        &self.simulation_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    pub fn confidence_interval(&self) -> ConfidenceInterval {
        self.confidence_interval
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn metrics(&self) -> SimulationMetrics {
        self.metrics
    }

    /// Trials actually executed.
    pub fn trial_count(&self) -> u32 {
        self.trial_count
    }

    pub fn requested_trials(&self) -> u32 {
        self.requested_trials
    }

    /// Per-project seed the trial stream was drawn from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// True when a deadline or cancellation cut the trial loop short.
    pub fn degraded(&self) -> bool {
        self.degraded
    }
}

/// Why a project is absent from the ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MissingData,
    ComputationTimeout,
    InternalComputation,
    Cancelled,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingData => "MISSING_DATA",
            Self::ComputationTimeout => "COMPUTATION_TIMEOUT",
            Self::InternalComputation => "INTERNAL_COMPUTATION",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A project that could not be evaluated, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectError {
    pub project_id: ProjectId,
    pub kind: ErrorKind,
    pub message: String,
}

impl ProjectError {
    /// Convert a per-project engine error into an error entry.
    ///
    /// Returns `None` for request-level errors (`InvalidInput`), which abort
    /// the whole call instead of being collected.
    pub fn from_error(error: &SimulationError) -> Option<Self> {
        Some(Self {
            project_id: error.project_id()?,
            kind: error.kind()?,
            message: error.to_string(),
        })
    }
}

/// Ranked results plus error entries for one `simulate` call. Terminal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationBatchResult {
    user_id: UserId,
    base_seed: u64,
    results: Vec<SimulationResult>,
    errors: Vec<ProjectError>,
    duration_ms: u64,
}

impl SimulationBatchResult {
    /// `results` must already be ranked; `errors` are kept in the given order.
    pub fn new(
        user_id: UserId,
        base_seed: u64,
        results: Vec<SimulationResult>,
        errors: Vec<ProjectError>,
        duration_ms: u64,
    ) -> Self {
        Self {
            user_id,
            base_seed,
            results,
            errors,
            duration_ms,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Completed results, best first.
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    pub fn errors(&self) -> &[ProjectError] {
        &self.errors
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// True if every candidate project produced a result.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn result_for(&self, project_id: ProjectId) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.project_id == project_id)
    }

    pub fn error_for(&self, project_id: ProjectId) -> Option<&ProjectError> {
        self.errors.iter().find(|e| e.project_id == project_id)
    }

    /// The top-ranked result, if any project completed.
    pub fn best(&self) -> Option<&SimulationResult> {
        self.results.first()
    }

    pub fn into_parts(self) -> (Vec<SimulationResult>, Vec<ProjectError>) {
        (self.results, self.errors)
    }
}

/// Response envelope for a single result, stamped at publication time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(flatten)]
    pub result: SimulationResult,
    /// Unix timestamp (seconds) at which the record was produced.
    pub timestamp: i64,
}

impl ResultRecord {
    pub fn new(result: SimulationResult, timestamp: i64) -> Self {
        Self { result, timestamp }
    }
}
