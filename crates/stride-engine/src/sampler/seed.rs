//! Seed derivation and simulation ids. All hashing is xxh3 so seeds and ids
//! are stable across platforms and releases.

use stride_core::model::PriorityWeights;
use stride_core::types::{ProjectId, UserId};
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use super::trial::SamplerSettings;

/// Per-project seed: a hash of (base seed, project id).
///
/// Projects run concurrently and in any order; keying the stream on the
/// project id keeps each one reproducible on its own.
pub fn derive_project_seed(base_seed: u64, project_id: ProjectId) -> u64 {
    xxh3_64_with_seed(&project_id.to_le_bytes(), base_seed)
}

/// Base seed for a request that carries none: a hash of the user id.
pub fn default_base_seed(user_id: UserId) -> u64 {
    xxh3_64(&user_id.to_le_bytes())
}

/// Hash of every non-seed input that shapes a trial stream or its summary:
/// normalized weights, sampler settings, confidence level.
pub fn model_fingerprint(
    weights: &PriorityWeights,
    sampler: &SamplerSettings,
    confidence_level: f64,
) -> u64 {
    let values = [
        weights.skill_growth(),
        weights.peer_synergy(),
        weights.goal_alignment(),
        sampler.growth_factor,
        sampler.growth_spread,
        sampler.synergy_spread,
        sampler.alignment_spread,
        sampler.success_threshold,
        confidence_level,
    ];
    let mut bytes = Vec::with_capacity(values.len() * 8);
    for value in values {
        bytes.extend_from_slice(&value.to_bits().to_le_bytes());
    }
    xxh3_64(&bytes)
}

/// Everything that distinguishes one simulation outcome from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationKey {
    pub user_id: UserId,
    pub project_id: ProjectId,
    pub seed: u64,
    pub requested_trials: u32,
    /// Trials actually executed; a degraded run differs from a full one.
    pub trial_count: u32,
    /// See [`model_fingerprint`].
    pub fingerprint: u64,
}

impl SimulationKey {
    /// Deterministic id: `sim-` followed by 16 hex digits.
    pub fn simulation_id(&self) -> String {
        let mut bytes = [0u8; 40];
        bytes[..8].copy_from_slice(&self.user_id.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.project_id.to_le_bytes());
        bytes[16..24].copy_from_slice(&self.seed.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.requested_trials.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.trial_count.to_le_bytes());
        bytes[32..].copy_from_slice(&self.fingerprint.to_le_bytes());
        format!("sim-{:016x}", xxh3_64(&bytes))
    }
}
