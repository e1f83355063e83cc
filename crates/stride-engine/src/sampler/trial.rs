//! One trial: sample skill growth, synergy, and alignment, combine them
//! into a composite score, and decide success.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use stride_core::config::EngineSettings;
use stride_core::constants::PROFICIENCY_MAX;
use stride_core::model::{PriorityWeights, ProjectFit, SynergyProfile};

/// Distribution shape and success rule shared by every trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    /// Mean growth as a fraction of the gap magnitude.
    pub growth_factor: f64,
    /// Growth standard deviation relative to its mean.
    pub growth_spread: f64,
    /// Synergy standard deviation at zero interactions.
    pub synergy_spread: f64,
    pub alignment_spread: f64,
    pub success_threshold: f64,
}

impl From<&EngineSettings> for SamplerSettings {
    fn from(settings: &EngineSettings) -> Self {
        Self {
            growth_factor: settings.skill_growth_factor,
            growth_spread: settings.growth_spread,
            synergy_spread: settings.synergy_spread,
            alignment_spread: settings.alignment_spread,
            success_threshold: settings.success_threshold,
        }
    }
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self::from(&EngineSettings::default())
    }
}

/// Per-project inputs, computed once before the trial loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialParams {
    pub gap_magnitude: f64,
    pub synergy_baseline: f64,
    pub interaction_count: u64,
    pub alignment_baseline: f64,
}

impl TrialParams {
    pub fn new(fit: ProjectFit, synergy: &SynergyProfile) -> Self {
        Self {
            gap_magnitude: fit.gap_magnitude,
            synergy_baseline: synergy.baseline(),
            interaction_count: synergy.interaction_count(),
            alignment_baseline: fit.alignment_baseline,
        }
    }
}

/// Values drawn for a single trial. Never stored individually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSample {
    /// Proficiency points gained, in [0, gap magnitude].
    pub skill_growth: f64,
    /// Realized synergy in [0, 10].
    pub synergy: f64,
    /// Realized goal alignment in [0, 10].
    pub alignment: f64,
    /// Weighted combination of the normalized sub-scores, in [0, 1].
    pub composite_score: f64,
    pub success: bool,
}

/// Seeded trial generator for one project.
///
/// Owns its RNG; it is never reseeded, so trial `n` depends only on the seed
/// and on the inputs.
pub struct TrialSampler {
    rng: ChaCha8Rng,
    params: TrialParams,
    weights: PriorityWeights,
    success_threshold: f64,
    growth_mean: f64,
    growth_std_dev: f64,
    synergy_std_dev: f64,
    alignment_std_dev: f64,
}

impl TrialSampler {
    pub fn new(
        seed: u64,
        params: TrialParams,
        weights: PriorityWeights,
        settings: SamplerSettings,
    ) -> Self {
        let growth_mean = params.gap_magnitude * settings.growth_factor;
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            params,
            weights,
            success_threshold: settings.success_threshold,
            growth_mean,
            growth_std_dev: growth_mean * settings.growth_spread,
            // More history means a better-evidenced baseline.
            synergy_std_dev: settings.synergy_spread / (1.0 + params.interaction_count as f64),
            alignment_std_dev: settings.alignment_spread,
        }
    }

    /// Draw the next trial.
    pub fn next_trial(&mut self) -> TrialSample {
        let z_growth: f64 = self.rng.sample(StandardNormal);
        let z_synergy: f64 = self.rng.sample(StandardNormal);
        let z_alignment: f64 = self.rng.sample(StandardNormal);

        let skill_growth = (self.growth_mean + self.growth_std_dev * z_growth)
            .clamp(0.0, self.params.gap_magnitude);
        let synergy = (self.params.synergy_baseline + self.synergy_std_dev * z_synergy)
            .clamp(0.0, PROFICIENCY_MAX);
        let alignment = (self.params.alignment_baseline + self.alignment_std_dev * z_alignment)
            .clamp(0.0, PROFICIENCY_MAX);

        let composite_score = self.weights.skill_growth() * normalize(skill_growth)
            + self.weights.peer_synergy() * normalize(synergy)
            + self.weights.goal_alignment() * normalize(alignment);

        TrialSample {
            skill_growth,
            synergy,
            alignment,
            composite_score,
            success: composite_score >= self.success_threshold,
        }
    }

    pub fn params(&self) -> &TrialParams {
        &self.params
    }
}

impl Iterator for TrialSampler {
    type Item = TrialSample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_trial())
    }
}

/// Rescale a [0, 10] sub-score to [0, 1].
// Growth is scaled against the proficiency scale, not the gap, so a small gap
// cannot saturate its sub-score and a zero gap contributes exactly zero.
fn normalize(value: f64) -> f64 {
    value / PROFICIENCY_MAX
}
