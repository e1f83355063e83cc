//! Simulation engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ConfigError;

/// Configuration for the simulation engine.
///
/// Every field is optional so layers can be merged; use the `effective_*`
/// accessors (or [`EngineConfig::settings`]) to read resolved values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Trials per project when a request does not specify one. Default: 10,000.
    pub default_trials: Option<u32>,
    /// Largest trial count a request may ask for. Default: 1,000,000.
    pub max_trials: Option<u32>,
    /// Mean skill growth as a fraction of the gap magnitude. Default: 0.15.
    pub skill_growth_factor: Option<f64>,
    /// Skill-growth standard deviation relative to its mean. Default: 0.5.
    pub growth_spread: Option<f64>,
    /// Synergy standard deviation with no interaction history. Default: 2.0.
    pub synergy_spread: Option<f64>,
    /// Goal-alignment standard deviation. Default: 1.5.
    pub alignment_spread: Option<f64>,
    /// Composite score needed for a trial to succeed. Default: 0.6.
    pub success_threshold: Option<f64>,
    /// Two-sided confidence level of the success interval. Default: 0.95.
    pub confidence_level: Option<f64>,
    /// Trials between deadline/cancellation checks. Default: 1,024.
    pub deadline_check_interval: Option<u32>,
    /// Worker pool size (0 = one per CPU). Default: 0.
    pub worker_threads: Option<usize>,
    /// Base seed used when a request does not carry one.
    pub base_seed: Option<u64>,
}

impl EngineConfig {
    pub fn effective_default_trials(&self) -> u32 {
        self.default_trials.unwrap_or(DEFAULT_TRIALS)
    }

    pub fn effective_max_trials(&self) -> u32 {
        self.max_trials.unwrap_or(DEFAULT_MAX_TRIALS)
    }

    pub fn effective_skill_growth_factor(&self) -> f64 {
        self.skill_growth_factor.unwrap_or(DEFAULT_SKILL_GROWTH_FACTOR)
    }

    pub fn effective_growth_spread(&self) -> f64 {
        self.growth_spread.unwrap_or(DEFAULT_GROWTH_SPREAD)
    }

    pub fn effective_synergy_spread(&self) -> f64 {
        self.synergy_spread.unwrap_or(DEFAULT_SYNERGY_SPREAD)
    }

    pub fn effective_alignment_spread(&self) -> f64 {
        self.alignment_spread.unwrap_or(DEFAULT_ALIGNMENT_SPREAD)
    }

    pub fn effective_success_threshold(&self) -> f64 {
        self.success_threshold.unwrap_or(DEFAULT_SUCCESS_THRESHOLD)
    }

    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level.unwrap_or(DEFAULT_CONFIDENCE_LEVEL)
    }

    pub fn effective_deadline_check_interval(&self) -> u32 {
        self.deadline_check_interval
            .unwrap_or(DEFAULT_DEADLINE_CHECK_INTERVAL)
    }

    pub fn effective_worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or(DEFAULT_WORKER_THREADS)
    }

    /// Validate the configured values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |field: &str, message: &str| {
            Err(ConfigError::OutOfRange {
                field: format!("engine.{field}"),
                message: message.to_string(),
            })
        };

        if let Some(t) = self.success_threshold {
            if !(0.0..=1.0).contains(&t) {
                return fail("success_threshold", "must be between 0.0 and 1.0");
            }
        }
        if let Some(level) = self.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return fail("confidence_level", "must be strictly between 0.0 and 1.0");
            }
        }
        for (field, value) in [
            ("skill_growth_factor", self.skill_growth_factor),
            ("growth_spread", self.growth_spread),
            ("synergy_spread", self.synergy_spread),
            ("alignment_spread", self.alignment_spread),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return fail(field, "must be finite and >= 0");
                }
            }
        }
        if self.max_trials == Some(0) {
            return fail("max_trials", "must be greater than 0");
        }
        let default_trials = self.effective_default_trials();
        if default_trials == 0 || default_trials > self.effective_max_trials() {
            return fail("default_trials", "must be between 1 and max_trials");
        }
        if self.deadline_check_interval == Some(0) {
            return fail("deadline_check_interval", "must be greater than 0");
        }
        Ok(())
    }

    /// Resolve every field to its effective value.
    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            default_trials: self.effective_default_trials(),
            max_trials: self.effective_max_trials(),
            skill_growth_factor: self.effective_skill_growth_factor(),
            growth_spread: self.effective_growth_spread(),
            synergy_spread: self.effective_synergy_spread(),
            alignment_spread: self.effective_alignment_spread(),
            success_threshold: self.effective_success_threshold(),
            confidence_level: self.effective_confidence_level(),
            deadline_check_interval: self.effective_deadline_check_interval(),
            worker_threads: self.effective_worker_threads(),
            base_seed: self.base_seed,
        }
    }
}

/// Fully resolved engine settings. Read-only once the engine is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    pub default_trials: u32,
    pub max_trials: u32,
    pub skill_growth_factor: f64,
    pub growth_spread: f64,
    pub synergy_spread: f64,
    pub alignment_spread: f64,
    pub success_threshold: f64,
    pub confidence_level: f64,
    pub deadline_check_interval: u32,
    pub worker_threads: usize,
    pub base_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineConfig::default().settings()
    }
}
