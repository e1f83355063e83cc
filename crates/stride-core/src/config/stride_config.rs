//! Top-level Stride configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::EngineConfig;
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`STRIDE_*`)
/// 3. Project config (`stride.toml` in the project root)
/// 4. User config (`~/.stride/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StrideConfig {
    pub engine: EngineConfig,
}

/// Programmatic overrides that win over every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub default_trials: Option<u32>,
    pub max_trials: Option<u32>,
    pub skill_growth_factor: Option<f64>,
    pub growth_spread: Option<f64>,
    pub synergy_spread: Option<f64>,
    pub alignment_spread: Option<f64>,
    pub success_threshold: Option<f64>,
    pub confidence_level: Option<f64>,
    pub deadline_check_interval: Option<u32>,
    pub worker_threads: Option<usize>,
    pub base_seed: Option<u64>,
}

impl StrideConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::Malformed { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Malformed {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &StrideConfig) -> Result<(), ConfigError> {
        config.engine.validate()
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut StrideConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let file_config: StrideConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut StrideConfig, other: &StrideConfig) {
        let (b, o) = (&mut base.engine, &other.engine);
        b.default_trials = o.default_trials.or(b.default_trials);
        b.max_trials = o.max_trials.or(b.max_trials);
        b.skill_growth_factor = o.skill_growth_factor.or(b.skill_growth_factor);
        b.growth_spread = o.growth_spread.or(b.growth_spread);
        b.synergy_spread = o.synergy_spread.or(b.synergy_spread);
        b.alignment_spread = o.alignment_spread.or(b.alignment_spread);
        b.success_threshold = o.success_threshold.or(b.success_threshold);
        b.confidence_level = o.confidence_level.or(b.confidence_level);
        b.deadline_check_interval = o.deadline_check_interval.or(b.deadline_check_interval);
        b.worker_threads = o.worker_threads.or(b.worker_threads);
        b.base_seed = o.base_seed.or(b.base_seed);
    }

    /// Apply environment variable overrides.
    /// Pattern: `STRIDE_ENGINE_DEFAULT_TRIALS`, `STRIDE_ENGINE_SUCCESS_THRESHOLD`, etc.
    fn apply_env_overrides(config: &mut StrideConfig) -> Result<(), ConfigError> {
        let engine = &mut config.engine;
        if let Some(v) = env_value("STRIDE_ENGINE_DEFAULT_TRIALS")? {
            engine.default_trials = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_MAX_TRIALS")? {
            engine.max_trials = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_SKILL_GROWTH_FACTOR")? {
            engine.skill_growth_factor = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_GROWTH_SPREAD")? {
            engine.growth_spread = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_SYNERGY_SPREAD")? {
            engine.synergy_spread = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_ALIGNMENT_SPREAD")? {
            engine.alignment_spread = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_SUCCESS_THRESHOLD")? {
            engine.success_threshold = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_CONFIDENCE_LEVEL")? {
            engine.confidence_level = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_DEADLINE_CHECK_INTERVAL")? {
            engine.deadline_check_interval = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_WORKER_THREADS")? {
            engine.worker_threads = Some(v);
        }
        if let Some(v) = env_value("STRIDE_ENGINE_BASE_SEED")? {
            engine.base_seed = Some(v);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut StrideConfig, overrides: &ConfigOverrides) {
        let layer = StrideConfig {
            engine: EngineConfig {
                default_trials: overrides.default_trials,
                max_trials: overrides.max_trials,
                skill_growth_factor: overrides.skill_growth_factor,
                growth_spread: overrides.growth_spread,
                synergy_spread: overrides.synergy_spread,
                alignment_spread: overrides.alignment_spread,
                success_threshold: overrides.success_threshold,
                confidence_level: overrides.confidence_level,
                deadline_check_interval: overrides.deadline_check_interval,
                worker_threads: overrides.worker_threads,
                base_seed: overrides.base_seed,
            },
        };
        Self::merge(config, &layer);
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}

/// Read and parse an environment variable. Unset is `Ok(None)`; a value
/// that does not parse is an error rather than a silent fallback.
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::BadEnvVar {
                key: key.to_string(),
                message: e.to_string(),
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

/// Returns the user-level stride config directory: `~/.stride/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".stride"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
