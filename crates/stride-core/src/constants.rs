//! Shared constants for the Stride simulation engine.

/// Stride version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of every proficiency, synergy, and alignment scale.
pub const PROFICIENCY_MAX: f64 = 10.0;

/// Tolerance for normalized priority weights summing to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Default number of trials per project.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Hard ceiling on trials per project.
pub const DEFAULT_MAX_TRIALS: u32 = 1_000_000;

/// Default mean skill growth as a fraction of the gap magnitude.
pub const DEFAULT_SKILL_GROWTH_FACTOR: f64 = 0.15;

/// Default skill-growth standard deviation relative to its mean.
pub const DEFAULT_GROWTH_SPREAD: f64 = 0.5;

/// Default synergy standard deviation for a pair with no interaction history.
pub const DEFAULT_SYNERGY_SPREAD: f64 = 2.0;

/// Default goal-alignment standard deviation.
pub const DEFAULT_ALIGNMENT_SPREAD: f64 = 1.5;

/// Default composite score at or above which a trial counts as a success.
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 0.6;

/// Default two-sided confidence level for the success interval.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of trials between deadline/cancellation checks.
pub const DEFAULT_DEADLINE_CHECK_INTERVAL: u32 = 1_024;

/// Default worker threads (0 = auto-detect).
pub const DEFAULT_WORKER_THREADS: usize = 0;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "stride.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "STRIDE_LOG";
