//! Structured span field names for Stride metrics.
//!
//! Using consistent field names across crates keeps log queries stable.

/// Orchestrator: number of candidate projects in a batch.
pub const BATCH_PROJECT_COUNT: &str = "batch_project_count";

/// Orchestrator: batch wall time in milliseconds.
pub const BATCH_DURATION_MS: &str = "batch_duration_ms";

/// Orchestrator: projects that produced a result.
pub const BATCH_COMPLETED: &str = "batch_completed";

/// Orchestrator: projects recorded as error entries.
pub const BATCH_FAILED: &str = "batch_failed";

/// Per project: trials actually executed.
pub const TRIALS_EXECUTED: &str = "trials_executed";

/// Per project: trials per second of the trial loop.
pub const TRIALS_PER_SECOND: &str = "trials_per_second";

/// Per project: estimated success probability.
pub const SUCCESS_PROBABILITY: &str = "success_probability";
