//! Event payload types for simulation lifecycle events.

use crate::types::{ErrorKind, ProjectId, UserId};

/// Payload for `on_batch_started`.
#[derive(Debug, Clone)]
pub struct BatchStartedEvent {
    pub user_id: UserId,
    pub project_count: usize,
    pub trials_per_project: u32,
    pub base_seed: u64,
}

/// Payload for `on_project_completed`.
#[derive(Debug, Clone)]
pub struct ProjectCompletedEvent {
    pub project_id: ProjectId,
    pub trial_count: u32,
    pub success_probability: f64,
    pub degraded: bool,
    pub duration_ms: u64,
}

/// Payload for `on_project_failed`.
#[derive(Debug, Clone)]
pub struct ProjectFailedEvent {
    pub project_id: ProjectId,
    pub kind: ErrorKind,
    pub message: String,
}

/// Payload for `on_batch_complete`.
#[derive(Debug, Clone)]
pub struct BatchCompleteEvent {
    pub user_id: UserId,
    pub completed: usize,
    pub failed: usize,
    pub duration_ms: u64,
}
