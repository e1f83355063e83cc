//! Post-simulation publication errors.

use super::error_code::{self, StrideErrorCode};

/// Errors raised by result sinks and recommendation generators.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Persisting simulation {simulation_id} failed: {message}")]
    SinkFailed {
        simulation_id: String,
        message: String,
    },

    #[error("Recommendation for simulation {simulation_id} failed: {message}")]
    RecommendationFailed {
        simulation_id: String,
        message: String,
    },
}

impl StrideErrorCode for PublishError {
    fn error_code(&self) -> &'static str {
        error_code::PUBLISH_ERROR
    }
}
