//! Vector and weight validation errors.

use super::error_code::{self, StrideErrorCode};

/// Errors raised while constructing skill vectors, requirement vectors,
/// synergy profiles, or priority weights.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid weight for {priority}: {value} (must be finite and >= 0)")]
    InvalidWeight { priority: &'static str, value: f64 },

    #[error("All priority weights are zero")]
    AllWeightsZero,

    #[error("Unknown priority key: {key}")]
    UnknownPriority { key: String },

    #[error("Duplicate priority key: {key}")]
    DuplicatePriority { key: String },

    #[error("Proficiency for skill {skill} out of range [0, 10]: {value}")]
    ProficiencyOutOfRange { skill: String, value: f64 },

    #[error("Importance for skill {skill} must be finite and >= 0: {value}")]
    InvalidImportance { skill: String, value: f64 },

    #[error("Synergy baseline out of range [0, 10]: {value}")]
    SynergyOutOfRange { value: f64 },
}

impl StrideErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
