//! Collaborator lookup errors.

use super::error_code::{self, StrideErrorCode};
use super::ModelError;
use crate::types::{ProjectId, UserId};

/// Errors returned by profile stores and synergy providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Skill vector not found for user {user_id}")]
    SkillVectorNotFound { user_id: UserId },

    #[error("Requirement vector not found for project {project_id}")]
    RequirementVectorNotFound { project_id: ProjectId },

    #[error("Synergy profile not found for user {user_id} and project {project_id}")]
    SynergyProfileNotFound {
        user_id: UserId,
        project_id: ProjectId,
    },

    #[error("Invalid profile data: {0}")]
    InvalidData(#[from] ModelError),

    #[error("Provider unavailable: {message}")]
    Unavailable { message: String },
}

impl StrideErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        error_code::MISSING_DATA
    }
}
