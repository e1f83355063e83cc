//! Engine error taxonomy.

use super::error_code::{self, StrideErrorCode};
use super::{ModelError, ProviderError};
use crate::types::{ErrorKind, ProjectId};

/// Errors produced by the simulation engine.
///
/// `InvalidInput` aborts the whole call. Every other variant is scoped to one
/// project and is collected into the batch result alongside successes.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Missing data for project {project_id}: {source}")]
    MissingData {
        project_id: ProjectId,
        source: ProviderError,
    },

    #[error("Project {project_id} timed out before any trial completed")]
    ComputationTimeout { project_id: ProjectId },

    #[error("Internal computation error for project {project_id}: {message}")]
    InternalComputation {
        project_id: ProjectId,
        message: String,
    },

    #[error("Project {project_id} cancelled before any trial completed")]
    Cancelled { project_id: ProjectId },
}

impl SimulationError {
    /// Convenience constructor for request-level validation failures.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// The project this error is scoped to, `None` for request-level errors.
    pub fn project_id(&self) -> Option<ProjectId> {
        match self {
            Self::InvalidInput { .. } => None,
            Self::MissingData { project_id, .. }
            | Self::ComputationTimeout { project_id }
            | Self::InternalComputation { project_id, .. }
            | Self::Cancelled { project_id } => Some(*project_id),
        }
    }

    /// Per-project error kind, `None` for request-level errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidInput { .. } => None,
            Self::MissingData { .. } => Some(ErrorKind::MissingData),
            Self::ComputationTimeout { .. } => Some(ErrorKind::ComputationTimeout),
            Self::InternalComputation { .. } => Some(ErrorKind::InternalComputation),
            Self::Cancelled { .. } => Some(ErrorKind::Cancelled),
        }
    }
}

impl From<ModelError> for SimulationError {
    fn from(error: ModelError) -> Self {
        Self::InvalidInput {
            message: error.to_string(),
        }
    }
}

impl StrideErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::MissingData { .. } => error_code::MISSING_DATA,
            Self::ComputationTimeout { .. } => error_code::COMPUTATION_TIMEOUT,
            Self::InternalComputation { .. } => error_code::INTERNAL_COMPUTATION,
            Self::Cancelled { .. } => error_code::CANCELLED,
        }
    }
}
