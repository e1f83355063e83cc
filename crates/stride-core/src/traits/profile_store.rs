//! ProfileStore trait: where skill and requirement vectors come from.

use crate::errors::ProviderError;
use crate::model::{RequirementVector, SkillVector};
use crate::types::{ProjectId, UserId};

/// Source of user skill vectors and project requirement vectors.
///
/// Called from worker-pool threads, once per candidate project, before that
/// project's trial loop starts.
pub trait ProfileStore: Send + Sync {
    fn skill_vector(&self, user_id: UserId) -> Result<SkillVector, ProviderError>;

    fn requirement_vector(&self, project_id: ProjectId) -> Result<RequirementVector, ProviderError>;

    /// Display name for a project. Absent names are not an error.
    fn project_name(&self, project_id: ProjectId) -> Option<String> {
        let _ = project_id;
        None
    }
}
