//! SynergyProvider trait.

use crate::errors::ProviderError;
use crate::model::SynergyProfile;
use crate::types::{ProjectId, UserId};

/// Source of baseline peer synergy for a (user, project) pair.
pub trait SynergyProvider: Send + Sync {
    fn synergy_profile(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> Result<SynergyProfile, ProviderError>;
}
