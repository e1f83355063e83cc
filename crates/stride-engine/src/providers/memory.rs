//! Map-backed profile store, synergy provider, and result sink.

use std::sync::Mutex;

use rustc_hash::FxHashMap;
use stride_core::errors::{ProviderError, PublishError};
use stride_core::model::{RequirementVector, SkillVector, SynergyProfile};
use stride_core::traits::{ProfileStore, ResultSink, SynergyProvider};
use stride_core::types::{ProjectId, ResultRecord, UserId};

/// Profiles and synergy held in memory.
///
/// A (user, project) pair without an explicit synergy profile falls back to
/// the default profile if one is set, and is a lookup failure otherwise.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    skills: FxHashMap<UserId, SkillVector>,
    requirements: FxHashMap<ProjectId, RequirementVector>,
    names: FxHashMap<ProjectId, String>,
    synergy: FxHashMap<(UserId, ProjectId), SynergyProfile>,
    default_synergy: Option<SynergyProfile>,
}

impl InMemoryProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skills(mut self, user_id: UserId, skills: SkillVector) -> Self {
        self.skills.insert(user_id, skills);
        self
    }

    pub fn with_project(mut self, project_id: ProjectId, requirements: RequirementVector) -> Self {
        self.requirements.insert(project_id, requirements);
        self
    }

    pub fn with_project_name(mut self, project_id: ProjectId, name: impl Into<String>) -> Self {
        self.names.insert(project_id, name.into());
        self
    }

    pub fn with_synergy(
        mut self,
        user_id: UserId,
        project_id: ProjectId,
        profile: SynergyProfile,
    ) -> Self {
        self.synergy.insert((user_id, project_id), profile);
        self
    }

    pub fn with_default_synergy(mut self, profile: SynergyProfile) -> Self {
        self.default_synergy = Some(profile);
        self
    }
}

impl ProfileStore for InMemoryProfiles {
    fn skill_vector(&self, user_id: UserId) -> Result<SkillVector, ProviderError> {
        self.skills
            .get(&user_id)
            .cloned()
            .ok_or(ProviderError::SkillVectorNotFound { user_id })
    }

    fn requirement_vector(&self, project_id: ProjectId) -> Result<RequirementVector, ProviderError> {
        self.requirements
            .get(&project_id)
            .cloned()
            .ok_or(ProviderError::RequirementVectorNotFound { project_id })
    }

    fn project_name(&self, project_id: ProjectId) -> Option<String> {
        self.names.get(&project_id).cloned()
    }
}

impl SynergyProvider for InMemoryProfiles {
    fn synergy_profile(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> Result<SynergyProfile, ProviderError> {
        self.synergy
            .get(&(user_id, project_id))
            .or(self.default_synergy.as_ref())
            .copied()
            .ok_or(ProviderError::SynergyProfileNotFound { user_id, project_id })
    }
}

/// Sink that keeps every persisted record.
#[derive(Debug, Default)]
pub struct InMemoryResultSink {
    records: Mutex<Vec<ResultRecord>>,
}

impl InMemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything persisted so far, in persist order.
    pub fn records(&self) -> Vec<ResultRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultSink for InMemoryResultSink {
    fn persist(&self, record: &ResultRecord) -> Result<(), PublishError> {
        let mut records = self.records.lock().map_err(|_| PublishError::SinkFailed {
            simulation_id: record.result.simulation_id().to_string(),
            message: "result store lock poisoned".to_string(),
        })?;
        records.push(record.clone());
        Ok(())
    }
}
