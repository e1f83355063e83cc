//! Skill vectors, requirement vectors, and synergy profiles.
//!
//! All three validate on construction (and on deserialization), so the
//! engine never sees a proficiency outside [0, 10] or a negative importance.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::PROFICIENCY_MAX;
use crate::errors::ModelError;
use crate::types::SkillId;

fn check_proficiency(skill: &SkillId, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && (0.0..=PROFICIENCY_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::ProficiencyOutOfRange {
            skill: skill.to_string(),
            value,
        })
    }
}

/// A user's current proficiency per skill, each in [0, 10].
///
/// Backed by a `BTreeMap` so iteration (and every floating-point sum over it)
/// happens in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<SkillId, f64>", into = "BTreeMap<SkillId, f64>")]
pub struct SkillVector {
    levels: BTreeMap<SkillId, f64>,
}

impl SkillVector {
    /// Build a skill vector. Later duplicates of a key replace earlier ones.
    pub fn new<I, K>(levels: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<SkillId>,
    {
        let mut map = BTreeMap::new();
        for (skill, value) in levels {
            let skill = skill.into();
            check_proficiency(&skill, value)?;
            map.insert(skill, value);
        }
        Ok(Self { levels: map })
    }

    pub fn proficiency(&self, skill: &str) -> Option<f64> {
        self.levels.get(skill).copied()
    }

    /// Proficiency in `skill`, treating an absent skill as 0.
    pub fn proficiency_or_zero(&self, skill: &str) -> f64 {
        self.proficiency(skill).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkillId, f64)> {
        self.levels.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl TryFrom<BTreeMap<SkillId, f64>> for SkillVector {
    type Error = ModelError;

    fn try_from(levels: BTreeMap<SkillId, f64>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<SkillVector> for BTreeMap<SkillId, f64> {
    fn from(vector: SkillVector) -> Self {
        vector.levels
    }
}

/// Required proficiency for one skill and how much it matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Required proficiency in [0, 10].
    pub required: f64,
    /// Relative importance, >= 0.
    pub importance: f64,
}

impl Requirement {
    pub const fn new(required: f64, importance: f64) -> Self {
        Self {
            required,
            importance,
        }
    }
}

/// A project's required proficiency and importance per skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<SkillId, Requirement>",
    into = "BTreeMap<SkillId, Requirement>"
)]
pub struct RequirementVector {
    requirements: BTreeMap<SkillId, Requirement>,
}

impl RequirementVector {
    pub fn new<I, K>(requirements: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (K, Requirement)>,
        K: Into<SkillId>,
    {
        let mut map = BTreeMap::new();
        for (skill, requirement) in requirements {
            let skill = skill.into();
            check_proficiency(&skill, requirement.required)?;
            if !requirement.importance.is_finite() || requirement.importance < 0.0 {
                return Err(ModelError::InvalidImportance {
                    skill: skill.to_string(),
                    value: requirement.importance,
                });
            }
            map.insert(skill, requirement);
        }
        Ok(Self { requirements: map })
    }

    pub fn get(&self, skill: &str) -> Option<&Requirement> {
        self.requirements.get(skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SkillId, &Requirement)> {
        self.requirements.iter()
    }

    /// Sum of all importance weights.
    pub fn total_importance(&self) -> f64 {
        self.requirements.values().map(|r| r.importance).sum()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl TryFrom<BTreeMap<SkillId, Requirement>> for RequirementVector {
    type Error = ModelError;

    fn try_from(requirements: BTreeMap<SkillId, Requirement>) -> Result<Self, Self::Error> {
        Self::new(requirements)
    }
}

impl From<RequirementVector> for BTreeMap<SkillId, Requirement> {
    fn from(vector: RequirementVector) -> Self {
        vector.requirements
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynergyProfileRepr {
    baseline: f64,
    #[serde(default)]
    interaction_count: u64,
}

/// Baseline synergy for a (user, project) pair and how well it is evidenced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyProfile {
    baseline: f64,
    interaction_count: u64,
}

impl SynergyProfile {
    pub fn new(baseline: f64, interaction_count: u64) -> Result<Self, ModelError> {
        if !baseline.is_finite() || !(0.0..=PROFICIENCY_MAX).contains(&baseline) {
            return Err(ModelError::SynergyOutOfRange { value: baseline });
        }
        Ok(Self {
            baseline,
            interaction_count,
        })
    }

    /// Baseline synergy score in [0, 10].
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Number of historical interactions backing the baseline.
    pub fn interaction_count(&self) -> u64 {
        self.interaction_count
    }
}

impl<'de> Deserialize<'de> for SynergyProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = SynergyProfileRepr::deserialize(deserializer)?;
        Self::new(repr.baseline, repr.interaction_count).map_err(serde::de::Error::custom)
    }
}
