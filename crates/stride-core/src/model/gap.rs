//! Skill gaps between a user and a project, and the per-project scalars
//! derived from them once before any trial runs.

use std::collections::BTreeMap;

use crate::constants::PROFICIENCY_MAX;
use crate::types::SkillId;

use super::vectors::{RequirementVector, SkillVector};

/// Per-skill shortfall: `max(0, required - current)` for every required skill.
///
/// Skills absent from the user's vector count as current = 0. Skills the user
/// has but the project does not require are ignored.
pub fn skill_gap(skills: &SkillVector, requirements: &RequirementVector) -> BTreeMap<SkillId, f64> {
    requirements
        .iter()
        .map(|(skill, req)| {
            let current = skills.proficiency_or_zero(skill.as_str());
            (skill.clone(), (req.required - current).max(0.0))
        })
        .collect()
}

/// Importance-weighted mean gap. 0 means every requirement is met.
///
/// Importances are read from `requirements`; a gap for a skill the
/// requirement vector does not list carries no weight. When the total
/// importance is zero the plain mean is used instead.
pub fn weighted_gap_magnitude(gaps: &BTreeMap<SkillId, f64>, requirements: &RequirementVector) -> f64 {
    if gaps.is_empty() {
        return 0.0;
    }

    let mut weighted = 0.0;
    let mut total_importance = 0.0;
    for (skill, gap) in gaps {
        let importance = requirements
            .get(skill.as_str())
            .map(|r| r.importance)
            .unwrap_or(0.0);
        weighted += gap * importance;
        total_importance += importance;
    }

    if total_importance > 0.0 {
        weighted / total_importance
    } else {
        gaps.values().sum::<f64>() / gaps.len() as f64
    }
}

/// Goal-alignment baseline on the [0, 10] scale.
///
/// 10 × the importance-weighted mean of `min(current / required, 1)`. A
/// requirement of 0 counts as fully met; a project with no requirements is a
/// perfect fit.
pub fn alignment_baseline(skills: &SkillVector, requirements: &RequirementVector) -> f64 {
    if requirements.is_empty() {
        return PROFICIENCY_MAX;
    }

    let total_importance = requirements.total_importance();
    let use_importance = total_importance > 0.0;

    let mut fit_sum = 0.0;
    for (skill, req) in requirements.iter() {
        let current = skills.proficiency_or_zero(skill.as_str());
        let fit = if req.required <= 0.0 {
            1.0
        } else {
            (current / req.required).min(1.0)
        };
        let weight = if use_importance { req.importance } else { 1.0 };
        fit_sum += fit * weight;
    }

    let denom = if use_importance {
        total_importance
    } else {
        requirements.len() as f64
    };
    (PROFICIENCY_MAX * fit_sum / denom).clamp(0.0, PROFICIENCY_MAX)
}

/// The two scalars a project contributes to every one of its trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectFit {
    /// Importance-weighted mean gap, in proficiency points.
    pub gap_magnitude: f64,
    /// Goal-alignment baseline in [0, 10].
    pub alignment_baseline: f64,
}

impl ProjectFit {
    pub fn evaluate(skills: &SkillVector, requirements: &RequirementVector) -> Self {
        let gaps = skill_gap(skills, requirements);
        Self {
            gap_magnitude: weighted_gap_magnitude(&gaps, requirements),
            alignment_baseline: alignment_baseline(skills, requirements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Requirement;

    fn java_cloud() -> (SkillVector, RequirementVector) {
        let skills = SkillVector::new([("java", 6.0), ("cloud", 3.0)]).unwrap();
        let reqs = RequirementVector::new([
            ("java", Requirement::new(8.0, 1.0)),
            ("cloud", Requirement::new(7.0, 1.0)),
        ])
        .unwrap();
        (skills, reqs)
    }

    #[test]
    fn test_skill_gap_per_required_skill() {
        let (skills, reqs) = java_cloud();
        let gaps = skill_gap(&skills, &reqs);
        assert_eq!(gaps.get("java"), Some(&2.0));
        assert_eq!(gaps.get("cloud"), Some(&4.0));
        assert_eq!(gaps.len(), 2);
    }

    #[test]
    fn test_missing_skill_counts_as_zero() {
        let skills = SkillVector::new([("java", 9.0)]).unwrap();
        let reqs = RequirementVector::new([("rust", Requirement::new(5.0, 1.0))]).unwrap();
        assert_eq!(skill_gap(&skills, &reqs).get("rust"), Some(&5.0));
    }

    #[test]
    fn test_exceeding_requirement_is_zero_gap() {
        let skills = SkillVector::new([("java", 9.0)]).unwrap();
        let reqs = RequirementVector::new([("java", Requirement::new(5.0, 1.0))]).unwrap();
        let gaps = skill_gap(&skills, &reqs);
        assert_eq!(weighted_gap_magnitude(&gaps, &reqs), 0.0);
    }

    #[test]
    fn test_weighted_gap_magnitude_uses_importance() {
        let skills = SkillVector::new([("java", 6.0), ("cloud", 3.0)]).unwrap();
        let reqs = RequirementVector::new([
            ("java", Requirement::new(8.0, 3.0)),
            ("cloud", Requirement::new(7.0, 1.0)),
        ])
        .unwrap();
        let gaps = skill_gap(&skills, &reqs);
        // (2*3 + 4*1) / 4
        assert!((weighted_gap_magnitude(&gaps, &reqs) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_importance_falls_back_to_plain_mean() {
        let skills = SkillVector::default();
        let reqs = RequirementVector::new([
            ("a", Requirement::new(2.0, 0.0)),
            ("b", Requirement::new(4.0, 0.0)),
        ])
        .unwrap();
        let gaps = skill_gap(&skills, &reqs);
        assert!((weighted_gap_magnitude(&gaps, &reqs) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_alignment_baseline_partial_fit() {
        let (skills, reqs) = java_cloud();
        let expected = 10.0 * (6.0 / 8.0 + 3.0 / 7.0) / 2.0;
        assert!((alignment_baseline(&skills, &reqs) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_alignment_baseline_full_fit_and_empty() {
        let skills = SkillVector::new([("java", 10.0)]).unwrap();
        let reqs = RequirementVector::new([("java", Requirement::new(4.0, 1.0))]).unwrap();
        assert_eq!(alignment_baseline(&skills, &reqs), 10.0);
        assert_eq!(alignment_baseline(&skills, &RequirementVector::default()), 10.0);
    }

    #[test]
    fn test_project_fit_evaluate() {
        let (skills, reqs) = java_cloud();
        let fit = ProjectFit::evaluate(&skills, &reqs);
        assert!((fit.gap_magnitude - 3.0).abs() < 1e-12);
        assert!(fit.alignment_baseline > 5.0 && fit.alignment_baseline < 6.0);
    }
}
