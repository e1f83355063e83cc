//! Priority weights: a closed three-way enumeration, normalized on construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ModelError;

/// The three things a user can prioritize when choosing a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    SkillGrowth,
    PeerSynergy,
    GoalAlignment,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::SkillGrowth, Self::PeerSynergy, Self::GoalAlignment];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SkillGrowth => "SKILL_GROWTH",
            Self::PeerSynergy => "PEER_SYNERGY",
            Self::GoalAlignment => "GOAL_ALIGNMENT",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    /// Accepts `SKILL_GROWTH`, `skill_growth`, `skillGrowth`, and `skill-growth`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let folded: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "skillgrowth" => Ok(Self::SkillGrowth),
            "peersynergy" => Ok(Self::PeerSynergy),
            "goalalignment" => Ok(Self::GoalAlignment),
            _ => Err(ModelError::UnknownPriority {
                key: key.to_string(),
            }),
        }
    }
}

/// Un-normalized weights as supplied by a request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct RawWeights {
    pub skill_growth: f64,
    pub peer_synergy: f64,
    pub goal_alignment: f64,
}

impl RawWeights {
    pub const fn new(skill_growth: f64, peer_synergy: f64, goal_alignment: f64) -> Self {
        Self {
            skill_growth,
            peer_synergy,
            goal_alignment,
        }
    }

    pub fn get(&self, priority: Priority) -> f64 {
        match priority {
            Priority::SkillGrowth => self.skill_growth,
            Priority::PeerSynergy => self.peer_synergy,
            Priority::GoalAlignment => self.goal_alignment,
        }
    }

    fn slot(&mut self, priority: Priority) -> &mut f64 {
        match priority {
            Priority::SkillGrowth => &mut self.skill_growth,
            Priority::PeerSynergy => &mut self.peer_synergy,
            Priority::GoalAlignment => &mut self.goal_alignment,
        }
    }
}

/// Normalized priority weights. Each is >= 0 and together they sum to 1.0.
///
/// The only way to obtain one is through normalization, so a
/// `PriorityWeights` value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PriorityWeights {
    skill_growth: f64,
    peer_synergy: f64,
    goal_alignment: f64,
}

impl PriorityWeights {
    /// Normalize raw weights so they sum to 1.0.
    ///
    /// Fails if any weight is negative or non-finite, or if all are zero.
    pub fn normalize(raw: RawWeights) -> Result<Self, ModelError> {
        for priority in Priority::ALL {
            let value = raw.get(priority);
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidWeight {
                    priority: priority.name(),
                    value,
                });
            }
        }

        // Scale by the largest weight first so the sum cannot overflow.
        let max = raw.skill_growth.max(raw.peer_synergy).max(raw.goal_alignment);
        if max <= 0.0 {
            return Err(ModelError::AllWeightsZero);
        }
        let (sg, ps, ga) = (
            raw.skill_growth / max,
            raw.peer_synergy / max,
            raw.goal_alignment / max,
        );
        let sum = sg + ps + ga;

        let weights = Self {
            skill_growth: sg / sum,
            peer_synergy: ps / sum,
            goal_alignment: ga / sum,
        };
        debug_assert!((weights.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
        Ok(weights)
    }

    /// Parse string-keyed weights (`"SKILL_GROWTH" => 0.5`, ...).
    ///
    /// Unknown or repeated keys fail; a missing key counts as 0.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut raw = RawWeights::default();
        let mut seen = [false; 3];
        for (key, value) in entries {
            let priority: Priority = key.parse()?;
            let idx = priority as usize;
            if seen[idx] {
                return Err(ModelError::DuplicatePriority {
                    key: key.to_string(),
                });
            }
            seen[idx] = true;
            *raw.slot(priority) = value;
        }
        Self::normalize(raw)
    }

    /// Equal weight on every priority.
    pub fn equal() -> Self {
        Self {
            skill_growth: 1.0 / 3.0,
            peer_synergy: 1.0 / 3.0,
            goal_alignment: 1.0 / 3.0,
        }
    }

    pub fn get(&self, priority: Priority) -> f64 {
        match priority {
            Priority::SkillGrowth => self.skill_growth,
            Priority::PeerSynergy => self.peer_synergy,
            Priority::GoalAlignment => self.goal_alignment,
        }
    }

    pub fn skill_growth(&self) -> f64 {
        self.skill_growth
    }

    pub fn peer_synergy(&self) -> f64 {
        self.peer_synergy
    }

    pub fn goal_alignment(&self) -> f64 {
        self.goal_alignment
    }

    pub fn sum(&self) -> f64 {
        self.skill_growth + self.peer_synergy + self.goal_alignment
    }
}

impl TryFrom<RawWeights> for PriorityWeights {
    type Error = ModelError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::normalize(raw)
    }
}

/// Free-function form of [`PriorityWeights::normalize`].
pub fn normalize_weights(raw: RawWeights) -> Result<PriorityWeights, ModelError> {
    PriorityWeights::normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_divides_by_sum() {
        let w = normalize_weights(RawWeights::new(2.0, 1.0, 1.0)).unwrap();
        assert!((w.skill_growth() - 0.5).abs() < 1e-12);
        assert!((w.peer_synergy() - 0.25).abs() < 1e-12);
        assert!((w.goal_alignment() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_already_normalized_is_stable() {
        let w = normalize_weights(RawWeights::new(0.5, 0.3, 0.2)).unwrap();
        assert!((w.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
        assert!((w.skill_growth() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_rejects_negative() {
        let err = normalize_weights(RawWeights::new(0.5, -0.1, 0.6)).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidWeight {
                priority: "PEER_SYNERGY",
                value: -0.1
            }
        );
    }

    #[test]
    fn test_normalize_rejects_all_zero() {
        assert_eq!(
            normalize_weights(RawWeights::default()).unwrap_err(),
            ModelError::AllWeightsZero
        );
    }

    #[test]
    fn test_normalize_rejects_nan_and_infinity() {
        assert!(normalize_weights(RawWeights::new(f64::NAN, 1.0, 1.0)).is_err());
        assert!(normalize_weights(RawWeights::new(f64::INFINITY, 1.0, 1.0)).is_err());
    }

    #[test]
    fn test_normalize_huge_values_do_not_overflow() {
        let w = normalize_weights(RawWeights::new(f64::MAX, f64::MAX, f64::MAX)).unwrap();
        assert!((w.sum() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_from_entries_parses_key_styles() {
        let w = PriorityWeights::from_entries([
            ("SKILL_GROWTH", 1.0),
            ("peerSynergy", 1.0),
            ("goal_alignment", 2.0),
        ])
        .unwrap();
        assert!((w.get(Priority::GoalAlignment) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_entries_rejects_unknown_and_duplicate_keys() {
        assert!(matches!(
            PriorityWeights::from_entries([("FUN", 1.0)]),
            Err(ModelError::UnknownPriority { .. })
        ));
        assert!(matches!(
            PriorityWeights::from_entries([("SKILL_GROWTH", 1.0), ("skill_growth", 2.0)]),
            Err(ModelError::DuplicatePriority { .. })
        ));
    }

    #[test]
    fn test_from_entries_missing_key_is_zero() {
        let w = PriorityWeights::from_entries([("PEER_SYNERGY", 3.0)]).unwrap();
        assert_eq!(w.skill_growth(), 0.0);
        assert_eq!(w.peer_synergy(), 1.0);
    }

    #[test]
    fn test_raw_weights_deserialize_screaming_keys() {
        let raw: RawWeights = serde_json::from_str(
            r#"{"SKILL_GROWTH": 0.5, "PEER_SYNERGY": 0.3, "GOAL_ALIGNMENT": 0.2}"#,
        )
        .unwrap();
        assert_eq!(raw, RawWeights::new(0.5, 0.3, 0.2));
    }
}
