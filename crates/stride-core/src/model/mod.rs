//! Vector & weight model: validated value types and the pure functions
//! that turn a skill profile and a requirement profile into sampler inputs.

pub mod gap;
pub mod vectors;
pub mod weights;

pub use gap::{alignment_baseline, skill_gap, weighted_gap_magnitude, ProjectFit};
pub use vectors::{Requirement, RequirementVector, SkillVector, SynergyProfile};
pub use weights::{normalize_weights, Priority, PriorityWeights, RawWeights};
