//! Identifier and result types shared across Stride crates.

pub mod identifiers;
pub mod result;

pub use identifiers::{ProjectId, SkillId, UserId};
pub use result::{
    ConfidenceInterval, ErrorKind, ProjectError, ResultParts, ResultRecord,
    SimulationBatchResult, SimulationMetrics, SimulationResult,
};
