//! RecommendationGenerator trait.

use crate::errors::PublishError;
use crate::types::SimulationResult;

/// External text generation that explains a completed result.
///
/// Runs only on finished, immutable results. Failures are reported per
/// result and never affect the numbers.
pub trait RecommendationGenerator: Send + Sync {
    fn recommend(&self, result: &SimulationResult) -> Result<String, PublishError>;
}
