//! Stride engine: Monte Carlo estimation of project success probability.
//!
//! Pipeline per candidate project: collaborators → [`sampler`] → [`stats`]
//! → [`result`]; [`orchestrator`] runs projects on a bounded worker pool and
//! ranks what comes back.

pub mod orchestrator;
pub mod providers;
pub mod result;
pub mod sampler;
pub mod stats;

pub use orchestrator::{rank_results, DataSources, SimulationEngine, SimulationRequest};
pub use result::{PublishReport, Publisher};
