//! Simulation orchestrator: validate a request, fan projects out to the
//! worker pool, collect results and error entries, rank.

pub mod deadline;
pub mod engine;
pub mod ranking;
pub mod request;
pub mod runner;

pub use deadline::{StopReason, StopSignal};
pub use engine::{DataSources, SimulationEngine};
pub use ranking::{compare_results, rank_results};
pub use request::{SimulationPlan, SimulationRequest};
pub use runner::{run_trials, TrialLoopOutcome};
