//! SimulationEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing simulation progress.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `Send + Sync` is required because
/// project events fire from worker-pool threads.
pub trait SimulationEventHandler: Send + Sync {
    fn on_batch_started(&self, _event: &BatchStartedEvent) {}
    fn on_project_completed(&self, _event: &ProjectCompletedEvent) {}
    fn on_project_failed(&self, _event: &ProjectFailedEvent) {}
    fn on_batch_complete(&self, _event: &BatchCompleteEvent) {}
}

/// Handler that ignores every event.
pub struct NoOpEventHandler;

impl SimulationEventHandler for NoOpEventHandler {}
