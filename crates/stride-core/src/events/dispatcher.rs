//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::SimulationEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// Itself a [`SimulationEventHandler`], so it can be passed wherever a single
/// handler is expected. With no handlers registered, dispatch is a loop over
/// an empty Vec.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SimulationEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn SimulationEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn SimulationEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!("simulation event handler panicked; continuing");
            }
        }
    }
}

impl SimulationEventHandler for EventDispatcher {
    fn on_batch_started(&self, event: &BatchStartedEvent) {
        self.emit(|h| h.on_batch_started(event));
    }

    fn on_project_completed(&self, event: &ProjectCompletedEvent) {
        self.emit(|h| h.on_project_completed(event));
    }

    fn on_project_failed(&self, event: &ProjectFailedEvent) {
        self.emit(|h| h.on_project_failed(event));
    }

    fn on_batch_complete(&self, event: &BatchCompleteEvent) {
        self.emit(|h| h.on_batch_complete(event));
    }
}
