//! Cancellation of in-flight simulations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A source the engine polls between trial chunks.
///
/// Polled from worker-pool threads, hence `Send + Sync`. Once it reports
/// cancelled it must keep doing so.
pub trait Cancellable: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// Shared flag that cancels every simulation holding a clone of it.
///
/// Trials already in flight finish; the engine stops at the next chunk
/// boundary and keeps whatever trials completed.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}

/// Never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellable for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_cancellation() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_token_usable_as_trait_object() {
        let token = CancellationToken::new();
        let source: &dyn Cancellable = &token;
        assert!(!source.is_cancelled());
        token.cancel();
        assert!(source.is_cancelled());
        assert!(!NeverCancel.is_cancelled());
    }
}
