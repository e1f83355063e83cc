//! Cooperative stop checks: deadline expiry and cancellation.

use std::time::Instant;

use stride_core::errors::SimulationError;
use stride_core::traits::Cancellable;
use stride_core::types::ProjectId;

/// Why a trial loop stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    DeadlineExpired,
    Cancelled,
}

impl StopReason {
    /// The error entry for a project that stopped before its first trial.
    pub fn into_error(self, project_id: ProjectId) -> SimulationError {
        match self {
            Self::DeadlineExpired => SimulationError::ComputationTimeout { project_id },
            Self::Cancelled => SimulationError::Cancelled { project_id },
        }
    }
}

/// Shared by every project task of one batch.
#[derive(Clone, Copy)]
pub struct StopSignal<'a> {
    deadline: Option<Instant>,
    cancel: &'a dyn Cancellable,
}

impl<'a> StopSignal<'a> {
    pub fn new(deadline: Option<Instant>, cancel: &'a dyn Cancellable) -> Self {
        Self { deadline, cancel }
    }

    /// Cancellation wins over an expired deadline.
    pub fn check(&self) -> Option<StopReason> {
        if self.cancel.is_cancelled() {
            return Some(StopReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(StopReason::DeadlineExpired),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use stride_core::traits::CancellationToken;

    use super::*;

    #[test]
    fn test_no_deadline_no_stop() {
        let token = CancellationToken::new();
        assert_eq!(StopSignal::new(None, &token).check(), None);
    }

    #[test]
    fn test_expired_deadline() {
        let token = CancellationToken::new();
        let signal = StopSignal::new(Some(Instant::now()), &token);
        assert_eq!(signal.check(), Some(StopReason::DeadlineExpired));

        let later = StopSignal::new(Some(Instant::now() + Duration::from_secs(3600)), &token);
        assert_eq!(later.check(), None);
    }

    #[test]
    fn test_cancellation_wins() {
        let token = CancellationToken::new();
        token.cancel();
        let signal = StopSignal::new(Some(Instant::now()), &token);
        assert_eq!(signal.check(), Some(StopReason::Cancelled));
        assert!(matches!(
            StopReason::Cancelled.into_error(ProjectId(3)),
            SimulationError::Cancelled { project_id: ProjectId(3) }
        ));
    }
}
