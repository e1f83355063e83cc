//! ResultSink trait: persistence of published results.

use crate::errors::PublishError;
use crate::types::ResultRecord;

/// Destination for published simulation records (a database, a queue, ...).
///
/// The engine never calls a sink; the publication stage does, after
/// `simulate` has returned.
pub trait ResultSink: Send + Sync {
    fn persist(&self, record: &ResultRecord) -> Result<(), PublishError>;
}
