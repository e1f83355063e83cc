//! Publication: hand finished results to persistence and, optionally, to a
//! recommendation generator. Runs strictly after `simulate` returns; nothing
//! here can change a result.

use std::time::{SystemTime, UNIX_EPOCH};

use stride_core::errors::PublishError;
use stride_core::traits::{RecommendationGenerator, ResultSink};
use stride_core::types::{ResultRecord, SimulationBatchResult};
use tracing::{debug, warn};

/// A persisted record plus its generated explanation, if any.
#[derive(Debug, Clone)]
pub struct PublishedResult {
    pub record: ResultRecord,
    pub recommendation: Option<String>,
}

/// Outcome of publishing one batch. Failures are per result.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub published: Vec<PublishedResult>,
    pub failures: Vec<PublishError>,
}

impl PublishReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a [`ResultSink`] and an optional [`RecommendationGenerator`].
pub struct Publisher<'a> {
    sink: &'a dyn ResultSink,
    generator: Option<&'a dyn RecommendationGenerator>,
    clock: fn() -> i64,
}

impl<'a> Publisher<'a> {
    pub fn new(sink: &'a dyn ResultSink) -> Self {
        Self {
            sink,
            generator: None,
            clock: unix_now,
        }
    }

    pub fn with_generator(mut self, generator: &'a dyn RecommendationGenerator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Replace the timestamp source (seconds since the Unix epoch).
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Persist every result of `batch` in rank order.
    ///
    /// A result whose sink write fails is not published and gets no
    /// recommendation. A recommendation failure still leaves the record
    /// published, with `recommendation: None`.
    pub fn publish(&self, batch: &SimulationBatchResult) -> PublishReport {
        let mut report = PublishReport::default();
        let timestamp = (self.clock)();

        for result in batch.results() {
            let record = ResultRecord::new(result.clone(), timestamp);
            if let Err(e) = self.sink.persist(&record) {
                warn!(simulation_id = result.simulation_id(), error = %e, "result not persisted");
                report.failures.push(e);
                continue;
            }

            let recommendation = match self.generator {
                Some(generator) => match generator.recommend(result) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        warn!(simulation_id = result.simulation_id(), error = %e, "recommendation failed");
                        report.failures.push(e);
                        None
                    }
                },
                None => None,
            };

            debug!(simulation_id = result.simulation_id(), "result published");
            report.published.push(PublishedResult {
                record,
                recommendation,
            });
        }
        report
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
