//! The simulation engine: a validated configuration plus its worker pool.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use stride_core::config::{EngineConfig, EngineSettings};
use stride_core::errors::{ConfigError, SimulationError};
use stride_core::events::{
    BatchCompleteEvent, BatchStartedEvent, NoOpEventHandler, ProjectCompletedEvent,
    ProjectFailedEvent, SimulationEventHandler,
};
use stride_core::model::ProjectFit;
use stride_core::tracing::metrics;
use stride_core::traits::{Cancellable, NeverCancel, ProfileStore, SynergyProvider};
use stride_core::types::{ErrorKind, ProjectError, ProjectId, SimulationBatchResult, SimulationResult};
use tracing::field::Empty;
use tracing::{debug, error, info, info_span, warn, Span};

use super::deadline::StopSignal;
use super::ranking::rank_results;
use super::request::{SimulationPlan, SimulationRequest};
use super::runner::run_trials;
use crate::result::{ProjectIdentity, ResultAssembler};
use crate::sampler::{
    derive_project_seed, model_fingerprint, SamplerSettings, TrialParams, TrialSampler,
};
use crate::stats::TrialAggregator;

/// The collaborators one `simulate` call reads from.
#[derive(Clone, Copy)]
pub struct DataSources<'a> {
    pub profiles: &'a dyn ProfileStore,
    pub synergy: &'a dyn SynergyProvider,
}

impl<'a> DataSources<'a> {
    pub fn new(profiles: &'a dyn ProfileStore, synergy: &'a dyn SynergyProvider) -> Self {
        Self { profiles, synergy }
    }
}

/// Monte Carlo success-probability engine.
///
/// Holds resolved settings and a bounded rayon pool, nothing else. Every call
/// is independent; concurrent calls share the pool.
pub struct SimulationEngine {
    settings: EngineSettings,
    sampler: SamplerSettings,
    assembler: ResultAssembler,
    pool: rayon::ThreadPool,
}

impl SimulationEngine {
    /// Validate `config` and start the worker pool.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let settings = config.settings();
        // Checked here so a level too close to 1 fails at startup rather
        // than in every project.
        let assembler = ResultAssembler::new(settings.confidence_level).ok_or_else(|| {
            ConfigError::OutOfRange {
                field: "engine.confidence_level".to_string(),
                message: format!(
                    "{} has no finite critical value",
                    settings.confidence_level
                ),
            }
        })?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.worker_threads)
            .thread_name(|i| format!("stride-worker-{i}"))
            .build()
            .map_err(|e| ConfigError::WorkerPool {
                message: e.to_string(),
            })?;

        debug!(workers = pool.current_num_threads(), "simulation engine ready");
        Ok(Self {
            sampler: SamplerSettings::from(&settings),
            settings,
            assembler,
            pool,
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Simulate every candidate project of `request`.
    ///
    /// Returns `InvalidInput` without doing any work if the request is
    /// malformed. Otherwise always returns a batch: projects that could not be
    /// evaluated appear in its error list.
    pub fn simulate(
        &self,
        request: &SimulationRequest,
        sources: DataSources<'_>,
    ) -> Result<SimulationBatchResult, SimulationError> {
        self.simulate_with(request, sources, &NoOpEventHandler, &NeverCancel)
    }

    /// [`simulate`](Self::simulate) with progress events and a cancellation
    /// source, usually a
    /// [`CancellationToken`](stride_core::traits::CancellationToken).
    pub fn simulate_with(
        &self,
        request: &SimulationRequest,
        sources: DataSources<'_>,
        events: &dyn SimulationEventHandler,
        cancel: &dyn Cancellable,
    ) -> Result<SimulationBatchResult, SimulationError> {
        let started = Instant::now();
        let plan = request.validate(&self.settings, started)?;

        let batch_span = info_span!(
            "stride.simulate",
            user_id = %plan.user_id,
            trials = plan.trials,
            batch_project_count = Empty,
            batch_duration_ms = Empty,
            batch_completed = Empty,
            batch_failed = Empty,
        );
        let _guard = batch_span.enter();
        batch_span.record(metrics::BATCH_PROJECT_COUNT, plan.project_ids.len() as u64);

        events.on_batch_started(&BatchStartedEvent {
            user_id: plan.user_id,
            project_count: plan.project_ids.len(),
            trials_per_project: plan.trials,
            base_seed: plan.base_seed,
        });

        let fingerprint = model_fingerprint(
            &plan.weights,
            &self.sampler,
            self.assembler.confidence_level(),
        );
        let signal = StopSignal::new(plan.deadline, cancel);
        let outcomes: Vec<(ProjectId, Result<SimulationResult, SimulationError>)> =
            self.pool.install(|| {
                plan.project_ids
                    .par_iter()
                    .map(|&project_id| {
                        let task = ProjectTask {
                            plan: &plan,
                            project_id,
                            fingerprint,
                            signal,
                        };
                        let outcome = self.evaluate_project(task, sources, events, &batch_span);
                        (project_id, outcome)
                    })
                    .collect()
            });

        let mut results = Vec::with_capacity(outcomes.len());
        let mut errors = Vec::new();
        for (project_id, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => errors.push(ProjectError::from_error(&e).unwrap_or_else(|| ProjectError {
                    project_id,
                    kind: ErrorKind::InternalComputation,
                    message: e.to_string(),
                })),
            }
        }
        rank_results(&mut results);
        errors.sort_by_key(|e| e.project_id);

        let duration_ms = millis(started.elapsed());
        batch_span.record(metrics::BATCH_DURATION_MS, duration_ms);
        batch_span.record(metrics::BATCH_COMPLETED, results.len() as u64);
        batch_span.record(metrics::BATCH_FAILED, errors.len() as u64);
        info!(
            completed = results.len(),
            failed = errors.len(),
            duration_ms,
            "simulation batch complete"
        );

        events.on_batch_complete(&BatchCompleteEvent {
            user_id: plan.user_id,
            completed: results.len(),
            failed: errors.len(),
            duration_ms,
        });

        Ok(SimulationBatchResult::new(
            plan.user_id,
            plan.base_seed,
            results,
            errors,
            duration_ms,
        ))
    }

    /// Run one project and report the outcome to logs and event handlers.
    fn evaluate_project(
        &self,
        task: ProjectTask<'_>,
        sources: DataSources<'_>,
        events: &dyn SimulationEventHandler,
        batch_span: &Span,
    ) -> Result<SimulationResult, SimulationError> {
        let project_id = task.project_id;
        let span = info_span!(
            parent: batch_span,
            "stride.project",
            project_id = %project_id,
            trials_executed = Empty,
            trials_per_second = Empty,
            success_probability = Empty,
        );
        let _guard = span.enter();
        let project_started = Instant::now();

        let outcome = self.run_project(task, sources, &span);
        match &outcome {
            Ok(result) => {
                events.on_project_completed(&ProjectCompletedEvent {
                    project_id,
                    trial_count: result.trial_count(),
                    success_probability: result.success_probability(),
                    degraded: result.degraded(),
                    duration_ms: millis(project_started.elapsed()),
                });
            }
            Err(e) => {
                match e {
                    SimulationError::InternalComputation { .. } => {
                        error!(error = %e, "project simulation failed");
                    }
                    _ => warn!(error = %e, "project not evaluated"),
                }
                if let Some(kind) = e.kind() {
                    events.on_project_failed(&ProjectFailedEvent {
                        project_id,
                        kind,
                        message: e.to_string(),
                    });
                }
            }
        }
        outcome
    }

    fn run_project(
        &self,
        task: ProjectTask<'_>,
        sources: DataSources<'_>,
        span: &Span,
    ) -> Result<SimulationResult, SimulationError> {
        let ProjectTask {
            plan,
            project_id,
            fingerprint,
            signal,
        } = task;
        if let Some(reason) = signal.check() {
            return Err(reason.into_error(project_id));
        }

        let missing = |source| SimulationError::MissingData { project_id, source };
        let skills = sources.profiles.skill_vector(plan.user_id).map_err(missing)?;
        let requirements = sources
            .profiles
            .requirement_vector(project_id)
            .map_err(missing)?;
        let synergy = sources
            .synergy
            .synergy_profile(plan.user_id, project_id)
            .map_err(missing)?;

        let fit = ProjectFit::evaluate(&skills, &requirements);
        let seed = derive_project_seed(plan.base_seed, project_id);
        let mut sampler = TrialSampler::new(
            seed,
            TrialParams::new(fit, &synergy),
            plan.weights,
            self.sampler,
        );
        let mut aggregator = TrialAggregator::new();

        let loop_started = Instant::now();
        let outcome = run_trials(
            &mut sampler,
            &mut aggregator,
            plan.trials,
            self.settings.deadline_check_interval,
            || signal.check(),
        )
        .map_err(|e| SimulationError::InternalComputation {
            project_id,
            message: e.to_string(),
        })?;
        let elapsed = loop_started.elapsed().as_secs_f64();

        span.record(metrics::TRIALS_EXECUTED, outcome.executed);
        if outcome.executed == 0 {
            if let Some(reason) = outcome.stopped {
                return Err(reason.into_error(project_id));
            }
        }
        if elapsed > 0.0 {
            span.record(metrics::TRIALS_PER_SECOND, outcome.executed as f64 / elapsed);
        }

        let result = self.assembler.assemble(
            ProjectIdentity {
                user_id: plan.user_id,
                project_id,
                project_name: sources.profiles.project_name(project_id),
                seed,
                requested_trials: plan.trials,
                fingerprint,
            },
            &aggregator,
        )?;
        span.record(metrics::SUCCESS_PROBABILITY, result.success_probability());

        if result.degraded() {
            warn!(
                trial_count = result.trial_count(),
                requested_trials = plan.trials,
                reason = ?outcome.stopped,
                "degraded result: trial loop stopped early"
            );
        } else {
            debug!(
                success_probability = result.success_probability(),
                "project simulation complete"
            );
        }
        Ok(result)
    }
}

/// One project's share of a batch.
#[derive(Clone, Copy)]
struct ProjectTask<'a> {
    plan: &'a SimulationPlan,
    project_id: ProjectId,
    fingerprint: u64,
    signal: StopSignal<'a>,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
