use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stride_core::config::EngineConfig;
use stride_core::model::{
    PriorityWeights, RawWeights, Requirement, RequirementVector, SkillVector, SynergyProfile,
};
use stride_core::types::{ProjectId, UserId};
use stride_engine::providers::InMemoryProfiles;
use stride_engine::sampler::{SamplerSettings, TrialParams, TrialSampler};
use stride_engine::stats::TrialAggregator;
use stride_engine::{DataSources, SimulationEngine, SimulationRequest};

fn bench_trial_loop_10k(c: &mut Criterion) {
    let params = TrialParams {
        gap_magnitude: 3.0,
        synergy_baseline: 7.0,
        interaction_count: 5,
        alignment_baseline: 5.9,
    };
    let weights = PriorityWeights::normalize(RawWeights::new(0.5, 0.3, 0.2)).unwrap();

    c.bench_function("trial_loop_10k", |b| {
        b.iter(|| {
            let sampler = TrialSampler::new(42, params, weights, SamplerSettings::default());
            let mut aggregator = TrialAggregator::new();
            for trial in sampler.take(10_000) {
                aggregator.push(&trial).unwrap();
            }
            black_box(aggregator.success_probability())
        });
    });
}

/// 16 projects at 10K trials each, on the default pool.
fn bench_batch_16_projects(c: &mut Criterion) {
    let user = UserId(1);
    let mut store = InMemoryProfiles::new()
        .with_skills(user, SkillVector::new([("java", 6.0), ("cloud", 3.0)]).unwrap())
        .with_default_synergy(SynergyProfile::new(7.0, 5).unwrap());
    for i in 0..16u64 {
        let requirements = RequirementVector::new([
            ("java", Requirement::new(8.0, 1.0 + i as f64)),
            ("cloud", Requirement::new(7.0, 1.0)),
        ])
        .unwrap();
        store = store.with_project(ProjectId(i), requirements);
    }
    let engine = SimulationEngine::new(&EngineConfig::default()).unwrap();
    let request = SimulationRequest::new(user, (0..16).map(ProjectId), RawWeights::new(0.5, 0.3, 0.2))
        .with_trials(10_000)
        .with_seed(42);

    c.bench_function("batch_16_projects_10k_trials", |b| {
        b.iter(|| {
            let batch = engine
                .simulate(&request, DataSources::new(&store, &store))
                .unwrap();
            black_box(batch.results().len())
        });
    });
}

criterion_group!(benches, bench_trial_loop_10k, bench_batch_16_projects);
criterion_main!(benches);
