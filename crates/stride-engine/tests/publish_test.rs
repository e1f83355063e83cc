//! Publishing engine output to a sink.

use stride_core::config::EngineConfig;
use stride_core::model::{RawWeights, Requirement, RequirementVector, SkillVector, SynergyProfile};
use stride_core::types::{ProjectId, UserId};
use stride_engine::providers::{InMemoryProfiles, InMemoryResultSink};
use stride_engine::{DataSources, Publisher, SimulationEngine, SimulationRequest};

#[test]
fn test_publish_engine_batch_as_camel_case_records() {
    let user = UserId(8);
    let store = InMemoryProfiles::new()
        .with_skills(user, SkillVector::new([("sql", 4.0)]).unwrap())
        .with_project(
            ProjectId(21),
            RequirementVector::new([("sql", Requirement::new(6.0, 2.0))]).unwrap(),
        )
        .with_project_name(ProjectId(21), "Reporting")
        .with_default_synergy(SynergyProfile::new(6.5, 3).unwrap());
    let engine = SimulationEngine::new(&EngineConfig::default()).unwrap();
    let request = SimulationRequest::new(user, [ProjectId(21), ProjectId(22)], RawWeights::new(1.0, 2.0, 1.0))
        .with_trials(2_000)
        .with_seed(5);
    let batch = engine.simulate(&request, DataSources::new(&store, &store)).unwrap();

    let sink = InMemoryResultSink::new();
    let report = Publisher::new(&sink).with_clock(|| 1_760_000_000).publish(&batch);

    assert!(report.is_clean());
    assert_eq!(sink.len(), 1);
    let record = &sink.records()[0];
    assert_eq!(record.timestamp, 1_760_000_000);

    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["projectId"], 21);
    assert_eq!(json["projectName"], "Reporting");
    assert_eq!(json["trialCount"], 2_000);
    assert_eq!(json["degraded"], false);
    assert_eq!(json["timestamp"], 1_760_000_000i64);
    assert!(json["simulationId"].as_str().unwrap().starts_with("sim-"));
    assert!(json["confidenceInterval"]["lower"].is_number());
    assert!(json["metrics"]["expectedSkillGain"].is_number());

    let batch_json = serde_json::to_value(&batch).unwrap();
    assert_eq!(batch_json["errors"][0]["projectId"], 22);
    assert_eq!(batch_json["errors"][0]["kind"], "MISSING_DATA");
}
