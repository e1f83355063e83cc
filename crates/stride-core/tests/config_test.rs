//! Tests for the Stride configuration system.

use std::sync::Mutex;

use stride_core::config::{ConfigOverrides, StrideConfig};
use stride_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all STRIDE_ env vars to prevent cross-test contamination.
fn clear_stride_env_vars() {
    for key in [
        "STRIDE_ENGINE_DEFAULT_TRIALS",
        "STRIDE_ENGINE_MAX_TRIALS",
        "STRIDE_ENGINE_SKILL_GROWTH_FACTOR",
        "STRIDE_ENGINE_GROWTH_SPREAD",
        "STRIDE_ENGINE_SYNERGY_SPREAD",
        "STRIDE_ENGINE_ALIGNMENT_SPREAD",
        "STRIDE_ENGINE_SUCCESS_THRESHOLD",
        "STRIDE_ENGINE_CONFIDENCE_LEVEL",
        "STRIDE_ENGINE_DEADLINE_CHECK_INTERVAL",
        "STRIDE_ENGINE_WORKER_THREADS",
        "STRIDE_ENGINE_BASE_SEED",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stride_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("stride.toml"),
        r#"
[engine]
default_trials = 2_000
success_threshold = 0.7
confidence_level = 0.90
"#,
    )
    .unwrap();

    std::env::set_var("STRIDE_ENGINE_SUCCESS_THRESHOLD", "0.65");

    let overrides = ConfigOverrides {
        confidence_level: Some(0.99),
        ..Default::default()
    };

    let config = StrideConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Project file wins over defaults
    assert_eq!(config.engine.default_trials, Some(2_000));
    // Env wins over project file
    assert_eq!(config.engine.success_threshold, Some(0.65));
    // Overrides win over everything
    assert_eq!(config.engine.confidence_level, Some(0.99));

    clear_stride_env_vars();
}

#[test]
fn test_load_missing_files_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stride_env_vars();

    let dir = tempdir();
    let config = StrideConfig::load(dir.path(), None).unwrap();
    let settings = config.engine.settings();

    assert_eq!(settings.default_trials, 10_000);
    assert_eq!(settings.skill_growth_factor, 0.15);
    assert_eq!(settings.success_threshold, 0.6);
    assert_eq!(settings.confidence_level, 0.95);
    assert_eq!(settings.base_seed, None);
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stride_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("stride.toml"), "[engine\nbroken").unwrap();
    let err = StrideConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::Malformed { .. }));
}

#[test]
fn test_unparseable_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stride_env_vars();

    let dir = tempdir();
    std::env::set_var("STRIDE_ENGINE_DEFAULT_TRIALS", "lots");
    let err = StrideConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::BadEnvVar { key, value, .. } => {
            assert_eq!(key, "STRIDE_ENGINE_DEFAULT_TRIALS");
            assert_eq!(value, "lots");
        }
        other => panic!("expected BadEnvVar, got {other:?}"),
    }

    clear_stride_env_vars();
}

#[test]
fn test_validation_rejects_out_of_range_values() {
    let cases = [
        "[engine]\nsuccess_threshold = 1.5",
        "[engine]\nconfidence_level = 1.0",
        "[engine]\nconfidence_level = 0.0",
        "[engine]\nskill_growth_factor = -0.1",
        "[engine]\ndefault_trials = 0",
        "[engine]\ndefault_trials = 500\nmax_trials = 100",
        "[engine]\ndeadline_check_interval = 0",
    ];
    for case in cases {
        let err = StrideConfig::from_toml(case).unwrap_err();
        assert!(
            matches!(err, ConfigError::OutOfRange { .. }),
            "expected validation failure for {case:?}, got {err:?}"
        );
    }
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = StrideConfig::from_toml(
        "[engine]\ndefault_trials = 5000\nbase_seed = 42\nworker_threads = 4",
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let reparsed = StrideConfig::from_toml(&text).unwrap();
    assert_eq!(config, reparsed);
    assert_eq!(reparsed.engine.base_seed, Some(42));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = StrideConfig::from_toml("[engine]\ndefault_trials = 10\nshiny = true").unwrap();
    assert_eq!(config.engine.effective_default_trials(), 10);
}

#[test]
fn test_env_covers_sampler_spreads_and_check_interval() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stride_env_vars();

    let dir = tempdir();
    std::env::set_var("STRIDE_ENGINE_GROWTH_SPREAD", "0.25");
    std::env::set_var("STRIDE_ENGINE_SYNERGY_SPREAD", "1.0");
    std::env::set_var("STRIDE_ENGINE_ALIGNMENT_SPREAD", "0.75");
    std::env::set_var("STRIDE_ENGINE_DEADLINE_CHECK_INTERVAL", "64");

    let settings = StrideConfig::load(dir.path(), None).unwrap().engine.settings();
    assert_eq!(settings.growth_spread, 0.25);
    assert_eq!(settings.synergy_spread, 1.0);
    assert_eq!(settings.alignment_spread, 0.75);
    assert_eq!(settings.deadline_check_interval, 64);

    clear_stride_env_vars();
}

#[test]
fn test_overrides_cover_every_engine_field() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_stride_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("stride.toml"),
        "[engine]\ngrowth_spread = 0.9\ndeadline_check_interval = 10",
    )
    .unwrap();
    let overrides = ConfigOverrides {
        max_trials: Some(50_000),
        growth_spread: Some(0.3),
        deadline_check_interval: Some(256),
        ..Default::default()
    };

    let settings = StrideConfig::load(dir.path(), Some(&overrides))
        .unwrap()
        .engine
        .settings();
    assert_eq!(settings.max_trials, 50_000);
    assert_eq!(settings.growth_spread, 0.3);
    assert_eq!(settings.deadline_check_interval, 256);
    // Untouched fields keep their lower layers.
    assert_eq!(settings.synergy_spread, 2.0);
}
