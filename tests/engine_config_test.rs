// ABOUTME: Integration tests for engine configuration defaults and env overrides
// ABOUTME: Env-mutating tests run serially to avoid cross-test interference
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use transfit_engine::config::EngineConfig;

#[test]
fn defaults_validate() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.hrt.early_months, 3);
    assert_eq!(config.hrt.established_months, 12);
    assert_eq!(config.selector.min_exercises_per_workout, 3);
}

#[test]
#[serial]
fn environment_overrides_apply() {
    std::env::set_var("TRANSFIT_MIN_EXERCISES", "2");
    std::env::set_var("TRANSFIT_HRT_EARLY_MONTHS", "6");

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.selector.min_exercises_per_workout, 2);
    assert_eq!(config.hrt.early_months, 6);

    std::env::remove_var("TRANSFIT_MIN_EXERCISES");
    std::env::remove_var("TRANSFIT_HRT_EARLY_MONTHS");
}

#[test]
#[serial]
fn unparseable_override_is_an_error() {
    std::env::set_var("TRANSFIT_MINUTES_PER_EXERCISE", "not-a-number");
    let result = EngineConfig::from_env();
    assert!(result.is_err());
    std::env::remove_var("TRANSFIT_MINUTES_PER_EXERCISE");
}

#[test]
#[serial]
fn out_of_range_override_fails_validation() {
    std::env::set_var("TRANSFIT_MINUTES_PER_EXERCISE", "1");
    let result = EngineConfig::from_env();
    assert!(result.is_err());
    std::env::remove_var("TRANSFIT_MINUTES_PER_EXERCISE");
}

#[test]
fn config_round_trips_through_serde() {
    let config = EngineConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
    assert!(parsed.validate().is_ok());
    assert!((parsed.selector.minutes_per_exercise - config.selector.minutes_per_exercise).abs() < f64::EPSILON);
}
