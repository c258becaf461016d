// ABOUTME: Integration tests for single-day regeneration and rest-day conversion
// ABOUTME: Covers provenance flags, conflict errors, and present-day phase usage
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use transfit_engine::config::EngineConfig;
use transfit_engine::errors::EngineError;
use transfit_engine::models::{Duration, EquipmentId};
use transfit_engine::plan::{generate_plan_with_config, regenerate_day_with_config};

use common::{base_profile, catalog, init_test_logging, post_op_profile, start_date};

#[test]
fn rest_day_conversion_sets_bonus_provenance() {
    init_test_logging();
    let config = EngineConfig::default();
    let profile = base_profile();
    let plan = generate_plan_with_config(&profile, &catalog(), start_date(), 1, &config).unwrap();
    let rest_day = plan.days.iter().find(|d| d.is_rest_day).unwrap();

    let day = regenerate_day_with_config(
        &plan,
        rest_day.day_number,
        &profile,
        &catalog(),
        start_date(),
        17,
        &config,
    )
    .unwrap();

    assert!(!day.is_rest_day);
    assert_eq!(day.was_rest_day, Some(true));
    assert!(day.rest_day_invariant_holds());
    assert_eq!(day.date, rest_day.date);
}

#[test]
fn regenerating_a_workout_day_leaves_provenance_untouched() {
    let config = EngineConfig::default();
    let profile = base_profile();
    let plan = generate_plan_with_config(&profile, &catalog(), start_date(), 1, &config).unwrap();
    let workout_day = plan.days.iter().find(|d| !d.is_rest_day).unwrap();

    let day = regenerate_day_with_config(
        &plan,
        workout_day.day_number,
        &profile,
        &catalog(),
        start_date(),
        23,
        &config,
    )
    .unwrap();

    assert!(!day.is_rest_day);
    assert_eq!(day.was_rest_day, None);
}

#[test]
fn missing_day_is_a_regeneration_conflict() {
    let config = EngineConfig::default();
    let profile = base_profile();
    let plan = generate_plan_with_config(&profile, &catalog(), start_date(), 1, &config).unwrap();

    let result =
        regenerate_day_with_config(&plan, 9, &profile, &catalog(), start_date(), 1, &config);
    assert!(matches!(
        result,
        Err(EngineError::RegenerationConflict { day_number: 9 })
    ));
}

#[test]
fn regeneration_uses_the_current_recovery_phase() {
    let config = EngineConfig::default();
    let profile = post_op_profile(10);
    let plan = generate_plan_with_config(&profile, &catalog(), start_date(), 1, &config).unwrap();
    let day_number = plan.days.iter().find(|d| !d.is_rest_day).unwrap().day_number;

    // Ten weeks later the user is in a later phase; cardio is allowed again.
    let later = start_date() + chrono::Duration::weeks(10);
    let day = regenerate_day_with_config(
        &plan, day_number, &profile, &catalog(), later, 31, &config,
    )
    .unwrap();

    let workout = day.variants.get(Duration::Min90).unwrap();
    let post_op = workout
        .applied_rules
        .iter()
        .find(|r| r.rule_id == "post_op_phase_restrictions")
        .unwrap();
    assert!(
        post_op.user_message.as_deref().unwrap().contains("phase 2"),
        "expected a later phase, got {:?}",
        post_op.user_message
    );
}

#[test]
fn regenerator_propagates_pool_exhaustion() {
    let config = EngineConfig::default();
    let mut profile = base_profile();
    let plan = generate_plan_with_config(&profile, &catalog(), start_date(), 1, &config).unwrap();

    // Equipment shrank since generation; no band-only pool can fill a day.
    profile.equipment = HashSet::from([EquipmentId::Band]);
    let result =
        regenerate_day_with_config(&plan, 1, &profile, &catalog(), start_date(), 1, &config);
    assert!(matches!(
        result,
        Err(EngineError::InsufficientExercises { available: 1, .. })
    ));
}

#[test]
fn concurrent_style_regenerations_return_independent_days() {
    let config = EngineConfig::default();
    let mut profile = base_profile();
    profile.workout_frequency = 7;
    let plan = generate_plan_with_config(&profile, &catalog(), start_date(), 1, &config).unwrap();

    let day_one =
        regenerate_day_with_config(&plan, 1, &profile, &catalog(), start_date(), 11, &config)
            .unwrap();
    let day_two =
        regenerate_day_with_config(&plan, 2, &profile, &catalog(), start_date(), 11, &config)
            .unwrap();

    // The caller merges by day_number; neither result touched the plan.
    assert_eq!(day_one.day_number, 1);
    assert_eq!(day_two.day_number, 2);
    assert_eq!(plan.day(1).unwrap().day_number, 1);
}
