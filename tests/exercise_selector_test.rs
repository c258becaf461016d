// ABOUTME: Integration tests for catalog filtering, allocation, and seeded drawing
// ABOUTME: Covers determinism, exclusion honoring, pool exhaustion, and prescriptions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use transfit_engine::config::EngineConfig;
use transfit_engine::errors::EngineError;
use transfit_engine::models::{Duration, EquipmentId, FitnessExperience, FitnessGoal, Prescription};
use transfit_engine::safety::{evaluate_with_config, ExerciseConstraintSet};
use transfit_engine::selection::{select_exercises, ExerciseCatalog, SelectionRequest};

use common::{binding_profile, catalog, init_test_logging};

fn request(equipment: &HashSet<EquipmentId>, duration: Duration, seed: u64) -> SelectionRequest<'_> {
    SelectionRequest {
        equipment,
        primary_goal: FitnessGoal::GeneralHealth,
        secondary_goals: &[],
        experience: FitnessExperience::Beginner,
        duration,
        seed,
    }
}

#[test]
fn identical_seed_yields_identical_workout() {
    init_test_logging();
    let catalog = catalog();
    let config = EngineConfig::default();
    let equipment = HashSet::from([EquipmentId::Bodyweight, EquipmentId::Dumbbell]);
    let constraints = ExerciseConstraintSet::default();

    let first =
        select_exercises(&catalog, &request(&equipment, Duration::Min45, 99), &constraints, &config)
            .unwrap();
    let second =
        select_exercises(&catalog, &request(&equipment, Duration::Min45, 99), &constraints, &config)
            .unwrap();
    assert_eq!(first, second);
}

#[test]
fn equipment_filter_is_a_subset_check() {
    let catalog = catalog();
    let config = EngineConfig::default();
    let equipment = HashSet::from([EquipmentId::Bodyweight]);
    let constraints = ExerciseConstraintSet::default();

    let workout =
        select_exercises(&catalog, &request(&equipment, Duration::Min90, 1), &constraints, &config)
            .unwrap();
    for slot in &workout {
        let exercise = catalog.get_exercise(&slot.exercise_id).unwrap();
        assert!(
            exercise.equipment_required.is_subset(&equipment),
            "{} needs unavailable equipment",
            slot.exercise_id
        );
    }
}

#[test]
fn excluded_tags_never_appear() {
    let catalog = catalog();
    let config = EngineConfig::default();
    let profile = binding_profile();
    let evaluation = evaluate_with_config(&profile, None, &config);

    let workout = select_exercises(
        &catalog,
        &request(&profile.equipment, Duration::Min30, 7),
        &evaluation.constraints,
        &config,
    )
    .unwrap();
    for slot in &workout {
        let exercise = catalog.get_exercise(&slot.exercise_id).unwrap();
        assert!(
            exercise.tags.is_disjoint(&evaluation.constraints.excluded_tags),
            "{} carries an excluded tag",
            slot.exercise_id
        );
    }
}

#[test]
fn exhausted_pool_is_an_explicit_error() {
    let catalog = catalog();
    let config = EngineConfig::default();
    // No cable exercises exist in the fixture catalog.
    let equipment = HashSet::from([EquipmentId::Cable]);
    let constraints = ExerciseConstraintSet::default();

    let result =
        select_exercises(&catalog, &request(&equipment, Duration::Min45, 1), &constraints, &config);
    match result {
        Err(EngineError::InsufficientExercises {
            available, needed, ..
        }) => {
            assert_eq!(available, 0);
            assert_eq!(needed, config.selector.min_exercises_per_workout);
        }
        other => panic!("expected InsufficientExercises, got {other:?}"),
    }
}

#[test]
fn exercise_count_tracks_duration() {
    let catalog = catalog();
    let config = EngineConfig::default();
    let equipment = HashSet::from([EquipmentId::Bodyweight]);
    let constraints = ExerciseConstraintSet::default();

    let short =
        select_exercises(&catalog, &request(&equipment, Duration::Min30, 5), &constraints, &config)
            .unwrap();
    let long =
        select_exercises(&catalog, &request(&equipment, Duration::Min90, 5), &constraints, &config)
            .unwrap();
    assert_eq!(short.len(), 4);
    assert!(long.len() > short.len());
    assert!(long.len() <= config.selector.max_exercises_per_workout);
}

#[test]
fn volume_multiplier_scales_count_and_sets() {
    let catalog = catalog();
    let config = EngineConfig::default();
    let equipment = HashSet::from([EquipmentId::Bodyweight]);

    let reduced = ExerciseConstraintSet {
        volume_multiplier: 0.85,
        ..ExerciseConstraintSet::default()
    };
    let full = ExerciseConstraintSet::default();

    let reduced_workout =
        select_exercises(&catalog, &request(&equipment, Duration::Min60, 3), &reduced, &config)
            .unwrap();
    let full_workout =
        select_exercises(&catalog, &request(&equipment, Duration::Min60, 3), &full, &config)
            .unwrap();
    assert!(reduced_workout.len() < full_workout.len());
}

#[test]
fn rest_multiplier_scales_rest_seconds() {
    let catalog = catalog();
    let config = EngineConfig::default();
    let equipment = HashSet::from([EquipmentId::Bodyweight]);

    let longer_rest = ExerciseConstraintSet {
        rest_multiplier: 1.15,
        ..ExerciseConstraintSet::default()
    };
    let workout =
        select_exercises(&catalog, &request(&equipment, Duration::Min30, 11), &longer_rest, &config)
            .unwrap();
    for slot in &workout {
        // Beginner base rest is 75s.
        assert_eq!(slot.rest_seconds, 86);
    }
}

#[test]
fn timed_exercises_get_seconds_prescriptions() {
    let catalog = catalog();
    let config = EngineConfig::default();
    let equipment = HashSet::from([EquipmentId::Bodyweight]);
    let constraints = ExerciseConstraintSet::default();

    // Draw the whole bodyweight pool so both kinds appear.
    let workout =
        select_exercises(&catalog, &request(&equipment, Duration::Min90, 2), &constraints, &config)
            .unwrap();
    for slot in &workout {
        let exercise = catalog.get_exercise(&slot.exercise_id).unwrap();
        let timed = exercise.tags.contains("timed") || exercise.tags.contains("cardio");
        match slot.prescription {
            Prescription::Seconds(_) => assert!(timed, "{} is not timed", slot.exercise_id),
            Prescription::Reps(_) => assert!(!timed, "{} should be timed", slot.exercise_id),
        }
    }
}
