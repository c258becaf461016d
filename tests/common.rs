// ABOUTME: Shared test fixtures: a small exercise catalog and profile builders
// ABOUTME: Keeps integration suites on identical, deterministic input data
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `transfit_engine`

use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Once;
use uuid::Uuid;

use transfit_engine::models::{
    BindingFrequency, BinderType, Duration, EquipmentId, FitnessExperience, FitnessGoal,
    GenderIdentity, HrtType, Profile, SurgeryType,
};
use transfit_engine::selection::{Exercise, InMemoryCatalog};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging once per test process
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Monday the plans in these tests start on
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn exercise(
    id: &str,
    name: &str,
    tags: &[&str],
    equipment: &[EquipmentId],
    muscles: &[&str],
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        equipment_required: equipment.iter().copied().collect(),
        muscle_groups: muscles.iter().map(|&m| m.to_owned()).collect(),
    }
}

/// A small but realistic catalog covering every tag the rules touch
pub fn catalog() -> InMemoryCatalog {
    use EquipmentId::{Band, Barbell, Bench, Bodyweight, Dumbbell, Step};
    InMemoryCatalog::new(vec![
        exercise(
            "pushup",
            "Push-Up",
            &["chest_press", "chest_focus"],
            &[Bodyweight],
            &["chest"],
        ),
        exercise(
            "burpee",
            "Burpee",
            &["high_impact", "cardio", "high_stimulation"],
            &[Bodyweight],
            &["full_body"],
        ),
        exercise(
            "bench-press",
            "Barbell Bench Press",
            &["chest_press", "chest_compression", "heavy_lift"],
            &[Barbell, Bench],
            &["chest"],
        ),
        exercise(
            "db-overhead-press",
            "Dumbbell Overhead Press",
            &["overhead_press", "arm_raise", "strength"],
            &[Dumbbell],
            &["shoulders"],
        ),
        exercise(
            "goblet-squat",
            "Goblet Squat",
            &["lower_body", "compound", "strength"],
            &[Dumbbell],
            &["quads"],
        ),
        exercise(
            "bodyweight-squat",
            "Bodyweight Squat",
            &["lower_body", "compound"],
            &[Bodyweight],
            &["quads"],
        ),
        exercise(
            "glute-bridge",
            "Glute Bridge",
            &["lower_body", "glute_focus"],
            &[Bodyweight],
            &["glutes"],
        ),
        exercise(
            "plank",
            "Plank",
            &["core_brace", "timed"],
            &[Bodyweight],
            &["core"],
        ),
        exercise(
            "walking-intervals",
            "Walking Intervals",
            &["cardio", "gentle_movement", "timed"],
            &[Bodyweight],
            &["full_body"],
        ),
        exercise(
            "band-row",
            "Band Row",
            &["compound", "strength"],
            &[Band],
            &["back"],
        ),
        exercise(
            "db-row",
            "Dumbbell Row",
            &["compound", "strength"],
            &[Dumbbell],
            &["back"],
        ),
        exercise(
            "hip-hinge",
            "Hip Hinge",
            &["lower_body", "strength", "compound"],
            &[Bodyweight],
            &["hamstrings"],
        ),
        exercise(
            "lateral-raise",
            "Lateral Raise",
            &["arm_raise", "mirror_work"],
            &[Dumbbell],
            &["shoulders"],
        ),
        exercise(
            "jump-rope",
            "Jump Rope",
            &["high_impact", "cardio", "high_stimulation", "breath_restrictive"],
            &[Bodyweight],
            &["calves"],
        ),
        exercise(
            "wall-sit",
            "Wall Sit",
            &["lower_body", "timed"],
            &[Bodyweight],
            &["quads"],
        ),
        exercise(
            "calf-raise",
            "Calf Raise",
            &["lower_body"],
            &[Bodyweight],
            &["calves"],
        ),
        exercise(
            "side-plank",
            "Side Plank",
            &["core_brace", "timed"],
            &[Bodyweight],
            &["core"],
        ),
        exercise(
            "step-up",
            "Step-Up",
            &["lower_body", "compound"],
            &[Step],
            &["quads"],
        ),
    ])
}

/// Bodyweight-only profile with no safety facts, 3 days a week
pub fn base_profile() -> Profile {
    Profile {
        user_id: Uuid::new_v4(),
        gender_identity: GenderIdentity::NonBinary,
        primary_goal: FitnessGoal::GeneralHealth,
        secondary_goals: vec![],
        fitness_experience: FitnessExperience::Beginner,
        workout_frequency: 3,
        session_duration: Duration::Min45,
        equipment: HashSet::from([EquipmentId::Bodyweight]),
        on_hrt: false,
        hrt_type: None,
        hrt_months_duration: None,
        binds_chest: false,
        binding_frequency: None,
        binding_duration_hours: None,
        binder_type: None,
        surgery_type: None,
        surgery_date: None,
        dysphoria_triggers: vec![],
        low_sensory_mode: false,
    }
}

/// Daily binder wear past the long-wear threshold
pub fn binding_profile() -> Profile {
    Profile {
        binds_chest: true,
        binding_frequency: Some(BindingFrequency::Daily),
        binding_duration_hours: Some(9.0),
        binder_type: Some(BinderType::Commercial),
        ..base_profile()
    }
}

/// Top surgery `days_ago` days before [`start_date`]
pub fn post_op_profile(days_ago: i64) -> Profile {
    Profile {
        surgery_type: Some(SurgeryType::TopSurgery),
        surgery_date: Some(start_date() - chrono::Duration::days(days_ago)),
        ..base_profile()
    }
}

/// On testosterone for `months`
pub fn hrt_profile(months: u32) -> Profile {
    Profile {
        on_hrt: true,
        hrt_type: Some(HrtType::Testosterone),
        hrt_months_duration: Some(months),
        ..base_profile()
    }
}
