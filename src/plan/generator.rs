// ABOUTME: Weekly plan generator producing 7 days with four duration variants each
// ABOUTME: Spreads workout days round-robin and falls back to rest days on pool exhaustion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Weekly plan generator
//!
//! Each day moves `Undecided → RestDay | WorkoutDay`. A day is a rest day
//! when the weekly frequency is already satisfied, or when the selector
//! signals insufficiency for every duration variant; the latter is recorded
//! on the plan so callers can tell "no workout needed" from "no workout
//! possible". This is the single place a selector failure may be absorbed.

use chrono::NaiveDate;
use uuid::Uuid;

use super::derive_seed;
use crate::analytics;
use crate::config::EngineConfig;
use crate::constants::limits;
use crate::errors::EngineResult;
use crate::models::{Day, DurationVariants, EquipmentId, Plan, Profile, Workout};
use crate::recovery::compute_phase;
use crate::safety::{evaluate_with_config, RuleEvaluation};
use crate::selection::{select_exercises, ExerciseCatalog, SelectionRequest};

/// Generate a full 7-day plan.
///
/// Idempotent: identical `(profile, start_date, seed)` yield an identical
/// plan apart from its fresh `id`. Day and variant generation order is
/// fixed (ascending day, then ascending duration).
///
/// # Errors
///
/// Returns [`crate::errors::EngineError::InvalidProfile`] when the profile
/// fails boundary validation. Selector insufficiency never escapes: it
/// becomes a recorded rest-day fallback.
pub fn generate_plan(
    profile: &Profile,
    catalog: &dyn ExerciseCatalog,
    start_date: NaiveDate,
    seed: u64,
) -> EngineResult<Plan> {
    generate_plan_with_config(profile, catalog, start_date, seed, EngineConfig::global())
}

/// [`generate_plan`] with an explicit configuration
pub fn generate_plan_with_config(
    profile: &Profile,
    catalog: &dyn ExerciseCatalog,
    start_date: NaiveDate,
    seed: u64,
    config: &EngineConfig,
) -> EngineResult<Plan> {
    profile.validate()?;

    let recovery_phase = match (profile.surgery_type, profile.surgery_date) {
        (Some(surgery_type), Some(surgery_date)) => {
            compute_phase(surgery_type, surgery_date, start_date)
        }
        _ => None,
    };
    let evaluation = evaluate_with_config(profile, recovery_phase.as_ref(), config);

    let slots = workout_slots(profile.workout_frequency);
    let mut days = Vec::with_capacity(usize::from(limits::PLAN_DAYS));
    let mut fallback_rest_days = Vec::new();

    for day_number in 1..=limits::PLAN_DAYS {
        let date = start_date + chrono::Duration::days(i64::from(day_number - 1));
        if !slots[usize::from(day_number - 1)] {
            days.push(Day::rest(day_number, date));
            continue;
        }

        let variants = generate_variants(profile, catalog, &evaluation, day_number, seed, config)?;
        if variants.all_empty() {
            tracing::warn!(day_number, "no variant satisfiable, falling back to rest day");
            if profile.equipment.contains(&EquipmentId::Other) {
                analytics::log_equipment_request("selection failed with unmodeled equipment");
            }
            fallback_rest_days.push(day_number);
            days.push(Day::rest(day_number, date));
        } else {
            days.push(Day::workout(day_number, date, variants));
        }
    }

    Ok(Plan {
        id: Uuid::new_v4(),
        user_id: profile.user_id,
        start_date,
        days,
        fallback_rest_days,
    })
}

/// Generate all four duration variants for one workout day.
///
/// Insufficiency leaves that variant `None`; any other selector error
/// propagates unchanged.
pub(crate) fn generate_variants(
    profile: &Profile,
    catalog: &dyn ExerciseCatalog,
    evaluation: &RuleEvaluation,
    day_number: u8,
    seed: u64,
    config: &EngineConfig,
) -> EngineResult<DurationVariants> {
    let mut variants = DurationVariants::default();
    for duration in crate::models::Duration::ALL {
        let request = SelectionRequest {
            equipment: &profile.equipment,
            primary_goal: profile.primary_goal,
            secondary_goals: &profile.secondary_goals,
            experience: profile.fitness_experience,
            duration,
            seed: derive_seed(seed, day_number, duration.minutes()),
        };
        match select_exercises(catalog, &request, &evaluation.constraints, config) {
            Ok(exercises) => variants.set(
                duration,
                Some(Workout {
                    exercises,
                    applied_rules: evaluation.applied.clone(),
                }),
            ),
            Err(err) if err.is_rest_day_fallback() => {
                tracing::debug!(day_number, %duration, "variant unsatisfiable");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(variants)
}

/// Round-robin spread of `frequency` workout days across the week, avoiding
/// adjacent rest days where the arithmetic allows
fn workout_slots(frequency: u8) -> [bool; 7] {
    let frequency = usize::from(frequency.min(limits::PLAN_DAYS));
    let mut slots = [false; 7];
    for i in 0..frequency {
        slots[i * 7 / frequency] = true;
    }
    slots
}
