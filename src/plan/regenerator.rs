// ABOUTME: Single-day regenerator refreshing one slot against the current profile and date
// ABOUTME: Converts rest days to bonus workout days while preserving provenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Single-day regeneration
//!
//! Re-runs the recovery calculator, rule engine, and selector for one day
//! only, using the current profile and the current date rather than the
//! plan's original generation date. Regeneration is local by design: it
//! does not re-balance the rest of the week, and two concurrent calls on
//! different days return independent `Day` values the caller merges by
//! `day_number`.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::errors::{EngineError, EngineResult};
use crate::models::{Day, Plan, Profile};
use crate::plan::generator::generate_variants;
use crate::recovery::compute_phase;
use crate::safety::evaluate_with_config;
use crate::selection::ExerciseCatalog;

/// Regenerate one day of a plan.
///
/// # Errors
///
/// - [`EngineError::RegenerationConflict`] when `day_number` does not exist
///   in the plan; never a silent no-op.
/// - [`EngineError::InvalidProfile`] when the current profile fails
///   validation.
/// - [`EngineError::InsufficientExercises`] when no duration variant can be
///   built; unlike the weekly generator, the regenerator has no rest-day
///   fallback to absorb it.
pub fn regenerate_day(
    plan: &Plan,
    day_number: u8,
    profile: &Profile,
    catalog: &dyn ExerciseCatalog,
    as_of: NaiveDate,
    seed: u64,
) -> EngineResult<Day> {
    regenerate_day_with_config(
        plan,
        day_number,
        profile,
        catalog,
        as_of,
        seed,
        EngineConfig::global(),
    )
}

/// [`regenerate_day`] with an explicit configuration
pub fn regenerate_day_with_config(
    plan: &Plan,
    day_number: u8,
    profile: &Profile,
    catalog: &dyn ExerciseCatalog,
    as_of: NaiveDate,
    seed: u64,
    config: &EngineConfig,
) -> EngineResult<Day> {
    profile.validate()?;

    let Some(prior) = plan.day(day_number) else {
        return Err(EngineError::RegenerationConflict {
            day_number: i64::from(day_number),
        });
    };

    // Present-day recovery phase: a rest day converted mid-week reflects
    // how healed the user is now, not at plan creation.
    let recovery_phase = match (profile.surgery_type, profile.surgery_date) {
        (Some(surgery_type), Some(surgery_date)) => {
            compute_phase(surgery_type, surgery_date, as_of)
        }
        _ => None,
    };
    let evaluation = evaluate_with_config(profile, recovery_phase.as_ref(), config);

    let variants = generate_variants(profile, catalog, &evaluation, day_number, seed, config)?;
    if variants.all_empty() {
        // Re-run the preferred duration so the error carries real pool
        // numbers; the regenerator has no rest-day fallback.
        let request = crate::selection::SelectionRequest {
            equipment: &profile.equipment,
            primary_goal: profile.primary_goal,
            secondary_goals: &profile.secondary_goals,
            experience: profile.fitness_experience,
            duration: profile.session_duration,
            seed,
        };
        let err = crate::selection::select_exercises(
            catalog,
            &request,
            &evaluation.constraints,
            config,
        )
        .err()
        .unwrap_or(EngineError::InsufficientExercises {
            duration: profile.session_duration,
            available: 0,
            needed: config.selector.min_exercises_per_workout,
        });
        return Err(err);
    }

    let was_rest_day = if prior.is_rest_day {
        Some(true)
    } else {
        prior.was_rest_day
    };

    let mut day = Day::workout(day_number, prior.date, variants);
    day.was_rest_day = was_rest_day;
    tracing::info!(
        day_number,
        converted_rest_day = prior.is_rest_day,
        "day regenerated"
    );
    Ok(day)
}
