// ABOUTME: Exercise selector filtering the catalog and drawing a weighted, seeded workout
// ABOUTME: Goal tags weight the pool; constraints exclude, deprioritize, and scale volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Exercise Selector
//!
//! Given the catalog, the user's equipment and goals, and a folded
//! constraint set, picks and orders the exercises for one workout variant.
//! Selection is reproducible: ties are broken by a caller-supplied seed,
//! and identical inputs always yield identical output.

pub mod catalog;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::constants::tags;
use crate::errors::{EngineError, EngineResult};
use crate::models::{
    Duration, EquipmentId, FitnessExperience, FitnessGoal, Prescription, WorkoutExercise,
};
use crate::safety::ExerciseConstraintSet;

pub use catalog::{normalize_equipment, Exercise, ExerciseCatalog, InMemoryCatalog};

/// Everything the selector needs beyond catalog and constraints
#[derive(Debug, Clone)]
pub struct SelectionRequest<'a> {
    /// Equipment available to the user
    pub equipment: &'a HashSet<EquipmentId>,
    /// Goal weighted 1.0 per matching tag
    pub primary_goal: FitnessGoal,
    /// Goals weighted 0.5 per matching tag
    pub secondary_goals: &'a [FitnessGoal],
    /// Drives the set/rep scheme
    pub experience: FitnessExperience,
    /// Session length to fill
    pub duration: Duration,
    /// Tie-break seed for reproducible draws
    pub seed: u64,
}

/// Select and order the exercises for one workout variant.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientExercises`] when the filtered pool is
/// smaller than the configured minimum for a coherent workout. Callers
/// decide whether to relax constraints or mark the slot a rest day; the
/// selector never silently returns a short or empty workout.
pub fn select_exercises(
    catalog: &dyn ExerciseCatalog,
    request: &SelectionRequest<'_>,
    constraints: &ExerciseConstraintSet,
    config: &EngineConfig,
) -> EngineResult<Vec<WorkoutExercise>> {
    let mut candidates: Vec<&Exercise> = catalog
        .all_exercises()
        .iter()
        .filter(|exercise| {
            exercise.equipment_required.is_subset(request.equipment)
                && exercise
                    .tags
                    .is_disjoint(&constraints.excluded_tags)
        })
        .collect();
    // Stable order regardless of catalog shuffling, so the seed alone
    // determines the draw.
    candidates.sort_by(|a, b| a.id.cmp(&b.id));

    let needed = config.selector.min_exercises_per_workout;
    if candidates.len() < needed {
        tracing::info!(
            duration = %request.duration,
            available = candidates.len(),
            needed,
            "exercise pool exhausted"
        );
        return Err(EngineError::InsufficientExercises {
            duration: request.duration,
            available: candidates.len(),
            needed,
        });
    }

    let target = target_count(request.duration, constraints.volume_multiplier, config);
    let count = target.min(candidates.len());

    let mut weights: Vec<f64> = candidates
        .iter()
        .map(|exercise| draw_weight(exercise, request, constraints, config))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let index = weighted_pick(&mut rng, &weights);
        picked.push(candidates[index]);
        // Without replacement; negative marks a consumed slot so the
        // zero-weight fallback below never re-picks it.
        weights[index] = -1.0;
    }

    Ok(picked
        .into_iter()
        .map(|exercise| prescribe(exercise, request.experience, constraints))
        .collect())
}

/// Exercise count from the time-per-exercise heuristic, scaled by the
/// volume multiplier and clamped to the configured bounds
fn target_count(duration: Duration, volume_multiplier: f64, config: &EngineConfig) -> usize {
    let raw = f64::from(duration.minutes()) / config.selector.minutes_per_exercise;
    let scaled = (raw * volume_multiplier).round() as usize;
    scaled.clamp(
        config.selector.min_exercises_per_workout,
        config.selector.max_exercises_per_workout,
    )
}

fn draw_weight(
    exercise: &Exercise,
    request: &SelectionRequest<'_>,
    constraints: &ExerciseConstraintSet,
    config: &EngineConfig,
) -> f64 {
    let mut weight = config.selector.base_weight;
    weight += config.selector.primary_goal_weight
        * f64::from(goal_matches(exercise, request.primary_goal));
    for &goal in request.secondary_goals {
        weight += config.selector.secondary_goal_weight * f64::from(goal_matches(exercise, goal));
    }
    if !exercise.tags.is_disjoint(&constraints.deprioritized_tags) {
        weight *= config.selector.deprioritized_factor;
    }
    weight
}

/// Matching tag count for one goal, over style tags and muscle groups
fn goal_matches(exercise: &Exercise, goal: FitnessGoal) -> u32 {
    goal.matching_tags()
        .iter()
        .filter(|&&tag| {
            exercise.tags.contains(tag) || exercise.muscle_groups.iter().any(|m| m == tag)
        })
        .count() as u32
}

/// Weighted index pick. Zero-weight entries are never chosen while any
/// positive weight remains.
fn weighted_pick(rng: &mut ChaCha8Rng, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().filter(|&&w| w > 0.0).sum();
    if total <= 0.0 {
        // Only zero-weight candidates remain; take the first unconsumed one.
        return weights.iter().position(|&w| w >= 0.0).unwrap_or(0);
    }
    let mut roll = rng.gen_range(0.0..total);
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        if roll < weight {
            return index;
        }
        roll -= weight;
    }
    weights.len() - 1
}

fn prescribe(
    exercise: &Exercise,
    experience: FitnessExperience,
    constraints: &ExerciseConstraintSet,
) -> WorkoutExercise {
    let (base_sets, base_reps, base_rest) = match experience {
        FitnessExperience::Beginner => (2, 10, 75),
        FitnessExperience::Intermediate => (3, 10, 60),
        FitnessExperience::Advanced => (4, 8, 60),
    };

    let sets = ((f64::from(base_sets) * constraints.volume_multiplier).round() as u32).max(1);
    let rest_seconds = (f64::from(base_rest) * constraints.rest_multiplier).round() as u32;

    let timed = exercise.tags.contains(tags::TIMED) || exercise.tags.contains(tags::CARDIO);
    let prescription = if timed {
        Prescription::Seconds(40)
    } else {
        Prescription::Reps(base_reps)
    };

    WorkoutExercise {
        exercise_id: exercise.id.clone(),
        sets,
        prescription,
        rest_seconds,
    }
}
