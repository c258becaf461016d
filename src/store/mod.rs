// ABOUTME: Async persistence traits for saved workouts and external collaborators
// ABOUTME: Defines the store contract plus the swap-into-day operation on plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Saved Workout Store
//!
//! Content-addressable bookmarks keyed by `(user, plan, day, duration)`.
//! The store is the engine's only async surface; everything upstream is
//! pure computation. Persistence backends implement [`SavedWorkoutStore`];
//! an in-memory backend ships in [`memory`].

pub mod memory;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::{Duration, Plan, Profile, SavedWorkout, Workout, WorkoutLog};

pub use memory::InMemorySavedWorkoutStore;

/// Fields for a new or updated bookmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveWorkoutRequest {
    /// Owning user
    pub user_id: Uuid,
    /// Plan the workout comes from
    pub plan_id: Uuid,
    /// Day the workout comes from
    pub day_number: u8,
    /// Duration variant being saved
    pub duration: Duration,
    /// User-chosen display name
    pub name: String,
    /// The workout itself
    pub data: Workout,
}

/// Bookmark storage contract.
///
/// `find` backs the idempotent is-saved toggle: saving an already-saved
/// natural key updates in place rather than creating a duplicate row, so
/// save → delete always returns to the original state.
#[async_trait]
pub trait SavedWorkoutStore: Send + Sync {
    /// Insert, or update the row holding the same natural key
    async fn save(&self, request: SaveWorkoutRequest) -> Result<SavedWorkout>;

    /// Bookmark by row id
    async fn get(&self, id: Uuid) -> Result<Option<SavedWorkout>>;

    /// Bookmark by natural key
    async fn find(
        &self,
        user_id: Uuid,
        plan_id: Uuid,
        day_number: u8,
        duration: Duration,
    ) -> Result<Option<SavedWorkout>>;

    /// Remove a bookmark; `false` when the id was already gone
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Increment the usage counter. Callers treat this as fire-and-forget.
    async fn record_usage(&self, id: Uuid) -> Result<()>;

    /// All bookmarks for a user, newest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SavedWorkout>>;
}

/// External persistence collaborator, consumed but never implemented here
/// beyond tests. Plan and profile lifecycles live behind this boundary.
#[async_trait]
pub trait PersistenceProvider: Send + Sync {
    /// Load a user's profile snapshot
    async fn load_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;

    /// Load a user's current plan
    async fn load_plan(&self, user_id: Uuid) -> Result<Option<Plan>>;

    /// Persist a plan
    async fn save_plan(&self, plan: &Plan) -> Result<()>;

    /// Completed-session logs for one week, used by history views
    async fn load_week_logs(&self, user_id: Uuid, week_start: NaiveDate)
        -> Result<Vec<WorkoutLog>>;
}

/// How a saved workout lands in a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapMode {
    /// Overwrite the matching duration variant of the target day
    Replace,
    /// Layer an independent extra workout beside the plan
    Add,
}

/// An extra workout associated with a date but not written into the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraWorkout {
    /// Date the workout is layered onto
    pub date: NaiveDate,
    /// The workout instance
    pub workout: Workout,
    /// Bookmark it came from
    pub source_saved_workout: Uuid,
}

/// Result of [`swap_into_day`]
#[derive(Debug, Clone)]
pub enum SwapOutcome {
    /// The plan's day was modified in the returned plan value
    Replaced {
        /// Day that received the workout
        day_number: u8,
    },
    /// Nothing in the plan changed; the caller owns the extra instance
    Added(ExtraWorkout),
}

/// Swap a saved workout into a target date.
///
/// `Replace` overwrites only the saved workout's own duration variant on
/// the target day; sibling duration variants are deliberately left as they
/// were, even if now inconsistent. `Add` leaves `Plan::days` untouched and
/// returns the extra instance. Usage recording is best-effort: a failure is
/// logged and never blocks the swap.
///
/// # Errors
///
/// Fails when the bookmark does not exist or, in `Replace` mode, when the
/// target date falls outside the plan week.
pub async fn swap_into_day(
    store: &dyn SavedWorkoutStore,
    plan: &mut Plan,
    saved_workout_id: Uuid,
    target_date: NaiveDate,
    mode: SwapMode,
) -> Result<SwapOutcome> {
    let Some(saved) = store
        .get(saved_workout_id)
        .await
        .context("loading saved workout")?
    else {
        bail!("saved workout {saved_workout_id} not found");
    };

    let outcome = match mode {
        SwapMode::Replace => {
            let day_number = plan.day_number_for_date(target_date).ok_or_else(|| {
                let offset = target_date.signed_duration_since(plan.start_date).num_days();
                EngineError::RegenerationConflict {
                    day_number: offset + 1,
                }
            })?;
            let day = plan
                .day_mut(day_number)
                .ok_or(EngineError::RegenerationConflict {
                    day_number: i64::from(day_number),
                })?;
            day.variants.set(saved.duration, Some(saved.data.clone()));
            day.is_rest_day = false;
            SwapOutcome::Replaced { day_number }
        }
        SwapMode::Add => SwapOutcome::Added(ExtraWorkout {
            date: target_date,
            workout: saved.data.clone(),
            source_saved_workout: saved.id,
        }),
    };

    if let Err(err) = store.record_usage(saved.id).await {
        tracing::warn!(
            saved_workout_id = %saved.id,
            error = %err,
            "usage recording failed; continuing"
        );
    }

    Ok(outcome)
}
