// ABOUTME: DashMap-backed saved workout store for tests and single-process use
// ABOUTME: Upserts by natural key so the save toggle never creates duplicate rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! In-memory saved workout store

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::{SaveWorkoutRequest, SavedWorkoutStore};
use crate::models::{Duration, SavedWorkout};

/// Concurrent in-memory backend. Bookmark counts per user are small, so
/// natural-key lookups scan rather than maintaining a second index.
#[derive(Debug, Default)]
pub struct InMemorySavedWorkoutStore {
    rows: DashMap<Uuid, SavedWorkout>,
}

impl InMemorySavedWorkoutStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn find_by_key(
        &self,
        user_id: Uuid,
        plan_id: Uuid,
        day_number: u8,
        duration: Duration,
    ) -> Option<SavedWorkout> {
        self.rows
            .iter()
            .find(|row| {
                row.user_id == user_id
                    && row.plan_id == plan_id
                    && row.day_number == day_number
                    && row.duration == duration
            })
            .map(|row| row.value().clone())
    }
}

#[async_trait]
impl SavedWorkoutStore for InMemorySavedWorkoutStore {
    async fn save(&self, request: SaveWorkoutRequest) -> Result<SavedWorkout> {
        // Upsert on the natural key: a second save of the same slot updates
        // the existing row instead of duplicating it.
        if let Some(existing) = self.find_by_key(
            request.user_id,
            request.plan_id,
            request.day_number,
            request.duration,
        ) {
            let updated = SavedWorkout {
                name: request.name,
                data: request.data,
                ..existing
            };
            self.rows.insert(updated.id, updated.clone());
            return Ok(updated);
        }

        let row = SavedWorkout {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            plan_id: request.plan_id,
            day_number: request.day_number,
            duration: request.duration,
            name: request.name,
            data: request.data,
            usage_count: 0,
            created_at: Utc::now(),
        };
        self.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<SavedWorkout>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn find(
        &self,
        user_id: Uuid,
        plan_id: Uuid,
        day_number: u8,
        duration: Duration,
    ) -> Result<Option<SavedWorkout>> {
        Ok(self.find_by_key(user_id, plan_id, day_number, duration))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.rows.remove(&id).is_some())
    }

    async fn record_usage(&self, id: Uuid) -> Result<()> {
        let Some(mut row) = self.rows.get_mut(&id) else {
            bail!("saved workout {id} not found");
        };
        row.usage_count += 1;
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SavedWorkout>> {
        let mut rows: Vec<SavedWorkout> = self
            .rows
            .iter()
            .filter(|row| row.user_id == user_id)
            .map(|row| row.value().clone())
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
