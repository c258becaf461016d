// ABOUTME: Exercise catalog trait and in-memory backend for the selector
// ABOUTME: Normalizes raw equipment strings the way the library import pipeline does
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Exercise catalog access
//!
//! The catalog is an external, read-only dataset; the engine consumes it
//! through [`ExerciseCatalog`] and may share one instance freely across
//! concurrent evaluations. [`InMemoryCatalog`] backs tests and embedded use.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::EquipmentId;

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Slug-style identifier, unique within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Style and safety tags; rules and goals match against these
    pub tags: HashSet<String>,
    /// Every token here must be available for the exercise to be selectable
    pub equipment_required: HashSet<EquipmentId>,
    /// Primary muscle groups, also matched by goal weighting
    pub muscle_groups: Vec<String>,
}

/// Read-only exercise catalog lookup
pub trait ExerciseCatalog: Send + Sync {
    /// Exercise by id
    fn get_exercise(&self, id: &str) -> Option<&Exercise>;

    /// All exercises, in stable catalog order
    fn all_exercises(&self) -> &[Exercise];
}

/// Vec-backed catalog with an id index
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    exercises: Vec<Exercise>,
    by_id: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog from entries. Later duplicates of an id shadow
    /// earlier ones in lookup but both remain in iteration order.
    #[must_use]
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let by_id = exercises
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { exercises, by_id }
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// True when the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseCatalog for InMemoryCatalog {
    fn get_exercise(&self, id: &str) -> Option<&Exercise> {
        self.by_id.get(id).map(|&i| &self.exercises[i])
    }

    fn all_exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

/// Normalize a raw equipment description to a catalog token, mirroring the
/// exercise library import pipeline so profiles and catalog entries agree.
#[must_use]
pub fn normalize_equipment(raw: &str) -> EquipmentId {
    let n = raw.trim().to_lowercase();
    if n == "body weight" || n == "bodyweight" || n.is_empty() {
        EquipmentId::Bodyweight
    } else if n.contains("dumbbell") {
        EquipmentId::Dumbbell
    } else if n.contains("kettlebell") {
        EquipmentId::Kettlebell
    } else if n.contains("barbell") || n.contains("smith") || n.contains("trap bar") || n.contains("ez bar") {
        EquipmentId::Barbell
    } else if n.contains("band") {
        EquipmentId::Band
    } else if n.contains("bench") {
        EquipmentId::Bench
    } else if n.contains("step") || n.contains("box") {
        EquipmentId::Step
    } else if n.contains("cable") {
        EquipmentId::Cable
    } else if n.contains("machine") || n.contains("leverage") {
        EquipmentId::Machine
    } else if n.contains("bike") || n.contains("ergometer") {
        EquipmentId::Bike
    } else if n.contains("tread") {
        EquipmentId::Treadmill
    } else if n.contains("sled") {
        EquipmentId::Sled
    } else if matches!(
        n.as_str(),
        "assisted" | "roller" | "rope" | "medicine ball" | "bosu ball" | "hammer" | "wheel roller"
    ) {
        // Accessory items are treated as bodyweight, matching the importer.
        EquipmentId::Bodyweight
    } else {
        EquipmentId::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_common_equipment_strings() {
        assert_eq!(normalize_equipment("Body Weight"), EquipmentId::Bodyweight);
        assert_eq!(normalize_equipment("dumbbell pair"), EquipmentId::Dumbbell);
        assert_eq!(normalize_equipment("EZ bar"), EquipmentId::Barbell);
        assert_eq!(normalize_equipment("resistance band"), EquipmentId::Band);
        assert_eq!(normalize_equipment("vibrating plate"), EquipmentId::Other);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = InMemoryCatalog::new(vec![Exercise {
            id: "goblet-squat".into(),
            name: "Goblet Squat".into(),
            tags: HashSet::new(),
            equipment_required: HashSet::from([EquipmentId::Dumbbell]),
            muscle_groups: vec!["quads".into()],
        }]);
        assert!(catalog.get_exercise("goblet-squat").is_some());
        assert!(catalog.get_exercise("missing").is_none());
    }
}
