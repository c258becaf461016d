// ABOUTME: Recovery phase calculator deriving the current post-surgical phase from dates
// ABOUTME: Pure function of (surgery type, surgery date, as-of date) plus guide lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recovery Phase Calculator
//!
//! Derives the current post-surgical recovery phase from the surgery date
//! and an as-of date. Phases are never stored: they are recomputed fresh on
//! every evaluation, which makes the phase monotonically non-decreasing as
//! time passes without any state to migrate.

pub mod phases;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SurgeryType;
use phases::{phase_table, PhaseSpec};

/// Inclusive week bracket a phase covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeksRange {
    /// First week covered, counted from surgery
    pub start: u32,
    /// Last week covered, `None` when open-ended
    pub end: Option<u32>,
}

/// Current recovery stage, derived from the surgery date.
///
/// `None` from [`compute_phase`] means "no restrictions": either no surgery
/// is recorded or the date is still in the future (pre-op guidance is out
/// of scope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPhase {
    /// 0-based index into the surgery's phase table
    pub phase_index: u8,
    /// Weeks bracket this phase covers
    pub weeks_range: WeeksRange,
    /// What this phase is for
    pub focus: String,
    /// Activity styles encouraged during this phase
    pub allowed_activity_tags: Vec<String>,
    /// Exercise tags excluded while in this phase
    pub avoided_exercise_tags: Vec<String>,
}

impl RecoveryPhase {
    fn from_spec(index: usize, spec: &PhaseSpec) -> Self {
        Self {
            phase_index: index as u8,
            weeks_range: WeeksRange {
                start: spec.weeks_start,
                end: spec.weeks_end,
            },
            focus: spec.focus.to_owned(),
            allowed_activity_tags: spec
                .allowed_activity_tags
                .iter()
                .map(|&t| t.to_owned())
                .collect(),
            avoided_exercise_tags: spec
                .avoided_exercise_tags
                .iter()
                .map(|&t| t.to_owned())
                .collect(),
        }
    }
}

/// Static recovery guide for one surgery type, versionable configuration
/// data surfaced to the UI alongside generated plans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryGuide {
    /// Surgery this guide covers
    pub surgery_type: SurgeryType,
    /// All phases in order
    pub phases: Vec<RecoveryPhase>,
    /// Tips shown next to every phase
    pub general_tips: Vec<String>,
    /// Always-visible disclaimer
    pub disclaimer: String,
}

/// Compute the current recovery phase.
///
/// `weeks_elapsed` is `floor(days / 7)`. A `surgery_date` in the future
/// relative to `as_of` returns `None` (treated as pre-op, no restrictions).
/// Past the final bracket the final phase is returned, so long-healed users
/// keep stable guidance rather than falling off the table.
#[must_use]
pub fn compute_phase(
    surgery_type: SurgeryType,
    surgery_date: NaiveDate,
    as_of: NaiveDate,
) -> Option<RecoveryPhase> {
    let days_elapsed = as_of.signed_duration_since(surgery_date).num_days();
    if days_elapsed < 0 {
        return None;
    }
    let weeks_elapsed = (days_elapsed / 7) as u32;

    let table = phase_table(surgery_type);
    let position = table.iter().position(|spec| {
        weeks_elapsed >= spec.weeks_start
            && spec.weeks_end.map_or(true, |end| weeks_elapsed <= end)
    });
    let index = position.unwrap_or(table.len() - 1);
    Some(RecoveryPhase::from_spec(index, &table[index]))
}

/// Full recovery guide for a surgery type
#[must_use]
pub fn recovery_guide(surgery_type: SurgeryType) -> RecoveryGuide {
    let table = phase_table(surgery_type);
    RecoveryGuide {
        surgery_type,
        phases: table
            .iter()
            .enumerate()
            .map(|(i, spec)| RecoveryPhase::from_spec(i, spec))
            .collect(),
        general_tips: phases::general_tips(surgery_type)
            .iter()
            .map(|&t| t.to_owned())
            .collect(),
        disclaimer: phases::DISCLAIMER.to_owned(),
    }
}
