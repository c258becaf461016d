// ABOUTME: Safety rule engine evaluating profile facts into exercise constraints
// ABOUTME: Folds declarative rule deltas in fixed category order for reproducible output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Safety Rule Engine
//!
//! A registry of declarative rules, each a stateless predicate/effect pair.
//! Evaluation walks the registry in a fixed category order (`post_op` →
//! `binding` → `hrt_adjustment` → `dysphoria`) and folds each matching
//! rule's delta into an [`ExerciseConstraintSet`]. Multiplier deltas compose
//! multiplicatively on top of earlier categories rather than overwriting
//! them, so the composite is deterministic regardless of which rules happen
//! to match. Exclusions are a union: once a tag is excluded, no later rule
//! can re-admit it within the same evaluation.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::config::EngineConfig;
use crate::constants::limits;
use crate::models::Profile;
use crate::recovery::RecoveryPhase;

pub use rules::{registry, SafetyRule};

/// Rule categories in evaluation priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Post-surgical restrictions, evaluated first
    PostOp,
    /// Chest-binding adjustments
    Binding,
    /// Hormone therapy adjustments
    HrtAdjustment,
    /// Dysphoria-aware selection weighting, evaluated last
    Dysphoria,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PostOp => "post_op",
            Self::Binding => "binding",
            Self::HrtAdjustment => "hrt_adjustment",
            Self::Dysphoria => "dysphoria",
        };
        f.write_str(s)
    }
}

/// UI-facing record of one rule that matched, surfaced unchanged to
/// presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRule {
    /// Stable rule identifier
    pub rule_id: String,
    /// Rule category
    pub category: RuleCategory,
    /// What the rule changed, in plain words
    pub action_taken: String,
    /// Optional message shown directly to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

/// One rule's contribution, folded into the constraint set
#[derive(Debug, Clone, Default)]
pub struct ConstraintDelta {
    /// Tags to exclude outright
    pub exclude_tags: Vec<String>,
    /// Multiplicative rest adjustment (`None` = no change)
    pub rest_factor: Option<f64>,
    /// Multiplicative volume adjustment (`None` = no change)
    pub volume_factor: Option<f64>,
    /// Coaching cues to require
    pub add_cues: Vec<String>,
    /// Tags to down-weight in selection without excluding
    pub deprioritize_tags: Vec<String>,
}

/// Folded result of evaluating all matching rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConstraintSet {
    /// Tags no selected exercise may carry
    pub excluded_tags: HashSet<String>,
    /// Rest-time multiplier, clamped to `[0.5, 1.5]`
    pub rest_multiplier: f64,
    /// Volume multiplier, clamped to `[0.5, 1.5]`
    pub volume_multiplier: f64,
    /// Cues every generated workout must surface
    pub required_cues: HashSet<String>,
    /// Tags down-weighted during selection
    pub deprioritized_tags: HashSet<String>,
}

impl Default for ExerciseConstraintSet {
    fn default() -> Self {
        Self {
            excluded_tags: HashSet::new(),
            rest_multiplier: 1.0,
            volume_multiplier: 1.0,
            required_cues: HashSet::new(),
            deprioritized_tags: HashSet::new(),
        }
    }
}

impl ExerciseConstraintSet {
    /// Fold one delta in. Exclusions and cues union; multipliers compose
    /// multiplicatively and are re-clamped after every fold so the
    /// `[0.5, 1.5]` invariant holds at all times.
    pub fn apply(&mut self, delta: &ConstraintDelta) {
        self.excluded_tags.extend(delta.exclude_tags.iter().cloned());
        self.required_cues.extend(delta.add_cues.iter().cloned());
        self.deprioritized_tags
            .extend(delta.deprioritize_tags.iter().cloned());
        if let Some(factor) = delta.rest_factor {
            self.rest_multiplier = clamp_multiplier(self.rest_multiplier * factor);
        }
        if let Some(factor) = delta.volume_factor {
            self.volume_multiplier = clamp_multiplier(self.volume_multiplier * factor);
        }
    }
}

fn clamp_multiplier(value: f64) -> f64 {
    value.clamp(limits::MULTIPLIER_MIN, limits::MULTIPLIER_MAX)
}

/// Output of one rule engine evaluation
#[derive(Debug, Clone)]
pub struct RuleEvaluation {
    /// Folded constraint set handed to the exercise selector
    pub constraints: ExerciseConstraintSet,
    /// One record per matching rule, in registry order
    pub applied: Vec<AppliedRule>,
}

/// Evaluate the full rule registry against a profile snapshot.
///
/// Deterministic: identical `(profile, recovery_phase, config)` produce
/// byte-identical `applied` content and order. There is no randomness in
/// this stage.
#[must_use]
pub fn evaluate_with_config(
    profile: &Profile,
    recovery_phase: Option<&RecoveryPhase>,
    config: &EngineConfig,
) -> RuleEvaluation {
    let mut constraints = ExerciseConstraintSet::default();
    let mut applied = Vec::new();

    for rule in registry() {
        if !rule.applies(profile, recovery_phase, config) {
            continue;
        }
        let outcome = rule.outcome(profile, recovery_phase, config);
        constraints.apply(&outcome.delta);
        tracing::debug!(
            rule_id = rule.id(),
            category = %rule.category(),
            "safety rule matched"
        );
        applied.push(outcome.applied);
    }

    RuleEvaluation {
        constraints,
        applied,
    }
}

/// [`evaluate_with_config`] with the process-wide configuration
#[must_use]
pub fn evaluate(profile: &Profile, recovery_phase: Option<&RecoveryPhase>) -> RuleEvaluation {
    evaluate_with_config(profile, recovery_phase, EngineConfig::global())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_clamp_after_every_fold() {
        let mut set = ExerciseConstraintSet::default();
        set.apply(&ConstraintDelta {
            rest_factor: Some(4.0),
            ..ConstraintDelta::default()
        });
        assert!((set.rest_multiplier - limits::MULTIPLIER_MAX).abs() < f64::EPSILON);

        set.apply(&ConstraintDelta {
            volume_factor: Some(0.1),
            ..ConstraintDelta::default()
        });
        assert!((set.volume_multiplier - limits::MULTIPLIER_MIN).abs() < f64::EPSILON);
    }

    #[test]
    fn exclusions_are_a_union() {
        let mut set = ExerciseConstraintSet::default();
        set.apply(&ConstraintDelta {
            exclude_tags: vec!["high_impact".into()],
            ..ConstraintDelta::default()
        });
        set.apply(&ConstraintDelta {
            exclude_tags: vec!["chest_compression".into()],
            ..ConstraintDelta::default()
        });
        assert!(set.excluded_tags.contains("high_impact"));
        assert!(set.excluded_tags.contains("chest_compression"));
    }

    #[test]
    fn registry_is_grouped_by_category_priority() {
        let mut last = RuleCategory::PostOp;
        for rule in registry() {
            assert!(rule.category() >= last, "registry out of category order");
            last = rule.category();
        }
    }
}
