// ABOUTME: The declarative safety rule registry and per-rule predicate/effect logic
// ABOUTME: Adding a rule means appending an enum variant, not branching deeper if-chains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Safety rule definitions
//!
//! Rules are stateless and side-effect-free. Each variant pairs a predicate
//! (`applies`) with an effect (`outcome`); the engine in the parent module
//! owns ordering and folding.

use super::{AppliedRule, ConstraintDelta, RuleCategory};
use crate::config::EngineConfig;
use crate::constants::{cues, tags};
use crate::models::Profile;
use crate::recovery::RecoveryPhase;

/// Every safety rule known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyRule {
    /// Excludes the current recovery phase's avoided tags and lengthens rest
    PostOpPhaseRestrictions,
    /// Excludes compression/impact/breath-restrictive work while binding
    BindingImpactLimits,
    /// Adds a breathing-check cue for long daily binder wear
    BindingLongWearBreathing,
    /// Reduces volume during the first months of hormone therapy
    HrtVolumeAdjustment,
    /// Down-weights exercises carrying declared dysphoria-trigger tags
    DysphoriaTriggerWeighting,
    /// Down-weights loud or ballistic work in low-sensory mode
    LowSensoryWeighting,
}

/// A matched rule's delta plus its UI-facing record
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    /// Constraint contribution
    pub delta: ConstraintDelta,
    /// Applied-rule record, surfaced unchanged
    pub applied: AppliedRule,
}

/// The full registry, grouped by category in evaluation priority order.
/// The engine walks this slice front to back; order here is load-bearing.
#[must_use]
pub const fn registry() -> &'static [SafetyRule] {
    &[
        SafetyRule::PostOpPhaseRestrictions,
        SafetyRule::BindingImpactLimits,
        SafetyRule::BindingLongWearBreathing,
        SafetyRule::HrtVolumeAdjustment,
        SafetyRule::DysphoriaTriggerWeighting,
        SafetyRule::LowSensoryWeighting,
    ]
}

impl SafetyRule {
    /// Stable identifier surfaced in [`AppliedRule::rule_id`]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::PostOpPhaseRestrictions => "post_op_phase_restrictions",
            Self::BindingImpactLimits => "binding_impact_limits",
            Self::BindingLongWearBreathing => "binding_long_wear_breathing",
            Self::HrtVolumeAdjustment => "hrt_volume_adjustment",
            Self::DysphoriaTriggerWeighting => "dysphoria_trigger_weighting",
            Self::LowSensoryWeighting => "low_sensory_weighting",
        }
    }

    /// Category this rule folds under
    #[must_use]
    pub const fn category(self) -> RuleCategory {
        match self {
            Self::PostOpPhaseRestrictions => RuleCategory::PostOp,
            Self::BindingImpactLimits | Self::BindingLongWearBreathing => RuleCategory::Binding,
            Self::HrtVolumeAdjustment => RuleCategory::HrtAdjustment,
            Self::DysphoriaTriggerWeighting | Self::LowSensoryWeighting => RuleCategory::Dysphoria,
        }
    }

    /// Predicate: does this rule fire for the given snapshot?
    #[must_use]
    pub fn applies(
        self,
        profile: &Profile,
        recovery_phase: Option<&RecoveryPhase>,
        config: &EngineConfig,
    ) -> bool {
        match self {
            Self::PostOpPhaseRestrictions => recovery_phase.is_some(),
            Self::BindingImpactLimits => profile.binds_actively(),
            Self::BindingLongWearBreathing => {
                profile.binds_actively()
                    && profile
                        .binding_duration_hours
                        .is_some_and(|hours| hours > config.binding.long_wear_hours)
            }
            Self::HrtVolumeAdjustment => {
                profile.on_hrt
                    && profile
                        .hrt_months_duration
                        .is_some_and(|months| months < config.hrt.established_months)
            }
            Self::DysphoriaTriggerWeighting => !profile.dysphoria_triggers.is_empty(),
            Self::LowSensoryWeighting => profile.low_sensory_mode,
        }
    }

    /// Effect: the delta and UI record for a snapshot this rule matched.
    /// Callers check [`SafetyRule::applies`] first.
    #[must_use]
    pub fn outcome(
        self,
        profile: &Profile,
        recovery_phase: Option<&RecoveryPhase>,
        config: &EngineConfig,
    ) -> RuleOutcome {
        match self {
            Self::PostOpPhaseRestrictions => post_op_outcome(recovery_phase, config),
            Self::BindingImpactLimits => binding_impact_outcome(config),
            Self::BindingLongWearBreathing => binding_long_wear_outcome(),
            Self::HrtVolumeAdjustment => hrt_outcome(profile, config),
            Self::DysphoriaTriggerWeighting => dysphoria_outcome(profile),
            Self::LowSensoryWeighting => low_sensory_outcome(),
        }
    }
}

fn post_op_outcome(recovery_phase: Option<&RecoveryPhase>, config: &EngineConfig) -> RuleOutcome {
    // Predicate guarantees presence; an absent phase contributes nothing.
    let Some(phase) = recovery_phase else {
        return RuleOutcome {
            delta: ConstraintDelta::default(),
            applied: applied(
                SafetyRule::PostOpPhaseRestrictions,
                "no recovery phase active".into(),
                None,
            ),
        };
    };

    // Earlier phases get proportionally more rest between sets.
    let rest_factor = 1.0 + config.post_op.rest_boost / f64::from(phase.phase_index + 1);
    let mut add_cues = Vec::new();
    if phase.phase_index <= 1 {
        add_cues.push(cues::INCISION_AWARENESS.to_owned());
    }

    RuleOutcome {
        delta: ConstraintDelta {
            exclude_tags: phase.avoided_exercise_tags.clone(),
            rest_factor: Some(rest_factor),
            volume_factor: None,
            add_cues,
            deprioritize_tags: Vec::new(),
        },
        applied: applied(
            SafetyRule::PostOpPhaseRestrictions,
            format!(
                "excluded {} movement patterns for recovery phase {}",
                phase.avoided_exercise_tags.len(),
                phase.phase_index
            ),
            Some(format!("Recovery phase {}: {}", phase.phase_index, phase.focus)),
        ),
    }
}

fn binding_impact_outcome(config: &EngineConfig) -> RuleOutcome {
    RuleOutcome {
        delta: ConstraintDelta {
            exclude_tags: vec![
                tags::CHEST_COMPRESSION.to_owned(),
                tags::HIGH_IMPACT.to_owned(),
                tags::BREATH_RESTRICTIVE.to_owned(),
            ],
            rest_factor: Some(config.binding.rest_factor),
            volume_factor: None,
            add_cues: Vec::new(),
            deprioritize_tags: Vec::new(),
        },
        applied: applied(
            SafetyRule::BindingImpactLimits,
            "excluded compression, impact, and breath-restrictive work; lengthened rest".into(),
            Some(
                "Because you bind, we skip exercises that compress the chest or restrict \
                 breathing and give you a little more rest between sets."
                    .into(),
            ),
        ),
    }
}

fn binding_long_wear_outcome() -> RuleOutcome {
    RuleOutcome {
        delta: ConstraintDelta {
            add_cues: vec![cues::BREATHING_CHECK.to_owned(), cues::BINDER_BREAK.to_owned()],
            ..ConstraintDelta::default()
        },
        applied: applied(
            SafetyRule::BindingLongWearBreathing,
            "added breathing-check cues for long daily binder wear".into(),
            Some(
                "You bind for long stretches; we'll remind you to check your breathing \
                 during the session."
                    .into(),
            ),
        ),
    }
}

fn hrt_outcome(profile: &Profile, config: &EngineConfig) -> RuleOutcome {
    let months = profile.hrt_months_duration.unwrap_or(0);
    let early = months < config.hrt.early_months;
    let volume_factor = if early {
        config.hrt.early_volume_factor
    } else {
        config.hrt.mid_volume_factor
    };
    let add_cues = if early {
        vec![cues::EXTENDED_WARMUP.to_owned()]
    } else {
        Vec::new()
    };

    RuleOutcome {
        delta: ConstraintDelta {
            exclude_tags: Vec::new(),
            rest_factor: None,
            volume_factor: Some(volume_factor),
            add_cues,
            deprioritize_tags: Vec::new(),
        },
        applied: applied(
            SafetyRule::HrtVolumeAdjustment,
            format!("scaled training volume to {:.0}% at {months} months on HRT", volume_factor * 100.0),
            Some(
                "Your body is adapting to hormone therapy, so we keep volume a bit lower \
                 while strength and joints settle in."
                    .into(),
            ),
        ),
    }
}

fn dysphoria_outcome(profile: &Profile) -> RuleOutcome {
    let deprioritize_tags: Vec<String> = profile
        .dysphoria_triggers
        .iter()
        .map(|t| t.deprioritized_tag().to_owned())
        .collect();

    RuleOutcome {
        delta: ConstraintDelta {
            deprioritize_tags: deprioritize_tags.clone(),
            ..ConstraintDelta::default()
        },
        applied: applied(
            SafetyRule::DysphoriaTriggerWeighting,
            format!("down-weighted {} trigger tag(s) in selection", deprioritize_tags.len()),
            None,
        ),
    }
}

fn low_sensory_outcome() -> RuleOutcome {
    RuleOutcome {
        delta: ConstraintDelta {
            deprioritize_tags: vec![tags::HIGH_STIMULATION.to_owned()],
            ..ConstraintDelta::default()
        },
        applied: applied(
            SafetyRule::LowSensoryWeighting,
            "down-weighted high-stimulation exercises".into(),
            None,
        ),
    }
}

fn applied(rule: SafetyRule, action_taken: String, user_message: Option<String>) -> AppliedRule {
    AppliedRule {
        rule_id: rule.id().to_owned(),
        category: rule.category(),
        action_taken,
        user_message,
    }
}
