// ABOUTME: Engine configuration for rule thresholds and selection heuristics
// ABOUTME: Serde-defaulted structs with environment overrides and range validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Engine Configuration
//!
//! Type-safe configuration for the safety rule engine and exercise selector.
//! Tunable thresholds (HRT month buckets, the time-per-exercise heuristic,
//! minimum pool size) live here rather than at their call sites. Values come
//! from serde defaults and can be overridden per process through `TRANSFIT_*`
//! environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field is outside its documented range
    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// An environment override could not be parsed
    #[error("parse error for {variable}: {message}")]
    Parse {
        /// Offending environment variable
        variable: &'static str,
        /// Parser message
        message: String,
    },
}

/// Exercise selector tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Minutes of session time one exercise consumes, rest included
    #[serde(default = "default_minutes_per_exercise")]
    pub minutes_per_exercise: f64,

    /// Fewest exercises that still make a coherent workout
    #[serde(default = "default_min_exercises")]
    pub min_exercises_per_workout: usize,

    /// Cap on exercises per session regardless of duration
    #[serde(default = "default_max_exercises")]
    pub max_exercises_per_workout: usize,

    /// Baseline draw weight for exercises matching no goal tag
    #[serde(default = "default_base_weight")]
    pub base_weight: f64,

    /// Weight contribution per primary-goal tag match
    #[serde(default = "default_primary_goal_weight")]
    pub primary_goal_weight: f64,

    /// Weight contribution per secondary-goal tag match
    #[serde(default = "default_secondary_goal_weight")]
    pub secondary_goal_weight: f64,

    /// Weight factor applied when an exercise carries a deprioritized tag
    #[serde(default = "default_deprioritized_factor")]
    pub deprioritized_factor: f64,
}

fn default_minutes_per_exercise() -> f64 {
    7.0
}
fn default_min_exercises() -> usize {
    3
}
fn default_max_exercises() -> usize {
    10
}
fn default_base_weight() -> f64 {
    0.25
}
fn default_primary_goal_weight() -> f64 {
    1.0
}
fn default_secondary_goal_weight() -> f64 {
    0.5
}
fn default_deprioritized_factor() -> f64 {
    0.5
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            minutes_per_exercise: default_minutes_per_exercise(),
            min_exercises_per_workout: default_min_exercises(),
            max_exercises_per_workout: default_max_exercises(),
            base_weight: default_base_weight(),
            primary_goal_weight: default_primary_goal_weight(),
            secondary_goal_weight: default_secondary_goal_weight(),
            deprioritized_factor: default_deprioritized_factor(),
        }
    }
}

/// HRT rule family tuning. Bucket boundaries are months on therapy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrtRuleConfig {
    /// Below this many months: early-therapy volume reduction applies
    #[serde(default = "default_hrt_early_months")]
    pub early_months: u32,

    /// At or past this many months: no adjustment
    #[serde(default = "default_hrt_established_months")]
    pub established_months: u32,

    /// Volume factor during the early bucket (0.85 = reduce volume 15%)
    #[serde(default = "default_hrt_early_volume_factor")]
    pub early_volume_factor: f64,

    /// Volume factor between the buckets
    #[serde(default = "default_hrt_mid_volume_factor")]
    pub mid_volume_factor: f64,
}

fn default_hrt_early_months() -> u32 {
    3
}
fn default_hrt_established_months() -> u32 {
    12
}
fn default_hrt_early_volume_factor() -> f64 {
    0.85
}
fn default_hrt_mid_volume_factor() -> f64 {
    0.95
}

impl Default for HrtRuleConfig {
    fn default() -> Self {
        Self {
            early_months: default_hrt_early_months(),
            established_months: default_hrt_established_months(),
            early_volume_factor: default_hrt_early_volume_factor(),
            mid_volume_factor: default_hrt_mid_volume_factor(),
        }
    }
}

/// Binding rule family tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingRuleConfig {
    /// Rest multiplier applied whenever the binding rule triggers
    #[serde(default = "default_binding_rest_factor")]
    pub rest_factor: f64,

    /// Daily wear beyond this many hours adds the breathing-check cue
    #[serde(default = "default_binding_long_wear_hours")]
    pub long_wear_hours: f64,
}

fn default_binding_rest_factor() -> f64 {
    1.15
}
fn default_binding_long_wear_hours() -> f64 {
    8.0
}

impl Default for BindingRuleConfig {
    fn default() -> Self {
        Self {
            rest_factor: default_binding_rest_factor(),
            long_wear_hours: default_binding_long_wear_hours(),
        }
    }
}

/// Post-op rule family tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostOpRuleConfig {
    /// Extra rest budget distributed inversely with phase index:
    /// phase 0 gets the full boost, later phases progressively less
    /// (`1.0 + rest_boost / (phase_index + 1)`)
    #[serde(default = "default_post_op_rest_boost")]
    pub rest_boost: f64,
}

fn default_post_op_rest_boost() -> f64 {
    0.5
}

impl Default for PostOpRuleConfig {
    fn default() -> Self {
        Self {
            rest_boost: default_post_op_rest_boost(),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exercise selector tuning
    #[serde(default)]
    pub selector: SelectorConfig,
    /// HRT rule family
    #[serde(default)]
    pub hrt: HrtRuleConfig,
    /// Binding rule family
    #[serde(default)]
    pub binding: BindingRuleConfig,
    /// Post-op rule family
    #[serde(default)]
    pub post_op: PostOpRuleConfig,
}

static GLOBAL_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Process-wide configuration, initialized from the environment on
    /// first access. Falls back to defaults when an override is absent.
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(|| Self::from_env().unwrap_or_default())
    }

    /// Build a configuration from `TRANSFIT_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override fails to parse or a value
    /// falls outside its documented range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parse_env_f64("TRANSFIT_MINUTES_PER_EXERCISE")? {
            config.selector.minutes_per_exercise = v;
        }
        if let Some(v) = parse_env_usize("TRANSFIT_MIN_EXERCISES")? {
            config.selector.min_exercises_per_workout = v;
        }
        if let Some(v) = parse_env_usize("TRANSFIT_MAX_EXERCISES")? {
            config.selector.max_exercises_per_workout = v;
        }
        if let Some(v) = parse_env_u32("TRANSFIT_HRT_EARLY_MONTHS")? {
            config.hrt.early_months = v;
        }
        if let Some(v) = parse_env_u32("TRANSFIT_HRT_ESTABLISHED_MONTHS")? {
            config.hrt.established_months = v;
        }
        if let Some(v) = parse_env_f64("TRANSFIT_BINDING_LONG_WEAR_HOURS")? {
            config.binding.long_wear_hours = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// Range-check every tunable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.minutes_per_exercise < 3.0 || self.selector.minutes_per_exercise > 20.0 {
            return Err(ConfigError::ValueOutOfRange(
                "selector.minutes_per_exercise must be 3..=20",
            ));
        }
        if self.selector.min_exercises_per_workout == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "selector.min_exercises_per_workout must be >= 1",
            ));
        }
        if self.selector.max_exercises_per_workout < self.selector.min_exercises_per_workout {
            return Err(ConfigError::ValueOutOfRange(
                "selector.max_exercises_per_workout must be >= min_exercises_per_workout",
            ));
        }
        if !(0.0..=1.0).contains(&self.selector.deprioritized_factor) {
            return Err(ConfigError::ValueOutOfRange(
                "selector.deprioritized_factor must be 0..=1",
            ));
        }
        if self.hrt.early_months >= self.hrt.established_months {
            return Err(ConfigError::ValueOutOfRange(
                "hrt.early_months must be below hrt.established_months",
            ));
        }
        for (name, value) in [
            ("hrt.early_volume_factor", self.hrt.early_volume_factor),
            ("hrt.mid_volume_factor", self.hrt.mid_volume_factor),
            ("binding.rest_factor", self.binding.rest_factor),
        ] {
            if !(0.5..=1.5).contains(&value) {
                tracing::warn!(field = name, value, "multiplier outside clamp range");
                return Err(ConfigError::ValueOutOfRange(
                    "rule multipliers must be 0.5..=1.5",
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.post_op.rest_boost) {
            return Err(ConfigError::ValueOutOfRange(
                "post_op.rest_boost must be 0..=1",
            ));
        }
        Ok(())
    }
}

fn parse_env_f64(variable: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: std::num::ParseFloatError| ConfigError::Parse {
                variable,
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

fn parse_env_usize(variable: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: std::num::ParseIntError| ConfigError::Parse {
                variable,
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

fn parse_env_u32(variable: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: std::num::ParseIntError| ConfigError::Parse {
                variable,
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
