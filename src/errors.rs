// ABOUTME: Unified error types for the plan generation and safety-rule engine
// ABOUTME: Defines the engine error taxonomy and the recoverability contract for callers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling
//!
//! The engine exposes a small, closed error taxonomy. Pipeline stages never
//! swallow errors; the plan generator is the single place allowed to convert
//! a selector failure into a rest-day fallback, and it records having done so.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::Duration;

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by the plan generation pipeline
#[derive(Debug, Error)]
pub enum EngineError {
    /// The filtered catalog cannot satisfy the requested duration/constraint
    /// combination. Recoverable: the plan generator falls back to a rest day.
    #[error(
        "insufficient exercises for a {duration} workout: {available} available, {needed} needed"
    )]
    InsufficientExercises {
        /// Requested session duration
        duration: Duration,
        /// Candidates left after equipment and constraint filtering
        available: usize,
        /// Minimum candidates for a coherent workout
        needed: usize,
    },

    /// A required profile field is missing or out of range. Raised at the
    /// profile boundary, before any rule is evaluated.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// A regeneration or swap target day does not exist in the given plan
    #[error("day {day_number} does not exist in this plan")]
    RegenerationConflict {
        /// The offending day number (1-based)
        day_number: i64,
    },

    /// Engine configuration failed validation or parsing
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Whether the plan generator may absorb this error into a rest-day
    /// fallback. Everything else propagates unchanged.
    #[must_use]
    pub const fn is_rest_day_fallback(&self) -> bool {
        matches!(self, Self::InsufficientExercises { .. })
    }

    /// Stable machine-readable code surfaced to presentation layers
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InsufficientExercises { .. } => ErrorCode::InsufficientExercises,
            Self::InvalidProfile(_) => ErrorCode::InvalidProfile,
            Self::RegenerationConflict { .. } => ErrorCode::RegenerationConflict,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }
}

/// Machine-readable error codes for UI and analytics consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// No coherent workout possible for the slot
    #[serde(rename = "INSUFFICIENT_EXERCISES")]
    InsufficientExercises,
    /// Profile rejected before pipeline entry
    #[serde(rename = "INVALID_PROFILE")]
    InvalidProfile,
    /// Regeneration target not found in the plan
    #[serde(rename = "REGENERATION_CONFLICT")]
    RegenerationConflict,
    /// Engine configuration invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_exercises_is_the_only_fallback() {
        let err = EngineError::InsufficientExercises {
            duration: Duration::Min30,
            available: 1,
            needed: 3,
        };
        assert!(err.is_rest_day_fallback());
        assert!(!EngineError::InvalidProfile("bad".into()).is_rest_day_fallback());
        assert!(!EngineError::RegenerationConflict { day_number: 9 }.is_rest_day_fallback());
    }

    #[test]
    fn error_codes_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::InsufficientExercises).unwrap();
        assert_eq!(json, "\"INSUFFICIENT_EXERCISES\"");
    }
}
