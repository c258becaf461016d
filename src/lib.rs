// ABOUTME: Library entry point for the transfit plan generation engine
// ABOUTME: Wires the profile, recovery, safety, selection, plan, and store modules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Transfit Engine
//!
//! Plan generation and safety-rule adaptation for trans-inclusive fitness
//! scheduling. The engine synthesizes a week of workouts per user and
//! adapts every exercise choice to time-varying safety constraints derived
//! from a medical/identity profile: hormone therapy status, chest-binding
//! habits, and post-surgical recovery stage.
//!
//! ## Pipeline
//!
//! Data flows one direction:
//!
//! ```text
//! Profile → RecoveryPhase → ExerciseConstraintSet → selection → Plan
//! ```
//!
//! - [`recovery`] derives the current post-surgical phase from dates alone.
//! - [`safety`] folds a declarative rule registry into constraints and
//!   UI-facing [`safety::AppliedRule`] records.
//! - [`selection`] filters and weights the exercise catalog, drawing a
//!   reproducible workout from a caller-supplied seed.
//! - [`plan`] orchestrates the above across 7 days × 4 duration variants,
//!   and regenerates single days without destabilizing the week.
//! - [`store`] holds user bookmarks and swaps them into future slots.
//!
//! Everything upstream of [`store`] is synchronous pure computation over
//! explicit arguments; nothing reads ambient state, which is what makes
//! generation deterministic and testable.
//!
//! ## Example
//!
//! ```rust,no_run
//! use transfit_engine::plan::generate_plan;
//! use transfit_engine::selection::InMemoryCatalog;
//! # fn profile() -> transfit_engine::models::Profile { unimplemented!() }
//!
//! let catalog = InMemoryCatalog::new(vec![]);
//! let start = chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//! let plan = generate_plan(&profile(), &catalog, start, 42)?;
//! println!("generated {} days", plan.days.len());
//! # Ok::<(), transfit_engine::errors::EngineError>(())
//! ```

/// Fire-and-forget analytics signals
pub mod analytics;
/// Engine configuration with environment overrides
pub mod config;
/// Shared tag, cue, and limit constants
pub mod constants;
/// Unified error taxonomy
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Core data models
pub mod models;
/// Weekly generation and single-day regeneration
pub mod plan;
/// Post-surgical recovery phase calculator
pub mod recovery;
/// Safety rule engine
pub mod safety;
/// Exercise catalog and selector
pub mod selection;
/// Saved workout store and persistence interfaces
pub mod store;

pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use models::{Day, Duration, Plan, Profile, SavedWorkout, Workout};
pub use plan::{generate_plan, regenerate_day};
pub use recovery::{compute_phase, recovery_guide, RecoveryPhase};
pub use safety::{evaluate, AppliedRule, ExerciseConstraintSet};
pub use selection::{select_exercises, ExerciseCatalog, InMemoryCatalog};
pub use store::{swap_into_day, InMemorySavedWorkoutStore, SavedWorkoutStore, SwapMode};
