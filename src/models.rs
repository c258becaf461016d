// ABOUTME: Core data models for the transfit plan generation engine
// ABOUTME: Defines Profile, Plan, Day, Workout, SavedWorkout and their supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! The engine's data flows one direction: `Profile` → `RecoveryPhase` →
//! constraints → selection → `Plan`. Every type here is a plain value;
//! the engine never mutates shared state in place and always returns
//! fresh `Day`/`Plan` values for the caller to persist.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::constants::limits;
use crate::errors::{EngineError, EngineResult};
use crate::safety::AppliedRule;

/// Self-described gender identity, used for copy selection in the UI and
/// never branched on by the rule engine (rules key on concrete facts such
/// as binding or surgery, not on identity labels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderIdentity {
    /// Transmasculine
    TransMasc,
    /// Transfeminine
    TransFem,
    /// Non-binary
    NonBinary,
    /// Questioning or exploring
    Questioning,
    /// Prefers a different description
    Other,
}

/// Training goal used to weight exercise selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Hypertrophy-leaning training
    BuildMuscle,
    /// Strength-leaning training
    GainStrength,
    /// Cardiovascular conditioning
    Endurance,
    /// Range of motion and joint health
    Mobility,
    /// Balanced general fitness
    GeneralHealth,
}

impl FitnessGoal {
    /// Style and muscle-group tags an exercise may carry to count as a
    /// match for this goal
    #[must_use]
    pub const fn matching_tags(self) -> &'static [&'static str] {
        use crate::constants::tags;
        match self {
            Self::BuildMuscle => &["hypertrophy", "strength", tags::CHEST_FOCUS, tags::GLUTE_FOCUS],
            Self::GainStrength => &["strength", tags::HEAVY_LIFT, "compound"],
            Self::Endurance => &[tags::CARDIO, "conditioning", tags::TIMED],
            Self::Mobility => &[tags::MOBILITY, "stretch", tags::GENTLE_MOVEMENT],
            Self::GeneralHealth => &["compound", tags::CARDIO, tags::MOBILITY],
        }
    }
}

/// Training history bucket driving set/rep schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessExperience {
    /// Less than ~6 months of structured training
    Beginner,
    /// Comfortable with common movement patterns
    Intermediate,
    /// Multiple years of consistent training
    Advanced,
}

/// Equipment tokens, normalized the same way the exercise library import
/// pipeline normalizes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentId {
    /// No equipment
    #[serde(rename = "bodyweight")]
    Bodyweight,
    /// Dumbbells
    #[serde(rename = "db")]
    Dumbbell,
    /// Kettlebells
    #[serde(rename = "kb")]
    Kettlebell,
    /// Barbell, including smith/trap/EZ bars
    #[serde(rename = "barbell")]
    Barbell,
    /// Resistance bands
    #[serde(rename = "band")]
    Band,
    /// Flat or adjustable bench
    #[serde(rename = "bench")]
    Bench,
    /// Step or plyo box
    #[serde(rename = "step")]
    Step,
    /// Cable stack
    #[serde(rename = "cable")]
    Cable,
    /// Pin or plate-loaded machines
    #[serde(rename = "machine")]
    Machine,
    /// Stationary or road bike
    #[serde(rename = "bike")]
    Bike,
    /// Treadmill
    #[serde(rename = "treadmill")]
    Treadmill,
    /// Push/pull sled
    #[serde(rename = "sled")]
    Sled,
    /// Free-text equipment the catalog does not model; selection failures
    /// with this token feed the equipment-gap analytics signal
    #[serde(rename = "other")]
    Other,
}

/// Hormone therapy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrtType {
    /// Testosterone-based therapy
    Testosterone,
    /// Estrogen-based therapy
    Estrogen,
    /// Other or combined regimens
    Other,
}

/// How often the user binds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingFrequency {
    /// Does not bind
    Never,
    /// Binds occasionally
    Occasionally,
    /// Binds most days
    MostDays,
    /// Binds daily
    Daily,
}

/// Binder construction, captured for guidance copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinderType {
    /// Purpose-made compression binder
    Commercial,
    /// Compression sports bra
    SportsBra,
    /// Kinesiology tape
    Tape,
    /// Something else
    Other,
}

/// Gender-affirming surgery types with recovery phase tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryType {
    /// Chest masculinization (mastectomy)
    TopSurgery,
    /// Breast augmentation
    BreastAugmentation,
    /// Hysterectomy
    Hysterectomy,
    /// Vaginoplasty
    Vaginoplasty,
    /// Phalloplasty or metoidioplasty
    Phalloplasty,
    /// Other procedure; uses the conservative generic phase table
    Other,
}

/// Things the user asked the plan to steer around. These adjust selection
/// weighting only and never hard-exclude exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DysphoriaTrigger {
    /// Avoid exercises typically performed facing a mirror
    MirrorWork,
    /// De-emphasize chest-focused hypertrophy work
    ChestFocus,
    /// De-emphasize glute-focused hypertrophy work
    GluteFocus,
}

impl DysphoriaTrigger {
    /// The exercise tag this trigger deprioritizes
    #[must_use]
    pub const fn deprioritized_tag(self) -> &'static str {
        use crate::constants::tags;
        match self {
            Self::MirrorWork => tags::MIRROR_WORK,
            Self::ChestFocus => tags::CHEST_FOCUS,
            Self::GluteFocus => tags::GLUTE_FOCUS,
        }
    }
}

/// Supported session durations. Every workout day carries one variant per
/// duration so the UI can switch lengths without re-invoking the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Duration {
    /// 30-minute session
    #[serde(rename = "30")]
    Min30,
    /// 45-minute session
    #[serde(rename = "45")]
    Min45,
    /// 60-minute session
    #[serde(rename = "60")]
    Min60,
    /// 90-minute session
    #[serde(rename = "90")]
    Min90,
}

impl Duration {
    /// All durations in ascending generation order
    pub const ALL: [Self; 4] = [Self::Min30, Self::Min45, Self::Min60, Self::Min90];

    /// Session length in minutes
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Min30 => 30,
            Self::Min45 => 45,
            Self::Min60 => 60,
            Self::Min90 => 90,
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.minutes())
    }
}

/// Normalized user attributes driving every downstream decision.
///
/// The profile is owned by the user and mutated only through explicit
/// onboarding/settings updates; every generation call reads an immutable
/// snapshot. Engine functions take `&Profile` explicitly, never ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user
    pub user_id: Uuid,
    /// Self-described identity
    pub gender_identity: GenderIdentity,
    /// Goal weighted 1.0 in selection
    pub primary_goal: FitnessGoal,
    /// Goals weighted 0.5 in selection
    #[serde(default)]
    pub secondary_goals: Vec<FitnessGoal>,
    /// Training history bucket
    pub fitness_experience: FitnessExperience,
    /// Desired workout days per week (1..=7)
    pub workout_frequency: u8,
    /// Preferred session duration; the plan still generates all variants
    pub session_duration: Duration,
    /// Equipment available to the user
    pub equipment: HashSet<EquipmentId>,
    /// Currently on hormone therapy
    pub on_hrt: bool,
    /// Therapy type, present when `on_hrt`
    #[serde(default)]
    pub hrt_type: Option<HrtType>,
    /// Months on hormone therapy, present when `on_hrt`
    #[serde(default)]
    pub hrt_months_duration: Option<u32>,
    /// Binds their chest
    pub binds_chest: bool,
    /// How often they bind
    #[serde(default)]
    pub binding_frequency: Option<BindingFrequency>,
    /// Typical daily wear in hours
    #[serde(default)]
    pub binding_duration_hours: Option<f64>,
    /// Binder construction
    #[serde(default)]
    pub binder_type: Option<BinderType>,
    /// Recorded gender-affirming surgery
    #[serde(default)]
    pub surgery_type: Option<SurgeryType>,
    /// Date of that surgery
    #[serde(default)]
    pub surgery_date: Option<NaiveDate>,
    /// Declared triggers the selector steers around
    #[serde(default)]
    pub dysphoria_triggers: Vec<DysphoriaTrigger>,
    /// Prefer calmer, lower-stimulation sessions
    #[serde(default)]
    pub low_sensory_mode: bool,
}

impl Profile {
    /// Validate the fields rule evaluation depends on.
    ///
    /// Runs at the profile boundary, before any pipeline stage; a profile
    /// that fails here is never partially evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidProfile`] for missing or out-of-range
    /// fields.
    pub fn validate(&self) -> EngineResult<()> {
        if self.workout_frequency == 0 || self.workout_frequency > limits::PLAN_DAYS {
            return Err(EngineError::InvalidProfile(format!(
                "workout_frequency must be 1..=7, got {}",
                self.workout_frequency
            )));
        }
        if self.equipment.is_empty() {
            return Err(EngineError::InvalidProfile(
                "equipment must contain at least one entry (bodyweight counts)".into(),
            ));
        }
        if self.on_hrt && self.hrt_months_duration.is_none() {
            return Err(EngineError::InvalidProfile(
                "hrt_months_duration is required when on_hrt".into(),
            ));
        }
        if self.binds_chest {
            match self.binding_duration_hours {
                Some(hours) if (0.0..=limits::MAX_BINDING_HOURS).contains(&hours) => {}
                Some(hours) => {
                    return Err(EngineError::InvalidProfile(format!(
                        "binding_duration_hours must be 0..=24, got {hours}"
                    )));
                }
                None => {
                    return Err(EngineError::InvalidProfile(
                        "binding_duration_hours is required when binds_chest".into(),
                    ));
                }
            }
            if self.binding_frequency.is_none() {
                return Err(EngineError::InvalidProfile(
                    "binding_frequency is required when binds_chest".into(),
                ));
            }
        }
        if self.surgery_type.is_some() != self.surgery_date.is_some() {
            return Err(EngineError::InvalidProfile(
                "surgery_type and surgery_date must be recorded together".into(),
            ));
        }
        Ok(())
    }

    /// Whether the binding rule family can trigger at all
    #[must_use]
    pub fn binds_actively(&self) -> bool {
        self.binds_chest
            && self
                .binding_frequency
                .is_some_and(|f| f != BindingFrequency::Never)
    }
}

/// Rep- or time-based prescription for one exercise slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prescription {
    /// Counted repetitions per set
    Reps(u32),
    /// Seconds of work per set
    Seconds(u32),
}

/// One exercise slot inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Catalog id of the chosen exercise
    pub exercise_id: String,
    /// Number of sets
    pub sets: u32,
    /// Reps or seconds per set
    pub prescription: Prescription,
    /// Rest between sets, already scaled by the constraint rest multiplier
    pub rest_seconds: u32,
}

/// A single generated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Ordered exercise slots
    pub exercises: Vec<WorkoutExercise>,
    /// Safety rules that shaped this workout, surfaced unchanged to the UI
    pub applied_rules: Vec<AppliedRule>,
}

/// The four duration variants of one workout day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationVariants {
    /// 30-minute variant
    #[serde(rename = "30")]
    pub min30: Option<Workout>,
    /// 45-minute variant
    #[serde(rename = "45")]
    pub min45: Option<Workout>,
    /// 60-minute variant
    #[serde(rename = "60")]
    pub min60: Option<Workout>,
    /// 90-minute variant
    #[serde(rename = "90")]
    pub min90: Option<Workout>,
}

impl DurationVariants {
    /// Variant for a duration
    #[must_use]
    pub const fn get(&self, duration: Duration) -> Option<&Workout> {
        match duration {
            Duration::Min30 => self.min30.as_ref(),
            Duration::Min45 => self.min45.as_ref(),
            Duration::Min60 => self.min60.as_ref(),
            Duration::Min90 => self.min90.as_ref(),
        }
    }

    /// Replace one variant
    pub fn set(&mut self, duration: Duration, workout: Option<Workout>) {
        match duration {
            Duration::Min30 => self.min30 = workout,
            Duration::Min45 => self.min45 = workout,
            Duration::Min60 => self.min60 = workout,
            Duration::Min90 => self.min90 = workout,
        }
    }

    /// True when every variant is absent
    #[must_use]
    pub const fn all_empty(&self) -> bool {
        self.min30.is_none() && self.min45.is_none() && self.min60.is_none() && self.min90.is_none()
    }
}

/// One calendar day of a plan.
///
/// `is_rest_day` is the single authoritative rest-day signal: a day is a
/// rest day iff every duration variant is `None`. The two constructors are
/// the only writers, so consumers never re-derive this from heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based position within the plan week
    pub day_number: u8,
    /// Calendar date of this slot
    pub date: NaiveDate,
    /// Authoritative rest-day flag, kept consistent with `variants`
    pub is_rest_day: bool,
    /// The four duration variants
    pub variants: DurationVariants,
    /// Set to `Some(true)` only when a rest day was later converted to a
    /// workout day, so the UI can badge it as a bonus session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub was_rest_day: Option<bool>,
}

impl Day {
    /// Construct a rest day
    #[must_use]
    pub fn rest(day_number: u8, date: NaiveDate) -> Self {
        Self {
            day_number,
            date,
            is_rest_day: true,
            variants: DurationVariants::default(),
            was_rest_day: None,
        }
    }

    /// Construct a workout day from generated variants
    #[must_use]
    pub fn workout(day_number: u8, date: NaiveDate, variants: DurationVariants) -> Self {
        debug_assert!(!variants.all_empty(), "workout day needs at least one variant");
        Self {
            day_number,
            date,
            is_rest_day: false,
            variants,
            was_rest_day: None,
        }
    }

    /// Verify the rest-day invariant on a deserialized or merged day
    #[must_use]
    pub const fn rest_day_invariant_holds(&self) -> bool {
        self.is_rest_day == self.variants.all_empty()
    }
}

/// A user's 7-day schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Plan id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Date of day 1
    pub start_date: NaiveDate,
    /// The seven days, ascending `day_number`
    pub days: Vec<Day>,
    /// Day numbers that became rest days because the selector could not
    /// produce any variant, distinguishing "no workout possible" from
    /// "no workout needed"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallback_rest_days: Vec<u8>,
}

impl Plan {
    /// Day by 1-based number
    #[must_use]
    pub fn day(&self, day_number: u8) -> Option<&Day> {
        self.days.iter().find(|d| d.day_number == day_number)
    }

    /// Mutable day by 1-based number
    pub fn day_mut(&mut self, day_number: u8) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.day_number == day_number)
    }

    /// Resolve a calendar date to a day number within this plan, if any
    #[must_use]
    pub fn day_number_for_date(&self, date: NaiveDate) -> Option<u8> {
        let offset = date.signed_duration_since(self.start_date).num_days();
        u8::try_from(offset + 1)
            .ok()
            .filter(|n| (1..=limits::PLAN_DAYS).contains(n))
    }
}

/// A user-bookmarked workout, independent of the plan's lifecycle.
///
/// Deleting or regenerating a plan never cascade-deletes saved workouts;
/// `(user_id, plan_id, day_number, duration)` is the natural lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedWorkout {
    /// Row id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Plan the workout was saved from
    pub plan_id: Uuid,
    /// Day the workout was saved from
    pub day_number: u8,
    /// Duration variant the workout was saved from
    pub duration: Duration,
    /// User-chosen display name
    pub name: String,
    /// The bookmarked workout
    pub data: Workout,
    /// Times this workout was swapped into a day
    pub usage_count: u64,
    /// Bookmark creation time
    pub created_at: DateTime<Utc>,
}

/// One completed-session log row, read by history views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Row id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Date the session was logged for
    pub date: NaiveDate,
    /// Duration variant performed
    pub duration: Duration,
    /// Exercises completed out of the prescribed list
    pub exercises_completed: u32,
    /// Free-form user notes
    #[serde(default)]
    pub notes: Option<String>,
}
