// ABOUTME: Shared constant values for exercise tags, coaching cues, and engine limits
// ABOUTME: Single source of truth so rules, selection, and tests agree on vocabulary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Constants Module
//!
//! Tag and cue strings match the vocabulary produced by the exercise
//! library import pipeline; rules and the selector compare them verbatim.

/// Exercise tags referenced by safety rules and recovery phase tables
pub mod tags {
    /// Movements that press or stretch across the chest wall
    pub const CHEST_COMPRESSION: &str = "chest_compression";
    /// Jumping, bounding, and other high ground-reaction-force work
    pub const HIGH_IMPACT: &str = "high_impact";
    /// Movements that brace the torso hard enough to restrict breathing
    pub const BREATH_RESTRICTIVE: &str = "breath_restrictive";
    /// Pressing overhead or reaching above shoulder height
    pub const OVERHEAD_PRESS: &str = "overhead_press";
    /// Loaded horizontal pressing (push-ups, bench variations)
    pub const CHEST_PRESS: &str = "chest_press";
    /// Direct arm raises and lateral shoulder work
    pub const ARM_RAISE: &str = "arm_raise";
    /// Heavy lifting at or above roughly half bodyweight
    pub const HEAVY_LIFT: &str = "heavy_lift";
    /// Core bracing under load
    pub const CORE_BRACE: &str = "core_brace";
    /// Deep hip flexion or pelvic-floor loading
    pub const PELVIC_LOAD: &str = "pelvic_load";
    /// Exercises typically performed facing a mirror
    pub const MIRROR_WORK: &str = "mirror_work";
    /// Chest-focused hypertrophy work
    pub const CHEST_FOCUS: &str = "chest_focus";
    /// Glute-focused hypertrophy work
    pub const GLUTE_FOCUS: &str = "glute_focus";
    /// Loud, fast, or ballistic movements
    pub const HIGH_STIMULATION: &str = "high_stimulation";
    /// Time-based holds and carries rather than counted reps
    pub const TIMED: &str = "timed";
    /// Steady-state or interval cardio
    pub const CARDIO: &str = "cardio";
    /// Walking-pace and other gentle movement
    pub const GENTLE_MOVEMENT: &str = "gentle_movement";
    /// Lower-body strength patterns
    pub const LOWER_BODY: &str = "lower_body";
    /// Mobility and range-of-motion work
    pub const MOBILITY: &str = "mobility";
}

/// Coaching cues attached to workouts by safety rules
pub mod cues {
    /// Remind the user to check breathing depth mid-session
    pub const BREATHING_CHECK: &str = "breathing_check";
    /// Remind the user to loosen or remove the binder if lightheaded
    pub const BINDER_BREAK: &str = "binder_break";
    /// Remind the user to stop on any pulling sensation near incisions
    pub const INCISION_AWARENESS: &str = "incision_awareness";
    /// Encourage longer warm-ups while joints adapt to hormone changes
    pub const EXTENDED_WARMUP: &str = "extended_warmup";
}

/// Hard limits on engine inputs and outputs
pub mod limits {
    /// Days in a generated plan
    pub const PLAN_DAYS: u8 = 7;
    /// Constraint multipliers are clamped into `[MULTIPLIER_MIN, MULTIPLIER_MAX]`
    /// after every fold step
    pub const MULTIPLIER_MIN: f64 = 0.5;
    /// Upper clamp for constraint multipliers
    pub const MULTIPLIER_MAX: f64 = 1.5;
    /// Longest plausible daily binder wear, used for profile validation
    pub const MAX_BINDING_HOURS: f64 = 24.0;
}
