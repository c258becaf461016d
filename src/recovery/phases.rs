// ABOUTME: Static per-surgery recovery phase tables and general guidance text
// ABOUTME: Ordered week brackets with allowed and avoided exercise tags per phase
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Recovery phase tables
//!
//! Tables are data, not logic: an ordered list of week brackets per surgery
//! type. Brackets are contiguous and the last bracket is open-ended, so a
//! user far past surgery keeps the final phase's (empty or minimal)
//! restrictions instead of abruptly losing guidance.
//!
//! Timelines follow commonly published post-operative activity guidance and
//! are deliberately conservative; the engine always surfaces the disclaimer
//! alongside them.

use crate::constants::tags;
use crate::models::SurgeryType;

/// One row of a phase table
#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec {
    /// First week (inclusive) this phase covers, counted from surgery
    pub weeks_start: u32,
    /// Last week (inclusive), `None` for the open-ended final phase
    pub weeks_end: Option<u32>,
    /// Short description of what this phase is for
    pub focus: &'static str,
    /// Activity styles encouraged during this phase
    pub allowed_activity_tags: &'static [&'static str],
    /// Exercise tags excluded outright while in this phase
    pub avoided_exercise_tags: &'static [&'static str],
}

const TOP_SURGERY: &[PhaseSpec] = &[
    PhaseSpec {
        weeks_start: 0,
        weeks_end: Some(1),
        focus: "Rest and wound healing; short walks only",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT],
        avoided_exercise_tags: &[
            tags::OVERHEAD_PRESS,
            tags::CHEST_PRESS,
            tags::ARM_RAISE,
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CHEST_COMPRESSION,
            tags::CORE_BRACE,
            tags::CARDIO,
        ],
    },
    PhaseSpec {
        weeks_start: 2,
        weeks_end: Some(5),
        focus: "Gentle range of motion; keep elbows below shoulders",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT, tags::MOBILITY, tags::LOWER_BODY],
        avoided_exercise_tags: &[
            tags::OVERHEAD_PRESS,
            tags::CHEST_PRESS,
            tags::ARM_RAISE,
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CHEST_COMPRESSION,
        ],
    },
    PhaseSpec {
        weeks_start: 6,
        weeks_end: Some(11),
        focus: "Progressive loading; light upper-body work returns",
        allowed_activity_tags: &[
            tags::MOBILITY,
            tags::LOWER_BODY,
            tags::CARDIO,
            tags::GENTLE_MOVEMENT,
        ],
        avoided_exercise_tags: &[tags::HEAVY_LIFT, tags::HIGH_IMPACT],
    },
    PhaseSpec {
        weeks_start: 12,
        weeks_end: None,
        focus: "Return to full training as scar tissue matures",
        allowed_activity_tags: &[],
        avoided_exercise_tags: &[],
    },
];

const BREAST_AUGMENTATION: &[PhaseSpec] = &[
    PhaseSpec {
        weeks_start: 0,
        weeks_end: Some(1),
        focus: "Rest and wound healing; short walks only",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT],
        avoided_exercise_tags: &[
            tags::OVERHEAD_PRESS,
            tags::CHEST_PRESS,
            tags::ARM_RAISE,
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CHEST_COMPRESSION,
            tags::CARDIO,
        ],
    },
    PhaseSpec {
        weeks_start: 2,
        weeks_end: Some(5),
        focus: "Lower-body work; no chest loading or bouncing",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT, tags::MOBILITY, tags::LOWER_BODY],
        avoided_exercise_tags: &[
            tags::CHEST_PRESS,
            tags::CHEST_COMPRESSION,
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
        ],
    },
    PhaseSpec {
        weeks_start: 6,
        weeks_end: None,
        focus: "Gradual return to chest work as comfort allows",
        allowed_activity_tags: &[],
        avoided_exercise_tags: &[tags::HIGH_IMPACT],
    },
];

const HYSTERECTOMY: &[PhaseSpec] = &[
    PhaseSpec {
        weeks_start: 0,
        weeks_end: Some(1),
        focus: "Rest; walking as tolerated",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CORE_BRACE,
            tags::PELVIC_LOAD,
            tags::CARDIO,
        ],
    },
    PhaseSpec {
        weeks_start: 2,
        weeks_end: Some(5),
        focus: "Gentle movement; protect the core and pelvic floor",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT, tags::MOBILITY],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CORE_BRACE,
            tags::PELVIC_LOAD,
        ],
    },
    PhaseSpec {
        weeks_start: 6,
        weeks_end: None,
        focus: "Rebuild core strength progressively",
        allowed_activity_tags: &[],
        avoided_exercise_tags: &[],
    },
];

const VAGINOPLASTY: &[PhaseSpec] = &[
    PhaseSpec {
        weeks_start: 0,
        weeks_end: Some(2),
        focus: "Rest and healing; short walks only",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CORE_BRACE,
            tags::PELVIC_LOAD,
            tags::CARDIO,
        ],
    },
    PhaseSpec {
        weeks_start: 3,
        weeks_end: Some(7),
        focus: "Upper-body and gentle movement; no straddling or impact",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT, tags::MOBILITY],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::PELVIC_LOAD,
        ],
    },
    PhaseSpec {
        weeks_start: 8,
        weeks_end: Some(11),
        focus: "Progressive loading; ease back into lower-body work",
        allowed_activity_tags: &[tags::MOBILITY, tags::CARDIO, tags::LOWER_BODY],
        avoided_exercise_tags: &[tags::HIGH_IMPACT, tags::PELVIC_LOAD],
    },
    PhaseSpec {
        weeks_start: 12,
        weeks_end: None,
        focus: "Return to full training",
        allowed_activity_tags: &[],
        avoided_exercise_tags: &[],
    },
];

const PHALLOPLASTY: &[PhaseSpec] = &[
    PhaseSpec {
        weeks_start: 0,
        weeks_end: Some(3),
        focus: "Rest and graft protection; walking only",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CORE_BRACE,
            tags::PELVIC_LOAD,
            tags::CARDIO,
            tags::LOWER_BODY,
        ],
    },
    PhaseSpec {
        weeks_start: 4,
        weeks_end: Some(11),
        focus: "Gentle movement; protect donor and graft sites",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT, tags::MOBILITY],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::PELVIC_LOAD,
        ],
    },
    PhaseSpec {
        weeks_start: 12,
        weeks_end: None,
        focus: "Progressive return to training with surgeon clearance",
        allowed_activity_tags: &[],
        avoided_exercise_tags: &[tags::HIGH_IMPACT],
    },
];

const GENERIC: &[PhaseSpec] = &[
    PhaseSpec {
        weeks_start: 0,
        weeks_end: Some(1),
        focus: "Rest and healing; walking as tolerated",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT],
        avoided_exercise_tags: &[
            tags::HEAVY_LIFT,
            tags::HIGH_IMPACT,
            tags::CORE_BRACE,
            tags::CARDIO,
        ],
    },
    PhaseSpec {
        weeks_start: 2,
        weeks_end: Some(5),
        focus: "Gentle movement and mobility",
        allowed_activity_tags: &[tags::GENTLE_MOVEMENT, tags::MOBILITY],
        avoided_exercise_tags: &[tags::HEAVY_LIFT, tags::HIGH_IMPACT],
    },
    PhaseSpec {
        weeks_start: 6,
        weeks_end: None,
        focus: "Progressive return to training",
        allowed_activity_tags: &[],
        avoided_exercise_tags: &[],
    },
];

/// Ordered phase table for a surgery type. Unknown procedures use the
/// conservative generic table.
#[must_use]
pub const fn phase_table(surgery_type: SurgeryType) -> &'static [PhaseSpec] {
    match surgery_type {
        SurgeryType::TopSurgery => TOP_SURGERY,
        SurgeryType::BreastAugmentation => BREAST_AUGMENTATION,
        SurgeryType::Hysterectomy => HYSTERECTOMY,
        SurgeryType::Vaginoplasty => VAGINOPLASTY,
        SurgeryType::Phalloplasty => PHALLOPLASTY,
        SurgeryType::Other => GENERIC,
    }
}

/// General tips shown next to every phase of a surgery's recovery guide
#[must_use]
pub const fn general_tips(surgery_type: SurgeryType) -> &'static [&'static str] {
    match surgery_type {
        SurgeryType::TopSurgery | SurgeryType::BreastAugmentation => &[
            "Keep incisions out of direct sun while they heal",
            "Stop immediately on any pulling sensation near incisions",
            "Hydrate well; healing tissue needs it",
        ],
        _ => &[
            "Progress loads slower than feels necessary",
            "Stop immediately on pain, swelling, or unusual fatigue",
            "Hydrate well; healing tissue needs it",
        ],
    }
}

/// Disclaimer attached to all recovery guidance
pub const DISCLAIMER: &str = "This guidance is educational, not medical advice. \
Your surgeon's instructions and timeline always take precedence.";
