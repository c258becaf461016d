// ABOUTME: Plan generation orchestration: weekly generator and single-day regenerator
// ABOUTME: Composes the recovery calculator, rule engine, and selector into Plan values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Plan Generation
//!
//! The generator runs the whole pipeline across 7 days × 4 duration
//! variants; the regenerator re-runs it for one day using the current
//! profile and date. Both return fresh values for the caller to persist
//! and never mutate shared plan state in place.

pub mod generator;
pub mod regenerator;

pub use generator::{generate_plan, generate_plan_with_config};
pub use regenerator::{regenerate_day, regenerate_day_with_config};

/// Per-slot seed so one profile change only perturbs the days its rules
/// touch: the derived stream depends on the base seed, the day, and the
/// duration, never on sibling days' outcomes.
#[must_use]
pub(crate) fn derive_seed(seed: u64, day_number: u8, minutes: u32) -> u64 {
    let mut z = seed ^ (u64::from(day_number) << 32) ^ u64::from(minutes);
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
