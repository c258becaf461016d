// ABOUTME: Fire-and-forget analytics signals emitted by the engine
// ABOUTME: Currently carries the equipment-gap report from selection failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Analytics signals
//!
//! Signals are structured `tracing` events consumed by the hosting
//! application's telemetry pipeline. None of them are engine-critical.

/// Report an equipment gap: the user selected "other" equipment with a
/// free-text description and selection could not satisfy it. Fire-and-forget.
pub fn log_equipment_request(description: &str) {
    tracing::info!(
        target: "transfit_engine::analytics",
        equipment = description,
        "equipment gap reported"
    );
}
