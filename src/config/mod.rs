// ABOUTME: Configuration module for the plan generation engine
// ABOUTME: Re-exports the engine configuration types and error
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management for the engine

/// Engine tuning parameters with environment overrides
pub mod engine_config;

pub use engine_config::{
    BindingRuleConfig, ConfigError, EngineConfig, HrtRuleConfig, PostOpRuleConfig, SelectorConfig,
};
