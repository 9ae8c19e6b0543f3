// ABOUTME: Configuration management module for planner settings
// ABOUTME: Re-exports the planner configuration and its nutrition sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
//! Configuration module for Nutriplan

/// Planner configuration (nutrition tables, env overrides, validation)
pub mod planner;

pub use planner::{ConfigError, NutritionConfig, PlannerConfig};
