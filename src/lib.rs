// ABOUTME: Main library entry point for the Nutriplan nutrition planning engine
// ABOUTME: Exposes configuration, logging, the planning engine, collaborators and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Calorie targets, macro allocation and meal-plan generation for a nutrition
//! tracking app.
//!
//! ## Features
//!
//! - **Targets**: Mifflin-St Jeor BMR, activity-based TDEE and goal calories
//!   with weight-loss safety floors
//! - **Macro allocation**: goal presets with keto and vegan overrides
//! - **Day plans**: four meals built from diet-aware templates by fixed shares
//! - **Adjustments**: free-text requests such as "reduce calories to 1800, no eggs"
//! - **Swaps and groceries**: single-meal alternatives and aggregated shopping lists
//!
//! ## Architecture
//!
//! - **intelligence**: pure, deterministic planning engine
//! - **external**: collaborator traits (storage, nutrition lookup, chat)
//! - **services**: I/O around the engine, tolerant of collaborator failures
//! - **config**: planner tables with environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::PlannerConfig;
//! use nutriplan::intelligence::calculate_calorie_result;
//! use nutriplan_core::models::{ActivityLevel, Gender, Goal, UserNutritionProfile};
//!
//! let profile = UserNutritionProfile::new(
//!     30,
//!     Gender::Male,
//!     180.0,
//!     80.0,
//!     ActivityLevel::ModeratelyActive,
//!     Goal::WeightLoss,
//! );
//! let result = calculate_calorie_result(&profile, &PlannerConfig::global().nutrition)?;
//! println!("{} kcal/day", result.goal_calories);
//! # Ok::<(), nutriplan::errors::ValidationError>(())
//! ```

/// Planner configuration with environment overrides
pub mod config;

/// Unified error handling re-exported from `nutriplan-core`
pub mod errors;

/// External collaborator interfaces and in-memory implementations
pub mod external;

/// Calorie, macro, day-plan, swap and grocery engine
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Application services around the engine
pub mod services;

/// Core value objects re-exported from `nutriplan-core`
pub use nutriplan_core::models;
