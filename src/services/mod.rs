// ABOUTME: Application services combining the planning engine with external collaborators
// ABOUTME: Day-plan persistence, food lookup logging and the nutrition assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Application service layer
//!
//! Services own the I/O around the pure planning engine. Collaborator
//! failures are reported to the caller as "no data found" or inline text and
//! never abort plan generation.

/// Day-plan generation, adjustment, swaps and grocery lists with persistence
pub mod meal_plans;

/// Nutrition lookups and meal logging
pub mod food_lookup;

/// Nutrition coach chat
pub mod assistant;

pub use assistant::{ask_assistant, coach_system_prompt, ASSISTANT_UNAVAILABLE_REPLY};
pub use food_lookup::{log_food, lookup_food, FoodQuery, LookupOutcome};
pub use meal_plans::{plan_key, MealPlanService};
