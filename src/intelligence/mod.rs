// ABOUTME: Planning engine: calorie targets, macro allocation, day plans, adjustments and groceries
// ABOUTME: Pure synchronous functions over profile, targets and plan value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Intelligence Module
//!
//! Every function here is a deterministic function of its inputs and the
//! configuration section passed in. Nothing performs I/O; template rotation
//! depends only on the plan date.

/// Rounding and percentage/gram conversions
pub mod units;

/// Mifflin-St Jeor BMR, TDEE and the onboarding calorie result
pub mod nutrition_calculator;

/// Goal calorie deltas and weight-loss safety floors
pub mod goal_adjuster;

/// Macro percentage presets and gram conversion
pub mod macro_allocator;

/// Fixed meal template catalog
pub mod templates;

/// Four-meal day plan construction
pub mod day_plan;

/// Free-text adjustment directives and vegan/halal compliance
pub mod plan_adjuster;

/// Single-meal swap options
pub mod swap;

/// Ingredient parsing and grocery aggregation
pub mod grocery;

pub use day_plan::{build_day_plan, build_template_meals, variant_index};
pub use goal_adjuster::{calculate_goal_calories, clamp_weight_loss, GoalCalories};
pub use grocery::{aggregate_ingredients, GroceryList, GroceryUnit, ParsedIngredient};
pub use macro_allocator::{
    calculate_macro_breakdown, targets_for_profile, MacroAllocation, MealPlanAllocation,
    StandardAllocation,
};
pub use nutrition_calculator::{calculate_bmr, calculate_calorie_result, calculate_tdee};
pub use plan_adjuster::{
    adjust_plan, apply, enforce_compliance, parse_directives, AdjustedPlan, Directive,
    ExclusionTag, PlanDraft,
};
pub use swap::{
    apply_swap, generate_swap_options, swap_options_for_slot, MealFamily, MealType,
};
