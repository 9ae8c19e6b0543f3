// ABOUTME: Value-object models shared by the planning engine and its services
// ABOUTME: Profiles, derived targets, day plans and meal log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Meal log entries and lookup facts
pub mod meal_log;
/// Meals, slots and day plans
pub mod meal_plan;
/// Calculator results and targets
pub mod nutrition;
/// User profile and its enumerations
pub mod profile;

pub use meal_log::{FoodItem, LogSource, MealLogEntry, NutritionFacts, PortionNutrition};
pub use meal_plan::{BalanceTag, DayMeals, DayPlan, Meal, MealMacros, MealSlot};
pub use nutrition::{
    CalorieCalculatorResult, Macro, MacroAmount, MacroBreakdown, MacroTarget, Targets,
};
pub use profile::{ActivityLevel, DietaryRestriction, Gender, Goal, UserNutritionProfile};
