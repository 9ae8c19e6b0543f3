// ABOUTME: BMR and TDEE calculation plus assembly of the full onboarding calorie result
// ABOUTME: Mifflin-St Jeor with configurable coefficients, validated before any arithmetic
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan Contributors

//! Nutrition Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use super::goal_adjuster::goal_calories_for_profile;
use super::macro_allocator::calculate_macro_breakdown;
use super::units::round_non_negative;
use crate::config::planner::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use nutriplan_core::errors::ValidationError;
use nutriplan_core::models::{ActivityLevel, CalorieCalculatorResult, UserNutritionProfile};
use tracing::debug;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is rounded to the nearest kcal.
///
/// # Errors
///
/// Returns a `ValidationError` if age is zero or height/weight are not positive finite numbers
pub fn calculate_bmr(
    profile: &UserNutritionProfile,
    config: &BmrConfig,
) -> Result<u32, ValidationError> {
    profile.validate()?;

    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);
    let bmr = weight_component
        + height_component
        + age_component
        + config.gender_constant(profile.gender);

    Ok(round_non_negative(bmr))
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = round(BMR x Activity Factor)
#[must_use]
pub fn calculate_tdee(bmr: u32, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> u32 {
    round_non_negative(f64::from(bmr) * config.factor(activity_level))
}

/// Full onboarding result: BMR, TDEE, goal calories and the standard macro breakdown
///
/// # Errors
///
/// Returns a `ValidationError` if the profile fails validation
pub fn calculate_calorie_result(
    profile: &UserNutritionProfile,
    config: &NutritionConfig,
) -> Result<CalorieCalculatorResult, ValidationError> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    let multiplier = config.activity_factors.factor(profile.activity_level);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let goal = goal_calories_for_profile(tdee, profile, &config.goal_adjustment);
    let macro_breakdown = calculate_macro_breakdown(
        goal.calories,
        profile.goal,
        &profile.dietary_restrictions,
        &config.macro_allocation.standard,
    );

    debug!(
        bmr,
        tdee,
        goal_calories = goal.calories,
        floor_applied = goal.floor_applied,
        "Calculated calorie result"
    );

    let gender = profile.gender.as_str();
    let mut explanation = format!(
        "BMR of {bmr} kcal from the Mifflin-St Jeor equation ({gender}, {} y, {} cm, {} kg). \
         Multiplied by {multiplier} for {} activity gives a TDEE of {tdee} kcal. \
         A {} goal adjusts this by {:+} kcal to {} kcal per day.",
        profile.age,
        profile.height_cm,
        profile.weight_kg,
        profile.activity_level.as_str().replace('_', " "),
        profile.goal.as_str().replace('_', " "),
        goal.delta,
        tdee.saturating_add_signed(goal.delta),
    );
    if goal.floor_applied {
        explanation.push_str(&format!(
            " Raised to the {} kcal safety minimum for weight loss.",
            config.goal_adjustment.floor(profile.gender)
        ));
    }

    Ok(CalorieCalculatorResult {
        bmr,
        tdee,
        goal_calories: goal.calories,
        macro_breakdown,
        explanation,
    })
}
