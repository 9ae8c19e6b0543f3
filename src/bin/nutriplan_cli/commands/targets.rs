// ABOUTME: Target command for nutriplan-cli
// ABOUTME: Prints the onboarding calorie result and the meal-plan macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use nutriplan::config::PlannerConfig;
use nutriplan::errors::AppResult;
use nutriplan::intelligence::{calculate_calorie_result, targets_for_profile};
use nutriplan_core::models::UserNutritionProfile;
use serde_json::json;

use crate::helpers::display::{display_calorie_result, display_targets, print_json};

/// Show calorie result and meal-plan targets for a profile
pub fn show(profile: &UserNutritionProfile, as_json: bool) -> AppResult<()> {
    let config = &PlannerConfig::global().nutrition;
    let result = calculate_calorie_result(profile, config)?;
    let targets = targets_for_profile(profile, config)?;

    if as_json {
        return print_json(&json!({
            "calorie_result": result,
            "meal_plan_targets": targets,
        }));
    }

    display_calorie_result(&result);
    display_targets(&targets);
    Ok(())
}
