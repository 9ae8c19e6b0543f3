// ABOUTME: Goal calorie adjustment: fixed per-goal deltas and the weight-loss safety floor
// ABOUTME: The floor applies to every weight-loss target, including explicit calorie requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::config::planner::GoalAdjustmentConfig;
use nutriplan_core::models::{Gender, Goal, UserNutritionProfile};
use serde::{Deserialize, Serialize};

/// Goal calories together with whether the safety floor kicked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCalories {
    /// Daily calorie target after the goal delta (and floor, if applied)
    pub calories: u32,
    /// Delta that was added to TDEE
    pub delta: i32,
    /// True when the unclamped value was below the floor
    pub floor_applied: bool,
}

/// Add the goal's fixed delta to TDEE
///
/// No floor is applied here; see [`clamp_weight_loss`].
#[must_use]
pub fn calculate_goal_calories(tdee: u32, goal: Goal, config: &GoalAdjustmentConfig) -> u32 {
    tdee.saturating_add_signed(config.delta(goal))
}

/// Raise a weight-loss calorie figure to the gender's safety floor
#[must_use]
pub fn clamp_weight_loss(calories: u32, gender: Gender, config: &GoalAdjustmentConfig) -> u32 {
    calories.max(config.floor(gender))
}

/// Goal calories for a profile, floored when the goal is weight loss
#[must_use]
pub fn goal_calories_for_profile(
    tdee: u32,
    profile: &UserNutritionProfile,
    config: &GoalAdjustmentConfig,
) -> GoalCalories {
    let raw = calculate_goal_calories(tdee, profile.goal, config);
    let calories = if profile.goal == Goal::WeightLoss {
        clamp_weight_loss(raw, profile.gender, config)
    } else {
        raw
    };

    GoalCalories {
        calories,
        delta: config.delta(profile.goal),
        floor_applied: calories != raw,
    }
}
