// ABOUTME: Macro allocation presets mapping goals and diet tags to protein/carb/fat splits
// ABOUTME: Converts integer percentages to grams and calories for breakdowns and day targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Macro Allocator
//!
//! Two allocation tables coexist and are selected explicitly by the caller:
//!
//! - [`StandardAllocation`]: onboarding results. Keto overrides every goal,
//!   otherwise the split follows the goal.
//! - [`MealPlanAllocation`]: the day-plan flow. Keto and vegan are special
//!   cased, everyone else gets the general split.
//!
//! Grams are always derived from the integer percentage's calorie share.

use super::goal_adjuster::goal_calories_for_profile;
use super::nutrition_calculator::{calculate_bmr, calculate_tdee};
use super::units::{calories_from_grams, grams_for_percentage, percentage_of};
use crate::config::planner::{
    MacroDistribution, MealPlanAllocationTable, NutritionConfig, StandardAllocationTable,
};
use nutriplan_core::errors::ValidationError;
use nutriplan_core::models::{
    DietaryRestriction, Goal, Macro, MacroAmount, MacroBreakdown, MacroTarget, Targets,
    UserNutritionProfile,
};
use std::collections::BTreeSet;

/// Strategy selecting a macro split for a goal and a set of diet tags
pub trait MacroAllocation {
    /// Percentages for the given goal and restrictions
    fn distribution(
        &self,
        goal: Goal,
        restrictions: &BTreeSet<DietaryRestriction>,
    ) -> MacroDistribution;
}

/// Onboarding allocation: keto override, then goal-based defaults
#[derive(Debug, Clone, Copy)]
pub struct StandardAllocation<'a> {
    table: &'a StandardAllocationTable,
}

impl<'a> StandardAllocation<'a> {
    /// Wrap a standard allocation table
    #[must_use]
    pub const fn new(table: &'a StandardAllocationTable) -> Self {
        Self { table }
    }
}

impl MacroAllocation for StandardAllocation<'_> {
    fn distribution(
        &self,
        goal: Goal,
        restrictions: &BTreeSet<DietaryRestriction>,
    ) -> MacroDistribution {
        if restrictions.contains(&DietaryRestriction::Keto) {
            self.table.keto
        } else {
            self.table.for_goal(goal)
        }
    }
}

/// Meal-plan allocation: keto, then vegan, then the general split
///
/// The goal does not influence this preset.
#[derive(Debug, Clone, Copy)]
pub struct MealPlanAllocation<'a> {
    table: &'a MealPlanAllocationTable,
}

impl<'a> MealPlanAllocation<'a> {
    /// Wrap a meal-plan allocation table
    #[must_use]
    pub const fn new(table: &'a MealPlanAllocationTable) -> Self {
        Self { table }
    }
}

impl MacroAllocation for MealPlanAllocation<'_> {
    fn distribution(
        &self,
        _goal: Goal,
        restrictions: &BTreeSet<DietaryRestriction>,
    ) -> MacroDistribution {
        if restrictions.contains(&DietaryRestriction::Keto) {
            self.table.keto
        } else if restrictions.contains(&DietaryRestriction::Vegan) {
            self.table.vegan
        } else {
            self.table.general
        }
    }
}

fn macro_amount(goal_calories: u32, percentage: u8, kind: Macro) -> MacroAmount {
    let grams = grams_for_percentage(goal_calories, percentage, kind);
    MacroAmount {
        grams,
        calories: calories_from_grams(grams, kind),
        percentage,
    }
}

/// Convert a split into a full breakdown of goal calories
#[must_use]
pub fn breakdown_from_distribution(
    goal_calories: u32,
    distribution: MacroDistribution,
) -> MacroBreakdown {
    MacroBreakdown {
        protein: macro_amount(goal_calories, distribution.protein_pct, Macro::Protein),
        carbs: macro_amount(goal_calories, distribution.carbs_pct, Macro::Carbs),
        fat: macro_amount(goal_calories, distribution.fat_pct, Macro::Fat),
    }
}

/// Macro breakdown for onboarding results using the standard preset
#[must_use]
pub fn calculate_macro_breakdown(
    goal_calories: u32,
    goal: Goal,
    restrictions: &BTreeSet<DietaryRestriction>,
    table: &StandardAllocationTable,
) -> MacroBreakdown {
    let distribution = StandardAllocation::new(table).distribution(goal, restrictions);
    breakdown_from_distribution(goal_calories, distribution)
}

/// Day targets for a calorie figure and a split
#[must_use]
pub fn targets_from_distribution(calories: u32, distribution: MacroDistribution) -> Targets {
    let target = |percentage: u8, kind: Macro| MacroTarget {
        grams: grams_for_percentage(calories, percentage, kind),
        percentage,
    };
    Targets {
        calories,
        protein: target(distribution.protein_pct, Macro::Protein),
        carbs: target(distribution.carbs_pct, Macro::Carbs),
        fat: target(distribution.fat_pct, Macro::Fat),
    }
}

/// Keep the current percentages and recompute grams for a new calorie base
#[must_use]
pub fn rescale_targets(targets: &Targets, calories: u32) -> Targets {
    targets_from_distribution(
        calories,
        MacroDistribution {
            protein_pct: targets.protein.percentage,
            carbs_pct: targets.carbs.percentage,
            fat_pct: targets.fat.percentage,
        },
    )
}

/// Derive percentages from gram values
///
/// Protein and carbs are rounded from their energy share; fat takes the
/// remainder so the three always sum to 100.
#[must_use]
pub fn percentages_from_grams(targets: &Targets) -> Targets {
    let energy = targets.calories_from_grams();
    let protein_pct = percentage_of(
        calories_from_grams(targets.protein.grams, Macro::Protein),
        energy,
    );
    let carbs_pct = percentage_of(
        calories_from_grams(targets.carbs.grams, Macro::Carbs),
        energy,
    )
    .min(100 - protein_pct);

    Targets {
        protein: MacroTarget {
            percentage: protein_pct,
            ..targets.protein
        },
        carbs: MacroTarget {
            percentage: carbs_pct,
            ..targets.carbs
        },
        fat: MacroTarget {
            percentage: 100 - protein_pct - carbs_pct,
            ..targets.fat
        },
        ..*targets
    }
}

/// Day-plan targets for a profile using the meal-plan preset
///
/// # Errors
///
/// Returns a `ValidationError` if the profile fails validation
pub fn targets_for_profile(
    profile: &UserNutritionProfile,
    config: &NutritionConfig,
) -> Result<Targets, ValidationError> {
    let bmr = calculate_bmr(profile, &config.bmr)?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let goal = goal_calories_for_profile(tdee, profile, &config.goal_adjustment);
    let distribution = MealPlanAllocation::new(&config.macro_allocation.meal_plan)
        .distribution(profile.goal, &profile.dietary_restrictions);
    Ok(targets_from_distribution(goal.calories, distribution))
}
