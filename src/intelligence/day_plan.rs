// ABOUTME: Day-plan builder distributing daily targets over four meals by fixed shares
// ABOUTME: Selects template content by diet tags with deterministic day-of-week rotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Day-Plan Builder
//!
//! Each meal's calories and macro grams are the slot share applied
//! independently to the daily figures, so a meal's stated calories may differ
//! slightly from the energy implied by its grams. Balance tags are computed
//! from the meal's own grams.

use super::templates::{DietTemplate, MealTemplate, VEGAN_BOWL};
use super::units::apply_share;
use crate::config::planner::MealSharesConfig;
use chrono::{Datelike, NaiveDate};
use nutriplan_core::models::{
    BalanceTag, DayMeals, DayPlan, Meal, MealMacros, MealSlot, Targets, UserNutritionProfile,
};
use tracing::debug;

/// Deterministic rotation index: day of week (Sunday = 0) modulo the variant count
///
/// Returns 0 when there are no variants.
#[must_use]
pub fn variant_index(date: NaiveDate, num_variants: usize) -> usize {
    if num_variants == 0 {
        return 0;
    }
    date.weekday().num_days_from_sunday() as usize % num_variants
}

/// Macros for one slot: the share applied to each daily figure independently
#[must_use]
pub fn slot_macros(targets: &Targets, share: f64) -> MealMacros {
    MealMacros::new(
        apply_share(targets.calories, share),
        apply_share(targets.protein.grams, share),
        apply_share(targets.carbs.grams, share),
        apply_share(targets.fat.grams, share),
    )
}

/// Advice appended to a meal's tips for its balance tag
#[must_use]
pub const fn balance_tip(tag: BalanceTag) -> Option<&'static str> {
    match tag {
        BalanceTag::Balanced => None,
        BalanceTag::HighCarb => Some("Pair with a protein or healthy fat to slow the carbs."),
        BalanceTag::LowProtein => Some("Add a protein source to round this meal out."),
    }
}

/// Materialize a template with macros and balance-aware tips
#[must_use]
pub fn meal_from_template(template: &MealTemplate, macros: MealMacros) -> Meal {
    let mut meal = template.to_meal(macros);
    if let Some(tip) = balance_tip(meal.balance_tag) {
        meal.tips = format!("{} {tip}", meal.tips);
    }
    meal
}

/// Template for a slot on a given day
///
/// Breakfast rotates through the diet's variants; other slots use their
/// primary template.
#[must_use]
pub fn template_for_slot(diet: DietTemplate, slot: MealSlot, date: NaiveDate) -> MealTemplate {
    let templates = diet.slot_templates(slot);
    let index = if slot == MealSlot::Breakfast {
        variant_index(date, templates.len())
    } else {
        0
    };
    templates
        .get(index)
        .or_else(|| templates.first())
        .copied()
        .unwrap_or(VEGAN_BOWL)
}

/// Build the four meals for a profile and daily targets
#[must_use]
pub fn build_template_meals(
    profile: &UserNutritionProfile,
    targets: &Targets,
    date: NaiveDate,
    shares: &MealSharesConfig,
) -> DayMeals {
    let diet = DietTemplate::for_profile(profile);
    let meal = |slot: MealSlot| {
        meal_from_template(
            &template_for_slot(diet, slot, date),
            slot_macros(targets, shares.share(slot)),
        )
    };

    debug!(?diet, %date, calories = targets.calories, "Building template meals");

    DayMeals {
        breakfast: meal(MealSlot::Breakfast),
        lunch: meal(MealSlot::Lunch),
        dinner: meal(MealSlot::Dinner),
        snack: meal(MealSlot::Snack),
    }
}

/// Build a full day plan
#[must_use]
pub fn build_day_plan(
    profile: &UserNutritionProfile,
    targets: &Targets,
    date: NaiveDate,
    shares: &MealSharesConfig,
) -> DayPlan {
    DayPlan {
        date,
        calories_target: targets.calories,
        meals: build_template_meals(profile, targets, date, shares),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_index_uses_sunday_zero() {
        // 2024-06-02 is a Sunday, 2024-06-05 a Wednesday
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(variant_index(sunday, 3), 0);
        assert_eq!(variant_index(wednesday, 3), 0);
        assert_eq!(variant_index(wednesday, 2), 1);
        assert_eq!(variant_index(wednesday, 0), 0);
    }

    #[test]
    fn test_balance_tip_only_for_unbalanced_meals() {
        assert!(balance_tip(BalanceTag::Balanced).is_none());
        assert!(balance_tip(BalanceTag::LowProtein).is_some());
    }
}
