// ABOUTME: Tests for single-meal swaps: family options, vegan filtering and meal-type archetypes
// ABOUTME: Checks that swaps apply fixed deltas and leave the rest of the day untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::intelligence::swap::meal_type_options;
use nutriplan::intelligence::{
    apply_swap, generate_swap_options, swap_options_for_slot, MealFamily, MealType,
};
use nutriplan_core::models::{DietaryRestriction, Meal, MealMacros, MealSlot};

mod common;

fn titles(options: &[Meal]) -> Vec<&str> {
    options.iter().map(|meal| meal.title.as_str()).collect()
}

fn meal(title: &str) -> Meal {
    Meal::new(title, MealMacros::new(500, 30, 50, 20), vec!["1 cup rice".into()], "")
}

// ============================================================================
// Family options
// ============================================================================

#[test]
fn test_egg_breakfast_options_for_omnivore() {
    let profile = common::male_weight_loss();
    let plan = common::plan_for(&profile, common::sunday());
    let breakfast = &plan.meals.breakfast;
    assert_eq!(MealFamily::detect(&breakfast.title), MealFamily::Egg);

    let options = generate_swap_options(breakfast, &profile);
    assert_eq!(
        titles(&options),
        ["Greek Yogurt Bowl", "Tofu Scramble", "Overnight Oats"]
    );

    // 565 / 42 / 57 / 19 shifted by -50 / +5 / -8 / -3
    assert_eq!(options[0].macros, MealMacros::new(515, 47, 49, 16));
}

#[test]
fn test_vegan_profile_sees_only_vegan_options() {
    let vegan = common::male_with(DietaryRestriction::Vegan);
    let options = generate_swap_options(&meal("Veggie Omelet"), &vegan);
    assert_eq!(titles(&options), ["Tofu Scramble", "Overnight Oats"]);
}

#[test]
fn test_vegan_options_topped_up_from_default_family() {
    let vegan = common::male_with(DietaryRestriction::Vegan);
    let options = generate_swap_options(&meal("Baked Salmon with Rice"), &vegan);
    assert_eq!(titles(&options), ["Lentil Stew", "Lentil Salad"]);
}

#[test]
fn test_current_title_is_never_offered() {
    let profile = common::male_weight_loss();
    let options = generate_swap_options(&meal("Lentil Salad"), &profile);
    assert_eq!(titles(&options), ["Hummus Veggie Plate", "Quinoa Power Bowl"]);

    let options = generate_swap_options(&meal("Tofu Scramble"), &profile);
    assert!(!titles(&options).contains(&"Tofu Scramble"));
}

#[test]
fn test_yogurt_snack_options() {
    let profile = common::male_weight_loss();
    let plan = common::plan_for(&profile, common::sunday());
    let options = generate_swap_options(&plan.meals.snack, &profile);
    assert_eq!(
        titles(&options),
        ["Veggie Omelet", "Chia Pudding", "Overnight Oats"]
    );
}

#[test]
fn test_options_always_offer_at_least_two() {
    let vegan = common::male_with(DietaryRestriction::Vegan);
    let omnivore = common::male_weight_loss();
    for title in [
        "Veggie Omelet",
        "Greek Yogurt Bowl",
        "Baked Salmon",
        "Chicken Stir-Fry",
        "Hummus and Veggies",
        "Quinoa Power Bowl",
    ] {
        assert!(generate_swap_options(&meal(title), &vegan).len() >= 2, "{title}");
        assert!(generate_swap_options(&meal(title), &omnivore).len() >= 2, "{title}");
    }
}

#[test]
fn test_option_macros_never_underflow() {
    let tiny = Meal::new("Veggie Omelet", MealMacros::new(10, 1, 2, 1), vec![], "");
    let options = generate_swap_options(&tiny, &common::male_weight_loss());
    let yogurt = &options[0];
    assert_eq!(yogurt.macros, MealMacros::new(0, 6, 0, 0));
}

// ============================================================================
// Meal-type archetypes
// ============================================================================

#[test]
fn test_meal_types_follow_restrictions() {
    assert_eq!(MealType::allowed_for(&common::male_weight_loss()), MealType::ALL.to_vec());
    assert_eq!(
        MealType::allowed_for(&common::male_with(DietaryRestriction::Vegetarian)),
        vec![MealType::Vegetarian]
    );
    assert_eq!(
        MealType::allowed_for(&common::male_with(DietaryRestriction::Vegan)),
        vec![MealType::Vegetarian]
    );
    assert_eq!(
        MealType::allowed_for(&common::male_with(DietaryRestriction::Pescatarian)),
        vec![MealType::Vegetarian, MealType::Fish]
    );
}

#[test]
fn test_main_meals_get_archetypes() {
    let profile = common::male_weight_loss();
    let plan = common::plan_for(&profile, common::sunday());

    let options = swap_options_for_slot(MealSlot::Lunch, &plan.meals.lunch, &profile);
    assert_eq!(
        titles(&options),
        [
            "Lean Beef Burrito Bowl",
            "Herb Roasted Chicken Plate",
            "Chickpea and Veggie Bowl",
            "Baked Cod with Potatoes",
        ]
    );

    let typed = meal_type_options(&plan.meals.dinner, &common::male_with(DietaryRestriction::Pescatarian));
    let kinds: Vec<MealType> = typed.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, [MealType::Vegetarian, MealType::Fish]);
}

#[test]
fn test_snack_slot_uses_family_options() {
    let profile = common::male_weight_loss();
    let plan = common::plan_for(&profile, common::sunday());
    let options = swap_options_for_slot(MealSlot::Snack, &plan.meals.snack, &profile);
    assert_eq!(options[0].title, "Veggie Omelet");
}

#[test]
fn test_vegan_snack_swaps_stay_in_default_family() {
    let vegan = common::male_with(DietaryRestriction::Vegan);
    let plan = common::plan_for(&vegan, common::sunday());
    assert_eq!(plan.meals.snack.title, "Hummus and Veggies");
    assert_eq!(MealFamily::detect(&plan.meals.snack.title), MealFamily::Default);

    let options = swap_options_for_slot(MealSlot::Snack, &plan.meals.snack, &vegan);
    assert_eq!(
        titles(&options),
        ["Lentil Salad", "Hummus Veggie Plate", "Quinoa Power Bowl"]
    );
}

#[test]
fn test_veggie_titles_are_not_egg_dishes() {
    for title in ["Hummus Veggie Plate", "Chickpea and Veggie Bowl", "Roasted Eggplant"] {
        assert_eq!(MealFamily::detect(title), MealFamily::Default, "{title}");
    }
}

// ============================================================================
// Applying a swap
// ============================================================================

#[test]
fn test_apply_swap_replaces_only_one_meal() {
    let profile = common::male_weight_loss();
    let mut plan = common::plan_for(&profile, common::sunday());
    let before = plan.clone();

    let replacement = generate_swap_options(&plan.meals.breakfast, &profile).remove(0);
    let replaced = apply_swap(&mut plan, MealSlot::Breakfast, replacement);

    assert_eq!(replaced, before.meals.breakfast);
    assert_eq!(plan.meals.breakfast.title, "Greek Yogurt Bowl");
    assert_eq!(plan.meals.lunch, before.meals.lunch);
    assert_eq!(plan.meals.dinner, before.meals.dinner);
    assert_eq!(plan.meals.snack, before.meals.snack);
    assert_eq!(plan.calories_target, before.calories_target);
    // Day total drifts by the swap delta
    assert_eq!(plan.target_delta(), before.target_delta() - 50);
}
