// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Provides consistent display functions for targets, plans, meals and grocery lists

use nutriplan::errors::AppResult;
use nutriplan::intelligence::GroceryList;
use nutriplan_core::models::{CalorieCalculatorResult, DayPlan, Meal, MealSlot, Targets};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the onboarding calorie result
pub fn display_calorie_result(result: &CalorieCalculatorResult) {
    println!("\nCALORIE TARGETS");
    println!("{}", "=".repeat(60));
    println!("   BMR:           {} kcal", result.bmr);
    println!("   TDEE:          {} kcal", result.tdee);
    println!("   Goal calories: {} kcal", result.goal_calories);
    let breakdown = &result.macro_breakdown;
    println!(
        "   Protein {} g ({}%), carbs {} g ({}%), fat {} g ({}%)",
        breakdown.protein.grams,
        breakdown.protein.percentage,
        breakdown.carbs.grams,
        breakdown.carbs.percentage,
        breakdown.fat.grams,
        breakdown.fat.percentage,
    );
    println!("\n{}", result.explanation);
}

/// Display daily targets used by the day plan
pub fn display_targets(targets: &Targets) {
    println!("\nDAILY PLAN TARGETS");
    println!("{}", "=".repeat(60));
    println!("   Calories: {} kcal", targets.calories);
    println!(
        "   Protein {} g ({}%), carbs {} g ({}%), fat {} g ({}%)",
        targets.protein.grams,
        targets.protein.percentage,
        targets.carbs.grams,
        targets.carbs.percentage,
        targets.fat.grams,
        targets.fat.percentage,
    );
}

/// Display one meal
pub fn display_meal(slot: MealSlot, meal: &Meal) {
    println!("{slot}: {} [{}]", meal.title, meal.balance_tag.label());
    println!(
        "   {} kcal | P {} g | C {} g | F {} g",
        meal.macros.calories, meal.macros.protein_g, meal.macros.carbs_g, meal.macros.fat_g
    );
    for ingredient in &meal.ingredients {
        println!("   • {ingredient}");
    }
    if !meal.tips.is_empty() {
        println!("   Tip: {}", meal.tips);
    }
}

/// Display a full day plan with its totals
pub fn display_plan(plan: &DayPlan) {
    println!("\nDAY PLAN FOR {}", plan.date);
    println!("{}", "=".repeat(60));
    for (slot, meal) in plan.meals.iter() {
        display_meal(slot, meal);
        println!();
    }

    let totals = plan.totals();
    println!(
        "Total: {} kcal vs target {} kcal ({:+})",
        totals.calories,
        plan.calories_target,
        plan.target_delta()
    );
    println!(
        "   P {} g | C {} g | F {} g",
        totals.protein_g, totals.carbs_g, totals.fat_g
    );
}

/// Display an aggregated grocery list
pub fn display_grocery_list(list: &GroceryList, days: usize) {
    println!("\nGROCERY LIST ({days} day(s))");
    println!("{}", "=".repeat(60));
    for line in list.lines() {
        println!("• {line}");
    }
}
