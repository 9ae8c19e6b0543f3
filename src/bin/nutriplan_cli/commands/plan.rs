// ABOUTME: Day-plan commands for nutriplan-cli
// ABOUTME: Handles plan generation with adjustments, meal swaps and grocery aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use chrono::{Days, NaiveDate};
use nutriplan::errors::{AppError, AppResult};
use nutriplan::external::InMemoryKeyValueStore;
use nutriplan::services::MealPlanService;
use nutriplan_core::models::{MealSlot, UserNutritionProfile};
use serde_json::json;
use tracing::info;

use crate::helpers::display::{
    display_grocery_list, display_meal, display_plan, display_targets, print_json,
};

fn service() -> MealPlanService<InMemoryKeyValueStore> {
    MealPlanService::with_global_config(InMemoryKeyValueStore::new())
}

/// Generate a plan and optionally adjust it
pub fn generate(
    profile: &UserNutritionProfile,
    date: NaiveDate,
    adjust: Option<&str>,
    as_json: bool,
) -> AppResult<()> {
    let service = service();
    let draft = service.generate(profile, date)?;

    let Some(request) = adjust else {
        if as_json {
            return print_json(&draft);
        }
        display_targets(&draft.targets);
        display_plan(&draft.plan);
        return Ok(());
    };

    info!(request, "Applying adjustment request");
    let adjusted = service.adjust(profile, date, request)?;
    if as_json {
        return print_json(&adjusted);
    }

    if adjusted.directives.is_empty() {
        println!("No adjustments recognized in \"{request}\"");
    } else {
        println!("Applied adjustments:");
        for directive in &adjusted.directives {
            println!("   - {directive}");
        }
    }
    display_targets(&adjusted.targets);
    display_plan(&adjusted.plan);
    Ok(())
}

/// List swap options for a slot and optionally apply one
pub fn swaps(
    profile: &UserNutritionProfile,
    date: NaiveDate,
    slot: MealSlot,
    pick: Option<usize>,
    as_json: bool,
) -> AppResult<()> {
    let service = service();
    service.generate(profile, date)?;
    let options = service.swap_options(profile, date, slot)?;

    let Some(index) = pick else {
        if as_json {
            return print_json(&json!({ "slot": slot, "options": options }));
        }
        println!("Swap options for {slot}:");
        for (index, option) in options.iter().enumerate() {
            print!("[{index}] ");
            display_meal(slot, option);
        }
        return Ok(());
    };

    let draft = service.swap(profile, date, slot, index)?;
    if as_json {
        return print_json(&draft);
    }
    display_plan(&draft.plan);
    Ok(())
}

/// Plan consecutive days and print the aggregated grocery list
pub fn groceries(
    profile: &UserNutritionProfile,
    start: NaiveDate,
    days: u32,
    as_json: bool,
) -> AppResult<()> {
    let service = service();
    let dates: Vec<NaiveDate> = (0..u64::from(days))
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| AppError::invalid_input(format!("Date out of range: {start} + {offset} days")))
        })
        .collect::<AppResult<_>>()?;

    for date in &dates {
        service.generate(profile, *date)?;
    }
    let list = service.grocery_list(profile.id, &dates)?;

    if as_json {
        return print_json(&list.lines());
    }
    display_grocery_list(&list, dates.len());
    Ok(())
}
