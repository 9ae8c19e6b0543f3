// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, dates and plan helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`

use chrono::NaiveDate;
use nutriplan::config::NutritionConfig;
use nutriplan::intelligence::{build_day_plan, targets_for_profile};
use nutriplan_core::models::{
    ActivityLevel, DayPlan, DietaryRestriction, Gender, Goal, Targets, UserNutritionProfile,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Default nutrition tables
pub fn config() -> NutritionConfig {
    NutritionConfig::default()
}

/// 30 y male, 180 cm, 80 kg, moderately active, weight loss
///
/// BMR 1780, TDEE 2759, goal calories 2259.
pub fn male_weight_loss() -> UserNutritionProfile {
    UserNutritionProfile::new(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::ModeratelyActive,
        Goal::WeightLoss,
    )
}

/// 25 y female, 165 cm, 60 kg, sedentary, weight loss
///
/// BMR 1345, TDEE 1614, goal calories floored to 1200.
pub fn female_weight_loss() -> UserNutritionProfile {
    UserNutritionProfile::new(
        25,
        Gender::Female,
        165.0,
        60.0,
        ActivityLevel::Sedentary,
        Goal::WeightLoss,
    )
}

/// The male reference profile with one dietary restriction
pub fn male_with(restriction: DietaryRestriction) -> UserNutritionProfile {
    male_weight_loss().with_restriction(restriction)
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 2024-06-02, a Sunday
pub fn sunday() -> NaiveDate {
    date(2024, 6, 2)
}

/// Meal-plan targets for a profile under default tables
pub fn targets(profile: &UserNutritionProfile) -> Targets {
    targets_for_profile(profile, &config()).unwrap()
}

/// Fresh plan for a profile under default tables
pub fn plan_for(profile: &UserNutritionProfile, on: NaiveDate) -> DayPlan {
    let config = config();
    build_day_plan(profile, &targets(profile), on, &config.meal_shares)
}
