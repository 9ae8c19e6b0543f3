// ABOUTME: Tests for planner configuration defaults, validation and environment overrides
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::planner::MacroDistribution;
use nutriplan::config::{ConfigError, NutritionConfig, PlannerConfig};
use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::calculate_calorie_result;
use nutriplan_core::errors::AppError;
use serial_test::serial;
use std::env;

mod common;

const OVERRIDE_VARS: &[&str] = &[
    "NUTRIPLAN_MIN_CALORIES_FEMALE",
    "NUTRIPLAN_SHARE_SNACK",
    "NUTRIPLAN_SHARE_LUNCH",
    "NUTRIPLAN_ACTIVITY_SEDENTARY",
    "NUTRIPLAN_PROTEIN_BOOST_G",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults and validation
// ============================================================================

#[test]
fn test_defaults_validate() {
    assert!(PlannerConfig::default().validate().is_ok());
    let config = NutritionConfig::default();
    assert!((config.meal_shares.total() - 1.0).abs() < 1e-9);
    assert_eq!(config.plan_adjustment.protein_boost_g, 12);
    assert_eq!(config.goal_adjustment.min_calories_male, 1500);
    assert_eq!(config.goal_adjustment.min_calories_female, 1200);
}

#[test]
fn test_macro_split_must_sum_to_100() {
    let mut config = PlannerConfig::default();
    config.nutrition.macro_allocation.meal_plan.general = MacroDistribution {
        protein_pct: 30,
        carbs_pct: 40,
        fat_pct: 20,
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeights(_)));
    assert!(err.to_string().contains("meal_plan.general"));
}

#[test]
fn test_meal_shares_must_sum_to_one() {
    let mut config = PlannerConfig::default();
    config.nutrition.meal_shares.snack = 0.25;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidWeights(_)
    ));

    config.nutrition.meal_shares.snack = 1.5;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}

#[test]
fn test_activity_factors_must_ascend() {
    let mut config = PlannerConfig::default();
    config.nutrition.activity_factors.very_active = 1.5;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidRange(_)
    ));
}

#[test]
fn test_positive_weight_loss_delta_rejected() {
    let mut config = PlannerConfig::default();
    config.nutrition.goal_adjustment.weight_loss_delta = 100;
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));
}

#[test]
fn test_config_error_codes() {
    let error: AppError = ConfigError::Parse("Invalid NUTRIPLAN_SHARE_SNACK: lots".into()).into();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("NUTRIPLAN_SHARE_SNACK"));

    let error: AppError = ConfigError::InvalidWeights("meal shares sum to 1.1".into()).into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.http_status(), 500);
}

#[test]
fn test_config_serializes_round_trip() {
    let config = PlannerConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: PlannerConfig = serde_json::from_str(&json).unwrap();
    assert!(parsed.validate().is_ok());
    assert_eq!(
        parsed.nutrition.macro_allocation.standard.keto.as_tuple(),
        (20, 5, 75)
    );
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_env_override_changes_floor() {
    clear_overrides();
    env::set_var("NUTRIPLAN_MIN_CALORIES_FEMALE", "1300");

    let config = PlannerConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.nutrition.goal_adjustment.min_calories_female, 1300);
    let result = calculate_calorie_result(&common::female_weight_loss(), &config.nutrition).unwrap();
    assert_eq!(result.goal_calories, 1300);
}

#[test]
#[serial]
fn test_env_override_shares_validated_together() {
    clear_overrides();
    env::set_var("NUTRIPLAN_SHARE_SNACK", "0.10");
    env::set_var("NUTRIPLAN_SHARE_LUNCH", "0.40");

    let config = PlannerConfig::load().unwrap();
    assert!((config.nutrition.meal_shares.snack - 0.10).abs() < f64::EPSILON);

    env::set_var("NUTRIPLAN_SHARE_LUNCH", "0.35");
    let err = PlannerConfig::load().unwrap_err();
    clear_overrides();

    assert!(matches!(err, ConfigError::InvalidWeights(_)));
}

#[test]
#[serial]
fn test_env_override_parse_error() {
    clear_overrides();
    env::set_var("NUTRIPLAN_PROTEIN_BOOST_G", "lots");

    let err = PlannerConfig::load().unwrap_err();
    clear_overrides();

    match err {
        ConfigError::Parse(message) => assert!(message.contains("NUTRIPLAN_PROTEIN_BOOST_G")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_env_override_out_of_range_activity() {
    clear_overrides();
    env::set_var("NUTRIPLAN_ACTIVITY_SEDENTARY", "0.9");

    let err = PlannerConfig::load().unwrap_err();
    clear_overrides();

    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
}
