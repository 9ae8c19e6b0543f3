// ABOUTME: Planner configuration root with global loading, env overrides and validation
// ABOUTME: Aggregates the nutrition tables every planner calculation reads from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Planner Configuration Module
//!
//! Configuration is loaded once per process through [`PlannerConfig::global`].
//! Engine functions take the section they need by reference, so callers and
//! tests can pass explicit configurations instead.
//!
//! # Environment overrides
//!
//! Every override is read from a `NUTRIPLAN_*` variable, e.g.
//! `NUTRIPLAN_MIN_CALORIES_FEMALE=1300` or `NUTRIPLAN_SHARE_SNACK=0.10`.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroAllocationConfig,
    MacroDistribution, MealPlanAllocationTable, MealSharesConfig, NutritionConfig,
    PlanAdjustmentConfig, StandardAllocationTable,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Nutrition tables for targets, allocation and day plans
    pub nutrition: NutritionConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found in any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutrition = &mut self.nutrition;

        // Activity factors
        let factors = &mut nutrition.activity_factors;
        Self::apply_env_var("NUTRIPLAN_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_LIGHTLY_ACTIVE",
            &mut factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("NUTRIPLAN_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var(
            "NUTRIPLAN_ACTIVITY_EXTREMELY_ACTIVE",
            &mut factors.extremely_active,
        )?;

        // Goal deltas and floors
        let goals = &mut nutrition.goal_adjustment;
        Self::apply_env_var("NUTRIPLAN_WEIGHT_LOSS_DELTA", &mut goals.weight_loss_delta)?;
        Self::apply_env_var("NUTRIPLAN_WEIGHT_GAIN_DELTA", &mut goals.weight_gain_delta)?;
        Self::apply_env_var(
            "NUTRIPLAN_MUSCLE_BUILDING_DELTA",
            &mut goals.muscle_building_delta,
        )?;
        Self::apply_env_var("NUTRIPLAN_MIN_CALORIES_MALE", &mut goals.min_calories_male)?;
        Self::apply_env_var(
            "NUTRIPLAN_MIN_CALORIES_FEMALE",
            &mut goals.min_calories_female,
        )?;

        // Meal shares
        let shares = &mut nutrition.meal_shares;
        Self::apply_env_var("NUTRIPLAN_SHARE_BREAKFAST", &mut shares.breakfast)?;
        Self::apply_env_var("NUTRIPLAN_SHARE_LUNCH", &mut shares.lunch)?;
        Self::apply_env_var("NUTRIPLAN_SHARE_DINNER", &mut shares.dinner)?;
        Self::apply_env_var("NUTRIPLAN_SHARE_SNACK", &mut shares.snack)?;

        Self::apply_env_var(
            "NUTRIPLAN_PROTEIN_BOOST_G",
            &mut nutrition.plan_adjustment.protein_boost_g,
        )?;

        Ok(self)
    }
}
