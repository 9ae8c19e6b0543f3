// ABOUTME: Nutrition configuration for calorie targets, macro allocation and day plans
// ABOUTME: Configures BMR coefficients, activity factors, goal deltas, macro presets and meal shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Nutrition Planning Configuration
//!
//! Provides the tables behind every planner calculation: BMR coefficients,
//! activity multipliers, goal calorie deltas and safety floors, the two macro
//! allocation presets, per-meal calorie shares and plan adjustment amounts.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use super::error::ConfigError;
use nutriplan_core::constants::safety::{MIN_CALORIES_FEMALE, MIN_CALORIES_MALE};
use nutriplan_core::models::{ActivityLevel, Gender, Goal, MealSlot};
use serde::{Deserialize, Serialize};

/// Nutrition Planning Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal calorie deltas and safety floors
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macro allocation presets
    pub macro_allocation: MacroAllocationConfig,
    /// Share of the daily target assigned to each meal
    pub meal_shares: MealSharesConfig,
    /// Amounts used by plan adjustment directives
    pub plan_adjustment: PlanAdjustmentConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` raised by a section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()?;
        self.macro_allocation.validate()?;
        self.meal_shares.validate()?;
        self.plan_adjustment.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Gender constant of the formula
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            self.msj_weight_coef,
            self.msj_height_coef,
            self.msj_age_coef,
            self.msj_male_constant,
            self.msj_female_constant,
        ];
        if coefficients.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR coefficients must be finite".to_owned(),
            ));
        }
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "sedentary activity factor must be at least 1.0, got {}",
                self.sedentary
            )));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| self.factor(pair[0]) < self.factor(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

/// Goal calorie deltas and weight-loss safety floors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss delta (kcal/day): -500
    pub weight_loss_delta: i32,
    /// Maintenance delta (kcal/day): 0
    pub maintenance_delta: i32,
    /// Weight gain delta (kcal/day): +500
    pub weight_gain_delta: i32,
    /// Muscle building delta (kcal/day): +300
    pub muscle_building_delta: i32,
    /// Weight-loss floor for male profiles (kcal/day)
    pub min_calories_male: u32,
    /// Weight-loss floor for female profiles (kcal/day)
    pub min_calories_female: u32,
}

impl GoalAdjustmentConfig {
    /// Calorie delta for a goal
    #[must_use]
    pub const fn delta(&self, goal: Goal) -> i32 {
        match goal {
            Goal::WeightLoss => self.weight_loss_delta,
            Goal::Maintenance => self.maintenance_delta,
            Goal::WeightGain => self.weight_gain_delta,
            Goal::MuscleBuilding => self.muscle_building_delta,
        }
    }

    /// Safety floor for a gender
    #[must_use]
    pub const fn floor(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.min_calories_male,
            Gender::Female => self.min_calories_female,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_calories_male == 0 || self.min_calories_female == 0 {
            return Err(ConfigError::InvalidRange(
                "Calorie safety floors must be positive",
            ));
        }
        if self.weight_loss_delta > 0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "weight_loss_delta must not be positive, got {}",
                self.weight_loss_delta
            )));
        }
        Ok(())
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_delta: -500,
            maintenance_delta: 0,
            weight_gain_delta: 500,
            muscle_building_delta: 300,
            min_calories_male: MIN_CALORIES_MALE,
            min_calories_female: MIN_CALORIES_FEMALE,
        }
    }
}

/// Macro distribution (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.protein_pct as u32 + self.carbs_pct as u32 + self.fat_pct as u32
    }
}

/// Goal-based allocation used for onboarding results
///
/// The keto override takes precedence over every goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardAllocationTable {
    /// Keto override: P20/C5/F75
    pub keto: MacroDistribution,
    /// Weight loss: P40/C30/F30
    pub weight_loss: MacroDistribution,
    /// Maintenance: P30/C40/F30
    pub maintenance: MacroDistribution,
    /// Weight gain: P25/C50/F25
    pub weight_gain: MacroDistribution,
    /// Muscle building: P35/C40/F25
    pub muscle_building: MacroDistribution,
}

impl StandardAllocationTable {
    /// Distribution for a goal without diet overrides
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::Maintenance => self.maintenance,
            Goal::WeightGain => self.weight_gain,
            Goal::MuscleBuilding => self.muscle_building,
        }
    }
}

impl Default for StandardAllocationTable {
    fn default() -> Self {
        Self {
            keto: MacroDistribution::new(20, 5, 75),
            weight_loss: MacroDistribution::new(40, 30, 30),
            maintenance: MacroDistribution::new(30, 40, 30),
            weight_gain: MacroDistribution::new(25, 50, 25),
            muscle_building: MacroDistribution::new(35, 40, 25),
        }
    }
}

/// Diet-based allocation used by the meal-plan flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanAllocationTable {
    /// Keto: P20/C5/F75, same as the onboarding keto override
    pub keto: MacroDistribution,
    /// Vegan: P25/C60/F15
    pub vegan: MacroDistribution,
    /// Everyone else: P30/C40/F30
    pub general: MacroDistribution,
}

impl Default for MealPlanAllocationTable {
    fn default() -> Self {
        Self {
            keto: MacroDistribution::new(20, 5, 75),
            vegan: MacroDistribution::new(25, 60, 15),
            general: MacroDistribution::new(30, 40, 30),
        }
    }
}

/// The two macro allocation presets, selected explicitly by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroAllocationConfig {
    /// Onboarding preset
    pub standard: StandardAllocationTable,
    /// Meal-plan preset
    pub meal_plan: MealPlanAllocationTable,
}

impl MacroAllocationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("standard.keto", self.standard.keto),
            ("standard.weight_loss", self.standard.weight_loss),
            ("standard.maintenance", self.standard.maintenance),
            ("standard.weight_gain", self.standard.weight_gain),
            ("standard.muscle_building", self.standard.muscle_building),
            ("meal_plan.keto", self.meal_plan.keto),
            ("meal_plan.vegan", self.meal_plan.vegan),
            ("meal_plan.general", self.meal_plan.general),
        ];

        for (name, distribution) in entries {
            let sum = distribution.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }
        Ok(())
    }
}

/// Share of the daily calorie target assigned to each meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSharesConfig {
    /// Breakfast share: 0.25
    pub breakfast: f64,
    /// Lunch share: 0.35
    pub lunch: f64,
    /// Dinner share: 0.25
    pub dinner: f64,
    /// Snack share: 0.15
    pub snack: f64,
}

impl MealSharesConfig {
    /// Share for a slot
    #[must_use]
    pub const fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
        }
    }

    /// Sum of the four shares
    #[must_use]
    pub fn total(&self) -> f64 {
        MealSlot::ALL.iter().map(|slot| self.share(*slot)).sum()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for slot in MealSlot::ALL {
            let value = self.share(slot);
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{slot} share must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(format!(
                "meal shares must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

impl Default for MealSharesConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.25,
            snack: 0.15,
        }
    }
}

/// Amounts applied by plan adjustment directives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanAdjustmentConfig {
    /// Grams added to the protein target by "more protein": 12
    pub protein_boost_g: u32,
}

impl PlanAdjustmentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.protein_boost_g == 0 {
            return Err(ConfigError::InvalidRange("protein_boost_g must be positive"));
        }
        Ok(())
    }
}

impl Default for PlanAdjustmentConfig {
    fn default() -> Self {
        Self { protein_boost_g: 12 }
    }
}
