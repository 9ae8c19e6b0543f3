// ABOUTME: Derived nutrition value objects: calculator result, macro breakdown and daily targets
// ABOUTME: Recomputed from the profile on every change, never partially updated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use serde::{Deserialize, Serialize};

/// Macronutrient kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Protein (4 kcal/g)
    Protein,
    /// Carbohydrate (4 kcal/g)
    Carbs,
    /// Fat (9 kcal/g)
    Fat,
}

impl Macro {
    /// Energy density of this macronutrient
    #[must_use]
    pub const fn kcal_per_gram(self) -> u32 {
        match self {
            Self::Protein => PROTEIN_KCAL_PER_G,
            Self::Carbs => CARBS_KCAL_PER_G,
            Self::Fat => FAT_KCAL_PER_G,
        }
    }
}

/// One macronutrient of a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroAmount {
    /// Grams per day
    pub grams: u32,
    /// Energy of those grams (`grams * kcal_per_gram`)
    pub calories: u32,
    /// Integer share of the goal calories
    pub percentage: u8,
}

/// Protein/carbs/fat breakdown of a calorie goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein amount
    pub protein: MacroAmount,
    /// Carbohydrate amount
    pub carbs: MacroAmount,
    /// Fat amount
    pub fat: MacroAmount,
}

impl MacroBreakdown {
    /// Sum of the three macro calorie figures
    #[must_use]
    pub const fn total_calories(&self) -> u32 {
        self.protein.calories + self.carbs.calories + self.fat.calories
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total_percentage(&self) -> u32 {
        self.protein.percentage as u32 + self.carbs.percentage as u32 + self.fat.percentage as u32
    }
}

/// Full onboarding calculation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieCalculatorResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: u32,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted daily calories
    pub goal_calories: u32,
    /// Macro breakdown of the goal calories
    pub macro_breakdown: MacroBreakdown,
    /// Human-readable summary of how the numbers were derived
    pub explanation: String,
}

/// Grams and percentage for one macro of a day target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Grams per day
    pub grams: u32,
    /// Integer share of the daily calories
    pub percentage: u8,
}

/// Daily targets used by the day-plan builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    /// Daily calorie target
    pub calories: u32,
    /// Protein target
    pub protein: MacroTarget,
    /// Carbohydrate target
    pub carbs: MacroTarget,
    /// Fat target
    pub fat: MacroTarget,
}

impl Targets {
    /// Target for one macro
    #[must_use]
    pub const fn macro_target(&self, kind: Macro) -> MacroTarget {
        match kind {
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fat => self.fat,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total_percentage(&self) -> u32 {
        self.protein.percentage as u32 + self.carbs.percentage as u32 + self.fat.percentage as u32
    }

    /// Energy implied by the gram targets
    #[must_use]
    pub const fn calories_from_grams(&self) -> u32 {
        self.protein.grams * PROTEIN_KCAL_PER_G
            + self.carbs.grams * CARBS_KCAL_PER_G
            + self.fat.grams * FAT_KCAL_PER_G
    }
}
