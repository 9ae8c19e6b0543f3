// ABOUTME: Meal log entries and per-100g nutrition facts returned by food lookups
// ABOUTME: Facts scale linearly to a portion before being written to the log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a log entry was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSource {
    /// Typed by the user
    Manual,
    /// Scanned barcode
    Barcode,
    /// Recognized from a photo
    Photo,
}

/// Nutrition facts per 100 g of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy (kcal per 100 g)
    pub energy_kcal_per_100g: f64,
    /// Protein (g per 100 g)
    pub protein_per_100g: f64,
    /// Carbohydrate (g per 100 g)
    pub carbs_per_100g: f64,
    /// Fat (g per 100 g)
    pub fat_per_100g: f64,
}

/// Nutrition of an actual portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionNutrition {
    /// Portion weight in grams
    pub grams: f64,
    /// Energy, rounded to whole kcal
    pub calories: u32,
    /// Protein grams, one decimal
    pub protein_g: f64,
    /// Carbohydrate grams, one decimal
    pub carbs_g: f64,
    /// Fat grams, one decimal
    pub fat_g: f64,
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl NutritionFacts {
    /// Scale the per-100 g values to a portion
    ///
    /// Negative or non-finite portions scale to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scaled_to(&self, grams: f64) -> PortionNutrition {
        let grams = if grams.is_finite() && grams > 0.0 {
            grams
        } else {
            0.0
        };
        let factor = grams / 100.0;
        PortionNutrition {
            grams,
            calories: (self.energy_kcal_per_100g * factor).round().max(0.0) as u32,
            protein_g: one_decimal(self.protein_per_100g * factor),
            carbs_g: one_decimal(self.carbs_per_100g * factor),
            fat_g: one_decimal(self.fat_per_100g * factor),
        }
    }
}

/// A food matched by a nutrition lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Barcode, when the lookup went through one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Facts per 100 g
    pub facts: NutritionFacts,
}

/// One row of the meal log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner profile
    pub user_id: Uuid,
    /// Capture time
    pub logged_at: DateTime<Utc>,
    /// Food name
    pub name: String,
    /// Capture source
    pub source: LogSource,
    /// Portion nutrition
    pub nutrition: PortionNutrition,
}

impl MealLogEntry {
    /// Build an entry for a food portion captured now
    #[must_use]
    pub fn new(user_id: Uuid, food: &FoodItem, grams: f64, source: LogSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            logged_at: Utc::now(),
            name: food.name.clone(),
            source,
            nutrition: food.facts.scaled_to(grams),
        }
    }
}
