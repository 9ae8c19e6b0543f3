// ABOUTME: Day plan value objects: meal slots, meals, balance tags and the four-meal day plan
// ABOUTME: Meals always carry all four energy fields and a tag computed from their own macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::constants::balance::{HIGH_CARB_PCT, LOW_PROTEIN_PCT};
use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Fixed meal slot of a day plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealSlot {
    /// All slots in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire name of the slot
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse meal slot from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|slot| slot.as_str() == lowered)
    }

    /// Whether the slot is a main meal (lunch or dinner)
    #[must_use]
    pub const fn is_main_meal(&self) -> bool {
        matches!(self, Self::Lunch | Self::Dinner)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a meal's own macro ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceTag {
    /// Neither low in protein nor carb-heavy
    Balanced,
    /// Carbohydrates above half of the meal's energy
    HighCarb,
    /// Protein below a fifth of the meal's energy
    LowProtein,
}

impl BalanceTag {
    /// Classify from gram values
    ///
    /// Low protein wins over high carb. A meal with no energy is `Balanced`.
    #[must_use]
    pub fn classify(protein_g: u32, carbs_g: u32, fat_g: u32) -> Self {
        let protein_kcal = f64::from(protein_g * PROTEIN_KCAL_PER_G);
        let carbs_kcal = f64::from(carbs_g * CARBS_KCAL_PER_G);
        let fat_kcal = f64::from(fat_g * FAT_KCAL_PER_G);
        let total = protein_kcal + carbs_kcal + fat_kcal;
        if total <= 0.0 {
            return Self::Balanced;
        }

        let protein_pct = protein_kcal / total * 100.0;
        let carbs_pct = carbs_kcal / total * 100.0;
        if protein_pct < LOW_PROTEIN_PCT {
            Self::LowProtein
        } else if carbs_pct > HIGH_CARB_PCT {
            Self::HighCarb
        } else {
            Self::Balanced
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::HighCarb => "High carb",
            Self::LowProtein => "Low protein",
        }
    }
}

/// Energy and macro figures of a meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealMacros {
    /// Stated calories
    pub calories: u32,
    /// Protein grams
    pub protein_g: u32,
    /// Carbohydrate grams
    pub carbs_g: u32,
    /// Fat grams
    pub fat_g: u32,
}

impl MealMacros {
    /// Build from the four figures
    #[must_use]
    pub const fn new(calories: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Apply signed deltas, saturating at zero
    #[must_use]
    pub const fn offset(&self, calories: i32, protein_g: i32, carbs_g: i32, fat_g: i32) -> Self {
        Self {
            calories: self.calories.saturating_add_signed(calories),
            protein_g: self.protein_g.saturating_add_signed(protein_g),
            carbs_g: self.carbs_g.saturating_add_signed(carbs_g),
            fat_g: self.fat_g.saturating_add_signed(fat_g),
        }
    }
}

impl Add for MealMacros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

/// A single meal of a day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Display title
    pub title: String,
    /// Energy and macro figures
    #[serde(flatten)]
    pub macros: MealMacros,
    /// Ordered free-text ingredient lines
    pub ingredients: Vec<String>,
    /// Preparation or balance tips
    pub tips: String,
    /// Tag computed from `macros`
    pub balance_tag: BalanceTag,
}

impl Meal {
    /// Create a meal, deriving its balance tag from the macros
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        macros: MealMacros,
        ingredients: Vec<String>,
        tips: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            balance_tag: BalanceTag::classify(macros.protein_g, macros.carbs_g, macros.fat_g),
            macros,
            ingredients,
            tips: tips.into(),
        }
    }

    /// Recompute the balance tag after the macros changed
    pub fn refresh_tag(&mut self) {
        self.balance_tag =
            BalanceTag::classify(self.macros.protein_g, self.macros.carbs_g, self.macros.fat_g);
    }

    /// Whether the title or any ingredient mentions `needle` as a whole word
    ///
    /// Case-insensitive; a trailing plural "s" also matches, so "egg" finds
    /// "2 eggs" but not "Veggies".
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        let Ok(pattern) = Regex::new(&format!(r"(?i)\b{}s?\b", regex::escape(needle))) else {
            return false;
        };
        pattern.is_match(&self.title) || self.ingredients.iter().any(|line| pattern.is_match(line))
    }
}

/// The four meals of a day, keyed by slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    /// Breakfast
    pub breakfast: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Dinner
    pub dinner: Meal,
    /// Snack
    pub snack: Meal,
}

impl DayMeals {
    /// Meal in a slot
    #[must_use]
    pub const fn get(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    /// Mutable meal in a slot
    pub fn get_mut(&mut self, slot: MealSlot) -> &mut Meal {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    /// Iterate meals in slot order
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// A generated day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Calendar day the plan is for
    pub date: NaiveDate,
    /// Daily calorie target the plan was built against
    pub calories_target: u32,
    /// The four meals
    pub meals: DayMeals,
}

impl DayPlan {
    /// Sum of the four meals
    #[must_use]
    pub fn totals(&self) -> MealMacros {
        self.meals
            .iter()
            .fold(MealMacros::default(), |acc, (_, meal)| acc + meal.macros)
    }

    /// Total calories minus the target (negative when under target)
    #[must_use]
    pub fn target_delta(&self) -> i64 {
        i64::from(self.totals().calories) - i64::from(self.calories_target)
    }
}
