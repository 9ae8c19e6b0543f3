// ABOUTME: Nutrition constants shared by the calculator, allocator and plan builder
// ABOUTME: Energy density per macronutrient gram and calorie safety floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: u32 = 4;
    /// Carbohydrate: 4 kcal/g
    pub const CARBS_KCAL_PER_G: u32 = 4;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: u32 = 9;
}

/// Minimum daily calories applied to every weight-loss target
pub mod safety {
    /// Male-equivalent floor (kcal/day)
    pub const MIN_CALORIES_MALE: u32 = 1500;
    /// Female-equivalent floor (kcal/day)
    pub const MIN_CALORIES_FEMALE: u32 = 1200;
}

/// Balance tag thresholds (percent of a meal's own energy)
pub mod balance {
    /// Below this protein share a meal is tagged `LowProtein`
    pub const LOW_PROTEIN_PCT: f64 = 20.0;
    /// Above this carbohydrate share a meal is tagged `HighCarb`
    pub const HIGH_CARB_PCT: f64 = 50.0;
}
