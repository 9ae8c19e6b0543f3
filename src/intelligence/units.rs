// ABOUTME: Numeric primitives shared by the planner: rounding, shares and gram/percentage conversion
// ABOUTME: Protein and carbs carry 4 kcal per gram, fat carries 9
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use nutriplan_core::models::Macro;

/// Round an energy or gram value to the nearest whole number
///
/// Halves round up. Negative and non-finite values become zero.
#[must_use]
pub fn round_non_negative(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}

/// Apply a share (fraction of a day) to a whole value, rounding the result
#[must_use]
pub fn apply_share(value: u32, share: f64) -> u32 {
    round_non_negative(f64::from(value) * share)
}

/// Grams of a macro that supply `percentage` percent of `calories`
///
/// The calorie share is computed from the integer percentage, then divided by
/// the energy density and rounded.
#[must_use]
pub fn grams_for_percentage(calories: u32, percentage: u8, kind: Macro) -> u32 {
    let calorie_share = f64::from(calories) * f64::from(percentage) / 100.0;
    round_non_negative(calorie_share / f64::from(kind.kcal_per_gram()))
}

/// Energy supplied by `grams` of a macro
#[must_use]
pub const fn calories_from_grams(grams: u32, kind: Macro) -> u32 {
    grams * kind.kcal_per_gram()
}

/// Integer percentage of `part` in `total`, zero when `total` is zero
#[must_use]
pub fn percentage_of(part: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    round_non_negative(f64::from(part) * 100.0 / f64::from(total)).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_is_half_up_and_clamped() {
        assert_eq!(round_non_negative(1617.5), 1618);
        assert_eq!(round_non_negative(1617.49), 1617);
        assert_eq!(round_non_negative(-3.0), 0);
        assert_eq!(round_non_negative(f64::NAN), 0);
    }

    #[test]
    fn test_grams_for_percentage() {
        // 2000 kcal * 30% = 600 kcal -> 150 g protein, 67 g fat (66.67)
        assert_eq!(grams_for_percentage(2000, 30, Macro::Protein), 150);
        assert_eq!(grams_for_percentage(2000, 30, Macro::Fat), 67);
        assert_eq!(calories_from_grams(67, Macro::Fat), 603);
    }

    #[test]
    fn test_percentage_of_handles_zero_total() {
        assert_eq!(percentage_of(10, 0), 0);
        assert_eq!(percentage_of(648, 2000), 32);
    }
}
