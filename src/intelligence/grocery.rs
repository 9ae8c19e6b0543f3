// ABOUTME: Grocery aggregation parsing free-text ingredient lines into quantities and units
// ABOUTME: Normalizes near-duplicate names and sums quantities sharing a name and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Grocery Aggregator
//!
//! Each ingredient line is split on `+` and `,` into pieces. Every piece is
//! tried against these shapes in order:
//!
//! 1. `name (N unit)`
//! 2. `N unit name` (N may be a fraction such as `1/2`)
//! 3. `N/D name`, counted
//! 4. `N name`, counted
//!
//! Anything else is kept as a bare name without a quantity.

use nutriplan_core::models::Meal;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static PARENTHESIZED_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s*\(\s*(?P<qty>\d+(?:\.\d+)?)\s*(?P<unit>[a-zA-Z]+)\s*\)$").ok()
});

static LEADING_UNIT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<qty>\d+/\d+|\d+(?:\.\d+)?)\s*(?P<unit>grams?|g|ml|milliliters?|tbsp|tablespoons?|tsp|teaspoons?|cups?|count)\b\s*(?:of\s+)?(?P<name>.+)$",
    )
    .ok()
});

static FRACTION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?P<num>\d+)/(?P<den>\d+)\s+(?P<name>.+)$").ok());

static COUNT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?P<qty>\d+(?:\.\d+)?)\s+(?P<name>.+)$").ok());

/// Measurement unit of a parsed ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroceryUnit {
    /// Grams
    G,
    /// Milliliters
    Ml,
    /// Tablespoons
    Tbsp,
    /// Teaspoons
    Tsp,
    /// Cups
    Cup,
    /// Whole items
    Count,
}

impl GroceryUnit {
    /// Parse a unit or one of its common spellings
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(Self::G),
            "ml" | "milliliter" | "milliliters" => Some(Self::Ml),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Self::Tbsp),
            "tsp" | "teaspoon" | "teaspoons" => Some(Self::Tsp),
            "cup" | "cups" => Some(Self::Cup),
            "count" | "pc" | "pcs" | "piece" | "pieces" => Some(Self::Count),
            _ => None,
        }
    }

    /// Canonical short form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Ml => "ml",
            Self::Tbsp => "tbsp",
            Self::Tsp => "tsp",
            Self::Cup => "cup",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for GroceryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed ingredient piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Normalized lowercase name
    pub name: String,
    /// Quantity, when one was found
    pub qty: Option<f64>,
    /// Unit, when a quantity was found
    pub unit: Option<GroceryUnit>,
}

impl ParsedIngredient {
    fn bare(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            qty: None,
            unit: None,
        }
    }

    fn measured(name: &str, qty: f64, unit: GroceryUnit) -> Self {
        Self {
            name: normalize_name(name),
            qty: Some(qty),
            unit: Some(unit),
        }
    }
}

/// Map near-duplicate names onto one canonical name
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let name = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if name.contains("chicken") && !name.contains("breast") {
        return "chicken breast".to_owned();
    }
    if name.contains("yogurt") && !name.contains("coconut") {
        return "greek yogurt".to_owned();
    }
    match name.as_str() {
        "egg" | "eggs" | "large egg" | "large eggs" => "eggs".to_owned(),
        "extra virgin olive oil" => "olive oil".to_owned(),
        _ => name,
    }
}

fn parse_quantity(raw: &str) -> Option<f64> {
    match raw.split_once('/') {
        Some((num, den)) => {
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            Some(num.parse::<f64>().ok()? / den)
        }
        None => raw.parse().ok(),
    }
}

fn parse_parenthesized(piece: &str) -> Option<ParsedIngredient> {
    let caps = PARENTHESIZED_PATTERN.as_ref()?.captures(piece)?;
    let unit = GroceryUnit::parse(&caps["unit"])?;
    let qty = parse_quantity(&caps["qty"])?;
    Some(ParsedIngredient::measured(&caps["name"], qty, unit))
}

fn parse_leading_unit(piece: &str) -> Option<ParsedIngredient> {
    let caps = LEADING_UNIT_PATTERN.as_ref()?.captures(piece)?;
    let unit = GroceryUnit::parse(&caps["unit"])?;
    let qty = parse_quantity(&caps["qty"])?;
    Some(ParsedIngredient::measured(&caps["name"], qty, unit))
}

fn parse_fraction(piece: &str) -> Option<ParsedIngredient> {
    let caps = FRACTION_PATTERN.as_ref()?.captures(piece)?;
    let qty = parse_quantity(&format!("{}/{}", &caps["num"], &caps["den"]))?;
    Some(ParsedIngredient::measured(&caps["name"], qty, GroceryUnit::Count))
}

fn parse_count(piece: &str) -> Option<ParsedIngredient> {
    let caps = COUNT_PATTERN.as_ref()?.captures(piece)?;
    let qty = parse_quantity(&caps["qty"])?;
    Some(ParsedIngredient::measured(&caps["name"], qty, GroceryUnit::Count))
}

/// Parse one free-text ingredient line into its pieces
#[must_use]
pub fn parse_ingredient(line: &str) -> Vec<ParsedIngredient> {
    line.split(['+', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            parse_parenthesized(piece)
                .or_else(|| parse_leading_unit(piece))
                .or_else(|| parse_fraction(piece))
                .or_else(|| parse_count(piece))
                .unwrap_or_else(|| ParsedIngredient::bare(piece))
        })
        .collect()
}

/// Aggregation key: normalized name and unit
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroceryKey {
    /// Normalized name
    pub name: String,
    /// Unit, absent for bare items
    pub unit: Option<GroceryUnit>,
}

/// Aggregated shopping list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    items: BTreeMap<GroceryKey, Option<f64>>,
}

impl GroceryList {
    /// Add one parsed piece, summing with an existing entry of the same key
    pub fn add(&mut self, ingredient: ParsedIngredient) {
        let key = GroceryKey {
            name: ingredient.name,
            unit: ingredient.unit,
        };
        let entry = self.items.entry(key).or_insert(None);
        if let Some(qty) = ingredient.qty {
            *entry = Some(entry.unwrap_or(0.0) + qty);
        }
    }

    /// Summed quantity for a name and unit
    #[must_use]
    pub fn quantity(&self, name: &str, unit: Option<GroceryUnit>) -> Option<f64> {
        self.items
            .get(&GroceryKey {
                name: name.to_owned(),
                unit,
            })
            .copied()
            .flatten()
    }

    /// Number of distinct entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&GroceryKey, Option<f64>)> {
        self.items.iter().map(|(key, qty)| (key, *qty))
    }

    /// Formatted lines, sorted alphabetically
    ///
    /// Counts round up so the list never under-buys; other units round to
    /// the nearest whole number.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .items
            .iter()
            .map(|(key, qty)| match (qty, key.unit) {
                (Some(qty), Some(unit)) => {
                    let shown = if unit == GroceryUnit::Count {
                        qty.ceil()
                    } else {
                        qty.round()
                    };
                    format!("{shown:.0} {unit} {}", key.name)
                }
                _ => key.name.clone(),
            })
            .collect();
        lines.sort();
        lines
    }
}

/// Parse and aggregate every ingredient of the given meals
pub fn aggregate_ingredients<'a>(meals: impl IntoIterator<Item = &'a Meal>) -> GroceryList {
    let mut list = GroceryList::default();
    for meal in meals {
        for line in &meal.ingredients {
            for ingredient in parse_ingredient(line) {
                list.add(ingredient);
            }
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_priority() {
        let parsed = parse_ingredient("chicken thighs (200 g)");
        assert_eq!(parsed[0].name, "chicken breast");
        assert_eq!(parsed[0].unit, Some(GroceryUnit::G));

        let parsed = parse_ingredient("1/2 cup berries");
        assert_eq!(parsed[0].qty, Some(0.5));
        assert_eq!(parsed[0].unit, Some(GroceryUnit::Cup));

        let parsed = parse_ingredient("1/2 avocado");
        assert_eq!(parsed[0].unit, Some(GroceryUnit::Count));

        let parsed = parse_ingredient("salt to taste");
        assert_eq!(parsed[0].qty, None);
        assert_eq!(parsed[0].unit, None);
    }

    #[test]
    fn test_unit_needs_word_boundary() {
        let parsed = parse_ingredient("1 granola bar");
        assert_eq!(parsed[0].name, "granola bar");
        assert_eq!(parsed[0].unit, Some(GroceryUnit::Count));
    }

    #[test]
    fn test_zero_denominator_is_not_a_fraction() {
        let parsed = parse_ingredient("1/0 lemon");
        assert_eq!(parsed[0].qty, None);
    }
}
