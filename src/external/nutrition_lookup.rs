// ABOUTME: Nutrition lookup interface returning per-100g facts by food name or barcode
// ABOUTME: Includes a mock lookup with fixed foods and a switchable outage for tests

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan Contributors

//! Nutrition Lookup
//!
//! Third-party food databases are reached through [`NutritionLookup`]. A
//! miss is `Ok(None)`; transport or provider failures are `Err` and callers
//! turn them into a "no data found" outcome.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use nutriplan_core::models::{FoodItem, NutritionFacts};
use std::collections::HashMap;

/// Food database collaborator
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Best match for a free-text food name
    ///
    /// # Errors
    ///
    /// Returns an error if the query is empty or the provider fails
    async fn search_by_name(&self, query: &str) -> AppResult<Option<FoodItem>>;

    /// Exact match for a product barcode
    ///
    /// # Errors
    ///
    /// Returns an error if the barcode is empty or the provider fails
    async fn search_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodItem>>;
}

/// Mock lookup for testing (no network calls)
#[derive(Debug, Clone)]
pub struct MockNutritionLookup {
    by_name: HashMap<String, FoodItem>,
    by_barcode: HashMap<String, FoodItem>,
    unavailable: bool,
}

impl MockNutritionLookup {
    /// Create a mock with a few common foods
    #[must_use]
    pub fn new() -> Self {
        let mut mock = Self {
            by_name: HashMap::new(),
            by_barcode: HashMap::new(),
            unavailable: false,
        };

        mock.insert(FoodItem {
            name: "Chicken breast, roasted".to_owned(),
            barcode: None,
            facts: NutritionFacts {
                energy_kcal_per_100g: 165.0,
                protein_per_100g: 31.0,
                carbs_per_100g: 0.0,
                fat_per_100g: 3.6,
            },
        });
        mock.insert(FoodItem {
            name: "Apple, raw".to_owned(),
            barcode: None,
            facts: NutritionFacts {
                energy_kcal_per_100g: 52.0,
                protein_per_100g: 0.3,
                carbs_per_100g: 13.8,
                fat_per_100g: 0.2,
            },
        });
        mock.insert(FoodItem {
            name: "Rolled oats".to_owned(),
            barcode: Some("0016000275287".to_owned()),
            facts: NutritionFacts {
                energy_kcal_per_100g: 389.0,
                protein_per_100g: 17.0,
                carbs_per_100g: 66.3,
                fat_per_100g: 7.0,
            },
        });

        mock
    }

    /// Register a food under its lowercase name and, if present, its barcode
    pub fn insert(&mut self, food: FoodItem) {
        if let Some(barcode) = &food.barcode {
            self.by_barcode.insert(barcode.clone(), food.clone());
        }
        self.by_name.insert(food.name.to_lowercase(), food);
    }

    /// Make every call fail as if the provider were down
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable {
            return Err(AppError::external_unavailable(self.name()));
        }
        Ok(())
    }
}

impl Default for MockNutritionLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NutritionLookup for MockNutritionLookup {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Option<FoodItem>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }
        self.check_available()?;

        let mut names: Vec<&String> = self
            .by_name
            .keys()
            .filter(|name| name.contains(&query))
            .collect();
        names.sort();
        Ok(names
            .first()
            .and_then(|name| self.by_name.get(*name))
            .cloned())
    }

    async fn search_by_barcode(&self, barcode: &str) -> AppResult<Option<FoodItem>> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(AppError::invalid_input("Barcode cannot be empty"));
        }
        self.check_available()?;
        Ok(self.by_barcode.get(barcode).cloned())
    }
}
