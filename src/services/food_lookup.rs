// ABOUTME: Food lookup service turning provider matches into meal log entries
// ABOUTME: Lookup failures degrade to a "no data found" outcome instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::errors::AppResult;
use crate::external::nutrition_lookup::NutritionLookup;
use crate::external::storage::MealLogStore;
use crate::logging::AppLogger;
use nutriplan_core::models::{FoodItem, LogSource, MealLogEntry};
use serde::Serialize;
use std::time::Instant;
use tracing::warn;
use uuid::Uuid;

/// What to look a food up by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodQuery<'a> {
    /// Free-text name, typed or recognized from a photo
    Name(&'a str),
    /// Scanned product barcode
    Barcode(&'a str),
}

impl FoodQuery<'_> {
    const fn operation(&self) -> &'static str {
        match self {
            Self::Name(_) => "search_by_name",
            Self::Barcode(_) => "search_by_barcode",
        }
    }
}

/// Result of a lookup as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "food", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// A matching food
    Found(FoodItem),
    /// Nothing matched or the provider failed
    NoDataFound,
}

impl LookupOutcome {
    /// Message shown when nothing was found
    pub const NO_DATA_MESSAGE: &'static str = "No nutrition data found for this food.";

    /// The matched food, if any
    #[must_use]
    pub const fn food(&self) -> Option<&FoodItem> {
        match self {
            Self::Found(food) => Some(food),
            Self::NoDataFound => None,
        }
    }
}

/// Look a food up, never failing
pub async fn lookup_food<L>(lookup: &L, query: FoodQuery<'_>) -> LookupOutcome
where
    L: NutritionLookup + ?Sized,
{
    let started = Instant::now();
    let result = match query {
        FoodQuery::Name(name) => lookup.search_by_name(name).await,
        FoodQuery::Barcode(barcode) => lookup.search_by_barcode(barcode).await,
    };
    let duration_ms = started.elapsed().as_millis() as u64;
    AppLogger::log_collaborator_call(lookup.name(), query.operation(), result.is_ok(), duration_ms);

    match result {
        Ok(Some(food)) => LookupOutcome::Found(food),
        Ok(None) => LookupOutcome::NoDataFound,
        Err(e) => {
            warn!(error = %e, ?query, "Nutrition lookup failed, reporting no data");
            LookupOutcome::NoDataFound
        }
    }
}

/// Look a food up and log a portion of it
///
/// Returns `Ok(None)` when no food was found. Barcode queries are always
/// logged with [`LogSource::Barcode`]; name queries use `name_source`.
///
/// # Errors
///
/// Returns an error only if writing the log entry fails
pub async fn log_food<L, M>(
    lookup: &L,
    log_store: &M,
    user_id: Uuid,
    query: FoodQuery<'_>,
    grams: f64,
    name_source: LogSource,
) -> AppResult<Option<MealLogEntry>>
where
    L: NutritionLookup + ?Sized,
    M: MealLogStore + ?Sized,
{
    let LookupOutcome::Found(food) = lookup_food(lookup, query).await else {
        return Ok(None);
    };

    let source = match query {
        FoodQuery::Barcode(_) => LogSource::Barcode,
        FoodQuery::Name(_) => name_source,
    };
    let entry = MealLogEntry::new(user_id, &food, grams, source);
    log_store.insert_log_entry(&entry).await?;
    Ok(Some(entry))
}
