// ABOUTME: Day-plan service generating, adjusting and swapping plans for a profile
// ABOUTME: Persists each plan with its targets as JSON under a per-user, per-date key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::config::planner::{NutritionConfig, PlannerConfig};
use crate::errors::{AppError, AppResult};
use crate::external::storage::KeyValueStore;
use crate::intelligence::day_plan::build_day_plan;
use crate::intelligence::grocery::{aggregate_ingredients, GroceryList};
use crate::intelligence::macro_allocator::targets_for_profile;
use crate::intelligence::plan_adjuster::{adjust_plan, enforce_compliance, AdjustedPlan, PlanDraft};
use crate::intelligence::swap::{apply_swap, swap_options_for_slot};
use crate::logging::AppLogger;
use chrono::NaiveDate;
use nutriplan_core::models::{Meal, MealSlot, UserNutritionProfile};
use tracing::debug;
use uuid::Uuid;

/// Storage key for a user's plan on a date
#[must_use]
pub fn plan_key(user_id: Uuid, date: NaiveDate) -> String {
    format!("meal_plan:{user_id}:{date}")
}

/// Generates and maintains day plans backed by a key-value store
///
/// Every operation replaces the stored plan wholesale; there is no partial
/// update of a stored plan.
pub struct MealPlanService<S: KeyValueStore> {
    store: S,
    config: NutritionConfig,
}

impl<S: KeyValueStore> MealPlanService<S> {
    /// Create a service with an explicit configuration
    pub const fn new(store: S, config: NutritionConfig) -> Self {
        Self { store, config }
    }

    /// Create a service reading the process-wide configuration
    pub fn with_global_config(store: S) -> Self {
        Self::new(store, PlannerConfig::global().nutrition.clone())
    }

    /// Backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Stored plan and targets, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds malformed JSON
    pub fn load_plan(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<PlanDraft>> {
        self.store.get_json(&plan_key(user_id, date))
    }

    fn save_plan(&self, user_id: Uuid, draft: &PlanDraft) -> AppResult<()> {
        self.store
            .set_json(&plan_key(user_id, draft.plan.date), draft)
    }

    fn require_plan(&self, user_id: Uuid, date: NaiveDate) -> AppResult<PlanDraft> {
        self.load_plan(user_id, date)?
            .ok_or_else(|| AppError::not_found(format!("Meal plan for {date}")))
    }

    /// Generate and store a fresh plan, replacing any plan for the date
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation or the store fails
    pub fn generate(&self, profile: &UserNutritionProfile, date: NaiveDate) -> AppResult<PlanDraft> {
        let targets = targets_for_profile(profile, &self.config)?;
        let plan = build_day_plan(profile, &targets, date, &self.config.meal_shares);
        let draft = PlanDraft {
            targets,
            plan: enforce_compliance(plan, profile),
        };

        self.save_plan(profile.id, &draft)?;
        AppLogger::log_plan_operation(
            &profile.id.to_string(),
            "generate",
            &date.to_string(),
            draft.targets.calories,
        );
        Ok(draft)
    }

    /// Stored plan for the date, generating one when none exists
    ///
    /// # Errors
    ///
    /// Returns an error if generation or the store fails
    pub fn get_or_generate(
        &self,
        profile: &UserNutritionProfile,
        date: NaiveDate,
    ) -> AppResult<PlanDraft> {
        match self.load_plan(profile.id, date)? {
            Some(draft) => Ok(draft),
            None => self.generate(profile, date),
        }
    }

    /// Apply a free-text adjustment request to the plan for the date
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation or the store fails
    pub fn adjust(
        &self,
        profile: &UserNutritionProfile,
        date: NaiveDate,
        request_text: &str,
    ) -> AppResult<AdjustedPlan> {
        let current = self.get_or_generate(profile, date)?;
        let adjusted = adjust_plan(
            &current.plan,
            profile,
            &current.targets,
            request_text,
            &self.config,
        );

        self.save_plan(
            profile.id,
            &PlanDraft {
                targets: adjusted.targets,
                plan: adjusted.plan.clone(),
            },
        )?;
        AppLogger::log_plan_operation(
            &profile.id.to_string(),
            "adjust",
            &date.to_string(),
            adjusted.targets.calories,
        );
        Ok(adjusted)
    }

    /// Swap alternatives for one slot of the stored plan
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no plan is stored for the date
    pub fn swap_options(
        &self,
        profile: &UserNutritionProfile,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<Vec<Meal>> {
        let draft = self.require_plan(profile.id, date)?;
        Ok(swap_options_for_slot(slot, draft.plan.meals.get(slot), profile))
    }

    /// Replace one slot with the chosen swap option
    ///
    /// Only that meal changes; the day total may drift from the target.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no plan is stored for the date and
    /// `InvalidInput` if `option_index` is out of range
    pub fn swap(
        &self,
        profile: &UserNutritionProfile,
        date: NaiveDate,
        slot: MealSlot,
        option_index: usize,
    ) -> AppResult<PlanDraft> {
        let mut draft = self.require_plan(profile.id, date)?;
        let options = swap_options_for_slot(slot, draft.plan.meals.get(slot), profile);
        let count = options.len();
        let replacement = options.into_iter().nth(option_index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Swap option {option_index} out of range ({count} available for {slot})"
            ))
        })?;

        let replaced = apply_swap(&mut draft.plan, slot, replacement);
        debug!(%slot, replaced = %replaced.title, "Swapped meal");

        self.save_plan(profile.id, &draft)?;
        AppLogger::log_plan_operation(
            &profile.id.to_string(),
            "swap",
            &date.to_string(),
            draft.targets.calories,
        );
        Ok(draft)
    }

    /// Grocery list for the stored plans of the given dates
    ///
    /// Dates without a stored plan are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds malformed JSON
    pub fn grocery_list(&self, user_id: Uuid, dates: &[NaiveDate]) -> AppResult<GroceryList> {
        let mut plans = Vec::with_capacity(dates.len());
        for date in dates {
            if let Some(draft) = self.load_plan(user_id, *date)? {
                plans.push(draft.plan);
            }
        }
        Ok(aggregate_ingredients(
            plans.iter().flat_map(|plan| plan.meals.iter().map(|(_, meal)| meal)),
        ))
    }
}
