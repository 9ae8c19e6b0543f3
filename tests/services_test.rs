// ABOUTME: Integration tests for the plan, food lookup and assistant services
// ABOUTME: Runs every service against the in-memory stores and mock collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::errors::ErrorCode;
use nutriplan::external::{
    ChatCompletion, ChatMessage, InMemoryKeyValueStore, InMemoryMealLogStore,
    InMemoryProfileStore, KeyValueStore, MealLogStore, MessageRole, MockChatCompletion,
    MockNutritionLookup, NutritionLookup, ProfileStore,
};
use nutriplan::services::{
    ask_assistant, coach_system_prompt, log_food, lookup_food, plan_key, FoodQuery,
    LookupOutcome, MealPlanService, ASSISTANT_UNAVAILABLE_REPLY,
};
use nutriplan_core::models::{DietaryRestriction, LogSource, MealSlot};
use uuid::Uuid;

mod common;

fn service() -> MealPlanService<InMemoryKeyValueStore> {
    common::init_test_logging();
    MealPlanService::new(InMemoryKeyValueStore::new(), common::config())
}

// ============================================================================
// Meal plan service
// ============================================================================

#[test]
fn test_generate_persists_plan_under_user_and_date() {
    let service = service();
    let profile = common::male_weight_loss();

    let draft = service.generate(&profile, common::sunday()).unwrap();
    assert_eq!(draft.targets.calories, 2259);

    let key = plan_key(profile.id, common::sunday());
    assert_eq!(key, format!("meal_plan:{}:2024-06-02", profile.id));
    assert!(service.store().get_raw(&key).unwrap().is_some());

    let loaded = service.load_plan(profile.id, common::sunday()).unwrap();
    assert_eq!(loaded, Some(draft));
}

#[test]
fn test_get_or_generate_returns_stored_plan() {
    let service = service();
    let profile = common::male_weight_loss();

    let adjusted = service
        .adjust(&profile, common::sunday(), "reduce calories to 1800")
        .unwrap();
    let fetched = service.get_or_generate(&profile, common::sunday()).unwrap();
    assert_eq!(fetched.targets.calories, 1800);
    assert_eq!(fetched.plan, adjusted.plan);
}

#[test]
fn test_generated_plan_is_compliant() {
    let service = service();
    let vegan = common::male_with(DietaryRestriction::Vegan);
    let draft = service.generate(&vegan, common::sunday()).unwrap();
    for (_, meal) in draft.plan.meals.iter() {
        assert!(!meal.mentions("chicken") && !meal.mentions("egg"), "{}", meal.title);
    }
}

#[test]
fn test_invalid_profile_is_rejected() {
    let service = service();
    let mut profile = common::male_weight_loss();
    profile.weight_kg = 0.0;

    let err = service.generate(&profile, common::sunday()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(service.store().is_empty().unwrap());
}

#[test]
fn test_adjust_persists_result() {
    let service = service();
    let profile = common::male_weight_loss();
    service.generate(&profile, common::sunday()).unwrap();

    let adjusted = service.adjust(&profile, common::sunday(), "no eggs").unwrap();
    assert_eq!(adjusted.plan.meals.breakfast.title, "Greek Yogurt Bowl");

    let stored = service.load_plan(profile.id, common::sunday()).unwrap().unwrap();
    assert_eq!(stored.plan, adjusted.plan);
}

#[test]
fn test_swap_requires_existing_plan() {
    let service = service();
    let profile = common::male_weight_loss();

    let err = service
        .swap_options(&profile, common::sunday(), MealSlot::Breakfast)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(err.message.contains("2024-06-02"));
}

#[test]
fn test_swap_replaces_and_persists_one_meal() {
    let service = service();
    let profile = common::male_weight_loss();
    let original = service.generate(&profile, common::sunday()).unwrap();

    let options = service
        .swap_options(&profile, common::sunday(), MealSlot::Lunch)
        .unwrap();
    assert_eq!(options.len(), 4);

    let swapped = service
        .swap(&profile, common::sunday(), MealSlot::Lunch, 2)
        .unwrap();
    assert_eq!(swapped.plan.meals.lunch.title, "Chickpea and Veggie Bowl");
    assert_eq!(swapped.plan.meals.dinner, original.plan.meals.dinner);
    assert_eq!(swapped.targets, original.targets);

    let stored = service.load_plan(profile.id, common::sunday()).unwrap().unwrap();
    assert_eq!(stored, swapped);
}

#[test]
fn test_swap_index_out_of_range() {
    let service = service();
    let profile = common::male_weight_loss();
    service.generate(&profile, common::sunday()).unwrap();

    let err = service
        .swap(&profile, common::sunday(), MealSlot::Snack, 9)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_grocery_list_skips_missing_days() {
    let service = service();
    let profile = common::male_weight_loss();
    let monday = common::date(2024, 6, 3);
    service.generate(&profile, common::sunday()).unwrap();
    service.generate(&profile, monday).unwrap();

    let list = service
        .grocery_list(profile.id, &[common::sunday(), monday, common::date(2024, 6, 4)])
        .unwrap();
    assert_eq!(
        list.quantity("chicken breast", Some(nutriplan::intelligence::GroceryUnit::G)),
        Some(300.0)
    );
    // Veggie Omelet (3) and Scrambled Eggs on Toast (3)
    assert_eq!(
        list.quantity("eggs", Some(nutriplan::intelligence::GroceryUnit::Count)),
        Some(6.0)
    );

    let empty = service.grocery_list(Uuid::new_v4(), &[common::sunday()]).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_corrupt_stored_plan_is_serialization_error() {
    let service = service();
    let profile = common::male_weight_loss();
    service
        .store()
        .set_raw(&plan_key(profile.id, common::sunday()), "{not json".to_owned())
        .unwrap();

    let err = service.load_plan(profile.id, common::sunday()).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

// ============================================================================
// Food lookup
// ============================================================================

#[tokio::test]
async fn test_lookup_by_name_and_barcode() {
    common::init_test_logging();
    let lookup = MockNutritionLookup::new();

    let outcome = lookup_food(&lookup, FoodQuery::Name("chicken")).await;
    assert_eq!(outcome.food().unwrap().name, "Chicken breast, roasted");

    let outcome = lookup_food(&lookup, FoodQuery::Barcode("0016000275287")).await;
    assert_eq!(outcome.food().unwrap().name, "Rolled oats");

    let outcome = lookup_food(&lookup, FoodQuery::Name("dragonfruit")).await;
    assert_eq!(outcome, LookupOutcome::NoDataFound);
}

#[tokio::test]
async fn test_lookup_failures_degrade_to_no_data() {
    let lookup = MockNutritionLookup::new().unavailable();
    let err = lookup.search_by_name("apple").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);

    let outcome = lookup_food(&lookup, FoodQuery::Name("apple")).await;
    assert_eq!(outcome, LookupOutcome::NoDataFound);

    let outcome = lookup_food(&MockNutritionLookup::new(), FoodQuery::Barcode("  ")).await;
    assert_eq!(outcome, LookupOutcome::NoDataFound);
}

#[tokio::test]
async fn test_lookup_outcome_wire_format() {
    let json = serde_json::to_value(LookupOutcome::NoDataFound).unwrap();
    assert_eq!(json, serde_json::json!({"status": "no_data_found"}));

    let found = lookup_food(&MockNutritionLookup::new(), FoodQuery::Name("apple")).await;
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["status"], "found");
    assert_eq!(json["food"]["name"], "Apple, raw");
}

#[tokio::test]
async fn test_log_food_scales_portion_and_persists() {
    let lookup = MockNutritionLookup::new();
    let log_store = InMemoryMealLogStore::new();
    let user_id = Uuid::new_v4();

    let entry = log_food(
        &lookup,
        &log_store,
        user_id,
        FoodQuery::Name("chicken"),
        150.0,
        LogSource::Manual,
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(entry.nutrition.calories, 248);
    assert!((entry.nutrition.protein_g - 46.5).abs() < 1e-9);
    assert_eq!(entry.source, LogSource::Manual);

    let stored = log_store.entries_for_user(user_id).await.unwrap();
    assert_eq!(stored, vec![entry]);
    assert!(log_store.entries_for_user(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_log_food_barcode_source_and_missing_food() {
    let lookup = MockNutritionLookup::new();
    let log_store = InMemoryMealLogStore::new();
    let user_id = Uuid::new_v4();

    let entry = log_food(
        &lookup,
        &log_store,
        user_id,
        FoodQuery::Barcode("0016000275287"),
        50.0,
        LogSource::Photo,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(entry.source, LogSource::Barcode);
    assert_eq!(entry.nutrition.calories, 195);

    let missing = log_food(
        &lookup,
        &log_store,
        user_id,
        FoodQuery::Name("unicorn steak"),
        100.0,
        LogSource::Manual,
    )
    .await
    .unwrap();
    assert!(missing.is_none());
    assert_eq!(log_store.entries_for_user(user_id).await.unwrap().len(), 1);
}

// ============================================================================
// Assistant
// ============================================================================

#[test]
fn test_system_prompt_mentions_profile_and_targets() {
    let profile = common::male_with(DietaryRestriction::Vegan);
    let targets = common::targets(&profile);
    let prompt = coach_system_prompt(&profile, Some(&targets));

    assert!(prompt.contains("30 years, male, 180 cm, 80 kg"));
    assert!(prompt.contains("Dietary restrictions: vegan"));
    assert!(prompt.contains(&format!("Daily targets: {} kcal", targets.calories)));

    let bare = coach_system_prompt(&common::male_weight_loss(), None);
    assert!(!bare.contains("Dietary restrictions"));
    assert!(!bare.contains("Daily targets"));
}

#[tokio::test]
async fn test_assistant_returns_reply() {
    let chat = MockChatCompletion::replying("Try adding lentils to your lunch.");
    let history = vec![ChatMessage::user("How do I get more fiber?")];

    let reply = ask_assistant(&chat, &common::male_weight_loss(), None, &history).await;
    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, "Try adding lentils to your lunch.");
}

#[tokio::test]
async fn test_assistant_failure_becomes_inline_reply() {
    let history = vec![ChatMessage::user("Hi")];
    let profile = common::male_weight_loss();

    let reply = ask_assistant(&MockChatCompletion::failing(), &profile, None, &history).await;
    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, ASSISTANT_UNAVAILABLE_REPLY);

    let reply = ask_assistant(&MockChatCompletion::replying("   "), &profile, None, &history).await;
    assert_eq!(reply.content, ASSISTANT_UNAVAILABLE_REPLY);

    let chat = MockChatCompletion::replying("ok");
    assert!(chat.complete("system", &[]).await.is_err());
}

#[tokio::test]
async fn test_completion_error_codes() {
    let history = vec![ChatMessage::user("Hi")];

    let err = MockChatCompletion::replying("  ")
        .complete("system", &history)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.http_status(), 502);

    let err = MockChatCompletion::failing()
        .complete("system", &history)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

// ============================================================================
// Profile store
// ============================================================================

#[tokio::test]
async fn test_profile_store_round_trip() {
    let store = InMemoryProfileStore::new();
    let mut profile = common::male_weight_loss();
    assert!(store.get_profile(profile.id).await.unwrap().is_none());

    store.update_profile(&profile).await.unwrap();
    profile.weight_kg = 78.5;
    store.update_profile(&profile).await.unwrap();

    let loaded = store.get_profile(profile.id).await.unwrap().unwrap();
    assert!((loaded.weight_kg - 78.5).abs() < f64::EPSILON);
}
