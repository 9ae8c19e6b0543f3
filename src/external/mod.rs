// ABOUTME: Collaborator interfaces for persistence, nutrition lookup and chat completion
// ABOUTME: Narrow traits with in-memory and mock implementations for tests and the CLI

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan Contributors

//! External Collaborators
//!
//! The planning engine never calls these; services do, and every failure is
//! reported back to the caller without aborting plan generation.

pub mod chat;
pub mod nutrition_lookup;
pub mod storage;

// Re-export commonly used types
pub use chat::{ChatCompletion, ChatMessage, MessageRole, MockChatCompletion};
pub use nutrition_lookup::{MockNutritionLookup, NutritionLookup};
pub use storage::{
    InMemoryKeyValueStore, InMemoryMealLogStore, InMemoryProfileStore, KeyValueStore,
    MealLogStore, ProfileStore,
};
