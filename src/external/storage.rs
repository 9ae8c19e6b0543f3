// ABOUTME: Persistence interfaces for profiles, meal logs and plan key-value storage
// ABOUTME: In-memory implementations back the CLI and the test suite

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan Contributors

//! Storage Collaborators
//!
//! Profiles and meal logs live in an external relational database reached
//! through async traits. Day plans are stored as JSON through an explicit
//! [`KeyValueStore`] handed to the service that needs it.

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use nutriplan_core::models::{MealLogEntry, UserNutritionProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Profile persistence
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn get_profile(&self, id: Uuid) -> AppResult<Option<UserNutritionProfile>>;

    /// Insert or replace a profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn update_profile(&self, profile: &UserNutritionProfile) -> AppResult<()>;
}

/// Meal-log persistence
#[async_trait]
pub trait MealLogStore: Send + Sync {
    /// Append one log entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn insert_log_entry(&self, entry: &MealLogEntry) -> AppResult<()>;

    /// Entries for a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn entries_for_user(&self, user_id: Uuid) -> AppResult<Vec<MealLogEntry>>;
}

/// Synchronous string key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read a raw value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a raw value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be written
    fn set_raw(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete a value, reporting whether it existed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be written
    fn remove(&self, key: &str) -> AppResult<bool>;

    /// Read and deserialize a JSON value
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the stored JSON does not match `T`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>>
    where
        Self: Sized,
    {
        self.get_raw(key)?
            .map(|raw| serde_json::from_str(&raw).map_err(AppError::from))
            .transpose()
    }

    /// Serialize and write a JSON value
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()>
    where
        Self: Sized,
    {
        self.set_raw(key, serde_json::to_string(value)?)
    }
}

/// Process-local key-value store
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| AppError::storage(format!("key-value store lock poisoned: {e}")))
    }

    /// Number of stored keys
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lock is poisoned
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether no keys are stored
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lock is poisoned
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: String) -> AppResult<()> {
        self.lock()?.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }
}

/// Profile store backed by a map
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<Uuid, UserNutritionProfile>>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, id: Uuid) -> AppResult<Option<UserNutritionProfile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn update_profile(&self, profile: &UserNutritionProfile) -> AppResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        Ok(())
    }
}

/// Meal-log store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealLogStore {
    entries: Arc<RwLock<Vec<MealLogEntry>>>,
}

impl InMemoryMealLogStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MealLogStore for InMemoryMealLogStore {
    async fn insert_log_entry(&self, entry: &MealLogEntry) -> AppResult<()> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn entries_for_user(&self, user_id: Uuid) -> AppResult<Vec<MealLogEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_and_remove() {
        let store = InMemoryKeyValueStore::new();
        store.set_json("k", &vec![1_u32, 2, 3]).unwrap();
        let loaded: Option<Vec<u32>> = store.get_json("k").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
    }

    #[test]
    fn test_mismatched_json_is_serialization_error() {
        let store = InMemoryKeyValueStore::new();
        store.set_raw("k", "not json".to_owned()).unwrap();
        let err = store.get_json::<Vec<u32>>("k").unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::SerializationError);
    }
}
