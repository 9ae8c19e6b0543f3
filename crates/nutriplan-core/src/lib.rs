// ABOUTME: Core types and constants for the Nutriplan nutrition engine
// ABOUTME: Foundation crate with error handling, profile and plan value objects, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the Nutriplan
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Energy densities and safety floors shared by every calculation
//! - **models**: Profile, targets, meals, day plans and meal-log entries

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants (energy densities, safety floors)
pub mod constants;

/// Core data models (profile, targets, meals, day plan, meal log)
pub mod models;
