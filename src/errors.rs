// ABOUTME: Error handling re-exports from the nutriplan-core crate
// ABOUTME: Keeps crate::errors import paths stable for engine, services and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! # Unified Error Handling System
//!
//! The error taxonomy lives in `nutriplan-core` so model validation and the
//! engine share one `AppError`. This module re-exports it under the
//! familiar `crate::errors` path.

pub use nutriplan_core::errors::{AppError, AppResult, ErrorCode, ValidationError};
