// ABOUTME: Validation errors for nutrition profiles and enumerated profile fields
// ABOUTME: Raised before BMR computation so garbage input never reaches the formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Reasons a profile cannot be used for a calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric field is zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: f64,
    },
    /// Numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
    },
    /// Enumerated field holds an unknown value
    #[error("{field} has unknown value '{value}'")]
    UnknownVariant {
        /// Name of the offending field
        field: &'static str,
        /// Value that was supplied
        value: String,
    },
}

impl ValidationError {
    /// Check that a measurement is a positive finite number
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for NaN/infinite input and `NonPositive` for zero or negative input
    pub fn check_positive(field: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(Self::NotFinite { field });
        }
        if value <= 0.0 {
            return Err(Self::NonPositive { field, value });
        }
        Ok(())
    }

    /// Name of the field that failed validation
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositive { field, .. }
            | Self::NotFinite { field }
            | Self::UnknownVariant { field, .. } => field,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let field = error.field();
        Self::new(ErrorCode::InvalidInput, error.to_string())
            .with_details(serde_json::json!({ "field": field }))
    }
}
