// ABOUTME: User nutrition profile and the enumerations it is built from
// ABOUTME: Gender, ActivityLevel, Goal, DietaryRestriction with string parsing and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Gender for BMR calculations
///
/// Binary because the Mifflin-St Jeor equation only defines two constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (+5 constant)
    Male,
    /// Female gender (-161 constant)
    Female,
}

impl Gender {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(ValidationError::UnknownVariant {
                field: "gender",
                value: other.to_owned(),
            }),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extremely active (hard training 2x/day)
    ExtremelyActive,
}

impl ActivityLevel {
    /// All activity levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Wire name of this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or(ValidationError::UnknownVariant {
                field: "activity_level",
                value: normalized,
            })
    }
}

/// Nutrition goal driving the calorie delta and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    WeightGain,
    /// Moderate surplus with high protein
    MuscleBuilding,
}

impl Goal {
    /// All goals
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::Maintenance,
        Self::WeightGain,
        Self::MuscleBuilding,
    ];

    /// Wire name of this goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::Maintenance => "maintenance",
            Self::WeightGain => "weight_gain",
            Self::MuscleBuilding => "muscle_building",
        }
    }
}

impl FromStr for Goal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or(ValidationError::UnknownVariant {
                field: "goal",
                value: normalized,
            })
    }
}

/// Dietary restriction tag
///
/// Serialized as its plain tag string (`"keto"`, `"gluten_free"`); unknown
/// tags are preserved as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryRestriction {
    /// Ketogenic (very low carb)
    Keto,
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No meat, fish allowed
    Pescatarian,
    /// No pork
    Halal,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No dairy products
    DairyFree,
    /// Any other tag
    Custom(String),
}

impl DietaryRestriction {
    /// Parse a tag, never failing
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "keto" | "ketogenic" => Self::Keto,
            "vegan" => Self::Vegan,
            "vegetarian" => Self::Vegetarian,
            "pescatarian" | "pescetarian" => Self::Pescatarian,
            "halal" => Self::Halal,
            "gluten_free" => Self::GlutenFree,
            "dairy_free" => Self::DairyFree,
            other => Self::Custom(other.to_owned()),
        }
    }

    /// Tag string for this restriction
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Keto => "keto",
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Pescatarian => "pescatarian",
            Self::Halal => "halal",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::Custom(tag) => tag,
        }
    }
}

impl From<String> for DietaryRestriction {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl From<DietaryRestriction> for String {
    fn from(value: DietaryRestriction) -> Self {
        value.as_tag().to_owned()
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// User profile consumed by every calculation
///
/// Immutable for the duration of a calculation; updates are owned by the
/// profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNutritionProfile {
    /// Opaque identifier
    pub id: Uuid,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Nutrition goal
    pub goal: Goal,
    /// Dietary restriction tags
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,
}

impl UserNutritionProfile {
    /// Create a profile with no dietary restrictions
    #[must_use]
    pub fn new(
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            age,
            gender,
            height_cm,
            weight_kg,
            activity_level,
            goal,
            dietary_restrictions: BTreeSet::new(),
        }
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        self.dietary_restrictions.insert(restriction);
        self
    }

    /// Add restrictions from raw tags
    #[must_use]
    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.dietary_restrictions
            .extend(tags.into_iter().map(DietaryRestriction::from_tag));
        self
    }

    /// Check whether the profile carries a restriction
    #[must_use]
    pub fn has_restriction(&self, restriction: &DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(restriction)
    }

    /// Shorthand for the vegan flag
    #[must_use]
    pub fn is_vegan(&self) -> bool {
        self.has_restriction(&DietaryRestriction::Vegan)
    }

    /// Validate numeric fields
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if age is zero or height/weight are not
    /// positive finite numbers
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age == 0 {
            return Err(ValidationError::NonPositive {
                field: "age",
                value: 0.0,
            });
        }
        ValidationError::check_positive("height_cm", self.height_cm)?;
        ValidationError::check_positive("weight_kg", self.weight_kg)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parsing_accepts_wire_names() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(
            "moderately-active".parse::<ActivityLevel>(),
            Ok(ActivityLevel::ModeratelyActive)
        );
        assert_eq!("muscle_building".parse::<Goal>(), Ok(Goal::MuscleBuilding));
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_restriction_round_trips_as_plain_tag() {
        let json = serde_json::to_string(&DietaryRestriction::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten_free\"");
        let custom: DietaryRestriction = serde_json::from_str("\"low_fodmap\"").unwrap();
        assert_eq!(custom, DietaryRestriction::Custom("low_fodmap".into()));
    }

    #[test]
    fn test_validate_rejects_zero_age() {
        let profile = UserNutritionProfile::new(
            0,
            Gender::Male,
            180.0,
            80.0,
            ActivityLevel::Sedentary,
            Goal::Maintenance,
        );
        assert_eq!(profile.validate().unwrap_err().field(), "age");
    }
}
