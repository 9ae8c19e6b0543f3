// ABOUTME: Single-meal swap engine offering alternatives with small fixed macro deltas
// ABOUTME: Breakfast/snack swaps follow the meal's family, lunch/dinner swaps offer meal-type archetypes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Swap Engine
//!
//! Swapping replaces exactly one meal. Other meals and the daily target are
//! left alone, so the day total may drift from the target afterwards; see
//! [`DayPlan::target_delta`].

use super::day_plan::meal_from_template;
use super::templates::MealTemplate;
use nutriplan_core::models::{
    DayPlan, DietaryRestriction, Meal, MealMacros, MealSlot, UserNutritionProfile,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Minimum number of options offered for a family swap
const MIN_OPTIONS: usize = 2;

static EGG_FAMILY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:omelets?|omelettes?|eggs?)\b").ok());

static YOGURT_FAMILY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:yogurt|granola)\b").ok());

static SALMON_FAMILY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bsalmon\b").ok());

static CHICKEN_FAMILY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bchicken\b").ok());

fn title_matches(pattern: &LazyLock<Option<Regex>>, title: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(title))
}

/// Meal family detected from the current title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealFamily {
    /// Omelets and other egg dishes
    Egg,
    /// Yogurt and granola bowls
    Yogurt,
    /// Salmon dishes
    Salmon,
    /// Chicken dishes
    Chicken,
    /// Anything else
    Default,
}

impl MealFamily {
    /// Detect the family from whole words of a meal title
    #[must_use]
    pub fn detect(title: &str) -> Self {
        let families = [
            (&EGG_FAMILY, Self::Egg),
            (&YOGURT_FAMILY, Self::Yogurt),
            (&SALMON_FAMILY, Self::Salmon),
            (&CHICKEN_FAMILY, Self::Chicken),
        ];
        families
            .into_iter()
            .find(|(pattern, _)| title_matches(pattern, title))
            .map_or(Self::Default, |(_, family)| family)
    }

    const fn options(self) -> &'static [SwapOption] {
        match self {
            Self::Egg => EGG_SWAPS,
            Self::Yogurt => YOGURT_SWAPS,
            Self::Salmon => SALMON_SWAPS,
            Self::Chicken => CHICKEN_SWAPS,
            Self::Default => DEFAULT_SWAPS,
        }
    }
}

/// Calorie and gram deltas applied to the original meal's macros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MacroDelta {
    calories: i32,
    protein_g: i32,
    carbs_g: i32,
    fat_g: i32,
}

impl MacroDelta {
    const fn new(calories: i32, protein_g: i32, carbs_g: i32, fat_g: i32) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    const fn apply(self, macros: MealMacros) -> MealMacros {
        macros.offset(self.calories, self.protein_g, self.carbs_g, self.fat_g)
    }
}

#[derive(Debug, Clone, Copy)]
struct SwapOption {
    template: MealTemplate,
    delta: MacroDelta,
    vegan: bool,
}

impl SwapOption {
    fn to_meal(&self, original: &Meal) -> Meal {
        meal_from_template(&self.template, self.delta.apply(original.macros))
    }
}

const OVERNIGHT_OATS: MealTemplate = MealTemplate {
    title: "Overnight Oats",
    ingredients: &[
        "1/2 cup rolled oats",
        "1 cup almond milk",
        "1 tbsp chia seeds",
        "1/2 cup berries",
    ],
    tips: "Soak overnight in the fridge.",
};

const EGG_SWAPS: &[SwapOption] = &[
    SwapOption {
        template: MealTemplate {
            title: "Greek Yogurt Bowl",
            ingredients: &["200g greek yogurt", "1/2 cup granola", "1/2 cup berries"],
            tips: "Use plain yogurt to keep sugar down.",
        },
        delta: MacroDelta::new(-50, 5, -8, -3),
        vegan: false,
    },
    SwapOption {
        template: MealTemplate {
            title: "Tofu Scramble",
            ingredients: &["200g firm tofu", "1 cup spinach", "1 tsp turmeric"],
            tips: "Season with black salt for an eggy flavor.",
        },
        delta: MacroDelta::new(-30, 2, -4, -1),
        vegan: true,
    },
    SwapOption {
        template: OVERNIGHT_OATS,
        delta: MacroDelta::new(20, -6, 12, -2),
        vegan: true,
    },
];

const YOGURT_SWAPS: &[SwapOption] = &[
    SwapOption {
        template: MealTemplate {
            title: "Veggie Omelet",
            ingredients: &["3 eggs", "1 cup spinach", "1/2 cup mushrooms"],
            tips: "Fold in the vegetables just before the eggs set.",
        },
        delta: MacroDelta::new(30, 4, -10, 4),
        vegan: false,
    },
    SwapOption {
        template: MealTemplate {
            title: "Chia Pudding",
            ingredients: &["3 tbsp chia seeds", "1 cup almond milk", "1/2 cup berries"],
            tips: "Prepare the night before so the seeds fully set.",
        },
        delta: MacroDelta::new(-20, -6, 2, 2),
        vegan: true,
    },
    SwapOption {
        template: OVERNIGHT_OATS,
        delta: MacroDelta::new(40, -4, 10, 0),
        vegan: true,
    },
];

const SALMON_SWAPS: &[SwapOption] = &[
    SwapOption {
        template: MealTemplate {
            title: "Grilled Chicken with Rice",
            ingredients: &["150g chicken breast", "1 cup cooked rice", "1 cup green beans"],
            tips: "Marinate the chicken for at least 30 minutes.",
        },
        delta: MacroDelta::new(-40, 6, 5, -6),
        vegan: false,
    },
    SwapOption {
        template: MealTemplate {
            title: "Lemon Herb Cod",
            ingredients: &["170g cod fillet", "1 cup roasted potatoes", "1 cup asparagus"],
            tips: "Cod is done when it flakes easily.",
        },
        delta: MacroDelta::new(-80, 2, 0, -8),
        vegan: false,
    },
    SwapOption {
        template: MealTemplate {
            title: "Lentil Stew",
            ingredients: &["1 cup cooked lentils", "1 cup diced tomatoes", "1 cup carrots"],
            tips: "Tastes better the next day.",
        },
        delta: MacroDelta::new(-30, -10, 15, -9),
        vegan: true,
    },
];

const CHICKEN_SWAPS: &[SwapOption] = &[
    SwapOption {
        template: MealTemplate {
            title: "Turkey Lettuce Wraps",
            ingredients: &["150g ground turkey", "6 lettuce leaves", "1/2 cup water chestnuts"],
            tips: "Use butter lettuce for sturdier cups.",
        },
        delta: MacroDelta::new(-60, 0, -15, 1),
        vegan: false,
    },
    SwapOption {
        template: MealTemplate {
            title: "Baked Salmon",
            ingredients: &["150g salmon fillet", "1 cup roasted vegetables"],
            tips: "Bake at 200C for about 12 minutes.",
        },
        delta: MacroDelta::new(40, -2, -5, 6),
        vegan: false,
    },
    SwapOption {
        template: MealTemplate {
            title: "Tofu Stir-Fry",
            ingredients: &["200g firm tofu", "1 cup mixed vegetables", "1 cup cooked rice"],
            tips: "Press the tofu for crispier edges.",
        },
        delta: MacroDelta::new(-20, -8, 6, 0),
        vegan: true,
    },
];

const DEFAULT_SWAPS: &[SwapOption] = &[
    SwapOption {
        template: MealTemplate {
            title: "Lentil Salad",
            ingredients: &["1 cup cooked lentils", "1 cup cucumber", "1 tbsp olive oil"],
            tips: "Dress while the lentils are warm.",
        },
        delta: MacroDelta::new(-20, 2, 4, -3),
        vegan: true,
    },
    SwapOption {
        template: MealTemplate {
            title: "Hummus Veggie Plate",
            ingredients: &["4 tbsp hummus", "1 cup carrot sticks", "1 whole wheat pita"],
            tips: "Warm the pita for a softer bite.",
        },
        delta: MacroDelta::new(-40, -4, 2, -1),
        vegan: true,
    },
    SwapOption {
        template: MealTemplate {
            title: "Quinoa Power Bowl",
            ingredients: &["1 cup cooked quinoa", "1 cup chickpeas", "1 cup spinach"],
            tips: "Cook a big batch of quinoa for the week.",
        },
        delta: MacroDelta::new(30, 3, 6, 0),
        vegan: true,
    },
];

/// Family-based alternatives for a meal
///
/// Vegan profiles only see vegan options, topped up from the default family
/// so at least two are offered. The current meal's own title is never
/// offered.
#[must_use]
pub fn generate_swap_options(meal: &Meal, profile: &UserNutritionProfile) -> Vec<Meal> {
    let family = MealFamily::detect(&meal.title);
    let vegan = profile.is_vegan();
    let current = meal.title.to_lowercase();
    let allowed = |option: &&SwapOption| {
        (!vegan || option.vegan) && option.template.title.to_lowercase() != current
    };

    let mut chosen: Vec<&SwapOption> = family.options().iter().filter(allowed).collect();
    if chosen.len() < MIN_OPTIONS {
        for option in DEFAULT_SWAPS.iter().filter(allowed) {
            if chosen.len() >= MIN_OPTIONS {
                break;
            }
            if !chosen
                .iter()
                .any(|picked| picked.template.title == option.template.title)
            {
                chosen.push(option);
            }
        }
    }

    debug!(?family, options = chosen.len(), "Generated swap options");
    chosen.into_iter().map(|option| option.to_meal(meal)).collect()
}

/// Lunch/dinner meal-type archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    /// Red meat
    Meat,
    /// Poultry
    Chicken,
    /// Plant-based
    Vegetarian,
    /// Fish and seafood
    Fish,
}

impl MealType {
    /// All archetypes in display order
    pub const ALL: [Self; 4] = [Self::Meat, Self::Chicken, Self::Vegetarian, Self::Fish];

    /// Archetypes permitted by the profile's diet flags
    #[must_use]
    pub fn allowed_for(profile: &UserNutritionProfile) -> Vec<Self> {
        if profile.is_vegan() || profile.has_restriction(&DietaryRestriction::Vegetarian) {
            vec![Self::Vegetarian]
        } else if profile.has_restriction(&DietaryRestriction::Pescatarian) {
            vec![Self::Vegetarian, Self::Fish]
        } else {
            Self::ALL.to_vec()
        }
    }

    const fn option(self) -> SwapOption {
        match self {
            Self::Meat => SwapOption {
                template: MealTemplate {
                    title: "Lean Beef Burrito Bowl",
                    ingredients: &[
                        "120g lean ground beef",
                        "1 cup cooked rice",
                        "1/2 cup black beans",
                        "1/2 cup salsa",
                    ],
                    tips: "Drain the beef well after browning.",
                },
                delta: MacroDelta::new(20, 3, -2, 2),
                vegan: false,
            },
            Self::Chicken => SwapOption {
                template: MealTemplate {
                    title: "Herb Roasted Chicken Plate",
                    ingredients: &[
                        "150g chicken breast",
                        "1 cup roasted sweet potato",
                        "1 cup green beans",
                    ],
                    tips: "Rest the chicken five minutes before slicing.",
                },
                delta: MacroDelta::new(0, 4, -3, -1),
                vegan: false,
            },
            Self::Vegetarian => SwapOption {
                template: MealTemplate {
                    title: "Chickpea and Veggie Bowl",
                    ingredients: &[
                        "1 cup chickpeas",
                        "1 cup cooked quinoa",
                        "1 cup roasted vegetables",
                        "1 tbsp tahini",
                    ],
                    tips: "Roast the chickpeas for extra crunch.",
                },
                delta: MacroDelta::new(-20, -5, 6, -1),
                vegan: true,
            },
            Self::Fish => SwapOption {
                template: MealTemplate {
                    title: "Baked Cod with Potatoes",
                    ingredients: &[
                        "170g cod fillet",
                        "1 cup roasted potatoes",
                        "1 cup broccoli",
                    ],
                    tips: "Cod is done when it flakes easily.",
                },
                delta: MacroDelta::new(-30, 2, -4, -1),
                vegan: false,
            },
        }
    }
}

/// Archetype alternatives for a lunch or dinner
#[must_use]
pub fn meal_type_options(meal: &Meal, profile: &UserNutritionProfile) -> Vec<(MealType, Meal)> {
    MealType::allowed_for(profile)
        .into_iter()
        .map(|meal_type| (meal_type, meal_type.option().to_meal(meal)))
        .collect()
}

/// Alternatives for the meal in a slot
///
/// Breakfast and snack use family options, lunch and dinner use archetypes.
#[must_use]
pub fn swap_options_for_slot(
    slot: MealSlot,
    meal: &Meal,
    profile: &UserNutritionProfile,
) -> Vec<Meal> {
    if slot.is_main_meal() {
        meal_type_options(meal, profile)
            .into_iter()
            .map(|(_, option)| option)
            .collect()
    } else {
        generate_swap_options(meal, profile)
    }
}

/// Replace the meal in one slot, returning the meal that was replaced
///
/// Other meals and the calorie target are not touched.
pub fn apply_swap(plan: &mut DayPlan, slot: MealSlot, replacement: Meal) -> Meal {
    std::mem::replace(plan.meals.get_mut(slot), replacement)
}
