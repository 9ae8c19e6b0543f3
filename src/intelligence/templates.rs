// ABOUTME: Fixed meal template catalog keyed by diet (keto, vegan, omnivore)
// ABOUTME: Supplies rotating breakfasts, lunch/dinner alternates and compliance fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use nutriplan_core::models::{DietaryRestriction, Meal, MealMacros, MealSlot, UserNutritionProfile};

/// Static meal content without macros
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    /// Display title
    pub title: &'static str,
    /// Ingredient lines
    pub ingredients: &'static [&'static str],
    /// Tips shown with the meal
    pub tips: &'static str,
}

impl MealTemplate {
    /// Materialize the template with concrete macros
    #[must_use]
    pub fn to_meal(&self, macros: MealMacros) -> Meal {
        Meal::new(
            self.title,
            macros,
            self.ingredients.iter().map(|line| (*line).to_owned()).collect(),
            self.tips,
        )
    }
}

/// Template branch chosen from dietary tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietTemplate {
    /// Egg and dairy forward, low carb
    Keto,
    /// Tofu and legume forward
    Vegan,
    /// Default omnivore branch
    Omnivore,
}

impl DietTemplate {
    /// Pick the branch for a profile; vegan wins over keto
    #[must_use]
    pub fn for_profile(profile: &UserNutritionProfile) -> Self {
        if profile.is_vegan() {
            Self::Vegan
        } else if profile.has_restriction(&DietaryRestriction::Keto) {
            Self::Keto
        } else {
            Self::Omnivore
        }
    }

    /// Rotating breakfast variants
    #[must_use]
    pub const fn breakfasts(self) -> &'static [MealTemplate] {
        match self {
            Self::Keto => KETO_BREAKFASTS,
            Self::Vegan => VEGAN_BREAKFASTS,
            Self::Omnivore => OMNIVORE_BREAKFASTS,
        }
    }

    /// Templates for a slot
    ///
    /// Breakfasts rotate by day. Lunch and dinner list the primary template
    /// first, then its alternate. Snacks have a single template.
    #[must_use]
    pub const fn slot_templates(self, slot: MealSlot) -> &'static [MealTemplate] {
        match (self, slot) {
            (_, MealSlot::Breakfast) => self.breakfasts(),
            (Self::Keto, MealSlot::Lunch) => KETO_LUNCHES,
            (Self::Keto, MealSlot::Dinner) => KETO_DINNERS,
            (Self::Keto, MealSlot::Snack) => KETO_SNACK,
            (Self::Vegan, MealSlot::Lunch) => VEGAN_LUNCHES,
            (Self::Vegan, MealSlot::Dinner) => VEGAN_DINNERS,
            (Self::Vegan, MealSlot::Snack) => VEGAN_SNACK,
            (Self::Omnivore, MealSlot::Lunch) => OMNIVORE_LUNCHES,
            (Self::Omnivore, MealSlot::Dinner) => OMNIVORE_DINNERS,
            (Self::Omnivore, MealSlot::Snack) => OMNIVORE_SNACK,
        }
    }
}

// ============================================================================
// Keto
// ============================================================================

const KETO_BREAKFASTS: &[MealTemplate] = &[
    MealTemplate {
        title: "Cheese and Spinach Omelet",
        ingredients: &["3 eggs", "30g cheddar cheese", "1 cup spinach", "1 tbsp butter"],
        tips: "Cook low and slow so the cheese melts before the eggs brown.",
    },
    MealTemplate {
        title: "Avocado Baked Eggs",
        ingredients: &["2 eggs", "1 avocado", "2 tbsp cream cheese"],
        tips: "Scoop a little avocado out so the egg fits without spilling.",
    },
];

const KETO_LUNCHES: &[MealTemplate] = &[
    MealTemplate {
        title: "Chicken Caesar Salad",
        ingredients: &[
            "150g chicken breast",
            "2 cups romaine",
            "30g parmesan cheese",
            "2 tbsp caesar dressing",
        ],
        tips: "Skip the croutons and add extra parmesan for crunch.",
    },
    MealTemplate {
        title: "Tuna Stuffed Avocado",
        ingredients: &["120g tuna", "1 avocado", "1 tbsp mayonnaise", "1 cup cucumber"],
        tips: "Mix the tuna with lemon juice to keep the avocado from browning.",
    },
];

const KETO_DINNERS: &[MealTemplate] = &[
    MealTemplate {
        title: "Pan-Seared Salmon with Asparagus",
        ingredients: &["180g salmon fillet", "1 cup asparagus", "1 tbsp butter"],
        tips: "Start skin side down in a hot pan for crisp skin.",
    },
    MealTemplate {
        title: "Beef and Broccoli Skillet",
        ingredients: &["150g ground beef", "2 cups broccoli", "1 tbsp olive oil"],
        tips: "Use coconut aminos instead of soy sauce to keep carbs down.",
    },
];

const KETO_SNACK: &[MealTemplate] = &[MealTemplate {
    title: "Cheese and Almonds",
    ingredients: &["30g cheddar cheese", "20g almonds"],
    tips: "Portion the almonds ahead of time.",
}];

// ============================================================================
// Vegan
// ============================================================================

/// Egg-free breakfast for vegan or dairy-free profiles
pub const TOFU_SCRAMBLE: MealTemplate = MealTemplate {
    title: "Tofu Scramble",
    ingredients: &[
        "200g firm tofu",
        "1 cup spinach",
        "1/2 cup black beans",
        "1 tsp turmeric",
    ],
    tips: "Crumble the tofu by hand for a fluffier texture.",
};

const VEGAN_BREAKFASTS: &[MealTemplate] = &[
    TOFU_SCRAMBLE,
    MealTemplate {
        title: "Chia Pudding",
        ingredients: &[
            "3 tbsp chia seeds",
            "1 cup almond milk",
            "1/2 cup berries",
            "1 tbsp maple syrup",
        ],
        tips: "Prepare the night before so the seeds fully set.",
    },
];

const VEGAN_LUNCHES: &[MealTemplate] = &[
    MealTemplate {
        title: "Lentil Quinoa Bowl",
        ingredients: &[
            "1 cup cooked lentils",
            "1 cup cooked quinoa",
            "1 cup roasted vegetables",
            "1 tbsp tahini",
        ],
        tips: "Lentils and quinoa together give a complete protein.",
    },
    MealTemplate {
        title: "Black Bean Burrito Bowl",
        ingredients: &[
            "1 cup black beans",
            "1 cup cooked rice",
            "1/2 avocado",
            "1/2 cup salsa",
        ],
        tips: "Warm the beans with cumin and lime.",
    },
];

const VEGAN_DINNERS: &[MealTemplate] = &[
    MealTemplate {
        title: "Chickpea Curry with Rice",
        ingredients: &[
            "1 cup chickpeas",
            "1 cup cooked brown rice",
            "1/2 cup coconut milk",
            "1 cup spinach",
        ],
        tips: "Stir the spinach in at the end so it just wilts.",
    },
    MealTemplate {
        title: "Tempeh Stir-Fry",
        ingredients: &[
            "150g tempeh",
            "1 cup mixed vegetables",
            "1 cup cooked rice",
            "1 tbsp soy sauce",
        ],
        tips: "Steam the tempeh for ten minutes first to soften its flavor.",
    },
];

const VEGAN_SNACK: &[MealTemplate] = &[MealTemplate {
    title: "Hummus and Veggies",
    ingredients: &["3 tbsp hummus", "1 cup carrot sticks"],
    tips: "Add a handful of roasted chickpeas for extra protein.",
}];

// ============================================================================
// Omnivore
// ============================================================================

const OMNIVORE_BREAKFASTS: &[MealTemplate] = &[
    MealTemplate {
        title: "Veggie Omelet",
        ingredients: &[
            "3 eggs",
            "1 cup spinach",
            "30g feta cheese",
            "1 slice whole grain toast",
        ],
        tips: "Cook the spinach first so the omelet sets evenly.",
    },
    MealTemplate {
        title: "Scrambled Eggs on Toast",
        ingredients: &[
            "3 large eggs",
            "2 slices whole grain toast",
            "1 tsp butter",
            "1 cup cherry tomatoes",
        ],
        tips: "Take the eggs off the heat while still slightly wet.",
    },
    MealTemplate {
        title: "Eggs and Bacon Plate",
        ingredients: &[
            "2 eggs",
            "2 strips bacon",
            "1 slice sourdough toast",
            "1/2 avocado",
        ],
        tips: "Bake the bacon on a rack to drain the fat.",
    },
];

const OMNIVORE_LUNCHES: &[MealTemplate] = &[
    MealTemplate {
        title: "Grilled Chicken Quinoa Bowl",
        ingredients: &[
            "150g chicken breast",
            "1 cup cooked quinoa",
            "1/2 avocado",
            "1 cup mixed greens",
            "1 tbsp extra virgin olive oil",
        ],
        tips: "Batch grill the chicken for the next few lunches.",
    },
    MealTemplate {
        title: "Turkey and Hummus Wrap",
        ingredients: &[
            "120g sliced turkey",
            "1 whole wheat tortilla",
            "2 tbsp hummus",
            "1 cup mixed greens",
        ],
        tips: "Spread the hummus edge to edge so the wrap holds together.",
    },
];

const OMNIVORE_DINNERS: &[MealTemplate] = &[
    MealTemplate {
        title: "Baked Salmon with Rice",
        ingredients: &[
            "150g salmon fillet",
            "1 cup cooked brown rice",
            "1 cup broccoli",
            "1 tsp olive oil",
        ],
        tips: "Bake at 200C for about 12 minutes.",
    },
    MealTemplate {
        title: "Chicken Stir-Fry",
        ingredients: &[
            "150g chicken",
            "1 cup cooked rice",
            "1 cup mixed vegetables",
            "1 tbsp soy sauce",
        ],
        tips: "Slice the chicken thin so it cooks in a couple of minutes.",
    },
];

const OMNIVORE_SNACK: &[MealTemplate] = &[MealTemplate {
    title: "Greek Yogurt with Berries",
    ingredients: &["170g greek yogurt", "1/2 cup blueberries", "1 tbsp honey"],
    tips: "Choose plain yogurt and sweeten it yourself.",
}];

// ============================================================================
// Fallbacks
// ============================================================================

/// Egg-free breakfast for profiles that eat dairy
pub const YOGURT_BOWL: MealTemplate = MealTemplate {
    title: "Greek Yogurt Bowl",
    ingredients: &[
        "200g greek yogurt",
        "1/2 cup granola",
        "1/2 cup berries",
        "1 tbsp honey",
    ],
    tips: "Add granola right before eating so it stays crunchy.",
};

/// Replacement for any meal that breaks a vegan plan
pub const VEGAN_BOWL: MealTemplate = MealTemplate {
    title: "Vegan Power Bowl",
    ingredients: &[
        "1 cup cooked quinoa",
        "1 cup chickpeas",
        "1 cup roasted vegetables",
        "1 tbsp tahini",
    ],
    tips: "Fully plant-based; add edamame for more protein.",
};
