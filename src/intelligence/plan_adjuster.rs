// ABOUTME: Plan adjustment from free-text requests decoded into ordered directives
// ABOUTME: Directives rescale targets or substitute template content, then compliance is enforced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Plan Adjuster
//!
//! Request text is decoded by a fixed, ordered list of keyword rules into
//! [`Directive`] values:
//!
//! 1. explicit calorie target ("reduce calories to 1800")
//! 2. "more protein"
//! 3. exclusions ("no eggs", "allergic to nuts")
//! 4. "cheaper"
//!
//! Each directive is applied by the pure [`apply`] function. The adjusted plan
//! always starts from a fresh template build, so target directives (which come
//! first) rebuild meals and content directives then rewrite them. Dietary
//! compliance runs last and overrides everything before it.

use super::day_plan::{build_day_plan, meal_from_template};
use super::goal_adjuster::clamp_weight_loss;
use super::macro_allocator::{percentages_from_grams, rescale_targets};
use super::templates::{DietTemplate, MealTemplate, TOFU_SCRAMBLE, VEGAN_BOWL, YOGURT_BOWL};
use super::units::round_non_negative;
use crate::config::planner::NutritionConfig;
use nutriplan_core::constants::energy::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use nutriplan_core::models::{
    DayPlan, DietaryRestriction, Meal, MealSlot, Targets, UserNutritionProfile,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::{debug, info};

// ============================================================================
// Directives
// ============================================================================

/// Ingredient family a user asked to avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionTag {
    /// Eggs
    Eggs,
    /// Dairy products
    Dairy,
    /// Fish and seafood
    Fish,
    /// Tree nuts and peanuts
    Nuts,
}

impl ExclusionTag {
    /// Map a keyword following "no"/"avoid"/"allergic to" to a tag
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "egg" | "eggs" => Some(Self::Eggs),
            "dairy" | "milk" | "cheese" | "yogurt" | "lactose" => Some(Self::Dairy),
            "fish" | "seafood" | "salmon" | "tuna" => Some(Self::Fish),
            "nut" | "nuts" | "almond" | "almonds" | "peanut" | "peanuts" => Some(Self::Nuts),
            _ => None,
        }
    }
}

/// One decoded adjustment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Directive {
    /// Set the daily calorie target (weight-loss floor still applies)
    SetCalories(u32),
    /// Add a fixed amount of protein, paid for by carbs and fat
    IncreaseProtein,
    /// Remove an ingredient family from the plan
    Exclude(ExclusionTag),
    /// Replace expensive ingredients with cheaper staples
    CostReduce,
}

impl Directive {
    /// Whether this directive changes targets (and therefore rebuilds meals)
    #[must_use]
    pub const fn changes_targets(&self) -> bool {
        matches!(self, Self::SetCalories(_) | Self::IncreaseProtein)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetCalories(calories) => write!(f, "set calories to {calories}"),
            Self::IncreaseProtein => f.write_str("more protein"),
            Self::Exclude(tag) => write!(f, "exclude {tag:?}"),
            Self::CostReduce => f.write_str("reduce cost"),
        }
    }
}

static CALORIE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "reduce calories to 1800", "set my daily calories to 2,100 please"
    Regex::new(
        r"(?i)\b(?:reduce|increase|set|lower|raise|change)\b[^.]*?\b(?:calories|kcal)\b[^.]*?\bto\s+(\d{1,2},?\d{3}|\d{3,5})\b",
    )
    .ok()
});

static PROTEIN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:more|higher|increase|boost)\s+protein\b").ok());

static EXCLUSION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "no eggs", "without dairy", "allergic to nuts", "I hate salmon"
    Regex::new(r"(?i)\b(?:no|without|avoid|allergic\s+to|dislike|hate|skip)\s+(?:any\s+|the\s+)?([a-z]+)")
        .ok()
});

static COST_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:cheaper|cheap|budget|less\s+expensive|save\s+money)\b").ok()
});

/// Decode request text into directives, in rule order
///
/// Text matching no rule yields an empty list.
#[must_use]
pub fn parse_directives(text: &str) -> Vec<Directive> {
    let mut directives = Vec::new();

    if let Some(calories) = CALORIE_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|captures| captures.get(1))
        .and_then(|matched| matched.as_str().replace(',', "").parse::<u32>().ok())
    {
        directives.push(Directive::SetCalories(calories));
    }

    if PROTEIN_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text))
    {
        directives.push(Directive::IncreaseProtein);
    }

    if let Some(pattern) = EXCLUSION_PATTERN.as_ref() {
        let mut tags: Vec<ExclusionTag> = pattern
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .filter_map(|word| ExclusionTag::from_keyword(word.as_str()))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        directives.extend(tags.into_iter().map(Directive::Exclude));
    }

    if COST_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text))
    {
        directives.push(Directive::CostReduce);
    }

    directives
}

// ============================================================================
// Substitution rules
// ============================================================================

/// How a matched ingredient is rewritten
#[derive(Debug, Clone, Copy)]
enum Rewrite {
    /// Replace the matched words; titles are rewritten too
    Words(&'static str),
    /// Replace the whole ingredient line; titles are left alone
    Line(&'static str),
}

struct Substitution {
    pattern: Regex,
    rewrite: Rewrite,
}

fn compile(rules: &[(&str, Rewrite)]) -> Vec<Substitution> {
    rules
        .iter()
        .filter_map(|(pattern, rewrite)| {
            Regex::new(&format!(r"(?i)\b{pattern}\b"))
                .ok()
                .map(|pattern| Substitution {
                    pattern,
                    rewrite: *rewrite,
                })
        })
        .collect()
}

static DAIRY_SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    compile(&[
        ("greek yogurt", Rewrite::Words("coconut yogurt")),
        ("cream cheese", Rewrite::Words("mashed avocado")),
        ("(?:feta|cheddar|parmesan) cheese", Rewrite::Words("nutritional yeast")),
        ("cheese", Rewrite::Words("nutritional yeast")),
        ("tbsp butter", Rewrite::Words("tbsp olive oil")),
        ("tsp butter", Rewrite::Words("tsp olive oil")),
    ])
});

static FISH_SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    compile(&[
        ("salmon fillet", Rewrite::Words("chicken breast")),
        ("salmon", Rewrite::Words("chicken")),
        ("tuna", Rewrite::Words("chicken")),
    ])
});

static NUT_SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    compile(&[
        ("almond milk", Rewrite::Words("oat milk")),
        ("almonds", Rewrite::Words("pumpkin seeds")),
        ("walnuts", Rewrite::Words("sunflower seeds")),
        ("peanut butter", Rewrite::Words("sunflower seed butter")),
    ])
});

static COST_SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    compile(&[
        ("salmon fillet", Rewrite::Words("chicken breast")),
        ("salmon", Rewrite::Words("chicken")),
        ("quinoa", Rewrite::Words("rice")),
        ("avocado", Rewrite::Line("1 tbsp olive oil")),
    ])
});

static EGG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\beggs?\b").ok());

static NON_VEGAN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:chicken|beef|salmon|tuna|turkey|pork|bacon|ham|yogurt|cheese|eggs?|butter|honey)\b",
    )
    .ok()
});

static PORK_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:pork|bacon|ham|prosciutto|lard|chorizo|pepperoni)\b").ok()
});

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn substitute(meal: &mut Meal, rules: &[Substitution]) {
    for rule in rules {
        for line in &mut meal.ingredients {
            if rule.pattern.is_match(line) {
                *line = match rule.rewrite {
                    Rewrite::Words(replacement) => {
                        rule.pattern.replace_all(line, replacement).into_owned()
                    }
                    Rewrite::Line(replacement) => replacement.to_owned(),
                };
            }
        }
        if let Rewrite::Words(replacement) = rule.rewrite {
            if rule.pattern.is_match(&meal.title) {
                meal.title = rule
                    .pattern
                    .replace_all(&meal.title, title_case(replacement).as_str())
                    .into_owned();
            }
        }
    }
}

fn pattern_hits(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|regex| regex.is_match(text))
}

fn meal_matches(pattern: &LazyLock<Option<Regex>>, meal: &Meal) -> bool {
    pattern_hits(pattern, &meal.title)
        || meal
            .ingredients
            .iter()
            .any(|line| pattern_hits(pattern, line))
}

fn egg_free_breakfast(profile: &UserNutritionProfile) -> MealTemplate {
    if profile.is_vegan() || profile.has_restriction(&DietaryRestriction::DairyFree) {
        TOFU_SCRAMBLE
    } else {
        YOGURT_BOWL
    }
}

fn remove_eggs(meal: &mut Meal, slot: MealSlot, profile: &UserNutritionProfile) {
    if !meal_matches(&EGG_PATTERN, meal) {
        return;
    }
    if slot == MealSlot::Breakfast {
        *meal = meal_from_template(&egg_free_breakfast(profile), meal.macros);
    } else {
        meal.ingredients.retain(|line| !pattern_hits(&EGG_PATTERN, line));
    }
}

/// Apply a content directive to one meal; target directives are ignored
fn apply_to_meal(
    meal: &mut Meal,
    slot: MealSlot,
    directive: &Directive,
    profile: &UserNutritionProfile,
) {
    match directive {
        Directive::Exclude(ExclusionTag::Eggs) => remove_eggs(meal, slot, profile),
        Directive::Exclude(ExclusionTag::Dairy) => substitute(meal, &DAIRY_SUBSTITUTIONS),
        Directive::Exclude(ExclusionTag::Fish) => substitute(meal, &FISH_SUBSTITUTIONS),
        Directive::Exclude(ExclusionTag::Nuts) => substitute(meal, &NUT_SUBSTITUTIONS),
        Directive::CostReduce => substitute(meal, &COST_SUBSTITUTIONS),
        Directive::SetCalories(_) | Directive::IncreaseProtein => {}
    }
}

// ============================================================================
// Applying directives
// ============================================================================

/// Targets and plan threaded through directive application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Current daily targets
    pub targets: Targets,
    /// Current plan
    pub plan: DayPlan,
}

/// Shift a fixed protein boost into the targets
///
/// The boost's energy is removed half from carbs and half from fat (converted
/// back to grams), then all three percentages are recomputed from grams.
#[must_use]
pub fn boost_protein(targets: &Targets, boost_g: u32) -> Targets {
    let half_kcal = f64::from(boost_g * PROTEIN_KCAL_PER_G) / 2.0;
    let carbs_cut = round_non_negative(half_kcal / f64::from(CARBS_KCAL_PER_G));
    let fat_cut = round_non_negative(half_kcal / f64::from(FAT_KCAL_PER_G));

    let mut boosted = *targets;
    boosted.protein.grams += boost_g;
    boosted.carbs.grams = boosted.carbs.grams.saturating_sub(carbs_cut);
    boosted.fat.grams = boosted.fat.grams.saturating_sub(fat_cut);
    percentages_from_grams(&boosted)
}

/// Apply one directive
///
/// Target directives recompute targets and rebuild the plan from templates.
/// Content directives rewrite meal content and leave macros untouched.
#[must_use]
pub fn apply(
    draft: PlanDraft,
    directive: &Directive,
    profile: &UserNutritionProfile,
    config: &NutritionConfig,
) -> PlanDraft {
    let targets = match directive {
        Directive::SetCalories(requested) => {
            let calories = clamp_weight_loss(*requested, profile.gender, &config.goal_adjustment);
            rescale_targets(&draft.targets, calories)
        }
        Directive::IncreaseProtein => {
            boost_protein(&draft.targets, config.plan_adjustment.protein_boost_g)
        }
        Directive::Exclude(_) | Directive::CostReduce => {
            let mut plan = draft.plan;
            for slot in MealSlot::ALL {
                apply_to_meal(plan.meals.get_mut(slot), slot, directive, profile);
            }
            return PlanDraft {
                targets: draft.targets,
                plan,
            };
        }
    };

    PlanDraft {
        plan: build_day_plan(profile, &targets, draft.plan.date, &config.meal_shares),
        targets,
    }
}

// ============================================================================
// Post-steps
// ============================================================================

/// Force lunch and dinner titles to differ from the previous plan's
fn ensure_variety(
    plan: &mut DayPlan,
    previous: &DayPlan,
    directives: &[Directive],
    profile: &UserNutritionProfile,
) {
    let diet = DietTemplate::for_profile(profile);
    for slot in [MealSlot::Lunch, MealSlot::Dinner] {
        let previous_title = previous.meals.get(slot).title.to_lowercase();
        if plan.meals.get(slot).title.to_lowercase() != previous_title {
            continue;
        }

        let macros = plan.meals.get(slot).macros;
        let alternate = diet.slot_templates(slot).iter().find_map(|template| {
            let mut candidate = meal_from_template(template, macros);
            for directive in directives {
                apply_to_meal(&mut candidate, slot, directive, profile);
            }
            (candidate.title.to_lowercase() != previous_title).then_some(candidate)
        });

        let meal = plan.meals.get_mut(slot);
        match alternate {
            Some(candidate) => *meal = candidate,
            None => meal.title = format!("{} (Chef's Variation)", meal.title),
        }
    }
}

/// Enforce dietary compliance, overriding any earlier adjustment
///
/// Vegan profiles get any meal mentioning an animal product replaced by a
/// fixed vegan bowl with the same macros. Halal profiles get pork lines
/// removed.
#[must_use]
pub fn enforce_compliance(mut plan: DayPlan, profile: &UserNutritionProfile) -> DayPlan {
    let vegan = profile.is_vegan();
    let halal = profile.has_restriction(&DietaryRestriction::Halal);

    for slot in MealSlot::ALL {
        let meal = plan.meals.get_mut(slot);
        if vegan && meal_matches(&NON_VEGAN_PATTERN, meal) {
            debug!(%slot, title = %meal.title, "Replacing non-vegan meal");
            *meal = meal_from_template(&VEGAN_BOWL, meal.macros);
        }
        if halal {
            meal.ingredients.retain(|line| !pattern_hits(&PORK_PATTERN, line));
        }
    }
    plan
}

/// Result of an adjustment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedPlan {
    /// Targets after target directives
    pub targets: Targets,
    /// Rebuilt plan
    pub plan: DayPlan,
    /// Directives decoded from the request, in application order
    pub directives: Vec<Directive>,
}

/// Adjust a plan from request text
///
/// The plan is rebuilt from templates for the same date, directives are
/// applied in order, lunch/dinner variety against `current` is forced and
/// compliance runs last.
#[must_use]
pub fn adjust_plan(
    current: &DayPlan,
    profile: &UserNutritionProfile,
    targets: &Targets,
    request_text: &str,
    config: &NutritionConfig,
) -> AdjustedPlan {
    let directives = parse_directives(request_text);
    info!(
        plan.date = %current.date,
        targets.calories = targets.calories,
        directives = ?directives,
        "Adjusting day plan"
    );

    let fresh = PlanDraft {
        targets: *targets,
        plan: build_day_plan(profile, targets, current.date, &config.meal_shares),
    };
    let adjusted = directives
        .iter()
        .fold(fresh, |draft, directive| apply(draft, directive, profile, config));

    let mut plan = adjusted.plan;
    ensure_variety(&mut plan, current, &directives, profile);

    AdjustedPlan {
        targets: adjusted.targets,
        plan: enforce_compliance(plan, profile),
        directives,
    }
}
