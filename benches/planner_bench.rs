// ABOUTME: Criterion benchmarks for the planning engine
// ABOUTME: Measures calorie results, day-plan builds, adjustments and grocery aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

//! Criterion benchmarks for the planning engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::config::NutritionConfig;
use nutriplan::intelligence::{
    adjust_plan, aggregate_ingredients, build_day_plan, calculate_calorie_result,
    parse_directives, targets_for_profile,
};
use nutriplan_core::models::{
    ActivityLevel, DayPlan, DietaryRestriction, Gender, Goal, Meal, UserNutritionProfile,
};

fn profile() -> UserNutritionProfile {
    UserNutritionProfile::new(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::ModeratelyActive,
        Goal::WeightLoss,
    )
}

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
}

fn plans_for(profile: &UserNutritionProfile, days: u64, config: &NutritionConfig) -> Vec<DayPlan> {
    let targets = targets_for_profile(profile, config).unwrap();
    (0..days)
        .map(|offset| {
            let date = start_date().checked_add_days(Days::new(offset)).unwrap();
            build_day_plan(profile, &targets, date, &config.meal_shares)
        })
        .collect()
}

fn bench_calorie_result(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profiles = [
        ("omnivore", profile()),
        ("keto", profile().with_restriction(DietaryRestriction::Keto)),
    ];

    let mut group = c.benchmark_group("calorie_result");
    for (name, profile) in &profiles {
        group.bench_with_input(BenchmarkId::from_parameter(name), profile, |b, profile| {
            b.iter(|| calculate_calorie_result(black_box(profile), &config));
        });
    }
    group.finish();
}

fn bench_build_day_plan(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profile = profile();
    let targets = targets_for_profile(&profile, &config).unwrap();

    c.bench_function("build_day_plan", |b| {
        b.iter(|| {
            build_day_plan(
                black_box(&profile),
                black_box(&targets),
                start_date(),
                &config.meal_shares,
            )
        });
    });
}

fn bench_adjust_plan(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profile = profile();
    let targets = targets_for_profile(&profile, &config).unwrap();
    let current = build_day_plan(&profile, &targets, start_date(), &config.meal_shares);

    let requests = [
        ("calories", "reduce calories to 1800"),
        ("exclusions", "no eggs, no dairy and allergic to nuts"),
        ("combined", "set calories to 2000, more protein, no fish, cheaper"),
    ];

    let mut group = c.benchmark_group("adjust_plan");
    for (name, request) in requests {
        group.bench_with_input(BenchmarkId::new("parse", name), request, |b, request| {
            b.iter(|| parse_directives(black_box(request)));
        });
        group.bench_with_input(BenchmarkId::new("adjust", name), request, |b, request| {
            b.iter(|| adjust_plan(&current, &profile, &targets, black_box(request), &config));
        });
    }
    group.finish();
}

fn bench_grocery_aggregation(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profile = profile();

    let mut group = c.benchmark_group("aggregate_ingredients");
    for days in [1_u64, 7, 14] {
        let plans = plans_for(&profile, days, &config);
        let meals: Vec<&Meal> = plans
            .iter()
            .flat_map(|plan| plan.meals.iter().map(|(_, meal)| meal))
            .collect();

        group.throughput(Throughput::Elements(meals.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &meals, |b, meals| {
            b.iter(|| aggregate_ingredients(black_box(meals.iter().copied())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_calorie_result,
    bench_build_day_plan,
    bench_adjust_plan,
    bench_grocery_aggregation,
);
criterion_main!(benches);
