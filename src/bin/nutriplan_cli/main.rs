// ABOUTME: Nutriplan CLI - compute calorie targets, day plans, swaps and grocery lists
// ABOUTME: Builds a profile from flags and runs the planner against an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
//!
//! Usage:
//! ```bash
//! # Daily calorie and macro targets
//! nutriplan-cli targets --age 30 --gender male --height-cm 180 --weight-kg 80 \
//!     --activity moderately_active --goal weight_loss
//!
//! # Day plan with an adjustment request
//! nutriplan-cli plan --age 30 --gender female --height-cm 165 --weight-kg 60 \
//!     --activity sedentary --goal maintenance --diet vegan --adjust "more protein"
//!
//! # Swap options for breakfast, then apply the second one
//! nutriplan-cli swaps --slot breakfast --pick 1 ...
//!
//! # Grocery list for a week of plans
//! nutriplan-cli groceries --days 7 ...
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use nutriplan::logging::LoggingConfig;
use nutriplan_core::models::{ActivityLevel, Gender, Goal, MealSlot, UserNutritionProfile};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan calorie target and meal plan CLI",
    long_about = "Compute BMR/TDEE based calorie targets, generate and adjust day plans, list meal swaps and build grocery lists."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Gender (male or female)
    #[arg(long)]
    gender: Gender,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Activity level (sedentary, lightly_active, moderately_active, very_active, extremely_active)
    #[arg(long)]
    activity: ActivityLevel,

    /// Goal (weight_loss, maintenance, weight_gain, muscle_building)
    #[arg(long)]
    goal: Goal,

    /// Dietary restriction tags, comma separated (e.g. "vegan,halal")
    #[arg(long, value_delimiter = ',')]
    diet: Vec<String>,
}

impl ProfileArgs {
    fn to_profile(&self) -> UserNutritionProfile {
        UserNutritionProfile::new(
            self.age,
            self.gender,
            self.height_cm,
            self.weight_kg,
            self.activity,
            self.goal,
        )
        .with_tags(self.diet.iter().map(String::as_str))
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show BMR, TDEE, goal calories and macro targets
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate a day plan, optionally applying an adjustment request
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Plan date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Adjustment request, e.g. "reduce calories to 1800, no eggs"
        #[arg(long)]
        adjust: Option<String>,
    },

    /// List swap options for one meal, optionally applying one
    Swaps {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Plan date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long, value_parser = parse_slot)]
        slot: MealSlot,

        /// Index of the option to apply
        #[arg(long)]
        pick: Option<usize>,
    },

    /// Aggregate a grocery list over consecutive day plans
    Groceries {
        #[command(flatten)]
        profile: ProfileArgs,

        /// First plan date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of days to plan
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=14))]
        days: u32,
    },
}

fn parse_slot(value: &str) -> std::result::Result<MealSlot, String> {
    MealSlot::from_str_lossy(value).ok_or_else(|| {
        format!("unknown meal slot '{value}' (expected breakfast, lunch, dinner or snack)")
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("Nutriplan CLI starting");

    match cli.command {
        Command::Targets { profile } => {
            commands::targets::show(&profile.to_profile(), cli.json)?;
        }
        Command::Plan {
            profile,
            date,
            adjust,
        } => {
            commands::plan::generate(
                &profile.to_profile(),
                date.unwrap_or_else(today),
                adjust.as_deref(),
                cli.json,
            )?;
        }
        Command::Swaps {
            profile,
            date,
            slot,
            pick,
        } => {
            commands::plan::swaps(
                &profile.to_profile(),
                date.unwrap_or_else(today),
                slot,
                pick,
                cli.json,
            )?;
        }
        Command::Groceries {
            profile,
            date,
            days,
        } => {
            commands::plan::groceries(
                &profile.to_profile(),
                date.unwrap_or_else(today),
                days,
                cli.json,
            )?;
        }
    }

    Ok(())
}
