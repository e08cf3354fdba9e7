// ABOUTME: Dieetcoach CLI - generate meal plans, evaluate ingredients, and validate stored plans
// ABOUTME: Reads JSON fixtures and plans from disk and prints readable or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Plan a week of breakfast, lunch and dinner
//! dieetcoach-cli generate --fixture demos/fixture.json --profile anti-inflammatoir \
//!     --start 2025-03-03 --days 7 --slots breakfast,lunch,dinner --seed 42
//!
//! # Check an ingredient list against a diet profile
//! dieetcoach-cli evaluate --fixture demos/fixture.json --profile anti-inflammatoir \
//!     --ingredient zalm --ingredient spinazie
//!
//! # Run the sanity checks over a saved plan
//! dieetcoach-cli validate --plan plan.json
//!
//! # Replace one meal of a saved plan
//! dieetcoach-cli regenerate --fixture demos/fixture.json --plan plan.json --meal <uuid>
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dieetcoach::logging::{LogFormat, LoggingConfig};
use dieetcoach::models::MealSlot;
use dieetcoach::services::GenerateRequest;
use dieetcoach_engine::LoadOptions;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "dieetcoach-cli",
    about = "Dieetcoach meal planning CLI",
    long_about = "Generate deterministic meal plans that respect diet rules.\n\
                  Also evaluates ingredient lists and sanity-checks stored plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a meal plan
    Generate {
        /// Planner fixture (rules, pools, templates, nutrition)
        #[arg(long)]
        fixture: PathBuf,

        /// Diet profile id
        #[arg(long)]
        profile: String,

        /// First date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Number of days
        #[arg(long, default_value = "7")]
        days: u32,

        /// Meal slots per day (comma-separated)
        #[arg(long, value_delimiter = ',', default_value = "breakfast,lunch,dinner")]
        slots: Vec<MealSlot>,

        /// Base seed; same seed and fixture give the same plan
        #[arg(long)]
        seed: Option<u64>,

        /// Exclude common inflammatory triggers
        #[arg(long)]
        exclude_inflammatory: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate ingredients against a diet profile
    Evaluate {
        /// Planner fixture with categories and rules
        #[arg(long)]
        fixture: PathBuf,

        /// Diet profile id
        #[arg(long)]
        profile: String,

        /// Ingredient name (repeatable)
        #[arg(long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Exclude common inflammatory triggers
        #[arg(long)]
        exclude_inflammatory: bool,

        /// Print the evaluation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sanity-check a stored plan
    Validate {
        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace one meal of a stored plan
    Regenerate {
        /// Planner fixture (rules, pools, templates, nutrition)
        #[arg(long)]
        fixture: PathBuf,

        /// Plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Id of the meal to replace
        #[arg(long)]
        meal: Uuid,

        /// Base seed
        #[arg(long)]
        seed: Option<u64>,

        /// Exclude common inflammatory triggers
        #[arg(long)]
        exclude_inflammatory: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Some(format) = cli.log_format.as_deref() {
        logging = logging.with_format(LogFormat::from_name(format));
    }
    logging.init()?;

    match cli.command {
        Command::Generate {
            fixture,
            profile,
            start,
            days,
            slots,
            seed,
            exclude_inflammatory,
            json,
        } => {
            let request = GenerateRequest {
                diet_profile_id: profile,
                start_date: start,
                day_count: days,
                meal_slots: slots,
                seed,
                exclude_inflammatory_triggers: exclude_inflammatory,
            };
            commands::plan::generate(&fixture, &request, json).await
        }
        Command::Evaluate {
            fixture,
            profile,
            ingredients,
            exclude_inflammatory,
            json,
        } => {
            let options = LoadOptions {
                exclude_inflammatory_triggers: exclude_inflammatory,
            };
            commands::evaluate::run(&fixture, &profile, ingredients, options, json).await
        }
        Command::Validate { plan, json } => commands::plan::validate(&plan, json).await,
        Command::Regenerate {
            fixture,
            plan,
            meal,
            seed,
            exclude_inflammatory,
            json,
        } => {
            let options = LoadOptions {
                exclude_inflammatory_triggers: exclude_inflammatory,
            };
            commands::plan::regenerate(&fixture, &plan, meal, seed, options, json).await
        }
    }
}
