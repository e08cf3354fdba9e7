// ABOUTME: Ingredient evaluation command for dieetcoach-cli
// ABOUTME: Checks an ad-hoc ingredient list against a diet profile's rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use dieetcoach::models::IngredientRef;
use dieetcoach_engine::LoadOptions;

use crate::helpers::display::{display_evaluation, print_json};
use crate::helpers::fixture::service_from_fixture;

/// Evaluate ingredients; fails when a hard rule is violated
pub async fn run(
    fixture: &Path,
    profile: &str,
    ingredients: Vec<String>,
    options: LoadOptions,
    json: bool,
) -> Result<ExitCode> {
    let service = service_from_fixture(fixture).await?;
    let refs = ingredients.into_iter().map(IngredientRef::named).collect();
    let result = service
        .evaluate_ingredients(profile, refs, options)
        .await?;

    if json {
        print_json(&result)?;
    } else {
        display_evaluation(&result);
    }
    Ok(if result.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
