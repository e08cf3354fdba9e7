// ABOUTME: Plan commands for dieetcoach-cli
// ABOUTME: Handles generate, validate, and regenerate operations on meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use dieetcoach::services::GenerateRequest;
use dieetcoach_engine::validation::validate_plan_with;
use dieetcoach_engine::{LoadOptions, PlannerConfig};
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::{
    display_generated_plan, display_plan, display_sanity_issues, print_json,
};
use crate::helpers::fixture::{read_plan, service_from_fixture};

/// Generate a plan from a fixture
pub async fn generate(fixture: &Path, request: &GenerateRequest, json: bool) -> Result<ExitCode> {
    info!(
        profile = %request.diet_profile_id,
        start = %request.start_date,
        days = request.day_count,
        "Generating meal plan"
    );
    let service = service_from_fixture(fixture).await?;
    let generated = service.generate(request).await?;

    if json {
        print_json(&generated)?;
    } else {
        display_generated_plan(&generated);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the sanity validator over a stored plan; fails when issues are found
pub async fn validate(plan_path: &Path, json: bool) -> Result<ExitCode> {
    let plan = read_plan(plan_path).await?;
    let issues = validate_plan_with(&plan, &PlannerConfig::global().sanity);

    if json {
        print_json(&issues)?;
    } else {
        display_plan(&plan);
        display_sanity_issues(&issues);
    }
    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Replace one meal of a stored plan
pub async fn regenerate(
    fixture: &Path,
    plan_path: &Path,
    meal_id: Uuid,
    seed: Option<u64>,
    options: LoadOptions,
    json: bool,
) -> Result<ExitCode> {
    let plan = read_plan(plan_path).await?;
    let service = service_from_fixture(fixture).await?;
    let generated = service
        .regenerate_meal(&plan, meal_id, seed, options)
        .await?;

    if json {
        print_json(&generated)?;
    } else {
        display_generated_plan(&generated);
    }
    Ok(ExitCode::SUCCESS)
}
