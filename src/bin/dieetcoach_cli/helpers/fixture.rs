// ABOUTME: Fixture and plan file helpers for dieetcoach-cli
// ABOUTME: Builds the meal plan service from a fixture and reads plans from disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use dieetcoach::errors::AppError;
use dieetcoach::models::Plan;
use dieetcoach::providers::PlannerFixture;
use dieetcoach::services::MealPlanService;
use dieetcoach_engine::PlannerConfig;
use tokio::fs;
use tracing::debug;

/// Service over the fixture at `path`, with nutrition when the fixture has any
pub async fn service_from_fixture(path: &Path) -> Result<MealPlanService> {
    let fixture = PlannerFixture::from_file(path).await?;
    let service = MealPlanService::in_memory(fixture.store(), PlannerConfig::global().clone());

    let table = fixture.nutrition_table();
    if table.is_empty() {
        debug!("Fixture has no nutrition data, meals will carry no macro estimates");
        return Ok(service);
    }
    Ok(service.with_nutrition(Arc::new(table)))
}

/// Read a serialized plan
pub async fn read_plan(path: &Path) -> Result<Plan> {
    let json = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Cannot read plan {}", path.display())).with_source(e)
    })?;
    let plan = serde_json::from_str(&json).map_err(AppError::from)?;
    Ok(plan)
}
