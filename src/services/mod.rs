// ABOUTME: Domain service layer orchestrating storage collaborators and the planning engine
// ABOUTME: Protocol-agnostic, reusable from the CLI or any API layer built on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services load rows through the provider traits, hand them to the
//! synchronous engine and attach post-generation diagnostics. Engine calls
//! never await.

/// Meal plan generation, ingredient evaluation, and meal regeneration
pub mod meal_plan;

pub use meal_plan::{GenerateRequest, GeneratedPlan, MealPlanService};
