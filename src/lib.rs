// ABOUTME: Main library entry point for the dieetcoach meal-planning integration surface
// ABOUTME: Wires storage providers, nutrition lookup, and logging around the planning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dieetcoach
//!
//! Diet-rule compliance evaluation and deterministic meal-plan synthesis.
//!
//! The algorithms live in `dieetcoach-engine` and are pure and synchronous.
//! This crate adds what a running system needs around them:
//!
//! - **Providers**: async storage traits for rule rows, generation inputs and
//!   usage history, with an in-memory implementation fed from JSON fixtures
//! - **Nutrition**: a per-100 g macro table implementing the engine's lookup seam
//! - **Services**: `MealPlanService` orchestrating load, filter, synthesize,
//!   validate and guardrail steps
//! - **Logging**: `tracing-subscriber` setup driven by environment variables
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use dieetcoach::errors::AppResult;
//! use dieetcoach::models::MealSlot;
//! use dieetcoach::providers::PlannerFixture;
//! use dieetcoach::services::{GenerateRequest, MealPlanService};
//! use dieetcoach_engine::PlannerConfig;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let fixture = PlannerFixture::from_file("demos/fixture.json").await?;
//!     let service = MealPlanService::in_memory(fixture.store(), PlannerConfig::global().clone());
//!
//!     let request = GenerateRequest {
//!         diet_profile_id: "anti-inflammatoir".to_owned(),
//!         start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default(),
//!         day_count: 7,
//!         meal_slots: vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
//!         seed: Some(42),
//!         exclude_inflammatory_triggers: true,
//!     };
//!     let generated = service.generate(&request).await?;
//!     println!("{} meals planned", generated.plan.meal_count());
//!     Ok(())
//! }
//! ```

/// Structured logging configuration
pub mod logging;

/// Nutrition lookup implementations
pub mod nutrition;

/// Storage collaborator traits and the in-memory store
pub mod providers;

/// Planning service layer
pub mod services;

pub use dieetcoach_core::{constants, errors, models};
