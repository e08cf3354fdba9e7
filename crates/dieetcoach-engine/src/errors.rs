// ABOUTME: Plan generation error types with actionable messages
// ABOUTME: Converts into the unified AppError for callers outside the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use dieetcoach_core::errors::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;

/// Pool whose emptiness blocks generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Protein pool
    Protein,
    /// Vegetable pool
    Vegetable,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protein => f.write_str("protein"),
            Self::Vegetable => f.write_str("vegetable"),
        }
    }
}

/// Errors raised by draft generation and plan synthesis
#[derive(Debug, Error)]
pub enum PlanError {
    /// A required pool is empty
    #[error("The {pool} pool is empty; expand diet rules or add recipes")]
    InsufficientIngredients {
        /// The empty pool
        pool: PoolKind,
    },

    /// No templates to build meals from
    #[error("No active recipe templates configured; add recipes")]
    NoTemplates,

    /// Request asked for zero meal slots
    #[error("No meal slots requested")]
    NoMealSlots,

    /// End date precedes start date
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Requested start
        start: NaiveDate,
        /// Requested end
        end: NaiveDate,
    },

    /// Meal to regenerate is not part of the plan
    #[error("Meal {0} not found in plan")]
    MealNotFound(Uuid),

    /// Generator settings failed validation
    #[error("Invalid generator configuration: {0}")]
    Config(#[from] ConfigError),

    /// Plan assembly failed
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        match error {
            PlanError::InsufficientIngredients { pool } => {
                Self::insufficient_ingredients(pool.to_string())
            }
            PlanError::NoTemplates => Self::config_missing(error.to_string()),
            PlanError::NoMealSlots | PlanError::InvalidDateRange { .. } => {
                Self::invalid_input(error.to_string())
            }
            PlanError::MealNotFound(meal_id) => Self::not_found(format!("Meal {meal_id}")),
            PlanError::Config(e) => Self::config(e.to_string()),
            PlanError::App(e) => e,
        }
    }
}
