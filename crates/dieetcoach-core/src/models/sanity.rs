// ABOUTME: Issues reported by the post-generation sanity validator
// ABOUTME: Issues are advisory; the caller decides whether to regenerate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of sanity problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SanityIssueCode {
    /// Meal name is empty or whitespace
    EmptyName,
    /// Meal name is a placeholder or too short
    PlaceholderName,
    /// Ingredient count outside the accepted range
    IngredientCountOutOfRange,
    /// An ingredient quantity outside the accepted range
    QuantityOutOfRange,
    /// Same ingredient code twice within one meal
    DuplicateIngredient,
    /// A day without meals
    EmptyDay,
}

impl SanityIssueCode {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::PlaceholderName => "PLACEHOLDER_NAME",
            Self::IngredientCountOutOfRange => "INGREDIENT_COUNT_OUT_OF_RANGE",
            Self::QuantityOutOfRange => "QUANTITY_OUT_OF_RANGE",
            Self::DuplicateIngredient => "DUPLICATE_INGREDIENT",
            Self::EmptyDay => "EMPTY_DAY",
        }
    }
}

/// One sanity finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityIssue {
    /// Issue kind
    pub code: SanityIssueCode,
    /// Day the issue was found on
    pub date: NaiveDate,
    /// Meal the issue concerns, when meal-scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<Uuid>,
    /// Name of the meal, when meal-scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_name: Option<String>,
    /// Human-readable description
    pub message: String,
}
