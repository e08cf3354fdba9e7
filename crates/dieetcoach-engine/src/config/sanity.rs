// ABOUTME: Thresholds for the post-generation sanity validator
// ABOUTME: Ingredient count and gram bounds, name length, and placeholder stoplist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::constants::sanity;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Sanity validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanityThresholds {
    /// Minimum ingredients per meal
    pub min_ingredients: usize,
    /// Maximum ingredients per meal
    pub max_ingredients: usize,
    /// Minimum grams per ingredient
    pub min_grams: f64,
    /// Maximum grams per ingredient
    pub max_grams: f64,
    /// Shortest acceptable meal name
    pub min_name_chars: usize,
    /// Lowercase names treated as placeholders
    pub placeholder_names: Vec<String>,
}

impl Default for SanityThresholds {
    fn default() -> Self {
        Self {
            min_ingredients: sanity::MIN_INGREDIENTS_PER_MEAL,
            max_ingredients: sanity::MAX_INGREDIENTS_PER_MEAL,
            min_grams: sanity::MIN_GRAMS_PER_INGREDIENT,
            max_grams: sanity::MAX_GRAMS_PER_INGREDIENT,
            min_name_chars: sanity::MIN_MEAL_NAME_CHARS,
            placeholder_names: sanity::PLACEHOLDER_MEAL_NAMES
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
        }
    }
}

impl SanityThresholds {
    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if a lower bound exceeds its upper bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ingredients > self.max_ingredients {
            return Err(ConfigError::InvalidRange(
                "sanity min_ingredients must be <= max_ingredients",
            ));
        }
        if self.min_grams > self.max_grams {
            return Err(ConfigError::InvalidRange("sanity min_grams must be <= max_grams"));
        }
        Ok(())
    }
}
