// ABOUTME: Nutrition lookup seam used to attach macro estimates to selected meals
// ABOUTME: Lookup failures are absorbed: the meal simply carries no estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::models::{DraftIngredient, MacroEstimate};
use thiserror::Error;
use tracing::warn;

/// Errors a nutrition lookup may report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionLookupError {
    /// No nutrition data for an ingredient code
    #[error("No nutrition data for ingredient '{0}'")]
    UnknownIngredient(String),
    /// The backing service could not answer
    #[error("Nutrition service unavailable: {0}")]
    Unavailable(String),
}

/// Computes macros for a list of `(ingredient code, grams)` pairs
pub trait NutritionLookup: Send + Sync {
    /// Macro estimate for the whole list
    ///
    /// # Errors
    ///
    /// Returns an error if any ingredient cannot be resolved
    fn compute_macros(&self, items: &[(&str, f64)]) -> Result<MacroEstimate, NutritionLookupError>;
}

/// Best-effort macro estimate for a meal's ingredients
#[must_use]
pub fn estimate_macros(
    lookup: &dyn NutritionLookup,
    ingredients: &[DraftIngredient],
) -> Option<MacroEstimate> {
    let items: Vec<(&str, f64)> = ingredients
        .iter()
        .map(|ing| (ing.code.as_str(), ing.grams))
        .collect();
    match lookup.compute_macros(&items) {
        Ok(estimate) => Some(estimate),
        Err(e) => {
            warn!(error = %e, "Macro estimate unavailable, continuing without it");
            None
        }
    }
}
