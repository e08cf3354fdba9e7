// ABOUTME: Table-driven nutrition lookup with macros per 100 g for each ingredient code
// ABOUTME: Unknown codes are reported as lookup errors so the meal is left without an estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use dieetcoach_core::models::MacroEstimate;
use dieetcoach_engine::{NutritionLookup, NutritionLookupError};
use serde::{Deserialize, Serialize};

const GRAMS_PER_REFERENCE: f64 = 100.0;

/// Macronutrients of 100 g of an ingredient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacrosPer100g {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl MacrosPer100g {
    /// Create an entry
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Scale to `grams`
    #[must_use]
    pub fn for_grams(&self, grams: f64) -> MacroEstimate {
        let factor = grams / GRAMS_PER_REFERENCE;
        MacroEstimate {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

/// Nutrition lookup backed by a code-keyed table
///
/// Codes are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionTable {
    entries: HashMap<String, MacrosPer100g>,
}

impl NutritionTable {
    /// Build a table from `(code, macros)` pairs
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MacrosPer100g)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, macros)| (code.as_ref().trim().to_lowercase(), macros))
                .collect(),
        }
    }

    /// Entry for `code`
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&MacrosPer100g> {
        self.entries.get(&code.trim().to_lowercase())
    }

    /// Number of known ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NutritionLookup for NutritionTable {
    fn compute_macros(
        &self,
        items: &[(&str, f64)],
    ) -> Result<MacroEstimate, NutritionLookupError> {
        let mut total = MacroEstimate::default();
        for (code, grams) in items {
            let per_100g = self
                .get(code)
                .ok_or_else(|| NutritionLookupError::UnknownIngredient((*code).to_owned()))?;
            total += per_100g.for_grams(*grams);
        }
        Ok(total)
    }
}
