// ABOUTME: JSON fixture bundling rule rows, generation inputs, usage history, and nutrition data
// ABOUTME: Loaded by the CLI and tests to build an in-memory store and a nutrition table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::path::Path;

use dieetcoach_core::errors::{AppError, AppResult};
use dieetcoach_core::models::{CategoryRow, RuleRow, UsageMaps};
use dieetcoach_engine::GenerationInputs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use super::InMemoryStore;
use crate::nutrition::{MacrosPer100g, NutritionTable};

/// Everything a planning run needs, in one serializable document
///
/// ```json
/// {
///   "categories": [{ "id": "c1", "code": "noten", "label": "Noten", "terms": ["walnoot"] }],
///   "rules": [{ "id": "r1", "dietProfileId": "keto", "categoryId": "c1", "action": "drop" }],
///   "generation": { "pools": { ... }, "templates": [ ... ] },
///   "usageHistory": { "keto": { "protein": { "kipfilet": 3 } } },
///   "nutrition": { "kipfilet": { "calories": 110, "proteinG": 23, "carbsG": 0, "fatG": 1.5 } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerFixture {
    /// Ingredient categories
    #[serde(default)]
    pub categories: Vec<CategoryRow>,
    /// Rule rows of every profile
    #[serde(default)]
    pub rules: Vec<RuleRow>,
    /// Generation inputs shared by all diets
    #[serde(default)]
    pub generation: Option<GenerationInputs>,
    /// Per-diet generation inputs, taking precedence over `generation`
    #[serde(default)]
    pub generation_by_diet: HashMap<String, GenerationInputs>,
    /// Historical usage per diet
    #[serde(default)]
    pub usage_history: HashMap<String, UsageMaps>,
    /// Macros per 100 g keyed by ingredient code
    #[serde(default)]
    pub nutrition: HashMap<String, MacrosPer100g>,
}

impl PlannerFixture {
    /// Parse a fixture from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the document is malformed
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed
    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Cannot read fixture {}", path.display())).with_source(e)
        })?;
        let fixture = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            categories = fixture.categories.len(),
            rules = fixture.rules.len(),
            nutrition_entries = fixture.nutrition.len(),
            "Loaded planner fixture"
        );
        Ok(fixture)
    }

    /// In-memory store serving this fixture's rows and inputs
    #[must_use]
    pub fn store(&self) -> InMemoryStore {
        let mut store = InMemoryStore::new(self.categories.clone(), self.rules.clone());
        if let Some(inputs) = &self.generation {
            store = store.with_default_inputs(inputs.clone());
        }
        for (diet_key, inputs) in &self.generation_by_diet {
            store = store.with_inputs_for(diet_key.clone(), inputs.clone());
        }
        for (diet_key, usage) in &self.usage_history {
            store = store.with_usage_for(diet_key.clone(), usage.clone());
        }
        store
    }

    /// Nutrition table built from this fixture
    #[must_use]
    pub fn nutrition_table(&self) -> NutritionTable {
        NutritionTable::new(self.nutrition.iter().map(|(code, macros)| (code, *macros)))
    }
}
