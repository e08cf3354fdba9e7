// ABOUTME: In-memory implementation of the rule, generation-input, and usage-history stores
// ABOUTME: Backs the CLI and tests; data is fixed at construction and shared read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use dieetcoach_core::errors::{AppError, AppResult};
use dieetcoach_core::models::{CategoryRow, RuleRow, UsageMaps};
use dieetcoach_engine::GenerationInputs;
use tracing::debug;

use super::{GenerationInputStore, RuleStore, UsageHistoryProvider};

/// Store holding every row in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    categories: Vec<CategoryRow>,
    rules: Vec<RuleRow>,
    default_inputs: Option<GenerationInputs>,
    inputs_by_diet: HashMap<String, GenerationInputs>,
    usage_by_diet: HashMap<String, UsageMaps>,
}

impl InMemoryStore {
    /// Create a store from category and rule rows
    #[must_use]
    pub fn new(categories: Vec<CategoryRow>, rules: Vec<RuleRow>) -> Self {
        Self {
            categories,
            rules,
            ..Self::default()
        }
    }

    /// Generation inputs served for every diet without its own entry
    #[must_use]
    pub fn with_default_inputs(mut self, inputs: GenerationInputs) -> Self {
        self.default_inputs = Some(inputs);
        self
    }

    /// Generation inputs served for one diet
    #[must_use]
    pub fn with_inputs_for(
        mut self,
        diet_key: impl Into<String>,
        inputs: GenerationInputs,
    ) -> Self {
        self.inputs_by_diet.insert(diet_key.into(), inputs);
        self
    }

    /// Usage history served for one diet
    #[must_use]
    pub fn with_usage_for(mut self, diet_key: impl Into<String>, usage: UsageMaps) -> Self {
        self.usage_by_diet.insert(diet_key.into(), usage);
        self
    }
}

#[async_trait]
impl RuleStore for InMemoryStore {
    async fn categories(&self) -> AppResult<Vec<CategoryRow>> {
        Ok(self.categories.clone())
    }

    async fn rules_for_profile(&self, diet_profile_id: &str) -> AppResult<Vec<RuleRow>> {
        let rules: Vec<RuleRow> = self
            .rules
            .iter()
            .filter(|rule| rule.diet_profile_id == diet_profile_id)
            .cloned()
            .collect();
        debug!(
            diet_profile_id,
            rule_count = rules.len(),
            "Loaded rule rows from memory"
        );
        Ok(rules)
    }
}

#[async_trait]
impl GenerationInputStore for InMemoryStore {
    async fn generation_inputs(&self, diet_key: &str) -> AppResult<GenerationInputs> {
        self.inputs_by_diet
            .get(diet_key)
            .or(self.default_inputs.as_ref())
            .cloned()
            .ok_or_else(|| {
                AppError::config_missing(format!("No generation inputs for diet '{diet_key}'"))
            })
    }
}

#[async_trait]
impl UsageHistoryProvider for InMemoryStore {
    async fn usage_history(
        &self,
        diet_key: &str,
        _before: NaiveDate,
    ) -> AppResult<Option<UsageMaps>> {
        Ok(self.usage_by_diet.get(diet_key).cloned())
    }
}
