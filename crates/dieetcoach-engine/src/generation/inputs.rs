// ABOUTME: Generation inputs returned by the pool and template storage provider
// ABOUTME: Bundles pools, templates, optional settings overrides, and name patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use dieetcoach_core::models::{
    MealSlot, NamePattern, RecipeTemplate, TemplateIngredientPools, UsageMaps,
};
use serde::{Deserialize, Serialize};

use crate::config::GeneratorSettings;

/// Everything the synthesizer needs besides the request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInputs {
    /// Whitelisted ingredient pools
    #[serde(default)]
    pub pools: TemplateIngredientPools,
    /// Active recipe templates in rotation order
    #[serde(default)]
    pub templates: Vec<RecipeTemplate>,
    /// Stored generator settings; override the global configuration for this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<GeneratorSettings>,
    /// Meal naming patterns
    #[serde(default)]
    pub name_patterns: Vec<NamePattern>,
}

/// A request to synthesize a plan over a contiguous date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    /// Diet the plan is generated for
    pub diet_key: String,
    /// First date, inclusive
    pub start_date: NaiveDate,
    /// Last date, inclusive
    pub end_date: NaiveDate,
    /// Meal slots to fill each day, in order
    pub meal_slots: Vec<MealSlot>,
    /// Historical usage to bias picks toward under-used items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_history: Option<UsageMaps>,
}

impl SynthesisRequest {
    /// Request covering `day_count` days from `start_date`
    ///
    /// A zero `day_count` is treated as a single day.
    #[must_use]
    pub fn for_days(
        diet_key: impl Into<String>,
        start_date: NaiveDate,
        day_count: u32,
        meal_slots: Vec<MealSlot>,
    ) -> Self {
        let span = u64::from(day_count.max(1) - 1);
        let end_date = start_date
            .checked_add_days(Days::new(span))
            .unwrap_or(start_date);
        Self {
            diet_key: diet_key.into(),
            start_date,
            end_date,
            meal_slots,
            usage_history: None,
        }
    }

    /// Attach historical usage counts
    #[must_use]
    pub fn with_usage_history(mut self, usage: UsageMaps) -> Self {
        self.usage_history = Some(usage);
        self
    }

    /// Dates in the range, empty if the range is inverted
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .collect()
    }
}
