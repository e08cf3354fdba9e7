// ABOUTME: Whitelisted ingredient pools and usage telemetry for meal generation
// ABOUTME: Pools are read-only per generation run and borrowed by the generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Common view over protein/vegetable/fat items and flavor items
pub trait PoolEntry {
    /// Stable ingredient code
    fn code(&self) -> &str;
    /// Display name
    fn display_name(&self) -> &str;
}

/// A structural pool item (protein, vegetable or fat)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolItem {
    /// Stable ingredient code
    pub code: String,
    /// Display name
    pub display_name: String,
}

impl PoolItem {
    /// Create a pool item
    #[must_use]
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }
}

impl PoolEntry for PoolItem {
    fn code(&self) -> &str {
        &self.code
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// A flavor addition with its own quantity bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorPoolItem {
    /// Stable ingredient code
    pub code: String,
    /// Display name
    pub display_name: String,
    /// Default quantity in grams
    pub default_grams: f64,
    /// Lower bound in grams
    pub min_grams: f64,
    /// Upper bound in grams
    pub max_grams: f64,
}

impl PoolEntry for FlavorPoolItem {
    fn code(&self) -> &str {
        &self.code
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// All ingredient pools for one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIngredientPools {
    /// Protein sources
    #[serde(default)]
    pub protein: Vec<PoolItem>,
    /// Vegetables
    #[serde(default)]
    pub vegetable: Vec<PoolItem>,
    /// Added fats
    #[serde(default)]
    pub fat: Vec<PoolItem>,
    /// Herbs, spices and other flavor additions
    #[serde(default)]
    pub flavor: Vec<FlavorPoolItem>,
}

impl TemplateIngredientPools {
    /// Total number of items across all pools
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.protein.len() + self.vegetable.len() + self.fat.len() + self.flavor.len()
    }
}

/// Historical per-code usage counts used to favour under-used items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMaps {
    /// Protein code counts
    #[serde(default)]
    pub protein: HashMap<String, u32>,
    /// Vegetable code counts
    #[serde(default)]
    pub vegetable: HashMap<String, u32>,
    /// Fat code counts
    #[serde(default)]
    pub fat: HashMap<String, u32>,
    /// Flavor code counts
    #[serde(default)]
    pub flavor: HashMap<String, u32>,
}
