// ABOUTME: Draft generator and synthesizer settings
// ABOUTME: Ingredient caps, signature retry budget, weekly repeat caps, candidates per slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::constants::generation;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Settings the storage provider supplies alongside pools and templates
///
/// Absent fields deserialize to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Maximum ingredients per meal
    pub max_ingredients: usize,
    /// Maximum flavor additions per meal
    pub max_flavor_items: usize,
    /// Attempts at an unused signature before accepting a repeat
    pub signature_retry_limit: u32,
    /// Weekly cap on one protein
    #[serde(rename = "proteinRepeatCap7d")]
    pub protein_repeat_cap_7d: u32,
    /// Weekly cap on one template
    #[serde(rename = "templateRepeatCap7d")]
    pub template_repeat_cap_7d: u32,
    /// Candidate drafts generated per slot
    pub candidates_per_slot: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_ingredients: generation::DEFAULT_MAX_INGREDIENTS,
            max_flavor_items: generation::DEFAULT_MAX_FLAVOR_ITEMS,
            signature_retry_limit: generation::DEFAULT_SIGNATURE_RETRY_LIMIT,
            protein_repeat_cap_7d: generation::DEFAULT_PROTEIN_REPEAT_CAP_7D,
            template_repeat_cap_7d: generation::DEFAULT_TEMPLATE_REPEAT_CAP_7D,
            candidates_per_slot: generation::DEFAULT_CANDIDATES_PER_SLOT,
        }
    }
}

impl GeneratorSettings {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns an error if a meal could not hold protein plus two vegetables,
    /// or if no candidates or retries would be generated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_ingredients < 3 {
            return Err(ConfigError::InvalidRange(
                "max_ingredients must leave room for protein and two vegetables",
            ));
        }
        if self.candidates_per_slot == 0 {
            return Err(ConfigError::InvalidRange("candidates_per_slot must be at least 1"));
        }
        if self.signature_retry_limit == 0 {
            return Err(ConfigError::InvalidRange("signature_retry_limit must be at least 1"));
        }
        Ok(())
    }
}
