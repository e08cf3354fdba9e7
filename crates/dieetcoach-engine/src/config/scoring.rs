// ABOUTME: Candidate scoring weights for weekly variety
// ABOUTME: Bonuses for fresh proteins and templates, penalties at the weekly caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::constants::scoring;
use serde::{Deserialize, Serialize};

/// Weights applied when scoring candidate drafts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Protein not yet used this week
    pub protein_new_bonus: i32,
    /// Template below its weekly cap
    pub template_under_cap_bonus: i32,
    /// Protein at or above its weekly cap
    pub protein_at_cap_penalty: i32,
    /// Template at or above its weekly cap
    pub template_at_cap_penalty: i32,
    /// How many proteins to list in quality metrics
    pub top_proteins_reported: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            protein_new_bonus: scoring::PROTEIN_NEW_BONUS,
            template_under_cap_bonus: scoring::TEMPLATE_UNDER_CAP_BONUS,
            protein_at_cap_penalty: scoring::PROTEIN_AT_CAP_PENALTY,
            template_at_cap_penalty: scoring::TEMPLATE_AT_CAP_PENALTY,
            top_proteins_reported: scoring::TOP_PROTEINS_REPORTED,
        }
    }
}
