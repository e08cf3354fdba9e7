// ABOUTME: Candidate draft scoring against weekly protein and template usage
// ABOUTME: Rewards variety and penalises proteins or templates at their weekly cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::models::MealDraft;

use super::usage::WeeklyUsage;
use crate::config::{GeneratorSettings, ScoringWeights};

/// Score of one candidate with the reasons behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateScore {
    /// Total score, higher is better
    pub score: i32,
    /// Short human-readable reasons
    pub reasons: Vec<String>,
}

/// Score `draft` given this week's usage
#[must_use]
pub fn score_candidate(
    draft: &MealDraft,
    usage: &WeeklyUsage,
    settings: &GeneratorSettings,
    weights: &ScoringWeights,
) -> CandidateScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    if let Some(protein) = draft.protein_code() {
        let used = usage.protein_count(protein);
        if used == 0 {
            score += weights.protein_new_bonus;
            reasons.push(format!("protein '{protein}' new this week"));
        } else if used >= settings.protein_repeat_cap_7d {
            score += weights.protein_at_cap_penalty;
            reasons.push(format!("protein '{protein}' at weekly cap ({used})"));
        }
    }

    let template_used = usage.template_count(&draft.template_id);
    if template_used < settings.template_repeat_cap_7d {
        score += weights.template_under_cap_bonus;
        reasons.push(format!("template '{}' under weekly cap", draft.template_id));
    } else {
        score += weights.template_at_cap_penalty;
        reasons.push(format!(
            "template '{}' at weekly cap ({template_used})",
            draft.template_id
        ));
    }

    if draft.forced_repeat {
        reasons.push("signature repeated after retries".to_owned());
    }

    CandidateScore { score, reasons }
}
