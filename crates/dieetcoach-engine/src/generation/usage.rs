// ABOUTME: Rolling weekly usage accumulator for proteins, templates, and signatures
// ABOUTME: Feeds candidate scoring and signature avoidance during plan synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{HashMap, HashSet};

use dieetcoach_core::models::{DraftIngredient, IngredientRole, Meal, MealDraft, UsageMaps};

/// Usage within the current 7-day block of a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyUsage {
    proteins: HashMap<String, u32>,
    vegetables: HashMap<String, u32>,
    fats: HashMap<String, u32>,
    flavors: HashMap<String, u32>,
    templates: HashMap<String, u32>,
    signatures: HashSet<String>,
}

impl WeeklyUsage {
    /// Record a selected draft
    pub fn record_draft(&mut self, draft: &MealDraft) {
        self.record(&draft.template_id, &draft.ingredient_refs, &draft.signature);
    }

    /// Record a meal that already sits in a plan
    pub fn record_meal(&mut self, meal: &Meal) {
        self.record(&meal.template_id, &meal.ingredients, &meal.signature);
    }

    /// Mark a signature as used without counting anything else
    pub fn reserve_signature(&mut self, signature: impl Into<String>) {
        self.signatures.insert(signature.into());
    }

    fn record(&mut self, template_id: &str, ingredients: &[DraftIngredient], signature: &str) {
        for ing in ingredients {
            let counts = match ing.role {
                IngredientRole::Protein => &mut self.proteins,
                IngredientRole::Vegetable => &mut self.vegetables,
                IngredientRole::Fat => &mut self.fats,
                IngredientRole::Flavor => &mut self.flavors,
            };
            *counts.entry(ing.code.clone()).or_insert(0) += 1;
        }
        *self.templates.entry(template_id.to_owned()).or_insert(0) += 1;
        self.signatures.insert(signature.to_owned());
    }

    /// Times `code` was used as protein this week
    #[must_use]
    pub fn protein_count(&self, code: &str) -> u32 {
        self.proteins.get(code).copied().unwrap_or(0)
    }

    /// Times `template_id` was used this week
    #[must_use]
    pub fn template_count(&self, template_id: &str) -> u32 {
        self.templates.get(template_id).copied().unwrap_or(0)
    }

    /// Signatures used this week
    #[must_use]
    pub const fn signatures(&self) -> &HashSet<String> {
        &self.signatures
    }

    /// Start a new week
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Historical usage plus this week's counts
    #[must_use]
    pub fn merged_with(&self, history: &UsageMaps) -> UsageMaps {
        UsageMaps {
            protein: merge(&history.protein, &self.proteins),
            vegetable: merge(&history.vegetable, &self.vegetables),
            fat: merge(&history.fat, &self.fats),
            flavor: merge(&history.flavor, &self.flavors),
        }
    }
}

fn merge(base: &HashMap<String, u32>, extra: &HashMap<String, u32>) -> HashMap<String, u32> {
    let mut merged = base.clone();
    for (code, count) in extra {
        *merged.entry(code.clone()).or_insert(0) += count;
    }
    merged
}
