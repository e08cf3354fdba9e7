// ABOUTME: Deterministic meal draft generator filling template slots from ingredient pools
// ABOUTME: Avoids already-used signatures within a retry budget, then accepts a forced repeat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Draft Generator
//!
//! A draft is one protein, two distinct vegetables, an optional fat and a
//! seeded number of flavor additions. Every choice is a pure function of the
//! seed, so the same inputs always give the same draft.
//!
//! Seed layout for attempt `a` on base seed `s`:
//! - attempt seed `t = s + a * 1000`
//! - protein uses `t`, vegetables `t + 1` and `t + 2`, fat `t + 3`
//! - flavor `i` uses `t + 4 + i`

use std::collections::HashSet;
use std::iter;

use chrono::NaiveDate;
use dieetcoach_core::constants::generation::{
    SEED_ATTEMPT_STRIDE, SEED_OFFSET_FAT, SEED_OFFSET_FLAVOR, SEED_OFFSET_VEG1, SEED_OFFSET_VEG2,
};
use dieetcoach_core::constants::keywords::FAT_LIKE_KEYWORDS;
use dieetcoach_core::models::{
    clamp_grams, DraftIngredient, IngredientRole, MealDraft, MealSlot, NamePattern, PoolEntry,
    PoolItem, RecipeTemplate, SlotRole, TemplateIngredientPools, UsageMaps,
};
use tracing::debug;

use super::naming::{meal_name, NameParts};
use super::seeded::pick;
use crate::config::GeneratorSettings;
use crate::errors::{PlanError, PoolKind};

/// Shared inputs for generating drafts within one slot
#[derive(Debug, Clone, Copy)]
pub struct DraftContext<'a> {
    /// Whitelisted pools
    pub pools: &'a TemplateIngredientPools,
    /// Ingredient caps and retry budget
    pub settings: &'a GeneratorSettings,
    /// Naming patterns
    pub name_patterns: &'a [NamePattern],
    /// Signatures to avoid
    pub used_signatures: &'a HashSet<String>,
    /// Usage counts; switches picks to least-used
    pub usage: Option<&'a UsageMaps>,
}

struct CorePick<'a> {
    protein: &'a PoolItem,
    veg1: &'a PoolItem,
    veg2: Option<&'a PoolItem>,
    seed: u64,
}

impl CorePick<'_> {
    fn signature(&self) -> String {
        let vegetables: Vec<&str> = iter::once(self.veg1.code.as_str())
            .chain(self.veg2.map(|v| v.code.as_str()))
            .collect();
        signature_of(&self.protein.code, &vegetables)
    }
}

/// Signature of a protein and vegetables in fixed order
#[must_use]
pub fn signature_of(protein: &str, vegetables: &[&str]) -> String {
    iter::once(protein)
        .chain(vegetables.iter().copied())
        .collect::<Vec<_>>()
        .join("|")
}

/// Generate one draft for `template` in `meal_slot` on `date`
///
/// # Errors
///
/// Returns [`PlanError::InsufficientIngredients`] if the protein or vegetable
/// pool is empty
pub fn generate_draft(
    ctx: &DraftContext<'_>,
    template: &RecipeTemplate,
    meal_slot: MealSlot,
    date: NaiveDate,
    seed: u64,
) -> Result<MealDraft, PlanError> {
    if ctx.pools.protein.is_empty() {
        return Err(PlanError::InsufficientIngredients {
            pool: PoolKind::Protein,
        });
    }
    if ctx.pools.vegetable.is_empty() {
        return Err(PlanError::InsufficientIngredients {
            pool: PoolKind::Vegetable,
        });
    }

    let attempts = ctx.settings.signature_retry_limit.max(1);
    let mut chosen: Option<(CorePick<'_>, bool)> = None;
    for attempt in 0..attempts {
        let attempt_seed = seed.wrapping_add(u64::from(attempt).wrapping_mul(SEED_ATTEMPT_STRIDE));
        let core = pick_core(ctx, attempt_seed)?;
        if !ctx.used_signatures.contains(&core.signature()) {
            chosen = Some((core, false));
            break;
        }
        chosen = Some((core, true));
    }
    let Some((core, forced_repeat)) = chosen else {
        return Err(PlanError::InsufficientIngredients {
            pool: PoolKind::Protein,
        });
    };
    if forced_repeat {
        debug!(
            template = %template.id,
            signature = %core.signature(),
            "Signature retries exhausted, accepting repeat"
        );
    }

    let draft = build_draft(ctx, template, meal_slot, date, &core, forced_repeat);
    Ok(draft)
}

fn pick_core<'a>(ctx: &DraftContext<'a>, seed: u64) -> Result<CorePick<'a>, PlanError> {
    let pools = ctx.pools;
    let protein = pick(&pools.protein, ctx.usage.map(|u| &u.protein), seed, &[]).ok_or(
        PlanError::InsufficientIngredients {
            pool: PoolKind::Protein,
        },
    )?;
    let vegetable_usage = ctx.usage.map(|u| &u.vegetable);
    let veg1 = pick(
        &pools.vegetable,
        vegetable_usage,
        seed.wrapping_add(SEED_OFFSET_VEG1),
        &[protein.code.as_str()],
    )
    .ok_or(PlanError::InsufficientIngredients {
        pool: PoolKind::Vegetable,
    })?;
    let veg2 = pick(
        &pools.vegetable,
        vegetable_usage,
        seed.wrapping_add(SEED_OFFSET_VEG2),
        &[protein.code.as_str(), veg1.code.as_str()],
    );
    Ok(CorePick {
        protein,
        veg1,
        veg2,
        seed,
    })
}

fn build_draft(
    ctx: &DraftContext<'_>,
    template: &RecipeTemplate,
    meal_slot: MealSlot,
    date: NaiveDate,
    core: &CorePick<'_>,
    forced_repeat: bool,
) -> MealDraft {
    let settings = ctx.settings;
    let mut ingredients = vec![line(
        core.protein,
        template.slot_or_fallback(SlotRole::Protein).grams(),
        IngredientRole::Protein,
    )];
    ingredients.push(line(
        core.veg1,
        template.slot_or_fallback(SlotRole::Vegetable1).grams(),
        IngredientRole::Vegetable,
    ));
    if let Some(veg2) = core.veg2 {
        ingredients.push(line(
            veg2,
            template.slot_or_fallback(SlotRole::Vegetable2).grams(),
            IngredientRole::Vegetable,
        ));
    }

    let mut picked: Vec<String> = ingredients.iter().map(|i| i.code.clone()).collect();

    if template.has_fat_slot()
        && ingredients.len() < settings.max_ingredients
        && !has_fat_like(&ingredients)
    {
        let exclude: Vec<&str> = picked.iter().map(String::as_str).collect();
        if let Some(fat) = pick(
            &ctx.pools.fat,
            ctx.usage.map(|u| &u.fat),
            core.seed.wrapping_add(SEED_OFFSET_FAT),
            &exclude,
        ) {
            ingredients.push(line(
                fat,
                template.slot_or_fallback(SlotRole::Fat).grams(),
                IngredientRole::Fat,
            ));
            picked.push(fat.code.clone());
        }
    }

    let remaining = settings.max_ingredients.saturating_sub(ingredients.len());
    let flavor_count = flavor_count(core.seed, date, settings.max_flavor_items)
        .min(remaining)
        .min(ctx.pools.flavor.len());
    let mut flavor_names: Vec<&str> = Vec::with_capacity(flavor_count);
    for i in 0..flavor_count {
        let exclude: Vec<&str> = picked.iter().map(String::as_str).collect();
        let offset = SEED_OFFSET_FLAVOR.wrapping_add(i as u64);
        let Some(flavor) = pick(
            &ctx.pools.flavor,
            ctx.usage.map(|u| &u.flavor),
            core.seed.wrapping_add(offset),
            &exclude,
        ) else {
            break;
        };
        ingredients.push(DraftIngredient {
            code: flavor.code.clone(),
            grams: clamp_grams(flavor.default_grams, flavor.min_grams, flavor.max_grams),
            display_name: flavor.display_name.clone(),
            role: IngredientRole::Flavor,
        });
        picked.push(flavor.code.clone());
        flavor_names.push(flavor.display_name());
    }

    ingredients.truncate(settings.max_ingredients.max(1));

    let parts = NameParts {
        protein: Some(core.protein.display_name.as_str()),
        veg1: Some(core.veg1.display_name.as_str()),
        veg2: core.veg2.map(|v| v.display_name.as_str()),
        flavor: flavor_names.first().copied(),
        template_name: &template.display_name,
    };
    let name = meal_name(ctx.name_patterns, &template.id, meal_slot, date, &parts);

    MealDraft {
        name,
        template_id: template.id.clone(),
        meal_slot,
        date,
        ingredient_refs: ingredients,
        signature: core.signature(),
        forced_repeat,
    }
}

fn line(item: &PoolItem, grams: f64, role: IngredientRole) -> DraftIngredient {
    DraftIngredient {
        code: item.code.clone(),
        grams,
        display_name: item.display_name.clone(),
        role,
    }
}

fn has_fat_like(ingredients: &[DraftIngredient]) -> bool {
    ingredients.iter().take(3).any(|ing| {
        let name = ing.display_name.to_lowercase();
        FAT_LIKE_KEYWORDS.iter().any(|kw| name.contains(kw))
    })
}

/// Flavor additions for a draft: `(seed + len(date string)) mod (max + 1)`
fn flavor_count(seed: u64, date: NaiveDate, max_flavor_items: usize) -> usize {
    let date_len = date.to_string().len() as u64;
    let modulus = max_flavor_items as u64 + 1;
    usize::try_from(seed.wrapping_add(date_len) % modulus).unwrap_or(0)
}
