// ABOUTME: Multi-day plan synthesizer scoring candidate drafts per slot under weekly caps
// ABOUTME: Builds immutable plans with quality metrics and supports single-meal regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Synthesizer
//!
//! For each date and each requested meal slot the synthesizer generates a
//! fixed number of candidate drafts, rotating through the templates, scores
//! them against the running [`WeeklyUsage`] and keeps the best one (ties keep
//! the first seen). Weeks are consecutive 7-day blocks from the start date.
//!
//! Slot seeds are `retry_seed + day * 97 + slot * 31`, candidate `k` adds
//! `k * 7`. All per-run state lives on the stack of one call, so independent
//! requests can be synthesized in parallel with [`PlanSynthesizer::synthesize_batch`].

use chrono::NaiveDate;
use dieetcoach_core::constants::generation::{
    SEED_CANDIDATE_STRIDE, SEED_DAY_STRIDE, SEED_SLOT_STRIDE, WEEK_LENGTH_DAYS,
};
use dieetcoach_core::models::{
    Day, Meal, MealDraft, MealSelection, MealSlot, NamePattern, Plan, QualityMetrics,
    RecipeTemplate, TemplateIngredientPools, UsageMaps,
};
use rayon::prelude::*;
use tracing::{debug, info};
use uuid::Uuid;

use super::draft::{generate_draft, DraftContext};
use super::inputs::{GenerationInputs, SynthesisRequest};
use super::scoring::{score_candidate, CandidateScore};
use super::usage::WeeklyUsage;
use crate::config::{GeneratorSettings, PlannerConfig};
use crate::errors::PlanError;
use crate::nutrition::{estimate_macros, NutritionLookup};

/// Seed offset separating regeneration from the original synthesis
const REGENERATION_SEED_OFFSET: u64 = 7919;

struct ScoredCandidate {
    draft: MealDraft,
    score: CandidateScore,
    candidates: usize,
}

impl ScoredCandidate {
    fn selection(&self) -> MealSelection {
        let draft = &self.draft;
        MealSelection {
            date: draft.date,
            meal_slot: draft.meal_slot,
            template_id: draft.template_id.clone(),
            protein_code: draft.protein_code().map(str::to_owned),
            score: self.score.score,
            candidates: self.candidates,
            reasons: self.score.reasons.clone(),
            forced_repeat: draft.forced_repeat,
        }
    }
}

/// Plan synthesizer over borrowed pools and templates
#[derive(Clone, Copy)]
pub struct PlanSynthesizer<'a> {
    pools: &'a TemplateIngredientPools,
    templates: &'a [RecipeTemplate],
    name_patterns: &'a [NamePattern],
    config: &'a PlannerConfig,
    settings: &'a GeneratorSettings,
    nutrition: Option<&'a dyn NutritionLookup>,
}

impl<'a> PlanSynthesizer<'a> {
    /// Create a synthesizer using `config` for settings and weights
    #[must_use]
    pub const fn new(
        pools: &'a TemplateIngredientPools,
        templates: &'a [RecipeTemplate],
        config: &'a PlannerConfig,
    ) -> Self {
        Self {
            pools,
            templates,
            name_patterns: &[],
            config,
            settings: &config.generator,
            nutrition: None,
        }
    }

    /// Create a synthesizer from stored inputs; stored settings override `config`
    #[must_use]
    pub fn from_inputs(inputs: &'a GenerationInputs, config: &'a PlannerConfig) -> Self {
        Self {
            pools: &inputs.pools,
            templates: &inputs.templates,
            name_patterns: &inputs.name_patterns,
            config,
            settings: inputs.settings.as_ref().unwrap_or(&config.generator),
            nutrition: None,
        }
    }

    /// Use `pools` instead of the ones given at construction
    #[must_use]
    pub const fn with_pools(mut self, pools: &'a TemplateIngredientPools) -> Self {
        self.pools = pools;
        self
    }

    /// Use naming patterns
    #[must_use]
    pub const fn with_name_patterns(mut self, name_patterns: &'a [NamePattern]) -> Self {
        self.name_patterns = name_patterns;
        self
    }

    /// Attach macro estimates from `lookup` to selected meals
    #[must_use]
    pub const fn with_nutrition(mut self, lookup: &'a dyn NutritionLookup) -> Self {
        self.nutrition = Some(lookup);
        self
    }

    /// Synthesize a plan for `request`
    ///
    /// # Errors
    ///
    /// Returns an error if no templates are configured, the request has no
    /// meal slots or an inverted date range, the settings are invalid, or a
    /// slot produced no candidate because a required pool is empty
    pub fn synthesize(
        &self,
        request: &SynthesisRequest,
        retry_seed: Option<u64>,
    ) -> Result<Plan, PlanError> {
        self.check_ready()?;
        if request.meal_slots.is_empty() {
            return Err(PlanError::NoMealSlots);
        }
        if request.end_date < request.start_date {
            return Err(PlanError::InvalidDateRange {
                start: request.start_date,
                end: request.end_date,
            });
        }

        let base_seed = retry_seed.unwrap_or(0);
        let week_length = WEEK_LENGTH_DAYS as usize;
        let mut weekly = WeeklyUsage::default();
        let mut selections = Vec::new();
        let mut rotation = 0_usize;
        let mut days = Vec::new();

        for (day_idx, date) in request.dates().into_iter().enumerate() {
            if day_idx > 0 && day_idx % week_length == 0 {
                debug!(%date, "Starting new week, resetting usage counters");
                weekly.reset();
            }
            let mut meals = Vec::with_capacity(request.meal_slots.len());
            for (slot_idx, meal_slot) in request.meal_slots.iter().copied().enumerate() {
                let slot_seed = base_seed
                    .wrapping_add((day_idx as u64).wrapping_mul(SEED_DAY_STRIDE))
                    .wrapping_add((slot_idx as u64).wrapping_mul(SEED_SLOT_STRIDE));
                let winner = self.select_for_slot(
                    date,
                    meal_slot,
                    slot_seed,
                    rotation,
                    &weekly,
                    request.usage_history.as_ref(),
                )?;
                rotation = rotation.wrapping_add(1);
                weekly.record_draft(&winner.draft);
                selections.push(winner.selection());
                meals.push(self.promote(winner.draft));
            }
            days.push(Day { date, meals });
        }

        let quality =
            QualityMetrics::tally(&days, selections, self.config.scoring.top_proteins_reported);
        info!(
            diet = %request.diet_key,
            days = days.len(),
            forced_repeats = quality.forced_repeats,
            "Meal plan synthesized"
        );
        Ok(Plan::new(request.diet_key.clone(), days, Some(quality))?)
    }

    /// Synthesize independent requests in parallel
    ///
    /// Results keep the order of `requests`.
    #[must_use]
    pub fn synthesize_batch(
        &self,
        requests: &[SynthesisRequest],
        retry_seed: Option<u64>,
    ) -> Vec<Result<Plan, PlanError>> {
        requests
            .par_iter()
            .map(|request| self.synthesize(request, retry_seed))
            .collect()
    }

    /// Replace one meal of `plan` with a freshly generated one
    ///
    /// Usage is rebuilt from the other meals of the same week and the
    /// replaced meal's signature is avoided. `plan` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the meal is not in the plan or no candidate could
    /// be generated
    pub fn regenerate_meal(
        &self,
        plan: &Plan,
        meal_id: Uuid,
        usage_history: Option<&UsageMaps>,
        retry_seed: Option<u64>,
    ) -> Result<Plan, PlanError> {
        self.check_ready()?;
        let (date, meal) = plan
            .find_meal(meal_id)
            .ok_or(PlanError::MealNotFound(meal_id))?;

        let start = plan.metadata.start_date;
        let week_of = |d: NaiveDate| (d - start).num_days() / i64::from(WEEK_LENGTH_DAYS);
        let target_week = week_of(date);
        let mut weekly = WeeklyUsage::default();
        for (other_date, other) in plan.meals() {
            if other.id != meal_id && week_of(other_date) == target_week {
                weekly.record_meal(other);
            }
        }
        weekly.reserve_signature(meal.signature.clone());

        let day_offset = u64::try_from((date - start).num_days()).unwrap_or(0);
        let seed = retry_seed
            .unwrap_or(0)
            .wrapping_add(REGENERATION_SEED_OFFSET)
            .wrapping_add(day_offset.wrapping_mul(SEED_DAY_STRIDE));
        let rotation = self
            .templates
            .iter()
            .position(|t| t.id == meal.template_id)
            .map_or(0, |idx| idx + 1);

        let winner =
            self.select_for_slot(date, meal.meal_slot, seed, rotation, &weekly, usage_history)?;
        debug!(
            %meal_id,
            template = %winner.draft.template_id,
            "Meal regenerated"
        );
        let selection = winner.selection();
        let replacement = self.promote(winner.draft);
        Ok(plan.with_meal_reselected(
            meal_id,
            replacement,
            selection,
            self.config.scoring.top_proteins_reported,
        )?)
    }

    fn check_ready(&self) -> Result<(), PlanError> {
        if self.templates.is_empty() {
            return Err(PlanError::NoTemplates);
        }
        self.settings.validate()?;
        Ok(())
    }

    fn select_for_slot(
        &self,
        date: NaiveDate,
        meal_slot: MealSlot,
        slot_seed: u64,
        rotation: usize,
        weekly: &WeeklyUsage,
        usage_history: Option<&UsageMaps>,
    ) -> Result<ScoredCandidate, PlanError> {
        let merged_usage = usage_history.map(|history| weekly.merged_with(history));
        let ctx = DraftContext {
            pools: self.pools,
            settings: self.settings,
            name_patterns: self.name_patterns,
            used_signatures: weekly.signatures(),
            usage: merged_usage.as_ref(),
        };

        let mut best: Option<ScoredCandidate> = None;
        let mut generated = 0_usize;
        let mut last_error = None;
        for k in 0..self.settings.candidates_per_slot {
            let template = &self.templates[(rotation + k) % self.templates.len()];
            let seed = slot_seed.wrapping_add((k as u64).wrapping_mul(SEED_CANDIDATE_STRIDE));
            let draft = match generate_draft(&ctx, template, meal_slot, date, seed) {
                Ok(draft) => draft,
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            };
            generated += 1;
            let score = score_candidate(&draft, weekly, self.settings, &self.config.scoring);
            let keep_current =
                matches!(&best, Some(current) if current.score.score >= score.score);
            if !keep_current {
                best = Some(ScoredCandidate {
                    draft,
                    score,
                    candidates: 0,
                });
            }
        }

        match best {
            Some(mut winner) => {
                winner.candidates = generated;
                Ok(winner)
            }
            None => Err(last_error.unwrap_or(PlanError::NoTemplates)),
        }
    }

    fn promote(&self, draft: MealDraft) -> Meal {
        let macros = self
            .nutrition
            .and_then(|lookup| estimate_macros(lookup, &draft.ingredient_refs));
        Meal::from_draft(draft, macros)
    }
}
