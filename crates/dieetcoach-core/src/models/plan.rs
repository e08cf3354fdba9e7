// ABOUTME: Meal drafts, meals, days, and multi-day plans with quality metrics
// ABOUTME: A Plan is immutable once produced; edits build a new Plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::AddAssign;
use uuid::Uuid;

use super::template::MealSlot;
use crate::constants::scoring::TOP_PROTEINS_REPORTED;
use crate::errors::{AppError, AppResult};

/// Which pool an ingredient in a meal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientRole {
    /// Protein slot
    Protein,
    /// One of the two vegetable slots
    Vegetable,
    /// Fat slot
    Fat,
    /// Flavor addition
    Flavor,
}

/// One ingredient line of a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftIngredient {
    /// Stable ingredient code
    pub code: String,
    /// Quantity in grams
    pub grams: f64,
    /// Display name
    pub display_name: String,
    /// Pool the ingredient was drawn from
    pub role: IngredientRole,
}

/// A candidate meal produced by the draft generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDraft {
    /// Rendered meal name
    pub name: String,
    /// Template the draft was built from
    pub template_id: String,
    /// Meal slot the draft fills
    pub meal_slot: MealSlot,
    /// Day the draft is planned for
    pub date: NaiveDate,
    /// Ingredient lines, protein first
    pub ingredient_refs: Vec<DraftIngredient>,
    /// Protein+veg+veg signature in fixed order
    pub signature: String,
    /// Signature retries ran out and a used signature was accepted
    pub forced_repeat: bool,
}

impl MealDraft {
    /// Code of the protein ingredient
    #[must_use]
    pub fn protein_code(&self) -> Option<&str> {
        self.codes_with_role(IngredientRole::Protein).next()
    }

    /// Codes of the vegetable ingredients
    #[must_use]
    pub fn vegetable_codes(&self) -> Vec<&str> {
        self.codes_with_role(IngredientRole::Vegetable).collect()
    }

    /// Code of the fat ingredient
    #[must_use]
    pub fn fat_code(&self) -> Option<&str> {
        self.codes_with_role(IngredientRole::Fat).next()
    }

    fn codes_with_role(&self, role: IngredientRole) -> impl Iterator<Item = &str> {
        self.ingredient_refs
            .iter()
            .filter(move |ing| ing.role == role)
            .map(|ing| ing.code.as_str())
    }
}

/// Estimated macronutrients for a meal or a day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroEstimate {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl AddAssign for MacroEstimate {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
    }
}

/// A selected meal within a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Generated identifier
    pub id: Uuid,
    /// Meal name
    pub name: String,
    /// Meal slot
    pub meal_slot: MealSlot,
    /// Template the meal was built from
    pub template_id: String,
    /// Ingredient lines
    pub ingredients: Vec<DraftIngredient>,
    /// Protein+veg+veg signature
    pub signature: String,
    /// Macro estimate; absent when the nutrition lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_macros: Option<MacroEstimate>,
}

impl Meal {
    /// Promote a winning draft into a meal
    #[must_use]
    pub fn from_draft(draft: MealDraft, estimated_macros: Option<MacroEstimate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            meal_slot: draft.meal_slot,
            template_id: draft.template_id,
            ingredients: draft.ingredient_refs,
            signature: draft.signature,
            estimated_macros,
        }
    }

    /// Code of the protein ingredient
    #[must_use]
    pub fn protein_code(&self) -> Option<&str> {
        self.ingredients
            .iter()
            .find(|ing| ing.role == IngredientRole::Protein)
            .map(|ing| ing.code.as_str())
    }
}

/// All meals planned for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// Calendar date
    pub date: NaiveDate,
    /// Meals in slot order
    pub meals: Vec<Meal>,
}

impl Day {
    /// Sum of the available meal macro estimates
    ///
    /// Returns `None` when no meal of the day carries an estimate.
    #[must_use]
    pub fn total_macros(&self) -> Option<MacroEstimate> {
        self.meals
            .iter()
            .filter_map(|meal| meal.estimated_macros)
            .fold(None, |acc, m| {
                let mut total = acc.unwrap_or_default();
                total += m;
                Some(total)
            })
    }
}

/// A ranked usage count for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCount {
    /// Ingredient code or template id
    pub code: String,
    /// Occurrences in the plan
    pub count: u32,
}

/// Why a candidate won its slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSelection {
    /// Date of the slot
    pub date: NaiveDate,
    /// Meal slot
    pub meal_slot: MealSlot,
    /// Template of the winner
    pub template_id: String,
    /// Protein of the winner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_code: Option<String>,
    /// Winning score
    pub score: i32,
    /// Number of candidates considered
    pub candidates: usize,
    /// Short human-readable reasons
    pub reasons: Vec<String>,
    /// The winner repeats a signature already used that week
    #[serde(default)]
    pub forced_repeat: bool,
}

impl MealSelection {
    /// Record for a meal placed without candidate scoring
    #[must_use]
    pub fn unscored(date: NaiveDate, meal: &Meal) -> Self {
        Self {
            date,
            meal_slot: meal.meal_slot,
            template_id: meal.template_id.clone(),
            protein_code: meal.protein_code().map(str::to_owned),
            score: 0,
            candidates: 0,
            reasons: Vec::new(),
            forced_repeat: false,
        }
    }
}

/// Aggregate diagnostics attached to a plan; never gates success
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    /// Selected meals whose signature had to repeat
    pub forced_repeats: u32,
    /// Most used proteins, descending
    pub top_proteins: Vec<UsageCount>,
    /// Template usage, descending
    pub template_usage: Vec<UsageCount>,
    /// Per-meal selection rationale
    pub selections: Vec<MealSelection>,
}

impl QualityMetrics {
    /// Count proteins and templates over the meals of `days`
    ///
    /// `selections` must follow the meal order of `days`; forced repeats are
    /// taken from them.
    #[must_use]
    pub fn tally(days: &[Day], selections: Vec<MealSelection>, top_proteins: usize) -> Self {
        let mut proteins: HashMap<&str, u32> = HashMap::new();
        let mut templates: HashMap<&str, u32> = HashMap::new();
        for meal in days.iter().flat_map(|day| &day.meals) {
            if let Some(protein) = meal.protein_code() {
                *proteins.entry(protein).or_insert(0) += 1;
            }
            *templates.entry(meal.template_id.as_str()).or_insert(0) += 1;
        }

        let mut top = ranked(proteins);
        top.truncate(top_proteins);
        let forced_repeats = selections.iter().filter(|s| s.forced_repeat).count();
        Self {
            forced_repeats: u32::try_from(forced_repeats).unwrap_or(u32::MAX),
            top_proteins: top,
            template_usage: ranked(templates),
            selections,
        }
    }
}

fn ranked(counts: HashMap<&str, u32>) -> Vec<UsageCount> {
    let mut ranked: Vec<UsageCount> = counts
        .into_iter()
        .map(|(code, count)| UsageCount {
            code: code.to_owned(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
    ranked
}

/// Plan-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetadata {
    /// When the plan was produced
    pub generated_at: DateTime<Utc>,
    /// Diet the plan was generated for
    pub diet_key: String,
    /// First planned date
    pub start_date: NaiveDate,
    /// Last planned date
    pub end_date: NaiveDate,
    /// Number of days
    pub day_count: usize,
    /// Number of meals
    pub meal_count: usize,
}

/// A finished multi-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Aggregate metadata
    pub metadata: PlanMetadata,
    /// Days in date order
    pub days: Vec<Day>,
    /// Generation diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityMetrics>,
}

impl Plan {
    /// Assemble a plan and derive its metadata
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is empty
    pub fn new(
        diet_key: impl Into<String>,
        days: Vec<Day>,
        quality: Option<QualityMetrics>,
    ) -> AppResult<Self> {
        let (Some(first), Some(last)) = (days.first(), days.last()) else {
            return Err(AppError::invalid_input("A plan needs at least one day"));
        };
        let metadata = PlanMetadata {
            generated_at: Utc::now(),
            diet_key: diet_key.into(),
            start_date: first.date,
            end_date: last.date,
            day_count: days.len(),
            meal_count: days.iter().map(|d| d.meals.len()).sum(),
        };
        Ok(Self {
            metadata,
            days,
            quality,
        })
    }

    /// Iterate over every meal with its date
    pub fn meals(&self) -> impl Iterator<Item = (NaiveDate, &Meal)> {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter().map(move |meal| (day.date, meal)))
    }

    /// Total number of meals
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }

    /// Find a meal by id
    #[must_use]
    pub fn find_meal(&self, meal_id: Uuid) -> Option<(NaiveDate, &Meal)> {
        self.meals().find(|(_, meal)| meal.id == meal_id)
    }

    /// Build a new plan with one meal swapped out
    ///
    /// The receiver is left untouched. Metadata and quality metrics are
    /// recomputed; the replaced meal gets an unscored selection record.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no meal has `meal_id`
    pub fn with_meal_replaced(&self, meal_id: Uuid, replacement: Meal) -> AppResult<Self> {
        self.replace_meal(meal_id, replacement, None, TOP_PROTEINS_REPORTED)
    }

    /// Same as [`Plan::with_meal_replaced`] with the selection record of the
    /// new meal and the number of top proteins to report
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no meal has `meal_id`
    pub fn with_meal_reselected(
        &self,
        meal_id: Uuid,
        replacement: Meal,
        selection: MealSelection,
        top_proteins: usize,
    ) -> AppResult<Self> {
        self.replace_meal(meal_id, replacement, Some(selection), top_proteins)
    }

    fn replace_meal(
        &self,
        meal_id: Uuid,
        replacement: Meal,
        selection: Option<MealSelection>,
        top_proteins: usize,
    ) -> AppResult<Self> {
        let (position, date) = self
            .meals()
            .enumerate()
            .find(|(_, (_, meal))| meal.id == meal_id)
            .map(|(position, (date, _))| (position, date))
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))?;
        let record = selection.unwrap_or_else(|| MealSelection::unscored(date, &replacement));

        let mut days = self.days.clone();
        if let Some(slot) = days
            .iter_mut()
            .flat_map(|day| day.meals.iter_mut())
            .nth(position)
        {
            *slot = replacement;
        }

        let quality = self.quality.as_ref().map(|quality| {
            let mut selections = quality.selections.clone();
            if let Some(entry) = selections.get_mut(position) {
                *entry = record;
            }
            QualityMetrics::tally(&days, selections, top_proteins)
        });
        Self::new(self.metadata.diet_key.clone(), days, quality)
    }
}
