// ABOUTME: Meal plan service: rule loading, pool filtering, synthesis, and post-generation checks
// ABOUTME: Also evaluates ad-hoc ingredient lists and regenerates single meals of a plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::NaiveDate;
use dieetcoach_core::errors::AppResult;
use dieetcoach_core::models::{
    EvaluationResult, IngredientRef, MealSlot, Plan, SanityIssue, Target, UsageMaps,
};
use dieetcoach_engine::generation::{filter_pools, FilteredPools, RemovedPoolItem};
use dieetcoach_engine::validation::validate_plan_with;
use dieetcoach_engine::{
    check_plan_compliance, evaluate, GenerationInputs, LoadOptions, NutritionLookup,
    PlanComplianceReport, PlanSynthesizer, PlannerConfig, RuleLoader, RuleSet, SynthesisRequest,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::providers::{GenerationInputStore, InMemoryStore, RuleStore, UsageHistoryProvider};

/// A plan generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Diet profile whose rules apply; also the plan's diet key
    pub diet_profile_id: String,
    /// First planned date
    pub start_date: NaiveDate,
    /// Number of days to plan
    pub day_count: u32,
    /// Meal slots per day, in order
    pub meal_slots: Vec<MealSlot>,
    /// Base seed; the same seed and inputs give the same plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Add a hard exclusion for common inflammatory triggers
    #[serde(default)]
    pub exclude_inflammatory_triggers: bool,
}

impl GenerateRequest {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            exclude_inflammatory_triggers: self.exclude_inflammatory_triggers,
        }
    }
}

/// A plan with its post-generation diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// The synthesized plan
    pub plan: Plan,
    /// Sanity findings; an empty list means the plan looks sane
    pub sanity_issues: Vec<SanityIssue>,
    /// Per-day and per-week compliance against the diet rules
    pub compliance: PlanComplianceReport,
    /// Pool items excluded by hard DROP rules before synthesis
    pub removed_pool_items: Vec<RemovedPoolItem>,
}

struct PlanningContext {
    rule_set: RuleSet,
    inputs: GenerationInputs,
    filtered: FilteredPools,
}

/// Orchestrates storage collaborators and the planning engine
#[derive(Clone)]
pub struct MealPlanService {
    rules: Arc<dyn RuleStore>,
    inputs: Arc<dyn GenerationInputStore>,
    usage: Option<Arc<dyn UsageHistoryProvider>>,
    nutrition: Option<Arc<dyn NutritionLookup>>,
    config: PlannerConfig,
}

impl MealPlanService {
    /// Create a service over a rule store and a generation input store
    #[must_use]
    pub fn new(
        rules: Arc<dyn RuleStore>,
        inputs: Arc<dyn GenerationInputStore>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            rules,
            inputs,
            usage: None,
            nutrition: None,
            config,
        }
    }

    /// Service backed entirely by one in-memory store, usage history included
    #[must_use]
    pub fn in_memory(store: InMemoryStore, config: PlannerConfig) -> Self {
        let store = Arc::new(store);
        let rules: Arc<dyn RuleStore> = store.clone();
        let inputs: Arc<dyn GenerationInputStore> = store.clone();
        Self::new(rules, inputs, config).with_usage_history(store)
    }

    /// Bias picks toward ingredients under-used in the stored history
    #[must_use]
    pub fn with_usage_history(mut self, provider: Arc<dyn UsageHistoryProvider>) -> Self {
        self.usage = Some(provider);
        self
    }

    /// Attach macro estimates to generated meals
    #[must_use]
    pub fn with_nutrition(mut self, lookup: Arc<dyn NutritionLookup>) -> Self {
        self.nutrition = Some(lookup);
        self
    }

    /// Planner configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Load the rule set of a diet profile
    ///
    /// # Errors
    ///
    /// Returns an error if the rule store cannot be read
    pub async fn load_rule_set(
        &self,
        diet_profile_id: &str,
        options: LoadOptions,
    ) -> AppResult<RuleSet> {
        let categories = self.rules.categories().await?;
        let rows = self.rules.rules_for_profile(diet_profile_id).await?;
        let rule_set = RuleLoader::load(diet_profile_id, &categories, &rows, options);
        info!(
            diet_profile_id,
            rows = rows.len(),
            constraints = rule_set.len(),
            "Rule set loaded"
        );
        Ok(rule_set)
    }

    /// Generate a plan and check it
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails, no templates are configured, the
    /// request is malformed, or a required pool is empty after rule filtering
    pub async fn generate(&self, request: &GenerateRequest) -> AppResult<GeneratedPlan> {
        let ctx = self
            .planning_context(&request.diet_profile_id, request.load_options())
            .await?;
        let usage = self
            .usage_history(&request.diet_profile_id, request.start_date)
            .await?;

        let mut synthesis = SynthesisRequest::for_days(
            request.diet_profile_id.clone(),
            request.start_date,
            request.day_count,
            request.meal_slots.clone(),
        );
        if let Some(usage) = usage {
            synthesis = synthesis.with_usage_history(usage);
        }

        let plan = self.synthesizer(&ctx).synthesize(&synthesis, request.seed)?;
        Ok(self.finish(&ctx, plan))
    }

    /// Evaluate an ingredient list against a diet profile's rules
    ///
    /// # Errors
    ///
    /// Returns an error if the rule store cannot be read
    pub async fn evaluate_ingredients(
        &self,
        diet_profile_id: &str,
        ingredients: Vec<IngredientRef>,
        options: LoadOptions,
    ) -> AppResult<EvaluationResult> {
        let rule_set = self.load_rule_set(diet_profile_id, options).await?;
        Ok(evaluate(&rule_set, &Target { ingredients }))
    }

    /// Replace one meal of `plan` and check the new plan
    ///
    /// `plan` itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails, the meal is not in the plan, or no
    /// replacement could be generated
    pub async fn regenerate_meal(
        &self,
        plan: &Plan,
        meal_id: Uuid,
        seed: Option<u64>,
        options: LoadOptions,
    ) -> AppResult<GeneratedPlan> {
        let diet_key = plan.metadata.diet_key.as_str();
        let ctx = self.planning_context(diet_key, options).await?;
        let usage = self
            .usage_history(diet_key, plan.metadata.start_date)
            .await?;

        let regenerated = self
            .synthesizer(&ctx)
            .regenerate_meal(plan, meal_id, usage.as_ref(), seed)?;
        Ok(self.finish(&ctx, regenerated))
    }

    async fn planning_context(
        &self,
        diet_profile_id: &str,
        options: LoadOptions,
    ) -> AppResult<PlanningContext> {
        let rule_set = self.load_rule_set(diet_profile_id, options).await?;
        let inputs = self.inputs.generation_inputs(diet_profile_id).await?;
        let filtered = filter_pools(&inputs.pools, &rule_set);
        if !filtered.removed.is_empty() {
            info!(
                diet_profile_id,
                removed = filtered.removed.len(),
                "Excluded pool items before synthesis"
            );
        }
        Ok(PlanningContext {
            rule_set,
            inputs,
            filtered,
        })
    }

    async fn usage_history(
        &self,
        diet_key: &str,
        before: NaiveDate,
    ) -> AppResult<Option<UsageMaps>> {
        match &self.usage {
            Some(provider) => provider.usage_history(diet_key, before).await,
            None => Ok(None),
        }
    }

    fn synthesizer<'a>(&'a self, ctx: &'a PlanningContext) -> PlanSynthesizer<'a> {
        let synthesizer = PlanSynthesizer::from_inputs(&ctx.inputs, &self.config)
            .with_pools(&ctx.filtered.pools);
        match &self.nutrition {
            Some(lookup) => synthesizer.with_nutrition(lookup.as_ref()),
            None => synthesizer,
        }
    }

    fn finish(&self, ctx: &PlanningContext, plan: Plan) -> GeneratedPlan {
        let sanity_issues = validate_plan_with(&plan, &self.config.sanity);
        let compliance = check_plan_compliance(&ctx.rule_set, &plan);
        if !sanity_issues.is_empty() {
            warn!(issues = sanity_issues.len(), "Generated plan has sanity issues");
        }
        if !compliance.ok {
            warn!(
                failing_days = compliance.failing_days.len(),
                failing_weeks = compliance.failing_weeks.len(),
                "Generated plan violates diet rules"
            );
        }
        GeneratedPlan {
            plan,
            sanity_issues,
            compliance,
            removed_pool_items: ctx.filtered.removed.clone(),
        }
    }
}
