// ABOUTME: Domain models for diet rules, ingredient pools, templates, and plans
// ABOUTME: Plain serializable data shared by the engine and its callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Everything here is plain data with no I/O. The engine crate owns the
//! behaviour; these types only carry invariants that can be checked locally
//! (quota selection, gram clamping, plan metadata).

/// Diet rule constraints and their storage rows
pub mod constraint;
/// Compliance evaluation results
pub mod evaluation;
/// Ingredient references and evaluation targets
pub mod ingredient;
/// Meal drafts, meals, days and plans
pub mod plan;
/// Ingredient pools and usage telemetry
pub mod pool;
/// Sanity validator findings
pub mod sanity;
/// Recipe templates and meal slots
pub mod template;

pub use constraint::{
    CategoryRow, Constraint, QuotaScope, RuleAction, RuleRow, Strictness, UnknownVariant,
};
pub use evaluation::{EvaluationResult, ForceDeficit, LimitExcess, Phase, PhaseResult, Violation};
pub use ingredient::{IngredientRef, Target};
pub use plan::{
    Day, DraftIngredient, IngredientRole, MacroEstimate, Meal, MealDraft, MealSelection, Plan,
    PlanMetadata, QualityMetrics, UsageCount,
};
pub use pool::{FlavorPoolItem, PoolEntry, PoolItem, TemplateIngredientPools, UsageMaps};
pub use sanity::{SanityIssue, SanityIssueCode};
pub use template::{clamp_grams, MealSlot, NamePattern, RecipeTemplate, SlotRole, TemplateSlot};
