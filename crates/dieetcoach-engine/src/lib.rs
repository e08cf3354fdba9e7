// ABOUTME: Diet-rule compliance evaluation and meal-plan synthesis engine
// ABOUTME: Pure, synchronous computation over in-memory rule sets, pools, and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dieetcoach Engine
//!
//! The engine performs no I/O of its own. Callers load rule rows, pools and
//! templates from storage and hand them over wholesale.
//!
//! ## Modules
//!
//! - **rules**: term matching, priority conflict resolution, rule loading and
//!   the four-phase evaluator (DROP, FORCE, LIMIT, PASS)
//! - **generation**: seeded draft generation, candidate scoring under weekly
//!   caps, plan synthesis and pool pre-filtering
//! - **validation**: post-generation sanity checks and compliance guardrails
//! - **config**: planner configuration with environment overrides
//! - **nutrition**: best-effort macro lookup seam

/// Planner configuration
pub mod config;
/// Plan generation errors
pub mod errors;
/// Draft generation and plan synthesis
pub mod generation;
/// Nutrition lookup seam
pub mod nutrition;
/// Diet rule loading and evaluation
pub mod rules;
/// Post-generation checks
pub mod validation;

pub use config::PlannerConfig;
pub use errors::{PlanError, PoolKind};
pub use generation::{GenerationInputs, PlanSynthesizer, SynthesisRequest};
pub use nutrition::{NutritionLookup, NutritionLookupError};
pub use rules::{evaluate, LoadOptions, RuleLoader, RuleSet};
pub use validation::{check_plan_compliance, validate_plan, PlanComplianceReport};
