// ABOUTME: Diet rule matching, conflict resolution, loading, and phased evaluation
// ABOUTME: Re-exports the rule set, loader, matcher, resolver, and evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Four-phase compliance evaluator
pub mod evaluator;
/// Rule set construction from storage rows
pub mod loader;
/// Name normalization and term matching
pub mod matcher;
/// Priority-based conflict resolution
pub mod resolver;
/// Ordered, grouped rule set
pub mod rule_set;

pub use evaluator::{evaluate, PhaseEvaluator};
pub use loader::{LoadOptions, RuleLoader};
pub use matcher::{matches, normalize, NormalizedName};
pub use resolver::winning_constraint;
pub use rule_set::RuleSet;
