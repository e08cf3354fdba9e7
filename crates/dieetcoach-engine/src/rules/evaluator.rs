// ABOUTME: Four-phase diet compliance evaluator (DROP, FORCE, LIMIT, PASS)
// ABOUTME: Stops at the first hard failure and accumulates soft warnings from executed phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Phase Evaluator
//!
//! Phases run strictest-first so an excluded ingredient can never be rescued
//! by a quota satisfied elsewhere:
//!
//! 1. **DROP** - any ingredient owned by a hard DROP rule fails the target;
//!    soft DROP rules only warn.
//! 2. **FORCE** - each FORCE rule needs `min_per_day` (or `min_per_week`)
//!    owned ingredients. There is no soft FORCE.
//! 3. **LIMIT** - each LIMIT rule caps owned ingredients at `max_per_day`
//!    (or `max_per_week`); soft limits only warn.
//! 4. **PASS** - informational, always succeeds.
//!
//! Ownership comes from the conflict resolver, so an ingredient counts toward
//! one rule only.
//!
//! A scoped evaluator only checks quotas counted over its [`QuotaScope`]:
//! the day scope skips weekly FORCE and LIMIT rules, the week scope checks
//! nothing but them. Ownership is still resolved against the whole rule set.

use dieetcoach_core::models::{
    Constraint, EvaluationResult, ForceDeficit, LimitExcess, Phase, PhaseResult, QuotaScope,
    RuleAction, Strictness, Target, Violation,
};
use tracing::debug;

use super::matcher::NormalizedName;
use super::rule_set::RuleSet;

/// Evaluates targets against one rule set
#[derive(Debug, Clone, Copy)]
pub struct PhaseEvaluator<'a> {
    rule_set: &'a RuleSet,
    scope: Option<QuotaScope>,
}

/// Evaluate `target` against `rule_set`
#[must_use]
pub fn evaluate(rule_set: &RuleSet, target: &Target) -> EvaluationResult {
    PhaseEvaluator::new(rule_set).evaluate(target)
}

impl<'a> PhaseEvaluator<'a> {
    /// Create an evaluator borrowing `rule_set`
    #[must_use]
    pub const fn new(rule_set: &'a RuleSet) -> Self {
        Self {
            rule_set,
            scope: None,
        }
    }

    /// Only check rules that apply to targets collected over `scope`
    #[must_use]
    pub const fn with_scope(mut self, scope: QuotaScope) -> Self {
        self.scope = Some(scope);
        self
    }

    fn applies(&self, constraint: &Constraint) -> bool {
        match self.scope {
            None => true,
            Some(QuotaScope::Day) => constraint.quota_scope() != Some(QuotaScope::Week),
            Some(QuotaScope::Week) => constraint.quota_scope() == Some(QuotaScope::Week),
        }
    }

    /// Run the phases over `target`
    ///
    /// Neither input is modified; identical inputs give identical results.
    #[must_use]
    pub fn evaluate(&self, target: &Target) -> EvaluationResult {
        let owners: Vec<Option<usize>> = target
            .ingredients
            .iter()
            .map(|ing| self.rule_set.winning_index(&NormalizedName::new(&ing.name)))
            .collect();

        let mut phases = Vec::with_capacity(Phase::ORDER.len());
        for phase in Phase::ORDER {
            let result = match phase {
                Phase::Drop => self.drop_phase(target, &owners),
                Phase::Force => self.force_phase(&owners),
                Phase::Limit => self.limit_phase(&owners),
                Phase::Pass => self.pass_phase(&owners),
            };
            let ok = result.ok;
            phases.push(result);
            if !ok {
                return Self::finish(phases, Some(phase));
            }
        }
        Self::finish(phases, None)
    }

    fn drop_phase(&self, target: &Target, owners: &[Option<usize>]) -> PhaseResult {
        let mut result = PhaseResult::passing(Phase::Drop);
        let constraints = self.rule_set.constraints();

        for (ingredient, owner) in target.ingredients.iter().zip(owners) {
            let Some(constraint) = owner.map(|idx| &constraints[idx]) else {
                continue;
            };
            if constraint.action != RuleAction::Drop || !self.applies(constraint) {
                continue;
            }
            match constraint.strictness {
                Strictness::Hard => result.violations.push(Violation {
                    constraint_id: constraint.id.clone(),
                    category_code: constraint.category_code.clone(),
                    category_label: constraint.category_label.clone(),
                    ingredient: Some(ingredient.name.clone()),
                    message: format!(
                        "'{}' is excluded by category '{}'",
                        ingredient.name, constraint.category_label
                    ),
                }),
                Strictness::Soft => result.warnings.push(format!(
                    "'{}' is discouraged by category '{}'",
                    ingredient.name, constraint.category_label
                )),
            }
        }

        result.ok = result.violations.is_empty();
        result
    }

    fn force_phase(&self, owners: &[Option<usize>]) -> PhaseResult {
        let mut result = PhaseResult::passing(Phase::Force);

        for (idx, constraint) in self.rule_set.of_action(RuleAction::Force) {
            if !self.applies(constraint) {
                continue;
            }
            let required = constraint.required_count();
            if required == 0 {
                result.notes.push(format!(
                    "Category '{}' has no minimum quota",
                    constraint.category_label
                ));
                continue;
            }
            let found = owned_count(owners, idx);
            if found >= required {
                continue;
            }
            let missing = required - found;
            result.violations.push(Violation {
                constraint_id: constraint.id.clone(),
                category_code: constraint.category_code.clone(),
                category_label: constraint.category_label.clone(),
                ingredient: None,
                message: format!(
                    "Category '{}' needs {required}, found {found} ({missing} short)",
                    constraint.category_label
                ),
            });
            result.force_deficits.push(ForceDeficit {
                constraint_id: constraint.id.clone(),
                category_code: constraint.category_code.clone(),
                category_label: constraint.category_label.clone(),
                required,
                found,
                missing,
            });
        }

        result.ok = result.violations.is_empty();
        result
    }

    fn limit_phase(&self, owners: &[Option<usize>]) -> PhaseResult {
        let mut result = PhaseResult::passing(Phase::Limit);

        for (idx, constraint) in self.rule_set.of_action(RuleAction::Limit) {
            if !self.applies(constraint) {
                continue;
            }
            let Some(allowed) = constraint.allowed_count() else {
                continue;
            };
            let found = owned_count(owners, idx);
            if found <= allowed {
                continue;
            }
            let excess = found - allowed;
            result.limit_excesses.push(LimitExcess {
                constraint_id: constraint.id.clone(),
                category_code: constraint.category_code.clone(),
                category_label: constraint.category_label.clone(),
                allowed,
                found,
                excess,
                strictness: constraint.strictness,
            });
            let message = format!(
                "Category '{}' allows {allowed}, found {found} ({excess} over)",
                constraint.category_label
            );
            if constraint.is_hard() {
                result.violations.push(Violation {
                    constraint_id: constraint.id.clone(),
                    category_code: constraint.category_code.clone(),
                    category_label: constraint.category_label.clone(),
                    ingredient: None,
                    message,
                });
            } else {
                result.warnings.push(message);
            }
        }

        result.ok = result.violations.is_empty();
        result
    }

    fn pass_phase(&self, owners: &[Option<usize>]) -> PhaseResult {
        let mut result = PhaseResult::passing(Phase::Pass);
        for (idx, constraint) in self.rule_set.of_action(RuleAction::Pass) {
            if !self.applies(constraint) {
                continue;
            }
            let found = owned_count(owners, idx);
            if found > 0 {
                result.notes.push(format!(
                    "Category '{}' matched {found} ingredient(s)",
                    constraint.category_label
                ));
            }
        }
        result
    }

    fn finish(phases: Vec<PhaseResult>, failed_phase: Option<Phase>) -> EvaluationResult {
        let warnings: Vec<String> = phases
            .iter()
            .flat_map(|p| p.warnings.iter().cloned())
            .collect();
        let force_deficits: Vec<ForceDeficit> = phases
            .iter()
            .flat_map(|p| p.force_deficits.iter().cloned())
            .collect();
        let limit_excesses: Vec<LimitExcess> = phases
            .iter()
            .flat_map(|p| p.limit_excesses.iter().cloned())
            .collect();

        let summary = match failed_phase {
            Some(phase) => {
                let violation_count = phases
                    .iter()
                    .find(|p| p.phase == phase)
                    .map_or(0, |p| p.violations.len());
                format!("Failed at {phase} with {violation_count} violation(s)")
            }
            None if warnings.is_empty() => "Passed all phases".to_owned(),
            None => format!("Passed all phases with {} warning(s)", warnings.len()),
        };

        debug!(
            ok = failed_phase.is_none(),
            failed_phase = ?failed_phase,
            warnings = warnings.len(),
            "Diet compliance evaluated"
        );

        EvaluationResult {
            ok: failed_phase.is_none(),
            failed_phase,
            phases,
            warnings,
            force_deficits,
            limit_excesses,
            summary,
        }
    }
}

fn owned_count(owners: &[Option<usize>], idx: usize) -> u32 {
    let count = owners.iter().filter(|owner| **owner == Some(idx)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
