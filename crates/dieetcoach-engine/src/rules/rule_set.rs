// ABOUTME: Request-scoped, immutable set of diet constraints ordered by priority
// ABOUTME: Groups constraint indices by action for direct per-phase access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::models::{Constraint, RuleAction};
use serde::Serialize;

use super::matcher::NormalizedName;
use super::resolver;

/// Ordered, grouped constraints for one evaluation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    constraints: Vec<Constraint>,
    #[serde(skip)]
    by_action: [Vec<usize>; 4],
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

const fn action_slot(action: RuleAction) -> usize {
    match action {
        RuleAction::Drop => 0,
        RuleAction::Force => 1,
        RuleAction::Limit => 2,
        RuleAction::Pass => 3,
    }
}

impl RuleSet {
    /// Build a rule set; constraints are stably sorted by ascending priority
    #[must_use]
    pub fn new(mut constraints: Vec<Constraint>) -> Self {
        constraints.sort_by_key(|c| c.priority);

        let mut by_action: [Vec<usize>; 4] = Default::default();
        for (idx, constraint) in constraints.iter().enumerate() {
            by_action[action_slot(constraint.action)].push(idx);
        }

        Self {
            constraints,
            by_action,
        }
    }

    /// All constraints in priority order
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Constraints with `action`, with their index in priority order
    pub fn of_action(&self, action: RuleAction) -> impl Iterator<Item = (usize, &Constraint)> {
        self.by_action[action_slot(action)]
            .iter()
            .map(move |&idx| (idx, &self.constraints[idx]))
    }

    /// The constraint governing `ingredient_name`
    #[must_use]
    pub fn winner_for(&self, ingredient_name: &str) -> Option<&Constraint> {
        resolver::winning_constraint(ingredient_name, &self.constraints)
    }

    /// Index of the constraint governing a normalized name
    #[must_use]
    pub fn winning_index(&self, normalized: &NormalizedName) -> Option<usize> {
        resolver::winning_index(normalized, &self.constraints)
    }

    /// Number of constraints
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set holds no constraints
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
