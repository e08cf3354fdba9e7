// ABOUTME: Priority-based conflict resolution between overlapping diet rules
// ABOUTME: The first matching constraint in ascending priority order owns the ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::models::Constraint;

use super::matcher::NormalizedName;

/// The constraint that governs `ingredient_name`
///
/// `constraints` must already be sorted by ascending priority (stable), as a
/// `RuleSet` keeps them. Only one constraint ever owns an ingredient, which is
/// what keeps FORCE and LIMIT counts well-defined when categories overlap.
#[must_use]
pub fn winning_constraint<'a>(
    ingredient_name: &str,
    constraints_by_priority: &'a [Constraint],
) -> Option<&'a Constraint> {
    let normalized = NormalizedName::new(ingredient_name);
    winning_index(&normalized, constraints_by_priority).map(|idx| &constraints_by_priority[idx])
}

/// Index of the governing constraint for an already-normalized name
#[must_use]
pub fn winning_index(
    normalized: &NormalizedName,
    constraints_by_priority: &[Constraint],
) -> Option<usize> {
    constraints_by_priority
        .iter()
        .position(|constraint| normalized.matches_terms(&constraint.terms))
}
