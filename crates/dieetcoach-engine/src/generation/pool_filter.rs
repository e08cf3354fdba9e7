// ABOUTME: Pre-filters ingredient pools against a diet rule set before synthesis
// ABOUTME: Removes hard-dropped items and reports which category removed each one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dieetcoach_core::models::{
    Constraint, IngredientRole, PoolEntry, RuleAction, Strictness, TemplateIngredientPools,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::RuleSet;

/// A pool item removed by a hard DROP rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedPoolItem {
    /// Pool the item was removed from
    pub pool: IngredientRole,
    /// Ingredient code
    pub code: String,
    /// Display name
    pub display_name: String,
    /// Category that removed it
    pub category_code: String,
}

/// Pools with excluded items removed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredPools {
    /// Remaining pools
    pub pools: TemplateIngredientPools,
    /// What was removed and why
    pub removed: Vec<RemovedPoolItem>,
}

/// Remove every item whose winning constraint is a hard DROP
///
/// An item is checked by display name and by code. Soft DROP items stay.
#[must_use]
pub fn filter_pools(pools: &TemplateIngredientPools, rule_set: &RuleSet) -> FilteredPools {
    let mut removed = Vec::new();
    let filtered = TemplateIngredientPools {
        protein: retain(
            &pools.protein,
            IngredientRole::Protein,
            rule_set,
            &mut removed,
        ),
        vegetable: retain(
            &pools.vegetable,
            IngredientRole::Vegetable,
            rule_set,
            &mut removed,
        ),
        fat: retain(&pools.fat, IngredientRole::Fat, rule_set, &mut removed),
        flavor: retain(
            &pools.flavor,
            IngredientRole::Flavor,
            rule_set,
            &mut removed,
        ),
    };
    if !removed.is_empty() {
        debug!(removed = removed.len(), "Pool items excluded by diet rules");
    }
    FilteredPools {
        pools: filtered,
        removed,
    }
}

fn retain<T: PoolEntry + Clone>(
    items: &[T],
    pool: IngredientRole,
    rule_set: &RuleSet,
    removed: &mut Vec<RemovedPoolItem>,
) -> Vec<T> {
    items
        .iter()
        .filter(|item| match hard_drop(*item, rule_set) {
            Some(constraint) => {
                removed.push(RemovedPoolItem {
                    pool,
                    code: item.code().to_owned(),
                    display_name: item.display_name().to_owned(),
                    category_code: constraint.category_code.clone(),
                });
                false
            }
            None => true,
        })
        .cloned()
        .collect()
}

fn hard_drop<'r, T: PoolEntry>(item: &T, rule_set: &'r RuleSet) -> Option<&'r Constraint> {
    [item.display_name(), item.code()]
        .into_iter()
        .filter_map(|name| rule_set.winner_for(name))
        .find(|c| c.action == RuleAction::Drop && c.strictness == Strictness::Hard)
}
