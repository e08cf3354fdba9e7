// ABOUTME: Builds an ordered, deduplicated rule set from stored category and rule rows
// ABOUTME: Parses untyped rows into closed enums and injects synthetic exclusion rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeSet, HashMap, HashSet};

use dieetcoach_core::constants::keywords;
use dieetcoach_core::models::{CategoryRow, Constraint, RuleAction, RuleRow, Strictness};
use tracing::{debug, warn};

use super::rule_set::RuleSet;

/// Priority of injected synthetic rules; wins over every stored rule
pub const SYNTHETIC_RULE_PRIORITY: i32 = 0;

/// Options controlling rule loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Inject a hard DROP rule for common inflammatory triggers
    pub exclude_inflammatory_triggers: bool,
}

/// Converts storage rows into a `RuleSet`
pub struct RuleLoader;

impl RuleLoader {
    /// Load the rule set of one diet profile
    ///
    /// Rows for other profiles, inactive or paused rules, rules without an
    /// active category, rows with unrecognized action or strictness, and rules
    /// without any terms are skipped.
    #[must_use]
    pub fn load(
        diet_profile_id: &str,
        categories: &[CategoryRow],
        rules: &[RuleRow],
        options: LoadOptions,
    ) -> RuleSet {
        let constraints = Self::constraints(diet_profile_id, categories, rules, options);
        RuleSet::new(constraints)
    }

    /// Same as [`RuleLoader::load`] but returns the constraints in load order
    #[must_use]
    pub fn constraints(
        diet_profile_id: &str,
        categories: &[CategoryRow],
        rules: &[RuleRow],
        options: LoadOptions,
    ) -> Vec<Constraint> {
        let categories_by_id: HashMap<&str, &CategoryRow> = categories
            .iter()
            .filter(|category| category.active)
            .map(|category| (category.id.as_str(), category))
            .collect();

        let mut constraints: Vec<Constraint> = Vec::with_capacity(rules.len() + 1);
        if options.exclude_inflammatory_triggers {
            constraints.push(Self::inflammatory_trigger_constraint(diet_profile_id));
        }

        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut by_category_action: HashMap<(String, RuleAction), usize> = HashMap::new();

        for row in rules {
            if row.diet_profile_id != diet_profile_id || !row.active || row.paused {
                continue;
            }
            if seen_ids.contains(row.id.as_str()) {
                debug!(rule_id = %row.id, "Skipping duplicate rule id");
                continue;
            }
            let Some(category) = categories_by_id.get(row.category_id.as_str()) else {
                warn!(
                    rule_id = %row.id,
                    category_id = %row.category_id,
                    "Rule references missing or inactive category"
                );
                continue;
            };
            let Some(constraint) = Self::constraint_from_row(row, category) else {
                continue;
            };
            seen_ids.insert(row.id.as_str());

            let key = (constraint.category_code.clone(), constraint.action);
            match by_category_action.get(&key) {
                Some(&existing) if constraints[existing].priority <= constraint.priority => {
                    debug!(
                        rule_id = %constraint.id,
                        kept = %constraints[existing].id,
                        "Dropping lower-precedence duplicate of category/action"
                    );
                }
                Some(&existing) => {
                    constraints[existing] = constraint;
                }
                None => {
                    by_category_action.insert(key, constraints.len());
                    constraints.push(constraint);
                }
            }
        }

        constraints
    }

    /// Synthetic hard DROP rule for inflammatory triggers
    #[must_use]
    pub fn inflammatory_trigger_constraint(diet_profile_id: &str) -> Constraint {
        Constraint::new(
            format!("synthetic:{}", keywords::INFLAMMATORY_CATEGORY_CODE),
            RuleAction::Drop,
            keywords::INFLAMMATORY_CATEGORY_CODE,
            keywords::INFLAMMATORY_TRIGGER_TERMS,
        )
        .with_profile(diet_profile_id)
        .with_label(keywords::INFLAMMATORY_CATEGORY_LABEL)
        .with_priority(SYNTHETIC_RULE_PRIORITY)
        .with_strictness(Strictness::Hard)
    }

    fn constraint_from_row(row: &RuleRow, category: &CategoryRow) -> Option<Constraint> {
        let action: RuleAction = match row.action.parse() {
            Ok(action) => action,
            Err(e) => {
                warn!(rule_id = %row.id, error = %e, "Dropping rule with unrecognized action");
                return None;
            }
        };
        let strictness: Strictness = match row.strictness.parse() {
            Ok(strictness) => strictness,
            Err(e) => {
                warn!(rule_id = %row.id, error = %e, "Dropping rule with unrecognized strictness");
                return None;
            }
        };

        let terms: BTreeSet<String> = category
            .terms
            .iter()
            .chain(category.synonyms.iter())
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        if terms.is_empty() {
            warn!(
                rule_id = %row.id,
                category = %category.code,
                "Dropping rule without resolvable terms"
            );
            return None;
        }

        Some(Constraint {
            id: row.id.clone(),
            diet_profile_id: row.diet_profile_id.clone(),
            action,
            category_code: category.code.clone(),
            category_label: category.label.clone(),
            terms,
            min_per_day: row.min_per_day,
            min_per_week: row.min_per_week,
            max_per_day: row.max_per_day,
            max_per_week: row.max_per_week,
            strictness,
            priority: row.priority,
        })
    }
}
