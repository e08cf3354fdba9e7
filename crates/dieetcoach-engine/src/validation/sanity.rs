// ABOUTME: Post-generation sanity checks over a finished plan
// ABOUTME: Flags placeholder names, odd ingredient counts and quantities, duplicates, empty days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use chrono::NaiveDate;
use dieetcoach_core::models::{Meal, Plan, SanityIssue, SanityIssueCode};

use crate::config::SanityThresholds;

/// Validate `plan` with default thresholds
#[must_use]
pub fn validate_plan(plan: &Plan) -> Vec<SanityIssue> {
    validate_plan_with(plan, &SanityThresholds::default())
}

/// Validate `plan` with explicit thresholds
///
/// The plan is never modified or rejected; an empty list means no issues.
#[must_use]
pub fn validate_plan_with(plan: &Plan, thresholds: &SanityThresholds) -> Vec<SanityIssue> {
    let mut issues = Vec::new();
    for day in &plan.days {
        if day.meals.is_empty() {
            issues.push(SanityIssue {
                code: SanityIssueCode::EmptyDay,
                date: day.date,
                meal_id: None,
                meal_name: None,
                message: format!("No meals planned on {}", day.date),
            });
        }
        for meal in &day.meals {
            check_meal(day.date, meal, thresholds, &mut issues);
        }
    }
    issues
}

fn check_meal(
    date: NaiveDate,
    meal: &Meal,
    thresholds: &SanityThresholds,
    issues: &mut Vec<SanityIssue>,
) {
    let mut push = |code: SanityIssueCode, message: String| {
        issues.push(SanityIssue {
            code,
            date,
            meal_id: Some(meal.id),
            meal_name: Some(meal.name.clone()),
            message,
        });
    };

    let name = meal.name.trim();
    if name.is_empty() {
        push(SanityIssueCode::EmptyName, "Meal has no name".to_owned());
    } else if is_placeholder(name, thresholds) {
        push(
            SanityIssueCode::PlaceholderName,
            format!("Meal name '{name}' looks like a placeholder"),
        );
    }

    let count = meal.ingredients.len();
    if count < thresholds.min_ingredients || count > thresholds.max_ingredients {
        push(
            SanityIssueCode::IngredientCountOutOfRange,
            format!(
                "Meal has {count} ingredient(s), expected {}..={}",
                thresholds.min_ingredients, thresholds.max_ingredients
            ),
        );
    }

    let mut seen = HashSet::new();
    for ing in &meal.ingredients {
        let in_range = ing.grams >= thresholds.min_grams && ing.grams <= thresholds.max_grams;
        if !in_range {
            push(
                SanityIssueCode::QuantityOutOfRange,
                format!(
                    "'{}' has {} g, expected {}..={} g",
                    ing.code, ing.grams, thresholds.min_grams, thresholds.max_grams
                ),
            );
        }
        if !seen.insert(ing.code.as_str()) {
            push(
                SanityIssueCode::DuplicateIngredient,
                format!("'{}' appears more than once", ing.code),
            );
        }
    }
}

fn is_placeholder(name: &str, thresholds: &SanityThresholds) -> bool {
    let lower = name.to_lowercase();
    name.chars().count() < thresholds.min_name_chars
        || thresholds.placeholder_names.iter().any(|p| *p == lower)
}
