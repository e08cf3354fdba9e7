// ABOUTME: Ingredient references and evaluation targets
// ABOUTME: A Target is the set of ingredients one compliance evaluation looks at
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::plan::{Day, Meal};

/// Reference to an ingredient by name, optionally with an amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRef {
    /// Ingredient name as shown to the user
    pub name: String,
    /// Amount in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_grams: Option<f64>,
}

impl IngredientRef {
    /// Reference without an amount
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount_grams: None,
        }
    }

    /// Reference with an amount in grams
    #[must_use]
    pub fn with_grams(name: impl Into<String>, grams: f64) -> Self {
        Self {
            name: name.into(),
            amount_grams: Some(grams),
        }
    }
}

/// The ingredient set being evaluated: one meal, one day, or a week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Ingredients under evaluation
    pub ingredients: Vec<IngredientRef>,
}

impl Target {
    /// Build a target from bare ingredient names
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: names.into_iter().map(IngredientRef::named).collect(),
        }
    }

    /// Build a target from the ingredients of a set of meals
    #[must_use]
    pub fn from_meals<'a, I>(meals: I) -> Self
    where
        I: IntoIterator<Item = &'a Meal>,
    {
        Self {
            ingredients: meals
                .into_iter()
                .flat_map(|meal| meal.ingredients.iter())
                .map(|ing| IngredientRef::with_grams(ing.display_name.clone(), ing.grams))
                .collect(),
        }
    }

    /// Build a target from one plan day
    #[must_use]
    pub fn from_day(day: &Day) -> Self {
        Self::from_meals(&day.meals)
    }

    /// Number of ingredients in the target
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether the target holds no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
