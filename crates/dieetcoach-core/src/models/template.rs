// ABOUTME: Recipe templates, structural slots, meal slots, and name patterns
// ABOUTME: Templates are static configuration loaded once per generation run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::constraint::UnknownVariant;

/// Meal moment within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealSlot {
    /// Lowercase representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "ontbijt" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" | "diner" | "avondeten" => Ok(Self::Dinner),
            "snack" | "tussendoor" => Ok(Self::Snack),
            _ => Err(UnknownVariant {
                kind: "meal slot",
                value: s.to_owned(),
            }),
        }
    }
}

/// Structural role of a template slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    /// Main protein source
    Protein,
    /// First vegetable
    #[serde(rename = "vegetable1")]
    Vegetable1,
    /// Second vegetable
    #[serde(rename = "vegetable2")]
    Vegetable2,
    /// Added fat
    Fat,
}

/// Clamp `value` into `[min, max]`, tolerating swapped bounds
#[must_use]
pub fn clamp_grams(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value.max(lo).min(hi)
}

/// One structural slot of a template with its quantity bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSlot {
    /// Which pool fills this slot
    pub role: SlotRole,
    /// Default quantity in grams
    pub default_grams: f64,
    /// Lower bound in grams
    pub min_grams: f64,
    /// Upper bound in grams
    pub max_grams: f64,
}

impl TemplateSlot {
    /// Create a slot
    #[must_use]
    pub const fn new(role: SlotRole, default_grams: f64, min_grams: f64, max_grams: f64) -> Self {
        Self {
            role,
            default_grams,
            min_grams,
            max_grams,
        }
    }

    /// Slot used when a template does not declare the role itself
    #[must_use]
    pub const fn fallback(role: SlotRole) -> Self {
        match role {
            SlotRole::Protein => Self::new(role, 120.0, 80.0, 200.0),
            SlotRole::Vegetable1 | SlotRole::Vegetable2 => Self::new(role, 100.0, 50.0, 200.0),
            SlotRole::Fat => Self::new(role, 10.0, 5.0, 20.0),
        }
    }

    /// Default quantity clamped into this slot's bounds
    #[must_use]
    pub fn grams(&self) -> f64 {
        clamp_grams(self.default_grams, self.min_grams, self.max_grams)
    }
}

/// A recipe template: fixed structural slots plus variable flavor additions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTemplate {
    /// Stable template identifier
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Structural slots, at most one per role
    pub slots: Vec<TemplateSlot>,
    /// Number of preparation steps (informational)
    #[serde(default)]
    pub step_count: u32,
}

impl RecipeTemplate {
    /// Slot declared for `role`, if any
    #[must_use]
    pub fn slot(&self, role: SlotRole) -> Option<&TemplateSlot> {
        self.slots.iter().find(|slot| slot.role == role)
    }

    /// Slot for `role`, falling back to generic bounds when undeclared
    #[must_use]
    pub fn slot_or_fallback(&self, role: SlotRole) -> TemplateSlot {
        self.slot(role)
            .cloned()
            .unwrap_or_else(|| TemplateSlot::fallback(role))
    }

    /// Whether the template asks for an added fat
    #[must_use]
    pub fn has_fat_slot(&self) -> bool {
        self.slot(SlotRole::Fat).is_some()
    }
}

/// Naming pattern for meals built from a template in a given slot
///
/// Supports `{protein}`, `{veg1}`, `{veg2}`, `{flavor}` and `{templateName}` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamePattern {
    /// Template the pattern applies to
    pub template_id: String,
    /// Meal slot the pattern applies to
    pub meal_slot: MealSlot,
    /// Pattern text
    pub pattern: String,
}
