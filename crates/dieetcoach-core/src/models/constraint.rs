// ABOUTME: Diet rule constraint model with closed action and strictness enums
// ABOUTME: Also defines the raw category/rule storage rows the rule loader consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// What a diet rule does to the ingredients it governs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    /// Matching ingredients invalidate the target (hard) or warn (soft)
    Drop,
    /// A minimum count of matching ingredients is required
    Force,
    /// The count of matching ingredients is capped
    Limit,
    /// No constraint, informational only
    Pass,
}

impl RuleAction {
    /// All actions in evaluation order
    pub const ALL: [Self; 4] = [Self::Drop, Self::Force, Self::Limit, Self::Pass];

    /// Lowercase storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Force => "force",
            Self::Limit => "limit",
            Self::Pass => "pass",
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a storage value does not map onto a closed enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} value '{value}'")]
pub struct UnknownVariant {
    /// Which enum was being parsed
    pub kind: &'static str,
    /// The offending raw value
    pub value: String,
}

impl FromStr for RuleAction {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "force" => Ok(Self::Force),
            "limit" => Ok(Self::Limit),
            "pass" => Ok(Self::Pass),
            _ => Err(UnknownVariant {
                kind: "action",
                value: s.to_owned(),
            }),
        }
    }
}

/// Enforcement level of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Violations block
    #[default]
    Hard,
    /// Violations only warn
    Soft,
}

impl Strictness {
    /// Lowercase storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

impl FromStr for Strictness {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            _ => Err(UnknownVariant {
                kind: "strictness",
                value: s.to_owned(),
            }),
        }
    }
}

/// Period a FORCE or LIMIT quota is counted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaScope {
    /// Counted over the ingredients of one day
    Day,
    /// Counted over a 7-day block
    Week,
}

/// A single typed diet rule, immutable once loaded
///
/// `priority` orders rules for conflict resolution: the numerically smallest
/// priority wins, ties keep input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    /// Storage identifier of the rule
    pub id: String,
    /// Diet profile the rule belongs to
    pub diet_profile_id: String,
    /// What the rule does
    pub action: RuleAction,
    /// Stable category code (e.g. `noten`)
    pub category_code: String,
    /// Human-readable category label
    pub category_label: String,
    /// Lowercased match terms including synonyms
    pub terms: BTreeSet<String>,
    /// Minimum matching ingredients per day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_per_day: Option<u32>,
    /// Minimum matching ingredients per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_per_week: Option<u32>,
    /// Maximum matching ingredients per day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_day: Option<u32>,
    /// Maximum matching ingredients per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_week: Option<u32>,
    /// Hard or soft enforcement
    pub strictness: Strictness,
    /// Precedence, 1 = highest
    pub priority: i32,
}

impl Constraint {
    /// Create a hard constraint with priority 1 and no quotas
    #[must_use]
    pub fn new<I, S>(
        id: impl Into<String>,
        action: RuleAction,
        category_code: impl Into<String>,
        terms: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let category_code = category_code.into();
        Self {
            id: id.into(),
            diet_profile_id: String::new(),
            action,
            category_label: category_code.clone(),
            category_code,
            terms: terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            min_per_day: None,
            min_per_week: None,
            max_per_day: None,
            max_per_week: None,
            strictness: Strictness::Hard,
            priority: 1,
        }
    }

    /// Set the diet profile
    #[must_use]
    pub fn with_profile(mut self, diet_profile_id: impl Into<String>) -> Self {
        self.diet_profile_id = diet_profile_id.into();
        self
    }

    /// Set the human-readable category label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the strictness
    #[must_use]
    pub const fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Set per-day and per-week minimums
    #[must_use]
    pub const fn with_minimums(mut self, per_day: Option<u32>, per_week: Option<u32>) -> Self {
        self.min_per_day = per_day;
        self.min_per_week = per_week;
        self
    }

    /// Set per-day and per-week maximums
    #[must_use]
    pub const fn with_maximums(mut self, per_day: Option<u32>, per_week: Option<u32>) -> Self {
        self.max_per_day = per_day;
        self.max_per_week = per_week;
        self
    }

    /// Count a FORCE rule requires: `min_per_day` when positive, else `min_per_week`
    #[must_use]
    pub fn required_count(&self) -> u32 {
        match self.min_per_day {
            Some(per_day) if per_day > 0 => per_day,
            _ => self.min_per_week.unwrap_or(0),
        }
    }

    /// Count a LIMIT rule allows: `max_per_day` when set, else `max_per_week`
    #[must_use]
    pub fn allowed_count(&self) -> Option<u32> {
        self.max_per_day.or(self.max_per_week)
    }

    /// Period the quota of a FORCE or LIMIT rule is counted over
    ///
    /// Per-day quotas take precedence, mirroring [`Self::required_count`] and
    /// [`Self::allowed_count`]. DROP, PASS and rules without a quota have no scope.
    #[must_use]
    pub fn quota_scope(&self) -> Option<QuotaScope> {
        match self.action {
            RuleAction::Force => match (self.min_per_day, self.min_per_week) {
                (Some(per_day), _) if per_day > 0 => Some(QuotaScope::Day),
                (_, Some(_)) => Some(QuotaScope::Week),
                _ => None,
            },
            RuleAction::Limit => match (self.max_per_day, self.max_per_week) {
                (Some(_), _) => Some(QuotaScope::Day),
                (None, Some(_)) => Some(QuotaScope::Week),
                (None, None) => None,
            },
            RuleAction::Drop | RuleAction::Pass => None,
        }
    }

    /// Whether violations of this rule block
    #[must_use]
    pub fn is_hard(&self) -> bool {
        self.strictness == Strictness::Hard
    }
}

/// Ingredient category as stored (terms plus synonyms)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    /// Storage identifier
    pub id: String,
    /// Stable category code
    pub code: String,
    /// Display label
    pub label: String,
    /// Primary match terms
    #[serde(default)]
    pub terms: Vec<String>,
    /// Additional synonyms
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Inactive categories never produce constraints
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Diet rule as stored, with untyped action and strictness
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRow {
    /// Storage identifier
    pub id: String,
    /// Owning diet profile
    pub diet_profile_id: String,
    /// Category the rule applies to
    pub category_id: String,
    /// Raw action string (`drop`, `force`, `limit`, `pass`)
    pub action: String,
    /// Minimum per day
    #[serde(default)]
    pub min_per_day: Option<u32>,
    /// Minimum per week
    #[serde(default)]
    pub min_per_week: Option<u32>,
    /// Maximum per day
    #[serde(default)]
    pub max_per_day: Option<u32>,
    /// Maximum per week
    #[serde(default)]
    pub max_per_week: Option<u32>,
    /// Raw strictness string (`hard`, `soft`)
    #[serde(default = "default_strictness")]
    pub strictness: String,
    /// Precedence, 1 = highest
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Whether the rule is active
    #[serde(default = "default_true")]
    pub active: bool,
    /// Temporarily paused rules are skipped
    #[serde(default)]
    pub paused: bool,
}

const fn default_true() -> bool {
    true
}

fn default_strictness() -> String {
    Strictness::Hard.as_str().to_owned()
}

const fn default_priority() -> i32 {
    100
}
