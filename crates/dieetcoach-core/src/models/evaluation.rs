// ABOUTME: Structured result of the four-phase diet compliance evaluation
// ABOUTME: Violations are data, not errors; a falsy result is a normal outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constraint::{Strictness, UnknownVariant};

/// Evaluation phase, serialized as its number (1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Phase {
    /// Phase 1: exclusions
    Drop = 1,
    /// Phase 2: minimum quotas
    Force = 2,
    /// Phase 3: maximum quotas
    Limit = 3,
    /// Phase 4: informational
    Pass = 4,
}

impl Phase {
    /// Phases in execution order
    pub const ORDER: [Self; 4] = [Self::Drop, Self::Force, Self::Limit, Self::Pass];

    /// Phase number (1-4)
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Uppercase label used in summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Drop => "DROP",
            Self::Force => "FORCE",
            Self::Limit => "LIMIT",
            Self::Pass => "PASS",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase {} ({})", self.number(), self.label())
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.number()
    }
}

impl TryFrom<u8> for Phase {
    type Error = UnknownVariant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Drop),
            2 => Ok(Self::Force),
            3 => Ok(Self::Limit),
            4 => Ok(Self::Pass),
            other => Err(UnknownVariant {
                kind: "phase",
                value: other.to_string(),
            }),
        }
    }
}

/// A hard rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Violated rule
    pub constraint_id: String,
    /// Category code of the violated rule
    pub category_code: String,
    /// Category label of the violated rule
    pub category_label: String,
    /// Offending ingredient, for DROP violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    /// Human-readable description
    pub message: String,
}

/// A FORCE quota that was not met
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceDeficit {
    /// Rule identifier
    pub constraint_id: String,
    /// Category code
    pub category_code: String,
    /// Category label
    pub category_label: String,
    /// Count required
    pub required: u32,
    /// Count found
    pub found: u32,
    /// How many are missing
    pub missing: u32,
}

/// A LIMIT quota that was exceeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitExcess {
    /// Rule identifier
    pub constraint_id: String,
    /// Category code
    pub category_code: String,
    /// Category label
    pub category_label: String,
    /// Count allowed
    pub allowed: u32,
    /// Count found
    pub found: u32,
    /// How many over the cap
    pub excess: u32,
    /// Whether the excess blocks or only warns
    pub strictness: Strictness,
}

/// Outcome of one executed phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    /// Which phase
    pub phase: Phase,
    /// Whether the phase passed
    pub ok: bool,
    /// Hard violations
    pub violations: Vec<Violation>,
    /// Soft warnings
    pub warnings: Vec<String>,
    /// FORCE deficits (phase 2 only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub force_deficits: Vec<ForceDeficit>,
    /// LIMIT excesses (phase 3 only), hard and soft
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limit_excesses: Vec<LimitExcess>,
    /// Informational notes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl PhaseResult {
    /// Empty passing result for `phase`
    #[must_use]
    pub const fn passing(phase: Phase) -> Self {
        Self {
            phase,
            ok: true,
            violations: Vec::new(),
            warnings: Vec::new(),
            force_deficits: Vec::new(),
            limit_excesses: Vec::new(),
            notes: Vec::new(),
        }
    }
}

/// Full result of evaluating a target against a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// True when no phase failed
    pub ok: bool,
    /// First failing phase
    pub failed_phase: Option<Phase>,
    /// Executed phases in order
    pub phases: Vec<PhaseResult>,
    /// Warnings from every executed phase
    pub warnings: Vec<String>,
    /// FORCE deficits
    pub force_deficits: Vec<ForceDeficit>,
    /// LIMIT excesses
    pub limit_excesses: Vec<LimitExcess>,
    /// Human-readable summary
    pub summary: String,
}

impl EvaluationResult {
    /// Phases that actually ran
    #[must_use]
    pub fn executed_phases(&self) -> Vec<Phase> {
        self.phases.iter().map(|p| p.phase).collect()
    }

    /// Result of one phase, if it ran
    #[must_use]
    pub fn phase(&self, phase: Phase) -> Option<&PhaseResult> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// All hard violations across executed phases
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.phases.iter().flat_map(|p| p.violations.iter())
    }
}
