// ABOUTME: Diet compliance guardrails for finished plans, evaluated per day and per week
// ABOUTME: Non-blocking report; callers decide whether to regenerate or warn
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Guardrails
//!
//! Each day is evaluated on its own ingredients for DROP rules and per-day
//! quotas. Rules whose quota is counted per week are evaluated once per
//! consecutive 7-day block from the plan start, on the ingredients of every
//! meal in that block. A trailing block shorter than 7 days is still checked.

use chrono::NaiveDate;
use dieetcoach_core::constants::generation::WEEK_LENGTH_DAYS;
use dieetcoach_core::models::{EvaluationResult, Plan, QuotaScope, Target};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::rules::{PhaseEvaluator, RuleSet};

/// Compliance of one planned day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCompliance {
    /// Calendar date
    pub date: NaiveDate,
    /// Evaluation of all ingredients of that day
    pub result: EvaluationResult,
}

/// Compliance of one 7-day block against weekly quotas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCompliance {
    /// First date of the block
    pub start_date: NaiveDate,
    /// Last date of the block
    pub end_date: NaiveDate,
    /// Evaluation of all ingredients of the block
    pub result: EvaluationResult,
}

/// Compliance of a whole plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanComplianceReport {
    /// Every day and every week passed
    pub ok: bool,
    /// Per-day results in date order
    pub days: Vec<DayCompliance>,
    /// Per-week results in date order
    pub weeks: Vec<WeekCompliance>,
    /// Dates that failed
    pub failing_days: Vec<NaiveDate>,
    /// Start dates of weeks that failed
    pub failing_weeks: Vec<NaiveDate>,
    /// Soft warnings across all days and weeks
    pub warning_count: usize,
}

/// Evaluate every day and every week of `plan` against `rule_set`
#[must_use]
pub fn check_plan_compliance(rule_set: &RuleSet, plan: &Plan) -> PlanComplianceReport {
    let daily = PhaseEvaluator::new(rule_set).with_scope(QuotaScope::Day);
    let weekly = PhaseEvaluator::new(rule_set).with_scope(QuotaScope::Week);

    let days: Vec<DayCompliance> = plan
        .days
        .iter()
        .map(|day| DayCompliance {
            date: day.date,
            result: daily.evaluate(&Target::from_day(day)),
        })
        .collect();

    let weeks: Vec<WeekCompliance> = plan
        .days
        .chunks(WEEK_LENGTH_DAYS as usize)
        .filter_map(|block| {
            let (first, last) = (block.first()?, block.last()?);
            let target = Target::from_meals(block.iter().flat_map(|day| &day.meals));
            Some(WeekCompliance {
                start_date: first.date,
                end_date: last.date,
                result: weekly.evaluate(&target),
            })
        })
        .collect();

    let failing_days: Vec<NaiveDate> = days
        .iter()
        .filter(|d| !d.result.ok)
        .map(|d| d.date)
        .collect();
    let failing_weeks: Vec<NaiveDate> = weeks
        .iter()
        .filter(|w| !w.result.ok)
        .map(|w| w.start_date)
        .collect();
    let warning_count = days
        .iter()
        .map(|d| d.result.warnings.len())
        .chain(weeks.iter().map(|w| w.result.warnings.len()))
        .sum();

    info!(
        days = days.len(),
        weeks = weeks.len(),
        failing_days = failing_days.len(),
        failing_weeks = failing_weeks.len(),
        warnings = warning_count,
        "Plan compliance checked"
    );

    PlanComplianceReport {
        ok: failing_days.is_empty() && failing_weeks.is_empty(),
        days,
        weeks,
        failing_days,
        failing_weeks,
        warning_count,
    }
}
