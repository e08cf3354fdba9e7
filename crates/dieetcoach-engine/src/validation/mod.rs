// ABOUTME: Post-generation checks over finished plans
// ABOUTME: Structural sanity validation and per-day and per-week diet compliance guardrails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-day and per-week compliance report
pub mod guardrails;
/// Structural sanity checks
pub mod sanity;

pub use guardrails::{
    check_plan_compliance, DayCompliance, PlanComplianceReport, WeekCompliance,
};
pub use sanity::{validate_plan, validate_plan_with};
