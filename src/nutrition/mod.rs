// ABOUTME: Nutrition lookup implementations for attaching macro estimates to meals
// ABOUTME: Re-exports the table-driven lookup used by the service and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-100 g macro table
pub mod table;

pub use table::{MacrosPer100g, NutritionTable};
