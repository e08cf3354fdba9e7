// ABOUTME: Core types and constants for the dieetcoach meal-planning engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dieetcoach Core
//!
//! Foundation crate providing shared types and constants for the diet-rule
//! compliance and meal-plan synthesis engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Generator defaults, scoring weights, sanity bounds, keyword lists
//! - **models**: Constraints, pools, templates, drafts, plans, evaluation results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by engine stage
pub mod constants;

/// Core data models (Constraint, Plan, `EvaluationResult`, etc.)
pub mod models;
