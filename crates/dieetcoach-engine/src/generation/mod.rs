// ABOUTME: Meal draft generation and multi-day plan synthesis
// ABOUTME: Seeded selection, naming, weekly usage, scoring, and pool pre-filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Candidate draft generator
pub mod draft;
/// Storage-facing inputs and synthesis requests
pub mod inputs;
/// Meal name patterns
pub mod naming;
/// Hard-DROP pool pre-filter
pub mod pool_filter;
/// Candidate scoring
pub mod scoring;
/// Deterministic seeded selection
pub mod seeded;
/// Plan synthesizer
pub mod synthesizer;
/// Weekly usage accumulator
pub mod usage;

pub use draft::{generate_draft, signature_of, DraftContext};
pub use inputs::{GenerationInputs, SynthesisRequest};
pub use naming::{meal_name, render_pattern, NameParts};
pub use pool_filter::{filter_pools, FilteredPools, RemovedPoolItem};
pub use scoring::{score_candidate, CandidateScore};
pub use seeded::{pick_least_used, pick_seeded};
pub use synthesizer::PlanSynthesizer;
pub use usage::WeeklyUsage;
