// ABOUTME: Storage collaborator traits feeding the engine with rules, pools, and usage history
// ABOUTME: Async because real stores are I/O-bound; the engine itself stays synchronous
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage Providers
//!
//! The engine never performs I/O. These traits describe what the service layer
//! needs from storage: rule and category rows per diet profile, the pools and
//! templates for a generation run, and optional historical usage counts.
//!
//! [`InMemoryStore`] implements all three over data held in memory, usually
//! loaded from a JSON [`PlannerFixture`].

/// JSON fixture format for the in-memory store
pub mod fixture;
/// In-memory store implementing every provider trait
pub mod memory;

pub use fixture::PlannerFixture;
pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use dieetcoach_core::errors::AppResult;
use dieetcoach_core::models::{CategoryRow, RuleRow, UsageMaps};
use dieetcoach_engine::GenerationInputs;

/// Source of category and rule rows
#[async_trait]
pub trait RuleStore: Send + Sync {
    /// All ingredient categories, active or not
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn categories(&self) -> AppResult<Vec<CategoryRow>>;

    /// Rule rows of one diet profile
    ///
    /// Implementations may return inactive or paused rows; the rule loader
    /// skips them.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn rules_for_profile(&self, diet_profile_id: &str) -> AppResult<Vec<RuleRow>>;
}

/// Source of pools, templates, generator settings, and name patterns
#[async_trait]
pub trait GenerationInputStore: Send + Sync {
    /// Generation inputs for a diet
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn generation_inputs(&self, diet_key: &str) -> AppResult<GenerationInputs>;
}

/// Optional source of historical ingredient usage
#[async_trait]
pub trait UsageHistoryProvider: Send + Sync {
    /// Usage counts recorded before `before`, or `None` when there is no history
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn usage_history(
        &self,
        diet_key: &str,
        before: NaiveDate,
    ) -> AppResult<Option<UsageMaps>>;
}
