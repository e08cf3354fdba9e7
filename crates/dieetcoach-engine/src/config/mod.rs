// ABOUTME: Planner configuration for draft generation, candidate scoring, and sanity checks
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `generator` - Ingredient caps, signature retries, weekly repeat caps
//! - `scoring` - Candidate scoring weights
//! - `sanity` - Post-generation sanity thresholds
//!
//! Values start from the constants in `dieetcoach_core::constants`, then
//! `DIEETCOACH_*` environment variables override them. Generator settings
//! returned by the storage provider take precedence over both for a single run.

pub mod error;
pub mod generator;
pub mod sanity;
pub mod scoring;

pub use error::ConfigError;
pub use generator::GeneratorSettings;
pub use sanity::SanityThresholds;
pub use scoring::ScoringWeights;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Draft generator and synthesizer settings
    pub generator: GeneratorSettings,
    /// Candidate scoring weights
    pub scoring: ScoringWeights,
    /// Sanity validator thresholds
    pub sanity: SanityThresholds,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any sub-configuration is inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.sanity.validate()?;

        if self.scoring.protein_at_cap_penalty > 0 || self.scoring.template_at_cap_penalty > 0 {
            return Err(ConfigError::ValueOutOfRange("scoring penalties must not be positive"));
        }
        if self.generator.max_ingredients > self.sanity.max_ingredients {
            warn!(
                generator_max = self.generator.max_ingredients,
                sanity_max = self.sanity.max_ingredients,
                "Generator may build meals the sanity validator will flag"
            );
        }
        Ok(())
    }

    /// Copy of this configuration with run-specific generator settings
    #[must_use]
    pub fn with_generator(&self, generator: GeneratorSettings) -> Self {
        Self {
            generator,
            ..self.clone()
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "DIEETCOACH_MAX_INGREDIENTS",
            &mut self.generator.max_ingredients,
        )?;
        Self::apply_env_var(
            "DIEETCOACH_MAX_FLAVOR_ITEMS",
            &mut self.generator.max_flavor_items,
        )?;
        Self::apply_env_var(
            "DIEETCOACH_SIGNATURE_RETRY_LIMIT",
            &mut self.generator.signature_retry_limit,
        )?;
        Self::apply_env_var(
            "DIEETCOACH_PROTEIN_REPEAT_CAP_7D",
            &mut self.generator.protein_repeat_cap_7d,
        )?;
        Self::apply_env_var(
            "DIEETCOACH_TEMPLATE_REPEAT_CAP_7D",
            &mut self.generator.template_repeat_cap_7d,
        )?;
        Self::apply_env_var(
            "DIEETCOACH_CANDIDATES_PER_SLOT",
            &mut self.generator.candidates_per_slot,
        )?;

        // Sanity overrides
        Self::apply_env_var("DIEETCOACH_SANITY_MAX_GRAMS", &mut self.sanity.max_grams)?;
        Self::apply_env_var(
            "DIEETCOACH_SANITY_MIN_NAME_CHARS",
            &mut self.sanity.min_name_chars,
        )?;

        Ok(self)
    }
}
