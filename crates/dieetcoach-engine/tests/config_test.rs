// ABOUTME: Tests for planner configuration defaults, validation, and environment overrides
// ABOUTME: Environment tests run serially because they mutate process-wide variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use dieetcoach_engine::config::{
    ConfigError, GeneratorSettings, PlannerConfig, SanityThresholds, ScoringWeights,
};
use serial_test::serial;

#[test]
fn test_defaults_match_documented_values() {
    let config = PlannerConfig::default();
    assert_eq!(config.generator.max_ingredients, 10);
    assert_eq!(config.generator.max_flavor_items, 2);
    assert_eq!(config.generator.protein_repeat_cap_7d, 2);
    assert_eq!(config.generator.template_repeat_cap_7d, 3);
    assert_eq!(config.generator.candidates_per_slot, 5);
    assert_eq!(config.scoring.protein_new_bonus, 2);
    assert_eq!(config.scoring.template_under_cap_bonus, 1);
    assert_eq!(config.scoring.protein_at_cap_penalty, -3);
    assert_eq!(config.scoring.template_at_cap_penalty, -2);
    assert_eq!(config.sanity.max_ingredients, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_generator_settings_validation() {
    let too_small = GeneratorSettings {
        max_ingredients: 2,
        ..GeneratorSettings::default()
    };
    assert!(matches!(
        too_small.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let no_retries = GeneratorSettings {
        signature_retry_limit: 0,
        ..GeneratorSettings::default()
    };
    assert!(no_retries.validate().is_err());
}

#[test]
fn test_positive_penalty_is_rejected() {
    let config = PlannerConfig {
        scoring: ScoringWeights {
            protein_at_cap_penalty: 1,
            ..ScoringWeights::default()
        },
        ..PlannerConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_sanity_bounds_must_be_ordered() {
    let thresholds = SanityThresholds {
        min_grams: 500.0,
        ..SanityThresholds::default()
    };
    assert!(thresholds.validate().is_err());
}

#[test]
fn test_generator_settings_deserialize_with_defaults() {
    let settings: GeneratorSettings =
        serde_json::from_str(r#"{"maxIngredients": 6, "proteinRepeatCap7d": 1}"#).unwrap();
    assert_eq!(settings.max_ingredients, 6);
    assert_eq!(settings.protein_repeat_cap_7d, 1);
    assert_eq!(settings.max_flavor_items, 2);
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    env::set_var("DIEETCOACH_MAX_INGREDIENTS", "8");
    env::set_var("DIEETCOACH_PROTEIN_REPEAT_CAP_7D", "1");
    env::set_var("DIEETCOACH_SANITY_MAX_GRAMS", "350");

    let config = PlannerConfig::load().unwrap();

    assert_eq!(config.generator.max_ingredients, 8);
    assert_eq!(config.generator.protein_repeat_cap_7d, 1);
    assert!((config.sanity.max_grams - 350.0).abs() < f64::EPSILON);

    env::remove_var("DIEETCOACH_MAX_INGREDIENTS");
    env::remove_var("DIEETCOACH_PROTEIN_REPEAT_CAP_7D");
    env::remove_var("DIEETCOACH_SANITY_MAX_GRAMS");
}

#[test]
#[serial]
fn test_unparseable_environment_value_fails() {
    env::set_var("DIEETCOACH_CANDIDATES_PER_SLOT", "many");
    let result = PlannerConfig::load();
    env::remove_var("DIEETCOACH_CANDIDATES_PER_SLOT");

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_invalid_environment_value_fails_validation() {
    env::set_var("DIEETCOACH_MAX_INGREDIENTS", "2");
    let result = PlannerConfig::load();
    env::remove_var("DIEETCOACH_MAX_INGREDIENTS");

    assert!(result.is_err());
}
