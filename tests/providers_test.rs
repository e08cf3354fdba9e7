// ABOUTME: Integration tests for the storage providers and planner fixtures
// ABOUTME: Tests in-memory rule filtering, input precedence, usage history, and fixture loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;
use std::path::Path;

use dieetcoach::errors::ErrorCode;
use dieetcoach::providers::{
    GenerationInputStore, InMemoryStore, PlannerFixture, RuleStore, UsageHistoryProvider,
};
use dieetcoach_engine::GenerationInputs;
use tempfile::NamedTempFile;

use common::{date, PROFILE};

// ============================================================================
// In-Memory Store
// ============================================================================

#[tokio::test]
async fn test_rules_are_filtered_by_profile() {
    let mut rules = common::rules();
    rules.push(common::rule("kh-drop", "koolhydraatarm", "cat-gluten", "drop"));
    let store = InMemoryStore::new(common::categories(), rules);

    let anti = store.rules_for_profile(PROFILE).await.unwrap();
    assert_eq!(anti.len(), 5);
    assert!(anti.iter().all(|r| r.diet_profile_id == PROFILE));

    let low_carb = store.rules_for_profile("koolhydraatarm").await.unwrap();
    assert_eq!(low_carb.len(), 1);
    assert_eq!(low_carb[0].id, "kh-drop");

    assert!(store.rules_for_profile("onbekend").await.unwrap().is_empty());
    assert_eq!(store.categories().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_diet_specific_inputs_take_precedence() {
    let shared = common::generation_inputs();
    let mut low_carb = common::generation_inputs();
    low_carb.templates.truncate(1);

    let store = InMemoryStore::default()
        .with_default_inputs(shared)
        .with_inputs_for("koolhydraatarm", low_carb);

    let inputs = store.generation_inputs("koolhydraatarm").await.unwrap();
    assert_eq!(inputs.templates.len(), 1);

    let inputs = store.generation_inputs(PROFILE).await.unwrap();
    assert_eq!(inputs.templates.len(), 3);
}

#[tokio::test]
async fn test_missing_inputs_is_config_missing() {
    let err = InMemoryStore::default()
        .generation_inputs(PROFILE)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[tokio::test]
async fn test_usage_history_is_per_diet() {
    let store = common::store();
    let before = date(2025, 3, 3);

    let usage = store.usage_history(PROFILE, before).await.unwrap().unwrap();
    assert_eq!(usage.protein.get("kipfilet"), Some(&6));

    assert!(store
        .usage_history("koolhydraatarm", before)
        .await
        .unwrap()
        .is_none());
}

// ============================================================================
// Planner Fixtures
// ============================================================================

#[test]
fn test_fixture_from_json_uses_defaults_for_missing_sections() {
    let fixture = PlannerFixture::from_json(
        r#"{
            "categories": [{ "id": "c1", "code": "noten", "label": "Noten", "terms": ["walnoot"] }],
            "rules": [{ "id": "r1", "dietProfileId": "keto", "categoryId": "c1", "action": "drop" }]
        }"#,
    )
    .unwrap();

    assert_eq!(fixture.categories.len(), 1);
    assert!(fixture.categories[0].active);
    assert!(fixture.categories[0].synonyms.is_empty());
    let rule = &fixture.rules[0];
    assert_eq!(rule.strictness, "hard");
    assert_eq!(rule.priority, 100);
    assert!(rule.active && !rule.paused);
    assert!(fixture.generation.is_none());
    assert!(fixture.nutrition_table().is_empty());
}

#[test]
fn test_malformed_fixture_is_serialization_error() {
    let err = PlannerFixture::from_json("{ \"categories\": 12 }").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_fixture_round_trips_through_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&common::fixture()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let fixture = PlannerFixture::from_file(file.path()).await.unwrap();
    assert_eq!(fixture.rules.len(), 5);

    let store = fixture.store();
    let inputs: GenerationInputs = store.generation_inputs("any-diet").await.unwrap();
    assert_eq!(inputs, common::generation_inputs());
}

#[tokio::test]
async fn test_missing_fixture_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlannerFixture::from_file(dir.path().join("absent.json"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.message.contains("absent.json"));
    assert!(err.source.is_some());
}

#[tokio::test]
async fn test_demo_fixture_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/fixture.json");
    let fixture = PlannerFixture::from_file(&path).await.unwrap();

    assert!(fixture.generation.is_some());
    assert!(fixture.usage_history.contains_key(PROFILE));
    let table = fixture.nutrition_table();
    assert!(table.get("Kipfilet").is_some());

    let store = fixture.store();
    let rules = store.rules_for_profile(PROFILE).await.unwrap();
    assert!(!rules.is_empty());
}
