// ABOUTME: Integration tests for the meal plan service
// ABOUTME: Covers generation, pool filtering, ingredient evaluation, and meal regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use dieetcoach::constants::keywords;
use dieetcoach::errors::ErrorCode;
use dieetcoach::models::{IngredientRef, MealSlot, Phase, Plan, PoolItem, Strictness};
use dieetcoach::providers::InMemoryStore;
use dieetcoach::services::MealPlanService;
use dieetcoach_engine::{LoadOptions, PlannerConfig};
use uuid::Uuid;

use common::{date, request, service, service_with_nutrition, PROFILE};

const NO_OPTIONS: LoadOptions = LoadOptions {
    exclude_inflammatory_triggers: false,
};

fn names(list: &[&str]) -> Vec<IngredientRef> {
    list.iter().map(|name| IngredientRef::named(*name)).collect()
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_generate_week_plan_is_sane_and_compliant() {
    let generated = service().generate(&request(7, 42)).await.unwrap();
    let plan = &generated.plan;

    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.meal_count(), 21);
    assert_eq!(plan.metadata.diet_key, PROFILE);
    assert_eq!(plan.metadata.end_date, date(2025, 3, 9));
    for day in &plan.days {
        let slots: Vec<MealSlot> = day.meals.iter().map(|meal| meal.meal_slot).collect();
        assert_eq!(
            slots,
            vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
        );
    }

    assert!(generated.sanity_issues.is_empty(), "{:?}", generated.sanity_issues);
    assert!(generated.compliance.ok, "{:?}", generated.compliance.failing_days);
    assert_eq!(generated.compliance.days.len(), 7);
    assert!(plan.quality.is_some());
}

#[tokio::test]
async fn test_hard_drops_are_removed_from_pools_before_synthesis() {
    let generated = service().generate(&request(7, 7)).await.unwrap();

    let removed: HashSet<&str> = generated
        .removed_pool_items
        .iter()
        .map(|item| item.code.as_str())
        .collect();
    assert_eq!(
        removed,
        HashSet::from(["geitenkaas", "roomboter", "sojasaus_tarwe"])
    );
    let dairy = generated
        .removed_pool_items
        .iter()
        .find(|item| item.code == "geitenkaas")
        .unwrap();
    assert_eq!(dairy.category_code, "zuivel");

    for (_, meal) in generated.plan.meals() {
        assert!(meal
            .ingredients
            .iter()
            .all(|ing| !removed.contains(ing.code.as_str())));
    }
}

#[tokio::test]
async fn test_same_seed_gives_same_meals() {
    let svc = service();
    let content = |plan: &Plan| -> Vec<(String, Vec<String>)> {
        plan.meals()
            .map(|(_, meal)| {
                (
                    meal.name.clone(),
                    meal.ingredients.iter().map(|i| i.code.clone()).collect(),
                )
            })
            .collect()
    };

    let first = svc.generate(&request(5, 2024)).await.unwrap();
    let second = svc.generate(&request(5, 2024)).await.unwrap();

    assert_eq!(content(&first.plan), content(&second.plan));
}

#[tokio::test]
async fn test_nutrition_lookup_attaches_macros() {
    let generated = service_with_nutrition()
        .generate(&request(2, 11))
        .await
        .unwrap();

    for (_, meal) in generated.plan.meals() {
        let macros = meal.estimated_macros.expect("every code has nutrition data");
        assert!(macros.calories > 0.0);
        assert!(macros.protein_g > 0.0);
    }
    for day in &generated.plan.days {
        assert!(day.total_macros().is_some());
    }
}

#[tokio::test]
async fn test_meals_carry_no_macros_without_nutrition() {
    let generated = service().generate(&request(1, 11)).await.unwrap();
    assert!(generated
        .plan
        .meals()
        .all(|(_, meal)| meal.estimated_macros.is_none()));
}

#[tokio::test]
async fn test_generate_without_inputs_is_config_missing() {
    let store = InMemoryStore::new(common::categories(), common::rules());
    let svc = MealPlanService::in_memory(store, PlannerConfig::default());

    let err = svc.generate(&request(1, 1)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
    assert!(err.message.contains(PROFILE));
}

#[tokio::test]
async fn test_protein_pool_emptied_by_rules_is_reported() {
    let mut inputs = common::generation_inputs();
    inputs.pools.protein = vec![PoolItem::new("geitenkaas", "Geitenkaas")];
    let store =
        InMemoryStore::new(common::categories(), common::rules()).with_default_inputs(inputs);
    let svc = MealPlanService::in_memory(store, PlannerConfig::default());

    let err = svc.generate(&request(1, 1)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientIngredients);
    assert!(err.message.contains("protein"));
}

#[tokio::test]
async fn test_zero_meal_slots_is_invalid_input() {
    let mut req = request(3, 1);
    req.meal_slots.clear();

    let err = service().generate(&req).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// Ingredient Evaluation
// ============================================================================

#[tokio::test]
async fn test_evaluate_reports_hard_drop_violation() {
    let result = service()
        .evaluate_ingredients(PROFILE, names(&["Geitenkaas", "Broccoli"]), NO_OPTIONS)
        .await
        .unwrap();

    assert!(!result.ok);
    assert_eq!(result.failed_phase, Some(Phase::Drop));
    assert_eq!(result.phases.len(), 1);
    let violation = &result.phases[0].violations[0];
    assert_eq!(violation.category_code, "zuivel");
    assert_eq!(violation.ingredient.as_deref(), Some("Geitenkaas"));
}

#[tokio::test]
async fn test_evaluate_reports_force_deficit() {
    let result = service()
        .evaluate_ingredients(PROFILE, names(&["Kipfilet"]), NO_OPTIONS)
        .await
        .unwrap();

    assert!(!result.ok);
    assert_eq!(result.failed_phase, Some(Phase::Force));
    assert_eq!(result.force_deficits.len(), 1);
    let deficit = &result.force_deficits[0];
    assert_eq!(deficit.category_code, "groene_groente");
    assert_eq!(deficit.required, 1);
    assert_eq!(deficit.found, 0);
    assert_eq!(deficit.missing, 1);
}

#[tokio::test]
async fn test_soft_limit_excess_is_only_a_warning() {
    let result = service()
        .evaluate_ingredients(
            PROFILE,
            names(&["Biefstuk", "Rundergehakt", "Lamsvlees", "Spinazie"]),
            NO_OPTIONS,
        )
        .await
        .unwrap();

    assert!(result.ok, "{}", result.summary);
    assert_eq!(result.failed_phase, None);
    assert_eq!(result.limit_excesses.len(), 1);
    let excess = &result.limit_excesses[0];
    assert_eq!(excess.allowed, 2);
    assert_eq!(excess.found, 3);
    assert_eq!(excess.excess, 1);
    assert_eq!(excess.strictness, Strictness::Soft);
    assert!(!result.warnings.is_empty());
}

#[tokio::test]
async fn test_inflammatory_trigger_exclusion_is_opt_in() {
    let svc = service();
    let ingredients = names(&["Suiker", "Broccoli"]);

    let without = svc
        .evaluate_ingredients(PROFILE, ingredients.clone(), NO_OPTIONS)
        .await
        .unwrap();
    assert!(without.ok);

    let with = svc
        .evaluate_ingredients(
            PROFILE,
            ingredients,
            LoadOptions {
                exclude_inflammatory_triggers: true,
            },
        )
        .await
        .unwrap();
    assert!(!with.ok);
    assert_eq!(with.failed_phase, Some(Phase::Drop));
    assert_eq!(
        with.phases[0].violations[0].category_code,
        keywords::INFLAMMATORY_CATEGORY_CODE
    );
}

#[tokio::test]
async fn test_profile_without_rules_passes_everything() {
    let result = service()
        .evaluate_ingredients("onbekend", names(&["Geitenkaas", "Suiker"]), NO_OPTIONS)
        .await
        .unwrap();

    assert!(result.ok);
    assert_eq!(result.phases.len(), Phase::ORDER.len());
    assert_eq!(result.summary, "Passed all phases");
}

// ============================================================================
// Meal Regeneration
// ============================================================================

#[tokio::test]
async fn test_regenerate_meal_replaces_only_that_meal() {
    let svc = service();
    let original = svc.generate(&request(3, 5)).await.unwrap().plan;
    let (target_date, target) = original.meals().nth(4).unwrap();
    let target_id = target.id;

    let regenerated = svc
        .regenerate_meal(&original, target_id, Some(9), NO_OPTIONS)
        .await
        .unwrap();
    let plan = &regenerated.plan;

    assert_eq!(plan.meal_count(), original.meal_count());
    assert!(plan.find_meal(target_id).is_none());
    assert!(original.find_meal(target_id).is_some(), "input plan is untouched");

    let (new_date, replacement) = plan.meals().nth(4).unwrap();
    assert_eq!(new_date, target_date);
    assert_eq!(replacement.meal_slot, target.meal_slot);

    for ((_, before), (_, after)) in original.meals().zip(plan.meals()) {
        if before.id != target_id {
            assert_eq!(before, after);
        }
    }
}

#[tokio::test]
async fn test_regenerate_unknown_meal_is_not_found() {
    let svc = service();
    let plan = svc.generate(&request(1, 5)).await.unwrap().plan;

    let err = svc
        .regenerate_meal(&plan, Uuid::new_v4(), None, NO_OPTIONS)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
