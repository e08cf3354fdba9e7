// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides planner fixtures, in-memory stores, and service construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    missing_docs
)]
//! Shared test utilities for `dieetcoach`
//!
//! The fixture models one anti-inflammatory profile: gluten and dairy are hard
//! drops, green vegetables are forced once a day, red meat is softly limited
//! and oily fish is whitelisted.

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use dieetcoach::models::{
    CategoryRow, FlavorPoolItem, MealSlot, NamePattern, PoolItem, RecipeTemplate, RuleRow,
    SlotRole, TemplateIngredientPools, TemplateSlot, UsageMaps,
};
use dieetcoach::nutrition::{MacrosPer100g, NutritionTable};
use dieetcoach::providers::{InMemoryStore, PlannerFixture};
use dieetcoach::services::{GenerateRequest, MealPlanService};
use dieetcoach_engine::{GenerationInputs, PlannerConfig};

pub const PROFILE: &str = "anti-inflammatoir";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn category(id: &str, code: &str, label: &str, terms: &[&str]) -> CategoryRow {
    CategoryRow {
        id: id.to_owned(),
        code: code.to_owned(),
        label: label.to_owned(),
        terms: terms.iter().map(|t| (*t).to_owned()).collect(),
        synonyms: Vec::new(),
        active: true,
    }
}

pub fn rule(id: &str, profile: &str, category_id: &str, action: &str) -> RuleRow {
    RuleRow {
        id: id.to_owned(),
        diet_profile_id: profile.to_owned(),
        category_id: category_id.to_owned(),
        action: action.to_owned(),
        min_per_day: None,
        min_per_week: None,
        max_per_day: None,
        max_per_week: None,
        strictness: "hard".to_owned(),
        priority: 10,
        active: true,
        paused: false,
    }
}

pub fn categories() -> Vec<CategoryRow> {
    let mut dairy = category(
        "cat-zuivel",
        "zuivel",
        "Koemelkzuivel",
        &["melk", "kaas", "yoghurt"],
    );
    dairy.synonyms = vec!["roomboter".to_owned()];
    vec![
        category("cat-gluten", "gluten", "Glutenbevattend graan", &["tarwe", "gerst", "rogge"]),
        dairy,
        category(
            "cat-groen",
            "groene_groente",
            "Groene groente",
            &["broccoli", "spinazie", "courgette", "boerenkool", "sperziebonen"],
        ),
        category(
            "cat-rood-vlees",
            "rood_vlees",
            "Rood vlees",
            &["rundergehakt", "biefstuk", "lamsvlees"],
        ),
        category("cat-vette-vis", "vette_vis", "Vette vis", &["zalm", "makreel"]),
    ]
}

pub fn rules() -> Vec<RuleRow> {
    let mut force_green = rule("ai-force-groen", PROFILE, "cat-groen", "force");
    force_green.min_per_day = Some(1);
    force_green.priority = 20;

    let mut limit_red_meat = rule("ai-limit-rood-vlees", PROFILE, "cat-rood-vlees", "limit");
    limit_red_meat.max_per_week = Some(2);
    limit_red_meat.strictness = "soft".to_owned();
    limit_red_meat.priority = 30;

    let mut pass_fish = rule("ai-pass-vis", PROFILE, "cat-vette-vis", "pass");
    pass_fish.priority = 50;

    vec![
        rule("ai-drop-gluten", PROFILE, "cat-gluten", "drop"),
        rule("ai-drop-zuivel", PROFILE, "cat-zuivel", "drop"),
        force_green,
        limit_red_meat,
        pass_fish,
    ]
}

fn flavor(code: &str, name: &str, default_grams: f64) -> FlavorPoolItem {
    FlavorPoolItem {
        code: code.to_owned(),
        display_name: name.to_owned(),
        default_grams,
        min_grams: 1.0,
        max_grams: 15.0,
    }
}

/// Pools with three items that the hard drops remove: geitenkaas, roomboter
/// and the wheat soy sauce
pub fn pools() -> TemplateIngredientPools {
    TemplateIngredientPools {
        protein: vec![
            PoolItem::new("kipfilet", "Kipfilet"),
            PoolItem::new("zalm", "Zalm"),
            PoolItem::new("tofu", "Tofu"),
            PoolItem::new("kalkoenfilet", "Kalkoenfilet"),
            PoolItem::new("biefstuk", "Biefstuk"),
            PoolItem::new("geitenkaas", "Geitenkaas"),
        ],
        vegetable: vec![
            PoolItem::new("broccoli", "Broccoli"),
            PoolItem::new("spinazie", "Spinazie"),
            PoolItem::new("courgette", "Courgette"),
            PoolItem::new("boerenkool", "Boerenkool"),
            PoolItem::new("sperziebonen", "Sperziebonen"),
        ],
        fat: vec![
            PoolItem::new("olijfolie", "Olijfolie"),
            PoolItem::new("avocado", "Avocado"),
            PoolItem::new("roomboter", "Roomboter"),
        ],
        flavor: vec![
            flavor("gember", "Gember", 5.0),
            flavor("peterselie", "Peterselie", 5.0),
            flavor("sojasaus_tarwe", "Sojasaus (tarwe)", 10.0),
        ],
    }
}

fn template(id: &str, name: &str, with_fat: bool) -> RecipeTemplate {
    let mut slots = vec![
        TemplateSlot::new(SlotRole::Protein, 150.0, 100.0, 200.0),
        TemplateSlot::new(SlotRole::Vegetable1, 120.0, 80.0, 180.0),
        TemplateSlot::new(SlotRole::Vegetable2, 80.0, 50.0, 120.0),
    ];
    if with_fat {
        slots.push(TemplateSlot::new(SlotRole::Fat, 10.0, 5.0, 15.0));
    }
    RecipeTemplate {
        id: id.to_owned(),
        display_name: name.to_owned(),
        slots,
        step_count: 3,
    }
}

pub fn generation_inputs() -> GenerationInputs {
    GenerationInputs {
        pools: pools(),
        templates: vec![
            template("roerbak", "Roerbakschotel", true),
            template("ovenschotel", "Ovenschotel", true),
            template("salade", "Maaltijdsalade", false),
        ],
        settings: None,
        name_patterns: vec![NamePattern {
            template_id: "roerbak".to_owned(),
            meal_slot: MealSlot::Dinner,
            pattern: "Roerbak van {protein} met {veg1} en {veg2}".to_owned(),
        }],
    }
}

pub fn usage_history() -> UsageMaps {
    let mut usage = UsageMaps::default();
    usage.protein.insert("kipfilet".to_owned(), 6);
    usage.vegetable.insert("broccoli".to_owned(), 4);
    usage
}

/// Macros for every code that can survive the pool filter
pub fn nutrition_table() -> NutritionTable {
    NutritionTable::new([
        ("kipfilet", MacrosPer100g::new(110.0, 23.0, 0.0, 1.5)),
        ("zalm", MacrosPer100g::new(208.0, 20.0, 0.0, 13.0)),
        ("tofu", MacrosPer100g::new(144.0, 15.0, 3.0, 8.0)),
        ("kalkoenfilet", MacrosPer100g::new(104.0, 24.0, 0.0, 1.0)),
        ("biefstuk", MacrosPer100g::new(150.0, 26.0, 0.0, 5.0)),
        ("broccoli", MacrosPer100g::new(34.0, 2.8, 7.0, 0.4)),
        ("spinazie", MacrosPer100g::new(23.0, 2.9, 3.6, 0.4)),
        ("courgette", MacrosPer100g::new(17.0, 1.2, 3.1, 0.3)),
        ("boerenkool", MacrosPer100g::new(49.0, 4.3, 8.8, 0.9)),
        ("sperziebonen", MacrosPer100g::new(31.0, 1.8, 7.0, 0.2)),
        ("olijfolie", MacrosPer100g::new(884.0, 0.0, 0.0, 100.0)),
        ("avocado", MacrosPer100g::new(160.0, 2.0, 8.5, 14.7)),
        ("gember", MacrosPer100g::new(80.0, 1.8, 17.8, 0.8)),
        ("peterselie", MacrosPer100g::new(36.0, 3.0, 6.3, 0.8)),
    ])
}

pub fn store() -> InMemoryStore {
    InMemoryStore::new(categories(), rules())
        .with_default_inputs(generation_inputs())
        .with_usage_for(PROFILE, usage_history())
}

pub fn fixture() -> PlannerFixture {
    PlannerFixture {
        categories: categories(),
        rules: rules(),
        generation: Some(generation_inputs()),
        ..PlannerFixture::default()
    }
}

pub fn service() -> MealPlanService {
    init_test_logging();
    MealPlanService::in_memory(store(), PlannerConfig::default())
}

pub fn service_with_nutrition() -> MealPlanService {
    service().with_nutrition(Arc::new(nutrition_table()))
}

pub fn request(days: u32, seed: u64) -> GenerateRequest {
    GenerateRequest {
        diet_profile_id: PROFILE.to_owned(),
        start_date: date(2025, 3, 3),
        day_count: days,
        meal_slots: vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
        seed: Some(seed),
        exclude_inflammatory_triggers: false,
    }
}
