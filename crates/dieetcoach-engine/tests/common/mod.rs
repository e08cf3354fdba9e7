// ABOUTME: Shared fixtures for engine integration tests
// ABOUTME: Builds pools, templates, plans, and constraints used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use dieetcoach_core::models::{
    Day, DraftIngredient, FlavorPoolItem, IngredientRole, Meal, MealDraft, MealSlot, Plan,
    PoolItem, RecipeTemplate, SlotRole, TemplateIngredientPools, TemplateSlot,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn flavor(code: &str, name: &str) -> FlavorPoolItem {
    FlavorPoolItem {
        code: code.to_owned(),
        display_name: name.to_owned(),
        default_grams: 5.0,
        min_grams: 1.0,
        max_grams: 10.0,
    }
}

pub fn pools() -> TemplateIngredientPools {
    TemplateIngredientPools {
        protein: vec![
            PoolItem::new("kipfilet", "Kipfilet"),
            PoolItem::new("zalm", "Zalm"),
            PoolItem::new("ei", "Ei"),
            PoolItem::new("tofu", "Tofu"),
        ],
        vegetable: vec![
            PoolItem::new("broccoli", "Broccoli"),
            PoolItem::new("wortel", "Wortel"),
            PoolItem::new("spinazie", "Spinazie"),
            PoolItem::new("courgette", "Courgette"),
            PoolItem::new("paprika", "Paprika"),
        ],
        fat: vec![
            PoolItem::new("olijfolie", "Olijfolie"),
            PoolItem::new("avocado", "Avocado"),
        ],
        flavor: vec![
            flavor("dille", "Dille"),
            flavor("peterselie", "Peterselie"),
            flavor("knoflook", "Knoflook"),
        ],
    }
}

pub fn template(id: &str, name: &str, with_fat: bool) -> RecipeTemplate {
    let mut slots = vec![
        TemplateSlot::new(SlotRole::Protein, 150.0, 100.0, 200.0),
        TemplateSlot::new(SlotRole::Vegetable1, 100.0, 80.0, 150.0),
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

pub fn templates() -> Vec<RecipeTemplate> {
    vec![
        template("roerbak", "Roerbakschotel", true),
        template("ovenschotel", "Ovenschotel", true),
        template("salade", "Maaltijdsalade", false),
    ]
}

pub fn ingredient(code: &str, name: &str, grams: f64, role: IngredientRole) -> DraftIngredient {
    DraftIngredient {
        code: code.to_owned(),
        grams,
        display_name: name.to_owned(),
        role,
    }
}

pub fn meal(name: &str, on: NaiveDate, ingredients: Vec<DraftIngredient>) -> Meal {
    let signature = ingredients
        .iter()
        .filter(|i| matches!(i.role, IngredientRole::Protein | IngredientRole::Vegetable))
        .map(|i| i.code.as_str())
        .collect::<Vec<_>>()
        .join("|");
    Meal::from_draft(
        MealDraft {
            name: name.to_owned(),
            template_id: "roerbak".to_owned(),
            meal_slot: MealSlot::Dinner,
            date: on,
            ingredient_refs: ingredients,
            signature,
            forced_repeat: false,
        },
        None,
    )
}

pub fn plain_meal(name: &str, on: NaiveDate) -> Meal {
    meal(
        name,
        on,
        vec![
            ingredient("kipfilet", "Kipfilet", 150.0, IngredientRole::Protein),
            ingredient("broccoli", "Broccoli", 100.0, IngredientRole::Vegetable),
        ],
    )
}

pub fn plan_of(days: Vec<Day>) -> Plan {
    Plan::new("anti_inflammatory", days, None).unwrap()
}
