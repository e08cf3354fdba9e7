// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Generator defaults, scoring weights, sanity bounds, and keyword lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by the engine stage that consumes them. The
//! engine's `PlannerConfig` starts from these values and lets the environment
//! or the storage provider override them.

/// Draft generation defaults
pub mod generation {
    /// Maximum number of ingredients in one meal
    pub const DEFAULT_MAX_INGREDIENTS: usize = 10;
    /// Maximum number of flavor additions per meal
    pub const DEFAULT_MAX_FLAVOR_ITEMS: usize = 2;
    /// Attempts at finding an unused protein+veg+veg signature before accepting a repeat
    pub const DEFAULT_SIGNATURE_RETRY_LIMIT: u32 = 6;
    /// Times a protein may appear within one 7-day block before it is penalised
    pub const DEFAULT_PROTEIN_REPEAT_CAP_7D: u32 = 2;
    /// Times a template may appear within one 7-day block before it is penalised
    pub const DEFAULT_TEMPLATE_REPEAT_CAP_7D: u32 = 3;
    /// Candidate drafts generated per meal slot
    pub const DEFAULT_CANDIDATES_PER_SLOT: usize = 5;
    /// Seed stride between signature retry attempts
    pub const SEED_ATTEMPT_STRIDE: u64 = 1000;
    /// Seed offset of the first vegetable pick
    pub const SEED_OFFSET_VEG1: u64 = 1;
    /// Seed offset of the second vegetable pick
    pub const SEED_OFFSET_VEG2: u64 = 2;
    /// Seed offset of the fat pick
    pub const SEED_OFFSET_FAT: u64 = 3;
    /// Seed offset of the first flavor pick; later flavors add their index
    pub const SEED_OFFSET_FLAVOR: u64 = 4;
    /// Seed stride between consecutive days in a plan
    pub const SEED_DAY_STRIDE: u64 = 97;
    /// Seed stride between meal slots within one day
    pub const SEED_SLOT_STRIDE: u64 = 31;
    /// Seed stride between candidates for one slot
    pub const SEED_CANDIDATE_STRIDE: u64 = 7;
    /// Days per repetition window
    pub const WEEK_LENGTH_DAYS: u32 = 7;
}

/// Candidate scoring weights
pub mod scoring {
    /// Bonus when the candidate protein has not been used this week
    pub const PROTEIN_NEW_BONUS: i32 = 2;
    /// Bonus when the candidate template is below its weekly cap
    pub const TEMPLATE_UNDER_CAP_BONUS: i32 = 1;
    /// Penalty when the candidate protein reached its weekly cap
    pub const PROTEIN_AT_CAP_PENALTY: i32 = -3;
    /// Penalty when the candidate template reached its weekly cap
    pub const TEMPLATE_AT_CAP_PENALTY: i32 = -2;
    /// Number of top proteins reported in quality metrics
    pub const TOP_PROTEINS_REPORTED: usize = 5;
}

/// Post-generation sanity bounds
pub mod sanity {
    /// Minimum ingredients per meal
    pub const MIN_INGREDIENTS_PER_MEAL: usize = 1;
    /// Maximum ingredients per meal
    pub const MAX_INGREDIENTS_PER_MEAL: usize = 10;
    /// Minimum grams for any single ingredient
    pub const MIN_GRAMS_PER_INGREDIENT: f64 = 1.0;
    /// Maximum grams for any single ingredient
    pub const MAX_GRAMS_PER_INGREDIENT: f64 = 400.0;
    /// Shortest acceptable meal name (characters, trimmed)
    pub const MIN_MEAL_NAME_CHARS: usize = 3;
    /// Names that indicate a generator placeholder rather than a real meal
    pub const PLACEHOLDER_MEAL_NAMES: &[&str] = &[
        "tbd",
        "todo",
        "n/a",
        "na",
        "none",
        "null",
        "undefined",
        "placeholder",
        "untitled",
        "meal",
        "maaltijd",
        "recept",
        "test",
        "xxx",
        "...",
    ];
}

/// Keyword heuristics used by the generator and rule loader
pub mod keywords {
    /// Display-name fragments that mark an item as fat-like
    pub const FAT_LIKE_KEYWORDS: &[&str] = &[
        "olie", "oil", "boter", "butter", "ghee", "avocado", "noten", "nuts", "pinda", "kokos",
        "tahin", "mayo", "room", "vet",
    ];
    /// Category code of the synthetic inflammatory-trigger exclusion rule
    pub const INFLAMMATORY_CATEGORY_CODE: &str = "inflammatory_triggers";
    /// Category label of the synthetic inflammatory-trigger exclusion rule
    pub const INFLAMMATORY_CATEGORY_LABEL: &str = "Ontstekingsbevorderende triggers";
    /// Terms excluded by the synthetic inflammatory-trigger rule
    pub const INFLAMMATORY_TRIGGER_TERMS: &[&str] = &[
        "suiker",
        "sugar",
        "glucosestroop",
        "frisdrank",
        "witbrood",
        "alcohol",
        "bewerkt vlees",
        "processed meat",
        "transvet",
        "trans fat",
        "margarine",
        "zonnebloemolie",
    ];
}

/// Generic nouns used when a name pattern references a missing slot
pub mod naming {
    /// Fallback for `{protein}`
    pub const GENERIC_PROTEIN: &str = "eiwit";
    /// Fallback for `{veg1}`/`{veg2}`
    pub const GENERIC_VEGETABLE: &str = "groente";
    /// Fallback for `{templateName}`
    pub const GENERIC_TEMPLATE: &str = "maaltijd";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name of the engine integration surface
    pub const DIEETCOACH: &str = "dieetcoach";
}
