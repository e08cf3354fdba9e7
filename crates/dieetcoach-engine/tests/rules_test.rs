// ABOUTME: Tests for term matching, conflict resolution, rule loading, and phased evaluation
// ABOUTME: Covers DROP/FORCE/LIMIT/PASS scenarios, short-circuiting, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dieetcoach_core::models::{
    CategoryRow, Constraint, Phase, QuotaScope, RuleAction, RuleRow, Strictness, Target,
};
use dieetcoach_engine::rules::loader::SYNTHETIC_RULE_PRIORITY;
use dieetcoach_engine::rules::{
    evaluate, matches, normalize, winning_constraint, LoadOptions, PhaseEvaluator, RuleLoader,
    RuleSet,
};

fn drop_rule(id: &str, code: &str, terms: &[&str]) -> Constraint {
    Constraint::new(id, RuleAction::Drop, code, terms.iter().copied())
}

fn category(id: &str, code: &str, terms: &[&str]) -> CategoryRow {
    CategoryRow {
        id: id.to_owned(),
        code: code.to_owned(),
        label: code.to_uppercase(),
        terms: terms.iter().map(|t| (*t).to_owned()).collect(),
        synonyms: Vec::new(),
        active: true,
    }
}

fn rule(id: &str, category_id: &str, action: &str, priority: i32) -> RuleRow {
    RuleRow {
        id: id.to_owned(),
        diet_profile_id: "profile-1".to_owned(),
        category_id: category_id.to_owned(),
        action: action.to_owned(),
        min_per_day: None,
        min_per_week: None,
        max_per_day: None,
        max_per_week: None,
        strictness: "hard".to_owned(),
        priority,
        active: true,
        paused: false,
    }
}

// ============================================================================
// Term matching
// ============================================================================

#[test]
fn test_normalize_produces_spaced_and_singular_forms() {
    let forms = normalize("Rode_Uien");
    assert!(forms.contains("rode_uien"));
    assert!(forms.contains("rode uien"));

    let forms = normalize("Tomaten");
    assert!(forms.contains("tomaten"));

    let forms = normalize("Noten");
    assert!(forms.contains("noten"));

    let forms = normalize("Appels");
    assert!(forms.contains("appel"));
}

#[test]
fn test_short_names_keep_trailing_s() {
    let forms = normalize("ijs");
    assert!(forms.contains("ijs"));
    assert!(!forms.contains("ij"));
}

#[test]
fn test_matching_is_bidirectional_substring() {
    assert!(matches("tarwebloem", ["tarwe"]));
    assert!(matches("tarwe", ["tarwebloem"]));
    assert!(matches("Volkoren tarwe brood", ["tarwe"]));
    assert!(!matches("rijst", ["tarwe"]));
}

#[test]
fn test_matching_handles_underscore_terms() {
    assert!(matches("geraspte kaas", ["geraspte_kaas"]));
    assert!(matches("geraspte_kaas", ["geraspte kaas"]));
}

// ============================================================================
// Conflict resolution
// ============================================================================

#[test]
fn test_lowest_priority_wins_overlapping_categories() {
    let rule_set = RuleSet::new(vec![
        drop_rule("dairy", "zuivel", &["kaas"]).with_priority(5),
        Constraint::new("cheese-limit", RuleAction::Limit, "kaas", ["kaas"]).with_priority(2),
        Constraint::new("pass-all", RuleAction::Pass, "overig", ["kaas"]).with_priority(9),
    ]);

    let winner = rule_set.winner_for("belegen kaas").unwrap();
    assert_eq!(winner.id, "cheese-limit");

    let again = winning_constraint("belegen kaas", rule_set.constraints()).unwrap();
    assert_eq!(again.id, winner.id);
}

#[test]
fn test_equal_priority_keeps_input_order() {
    let rule_set = RuleSet::new(vec![
        drop_rule("first", "a", &["melk"]).with_priority(3),
        drop_rule("second", "b", &["melk"]).with_priority(3),
    ]);
    assert_eq!(rule_set.winner_for("melk").unwrap().id, "first");
}

#[test]
fn test_unmatched_ingredient_has_no_winner() {
    let rule_set = RuleSet::new(vec![drop_rule("r1", "gluten", &["tarwe"])]);
    assert!(rule_set.winner_for("quinoa").is_none());
}

// ============================================================================
// Rule loading
// ============================================================================

#[test]
fn test_loader_skips_inactive_paused_and_foreign_rules() {
    let categories = vec![
        category("c1", "gluten", &["tarwe", "rogge"]),
        category("c2", "zuivel", &["kaas"]),
    ];
    let mut paused = rule("r2", "c2", "drop", 2);
    paused.paused = true;
    let mut inactive = rule("r3", "c2", "limit", 3);
    inactive.active = false;
    let mut foreign = rule("r4", "c2", "force", 4);
    foreign.diet_profile_id = "profile-2".to_owned();

    let rules = vec![rule("r1", "c1", "drop", 1), paused, inactive, foreign];
    let rule_set = RuleLoader::load("profile-1", &categories, &rules, LoadOptions::default());

    assert_eq!(rule_set.len(), 1);
    assert_eq!(rule_set.constraints()[0].id, "r1");
    assert!(rule_set.constraints()[0].terms.contains("rogge"));
}

#[test]
fn test_loader_drops_unrecognized_action_and_strictness() {
    let categories = vec![category("c1", "gluten", &["tarwe"])];
    let mut bad_strictness = rule("r2", "c1", "limit", 2);
    bad_strictness.strictness = "sometimes".to_owned();
    let rules = vec![rule("r1", "c1", "exclude", 1), bad_strictness];

    let rule_set = RuleLoader::load("profile-1", &categories, &rules, LoadOptions::default());
    assert!(rule_set.is_empty());
}

#[test]
fn test_loader_drops_rules_without_terms_or_category() {
    let categories = vec![
        category("c1", "leeg", &["  "]),
        CategoryRow {
            active: false,
            ..category("c2", "uit", &["suiker"])
        },
    ];
    let rules = vec![
        rule("r1", "c1", "drop", 1),
        rule("r2", "c2", "drop", 1),
        rule("r3", "missing", "drop", 1),
    ];
    let rule_set = RuleLoader::load("profile-1", &categories, &rules, LoadOptions::default());
    assert!(rule_set.is_empty());
}

#[test]
fn test_loader_merges_synonyms_and_dedupes_category_action() {
    let mut dairy = category("c1", "zuivel", &["Kaas"]);
    dairy.synonyms = vec!["Yoghurt".to_owned()];
    let rules = vec![
        rule("low-precedence", "c1", "drop", 10),
        rule("high-precedence", "c1", "drop", 2),
        rule("limit", "c1", "limit", 5),
    ];

    let rule_set = RuleLoader::load("profile-1", &[dairy], &rules, LoadOptions::default());
    let ids: Vec<&str> = rule_set.constraints().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["high-precedence", "limit"]);
    assert!(rule_set.constraints()[0].terms.contains("yoghurt"));
    assert!(rule_set.constraints()[0].terms.contains("kaas"));
}

#[test]
fn test_invalid_row_does_not_shadow_valid_row_with_same_id() {
    let categories = vec![category("c1", "gluten", &["tarwe"])];
    let mut broken = rule("r1", "c1", "exclude", 1);
    broken.strictness = "sometimes".to_owned();
    let orphan = rule("r1", "missing", "drop", 1);
    let rules = vec![broken, orphan, rule("r1", "c1", "drop", 1), rule("r1", "c1", "limit", 2)];

    let rule_set = RuleLoader::load("profile-1", &categories, &rules, LoadOptions::default());

    assert_eq!(rule_set.len(), 1);
    assert_eq!(rule_set.constraints()[0].action, RuleAction::Drop);
}

#[test]
fn test_loader_injects_inflammatory_triggers_first() {
    let categories = vec![category("c1", "zoet", &["suiker"])];
    let rules = vec![rule("r1", "c1", "limit", 1)];
    let options = LoadOptions {
        exclude_inflammatory_triggers: true,
    };

    let rule_set = RuleLoader::load("profile-1", &categories, &rules, options);
    let first = &rule_set.constraints()[0];
    assert_eq!(first.priority, SYNTHETIC_RULE_PRIORITY);
    assert_eq!(first.action, RuleAction::Drop);
    assert_eq!(first.strictness, Strictness::Hard);
    assert_eq!(rule_set.len(), 2);
}

// ============================================================================
// Phase evaluation
// ============================================================================

#[test]
fn test_hard_drop_fails_phase_one() {
    let rule_set = RuleSet::new(vec![drop_rule("r1", "noten", &["pindakaas"])]);
    let result = evaluate(&rule_set, &Target::from_names(["pindakaas"]));

    assert!(!result.ok);
    assert_eq!(result.failed_phase, Some(Phase::Drop));
    assert_eq!(result.executed_phases(), vec![Phase::Drop]);
    assert_eq!(result.violations().count(), 1);
    assert!(result.summary.contains("phase 1"));
}

#[test]
fn test_soft_drop_only_warns() {
    let rule_set = RuleSet::new(vec![
        drop_rule("r1", "noten", &["pindakaas"]).with_strictness(Strictness::Soft)
    ]);
    let result = evaluate(&rule_set, &Target::from_names(["pindakaas"]));

    assert!(result.ok);
    assert!(result.failed_phase.is_none());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("pindakaas"));
    assert_eq!(result.executed_phases(), Phase::ORDER.to_vec());
}

#[test]
fn test_force_deficit_fails_phase_two() {
    let rule_set = RuleSet::new(vec![Constraint::new(
        "r1",
        RuleAction::Force,
        "vette_vis",
        ["zalm"],
    )
    .with_minimums(Some(1), None)]);
    let result = evaluate(&rule_set, &Target::from_names(["kipfilet", "broccoli"]));

    assert!(!result.ok);
    assert_eq!(result.failed_phase, Some(Phase::Force));
    assert_eq!(result.force_deficits.len(), 1);
    let deficit = &result.force_deficits[0];
    assert_eq!(deficit.category_code, "vette_vis");
    assert_eq!((deficit.required, deficit.found, deficit.missing), (1, 0, 1));
}

#[test]
fn test_force_falls_back_to_weekly_minimum() {
    let rule_set = RuleSet::new(vec![Constraint::new(
        "r1",
        RuleAction::Force,
        "groente",
        ["broccoli", "spinazie"],
    )
    .with_minimums(Some(0), Some(2))]);

    let short = evaluate(&rule_set, &Target::from_names(["broccoli"]));
    assert_eq!(short.failed_phase, Some(Phase::Force));

    let enough = evaluate(&rule_set, &Target::from_names(["broccoli", "spinazie"]));
    assert!(enough.ok);
}

#[test]
fn test_scoped_evaluator_splits_daily_and_weekly_quotas() {
    let rule_set = RuleSet::new(vec![
        Constraint::new("fish", RuleAction::Force, "vis", ["zalm"]).with_minimums(None, Some(1)),
        Constraint::new("meat", RuleAction::Limit, "vlees", ["biefstuk"])
            .with_maximums(None, Some(1)),
        Constraint::new("green", RuleAction::Force, "groen", ["broccoli"])
            .with_minimums(Some(1), None),
        drop_rule("dairy", "zuivel", &["kaas"]),
    ]);
    let target = Target::from_names(["biefstuk", "biefstuk", "broccoli"]);

    let daily = PhaseEvaluator::new(&rule_set)
        .with_scope(QuotaScope::Day)
        .evaluate(&target);
    assert!(daily.ok, "{}", daily.summary);

    let weekly = PhaseEvaluator::new(&rule_set)
        .with_scope(QuotaScope::Week)
        .evaluate(&target);
    assert_eq!(weekly.failed_phase, Some(Phase::Force));
    assert_eq!(weekly.force_deficits[0].constraint_id, "fish");

    let cheese_day = PhaseEvaluator::new(&rule_set)
        .with_scope(QuotaScope::Week)
        .evaluate(&Target::from_names(["geitenkaas", "zalm"]));
    assert!(cheese_day.ok, "{}", cheese_day.summary);

    let unscoped = evaluate(&rule_set, &Target::from_names(["zalm", "broccoli", "biefstuk"]));
    assert!(unscoped.ok);
}

#[test]
fn test_hard_limit_excess_fails_phase_three() {
    let rule_set = RuleSet::new(vec![Constraint::new(
        "r1",
        RuleAction::Limit,
        "kaas",
        ["kaas"],
    )
    .with_maximums(Some(1), None)]);
    let result = evaluate(&rule_set, &Target::from_names(["kaas", "geitenkaas"]));

    assert!(!result.ok);
    assert_eq!(result.failed_phase, Some(Phase::Limit));
    assert_eq!(result.limit_excesses.len(), 1);
    assert_eq!(result.limit_excesses[0].excess, 1);
}

#[test]
fn test_soft_limit_excess_warns() {
    let rule_set = RuleSet::new(vec![Constraint::new(
        "r1",
        RuleAction::Limit,
        "kaas",
        ["kaas"],
    )
    .with_maximums(Some(1), None)
    .with_strictness(Strictness::Soft)]);
    let result = evaluate(&rule_set, &Target::from_names(["kaas", "geitenkaas"]));

    assert!(result.ok);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.limit_excesses.len(), 1);
}

#[test]
fn test_drop_owner_is_not_counted_by_force() {
    // "zalm" is owned by the higher-precedence DROP rule, so FORCE sees zero
    let rule_set = RuleSet::new(vec![
        drop_rule("no-fish", "vis", &["zalm"])
            .with_priority(1)
            .with_strictness(Strictness::Soft),
        Constraint::new("fish-quota", RuleAction::Force, "vette_vis", ["zalm"])
            .with_priority(2)
            .with_minimums(Some(1), None),
    ]);
    let result = evaluate(&rule_set, &Target::from_names(["zalm"]));

    assert_eq!(result.failed_phase, Some(Phase::Force));
    assert_eq!(result.force_deficits[0].found, 0);
}

#[test]
fn test_pass_phase_records_notes() {
    let rule_set = RuleSet::new(vec![Constraint::new(
        "r1",
        RuleAction::Pass,
        "kruiden",
        ["dille"],
    )]);
    let result = evaluate(&rule_set, &Target::from_names(["dille"]));

    assert!(result.ok);
    assert_eq!(result.summary, "Passed all phases");
    assert_eq!(result.phase(Phase::Pass).unwrap().notes.len(), 1);
}

#[test]
fn test_evaluation_is_repeatable_and_non_mutating() {
    let rule_set = RuleSet::new(vec![
        drop_rule("r1", "noten", &["pinda"]).with_strictness(Strictness::Soft),
        Constraint::new("r2", RuleAction::Limit, "kaas", ["kaas"]).with_maximums(Some(1), None),
    ]);
    let target = Target::from_names(["pindakaas", "kaas", "broccoli"]);
    let rule_set_before = rule_set.clone();
    let target_before = target.clone();

    let evaluator = PhaseEvaluator::new(&rule_set);
    let first = evaluator.evaluate(&target);
    let second = evaluator.evaluate(&target);

    assert_eq!(first, second);
    assert_eq!(rule_set, rule_set_before);
    assert_eq!(target, target_before);
}

#[test]
fn test_empty_rule_set_passes_everything() {
    let result = evaluate(&RuleSet::default(), &Target::from_names(["alles"]));
    assert!(result.ok);
    assert_eq!(result.executed_phases().len(), 4);
}
