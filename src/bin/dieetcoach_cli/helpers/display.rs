// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for dieetcoach-cli
// ABOUTME: Renders plans, evaluation results, and sanity issues for the terminal or as JSON

use anyhow::Result;
use dieetcoach::models::{EvaluationResult, Meal, Plan, QualityMetrics, SanityIssue};
use dieetcoach::services::GeneratedPlan;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a generated plan with its diagnostics
pub fn display_generated_plan(generated: &GeneratedPlan) {
    display_plan(&generated.plan);

    if !generated.removed_pool_items.is_empty() {
        println!("\nExcluded by diet rules:");
        for item in &generated.removed_pool_items {
            println!(
                "   {} ({:?}) - {}",
                item.display_name, item.pool, item.category_code
            );
        }
    }

    let compliance = &generated.compliance;
    println!(
        "\nCompliance: {} ({} warnings)",
        if compliance.ok { "OK" } else { "FAILED" },
        compliance.warning_count
    );
    for day in compliance.days.iter().filter(|day| !day.result.ok) {
        println!("   {}: {}", day.date, day.result.summary);
    }
    for week in compliance.weeks.iter().filter(|week| !week.result.ok) {
        println!(
            "   week {} .. {}: {}",
            week.start_date, week.end_date, week.result.summary
        );
    }

    display_sanity_issues(&generated.sanity_issues);
}

/// Display the days and meals of a plan
pub fn display_plan(plan: &Plan) {
    let meta = &plan.metadata;
    println!(
        "\nPlan '{}' {} .. {} ({} days, {} meals)",
        meta.diet_key, meta.start_date, meta.end_date, meta.day_count, meta.meal_count
    );
    println!("{}", "=".repeat(80));

    for day in &plan.days {
        println!("\n{}", day.date.format("%A %Y-%m-%d"));
        for meal in &day.meals {
            display_meal(meal);
        }
        if let Some(total) = day.total_macros() {
            println!(
                "   Day total: {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
                total.calories, total.protein_g, total.carbs_g, total.fat_g
            );
        }
    }

    if let Some(quality) = &plan.quality {
        display_quality(quality);
    }
}

fn display_meal(meal: &Meal) {
    println!("   [{}] {}  ({})", meal.meal_slot, meal.name, meal.id);
    let ingredients: Vec<String> = meal
        .ingredients
        .iter()
        .map(|ing| format!("{} {:.0} g", ing.display_name, ing.grams))
        .collect();
    println!("      {}", ingredients.join(", "));
    if let Some(macros) = meal.estimated_macros {
        println!(
            "      {:.0} kcal, P {:.0} g, C {:.0} g, F {:.0} g",
            macros.calories, macros.protein_g, macros.carbs_g, macros.fat_g
        );
    }
}

fn display_quality(quality: &QualityMetrics) {
    println!("\nQuality:");
    println!("   Forced repeats: {}", quality.forced_repeats);
    let proteins: Vec<String> = quality
        .top_proteins
        .iter()
        .map(|usage| format!("{} x{}", usage.code, usage.count))
        .collect();
    println!("   Top proteins: {}", proteins.join(", "));
    let templates: Vec<String> = quality
        .template_usage
        .iter()
        .map(|usage| format!("{} x{}", usage.code, usage.count))
        .collect();
    println!("   Templates: {}", templates.join(", "));
}

/// Display sanity issues, or a clean bill
pub fn display_sanity_issues(issues: &[SanityIssue]) {
    if issues.is_empty() {
        println!("\nSanity: no issues");
        return;
    }
    println!("\nSanity: {} issue(s)", issues.len());
    for issue in issues {
        println!("   {} {} - {}", issue.date, issue.code.as_str(), issue.message);
    }
}

/// Display an evaluation result phase by phase
pub fn display_evaluation(result: &EvaluationResult) {
    println!(
        "\nEvaluation: {}",
        if result.ok { "COMPLIANT" } else { "NOT COMPLIANT" }
    );
    println!("{}", result.summary);

    for phase in &result.phases {
        println!(
            "\n   {} - {}",
            phase.phase,
            if phase.ok { "ok" } else { "failed" }
        );
        for violation in &phase.violations {
            println!("      x {}", violation.message);
        }
        for deficit in &phase.force_deficits {
            println!(
                "      - {}: {} of {} required, {} missing",
                deficit.category_label, deficit.found, deficit.required, deficit.missing
            );
        }
        for excess in &phase.limit_excesses {
            println!(
                "      - {}: {} found, {} allowed ({})",
                excess.category_label,
                excess.found,
                excess.allowed,
                excess.strictness.as_str()
            );
        }
        for warning in &phase.warnings {
            println!("      ! {warning}");
        }
        for note in &phase.notes {
            println!("      i {note}");
        }
    }
}
