// ABOUTME: Meal name rendering from configurable patterns with token substitution
// ABOUTME: Missing tokens fall back to generic nouns and stray punctuation is tidied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use dieetcoach_core::constants::naming::{GENERIC_PROTEIN, GENERIC_TEMPLATE, GENERIC_VEGETABLE};
use dieetcoach_core::models::{MealSlot, NamePattern};

/// Trailing connector words left behind by an empty token
const DANGLING_CONNECTORS: &[&str] = &["met", "en", "with", "and", "&", "+", "-"];

/// Display names available to a pattern
#[derive(Debug, Clone, Copy, Default)]
pub struct NameParts<'a> {
    /// Protein display name
    pub protein: Option<&'a str>,
    /// First vegetable display name
    pub veg1: Option<&'a str>,
    /// Second vegetable display name
    pub veg2: Option<&'a str>,
    /// First flavor display name
    pub flavor: Option<&'a str>,
    /// Template display name
    pub template_name: &'a str,
}

impl NameParts<'_> {
    /// Template display name, or the generic noun when it is blank
    #[must_use]
    pub fn template_or_generic(&self) -> &str {
        if self.template_name.trim().is_empty() {
            GENERIC_TEMPLATE
        } else {
            self.template_name
        }
    }
}

/// Render `pattern` with `parts`
#[must_use]
pub fn render_pattern(pattern: &str, parts: &NameParts<'_>) -> String {
    let template_name = parts.template_or_generic();
    let rendered = pattern
        .replace("{protein}", parts.protein.unwrap_or(GENERIC_PROTEIN))
        .replace("{veg1}", parts.veg1.unwrap_or(GENERIC_VEGETABLE))
        .replace("{veg2}", parts.veg2.unwrap_or(GENERIC_VEGETABLE))
        .replace("{flavor}", parts.flavor.unwrap_or(""))
        .replace("{templateName}", template_name);
    tidy(&rendered)
}

/// Name for a meal: the matching pattern if one exists, else `"{template} ({date})"`
#[must_use]
pub fn meal_name(
    patterns: &[NamePattern],
    template_id: &str,
    meal_slot: MealSlot,
    date: NaiveDate,
    parts: &NameParts<'_>,
) -> String {
    patterns
        .iter()
        .find(|p| p.template_id == template_id && p.meal_slot == meal_slot)
        .map(|p| render_pattern(&p.pattern, parts))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("{} ({date})", parts.template_or_generic()))
}

fn tidy(raw: &str) -> String {
    let mut text = raw.replace("()", "").replace("[]", "");
    for (from, to) in [(" ,", ","), (",,", ","), (" ;", ";"), ("( ", "("), (" )", ")")] {
        while text.contains(from) {
            text = text.replace(from, to);
        }
    }
    text = text.replace("()", "");

    let mut words: Vec<&str> = text.split_whitespace().collect();
    while let Some(last) = words.last() {
        let stripped = last.trim_end_matches([',', ';', '-', '&']);
        if stripped.is_empty() || DANGLING_CONNECTORS.contains(&stripped.to_lowercase().as_str()) {
            words.pop();
        } else {
            break;
        }
    }

    let joined = words.join(" ");
    joined
        .trim_matches(|c: char| matches!(c, ',' | ';' | '-' | '&') || c.is_whitespace())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_flavor_leaves_no_dangling_connector() {
        let parts = NameParts {
            protein: Some("Kip"),
            veg1: Some("broccoli"),
            veg2: Some("wortel"),
            flavor: None,
            template_name: "Roerbak",
        };
        let name = render_pattern("{protein} met {veg1}, {veg2} en {flavor}", &parts);
        assert_eq!(name, "Kip met broccoli, wortel");
    }

    #[test]
    fn empty_parentheses_are_removed() {
        let parts = NameParts {
            protein: Some("Zalm"),
            template_name: "Ovenschotel",
            ..NameParts::default()
        };
        let name = render_pattern("{templateName} ({flavor}) met {protein}", &parts);
        assert_eq!(name, "Ovenschotel met Zalm");
    }

    #[test]
    fn blank_template_name_uses_generic_noun_in_fallback() {
        let parts = NameParts {
            template_name: "  ",
            ..NameParts::default()
        };
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
        let name = meal_name(&[], "roerbak", MealSlot::Dinner, date, &parts);
        assert_eq!(name, format!("{GENERIC_TEMPLATE} (2025-03-03)"));
    }
}
