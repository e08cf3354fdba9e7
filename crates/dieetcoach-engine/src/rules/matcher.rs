// ABOUTME: Ingredient name normalization and permissive term matching
// ABOUTME: Two-way substring containment on full names and whitespace tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Term matching
//!
//! Matching is deliberately lenient: a name matches a term when either one
//! contains the other, on the full string or on any whitespace token. This
//! catches `tarwebloem` for the term `tarwe`, and it also lets short terms hit
//! unrelated words. Rule configuration in storage relies on this leniency, so
//! it must not be tightened here.

use std::collections::BTreeSet;

/// Minimum length before a trailing `s` is stripped for the singular form
const MIN_LEN_FOR_SINGULAR: usize = 3;

/// Comparable forms of one ingredient name, computed once and reused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    forms: BTreeSet<String>,
}

impl NormalizedName {
    /// Normalize a raw ingredient name
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            forms: normalize(name),
        }
    }

    /// The normalized forms
    #[must_use]
    pub const fn forms(&self) -> &BTreeSet<String> {
        &self.forms
    }

    /// Whether any form matches any of `terms`
    pub fn matches_terms<I, S>(&self, terms: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        terms.into_iter().any(|term| {
            term_variants(term.as_ref())
                .iter()
                .any(|variant| self.forms.iter().any(|form| form_matches(form, variant)))
        })
    }
}

/// Produce the comparable forms of `name`
///
/// Yields the lowercase form, an underscore-to-space variant, and a naive
/// singular (trailing `s` removed) of each. Empty forms are omitted.
#[must_use]
pub fn normalize(name: &str) -> BTreeSet<String> {
    let lower = name.trim().to_lowercase();
    let spaced = lower.replace('_', " ");

    let mut forms = BTreeSet::new();
    for form in [lower, spaced] {
        if let Some(singular) = singular_form(&form) {
            forms.insert(singular);
        }
        forms.insert(form);
    }
    forms.retain(|form| !form.is_empty());
    forms
}

/// Whether `name` matches any of `terms`
pub fn matches<I, S>(name: &str, terms: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    NormalizedName::new(name).matches_terms(terms)
}

fn singular_form(form: &str) -> Option<String> {
    if form.chars().count() > MIN_LEN_FOR_SINGULAR {
        form.strip_suffix('s').map(str::to_owned)
    } else {
        None
    }
}

fn term_variants(term: &str) -> Vec<String> {
    let lower = term.trim().to_lowercase();
    if lower.is_empty() {
        return Vec::new();
    }
    let spaced = lower.replace('_', " ");
    let underscored = lower.replace(' ', "_");
    let mut variants = vec![lower];
    for variant in [spaced, underscored] {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}

fn contains_either_way(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

fn form_matches(form: &str, term: &str) -> bool {
    contains_either_way(form, term)
        || form
            .split_whitespace()
            .any(|token| contains_either_way(token, term))
}
