// ABOUTME: Deterministic seeded and usage-aware selection from ingredient pools
// ABOUTME: All randomness is a pure function of an explicit seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use dieetcoach_core::models::PoolEntry;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic index in `0..len` for `seed`; `len` must be non-zero
#[must_use]
pub fn seeded_index(len: usize, seed: u64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.gen_range(0..len)
}

fn available<'a, T: PoolEntry>(items: &'a [T], exclude: &[&str]) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| !exclude.contains(&item.code()))
        .collect()
}

/// Seeded choice among items whose code is not in `exclude`
#[must_use]
pub fn pick_seeded<'a, T: PoolEntry>(items: &'a [T], seed: u64, exclude: &[&str]) -> Option<&'a T> {
    let candidates = available(items, exclude);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[seeded_index(candidates.len(), seed)])
}

/// Choice of the least-used item, ties broken by seeded choice
#[must_use]
pub fn pick_least_used<'a, T: PoolEntry>(
    items: &'a [T],
    usage: &HashMap<String, u32>,
    seed: u64,
    exclude: &[&str],
) -> Option<&'a T> {
    let candidates = available(items, exclude);
    let count_of = |item: &T| usage.get(item.code()).copied().unwrap_or(0);
    let least = candidates.iter().map(|item| count_of(*item)).min()?;
    let tied: Vec<&T> = candidates
        .into_iter()
        .filter(|item| count_of(*item) == least)
        .collect();
    Some(tied[seeded_index(tied.len(), seed)])
}

/// Usage-aware choice when `usage` is supplied, seeded choice otherwise
#[must_use]
pub fn pick<'a, T: PoolEntry>(
    items: &'a [T],
    usage: Option<&HashMap<String, u32>>,
    seed: u64,
    exclude: &[&str],
) -> Option<&'a T> {
    match usage {
        Some(counts) => pick_least_used(items, counts, seed, exclude),
        None => pick_seeded(items, seed, exclude),
    }
}
