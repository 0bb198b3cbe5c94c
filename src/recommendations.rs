// ABOUTME: Placeholder recommendation shuffle: a random subset of the catalog or a filtered view
// ABOUTME: No ranking or scoring; the randomness source is injected so callers can seed it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Recommendation shuffle
//!
//! This is deliberately not a recommender: it shuffles and truncates. Sizes
//! in use are [`RECOMMEND_COUNT`] for the recommend endpoint,
//! [`SUGGESTION_COUNT`] for home-page suggestions, and the swipe deck size.

pub use crate::constants::discovery::{RECOMMEND_COUNT, SUGGESTION_COUNT};

use crate::catalog::Catalog;
use crate::models::{Recipe, SearchFilters};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle a copy of `recipes` and keep at most `count`
#[must_use]
pub fn shuffle_sample<R: Rng + ?Sized>(recipes: &[Recipe], count: usize, rng: &mut R) -> Vec<Recipe> {
    let mut pool = recipes.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Up to `count` shuffled recipes matching `filters`
///
/// When nothing matches, the whole catalog is sampled instead so discovery
/// never comes back empty while the catalog has recipes.
#[must_use]
pub fn recommend<R: Rng + ?Sized>(
    catalog: &Catalog,
    filters: &SearchFilters,
    count: usize,
    rng: &mut R,
) -> Vec<Recipe> {
    let matching = catalog.filter(filters);
    if matching.is_empty() {
        shuffle_sample(catalog.recipes(), count, rng)
    } else {
        shuffle_sample(&matching, count, rng)
    }
}
