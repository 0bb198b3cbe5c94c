// ABOUTME: Filter engine deriving the visible recipe list from search filters
// ABOUTME: Pure predicates: query substring match, ANY-match facets, and a cook-time cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Recipe filtering
//!
//! A recipe is visible when it satisfies every active predicate. Within a
//! facet the selected values are alternatives; empty facets and an empty
//! query impose no constraint.

use crate::models::{Recipe, SearchFilters};

/// Whether `recipe` satisfies every active predicate in `filters`
#[must_use]
pub fn matches(recipe: &Recipe, filters: &SearchFilters) -> bool {
    matches_query(recipe, &filters.query)
        && facet_allows(&filters.cuisine, |cuisine| *cuisine == recipe.cuisine)
        && facet_allows(&filters.meal_type, |meal_type| *meal_type == recipe.meal_type)
        && facet_allows(&filters.difficulty, |difficulty| {
            *difficulty == recipe.difficulty
        })
        && facet_allows(&filters.dietary_restrictions, |tag| {
            recipe.has_restriction(tag)
        })
        && facet_allows(&filters.ingredients, |term| {
            contains_ignoring_case(&recipe.ingredients, term)
        })
        && !matches!(filters.cook_time, Some(max_minutes) if max_minutes > 0 && recipe.cook_time > max_minutes)
}

/// Recipes from `recipes` matching `filters`, in catalog order
#[must_use]
pub fn filter_recipes(recipes: &[Recipe], filters: &SearchFilters) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| matches(recipe, filters))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against title, ingredients, and cuisine
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    recipe.title.to_lowercase().contains(&needle)
        || recipe
            .ingredients
            .iter()
            .any(|line| line.to_lowercase().contains(&needle))
        || recipe.cuisine.to_lowercase().contains(&needle)
}

fn facet_allows<T>(selected: &[T], accepts: impl Fn(&T) -> bool) -> bool {
    selected.is_empty() || selected.iter().any(accepts)
}

fn contains_ignoring_case(lines: &[String], term: &str) -> bool {
    let needle = term.to_lowercase();
    lines.iter().any(|line| line.to_lowercase().contains(&needle))
}
