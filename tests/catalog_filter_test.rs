// ABOUTME: Tests for catalog search and facet filtering
// ABOUTME: Validates query matching, facet semantics, cook-time caps, and the filtered view invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::test_utils::seed_store;
use recipe_planner::{
    catalog::{filter_recipes, matches, Catalog},
    models::{Difficulty, MealType, Recipe, SearchFilters},
};

fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_query_chicken_matches_title_and_ingredients() {
    let catalog = Catalog::seed();
    let results = catalog.filter(&SearchFilters::with_query("chicken"));

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert!(titles.contains(&"Chicken Teriyaki Bowl"));
    // "1 lb chicken thigh" ingredient
    assert!(titles.contains(&"Thai Green Curry"));
    assert!(!titles.contains(&"Classic Margherita Pizza"));
    assert_eq!(results.len(), 2);
}

#[test]
fn test_query_is_case_insensitive_and_matches_cuisine() {
    let catalog = Catalog::seed();
    assert_eq!(ids(&catalog.filter(&SearchFilters::with_query("ITALIAN"))), vec!["1"]);
    assert_eq!(ids(&catalog.filter(&SearchFilters::with_query("mediter"))), vec!["3"]);
}

#[test]
fn test_empty_filters_return_whole_catalog() {
    let catalog = Catalog::seed();
    let filters = SearchFilters::default();
    assert!(filters.is_empty());
    assert_eq!(catalog.filter(&filters).len(), catalog.len());
}

#[test]
fn test_no_match_is_an_empty_result() {
    let catalog = Catalog::seed();
    assert!(catalog
        .filter(&SearchFilters::with_query("sushi"))
        .is_empty());
}

// ============================================================================
// Facet Tests
// ============================================================================

#[test]
fn test_cook_time_cap_is_inclusive() {
    let catalog = Catalog::seed();
    let results = catalog.filter(&SearchFilters::default().max_cook_time(15));

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert!(titles.contains(&"Classic Margherita Pizza"));
    assert!(titles.contains(&"Mediterranean Quinoa Salad"));
    assert!(!titles.contains(&"Thai Green Curry"));
    assert!(results.iter().all(|r| r.cook_time <= 15));
}

#[test]
fn test_zero_cook_time_means_no_cap() {
    let catalog = Catalog::seed();
    assert_eq!(
        ids(&catalog.filter(&SearchFilters::default().max_cook_time(0))),
        vec!["1", "2", "3", "4", "5"]
    );
}

#[test]
fn test_facets_match_any_within_and_all_across() {
    let catalog = Catalog::seed();

    let either_cuisine = SearchFilters::default().cuisines(["Italian", "Thai"]);
    assert_eq!(ids(&catalog.filter(&either_cuisine)), vec!["1", "5"]);

    let narrowed = either_cuisine.difficulties([Difficulty::Medium]).max_cook_time(20);
    assert_eq!(ids(&catalog.filter(&narrowed)), vec!["1"]);
}

#[test]
fn test_meal_type_facet() {
    let catalog = Catalog::seed();
    let filters = SearchFilters::default().meal_types([MealType::Breakfast, MealType::Lunch]);
    assert_eq!(ids(&catalog.filter(&filters)), vec!["3", "4"]);
}

#[test]
fn test_dietary_facet_matches_any_tag() {
    let catalog = Catalog::seed();
    let filters = SearchFilters::default().dietary(["Dairy-Free"]);
    assert_eq!(ids(&catalog.filter(&filters)), vec!["5"]);

    let filters = SearchFilters::default().dietary(["Vegetarian", "Dairy-Free"]);
    assert_eq!(ids(&catalog.filter(&filters)), vec!["1", "3", "4", "5"]);
}

#[test]
fn test_ingredient_terms() {
    let catalog = Catalog::seed();
    let filters = SearchFilters {
        ingredients: vec!["AVOCADO".to_owned(), "quinoa".to_owned()],
        ..SearchFilters::default()
    };
    assert_eq!(ids(&catalog.filter(&filters)), vec!["3", "4"]);
}

// ============================================================================
// Filtered View Invariant
// ============================================================================

#[test]
fn test_filtered_view_is_exactly_the_matching_subset() {
    let catalog = Catalog::seed();
    let samples = [
        SearchFilters::with_query("rice"),
        SearchFilters::default().dietary(["Gluten-Free"]).max_cook_time(20),
        SearchFilters::with_query("o").difficulties([Difficulty::Easy]),
        SearchFilters::default().cuisines(["Nowhere"]),
    ];

    for filters in &samples {
        let filtered = filter_recipes(catalog.recipes(), filters);
        for recipe in catalog.recipes() {
            assert_eq!(
                filtered.contains(recipe),
                matches(recipe, filters),
                "recipe {} with {filters:?}",
                recipe.id
            );
        }
    }
}

#[test]
fn test_store_recomputes_filtered_view_on_filter_change() {
    let mut store = seed_store();
    assert_eq!(store.filtered_recipes().len(), 5);

    store.set_search_filters(SearchFilters::with_query("chicken"));
    assert_eq!(ids(store.filtered_recipes()), vec!["2", "5"]);
    assert_eq!(store.search_filters().query, "chicken");

    store.set_search_filters(SearchFilters::default());
    assert_eq!(store.filtered_recipes().len(), 5);
}

#[test]
fn test_get_recipe_by_id() {
    let catalog = Catalog::seed();
    assert_eq!(
        catalog.get_recipe_by_id("4").map(|r| r.title.as_str()),
        Some("Avocado Toast with Poached Egg")
    );
    assert!(catalog.get_recipe_by_id("missing").is_none());
}
