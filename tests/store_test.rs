// ABOUTME: Tests for the recipe store that ties catalog, favorites, meal plans, and swipe state together
// ABOUTME: Exercises the cross-cutting operations the HTTP routes and CLI rely on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::test_utils::{memory_store, seed_store};
use recipe_planner::{
    catalog::Catalog,
    models::{SearchFilters, Weekday},
    storage::JsonFileStore,
    store::RecipeStore,
};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_fresh_store_shows_whole_catalog() {
    let store = seed_store();
    assert_eq!(store.recipes().len(), 5);
    assert_eq!(store.filtered_recipes(), store.recipes());
    assert!(store.favorites().is_empty());
    assert!(store.meal_plans().meal_plans().is_empty());
    assert!(store.swipe_session().is_none());
}

#[test]
fn test_add_favorite_by_id() {
    let mut store = seed_store();

    assert_eq!(store.add_favorite_by_id("1"), Some(true));
    assert_eq!(store.add_favorite_by_id("1"), Some(false));
    assert_eq!(store.add_favorite_by_id("nope"), None);
    assert_eq!(store.favorites().len(), 1);
}

#[test]
fn test_filters_do_not_touch_favorites_or_plans() {
    let mut store = seed_store();
    store.add_favorite_by_id("1");
    store.create_meal_plan("Week 1");

    store.set_search_filters(SearchFilters::with_query("curry"));

    assert_eq!(store.filtered_recipes().len(), 1);
    assert!(store.is_favorite("1"));
    assert_eq!(store.meal_plans().meal_plans().len(), 1);
}

#[test]
fn test_meal_plan_operations_through_store() {
    let mut store = seed_store();
    let plan = store.create_meal_plan("Week 1");
    let dinner = store.get_recipe_by_id("5").cloned().unwrap();

    assert!(store.add_recipe_to_meal_plan(dinner, "Wednesday", "Dinner"));
    let current = store.current_meal_plan().unwrap();
    assert_eq!(current.id, plan.id);
    assert_eq!(current.day(Weekday::Wednesday).total_calories(), 420);

    assert!(store.remove_recipe_from_meal_plan("Wednesday", "Dinner"));
    assert!(store.delete_meal_plan(&plan.id));
    assert!(store.current_meal_plan().is_none());
}

#[test]
fn test_state_persists_across_stores_sharing_storage() {
    let shared = memory_store();
    {
        let mut store = RecipeStore::new(Catalog::seed(), Arc::clone(&shared));
        store.add_favorite_by_id("2");
        let plan = store.create_meal_plan("Week 1");
        let recipe = store.get_recipe_by_id("4").cloned().unwrap();
        store.add_recipe_to_meal_plan(recipe, "Monday", "Breakfast");
        assert_eq!(store.meal_plans().get(&plan.id).unwrap().assigned_count(), 1);
    }

    let store = RecipeStore::new(Catalog::seed(), shared);
    assert!(store.is_favorite("2"));
    assert_eq!(store.meal_plans().meal_plans().len(), 1);
    assert_eq!(store.meal_plans().meal_plans()[0].assigned_count(), 1);
}

#[test]
fn test_state_persists_in_storage_directory() {
    let dir = TempDir::new().unwrap();
    let open = || {
        let backend = JsonFileStore::open(dir.path()).unwrap();
        RecipeStore::new(Catalog::seed(), Arc::new(backend))
    };

    open().add_favorite_by_id("3");
    assert!(dir.path().join("favorites.json").exists());
    assert!(open().is_favorite("3"));
}

#[tokio::test]
async fn test_shared_store_serializes_writers() {
    let shared = seed_store().into_shared();

    let handles: Vec<_> = ["1", "2", "3", "4", "5", "1"]
        .into_iter()
        .map(|id| {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move { shared.write().await.add_favorite_by_id(id) })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(shared.read().await.favorites().len(), 5);
}
