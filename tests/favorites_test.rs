// ABOUTME: Tests for the persisted favorites set
// ABOUTME: Covers duplicate suppression, insertion order, removal, and reload from storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::test_utils::memory_store;
use recipe_planner::{
    catalog::Catalog,
    constants::storage_keys,
    favorites::Favorites,
    models::Recipe,
    storage::{self, KeyValueStore, UNREADABLE_SUFFIX},
};
use serde_json::{json, Value};
use std::sync::Arc;

fn recipe(id: &str) -> Recipe {
    Catalog::seed().get_recipe_by_id(id).cloned().unwrap()
}

#[test]
fn test_add_is_idempotent_per_id() {
    let mut favorites = Favorites::load(memory_store());

    assert!(favorites.add_to_favorites(recipe("2")));
    assert!(!favorites.add_to_favorites(recipe("2")));

    assert_eq!(favorites.len(), 1);
    assert!(favorites.is_favorite("2"));
}

#[test]
fn test_favorites_keep_insertion_order() {
    let mut favorites = Favorites::load(memory_store());
    for id in ["5", "1", "3"] {
        favorites.add_to_favorites(recipe(id));
    }

    let ids: Vec<&str> = favorites.recipes().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "1", "3"]);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut favorites = Favorites::load(memory_store());
    favorites.add_to_favorites(recipe("1"));

    assert!(!favorites.remove_from_favorites("4"));
    assert!(favorites.remove_from_favorites("1"));
    assert!(favorites.is_empty());
    assert!(!favorites.is_favorite("1"));
}

#[test]
fn test_favorites_survive_reload() {
    let store = memory_store();
    {
        let mut favorites = Favorites::load(Arc::clone(&store));
        favorites.add_to_favorites(recipe("4"));
        favorites.add_to_favorites(recipe("2"));
        favorites.remove_from_favorites("4");
    }

    let reloaded = Favorites::load(store);
    assert_eq!(reloaded.recipes(), &[recipe("2")]);
}

#[test]
fn test_corrupt_record_loads_empty_and_is_copied_aside() {
    let store = memory_store();
    store.write(storage_keys::FAVORITES, "{not json").unwrap();

    let mut favorites = Favorites::load(Arc::clone(&store));
    assert!(favorites.is_empty());
    favorites.add_to_favorites(recipe("1"));

    let backup = format!("{}{UNREADABLE_SUFFIX}", storage_keys::FAVORITES);
    assert_eq!(store.read(&backup).unwrap().as_deref(), Some("{not json"));
}

fn fractional_favorite() -> Value {
    let mut value = serde_json::to_value(recipe("5")).unwrap();
    value["id"] = json!("browser-7");
    value["nutritionalInfo"]["protein"] = json!(12.5);
    value
}

fn stored_favorites(store: &dyn KeyValueStore) -> Vec<Value> {
    let raw = store.read(storage_keys::FAVORITES).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_undecodable_favorite_survives_other_changes() {
    let store = memory_store();
    let odd = fractional_favorite();
    let raw = json!([recipe("2"), odd]);
    store.write(storage_keys::FAVORITES, &raw.to_string()).unwrap();

    let mut favorites = Favorites::load(Arc::clone(&store));
    assert_eq!(favorites.recipes(), &[recipe("2")]);

    favorites.add_to_favorites(recipe("3"));
    let stored = stored_favorites(store.as_ref());
    assert_eq!(stored.len(), 3);
    assert!(stored.contains(&odd));
}

#[test]
fn test_undecodable_favorite_is_removed_by_id() {
    let store = memory_store();
    let raw = json!([fractional_favorite()]);
    store.write(storage_keys::FAVORITES, &raw.to_string()).unwrap();

    let mut favorites = Favorites::load(Arc::clone(&store));
    assert!(favorites.remove_from_favorites("browser-7"));
    assert!(!favorites.remove_from_favorites("browser-7"));
    assert!(stored_favorites(store.as_ref()).is_empty());
}

#[test]
fn test_stored_duplicates_are_collapsed() {
    let store = memory_store();
    storage::save_json(
        store.as_ref(),
        storage_keys::FAVORITES,
        &[recipe("1"), recipe("1"), recipe("3")],
    );

    let favorites = Favorites::load(store);
    assert_eq!(favorites.len(), 2);
}
