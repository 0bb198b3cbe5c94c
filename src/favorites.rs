// ABOUTME: Favorites set: an ordered, duplicate-free list of recipes persisted after every change
// ABOUTME: Stored as a JSON array under the "favorites" key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::constants::storage_keys;
use crate::models::Recipe;
use crate::storage::{self, LoadedRecords, SharedStore};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info};

/// User-curated recipes, in the order they were added
///
/// Stored entries that no longer decode as a recipe are kept aside and
/// written back with every save until they are removed by id or replaced by
/// adding the same recipe again.
pub struct Favorites {
    recipes: Vec<Recipe>,
    unreadable: Vec<Value>,
    store: SharedStore,
}

impl Favorites {
    /// Load persisted favorites; a missing record yields an empty set
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let LoadedRecords {
            records,
            unreadable,
        } = storage::load_records::<Recipe>(store.as_ref(), storage_keys::FAVORITES);

        let mut seen = HashSet::new();
        let recipes: Vec<Recipe> = records
            .into_iter()
            .filter(|recipe| seen.insert(recipe.id.clone()))
            .collect();

        info!(
            favorites.count = recipes.len(),
            favorites.unreadable = unreadable.len(),
            "Favorites loaded"
        );
        Self {
            recipes,
            unreadable,
            store,
        }
    }

    /// Append `recipe` unless a recipe with the same id is already present
    ///
    /// Returns `true` when the recipe was added.
    pub fn add_to_favorites(&mut self, recipe: Recipe) -> bool {
        if self.is_favorite(&recipe.id) {
            debug!(recipe.id = %recipe.id, "Recipe already a favorite");
            return false;
        }
        debug!(recipe.id = %recipe.id, "Adding favorite");
        self.unreadable
            .retain(|value| storage::record_id(value) != Some(recipe.id.as_str()));
        self.recipes.push(recipe);
        self.persist();
        true
    }

    /// Remove the recipe with `id`, if present
    ///
    /// Returns `true` when a recipe was removed.
    pub fn remove_from_favorites(&mut self, id: &str) -> bool {
        let before = self.recipes.len() + self.unreadable.len();
        self.recipes.retain(|recipe| recipe.id != id);
        self.unreadable
            .retain(|value| storage::record_id(value) != Some(id));
        if self.recipes.len() + self.unreadable.len() == before {
            return false;
        }
        debug!(recipe.id = %id, "Removed favorite");
        self.persist();
        true
    }

    /// Whether a recipe with `id` is a favorite
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    /// Favorites in insertion order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether there are no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn persist(&self) {
        storage::save_records(
            self.store.as_ref(),
            storage_keys::FAVORITES,
            &self.recipes,
            &self.unreadable,
        );
    }
}
