// ABOUTME: Favorites commands for recipe-cli
// ABOUTME: List, add by catalog id, and remove
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::helpers::display::print_recipe_line;
use anyhow::{anyhow, Result};
use recipe_planner::store::RecipeStore;

pub fn list(store: &RecipeStore) {
    let favorites = store.favorites();
    if favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }
    for recipe in favorites.recipes() {
        print_recipe_line(recipe, true);
    }
}

pub fn add(store: &mut RecipeStore, id: &str) -> Result<()> {
    let added = store
        .add_favorite_by_id(id)
        .ok_or_else(|| anyhow!("Recipe not found: {id}"))?;
    if added {
        println!("Added {id} to favorites");
    } else {
        println!("{id} is already a favorite");
    }
    Ok(())
}

pub fn remove(store: &mut RecipeStore, id: &str) {
    if store.remove_from_favorites(id) {
        println!("Removed {id} from favorites");
    } else {
        println!("{id} is not a favorite");
    }
}
