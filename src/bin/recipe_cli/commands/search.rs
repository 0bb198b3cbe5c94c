// ABOUTME: Catalog search, recipe detail, and recommendation commands
// ABOUTME: Builds search filters from flags and prints the filtered view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::helpers::display::{print_recipe_detail, print_recipe_line};
use anyhow::{anyhow, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use recipe_planner::{
    models::{Difficulty, MealType, SearchFilters},
    recommendations,
    store::RecipeStore,
};

/// Flags of `recipe-cli search`
#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against title, ingredients and cuisine
    query: Option<String>,

    /// Accepted cuisines (comma-separated)
    #[arg(long, value_delimiter = ',')]
    cuisine: Vec<String>,

    /// Accepted difficulties (comma-separated)
    #[arg(long, value_delimiter = ',')]
    difficulty: Vec<String>,

    /// Accepted meal types (comma-separated)
    #[arg(long, value_delimiter = ',')]
    meal_type: Vec<String>,

    /// Accepted dietary restriction tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    dietary: Vec<String>,

    /// Ingredient terms (comma-separated)
    #[arg(long, value_delimiter = ',')]
    ingredient: Vec<String>,

    /// Maximum cook time in minutes
    #[arg(long)]
    max_cook_time: Option<u32>,
}

impl SearchArgs {
    fn into_filters(self) -> Result<SearchFilters> {
        let difficulty = self
            .difficulty
            .iter()
            .map(|name| {
                Difficulty::from_name(name).ok_or_else(|| anyhow!("unknown difficulty: {name}"))
            })
            .collect::<Result<Vec<_>>>()?;
        let meal_type = self
            .meal_type
            .iter()
            .map(|name| MealType::from_name(name).ok_or_else(|| anyhow!("unknown meal type: {name}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchFilters {
            query: self.query.unwrap_or_default(),
            cuisine: self.cuisine,
            dietary_restrictions: self.dietary,
            meal_type,
            difficulty,
            cook_time: self.max_cook_time,
            ingredients: self.ingredient,
        })
    }
}

/// Apply the flags as the active search and print the matches
pub fn run(store: &mut RecipeStore, args: SearchArgs) -> Result<()> {
    store.set_search_filters(args.into_filters()?);

    let results = store.filtered_recipes();
    if results.is_empty() {
        println!("No recipes match.");
        return Ok(());
    }
    println!("{} of {} recipes:", results.len(), store.recipes().len());
    for recipe in results {
        print_recipe_line(recipe, store.is_favorite(&recipe.id));
    }
    Ok(())
}

/// Print one recipe in full
pub fn show(store: &RecipeStore, id: &str) -> Result<()> {
    let recipe = store
        .get_recipe_by_id(id)
        .ok_or_else(|| anyhow!("Recipe not found: {id}"))?;
    print_recipe_detail(recipe, store.is_favorite(id));
    Ok(())
}

/// Print shuffled picks
pub fn recommend(store: &RecipeStore, query: Option<&str>, count: usize, seed: Option<u64>) {
    let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let filters = SearchFilters::with_query(query.unwrap_or_default());
    for recipe in recommendations::recommend(store.catalog(), &filters, count, &mut rng) {
        print_recipe_line(&recipe, store.is_favorite(&recipe.id));
    }
}
