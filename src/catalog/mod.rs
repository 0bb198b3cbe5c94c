// ABOUTME: Recipe catalog holding the immutable recipe records with lookup and filtering
// ABOUTME: Loads from a configured source, validating records and falling back to the seed set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! # Recipe Catalog
//!
//! The catalog is loaded once and never mutated. Records failing validation
//! (empty id, zero servings) are dropped; duplicate ids keep the first
//! occurrence. A remote source that times out, errors, or yields no valid
//! recipes is replaced by the bundled seed set.

/// Search predicates and the filtered view
pub mod filter;
/// Bundled seed recipes
pub mod seed;
/// Seed and remote catalog sources
pub mod source;

pub use filter::{filter_recipes, matches};
pub use source::{CatalogSource, CatalogSourceError, RemoteSource, SeedSource};

use crate::config::environment::CatalogConfig;
use crate::models::{Recipe, SearchFilters};
use std::collections::HashSet;
use tracing::{info, warn};

/// Where the loaded recipes came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// The bundled seed set
    Seed,
    /// A remote endpoint
    Remote(String),
}

/// The full recipe list
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    origin: CatalogOrigin,
}

impl Catalog {
    /// Catalog of the bundled seed recipes
    #[must_use]
    pub fn seed() -> Self {
        Self::from_recipes(seed::seed_recipes(), CatalogOrigin::Seed)
    }

    /// Build a catalog from loaded records, dropping invalid and duplicate ones
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>, origin: CatalogOrigin) -> Self {
        let mut seen = HashSet::new();
        let recipes = recipes
            .into_iter()
            .filter(|recipe| {
                if !recipe.is_valid() {
                    warn!(recipe.id = %recipe.id, recipe.servings = recipe.servings, "Dropping invalid recipe record");
                    return false;
                }
                if !seen.insert(recipe.id.clone()) {
                    warn!(recipe.id = %recipe.id, "Dropping duplicate recipe id");
                    return false;
                }
                true
            })
            .collect();
        Self { recipes, origin }
    }

    /// Load from `source`, falling back to the seed set on any failure
    pub async fn load_from(source: &dyn CatalogSource, origin: CatalogOrigin) -> Self {
        match source.fetch_recipes().await {
            Ok(recipes) => {
                let catalog = Self::from_recipes(recipes, origin);
                if catalog.is_empty() {
                    warn!(source = %source.describe(), "Catalog source returned no valid recipes; using seed catalog");
                    return Self::seed();
                }
                info!(source = %source.describe(), catalog.count = catalog.len(), "Catalog loaded");
                catalog
            }
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "Catalog source failed; using seed catalog");
                Self::seed()
            }
        }
    }

    /// Load according to configuration: the remote source when set, else the seed set
    pub async fn load(config: &CatalogConfig) -> Self {
        match &config.url {
            Some(url) => {
                let source = RemoteSource::new(url.clone(), config.timeout());
                Self::load_from(&source, CatalogOrigin::Remote(url.clone())).await
            }
            None => {
                let catalog = Self::seed();
                info!(catalog.count = catalog.len(), "Using bundled seed catalog");
                catalog
            }
        }
    }

    /// Every recipe, in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn get_recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Recipes matching `filters`, in catalog order
    #[must_use]
    pub fn filter(&self, filters: &SearchFilters) -> Vec<Recipe> {
        filter_recipes(&self.recipes, filters)
    }

    /// Where the records came from
    #[must_use]
    pub const fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
