// ABOUTME: RecipeStore controller owning the catalog, search state, favorites, meal plans, and swipe session
// ABOUTME: Single owner of mutable state; the server shares it behind one async RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! # Application State
//!
//! [`RecipeStore`] is the only place application state lives. HTTP handlers
//! and the CLI read from it and call its mutation methods; each mutation is
//! a synchronous state replacement followed by a best-effort persist.
//!
//! The filtered view is recomputed whenever the search filters change and is
//! always a subset of the catalog satisfying every active predicate.

use crate::catalog::Catalog;
use crate::favorites::Favorites;
use crate::meal_plan::MealPlans;
use crate::models::{MealPlan, Recipe, SearchFilters};
use crate::storage::SharedStore;
use crate::swipe::{SwipeAction, SwipeFilters, SwipeRecord, SwipeSession};
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Store shared between request handlers
pub type SharedRecipeStore = Arc<RwLock<RecipeStore>>;

/// Application state controller
pub struct RecipeStore {
    catalog: Catalog,
    search_filters: SearchFilters,
    filtered: Vec<Recipe>,
    favorites: Favorites,
    meal_plans: MealPlans,
    swipe: Option<SwipeSession>,
}

impl RecipeStore {
    /// Build the store over `catalog`, loading favorites and plans from `store`
    #[must_use]
    pub fn new(catalog: Catalog, store: SharedStore) -> Self {
        let filtered = catalog.recipes().to_vec();
        Self {
            favorites: Favorites::load(Arc::clone(&store)),
            meal_plans: MealPlans::load(store),
            catalog,
            search_filters: SearchFilters::default(),
            filtered,
            swipe: None,
        }
    }

    /// Wrap in the shared handle used by the server
    #[must_use]
    pub fn into_shared(self) -> SharedRecipeStore {
        Arc::new(RwLock::new(self))
    }

    // ── Catalog & search ────────────────────────────────────────────────

    /// The loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every catalog recipe
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        self.catalog.recipes()
    }

    /// Look up a catalog recipe by id
    #[must_use]
    pub fn get_recipe_by_id(&self, id: &str) -> Option<&Recipe> {
        self.catalog.get_recipe_by_id(id)
    }

    /// Replace the active search filters and recompute the filtered view
    pub fn set_search_filters(&mut self, filters: SearchFilters) {
        self.filtered = self.catalog.filter(&filters);
        debug!(
            search.query = %filters.query,
            search.results = self.filtered.len(),
            "Search filters updated"
        );
        self.search_filters = filters;
    }

    /// Active search filters
    #[must_use]
    pub const fn search_filters(&self) -> &SearchFilters {
        &self.search_filters
    }

    /// Catalog recipes matching the active filters
    #[must_use]
    pub fn filtered_recipes(&self) -> &[Recipe] {
        &self.filtered
    }

    // ── Favorites ───────────────────────────────────────────────────────

    /// The favorites set
    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Add `recipe` to favorites; no-op if already present
    pub fn add_to_favorites(&mut self, recipe: Recipe) -> bool {
        self.favorites.add_to_favorites(recipe)
    }

    /// Add the catalog recipe `id` to favorites
    ///
    /// Returns `None` when the catalog has no such recipe, otherwise whether
    /// it was newly added.
    pub fn add_favorite_by_id(&mut self, id: &str) -> Option<bool> {
        let recipe = self.catalog.get_recipe_by_id(id)?.clone();
        Some(self.favorites.add_to_favorites(recipe))
    }

    /// Remove `id` from favorites; no-op if absent
    pub fn remove_from_favorites(&mut self, id: &str) -> bool {
        self.favorites.remove_from_favorites(id)
    }

    /// Whether `id` is a favorite
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    // ── Meal plans ──────────────────────────────────────────────────────

    /// The meal plan collection
    #[must_use]
    pub const fn meal_plans(&self) -> &MealPlans {
        &self.meal_plans
    }

    /// Create an empty week and make it current
    pub fn create_meal_plan(&mut self, name: impl Into<String>) -> MealPlan {
        self.meal_plans.create_meal_plan(name)
    }

    /// Assign `recipe` to a slot of the current plan
    pub fn add_recipe_to_meal_plan(&mut self, recipe: Recipe, day: &str, meal_type: &str) -> bool {
        self.meal_plans.add_recipe_to_meal_plan(recipe, day, meal_type)
    }

    /// Clear a slot of the current plan
    pub fn remove_recipe_from_meal_plan(&mut self, day: &str, meal_type: &str) -> bool {
        self.meal_plans.remove_recipe_from_meal_plan(day, meal_type)
    }

    /// Select or clear the current plan
    pub fn set_current_meal_plan(&mut self, id: Option<&str>) -> bool {
        self.meal_plans.set_current_meal_plan(id)
    }

    /// Delete a plan
    pub fn delete_meal_plan(&mut self, id: &str) -> bool {
        self.meal_plans.delete_meal_plan(id)
    }

    /// The selected plan
    #[must_use]
    pub fn current_meal_plan(&self) -> Option<&MealPlan> {
        self.meal_plans.current_meal_plan()
    }

    // ── Swipe discovery ─────────────────────────────────────────────────

    /// Deal a new swipe deck, replacing any running session
    pub fn start_swipe_session<R: Rng + ?Sized>(
        &mut self,
        filters: SwipeFilters,
        rng: &mut R,
    ) -> &SwipeSession {
        let session = SwipeSession::deal(&self.catalog, filters, rng);
        info!(swipe.session = %session.id(), swipe.deck = session.deck().len(), "Swipe session started");
        self.swipe.insert(session)
    }

    /// The running swipe session
    #[must_use]
    pub const fn swipe_session(&self) -> Option<&SwipeSession> {
        self.swipe.as_ref()
    }

    /// Swipe the current card; likes and superlikes are added to favorites
    ///
    /// Returns the swiped recipe, or `None` without a session or with an
    /// exhausted deck.
    pub fn swipe(&mut self, action: SwipeAction) -> Option<Recipe> {
        let recipe = self.swipe.as_mut()?.swipe(action)?.clone();
        if action.adds_to_favorites() {
            self.favorites.add_to_favorites(recipe.clone());
        }
        debug!(recipe.id = %recipe.id, swipe.action = ?action, "Swiped");
        Some(recipe)
    }

    /// Undo the last swipe; favorites are not touched
    pub fn undo_swipe(&mut self) -> Option<SwipeRecord> {
        self.swipe.as_mut()?.undo()
    }
}
