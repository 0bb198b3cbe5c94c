// ABOUTME: Route module organization for the recipe planner HTTP API
// ABOUTME: One module per domain; each exposes a `routes` constructor merged by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Route module for the recipe planner
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the [`RecipeStore`](crate::store::RecipeStore) or the OAuth
//! client.

/// Sign-in URL, callback, and token exchange routes
pub mod auth;
/// Favorites routes
pub mod favorites;
/// Health check routes
pub mod health;
/// Saved meal plan routes
pub mod meal_plans;
/// Catalog, recommendation, generated meal plan, and rating routes
pub mod recipes;
/// Swipe discovery routes
pub mod swipe;

pub use auth::AuthRoutes;
pub use favorites::FavoritesRoutes;
pub use health::HealthRoutes;
pub use meal_plans::MealPlanRoutes;
pub use recipes::RecipeRoutes;
pub use swipe::SwipeRoutes;
