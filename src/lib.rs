// ABOUTME: Main library entry point for the recipe discovery and meal-planning service
// ABOUTME: Exposes the catalog, favorites, meal plans, swipe discovery, and the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![deny(unsafe_code)]

//! # Recipe Planner
//!
//! A recipe discovery and meal-planning backend. A small recipe catalog is
//! searched and faceted, recipes are collected into favorites and arranged
//! into weekly meal plans, and a swipe-style discovery deck feeds favorites.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable recipe records, loaded from a remote source or the bundled seed set
//! - **Filter engine**: pure function of (catalog, search filters)
//! - **Favorites / meal plans**: user-curated state persisted through a key/value store
//! - **Store**: the single controller owning all mutable state
//! - **Routes**: thin axum handlers over the store
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_planner::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe planner configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Recipe catalog loading, lookup, and filtering
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Favorites set management
pub mod favorites;

/// Production logging and structured output
pub mod logging;

/// Weekly meal plan management
pub mod meal_plan;

/// HTTP middleware configuration
pub mod middleware;

/// Shared data models
pub mod models;

/// OAuth 2.0 client for the `GitLab` sign-in flow
pub mod oauth2_client;

/// Placeholder recommendation shuffle
pub mod recommendations;

/// Shared server resources handed to route handlers
pub mod resources;

/// `HTTP` routes organized by domain
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Durable key/value storage for favorites and meal plans
pub mod storage;

/// Application state controller
pub mod store;

/// Swipe-style discovery sessions
pub mod swipe;

/// Utility functions and helpers
pub mod utils;
