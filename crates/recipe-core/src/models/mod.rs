// ABOUTME: Core data models for recipe discovery and meal planning
// ABOUTME: Re-exports Recipe, SearchFilters, MealPlan and their supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! # Data Models
//!
//! Data structures shared by the catalog, the filter engine, the favorites
//! set, and the meal planner. JSON field names are camelCase so records
//! written by the browser client and by this service are interchangeable.
//!
//! ## Core Models
//!
//! - `Recipe`: immutable catalog record
//! - `SearchFilters`: query string plus facet selections
//! - `MealPlan`: named week of `MealPlanDay` entries, always seven of them

mod filters;
mod meal_plan;
mod recipe;

pub use filters::SearchFilters;
pub use meal_plan::{InvalidMealPlan, MealPlan, MealPlanDay, MealSlot, Weekday};
pub use recipe::{Difficulty, MealType, NutritionalInfo, Recipe};
