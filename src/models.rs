// ABOUTME: Re-exports the shared data models from recipe-core
// ABOUTME: Recipe, SearchFilters, MealPlan and their supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

pub use recipe_core::models::*;
