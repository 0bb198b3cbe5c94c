// ABOUTME: Search filter state: free-text query plus multi-value facets and a cook-time cap
// ABOUTME: Empty facets impose no constraint; matching lives in the catalog filter engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use super::recipe::{Difficulty, MealType};
use serde::{Deserialize, Serialize};

/// Active search state
///
/// Each facet is a list of accepted values: a recipe matches a facet when its
/// value is any of them, and must match every non-empty facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Case-insensitive substring searched in title, ingredients and cuisine
    pub query: String,
    /// Accepted cuisine tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cuisine: Vec<String>,
    /// Accepted dietary restriction tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
    /// Accepted meal types
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meal_type: Vec<MealType>,
    /// Accepted difficulties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub difficulty: Vec<Difficulty>,
    /// Maximum cooking time in minutes; 0 leaves cook time unconstrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// Ingredient terms, any of which must appear in an ingredient line
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
}

impl SearchFilters {
    /// Filters with only a query set
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the maximum cook time
    #[must_use]
    pub const fn max_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = Some(minutes);
        self
    }

    /// Set the cuisine facet
    #[must_use]
    pub fn cuisines<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisine = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dietary restriction facet
    #[must_use]
    pub fn dietary<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the meal type facet
    #[must_use]
    pub fn meal_types(mut self, values: impl IntoIterator<Item = MealType>) -> Self {
        self.meal_type = values.into_iter().collect();
        self
    }

    /// Set the difficulty facet
    #[must_use]
    pub fn difficulties(mut self, values: impl IntoIterator<Item = Difficulty>) -> Self {
        self.difficulty = values.into_iter().collect();
        self
    }

    /// Whether no predicate is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.cuisine.is_empty()
            && self.dietary_restrictions.is_empty()
            && self.meal_type.is_empty()
            && self.difficulty.is_empty()
            && self.cook_time.unwrap_or(0) == 0
            && self.ingredients.is_empty()
    }
}
