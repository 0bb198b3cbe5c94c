// ABOUTME: Recipe catalog record with difficulty, meal type, and nutrition breakdown
// ABOUTME: Records are immutable once loaded; builders exist for seeding and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cooking difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    #[default]
    Easy,
    /// Some technique required
    Medium,
    /// Advanced techniques
    Hard,
}

impl Difficulty {
    /// All difficulties in display order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Display name, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Parse a difficulty name, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course a recipe is intended for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    #[default]
    Dinner,
    /// Between meals
    Snack,
    /// Sweet course
    Dessert,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::Dessert,
    ];

    /// Display name, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::Dessert => "Dessert",
        }
    }

    /// Parse a meal type name, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macronutrient breakdown per serving, in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NutritionalInfo {
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
    /// Fiber in grams
    pub fiber: u32,
}

/// A catalog recipe
///
/// Times are in minutes. `servings` is always greater than zero for records
/// accepted into the catalog (see [`Recipe::is_valid`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub title: String,
    /// Image URL
    pub image: String,
    /// Ingredient lines, in order
    pub ingredients: Vec<String>,
    /// Cooking instructions
    pub instructions: String,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Number of servings
    pub servings: u32,
    /// Calories per serving
    pub calories: u32,
    /// Free-text cuisine tag (Italian, Thai, ...)
    pub cuisine: String,
    /// Dietary restriction tags (Vegetarian, Gluten-Free, ...)
    pub dietary_restrictions: Vec<String>,
    /// Macronutrients per serving
    pub nutritional_info: NutritionalInfo,
    /// Cooking difficulty
    pub difficulty: Difficulty,
    /// Intended course
    pub meal_type: MealType,
}

impl Recipe {
    /// Create a recipe with the given identity and empty details
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, meal_type: MealType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            cook_time: 0,
            prep_time: 0,
            servings: 1,
            calories: 0,
            cuisine: String::new(),
            dietary_restrictions: Vec::new(),
            nutritional_info: NutritionalInfo::default(),
            difficulty: Difficulty::default(),
            meal_type,
        }
    }

    /// Set the image URL
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    /// Set the ingredient lines
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Set preparation and cooking times
    #[must_use]
    pub const fn with_times(mut self, prep_time: u32, cook_time: u32) -> Self {
        self.prep_time = prep_time;
        self.cook_time = cook_time;
        self
    }

    /// Set servings and calories per serving
    #[must_use]
    pub const fn with_servings(mut self, servings: u32, calories: u32) -> Self {
        self.servings = servings;
        self.calories = calories;
        self
    }

    /// Set the cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Set the dietary restriction tags
    #[must_use]
    pub fn with_dietary_restrictions<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the nutrition breakdown
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionalInfo) -> Self {
        self.nutritional_info = nutrition;
        self
    }

    /// Set the difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Total time (prep + cook) in minutes
    #[must_use]
    pub const fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Whether the record satisfies the catalog invariants
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.servings > 0
    }

    /// Whether the recipe carries the given dietary tag (exact match)
    #[must_use]
    pub fn has_restriction(&self, tag: &str) -> bool {
        self.dietary_restrictions.iter().any(|t| t == tag)
    }
}
