// ABOUTME: Swipe discovery sessions: a shuffled deck of up to twenty recipes with like, dislike, superlike, and undo
// ABOUTME: Also classifies drag gestures into swipe actions using fixed distance thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Swipe discovery
//!
//! A session deals a deck from the catalog, walks it one card at a time, and
//! records every swipe. Liked and super-liked recipes are reported back to
//! the caller so they can be added to favorites; undo steps back one card
//! but never removes anything from favorites.

use crate::catalog::Catalog;
use crate::constants::discovery::{
    SWIPE_COOK_TIME_UNBOUNDED, SWIPE_DECK_SIZE, SWIPE_HORIZONTAL_THRESHOLD, SWIPE_UP_THRESHOLD,
};
use crate::models::{Difficulty, MealType, Recipe};
use crate::recommendations::shuffle_sample;
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Swipe decision for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    /// Swipe right
    Like,
    /// Swipe left
    Dislike,
    /// Swipe up
    Superlike,
}

impl SwipeAction {
    /// Whether this action adds the recipe to favorites
    #[must_use]
    pub const fn adds_to_favorites(self) -> bool {
        matches!(self, Self::Like | Self::Superlike)
    }

    /// Parse an action name, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "like" => Some(Self::Like),
            "dislike" => Some(Self::Dislike),
            "superlike" => Some(Self::Superlike),
            _ => None,
        }
    }
}

/// Classify a drag released at offset (`dx`, `dy`) in pixels
///
/// Horizontal travel beyond 100 px wins: right likes, left dislikes.
/// Otherwise dragging more than 150 px upward superlikes. Anything shorter
/// snaps back with no action.
#[must_use]
pub fn classify_gesture(dx: f64, dy: f64) -> Option<SwipeAction> {
    if dx.abs() > SWIPE_HORIZONTAL_THRESHOLD {
        Some(if dx > 0.0 {
            SwipeAction::Like
        } else {
            SwipeAction::Dislike
        })
    } else if dy < SWIPE_UP_THRESHOLD {
        Some(SwipeAction::Superlike)
    } else {
        None
    }
}

/// Deck selection criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwipeFilters {
    /// Cook time cap in minutes; 60 or more means unbounded
    pub max_cook_time: u32,
    /// Exact cuisine tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Exact difficulty
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_difficulty"
    )]
    pub difficulty: Option<Difficulty>,
    /// Exact meal type
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "optional_meal_type"
    )]
    pub meal_type: Option<MealType>,
}

// Browser filter forms send "" for "any".
fn parse_optional<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> Option<T>,
    what: &str,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown {what}: {value}"))),
    }
}

fn optional_difficulty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Difficulty>, D::Error> {
    parse_optional(deserializer, Difficulty::from_name, "difficulty")
}

fn optional_meal_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<MealType>, D::Error> {
    parse_optional(deserializer, MealType::from_name, "meal type")
}

impl Default for SwipeFilters {
    fn default() -> Self {
        Self {
            max_cook_time: SWIPE_COOK_TIME_UNBOUNDED,
            cuisine: None,
            difficulty: None,
            meal_type: None,
        }
    }
}

impl SwipeFilters {
    /// Whether `recipe` may be dealt into the deck
    #[must_use]
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        let within_time = self.max_cook_time >= SWIPE_COOK_TIME_UNBOUNDED
            || recipe.cook_time <= self.max_cook_time;
        let cuisine_ok = match self.cuisine.as_deref() {
            None | Some("") => true,
            Some(cuisine) => cuisine == recipe.cuisine,
        };
        within_time
            && cuisine_ok
            && !matches!(self.difficulty, Some(d) if d != recipe.difficulty)
            && !matches!(self.meal_type, Some(m) if m != recipe.meal_type)
    }
}

/// One recorded swipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRecord {
    /// Swiped recipe id
    pub recipe_id: String,
    /// Decision
    pub action: SwipeAction,
}

/// A discovery session over one dealt deck
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeSession {
    id: Uuid,
    filters: SwipeFilters,
    deck: Vec<Recipe>,
    position: usize,
    history: Vec<SwipeRecord>,
    liked: Vec<Recipe>,
    super_liked: Vec<Recipe>,
}

impl SwipeSession {
    /// Deal a shuffled deck of at most 20 catalog recipes accepted by `filters`
    #[must_use]
    pub fn deal<R: Rng + ?Sized>(catalog: &Catalog, filters: SwipeFilters, rng: &mut R) -> Self {
        let eligible: Vec<Recipe> = catalog
            .recipes()
            .iter()
            .filter(|recipe| filters.accepts(recipe))
            .cloned()
            .collect();
        Self::from_deck(shuffle_sample(&eligible, SWIPE_DECK_SIZE, rng), filters)
    }

    /// Session over an explicit deck
    #[must_use]
    pub fn from_deck(deck: Vec<Recipe>, filters: SwipeFilters) -> Self {
        Self {
            id: Uuid::new_v4(),
            filters,
            deck,
            position: 0,
            history: Vec::new(),
            liked: Vec::new(),
            super_liked: Vec::new(),
        }
    }

    /// Record `action` for the current card and advance
    ///
    /// Returns the swiped recipe, or `None` when the deck is exhausted.
    pub fn swipe(&mut self, action: SwipeAction) -> Option<&Recipe> {
        let index = self.position;
        let recipe = self.deck.get(index)?;
        self.history.push(SwipeRecord {
            recipe_id: recipe.id.clone(),
            action,
        });
        if action.adds_to_favorites() {
            self.liked.push(recipe.clone());
        }
        if action == SwipeAction::Superlike {
            self.super_liked.push(recipe.clone());
        }
        self.position += 1;
        self.deck.get(index)
    }

    /// Step back one card, forgetting the last swipe
    ///
    /// Liked lists and favorites are left as they are. Returns the undone
    /// record, or `None` when nothing has been swiped.
    pub fn undo(&mut self) -> Option<SwipeRecord> {
        let record = self.history.pop()?;
        self.position = self.position.saturating_sub(1);
        Some(record)
    }

    /// Card waiting to be swiped
    #[must_use]
    pub fn current_card(&self) -> Option<&Recipe> {
        self.deck.get(self.position)
    }

    /// Whether every card has been swiped
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.deck.len()
    }

    /// Cards not yet swiped
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.position)
    }

    /// Session id
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The dealt deck
    #[must_use]
    pub fn deck(&self) -> &[Recipe] {
        &self.deck
    }

    /// Filters the deck was dealt with
    #[must_use]
    pub const fn filters(&self) -> &SwipeFilters {
        &self.filters
    }

    /// Swipes in order
    #[must_use]
    pub fn history(&self) -> &[SwipeRecord] {
        &self.history
    }

    /// Liked and super-liked recipes in swipe order
    #[must_use]
    pub fn liked(&self) -> &[Recipe] {
        &self.liked
    }

    /// Super-liked recipes in swipe order
    #[must_use]
    pub fn super_liked(&self) -> &[Recipe] {
        &self.super_liked
    }
}
