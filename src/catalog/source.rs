// ABOUTME: Catalog sources: the bundled seed set and a remote JSON endpoint fetched with a timeout
// ABOUTME: Remote payloads may be app-shaped recipes or database rows with estimated nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use super::seed::seed_recipes;
use crate::constants::recipes::{
    CALORIES_PER_GRAM_FAT, CALORIES_PER_GRAM_PROTEIN_CARBS, DEFAULT_IMAGE_URL,
    ESTIMATED_CARBS_SHARE, ESTIMATED_FAT_SHARE, ESTIMATED_FIBER_PER_CALORIE,
    ESTIMATED_PROTEIN_SHARE,
};
use crate::models::{Difficulty, MealType, NutritionalInfo, Recipe};
use crate::utils::http_client::catalog_client;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure to obtain recipes from a source
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogSourceError {
    /// The request did not complete within the configured timeout
    #[error("catalog request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout
        timeout: Duration,
    },

    /// The request failed at the transport level
    #[error("catalog request to {url} failed: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("catalog source {url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The body was not a recognizable recipe payload
    #[error("catalog payload from {url} could not be decoded: {source}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can produce the full recipe list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every recipe the source offers
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be reached or its payload is invalid
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, CatalogSourceError>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// The bundled seed recipes
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSource;

#[async_trait]
impl CatalogSource for SeedSource {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, CatalogSourceError> {
        Ok(seed_recipes())
    }

    fn describe(&self) -> String {
        "bundled seed catalog".to_owned()
    }
}

/// Remote JSON endpoint serving `{"recipes": [...]}` or a bare array
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    timeout: Duration,
    client: Client,
}

impl RemoteSource {
    /// Source for `url`, giving up after `timeout`
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            client: catalog_client(timeout),
        }
    }

    /// Endpoint URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_error(&self, source: reqwest::Error) -> CatalogSourceError {
        if source.is_timeout() {
            CatalogSourceError::Timeout {
                url: self.url.clone(),
                timeout: self.timeout,
            }
        } else {
            CatalogSourceError::Request {
                url: self.url.clone(),
                source,
            }
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, CatalogSourceError> {
        debug!(catalog.url = %self.url, "Fetching remote catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogSourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        decode_payload(&body).map_err(|source| CatalogSourceError::Decode {
            url: self.url.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("remote catalog at {}", self.url)
    }
}

/// Decode a catalog payload in any supported shape
///
/// Each record is decoded on its own; one that matches neither the app
/// shape nor the database row shape is dropped with a warning.
///
/// # Errors
///
/// Returns an error if the bytes are not a JSON array or a `{"recipes": [...]}` object
pub fn decode_payload(body: &[u8]) -> Result<Vec<Recipe>, serde_json::Error> {
    let payload: CatalogPayload = serde_json::from_slice(body)?;
    let records = match payload {
        CatalogPayload::Wrapped { recipes } => recipes,
        CatalogPayload::Bare(recipes) => recipes,
    };
    Ok(records
        .iter()
        .filter_map(|value| match RemoteRecipe::deserialize(value) {
            Ok(record) => record.into_recipe(),
            Err(e) => {
                warn!(recipe.id = ?value.get("id"), error = %e, "Dropping undecodable catalog record");
                None
            }
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Wrapped { recipes: Vec<Value> },
    Bare(Vec<Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RemoteRecipe {
    App(Recipe),
    Row(DatabaseRecipe),
}

impl RemoteRecipe {
    fn into_recipe(self) -> Option<Recipe> {
        match self {
            Self::App(recipe) => Some(recipe),
            Self::Row(row) => row.into_recipe(),
        }
    }
}

/// Recipe row as stored in the hosted database (snake_case, no nutrition)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseRecipe {
    /// Row id
    pub id: String,
    /// Recipe name
    pub title: String,
    /// Image URL, when one was uploaded
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instructions text
    #[serde(default)]
    pub instructions: String,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Servings
    pub servings: u32,
    /// Calories per serving
    pub calories: u32,
    /// Cuisine tag
    #[serde(default)]
    pub cuisine: String,
    /// Dietary tags
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Difficulty name
    pub difficulty: String,
    /// Meal type name
    pub meal_type: String,
}

impl DatabaseRecipe {
    /// Convert to a catalog recipe, estimating nutrition from calories
    ///
    /// Rows with an unknown difficulty or meal type are rejected.
    #[must_use]
    pub fn into_recipe(self) -> Option<Recipe> {
        let Some(difficulty) = Difficulty::from_name(&self.difficulty) else {
            warn!(recipe.id = %self.id, difficulty = %self.difficulty, "Dropping recipe row with unknown difficulty");
            return None;
        };
        let Some(meal_type) = MealType::from_name(&self.meal_type) else {
            warn!(recipe.id = %self.id, meal_type = %self.meal_type, "Dropping recipe row with unknown meal type");
            return None;
        };

        let image = self
            .image_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_owned());

        Some(
            Recipe::new(self.id, self.title, meal_type)
                .with_image(image)
                .with_ingredients(self.ingredients)
                .with_instructions(self.instructions)
                .with_times(self.prep_time, self.cook_time)
                .with_servings(self.servings, self.calories)
                .with_cuisine(self.cuisine)
                .with_dietary_restrictions(self.dietary_restrictions)
                .with_nutrition(estimate_nutrition(self.calories))
                .with_difficulty(difficulty),
        )
    }
}

/// Macronutrient estimate from calories alone
///
/// Protein 15% and carbs 55% of calories at 4 kcal/g, fat 30% at 9 kcal/g,
/// fiber 0.02 g per kcal. Each value is rounded to the nearest gram.
#[must_use]
pub fn estimate_nutrition(calories: u32) -> NutritionalInfo {
    let calories = f64::from(calories);
    let grams = |value: f64| value.round() as u32;
    NutritionalInfo {
        protein: grams(calories * ESTIMATED_PROTEIN_SHARE / CALORIES_PER_GRAM_PROTEIN_CARBS),
        carbs: grams(calories * ESTIMATED_CARBS_SHARE / CALORIES_PER_GRAM_PROTEIN_CARBS),
        fat: grams(calories * ESTIMATED_FAT_SHARE / CALORIES_PER_GRAM_FAT),
        fiber: grams(calories * ESTIMATED_FIBER_PER_CALORIE),
    }
}
