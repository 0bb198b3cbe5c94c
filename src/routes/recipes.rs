// ABOUTME: Catalog routes: search, lookup, recommendations, generated meal plans, and ratings
// ABOUTME: Reads the shared catalog; not-found recipe ids become 404 here and nowhere else
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Recipe routes
//!
//! List parameters on `GET /api/recipes` accept comma-separated values, so
//! `?cuisine=Italian,Thai` selects either cuisine. Difficulty and meal type
//! values are matched case-insensitively and rejected when unknown.

use crate::constants::recipes::{DEFAULT_CALORIE_TARGET, MAX_RATING, MIN_RATING};
use crate::errors::AppError;
use crate::models::{Difficulty, MealType, Recipe, SearchFilters, Weekday};
use crate::recommendations::{self, RECOMMEND_COUNT};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Query string of GET /api/recipes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    /// Free-text query
    pub q: Option<String>,
    /// Comma-separated cuisines
    pub cuisine: Option<String>,
    /// Comma-separated difficulties
    pub difficulty: Option<String>,
    /// Comma-separated meal types
    pub meal_type: Option<String>,
    /// Comma-separated dietary restriction tags
    pub dietary_restrictions: Option<String>,
    /// Comma-separated ingredient terms
    pub ingredients: Option<String>,
    /// Maximum cook time in minutes
    pub max_cook_time: Option<u32>,
}

impl RecipeQuery {
    /// Convert to search filters
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unknown difficulty or meal type
    pub fn into_filters(self) -> Result<SearchFilters, AppError> {
        let difficulty = split_list(self.difficulty.as_deref())
            .iter()
            .map(|name| {
                Difficulty::from_name(name)
                    .ok_or_else(|| AppError::invalid_input(format!("Invalid difficulty: {name}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let meal_type = split_list(self.meal_type.as_deref())
            .iter()
            .map(|name| {
                MealType::from_name(name)
                    .ok_or_else(|| AppError::invalid_input(format!("Invalid meal type: {name}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchFilters {
            query: self.q.map(|q| q.trim().to_owned()).unwrap_or_default(),
            cuisine: split_list(self.cuisine.as_deref()),
            dietary_restrictions: split_list(self.dietary_restrictions.as_deref()),
            meal_type,
            difficulty,
            cook_time: self.max_cook_time,
            ingredients: split_list(self.ingredients.as_deref()),
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

/// Recipe list response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipesResponse {
    /// Matching recipes
    pub recipes: Vec<Recipe>,
}

/// Single recipe response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    /// The recipe
    pub recipe: Recipe,
}

/// Body of POST /api/recommend
#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    /// Optional query narrowing the candidates
    #[serde(default)]
    pub query: Option<String>,
}

/// Response of POST /api/recommend
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// Shuffled recipes
    pub recipes: Vec<Recipe>,
    /// Display message
    pub message: String,
}

/// Body of POST /api/meal-plan
#[derive(Debug, Deserialize)]
pub struct GenerateMealPlanRequest {
    /// Query narrowing the candidate recipes
    #[serde(default)]
    pub query: Option<String>,
    /// Daily calorie target
    #[serde(default = "default_calorie_target")]
    pub calorie_target: u32,
}

const fn default_calorie_target() -> u32 {
    DEFAULT_CALORIE_TARGET
}

/// Meals of one generated day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMeals {
    /// Breakfast recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    /// Lunch recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    /// Dinner recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
}

impl GeneratedMeals {
    fn total_calories(&self) -> u32 {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .flatten()
            .map(|recipe| recipe.calories)
            .sum()
    }
}

/// One generated day
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedDay {
    /// Weekday name
    pub day: Weekday,
    /// Assigned meals
    pub meals: GeneratedMeals,
    /// Sum of the assigned meals' calories
    pub total_calories: u32,
}

/// Response of POST /api/meal-plan
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateMealPlanResponse {
    /// Seven generated days, Monday first
    pub meal_plan: Vec<GeneratedDay>,
    /// Requested daily calorie target
    pub calorie_target: u32,
}

/// Body of POST /api/rate
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    /// Rated recipe
    pub recipe_id: String,
    /// Rating from 1 to 5
    pub rating: i64,
    /// Optional free-text feedback
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Plain message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Display message
    pub message: String,
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipes/:id", get(Self::handle_get))
            .route("/api/recommend", post(Self::handle_recommend))
            .route("/api/meal-plan", post(Self::handle_generate_meal_plan))
            .route("/api/rate", post(Self::handle_rate))
            .with_state(resources)
    }

    /// Handle GET /api/recipes - Search the catalog
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<RecipeQuery>,
    ) -> Result<Response, AppError> {
        let filters = query.into_filters()?;
        let store = resources.store.read().await;
        let response = RecipesResponse {
            recipes: store.catalog().filter(&filters),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/recipes/:id - Look up one recipe
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let store = resources.store.read().await;
        let recipe = store
            .get_recipe_by_id(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;
        Ok((StatusCode::OK, Json(RecipeResponse { recipe })).into_response())
    }

    /// Handle POST /api/recommend - Shuffled picks from the catalog
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        payload: Option<Json<RecommendRequest>>,
    ) -> Result<Response, AppError> {
        let request = payload.map(|Json(body)| body).unwrap_or_default();
        let filters = SearchFilters::with_query(request.query.unwrap_or_default().trim());

        let mut rng = resources.rng.lock().await;
        let store = resources.store.read().await;
        let recipes =
            recommendations::recommend(store.catalog(), &filters, RECOMMEND_COUNT, &mut *rng);

        let response = RecommendResponse {
            recipes,
            message: "Recommendations based on your preferences".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/meal-plan - Generate a week from the catalog
    async fn handle_generate_meal_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerateMealPlanRequest>,
    ) -> Result<Response, AppError> {
        let store = resources.store.read().await;
        let filters = SearchFilters::with_query(request.query.unwrap_or_default().trim());
        let mut candidates = store.catalog().filter(&filters);
        if candidates.is_empty() {
            candidates = store.recipes().to_vec();
        }

        let first_of = |meal_type: MealType| {
            candidates
                .iter()
                .find(|recipe| recipe.meal_type == meal_type)
                .cloned()
        };
        let meals = GeneratedMeals {
            breakfast: first_of(MealType::Breakfast),
            lunch: first_of(MealType::Lunch),
            dinner: first_of(MealType::Dinner),
        };

        let meal_plan = Weekday::ALL
            .into_iter()
            .map(|day| GeneratedDay {
                day,
                total_calories: meals.total_calories(),
                meals: meals.clone(),
            })
            .collect();

        let response = GenerateMealPlanResponse {
            meal_plan,
            calorie_target: request.calorie_target,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/rate - Record a rating
    async fn handle_rate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RateRequest>,
    ) -> Result<Response, AppError> {
        if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&request.rating) {
            return Err(AppError::out_of_range(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let store = resources.store.read().await;
        if store.get_recipe_by_id(&request.recipe_id).is_none() {
            return Err(AppError::not_found("Recipe not found"));
        }

        info!(
            recipe.id = %request.recipe_id,
            rating = request.rating,
            feedback = request.feedback.as_deref().unwrap_or("No feedback"),
            "Recipe rated"
        );

        let response = MessageResponse {
            message: "Rating submitted successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
