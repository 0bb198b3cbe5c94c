// ABOUTME: Saved meal plan routes: list, create, select current, edit slots, delete
// ABOUTME: Unknown days and meal types are silent no-ops reported as `updated: false`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Meal plan routes
//!
//! Slot edits always target the current plan. A slot edit naming a day or
//! meal type that does not exist, or made with no current plan, leaves every
//! plan unchanged and answers 200 with `updated: false`.

use crate::errors::AppError;
use crate::models::MealPlan;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of POST /api/meal-plans
#[derive(Debug, Deserialize)]
pub struct CreateMealPlanRequest {
    /// Plan name
    #[serde(default)]
    pub name: String,
}

/// Body of PUT /api/meal-plans/current
#[derive(Debug, Deserialize)]
pub struct SelectMealPlanRequest {
    /// Plan to select, or null to clear
    #[serde(default)]
    pub id: Option<String>,
}

/// Body of POST /api/meal-plans/current/slots
#[derive(Debug, Deserialize)]
pub struct AssignSlotRequest {
    /// Catalog recipe to assign
    pub recipe_id: String,
    /// Weekday name, case-sensitive
    pub day: String,
    /// Meal type naming the slot
    pub meal_type: String,
}

/// Body of DELETE /api/meal-plans/current/slots
#[derive(Debug, Deserialize)]
pub struct ClearSlotRequest {
    /// Weekday name, case-sensitive
    pub day: String,
    /// Meal type naming the slot
    pub meal_type: String,
}

/// Plan collection response
#[derive(Debug, Serialize, Deserialize)]
pub struct MealPlansResponse {
    /// Every plan in creation order
    pub meal_plans: Vec<MealPlan>,
    /// Selected plan
    pub current_id: Option<String>,
}

/// Single plan response
#[derive(Debug, Serialize, Deserialize)]
pub struct MealPlanResponse {
    /// The plan
    pub meal_plan: MealPlan,
}

/// Current selection response
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentMealPlanResponse {
    /// Selected plan
    pub current_id: Option<String>,
}

/// Result of a slot edit
#[derive(Debug, Serialize, Deserialize)]
pub struct SlotUpdateResponse {
    /// Whether the current plan changed
    pub updated: bool,
    /// The current plan after the edit
    pub meal_plan: Option<MealPlan>,
}

/// Result of a delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteMealPlanResponse {
    /// Deleted plan id
    pub id: String,
    /// Always true on success
    pub deleted: bool,
}

/// Meal plan routes implementation
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/meal-plans",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/meal-plans/current", put(Self::handle_select))
            .route(
                "/api/meal-plans/current/slots",
                post(Self::handle_assign_slot).delete(Self::handle_clear_slot),
            )
            .route("/api/meal-plans/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/meal-plans
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let store = resources.store.read().await;
        let response = MealPlansResponse {
            meal_plans: store.meal_plans().meal_plans().to_vec(),
            current_id: store.meal_plans().current_id().map(str::to_owned),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/meal-plans - Create a plan and make it current
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateMealPlanRequest>,
    ) -> Result<Response, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("Meal plan name is required"));
        }

        let meal_plan = resources.store.write().await.create_meal_plan(name);
        Ok((StatusCode::CREATED, Json(MealPlanResponse { meal_plan })).into_response())
    }

    /// Handle PUT /api/meal-plans/current
    async fn handle_select(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SelectMealPlanRequest>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        if !store.set_current_meal_plan(request.id.as_deref()) {
            return Err(AppError::not_found("Meal plan not found"));
        }

        let response = CurrentMealPlanResponse {
            current_id: store.meal_plans().current_id().map(str::to_owned),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/meal-plans/current/slots
    async fn handle_assign_slot(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AssignSlotRequest>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        let recipe = store
            .get_recipe_by_id(&request.recipe_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        let updated = store.add_recipe_to_meal_plan(recipe, &request.day, &request.meal_type);
        let response = SlotUpdateResponse {
            updated,
            meal_plan: store.current_meal_plan().cloned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/meal-plans/current/slots
    async fn handle_clear_slot(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ClearSlotRequest>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        let updated = store.remove_recipe_from_meal_plan(&request.day, &request.meal_type);
        let response = SlotUpdateResponse {
            updated,
            meal_plan: store.current_meal_plan().cloned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/meal-plans/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        if !resources.store.write().await.delete_meal_plan(&id) {
            return Err(AppError::not_found("Meal plan not found"));
        }
        let response = DeleteMealPlanResponse { id, deleted: true };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
