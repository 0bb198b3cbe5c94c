// ABOUTME: Favorites routes: list, add by recipe id, and remove
// ABOUTME: Mutations run under one write lock and persist through the favorites set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::errors::AppError;
use crate::models::Recipe;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of POST /api/favorites
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    /// Catalog recipe to add
    pub recipe_id: String,
}

/// Favorites list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoritesResponse {
    /// Favorites in insertion order
    pub favorites: Vec<Recipe>,
}

/// Result of an add or remove
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteChangeResponse {
    /// Affected recipe
    pub recipe_id: String,
    /// Membership after the change
    pub is_favorite: bool,
    /// Whether the set changed
    pub updated: bool,
}

/// Favorites routes implementation
pub struct FavoritesRoutes;

impl FavoritesRoutes {
    /// Create all favorites routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/favorites",
                get(Self::handle_list).post(Self::handle_add),
            )
            .route("/api/favorites/:id", delete(Self::handle_remove))
            .with_state(resources)
    }

    /// Handle GET /api/favorites
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let store = resources.store.read().await;
        let response = FavoritesResponse {
            favorites: store.favorites().recipes().to_vec(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/favorites - Add a catalog recipe
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<AddFavoriteRequest>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        let updated = store
            .add_favorite_by_id(&request.recipe_id)
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        let response = FavoriteChangeResponse {
            recipe_id: request.recipe_id,
            is_favorite: true,
            updated,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/favorites/:id
    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        let updated = store.remove_from_favorites(&id);

        let response = FavoriteChangeResponse {
            recipe_id: id,
            is_favorite: false,
            updated,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
