// ABOUTME: Swipe discovery routes: deal a deck, swipe the current card, undo, and inspect
// ABOUTME: Swipes may name an action or pass a drag offset to be classified
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::errors::AppError;
use crate::models::Recipe;
use crate::resources::ServerResources;
use crate::swipe::{classify_gesture, SwipeAction, SwipeFilters, SwipeRecord, SwipeSession};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Body of POST /api/swipe/action
///
/// `action` wins when present; otherwise the drag offset is classified.
#[derive(Debug, Default, Deserialize)]
pub struct SwipeRequest {
    /// Explicit decision
    #[serde(default)]
    pub action: Option<SwipeAction>,
    /// Horizontal drag offset in pixels
    #[serde(default)]
    pub dx: f64,
    /// Vertical drag offset in pixels, negative is up
    #[serde(default)]
    pub dy: f64,
}

/// Snapshot of the running session
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeStateResponse {
    /// Session id
    pub session_id: Uuid,
    /// Card waiting to be swiped
    pub current_card: Option<Recipe>,
    /// Cards left in the deck
    pub remaining: usize,
    /// Whether the deck is exhausted
    pub finished: bool,
    /// Liked and super-liked recipe ids in swipe order
    pub liked: Vec<String>,
    /// Super-liked recipe ids in swipe order
    pub super_liked: Vec<String>,
}

impl From<&SwipeSession> for SwipeStateResponse {
    fn from(session: &SwipeSession) -> Self {
        Self {
            session_id: session.id(),
            current_card: session.current_card().cloned(),
            remaining: session.remaining(),
            finished: session.is_finished(),
            liked: session.liked().iter().map(|r| r.id.clone()).collect(),
            super_liked: session.super_liked().iter().map(|r| r.id.clone()).collect(),
        }
    }
}

/// Response of POST /api/swipe/session
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeSessionResponse {
    /// Dealt deck size
    pub deck_size: usize,
    /// Filters the deck was dealt with
    pub filters: SwipeFilters,
    /// Session state
    pub state: SwipeStateResponse,
}

/// Response of POST /api/swipe/action
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeActionResponse {
    /// Applied decision, `None` when the gesture snapped back
    pub action: Option<SwipeAction>,
    /// Swiped recipe, `None` when nothing was swiped
    pub swiped: Option<Recipe>,
    /// Whether the swiped recipe was added to favorites
    pub added_to_favorites: bool,
    /// Session state after the swipe
    pub state: SwipeStateResponse,
}

/// Response of POST /api/swipe/undo
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeUndoResponse {
    /// Forgotten swipe, `None` when nothing had been swiped
    pub undone: Option<SwipeRecord>,
    /// Session state after the undo
    pub state: SwipeStateResponse,
}

/// Swipe routes implementation
pub struct SwipeRoutes;

impl SwipeRoutes {
    /// Create all swipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/swipe/session",
                get(Self::handle_state).post(Self::handle_start),
            )
            .route("/api/swipe/action", post(Self::handle_swipe))
            .route("/api/swipe/undo", post(Self::handle_undo))
            .with_state(resources)
    }

    fn no_session() -> AppError {
        AppError::not_found("No active swipe session")
    }

    /// Handle GET /api/swipe/session
    async fn handle_state(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let store = resources.store.read().await;
        let session = store.swipe_session().ok_or_else(Self::no_session)?;
        Ok((StatusCode::OK, Json(SwipeStateResponse::from(session))).into_response())
    }

    /// Handle POST /api/swipe/session - Deal a new deck
    async fn handle_start(
        State(resources): State<Arc<ServerResources>>,
        payload: Option<Json<SwipeFilters>>,
    ) -> Result<Response, AppError> {
        let filters = payload.map(|Json(body)| body).unwrap_or_default();

        let mut rng = resources.rng.lock().await;
        let mut store = resources.store.write().await;
        let session = store.start_swipe_session(filters, &mut *rng);

        let response = SwipeSessionResponse {
            deck_size: session.deck().len(),
            filters: session.filters().clone(),
            state: SwipeStateResponse::from(session),
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/swipe/action
    async fn handle_swipe(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SwipeRequest>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        if store.swipe_session().is_none() {
            return Err(Self::no_session());
        }

        let action = request
            .action
            .or_else(|| classify_gesture(request.dx, request.dy));
        let (swiped, added_to_favorites) = match action {
            Some(action) => {
                let was_favorite = store
                    .swipe_session()
                    .and_then(SwipeSession::current_card)
                    .is_some_and(|card| store.is_favorite(&card.id));
                let swiped = store.swipe(action);
                let added = swiped.is_some() && action.adds_to_favorites() && !was_favorite;
                (swiped, added)
            }
            None => (None, false),
        };

        let state = store
            .swipe_session()
            .map(SwipeStateResponse::from)
            .ok_or_else(Self::no_session)?;
        let response = SwipeActionResponse {
            action,
            swiped,
            added_to_favorites,
            state,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/swipe/undo
    async fn handle_undo(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let mut store = resources.store.write().await;
        if store.swipe_session().is_none() {
            return Err(Self::no_session());
        }

        let undone = store.undo_swipe();
        let state = store
            .swipe_session()
            .map(SwipeStateResponse::from)
            .ok_or_else(Self::no_session)?;
        Ok((StatusCode::OK, Json(SwipeUndoResponse { undone, state })).into_response())
    }
}
