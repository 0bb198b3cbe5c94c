// ABOUTME: HTTP integration tests for swipe discovery routes
// ABOUTME: Covers dealing, explicit and gesture swipes, favorites side effects, and undo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::Router;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::test_app;
use serde_json::{json, Value};

async fn start(app: &Router, filters: Option<Value>) -> Value {
    let mut request = AxumTestRequest::post("/api/swipe/session");
    if let Some(filters) = filters {
        request = request.json(&filters);
    }
    let response = request.send(app.clone()).await;
    assert_eq!(response.status(), 201);
    response.json()
}

async fn swipe(app: &Router, body: Value) -> Value {
    let response = AxumTestRequest::post("/api/swipe/action")
        .json(&body)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    response.json()
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_no_session_is_404() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/swipe/session")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "No active swipe session");

    let response = AxumTestRequest::post("/api/swipe/action")
        .json(&json!({ "action": "like" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);

    let response = AxumTestRequest::post("/api/swipe/undo").send(app).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_start_session_with_default_filters() {
    let (app, _) = test_app();

    let body = start(&app, None).await;
    assert_eq!(body["deckSize"], 5);
    assert_eq!(body["filters"]["maxCookTime"], 60);
    assert_eq!(body["state"]["remaining"], 5);
    assert_eq!(body["state"]["finished"], false);
    assert!(body["state"]["currentCard"]["id"].is_string());

    let state: Value = AxumTestRequest::get("/api/swipe/session")
        .send(app)
        .await
        .json();
    assert_eq!(state["sessionId"], body["state"]["sessionId"]);
}

#[tokio::test]
async fn test_start_session_with_filters() {
    let (app, _) = test_app();

    let body = start(&app, Some(json!({ "maxCookTime": 15 }))).await;
    assert_eq!(body["deckSize"], 3);

    let body = start(
        &app,
        Some(json!({ "cuisine": "", "difficulty": "", "mealType": "" })),
    )
    .await;
    assert_eq!(body["deckSize"], 5);

    let body = start(&app, Some(json!({ "mealType": "breakfast" }))).await;
    assert_eq!(body["deckSize"], 1);
    assert_eq!(body["state"]["currentCard"]["id"], "4");
}

// ============================================================================
// Swiping
// ============================================================================

#[tokio::test]
async fn test_like_adds_to_favorites() {
    let (app, resources) = test_app();
    let session = start(&app, None).await;
    let first = session["state"]["currentCard"]["id"].clone();

    let body = swipe(&app, json!({ "action": "like" })).await;
    assert_eq!(body["action"], "like");
    assert_eq!(body["swiped"]["id"], first);
    assert_eq!(body["addedToFavorites"], true);
    assert_eq!(body["state"]["remaining"], 4);
    assert_eq!(body["state"]["liked"], json!([first]));

    let favorites: Value = AxumTestRequest::get("/api/favorites").send(app).await.json();
    assert_eq!(favorites["favorites"][0]["id"], first);
    assert!(resources
        .store
        .read()
        .await
        .is_favorite(first.as_str().unwrap()));
}

#[tokio::test]
async fn test_gestures_are_classified() {
    let (app, resources) = test_app();
    start(&app, None).await;

    let body = swipe(&app, json!({ "dx": -150.0, "dy": 0.0 })).await;
    assert_eq!(body["action"], "dislike");
    assert_eq!(body["addedToFavorites"], false);

    let body = swipe(&app, json!({ "dx": 20.0, "dy": -200.0 })).await;
    assert_eq!(body["action"], "superlike");
    assert_eq!(body["addedToFavorites"], true);
    assert_eq!(body["state"]["superLiked"].as_array().unwrap().len(), 1);

    assert_eq!(resources.store.read().await.favorites().len(), 1);
}

#[tokio::test]
async fn test_short_drag_snaps_back() {
    let (app, _) = test_app();
    start(&app, None).await;

    let body = swipe(&app, json!({ "dx": 40.0, "dy": -20.0 })).await;
    assert_eq!(body["action"], Value::Null);
    assert_eq!(body["swiped"], Value::Null);
    assert_eq!(body["state"]["remaining"], 5);
}

#[tokio::test]
async fn test_liking_an_existing_favorite_reports_no_addition() {
    let (app, _) = test_app();
    start(&app, Some(json!({ "cuisine": "Thai" }))).await;

    AxumTestRequest::post("/api/favorites")
        .json(&json!({ "recipe_id": "5" }))
        .send(app.clone())
        .await;

    let body = swipe(&app, json!({ "action": "like" })).await;
    assert_eq!(body["swiped"]["id"], "5");
    assert_eq!(body["addedToFavorites"], false);
}

#[tokio::test]
async fn test_swiping_past_the_end() {
    let (app, _) = test_app();
    start(&app, Some(json!({ "cuisine": "Thai" }))).await;

    let body = swipe(&app, json!({ "action": "dislike" })).await;
    assert_eq!(body["state"]["finished"], true);
    assert_eq!(body["state"]["currentCard"], Value::Null);

    let body = swipe(&app, json!({ "action": "like" })).await;
    assert_eq!(body["swiped"], Value::Null);
    assert_eq!(body["addedToFavorites"], false);
}

// ============================================================================
// Undo
// ============================================================================

#[tokio::test]
async fn test_undo_restores_card_and_keeps_favorites() {
    let (app, resources) = test_app();
    start(&app, None).await;

    let liked = swipe(&app, json!({ "action": "like" })).await["swiped"]["id"].clone();

    let response = AxumTestRequest::post("/api/swipe/undo")
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["undone"]["recipeId"], liked);
    assert_eq!(body["undone"]["action"], "like");
    assert_eq!(body["state"]["currentCard"]["id"], liked);
    assert_eq!(body["state"]["remaining"], 5);

    assert!(resources
        .store
        .read()
        .await
        .is_favorite(liked.as_str().unwrap()));

    let body: Value = AxumTestRequest::post("/api/swipe/undo").send(app).await.json();
    assert_eq!(body["undone"], Value::Null);
}
