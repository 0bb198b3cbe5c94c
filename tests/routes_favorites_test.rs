// ABOUTME: HTTP integration tests for favorites routes
// ABOUTME: Covers listing, idempotent adds, unknown recipes, and removal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_favorites_start_empty() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/favorites").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["favorites"], json!([]));
}

#[tokio::test]
async fn test_add_favorite_is_idempotent() {
    let (app, resources) = test_app();

    let body: Value = AxumTestRequest::post("/api/favorites")
        .json(&json!({ "recipe_id": "3" }))
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["is_favorite"], true);
    assert_eq!(body["updated"], true);

    let body: Value = AxumTestRequest::post("/api/favorites")
        .json(&json!({ "recipe_id": "3" }))
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["is_favorite"], true);
    assert_eq!(body["updated"], false);

    let body: Value = AxumTestRequest::get("/api/favorites").send(app).await.json();
    let favorites = body["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["title"], "Mediterranean Quinoa Salad");

    assert!(resources.store.read().await.is_favorite("3"));
}

#[tokio::test]
async fn test_add_unknown_recipe_is_404() {
    let (app, resources) = test_app();

    let response = AxumTestRequest::post("/api/favorites")
        .json(&json!({ "recipe_id": "999" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 404);
    assert!(resources.store.read().await.favorites().is_empty());
}

#[tokio::test]
async fn test_remove_favorite() {
    let (app, _) = test_app();

    AxumTestRequest::post("/api/favorites")
        .json(&json!({ "recipe_id": "5" }))
        .send(app.clone())
        .await;

    let body: Value = AxumTestRequest::delete("/api/favorites/5")
        .send(app.clone())
        .await
        .json();
    assert_eq!(body["recipe_id"], "5");
    assert_eq!(body["is_favorite"], false);
    assert_eq!(body["updated"], true);

    let response = AxumTestRequest::delete("/api/favorites/5")
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["updated"], false);
}

#[tokio::test]
async fn test_favorites_keep_insertion_order() {
    let (app, _) = test_app();

    for id in ["4", "1", "2"] {
        AxumTestRequest::post("/api/favorites")
            .json(&json!({ "recipe_id": id }))
            .send(app.clone())
            .await;
    }

    let body: Value = AxumTestRequest::get("/api/favorites").send(app).await.json();
    let ids: Vec<&str> = body["favorites"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "1", "2"]);
}
