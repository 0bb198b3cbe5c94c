// ABOUTME: HTTP integration tests for catalog, recommendation, generated meal plan, and rating routes
// ABOUTME: Drives the full application router over the seed catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::test_app;
use serde_json::{json, Value};
use std::collections::HashSet;

fn recipe_ids(body: &Value, field: &str) -> Vec<String> {
    body[field]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_owned())
        .collect()
}

// ============================================================================
// GET /api/recipes
// ============================================================================

#[tokio::test]
async fn test_list_recipes_without_filters() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/recipes").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(recipe_ids(&body, "recipes"), vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_list_recipes_by_query() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::get("/api/recipes?q=chicken")
        .send(app)
        .await
        .json();
    assert_eq!(recipe_ids(&body, "recipes"), vec!["2", "5"]);
}

#[tokio::test]
async fn test_list_recipes_by_cook_time() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::get("/api/recipes?maxCookTime=15")
        .send(app)
        .await
        .json();
    assert_eq!(recipe_ids(&body, "recipes"), vec!["1", "3", "4"]);
}

#[tokio::test]
async fn test_list_recipes_with_comma_separated_facets() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::get("/api/recipes?cuisine=Italian,Thai&difficulty=medium")
        .send(app.clone())
        .await
        .json();
    assert_eq!(recipe_ids(&body, "recipes"), vec!["1", "5"]);

    let body: Value = AxumTestRequest::get("/api/recipes?mealType=breakfast,lunch")
        .send(app.clone())
        .await
        .json();
    assert_eq!(recipe_ids(&body, "recipes"), vec!["3", "4"]);

    let body: Value = AxumTestRequest::get("/api/recipes?dietaryRestrictions=Dairy-Free")
        .send(app)
        .await
        .json();
    assert_eq!(recipe_ids(&body, "recipes"), vec!["5"]);
}

#[tokio::test]
async fn test_list_recipes_rejects_unknown_difficulty() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/recipes?difficulty=Impossible")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid difficulty: Impossible");
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_list_recipes_rejects_unknown_meal_type() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/recipes?mealType=Brunch")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid meal type: Brunch");
}

#[tokio::test]
async fn test_listing_does_not_change_store_filters() {
    let (app, resources) = test_app();

    AxumTestRequest::get("/api/recipes?q=chicken").send(app).await;

    let store = resources.store.read().await;
    assert!(store.search_filters().is_empty());
    assert_eq!(store.filtered_recipes().len(), 5);
}

// ============================================================================
// GET /api/recipes/:id
// ============================================================================

#[tokio::test]
async fn test_get_recipe_by_id() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/recipes/2").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["recipe"]["title"], "Chicken Teriyaki Bowl");
    assert_eq!(body["recipe"]["cookTime"], 20);
    assert_eq!(body["recipe"]["mealType"], "Dinner");
}

#[tokio::test]
async fn test_get_unknown_recipe_is_404() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/recipes/999").send(app).await;
    assert_eq!(response.status(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"], "Recipe not found");
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

// ============================================================================
// POST /api/recommend
// ============================================================================

#[tokio::test]
async fn test_recommend_without_body() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/api/recommend").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    let ids = recipe_ids(&body, "recipes");
    assert_eq!(ids.len(), 3);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);
    assert_eq!(body["message"], "Recommendations based on your preferences");
}

#[tokio::test]
async fn test_recommend_with_query() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::post("/api/recommend")
        .json(&json!({ "query": "chicken" }))
        .send(app)
        .await
        .json();

    let ids: HashSet<String> = recipe_ids(&body, "recipes").into_iter().collect();
    assert_eq!(ids, HashSet::from(["2".to_owned(), "5".to_owned()]));
}

// ============================================================================
// POST /api/meal-plan
// ============================================================================

#[tokio::test]
async fn test_generate_meal_plan_for_whole_catalog() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/api/meal-plan")
        .json(&json!({}))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["calorie_target"], 2000);

    let days = body["meal_plan"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Monday");
    assert_eq!(days[6]["day"], "Sunday");

    for day in days {
        assert_eq!(day["meals"]["breakfast"]["id"], "4");
        assert_eq!(day["meals"]["lunch"]["id"], "3");
        assert_eq!(day["meals"]["dinner"]["id"], "1");
        assert_eq!(day["total_calories"], 925);
    }
}

#[tokio::test]
async fn test_generate_meal_plan_echoes_calorie_target() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::post("/api/meal-plan")
        .json(&json!({ "calorie_target": 1800 }))
        .send(app)
        .await
        .json();
    assert_eq!(body["calorie_target"], 1800);
}

#[tokio::test]
async fn test_generate_meal_plan_leaves_unmatched_slots_empty() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::post("/api/meal-plan")
        .json(&json!({ "query": "chicken" }))
        .send(app)
        .await
        .json();

    let monday = &body["meal_plan"][0];
    assert!(monday["meals"].get("breakfast").is_none());
    assert!(monday["meals"].get("lunch").is_none());
    assert_eq!(monday["meals"]["dinner"]["id"], "2");
    assert_eq!(monday["total_calories"], 420);
}

#[tokio::test]
async fn test_generate_meal_plan_unmatched_query_uses_catalog() {
    let (app, _) = test_app();

    let body: Value = AxumTestRequest::post("/api/meal-plan")
        .json(&json!({ "query": "sushi" }))
        .send(app)
        .await
        .json();
    assert_eq!(body["meal_plan"][3]["total_calories"], 925);
}

// ============================================================================
// POST /api/rate
// ============================================================================

#[tokio::test]
async fn test_rate_recipe() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/api/rate")
        .json(&json!({ "recipe_id": "1", "rating": 5, "feedback": "Great crust" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["message"], "Rating submitted successfully");
}

#[tokio::test]
async fn test_rate_out_of_range() {
    let (app, _) = test_app();

    for rating in [0, 6, -1] {
        let response = AxumTestRequest::post("/api/rate")
            .json(&json!({ "recipe_id": "1", "rating": rating }))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 400, "rating {rating}");
        let body: Value = response.json();
        assert_eq!(body["code"], "VALUE_OUT_OF_RANGE");
    }
}

#[tokio::test]
async fn test_rate_unknown_recipe() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/api/rate")
        .json(&json!({ "recipe_id": "999", "rating": 3 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);

    // Range is checked before the recipe exists
    let response = AxumTestRequest::post("/api/rate")
        .json(&json!({ "recipe_id": "999", "rating": 9 }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

// ============================================================================
// Fallback
// ============================================================================

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/nothing-here").send(app).await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Not found");
}
