// ABOUTME: HTTP integration tests for sign-in routes in mock and configured provider modes
// ABOUTME: Configured mode exchanges codes against a local stub token endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::{http::StatusCode, response::IntoResponse, routing::post, Form, Json, Router};
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{oauth_resources, spawn_stub_server, test_app};
use recipe_planner::{
    constants::oauth::{GITLAB_AUTH_URL, MOCK_ACCESS_TOKEN, MOCK_AUTH_URL},
    server::build_router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;
use url::Url;

/// Stub provider: code "bad" is rejected, anything else yields a token
/// that echoes the code and PKCE verifier it was sent
async fn stub_token(Form(params): Form<HashMap<String, String>>) -> impl IntoResponse {
    let code = params.get("code").cloned().unwrap_or_default();
    if code == "bad" {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant"}"#.to_owned(),
        )
            .into_response();
    }
    let verifier = params
        .get("code_verifier")
        .cloned()
        .unwrap_or_else(|| "none".to_owned());
    Json(json!({
        "access_token": format!("{code}:{verifier}"),
        "token_type": "Bearer",
        "expires_in": 7200,
        "scope": "read_user",
    }))
    .into_response()
}

async fn configured_app() -> Router {
    let addr = spawn_stub_server(Router::new().route("/oauth/token", post(stub_token))).await;
    let resources = oauth_resources(&format!("http://{addr}/oauth/token"));
    build_router(&resources)
}

// ============================================================================
// Mock Mode
// ============================================================================

#[tokio::test]
async fn test_mock_authorization_url() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/auth/gitlab/url").send(app).await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["url"], MOCK_AUTH_URL);
    assert!(body.get("state").is_none());
}

#[tokio::test]
async fn test_mock_callback_returns_mock_user() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/api/auth/callback")
        .json(&json!({ "code": "anything" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["access_token"], MOCK_ACCESS_TOKEN);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "mockuser");
}

#[tokio::test]
async fn test_callback_requires_code() {
    let (app, _) = test_app();

    for request in [
        AxumTestRequest::post("/api/auth/callback"),
        AxumTestRequest::post("/api/auth/callback").json(&json!({})),
        AxumTestRequest::post("/api/auth/callback").json(&json!({ "code": "  " })),
    ] {
        let response = request.send(app.clone()).await;
        assert_eq!(response.status(), 400);
        let body: Value = response.json();
        assert_eq!(body["error"], "Authorization code is required");
    }
}

#[tokio::test]
async fn test_token_route_only_accepts_post() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/auth/token").send(app).await;
    assert_eq!(response.status(), 405);
    let body: Value = response.json();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_token_exchange_without_provider_is_500() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/api/auth/token")
        .json(&json!({ "code": "abc" }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"], "OAuth provider is not configured");

    // Missing code is reported before configuration
    let response = AxumTestRequest::post("/api/auth/token").send(app).await;
    assert_eq!(response.status(), 400);
}

// ============================================================================
// Configured Provider
// ============================================================================

#[tokio::test]
async fn test_authorization_url_carries_pkce_and_state() {
    let app = configured_app().await;

    let body: Value = AxumTestRequest::get("/api/auth/gitlab/url")
        .send(app)
        .await
        .json();

    let url = Url::parse(body["url"].as_str().unwrap()).unwrap();
    assert!(url.as_str().starts_with(GITLAB_AUTH_URL));

    let query: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(query["client_id"], "test-client");
    assert_eq!(query["response_type"], "code");
    assert_eq!(query["code_challenge_method"], "S256");
    assert_eq!(query["state"], body["state"].as_str().unwrap());
    assert_eq!(body["code_verifier"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_token_exchange_success() {
    let app = configured_app().await;

    let response = AxumTestRequest::post("/api/auth/token")
        .json(&json!({ "code": "good", "code_verifier": "v".repeat(64) }))
        .send(app)
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["access_token"], format!("good:{}", "v".repeat(64)));
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 7200);
}

#[tokio::test]
async fn test_callback_exchanges_code_with_provider() {
    let app = configured_app().await;

    let body: Value = AxumTestRequest::post("/api/auth/callback")
        .json(&json!({ "code": "xyz", "state": "s" }))
        .send(app)
        .await
        .json();
    assert_eq!(body["access_token"], "xyz:none");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn test_rejected_exchange_is_400_with_provider_body() {
    let app = configured_app().await;

    let response = AxumTestRequest::post("/api/auth/token")
        .json(&json!({ "code": "bad" }))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to exchange code for token");
    assert_eq!(body["code"], "EXTERNAL_AUTH_FAILED");
    assert_eq!(body["details"], r#"{"error":"invalid_grant"}"#);
}

#[tokio::test]
async fn test_unreachable_provider_is_500() {
    // Bind and drop to find a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resources = oauth_resources(&format!("http://{addr}/oauth/token"));
    let response = AxumTestRequest::post("/api/auth/token")
        .json(&json!({ "code": "abc" }))
        .send(build_router(&resources))
        .await;
    assert_eq!(response.status(), 500);

    let body: Value = response.json();
    assert_eq!(body["error"], "Internal server error");
    assert!(body["details"].is_string());
}
