// ABOUTME: Sign-in routes: authorization URL, OAuth callback, and the token exchange function
// ABOUTME: Answers with mock credentials when no OAuth provider is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Authentication routes
//!
//! `GET /api/auth/gitlab/url` hands the browser a provider authorization URL.
//! `POST /api/auth/callback` completes sign-in for the UI, and
//! `POST /api/auth/token` is the standalone code-for-token exchange. Only
//! POST is accepted on the token route; other methods get 405.

use crate::constants::oauth::{MOCK_ACCESS_TOKEN, MOCK_AUTH_URL, MOCK_TOKEN_TYPE};
use crate::errors::{AppError, ErrorCode};
use crate::oauth2_client::{generate_state, OAuth2Client, OAuth2Token, OAuthClientError, PkceParams};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Response for GET /api/auth/gitlab/url
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthUrlResponse {
    /// Where the browser should be sent
    pub url: String,
    /// `state` embedded in the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// PKCE verifier to send back with the code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<String>,
}

/// Body of the callback and token exchange requests
#[derive(Debug, Default, Deserialize)]
pub struct CodeExchangeRequest {
    /// Authorization code returned by the provider
    #[serde(default)]
    pub code: Option<String>,
    /// `state` echoed by the provider
    #[serde(default)]
    pub state: Option<String>,
    /// PKCE verifier handed out with the authorization URL
    #[serde(default)]
    pub code_verifier: Option<String>,
}

/// Signed-in user profile returned in mock mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Handle
    pub username: String,
    /// Email address
    pub email: String,
    /// Avatar image URL
    pub avatar_url: String,
}

impl AuthUser {
    fn mock() -> Self {
        Self {
            id: "mock-user-123".to_owned(),
            name: "Mock User".to_owned(),
            username: "mockuser".to_owned(),
            email: "mock@example.com".to_owned(),
            avatar_url: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?w=100"
                .to_owned(),
        }
    }
}

/// Response for POST /api/auth/callback
#[derive(Debug, Serialize, Deserialize)]
pub struct CallbackResponse {
    /// Access token
    pub access_token: String,
    /// Token type
    pub token_type: String,
    /// Token lifetime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Signed-in user, only known in mock mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// Authentication routes implementation
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/gitlab/url", get(Self::handle_authorization_url))
            .route("/api/auth/callback", post(Self::handle_callback))
            .route(
                "/api/auth/token",
                post(Self::handle_token).fallback(Self::handle_method_not_allowed),
            )
            .with_state(resources)
    }

    /// Handle GET /api/auth/gitlab/url
    async fn handle_authorization_url(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let Some(client) = resources.oauth_client.as_deref() else {
            let response = AuthUrlResponse {
                url: MOCK_AUTH_URL.to_owned(),
                state: None,
                code_verifier: None,
            };
            return Ok((StatusCode::OK, Json(response)).into_response());
        };

        let state = generate_state();
        let pkce = PkceParams::generate();
        let url = client
            .get_authorization_url_with_pkce(&state, &pkce)
            .map_err(|e| AppError::config(e.to_string()).with_source(e))?;

        let response = AuthUrlResponse {
            url,
            state: Some(state),
            code_verifier: client.config().use_pkce.then_some(pkce.code_verifier),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/auth/callback
    async fn handle_callback(
        State(resources): State<Arc<ServerResources>>,
        payload: Option<Json<CodeExchangeRequest>>,
    ) -> Result<Response, AppError> {
        let request = payload.map(|Json(body)| body).unwrap_or_default();
        let code = Self::require_code(&request)?;

        let response = match resources.oauth_client.as_deref() {
            None => CallbackResponse {
                access_token: MOCK_ACCESS_TOKEN.to_owned(),
                token_type: MOCK_TOKEN_TYPE.to_owned(),
                expires_in: None,
                user: Some(AuthUser::mock()),
            },
            Some(client) => {
                let token = Self::exchange(client, code, &request).await?;
                CallbackResponse {
                    access_token: token.access_token,
                    token_type: token.token_type,
                    expires_in: token.expires_in,
                    user: None,
                }
            }
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/auth/token
    async fn handle_token(
        State(resources): State<Arc<ServerResources>>,
        payload: Option<Json<CodeExchangeRequest>>,
    ) -> Result<Response, AppError> {
        let request = payload.map(|Json(body)| body).unwrap_or_default();
        let code = Self::require_code(&request)?;

        let client = resources
            .oauth_client
            .as_deref()
            .ok_or_else(|| AppError::config("OAuth provider is not configured"))?;

        let token = Self::exchange(client, code, &request).await?;
        Ok((StatusCode::OK, Json(token)).into_response())
    }

    /// Any method other than POST on the token route
    async fn handle_method_not_allowed() -> AppError {
        AppError::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }

    fn require_code(request: &CodeExchangeRequest) -> Result<&str, AppError> {
        request
            .code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| AppError::missing_field("Authorization code is required"))
    }

    async fn exchange(
        client: &OAuth2Client,
        code: &str,
        request: &CodeExchangeRequest,
    ) -> Result<OAuth2Token, AppError> {
        match client
            .exchange_code(code, request.code_verifier.as_deref())
            .await
        {
            Ok(token) => {
                info!(has_state = request.state.is_some(), "OAuth code exchanged");
                Ok(token)
            }
            Err(OAuthClientError::Rejected { body, .. }) => {
                Err(AppError::external_auth("Failed to exchange code for token")
                    .with_details(Value::String(body)))
            }
            Err(e) => {
                error!(error = %e, "OAuth code exchange failed");
                Err(AppError::internal("Internal server error")
                    .with_details(Value::String(e.to_string()))
                    .with_source(e))
            }
        }
    }
}
