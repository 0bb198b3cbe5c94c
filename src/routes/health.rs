// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness with the current timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route("/api/health", get(Self::handle_health))
    }

    /// Handle GET /api/health
    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
