// ABOUTME: HTTP server assembly and lifecycle for the recipe planner API
// ABOUTME: Merges domain routers, applies CORS, tracing and timeout layers, and serves until a shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! # HTTP Server
//!
//! [`build_router`] produces the complete application router; tests drive it
//! directly with `tower::ServiceExt::oneshot`. [`run`] binds the configured
//! address and serves until Ctrl+C or SIGTERM.

use crate::constants::timeouts::HTTP_REQUEST_TIMEOUT_SECS;
use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{
    AuthRoutes, FavoritesRoutes, HealthRoutes, MealPlanRoutes, RecipeRoutes, SwipeRoutes,
};
use axum::Router;
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the full application router
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthRoutes::routes(Arc::clone(resources)))
        .merge(RecipeRoutes::routes(Arc::clone(resources)))
        .merge(FavoritesRoutes::routes(Arc::clone(resources)))
        .merge(MealPlanRoutes::routes(Arc::clone(resources)))
        .merge(SwipeRoutes::routes(Arc::clone(resources)))
        .fallback(|| async { AppError::not_found("Not found") })
        .layer(TimeoutLayer::new(Duration::from_secs(
            HTTP_REQUEST_TIMEOUT_SECS,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(&resources.config))
}

/// Serve the API until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let address = format!("{}:{}", resources.config.host, resources.config.http_port);
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::config(format!("Failed to bind {address}: {e}")).with_source(e)
    })?;

    let app = build_router(&resources);
    info!(address = %address, "Recipe planner API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
