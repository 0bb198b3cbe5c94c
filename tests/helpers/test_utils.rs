// ABOUTME: Shared fixtures for integration tests
// ABOUTME: In-memory stores, seeded server resources, and a local HTTP stub server

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use axum::Router;
use recipe_planner::{
    catalog::Catalog,
    config::{OAuthProviderConfig, ServerConfig, StorageLocation},
    resources::ServerResources,
    server::build_router,
    storage::{MemoryStore, SharedStore},
    store::RecipeStore,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Fixed seed so shuffles are reproducible
pub const TEST_RNG_SEED: u64 = 42;

/// Empty in-memory key/value store
pub fn memory_store() -> SharedStore {
    Arc::new(MemoryStore::new())
}

/// Store over the seed catalog with empty in-memory persistence
pub fn seed_store() -> RecipeStore {
    RecipeStore::new(Catalog::seed(), memory_store())
}

/// Configuration with in-memory storage and OAuth left unconfigured
pub fn test_config() -> ServerConfig {
    ServerConfig {
        storage: StorageLocation::Memory,
        ..ServerConfig::default()
    }
}

/// Provider settings pointing at a stub token endpoint
pub fn oauth_config(token_url: &str) -> OAuthProviderConfig {
    OAuthProviderConfig {
        client_id: Some("test-client".to_owned()),
        client_secret: Some("test-secret".to_owned()),
        redirect_uri: Some("http://localhost:5173/auth/callback".to_owned()),
        token_url: token_url.to_owned(),
        ..OAuthProviderConfig::default()
    }
}

/// Resources over the seed catalog in mock auth mode
pub fn test_resources() -> Arc<ServerResources> {
    ServerResources::new(seed_store(), test_config())
        .with_rng_seed(TEST_RNG_SEED)
        .into_shared()
}

/// Resources with OAuth configured against `token_url`
pub fn oauth_resources(token_url: &str) -> Arc<ServerResources> {
    let config = ServerConfig {
        gitlab: oauth_config(token_url),
        ..test_config()
    };
    ServerResources::new(seed_store(), config)
        .with_rng_seed(TEST_RNG_SEED)
        .into_shared()
}

/// Full application router over fresh test resources
pub fn test_app() -> (Router, Arc<ServerResources>) {
    let resources = test_resources();
    (build_router(&resources), resources)
}

/// Serve `router` on an ephemeral local port
pub async fn spawn_stub_server(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
