// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Owns the recipe store handle, configuration, OAuth client, and the discovery RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Server resources
//!
//! Built once at startup and shared as `Arc<ServerResources>`. The OAuth
//! client is only present when the provider credentials are fully
//! configured; without it the auth routes answer in mock mode.

use crate::config::ServerConfig;
use crate::oauth2_client::{OAuth2Client, OAuth2Config};
use crate::store::{RecipeStore, SharedRecipeStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Resources shared by all HTTP handlers
pub struct ServerResources {
    /// Application state controller
    pub store: SharedRecipeStore,
    /// Service configuration
    pub config: Arc<ServerConfig>,
    /// Sign-in provider client, absent in mock mode
    pub oauth_client: Option<Arc<OAuth2Client>>,
    /// Randomness for recommendation and swipe shuffles
    pub rng: Mutex<ChaCha8Rng>,
}

impl ServerResources {
    /// Build resources around `store`, creating the OAuth client when configured
    #[must_use]
    pub fn new(store: RecipeStore, config: ServerConfig) -> Self {
        let oauth_client = OAuth2Config::from_provider(&config.gitlab).map(|oauth_config| {
            info!(auth_url = %oauth_config.auth_url, "OAuth sign-in configured");
            Arc::new(OAuth2Client::new(oauth_config))
        });
        if oauth_client.is_none() {
            info!("OAuth sign-in not configured; auth routes run in mock mode");
        }

        Self {
            store: store.into_shared(),
            config: Arc::new(config),
            oauth_client,
            rng: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Replace the shuffle RNG with a seeded one for reproducible runs
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(ChaCha8Rng::seed_from_u64(seed));
        self
    }

    /// Replace the OAuth client
    #[must_use]
    pub fn with_oauth_client(mut self, client: Option<OAuth2Client>) -> Self {
        self.oauth_client = client.map(Arc::new);
        self
    }

    /// Wrap for sharing between routes
    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
