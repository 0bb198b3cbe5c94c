// ABOUTME: HTTP client construction with per-purpose timeout configuration
// ABOUTME: Clients for the remote catalog fetch and the OAuth token exchange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::constants::timeouts;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Connection timeout shared by all clients
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Create a new HTTP client with a request timeout
///
/// The connection timeout never exceeds the request timeout. Falls back to a
/// default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout: Duration) -> Client {
    let connect_timeout = timeout.min(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client for the remote recipe catalog, bounded by the configured fetch timeout
#[must_use]
pub fn catalog_client(timeout: Duration) -> Client {
    create_client_with_timeout(timeout)
}

/// Client for OAuth token exchanges, which should be fast operations
#[must_use]
pub fn oauth_client() -> Client {
    create_client_with_timeout(Duration::from_secs(timeouts::OAUTH_CLIENT_TIMEOUT_SECS))
}
