// ABOUTME: OAuth 2.0 client for signing users in with an external identity provider
// ABOUTME: Builds authorization URLs and exchanges authorization codes for access tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! # OAuth 2.0 Client Module
//!
//! The planner acts as an OAuth 2.0 client of the sign-in provider (GitLab by
//! default). This module handles:
//! - Authorization URL construction with `state` and optional PKCE
//! - Authorization-code to access-token exchange
//!
//! Provider rejections keep the provider's response body so the HTTP layer
//! can return it as error details.

/// Core OAuth 2.0 client implementation
pub mod client;

pub use client::{
    generate_state, OAuth2Client, OAuth2Config, OAuth2Token, OAuthClientError, PkceParams,
};
