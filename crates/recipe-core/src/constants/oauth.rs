// ABOUTME: OAuth-related constants for the GitLab sign-in integration
// ABOUTME: Default provider endpoints, mock-mode responses, and state length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

/// Provider name used in logs
pub const GITLAB: &str = "gitlab";

/// Default GitLab authorization endpoint
pub const GITLAB_AUTH_URL: &str = "https://gitlab.com/oauth/authorize";

/// Default GitLab token endpoint
pub const GITLAB_TOKEN_URL: &str = "https://gitlab.com/oauth/token";

/// Default scopes requested from GitLab
pub const GITLAB_DEFAULT_SCOPES: &[&str] = &["read_user"];

/// OAuth state parameter length
pub const STATE_LENGTH: usize = 32;

/// Authorization URL handed out when no provider is configured
pub const MOCK_AUTH_URL: &str = "http://localhost:5173?mock_auth=true";

/// Access token issued in mock mode
pub const MOCK_ACCESS_TOKEN: &str = "mock-token-123";

/// Token type issued in mock mode
pub const MOCK_TOKEN_TYPE: &str = "bearer";
