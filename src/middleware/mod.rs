// ABOUTME: HTTP middleware configuration shared by the server router
// ABOUTME: Cross-origin policy for the browser client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
