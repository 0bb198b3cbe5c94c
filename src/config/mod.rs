// ABOUTME: Configuration module for the recipe planner service
// ABOUTME: Environment-only configuration: server, storage, catalog source, CORS, and OAuth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Configuration management
//!
//! All settings come from environment variables; there is no config file.
//! Binaries may override individual values from command-line flags.

/// Environment variable parsing and the `ServerConfig` aggregate
pub mod environment;

pub use environment::{
    CatalogConfig, Environment, LogLevel, OAuthProviderConfig, ServerConfig, StorageLocation,
};
