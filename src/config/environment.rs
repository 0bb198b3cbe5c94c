// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validation and summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Environment-based configuration management

use crate::constants::{oauth, ports, security, storage_keys, timeouts};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn, Level};
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Where favorites and meal plans are persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageLocation {
    /// One `<key>.json` file per record under this directory
    Directory(PathBuf),
    /// Process memory only (lost on exit)
    Memory,
}

impl StorageLocation {
    /// Parse a `RECIPE_STORAGE_DIR` value; `:memory:` selects the in-memory store
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed == storage_keys::IN_MEMORY {
            Self::Memory
        } else {
            Self::Directory(PathBuf::from(trimmed))
        }
    }

    /// Check if this is the in-memory store
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for StorageLocation {
    fn default() -> Self {
        Self::Directory(PathBuf::from("./data"))
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str(storage_keys::IN_MEMORY),
        }
    }
}

/// Remote catalog source settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Remote catalog endpoint; the bundled seed set is used when unset
    pub url: Option<String>,
    /// Client-side timeout for the catalog fetch
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Fetch timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: timeouts::CATALOG_FETCH_TIMEOUT_SECS,
        }
    }
}

/// OAuth provider credentials and endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthProviderConfig {
    /// Application id registered with the provider
    pub client_id: Option<String>,
    /// Application secret
    pub client_secret: Option<String>,
    /// Callback URL registered with the provider
    pub redirect_uri: Option<String>,
    /// Authorization endpoint
    pub auth_url: String,
    /// Token endpoint
    pub token_url: String,
    /// Requested scopes
    pub scopes: Vec<String>,
}

impl OAuthProviderConfig {
    /// Whether id, secret and redirect URI are all present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some() && self.redirect_uri.is_some()
    }

    /// Whether some but not all credentials are present
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.is_configured()
            && (self.client_id.is_some()
                || self.client_secret.is_some()
                || self.redirect_uri.is_some())
    }
}

impl Default for OAuthProviderConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            auth_url: oauth::GITLAB_AUTH_URL.to_owned(),
            token_url: oauth::GITLAB_TOKEN_URL.to_owned(),
            scopes: oauth::GITLAB_DEFAULT_SCOPES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// HTTP bind address
    pub host: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Persistence location for favorites and meal plans
    pub storage: StorageLocation,
    /// Catalog source
    pub catalog: CatalogConfig,
    /// Origin allowed by CORS
    pub cors_allowed_origin: String,
    /// `GitLab` OAuth settings
    pub gitlab: OAuthProviderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: "0.0.0.0".to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            storage: StorageLocation::default(),
            catalog: CatalogConfig::default(),
            cors_allowed_origin: security::DEFAULT_CORS_ORIGIN.to_owned(),
            gitlab: OAuthProviderConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let defaults = OAuthProviderConfig::default();
        let config = Self {
            http_port: env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            host: env_var_or("HOST", "0.0.0.0"),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            storage: StorageLocation::parse(&env_var_or("RECIPE_STORAGE_DIR", "./data")),
            catalog: CatalogConfig {
                url: optional_env_var("RECIPE_CATALOG_URL"),
                timeout_secs: env_var_or(
                    "RECIPE_CATALOG_TIMEOUT_SECS",
                    &timeouts::CATALOG_FETCH_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid RECIPE_CATALOG_TIMEOUT_SECS value")?,
            },
            cors_allowed_origin: env_var_or("CORS_ALLOWED_ORIGIN", security::DEFAULT_CORS_ORIGIN),
            gitlab: OAuthProviderConfig {
                client_id: optional_env_var("GITLAB_CLIENT_ID"),
                client_secret: optional_env_var("GITLAB_CLIENT_SECRET"),
                redirect_uri: optional_env_var("GITLAB_REDIRECT_URI"),
                auth_url: env_var_or("GITLAB_AUTH_URL", &defaults.auth_url),
                token_url: env_var_or("GITLAB_TOKEN_URL", &defaults.token_url),
                scopes: optional_env_var("GITLAB_SCOPES")
                    .map_or(defaults.scopes, |s| parse_scopes(&s)),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog timeout is zero or the catalog URL is not a URL
    pub fn validate(&self) -> Result<()> {
        if self.catalog.timeout_secs == 0 {
            return Err(anyhow!("RECIPE_CATALOG_TIMEOUT_SECS must be greater than zero"));
        }

        if let Some(url) = &self.catalog.url {
            Url::parse(url).with_context(|| format!("Invalid RECIPE_CATALOG_URL: {url}"))?;
        }

        if self.gitlab.is_partial() {
            warn!(
                "GitLab OAuth is partially configured; GITLAB_CLIENT_ID, GITLAB_CLIENT_SECRET and GITLAB_REDIRECT_URI are all required. Falling back to mock sign-in"
            );
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Planner Configuration:\n\
             - HTTP: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Storage: {}\n\
             - Catalog Source: {}\n\
             - Catalog Timeout: {}s\n\
             - CORS Origin: {}\n\
             - GitLab OAuth: {}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.storage,
            self.catalog.url.as_deref().unwrap_or("bundled seed catalog"),
            self.catalog.timeout_secs,
            self.cors_allowed_origin,
            if self.gitlab.is_configured() {
                "Enabled"
            } else {
                "Mock"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Environment variable that is set and not blank
fn optional_env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse comma- or space-separated scopes
fn parse_scopes(scopes_str: &str) -> Vec<String> {
    scopes_str
        .split([',', ' '])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
