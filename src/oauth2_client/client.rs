// ABOUTME: OAuth2 client implementation for the sign-in provider
// ABOUTME: Authorization URL building, PKCE parameters, state generation, and code exchange
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use crate::config::OAuthProviderConfig;
use crate::constants::oauth::STATE_LENGTH;
use crate::utils::http_client::oauth_client;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};
use url::{ParseError, Url};

/// PKCE code verifier length (RFC 7636 allows 43-128)
const CODE_VERIFIER_LENGTH: usize = 64;

/// Errors raised by the OAuth client
#[derive(Debug, Error)]
pub enum OAuthClientError {
    /// The configured authorization endpoint is not a valid URL
    #[error("invalid authorization URL: {0}")]
    InvalidAuthUrl(#[from] ParseError),

    /// The token endpoint could not be reached
    #[error("token request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("provider rejected the code exchange with status {status}")]
    Rejected {
        /// HTTP status returned by the provider
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The provider answered 2xx with a body that is not a token response
    #[error("invalid token response: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

/// OAuth 2.0 client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    /// OAuth client ID from provider
    pub client_id: String,
    /// OAuth client secret from provider
    pub client_secret: String,
    /// Authorization endpoint URL
    pub auth_url: String,
    /// Token endpoint URL
    pub token_url: String,
    /// Redirect URI for OAuth callbacks
    pub redirect_uri: String,
    /// OAuth scopes to request
    pub scopes: Vec<String>,
    /// Whether to use PKCE
    pub use_pkce: bool,
}

impl OAuth2Config {
    /// Build a client configuration from provider settings
    ///
    /// Returns `None` unless id, secret and redirect URI are all present.
    #[must_use]
    pub fn from_provider(provider: &OAuthProviderConfig) -> Option<Self> {
        Some(Self {
            client_id: provider.client_id.clone()?,
            client_secret: provider.client_secret.clone()?,
            redirect_uri: provider.redirect_uri.clone()?,
            auth_url: provider.auth_url.clone(),
            token_url: provider.token_url.clone(),
            scopes: provider.scopes.clone(),
            use_pkce: true,
        })
    }
}

/// `PKCE` (Proof Key for Code Exchange) parameters
#[derive(Debug, Clone)]
pub struct PkceParams {
    /// Randomly generated code verifier
    pub code_verifier: String,
    /// SHA256 hash of code verifier, base64url encoded
    pub code_challenge: String,
    /// Challenge method (always "S256")
    pub code_challenge_method: String,
}

impl PkceParams {
    /// Generate `PKCE` parameters with the `S256` challenge method
    #[must_use]
    pub fn generate() -> Self {
        const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
        let mut rng = rand::thread_rng();
        let code_verifier: String = (0..CODE_VERIFIER_LENGTH)
            .map(|_| char::from(CHARS[rng.gen_range(0..CHARS.len())]))
            .collect();
        Self::from_verifier(code_verifier)
    }

    /// Derive the `S256` challenge for a known verifier
    #[must_use]
    pub fn from_verifier(code_verifier: String) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(code_verifier.as_bytes());
        let code_challenge = URL_SAFE_NO_PAD.encode(hasher.finalize());

        Self {
            code_verifier,
            code_challenge,
            code_challenge_method: "S256".into(),
        }
    }
}

/// Random alphanumeric value for the OAuth `state` parameter
#[must_use]
pub fn generate_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Access token returned to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Token {
    /// The access token string
    pub access_token: String,
    /// Token type (usually "bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: Option<u64>,
}

/// OAuth 2.0 client for the sign-in provider
pub struct OAuth2Client {
    config: OAuth2Config,
    client: reqwest::Client,
}

impl OAuth2Client {
    /// Create a new `OAuth2` client with the given configuration
    #[must_use]
    pub fn new(config: OAuth2Config) -> Self {
        Self {
            config,
            client: oauth_client(),
        }
    }

    /// Get the `OAuth2` configuration
    #[must_use]
    pub const fn config(&self) -> &OAuth2Config {
        &self.config
    }

    /// Get authorization URL
    ///
    /// # Errors
    ///
    /// Returns an error if the authorization URL is malformed
    pub fn get_authorization_url(&self, state: &str) -> Result<String, OAuthClientError> {
        self.build_authorization_url(state, None)
    }

    /// Get authorization `URL` with `PKCE` support
    ///
    /// The challenge is only attached when the configuration enables PKCE.
    ///
    /// # Errors
    ///
    /// Returns an error if the authorization URL is malformed
    pub fn get_authorization_url_with_pkce(
        &self,
        state: &str,
        pkce: &PkceParams,
    ) -> Result<String, OAuthClientError> {
        self.build_authorization_url(state, Some(pkce))
    }

    fn build_authorization_url(
        &self,
        state: &str,
        pkce: Option<&PkceParams>,
    ) -> Result<String, OAuthClientError> {
        let mut url = Url::parse(&self.config.auth_url)?;

        let mut query_pairs = url.query_pairs_mut();
        query_pairs
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.config.scopes.join(" "))
            .append_pair("state", state);

        if let Some(pkce) = pkce.filter(|_| self.config.use_pkce) {
            query_pairs
                .append_pair("code_challenge", &pkce.code_challenge)
                .append_pair("code_challenge_method", &pkce.code_challenge_method);
        }

        drop(query_pairs);
        Ok(url.to_string())
    }

    /// Exchange an authorization code for an access token
    ///
    /// `code_verifier` is sent when present and PKCE is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthClientError::Rejected`] with the provider's body when
    /// the provider answers with a non-success status, and a request or
    /// decode error otherwise
    pub async fn exchange_code(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<OAuth2Token, OAuthClientError> {
        let mut params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        if let Some(verifier) = code_verifier.filter(|_| self.config.use_pkce) {
            params.push(("code_verifier", verifier));
        }

        debug!(token_url = %self.config.token_url, "Exchanging authorization code");
        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await
            .map_err(OAuthClientError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "OAuth provider rejected code exchange");
            return Err(OAuthClientError::Rejected { status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(OAuthClientError::InvalidResponse)?;

        Ok(OAuth2Token {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        })
    }
}

/// OAuth 2.0 token response from provider
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: Option<u64>,
}
