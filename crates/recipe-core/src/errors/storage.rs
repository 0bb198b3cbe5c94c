// ABOUTME: Error types for the durable key/value storage backing favorites and meal plans
// ABOUTME: Distinguishes I/O failures from serialization failures for logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

use std::io;
use thiserror::Error;

/// Errors raised by durable storage backends.
///
/// These are logged and swallowed by the stores that own the data; they are
/// never surfaced to API clients as a failed mutation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// Storage key being accessed
        key: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The stored value could not be (de)serialized
    #[error("storage serialization failed for key '{key}': {source}")]
    Serialization {
        /// Storage key being accessed
        key: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// The backend cannot be used at all (e.g. lock poisoned, directory missing)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Key associated with this error, when there is one
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Io { key, .. } | Self::Serialization { key, .. } => Some(key),
            Self::Unavailable(_) => None,
        }
    }
}
