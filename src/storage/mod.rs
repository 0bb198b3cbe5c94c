// ABOUTME: Durable key/value storage for favorites and meal plans with pluggable backends
// ABOUTME: File-backed JSON records per key, or process memory for tests and ephemeral runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! Durable storage
//!
//! Each record is one JSON document stored under a named key (`favorites`,
//! `mealPlans`). Writes are best-effort: [`save_json`] logs failures and
//! never propagates them, so in-memory state stays authoritative even when
//! the backing medium is unavailable.
//!
//! Collections go through [`load_records`] and [`save_records`]: elements
//! that do not decode are carried along and written back untouched, and a
//! document that is not an array at all is copied aside before anything
//! overwrites it.

/// One JSON file per key under a directory
pub mod file;
/// Process-local map backend
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::config::environment::StorageLocation;
use crate::errors::StorageError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage backend trait
///
/// Values are opaque JSON strings; typed access goes through [`load_json`]
/// and [`save_json`].
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be modified
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Shared handle to a storage backend
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Open the backend selected by `location`
///
/// # Errors
///
/// Returns an error if the storage directory cannot be created
pub fn open(location: &StorageLocation) -> Result<SharedStore, StorageError> {
    match location {
        StorageLocation::Memory => {
            info!("Using in-memory storage; favorites and meal plans are not persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageLocation::Directory(dir) => {
            let store = JsonFileStore::open(dir)?;
            info!(storage.dir = %dir.display(), "Using file-backed storage");
            Ok(Arc::new(store))
        }
    }
}

/// Read and decode the record under `key`
///
/// # Errors
///
/// Returns an error if the record cannot be read or does not decode as `T`
pub fn try_load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Serialization {
            key: key.to_owned(),
            source,
        })
}

/// Read and decode the record under `key`, treating any failure as absent
///
/// Corrupt or unreadable records are logged and ignored so startup never
/// fails on bad persisted state.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match try_load_json(store, key) {
        Ok(value) => value,
        Err(e) => {
            warn!(storage.key = %key, storage.backend = store.backend_name(), error = %e, "Ignoring unreadable stored record");
            None
        }
    }
}

/// Encode `value` and store it under `key`
///
/// # Errors
///
/// Returns an error if encoding or writing fails
pub fn try_save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialization {
        key: key.to_owned(),
        source,
    })?;
    store.write(key, &raw)
}

/// Encode and store `value`, logging and swallowing any failure
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match try_save_json(store, key, value) {
        Ok(()) => debug!(storage.key = %key, "Persisted record"),
        Err(e) => {
            warn!(storage.key = %key, storage.backend = store.backend_name(), error = %e, "Failed to persist record; keeping in-memory state");
        }
    }
}

/// Suffix of the key a whole unreadable record is copied to
pub const UNREADABLE_SUFFIX: &str = ".unreadable";

/// Elements of a stored JSON array, split by whether they decode
#[derive(Debug)]
pub struct LoadedRecords<T> {
    /// Elements that decoded as `T`, in stored order
    pub records: Vec<T>,
    /// Elements that did not, kept verbatim
    pub unreadable: Vec<Value>,
}

impl<T> Default for LoadedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            unreadable: Vec::new(),
        }
    }
}

/// Read the JSON array under `key`, decoding each element on its own
///
/// An element that fails to decode is logged and returned in
/// [`LoadedRecords::unreadable`]. If the document is not a JSON array, its
/// raw text is copied to `<key>.unreadable` and no records are returned.
pub fn load_records<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> LoadedRecords<T> {
    let values: Vec<Value> = match try_load_json(store, key) {
        Ok(values) => values.unwrap_or_default(),
        Err(e) => {
            warn!(storage.key = %key, storage.backend = store.backend_name(), error = %e, "Stored record is unreadable; copying it aside");
            set_aside(store, key);
            return LoadedRecords::default();
        }
    };

    let mut loaded = LoadedRecords::default();
    for value in values {
        match T::deserialize(&value) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                warn!(storage.key = %key, record.id = ?record_id(&value), error = %e, "Keeping stored element that failed to decode");
                loaded.unreadable.push(value);
            }
        }
    }
    loaded
}

/// Store `records` followed by the verbatim `unreadable` elements under `key`
///
/// Failures are logged and swallowed like [`save_json`].
pub fn save_records<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    records: &[T],
    unreadable: &[Value],
) {
    if unreadable.is_empty() {
        save_json(store, key, records);
        return;
    }

    let encoded: Result<Vec<Value>, _> = records.iter().map(serde_json::to_value).collect();
    match encoded {
        Ok(mut values) => {
            values.extend_from_slice(unreadable);
            save_json(store, key, &values);
        }
        Err(e) => {
            warn!(storage.key = %key, error = %e, "Failed to encode records; keeping in-memory state");
        }
    }
}

/// The `id` field of a stored element, when it is a string
#[must_use]
pub fn record_id(value: &Value) -> Option<&str> {
    value.get("id").and_then(Value::as_str)
}

fn set_aside(store: &dyn KeyValueStore, key: &str) {
    let backup = format!("{key}{UNREADABLE_SUFFIX}");
    let result = store
        .read(key)
        .and_then(|raw| raw.map_or(Ok(()), |raw| store.write(&backup, &raw)));
    match result {
        Ok(()) => info!(storage.key = %key, storage.backup = %backup, "Copied unreadable record aside"),
        Err(e) => warn!(storage.key = %key, error = %e, "Failed to copy unreadable record aside"),
    }
}
