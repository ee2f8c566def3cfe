// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Never-failing document store

use crate::backend::KeyValueBackend;
use crate::memory::MemoryBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Key/value store for one document.
///
/// Every operation swallows backend errors after logging them: reads return
/// `None`, writes and deletes silently do nothing. Callers treat persisted
/// state as an optimisation for resumption, never as a source of failure.
#[derive(Clone)]
pub struct ProgressStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl ProgressStore {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Store backed by a fresh in-memory map
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed, treating as absent");
                None
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            tracing::warn!(key, error = %e, "store write failed, skipping");
        }
    }

    pub fn delete(&self, key: &str) {
        if let Err(e) = self.backend.delete(key) {
            tracing::warn!(key, error = %e, "store delete failed, skipping");
        }
    }

    pub fn keys(&self) -> Vec<String> {
        match self.backend.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "store listing failed");
                Vec::new()
            }
        }
    }

    /// Read and decode a JSON value; undecodable data is treated as absent
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring undecodable value");
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set(key, &json),
            Err(e) => tracing::warn!(key, error = %e, "failed to encode value, skipping"),
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
