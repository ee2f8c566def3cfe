// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API key providers

use sha2::{Digest, Sha256};

/// Source of the API key for the fitness service
pub trait CredentialProvider: Clone + Send + Sync + 'static {
    /// Current API key, if one is configured
    fn current_api_key(&self) -> Option<String>;
}

/// Reads the key from an environment variable on every call
#[derive(Clone, Debug)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentials {
    fn current_api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Fixed key, for tests and embedding
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials {
    key: Option<String>,
}

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl CredentialProvider for StaticCredentials {
    fn current_api_key(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.trim().is_empty())
    }
}

/// SHA-256 hex digest of an API key. Only the digest is ever persisted.
pub fn fingerprint(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
