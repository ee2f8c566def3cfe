// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Importer configuration (`hs.toml`)

use crate::progress::DEFAULT_ACTIVE_TIMEOUT;
use crate::quota::QuotaConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level importer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Name of the document (spreadsheet) whose state is tracked
    pub document: String,
    /// Root directory holding per-document state
    pub state_dir: PathBuf,
    /// How long a run's heartbeat is honoured before another run may take over
    #[serde(with = "humantime_serde")]
    pub active_timeout: Duration,
    pub quota: QuotaConfig,
    pub steps: StepsConfig,
    pub credentials: CredentialsConfig,
    pub notify: NotifyConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            document: "default".to_string(),
            state_dir: PathBuf::from(".hs"),
            active_timeout: DEFAULT_ACTIVE_TIMEOUT,
            quota: QuotaConfig::default(),
            steps: StepsConfig::default(),
            credentials: CredentialsConfig::default(),
            notify: NotifyConfig::default(),
        }
    }
}

/// External commands that perform each step
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepsConfig {
    /// Shell command run once per step; `{step}` expands to the step name
    pub command: Option<String>,
    /// Shell command that confirms a deferred operation; `{operation}` expands to its name
    pub confirm: Option<String>,
    /// Kill a step command that runs longer than this
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

/// Where the API key comes from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Environment variable holding the API key
    pub env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            env: "HEVY_API_KEY".to_string(),
        }
    }
}

/// Operator notification settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Show desktop notifications in addition to log lines
    pub desktop: bool,
}

impl ImportConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.document.trim().is_empty() {
            return Err(ConfigError::Invalid("document must not be empty".into()));
        }
        if self.active_timeout.is_zero() {
            return Err(ConfigError::Invalid("active_timeout must be positive".into()));
        }
        if !(self.quota.warn_ratio > 0.0 && self.quota.warn_ratio <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "quota.warn_ratio must be in (0, 1], got {}",
                self.quota.warn_ratio
            )));
        }
        if self.credentials.env.trim().is_empty() {
            return Err(ConfigError::Invalid("credentials.env must not be empty".into()));
        }
        Ok(())
    }

    /// Directory holding this document's state
    pub fn document_dir(&self) -> PathBuf {
        self.state_dir.join(&self.document)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
