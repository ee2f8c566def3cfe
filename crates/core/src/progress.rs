// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted checkpoint records
//!
//! Three independent records live in a document's store:
//! - **import-progress** - which steps have completed, in completion order
//! - **active-import** - heartbeat of the run currently owning the pipeline
//! - **deferred-post-processing** - side effects queued but not yet confirmed

use crate::step::StepName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Store keys for the persisted records
pub mod keys {
    pub const IMPORT_PROGRESS: &str = "import-progress";
    pub const ACTIVE_IMPORT: &str = "active-import";
    pub const DEFERRED_OPERATIONS: &str = "deferred-post-processing";
    pub const QUOTA_USAGE: &str = "quota-usage";
    pub const IDENTITY: &str = "identity";
}

/// How long an active-run heartbeat is honoured before it is considered stale
pub const DEFAULT_ACTIVE_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// Checkpoint of completed pipeline steps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredProgress")]
pub struct ImportProgressState {
    pub completed_steps: Vec<StepName>,
    pub timestamp: DateTime<Utc>,
    pub is_resuming: bool,
}

impl ImportProgressState {
    /// Build a checkpoint, collapsing duplicates while keeping first-completion order
    pub fn new(completed: &[StepName], timestamp: DateTime<Utc>) -> Self {
        let mut completed_steps = Vec::with_capacity(completed.len());
        for step in completed {
            if !completed_steps.contains(step) {
                completed_steps.push(*step);
            }
        }
        Self {
            completed_steps,
            timestamp,
            is_resuming: true,
        }
    }

    pub fn contains(&self, step: StepName) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Pipeline order minus completed steps
    pub fn remaining(&self) -> Vec<StepName> {
        StepName::ALL
            .iter()
            .copied()
            .filter(|step| !self.contains(*step))
            .collect()
    }
}

/// Wire form of the checkpoint. Step names are decoded leniently so a record
/// written by a newer pipeline (or edited by hand) still loads.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProgress {
    #[serde(default)]
    completed_steps: Vec<String>,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    is_resuming: bool,
}

impl From<StoredProgress> for ImportProgressState {
    fn from(stored: StoredProgress) -> Self {
        let mut steps = Vec::with_capacity(stored.completed_steps.len());
        for name in &stored.completed_steps {
            match name.parse::<StepName>() {
                Ok(step) => steps.push(step),
                Err(e) => tracing::warn!(error = %e, "dropping unknown step from checkpoint"),
            }
        }
        let mut state = ImportProgressState::new(&steps, stored.timestamp);
        state.is_resuming = stored.is_resuming;
        state
    }
}

/// Heartbeat of the run that currently owns the pipeline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveImportState {
    pub timestamp: DateTime<Utc>,
}

impl ActiveImportState {
    pub fn is_expired(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        is_expired(self.timestamp, now, timeout)
    }
}

/// A post-processing task whose completion could not be confirmed inline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeferredOperationEntry {
    pub timestamp: DateTime<Utc>,
    pub needs_completion: bool,
}

/// Deferred operations keyed by operation name
pub type DeferredLedger = BTreeMap<String, DeferredOperationEntry>;

/// Fingerprint of the credential a checkpoint was written under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub fingerprint: String,
}

/// True once strictly more than `timeout` has elapsed since `timestamp`.
///
/// A timestamp in the future (clock skew between writers) is never expired.
pub fn is_expired(timestamp: DateTime<Utc>, now: DateTime<Utc>, timeout: Duration) -> bool {
    match (now - timestamp).to_std() {
        Ok(elapsed) => elapsed > timeout,
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
