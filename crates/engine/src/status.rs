// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of a document's import state

use crate::quota::QuotaTracker;
use crate::tracker::ImportProgressTracker;
use chrono::{DateTime, Utc};
use hs_core::{Clock, StepName};
use serde::Serialize;

/// Snapshot for `hs status`. Collecting it never mutates the store, so a
/// stale heartbeat is reported as stale rather than cleared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStatus {
    pub document: String,
    pub completed_steps: Vec<StepName>,
    pub remaining_steps: Vec<StepName>,
    pub checkpoint_at: Option<DateTime<Utc>>,
    pub active: ActiveState,
    pub deferred: Vec<String>,
    pub daily_used_secs: u64,
    pub daily_limit_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ActiveState {
    Idle,
    Running { since: DateTime<Utc> },
    Stale { since: DateTime<Utc> },
}

impl ImportStatus {
    pub fn collect<C: Clock>(
        tracker: &ImportProgressTracker<C>,
        quota: &QuotaTracker<C>,
        document: &str,
    ) -> Self {
        let progress = tracker.load_progress();
        let now = tracker.clock().now();
        let active = match tracker.active_since() {
            None => ActiveState::Idle,
            Some(a) if a.is_expired(now, tracker.active_timeout()) => ActiveState::Stale {
                since: a.timestamp,
            },
            Some(a) => ActiveState::Running { since: a.timestamp },
        };

        Self {
            document: document.to_string(),
            completed_steps: tracker.completed_steps(),
            remaining_steps: tracker.remaining_steps(),
            checkpoint_at: progress.map(|p| p.timestamp),
            active,
            deferred: tracker.deferred_operations(),
            daily_used_secs: quota.daily_total().as_secs(),
            daily_limit_secs: quota.config().daily_limit.as_secs(),
        }
    }
}
