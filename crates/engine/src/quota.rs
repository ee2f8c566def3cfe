// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted quota tracking
//!
//! Each trigger is a separate process, so the daily ledger lives in the
//! document store next to the checkpoint.

use chrono::{DateTime, Utc};
use hs_core::{keys, Clock, QuotaConfig, QuotaUsage, QuotaWarning};
use hs_storage::ProgressStore;
use std::sync::Mutex;
use std::time::Duration;

pub struct QuotaTracker<C: Clock> {
    store: ProgressStore,
    clock: C,
    config: QuotaConfig,
    run_started: Mutex<Option<DateTime<Utc>>>,
}

impl<C: Clock> QuotaTracker<C> {
    pub fn new(store: ProgressStore, clock: C, config: QuotaConfig) -> Self {
        Self {
            store,
            clock,
            config,
            run_started: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &QuotaConfig {
        &self.config
    }

    /// Start timing a new run
    pub fn begin_run(&self) {
        let mut started = self.run_started.lock().unwrap_or_else(|e| e.into_inner());
        *started = Some(self.clock.now());
    }

    /// Wall time since `begin_run`, zero if no run was started
    pub fn run_elapsed(&self) -> Duration {
        let started = *self.run_started.lock().unwrap_or_else(|e| e.into_inner());
        started
            .and_then(|t| (self.clock.now() - t).to_std().ok())
            .unwrap_or(Duration::ZERO)
    }

    pub fn usage(&self) -> QuotaUsage {
        self.store.get_json(keys::QUOTA_USAGE).unwrap_or_default()
    }

    /// Add an execution to the rolling ledger
    pub fn record_execution_time(&self, duration: Duration) {
        let now = self.clock.now();
        let mut usage = self.usage();
        usage.prune(now);
        usage.record(now, duration);
        self.store.set_json(keys::QUOTA_USAGE, &usage);
    }

    /// Warning when the run or the day is close to its budget
    pub fn check_quota_warnings(&self) -> Option<QuotaWarning> {
        let warning = self
            .config
            .evaluate(&self.usage(), self.run_elapsed(), self.clock.now());
        if let Some(w) = &warning {
            tracing::warn!(scope = ?w.scope, "{}", w);
        }
        warning
    }

    /// Total execution time recorded in the last day
    pub fn daily_total(&self) -> Duration {
        self.usage()
            .total_within(self.clock.now(), hs_core::quota::DAILY_WINDOW)
    }
}

#[cfg(test)]
#[path = "quota_tests.rs"]
mod tests;
