// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-time quota accounting
//!
//! Pure bookkeeping: a rolling ledger of recorded execution durations and the
//! thresholds that decide when a run should stop before starting another step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Length of the rolling window used for the daily budget
pub const DAILY_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Quota thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaConfig {
    /// Wall-clock ceiling for a single triggered run
    #[serde(with = "humantime_serde")]
    pub max_run: Duration,
    /// Total execution time allowed per rolling day
    #[serde(with = "humantime_serde")]
    pub daily_limit: Duration,
    /// Fraction of a ceiling at which a warning is raised
    pub warn_ratio: f64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            max_run: Duration::from_secs(5 * 60),
            daily_limit: Duration::from_secs(90 * 60),
            warn_ratio: 0.8,
        }
    }
}

impl QuotaConfig {
    pub fn with_max_run(mut self, max_run: Duration) -> Self {
        self.max_run = max_run;
        self
    }

    pub fn with_daily_limit(mut self, daily_limit: Duration) -> Self {
        self.daily_limit = daily_limit;
        self
    }

    pub fn with_warn_ratio(mut self, warn_ratio: f64) -> Self {
        self.warn_ratio = warn_ratio;
        self
    }

    /// Evaluate the current run and the daily ledger against the thresholds.
    ///
    /// The per-run budget is checked first since it is the one that truncates
    /// a run outright.
    pub fn evaluate(
        &self,
        usage: &QuotaUsage,
        run_elapsed: Duration,
        now: DateTime<Utc>,
    ) -> Option<QuotaWarning> {
        if exceeds(run_elapsed, self.max_run, self.warn_ratio) {
            return Some(QuotaWarning {
                scope: QuotaScope::Run,
                used: run_elapsed,
                limit: self.max_run,
            });
        }

        let daily = usage.total_within(now, DAILY_WINDOW);
        if exceeds(daily, self.daily_limit, self.warn_ratio) {
            return Some(QuotaWarning {
                scope: QuotaScope::Daily,
                used: daily,
                limit: self.daily_limit,
            });
        }

        None
    }
}

fn exceeds(used: Duration, limit: Duration, ratio: f64) -> bool {
    used.as_secs_f64() >= limit.as_secs_f64() * ratio.clamp(0.0, 1.0)
}

/// A single recorded execution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,
}

/// Rolling ledger of execution durations
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaUsage {
    #[serde(default)]
    pub executions: Vec<ExecutionRecord>,
}

impl QuotaUsage {
    pub fn record(&mut self, now: DateTime<Utc>, duration: Duration) {
        self.executions.push(ExecutionRecord {
            timestamp: now,
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        });
    }

    /// Drop records older than the daily window
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.executions
            .retain(|r| !crate::progress::is_expired(r.timestamp, now, DAILY_WINDOW));
    }

    /// Sum of durations recorded within `window` of `now`
    pub fn total_within(&self, now: DateTime<Utc>, window: Duration) -> Duration {
        let ms = self
            .executions
            .iter()
            .filter(|r| !crate::progress::is_expired(r.timestamp, now, window))
            .fold(0u64, |acc, r| acc.saturating_add(r.duration_ms));
        Duration::from_millis(ms)
    }
}

/// Which budget is running low
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaScope {
    Run,
    Daily,
}

/// Signal that a budget is close to exhausted
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuotaWarning {
    pub scope: QuotaScope,
    #[serde(with = "humantime_serde")]
    pub used: Duration,
    #[serde(with = "humantime_serde")]
    pub limit: Duration,
}

impl QuotaWarning {
    pub fn utilization(&self) -> f64 {
        if self.limit.is_zero() {
            return 1.0;
        }
        self.used.as_secs_f64() / self.limit.as_secs_f64()
    }
}

impl fmt::Display for QuotaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.scope {
            QuotaScope::Run => "run time",
            QuotaScope::Daily => "daily execution time",
        };
        // Whole seconds keep the message readable
        let used = Duration::from_secs(self.used.as_secs());
        let limit = Duration::from_secs(self.limit.as_secs());
        write!(
            f,
            "{} at {:.0}% ({} of {})",
            scope,
            self.utilization() * 100.0,
            humantime::format_duration(used),
            humantime::format_duration(limit),
        )
    }
}

#[cfg(test)]
#[path = "quota_tests.rs"]
mod tests;
