// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpointed import orchestrator
//!
//! One call to [`ImportOrchestrator::run_once`] is one trigger. A run claims
//! the advisory active flag, works through the remaining steps in pipeline
//! order and checkpoints after each one, so a run that is killed, fails or
//! stops on quota pressure is picked up at the first incomplete step by the
//! next trigger.
//!
//! The claim is check-then-act against the store: two triggers firing close
//! together can both observe "not active" and both proceed.

use crate::error::ImportError;
use crate::quota::QuotaTracker;
use crate::status::ImportStatus;
use crate::tracker::ImportProgressTracker;
use chrono::{DateTime, Utc};
use hs_adapters::{fingerprint, CredentialProvider, NotifyAdapter, StepContext, StepExecutor};
use hs_core::{Clock, ImportConfig, Notification, QuotaWarning, StepName};
use hs_storage::ProgressStore;
use serde::Serialize;
use std::time::Duration;

/// Collaborators injected into the orchestrator
pub struct OrchestratorDeps<E, K, N> {
    pub executor: E,
    pub credentials: K,
    pub notify: N,
}

/// Result of one executed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    pub step: StepName,
    pub imported: u64,
    #[serde(with = "duration_ms")]
    pub elapsed: Duration,
}

/// How a run ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum RunOutcome {
    /// Another run holds a live heartbeat; nothing was touched
    AlreadyRunning,
    /// Every step is done and the checkpoint has been cleared
    Completed {
        steps: Vec<StepResult>,
        /// Operations still waiting for confirmation
        deferred: Vec<String>,
    },
    /// Stopped early to stay inside the quota; the next trigger resumes
    Stopped {
        steps: Vec<StepResult>,
        remaining: Vec<StepName>,
        warning: QuotaWarning,
    },
}

pub struct ImportOrchestrator<E, K, N, C: Clock> {
    tracker: ImportProgressTracker<C>,
    quota: QuotaTracker<C>,
    executor: E,
    credentials: K,
    notify: N,
    document: String,
}

impl<E, K, N, C> ImportOrchestrator<E, K, N, C>
where
    E: StepExecutor,
    K: CredentialProvider,
    N: NotifyAdapter,
    C: Clock,
{
    pub fn new(
        deps: OrchestratorDeps<E, K, N>,
        store: ProgressStore,
        clock: C,
        config: &ImportConfig,
    ) -> Self {
        Self {
            tracker: ImportProgressTracker::new(store.clone(), clock.clone())
                .with_active_timeout(config.active_timeout),
            quota: QuotaTracker::new(store, clock, config.quota.clone()),
            executor: deps.executor,
            credentials: deps.credentials,
            notify: deps.notify,
            document: config.document.clone(),
        }
    }

    pub fn tracker(&self) -> &ImportProgressTracker<C> {
        &self.tracker
    }

    pub fn quota(&self) -> &QuotaTracker<C> {
        &self.quota
    }

    /// Run one trigger's worth of the pipeline. Safe to call repeatedly.
    pub async fn run_once(&self) -> Result<RunOutcome, ImportError> {
        if self.tracker.is_import_active() {
            tracing::info!(document = %self.document, "import already running, skipping trigger");
            return Ok(RunOutcome::AlreadyRunning);
        }

        let ctx = match self
            .credentials
            .current_api_key()
            .filter(|k| !k.trim().is_empty())
        {
            Some(api_key) => StepContext {
                api_key,
                document: self.document.clone(),
            },
            None => {
                let err = ImportError::Configuration("no API key configured".to_string());
                self.send(
                    Notification::new("Import not started", "Set an API key to import data.")
                        .critical(),
                )
                .await;
                return Err(err);
            }
        };
        self.check_identity(&ctx.api_key);

        self.tracker.mark_import_active();
        self.quota.begin_run();
        tracing::info!(document = %self.document, "import run started");

        self.recheck_deferred(&ctx).await;

        let mut completed = self.tracker.completed_steps();
        let remaining = self.tracker.remaining_steps();
        let mut steps = Vec::with_capacity(remaining.len());

        for (i, step) in remaining.iter().copied().enumerate() {
            if let Some(warning) = self.quota.check_quota_warnings() {
                let left = remaining[i..].to_vec();
                tracing::info!(next = %step, left = left.len(), "stopping early for quota");
                self.send(
                    Notification::new(
                        "Import paused",
                        format!(
                            "{}. {} step(s) left; the next trigger resumes at {}.",
                            warning,
                            left.len(),
                            step.label()
                        ),
                    )
                    .important(),
                )
                .await;
                return Ok(RunOutcome::Stopped {
                    steps,
                    remaining: left,
                    warning,
                });
            }

            let started = self.tracker.clock().now();
            let result = self.executor.import_step(step, &ctx).await;
            let elapsed = self.elapsed_since(started);
            self.quota.record_execution_time(elapsed);

            match result {
                Ok(report) => {
                    completed.push(step);
                    self.tracker.save_progress(&completed);
                    for operation in &report.deferred {
                        self.tracker.mark_deferred_operation(operation);
                    }
                    self.tracker.update_heartbeat();
                    steps.push(StepResult {
                        step,
                        imported: report.imported,
                        elapsed,
                    });
                }
                Err(source) => {
                    self.tracker.clear_import_active();
                    self.send(
                        Notification::new(
                            "Import failed",
                            format!("Importing {} failed: {}", step.label(), source),
                        )
                        .critical(),
                    )
                    .await;
                    return Err(ImportError::Step {
                        step,
                        completed,
                        source,
                    });
                }
            }
        }

        self.tracker.clear_progress();
        self.tracker.clear_import_active();

        let deferred = self.tracker.deferred_operations();
        tracing::info!(
            steps = steps.len(),
            deferred = deferred.len(),
            "import run completed"
        );
        self.send(completion_notification(&steps, &deferred)).await;

        Ok(RunOutcome::Completed { steps, deferred })
    }

    /// Snapshot of the persisted state, for status reporting
    pub fn status(&self) -> ImportStatus {
        ImportStatus::collect(&self.tracker, &self.quota, &self.document)
    }

    /// Forget checkpoint, active flag and identity
    pub fn reset(&self) {
        tracing::info!(document = %self.document, "resetting import state");
        self.tracker.reset();
    }

    /// A checkpoint written under another API key describes someone else's
    /// data, so it is dropped before the new identity takes over.
    fn check_identity(&self, api_key: &str) {
        let fp = fingerprint(api_key);
        if self.tracker.identity_changed(&fp) {
            tracing::info!("API key changed, discarding previous checkpoint");
            self.tracker.clear_progress();
        }
        self.tracker.record_identity(&fp);
    }

    /// Re-check operations earlier runs could not confirm.
    ///
    /// Confirmations are run work like steps: each one is charged to the
    /// quota and refreshes the heartbeat, and the pass stops as soon as a
    /// budget is close. Operations left unchecked stay in the ledger.
    async fn recheck_deferred(&self, ctx: &StepContext) {
        for operation in self.tracker.deferred_operations() {
            if self.quota.check_quota_warnings().is_some() {
                tracing::info!(operation, "quota reached, leaving deferred operations for later");
                break;
            }

            let started = self.tracker.clock().now();
            let result = self.executor.confirm_deferred(&operation, ctx).await;
            self.quota.record_execution_time(self.elapsed_since(started));
            self.tracker.update_heartbeat();

            match result {
                Ok(true) => {
                    tracing::info!(operation, "deferred operation confirmed");
                    self.tracker.mark_operation_complete(&operation);
                }
                Ok(false) => tracing::info!(operation, "deferred operation still pending"),
                Err(e) => {
                    tracing::warn!(operation, error = %e, "could not check deferred operation")
                }
            }
        }
    }

    fn elapsed_since(&self, started: DateTime<Utc>) -> Duration {
        (self.tracker.clock().now() - started)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    async fn send(&self, notification: Notification) {
        if let Err(e) = self.notify.notify(notification).await {
            tracing::warn!(error = %e, "notification failed");
        }
    }
}

fn completion_notification(steps: &[StepResult], deferred: &[String]) -> Notification {
    let summary = if steps.is_empty() {
        "Nothing left to import.".to_string()
    } else {
        let parts: Vec<String> = steps
            .iter()
            .map(|s| format!("{} {}", s.imported, s.step.label()))
            .collect();
        format!("Imported {}.", parts.join(", "))
    };

    if deferred.is_empty() {
        Notification::new("Import complete", summary)
    } else {
        Notification::new(
            "Import complete",
            format!(
                "{} Post-processing still pending: {}.",
                summary,
                deferred.join(", ")
            ),
        )
        .important()
    }
}

mod duration_ms {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
