// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint state for resumable imports
//!
//! The tracker owns three independent records in the document store:
//! the completed-step checkpoint, the active-run heartbeat and the deferred
//! operation ledger. Every method is best-effort: storage failures are logged
//! by the store and surface here as "absent", never as errors.

use hs_core::{
    keys, ActiveImportState, Clock, DeferredLedger, DeferredOperationEntry, IdentityRecord,
    ImportProgressState, StepName, DEFAULT_ACTIVE_TIMEOUT,
};
use hs_storage::ProgressStore;
use std::time::Duration;

pub struct ImportProgressTracker<C: Clock> {
    store: ProgressStore,
    clock: C,
    active_timeout: Duration,
}

impl<C: Clock> ImportProgressTracker<C> {
    pub fn new(store: ProgressStore, clock: C) -> Self {
        Self {
            store,
            clock,
            active_timeout: DEFAULT_ACTIVE_TIMEOUT,
        }
    }

    pub fn with_active_timeout(mut self, timeout: Duration) -> Self {
        self.active_timeout = timeout;
        self
    }

    pub fn active_timeout(&self) -> Duration {
        self.active_timeout
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // --- completed-step checkpoint ---

    /// Persist the completed steps. A failed write only costs resumption
    /// efficiency, so it is logged by the store and otherwise ignored.
    pub fn save_progress(&self, completed: &[StepName]) {
        let state = ImportProgressState::new(completed, self.clock.now());
        tracing::debug!(completed = ?state.completed_steps, "saving checkpoint");
        self.store.set_json(keys::IMPORT_PROGRESS, &state);
    }

    pub fn load_progress(&self) -> Option<ImportProgressState> {
        self.store.get_json(keys::IMPORT_PROGRESS)
    }

    pub fn clear_progress(&self) {
        self.store.delete(keys::IMPORT_PROGRESS);
    }

    pub fn is_step_complete(&self, step: StepName) -> bool {
        self.load_progress()
            .map(|p| p.contains(step))
            .unwrap_or(false)
    }

    /// Pipeline order minus completed steps. A truncated run resumes at the
    /// first entry.
    pub fn remaining_steps(&self) -> Vec<StepName> {
        match self.load_progress() {
            Some(progress) => progress.remaining(),
            None => StepName::ALL.to_vec(),
        }
    }

    pub fn completed_steps(&self) -> Vec<StepName> {
        self.load_progress()
            .map(|p| p.completed_steps)
            .unwrap_or_default()
    }

    pub fn has_progress(&self) -> bool {
        !self.completed_steps().is_empty()
    }

    // --- active-run heartbeat ---

    pub fn mark_import_active(&self) {
        let state = ActiveImportState {
            timestamp: self.clock.now(),
        };
        self.store.set_json(keys::ACTIVE_IMPORT, &state);
    }

    /// Same write as `mark_import_active`; named for the call sites that keep
    /// a run alive between steps.
    pub fn update_heartbeat(&self) {
        self.mark_import_active();
    }

    /// True while a run holds a heartbeat younger than the timeout.
    ///
    /// A stale heartbeat is deleted as a side effect, so a crashed run blocks
    /// new ones for at most one timeout.
    pub fn is_import_active(&self) -> bool {
        let Some(active) = self.active_since() else {
            return false;
        };
        if active.is_expired(self.clock.now(), self.active_timeout) {
            tracing::info!(
                last_heartbeat = %active.timestamp,
                "clearing stale active import"
            );
            self.clear_import_active();
            return false;
        }
        true
    }

    /// The raw heartbeat record, stale or not
    pub fn active_since(&self) -> Option<ActiveImportState> {
        self.store.get_json(keys::ACTIVE_IMPORT)
    }

    pub fn clear_import_active(&self) {
        self.store.delete(keys::ACTIVE_IMPORT);
    }

    // --- deferred operation ledger ---

    pub fn deferred_ledger(&self) -> DeferredLedger {
        self.store
            .get_json(keys::DEFERRED_OPERATIONS)
            .unwrap_or_default()
    }

    fn save_ledger(&self, ledger: &DeferredLedger) {
        if ledger.is_empty() {
            self.store.delete(keys::DEFERRED_OPERATIONS);
        } else {
            self.store.set_json(keys::DEFERRED_OPERATIONS, ledger);
        }
    }

    pub fn mark_deferred_operation(&self, name: &str) {
        let mut ledger = self.deferred_ledger();
        ledger.insert(
            name.to_string(),
            DeferredOperationEntry {
                timestamp: self.clock.now(),
                needs_completion: true,
            },
        );
        self.save_ledger(&ledger);
    }

    pub fn mark_operation_complete(&self, name: &str) {
        let mut ledger = self.deferred_ledger();
        if ledger.remove(name).is_some() {
            self.save_ledger(&ledger);
        }
    }

    /// Names of operations still awaiting confirmation
    pub fn deferred_operations(&self) -> Vec<String> {
        self.deferred_ledger()
            .into_iter()
            .filter(|(_, entry)| entry.needs_completion)
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_operation_deferred(&self, name: &str) -> bool {
        self.deferred_ledger()
            .get(name)
            .map(|entry| entry.needs_completion)
            .unwrap_or(false)
    }

    // --- identity ---

    /// True when a different credential wrote the current checkpoint
    pub fn identity_changed(&self, fingerprint: &str) -> bool {
        self.store
            .get_json::<IdentityRecord>(keys::IDENTITY)
            .map(|record| record.fingerprint != fingerprint)
            .unwrap_or(false)
    }

    pub fn record_identity(&self, fingerprint: &str) {
        self.store.set_json(
            keys::IDENTITY,
            &IdentityRecord {
                fingerprint: fingerprint.to_string(),
            },
        );
    }

    /// Forget all run state for this document. Deferred operations are kept:
    /// the side effects they track already happened in the sheet.
    pub fn reset(&self) {
        self.clear_progress();
        self.clear_import_active();
        self.store.delete(keys::IDENTITY);
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
