// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake step executor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{StepContext, StepExecutionError, StepExecutor, StepReport};
use async_trait::async_trait;
use hs_core::{FakeClock, StepName};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded executor call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorCall {
    Import(StepName),
    Confirm(String),
}

#[derive(Default)]
struct FakeState {
    calls: Vec<ExecutorCall>,
    reports: HashMap<StepName, StepReport>,
    failures: HashMap<StepName, String>,
    confirmable: HashSet<String>,
    confirm_failures: HashSet<String>,
    clock: Option<(FakeClock, Duration)>,
    confirm_clock: Option<(FakeClock, Duration)>,
}

/// Scripted step executor. Steps succeed with a zero count unless told otherwise.
#[derive(Clone, Default)]
pub struct FakeStepExecutor {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStepExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut FakeState) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    /// Return `report` whenever `step` runs
    pub fn set_report(&self, step: StepName, report: StepReport) {
        self.with_state(|s| s.reports.insert(step, report));
    }

    /// Make `step` fail with `message` until cleared
    pub fn fail_on(&self, step: StepName, message: impl Into<String>) {
        self.with_state(|s| s.failures.insert(step, message.into()));
    }

    pub fn clear_failure(&self, step: StepName) {
        self.with_state(|s| s.failures.remove(&step));
    }

    /// Let `operation` be confirmed on the next check
    pub fn set_confirmable(&self, operation: impl Into<String>) {
        self.with_state(|s| s.confirmable.insert(operation.into()));
    }

    /// Make confirming `operation` raise an error
    pub fn fail_confirm(&self, operation: impl Into<String>) {
        self.with_state(|s| s.confirm_failures.insert(operation.into()));
    }

    /// Advance `clock` by `per_step` each time a step runs
    pub fn advance_clock(&self, clock: FakeClock, per_step: Duration) {
        self.with_state(|s| s.clock = Some((clock, per_step)));
    }

    /// Advance `clock` by `per_confirm` each time a deferred operation is checked
    pub fn advance_clock_on_confirm(&self, clock: FakeClock, per_confirm: Duration) {
        self.with_state(|s| s.confirm_clock = Some((clock, per_confirm)));
    }

    pub fn calls(&self) -> Vec<ExecutorCall> {
        self.with_state(|s| s.calls.clone())
    }

    /// Steps that were attempted, in call order
    pub fn imported_steps(&self) -> Vec<StepName> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ExecutorCall::Import(step) => Some(step),
                ExecutorCall::Confirm(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl StepExecutor for FakeStepExecutor {
    async fn import_step(
        &self,
        step: StepName,
        _ctx: &StepContext,
    ) -> Result<StepReport, StepExecutionError> {
        self.with_state(|s| {
            s.calls.push(ExecutorCall::Import(step));
            if let Some((clock, per_step)) = &s.clock {
                clock.advance(*per_step);
            }
            if let Some(message) = s.failures.get(&step) {
                return Err(StepExecutionError::Failed(message.clone()));
            }
            Ok(s.reports.get(&step).cloned().unwrap_or_default())
        })
    }

    async fn confirm_deferred(
        &self,
        operation: &str,
        _ctx: &StepContext,
    ) -> Result<bool, StepExecutionError> {
        self.with_state(|s| {
            s.calls.push(ExecutorCall::Confirm(operation.to_string()));
            if let Some((clock, per_confirm)) = &s.confirm_clock {
                clock.advance(*per_confirm);
            }
            if s.confirm_failures.contains(operation) {
                return Err(StepExecutionError::Failed(format!(
                    "cannot reach sheet to confirm {}",
                    operation
                )));
            }
            Ok(s.confirmable.contains(operation))
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
