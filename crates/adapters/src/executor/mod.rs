// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step executors
//!
//! An executor performs one pipeline step end to end: fetch from the fitness
//! service, write to the sheet. A step interrupted part-way is re-run from the
//! beginning on the next trigger, so executors must tolerate being retried.

mod command;

pub use command::{parse_output, CommandStepExecutor};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ExecutorCall, FakeStepExecutor};

use async_trait::async_trait;
use hs_core::StepName;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by a step executor
#[derive(Debug, Error)]
pub enum StepExecutionError {
    #[error("command failed to start: {0}")]
    Spawn(String),
    #[error("command exited with {code:?}: {stderr}")]
    CommandFailed { code: Option<i32>, stderr: String },
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    #[error("{0}")]
    Failed(String),
}

/// What a successful step produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Number of records written
    pub imported: u64,
    /// Post-processing operations queued but not confirmed before returning
    pub deferred: Vec<String>,
}

impl StepReport {
    pub fn new(imported: u64) -> Self {
        Self {
            imported,
            deferred: Vec::new(),
        }
    }

    pub fn with_deferred(mut self, operation: impl Into<String>) -> Self {
        self.deferred.push(operation.into());
        self
    }
}

/// Inputs shared by every step of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepContext {
    pub api_key: String,
    pub document: String,
}

/// Performs import steps and confirms deferred post-processing
#[async_trait]
pub trait StepExecutor: Clone + Send + Sync + 'static {
    /// Run one step from scratch
    async fn import_step(
        &self,
        step: StepName,
        ctx: &StepContext,
    ) -> Result<StepReport, StepExecutionError>;

    /// Check (or redo) a deferred operation. `Ok(true)` means it is now confirmed.
    async fn confirm_deferred(
        &self,
        operation: &str,
        ctx: &StepContext,
    ) -> Result<bool, StepExecutionError>;
}
