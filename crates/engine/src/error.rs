// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for import runs

use hs_adapters::StepExecutionError;
use hs_core::StepName;
use thiserror::Error;

/// Errors that end an import run
#[derive(Debug, Error)]
pub enum ImportError {
    /// Missing or unusable credential; raised before any step runs
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A step executor failed; earlier steps stay checkpointed
    #[error("step {step} failed: {source}")]
    Step {
        step: StepName,
        completed: Vec<StepName>,
        #[source]
        source: StepExecutionError,
    },
}

impl ImportError {
    /// The step that failed, if any
    pub fn step(&self) -> Option<StepName> {
        match self {
            ImportError::Step { step, .. } => Some(*step),
            ImportError::Configuration(_) => None,
        }
    }
}
