// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Resumable import engine

mod error;
mod orchestrator;
mod quota;
mod status;
mod tracker;

pub use error::ImportError;
pub use orchestrator::{ImportOrchestrator, OrchestratorDeps, RunOutcome, StepResult};
pub use quota::QuotaTracker;
pub use status::{ActiveState, ImportStatus};
pub use tracker::ImportProgressTracker;
