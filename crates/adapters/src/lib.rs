// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the importer's external collaborators
//!
//! Step executors do the actual fetching and sheet writing, credential
//! providers hand out the API key, and notifiers report outcomes.

pub mod credentials;
pub mod executor;
pub mod notify;
pub mod traced;

pub use credentials::{fingerprint, CredentialProvider, EnvCredentials, StaticCredentials};
pub use executor::{
    CommandStepExecutor, StepContext, StepExecutionError, StepExecutor, StepReport,
};
pub use notify::{Both, DesktopNotifier, LogNotifier, NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use traced::TracedStepExecutor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use executor::{ExecutorCall, FakeStepExecutor};
#[cfg(any(test, feature = "test-support"))]
pub use notify::FakeNotifyAdapter;
