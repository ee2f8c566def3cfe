// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hs-core: Core types for the hevy-sheets importer
//!
//! This crate provides:
//! - The fixed, ordered import pipeline (`StepName`)
//! - Persisted checkpoint records and their storage keys
//! - Pure quota accounting
//! - Clock abstraction and configuration

pub mod clock;
pub mod config;
pub mod notify;
pub mod progress;
pub mod quota;
pub mod step;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, CredentialsConfig, ImportConfig, NotifyConfig, StepsConfig};
pub use notify::{Notification, NotifyUrgency};
pub use progress::{
    is_expired, keys, ActiveImportState, DeferredLedger, DeferredOperationEntry,
    IdentityRecord, ImportProgressState, DEFAULT_ACTIVE_TIMEOUT,
};
pub use quota::{QuotaConfig, QuotaScope, QuotaUsage, QuotaWarning};
pub use step::{StepName, UnknownStep};
