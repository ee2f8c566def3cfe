// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Document-scoped key/value persistence
//!
//! Backends are fallible; [`ProgressStore`] wraps one and never fails,
//! degrading to a logged no-op when the backend is unavailable.

mod backend;
mod json;
mod memory;
mod store;

pub use backend::{validate_name, KeyValueBackend, StoreError};
pub use json::JsonFileBackend;
pub use memory::MemoryBackend;
pub use store::ProgressStore;
