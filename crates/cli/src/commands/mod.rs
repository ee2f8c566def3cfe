// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod deferred;
pub mod reset;
pub mod run;
pub mod status;
pub mod watch;
