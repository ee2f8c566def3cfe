// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hs status` - Show checkpoint, heartbeat and quota for a document

use crate::context::Context;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use hs_engine::{ActiveState, ImportStatus};

pub fn handle(ctx: &Context, format: OutputFormat) -> Result<()> {
    let tracker = ctx.tracker()?;
    let quota = ctx.quota()?;
    let status = ImportStatus::collect(&tracker, &quota, &ctx.config.document);
    output::print(&status, format, print_status);
    Ok(())
}

fn print_status(status: &ImportStatus) {
    println!("Document: {}", status.document);
    match &status.active {
        ActiveState::Idle => println!("  State:     idle"),
        ActiveState::Running { since } => println!("  State:     running (heartbeat {})", since),
        ActiveState::Stale { since } => {
            println!("  State:     stale (last heartbeat {}, next run takes over)", since)
        }
    }
    println!("  Completed: {}", list(status.completed_steps.iter().map(|s| s.as_str())));
    println!("  Remaining: {}", list(status.remaining_steps.iter().map(|s| s.as_str())));
    if let Some(at) = status.checkpoint_at {
        println!("  Checkpoint: {}", at);
    }
    println!("  Deferred:  {}", list(status.deferred.iter().map(String::as_str)));
    println!(
        "  Quota:     {}m of {}m used today",
        status.daily_used_secs / 60,
        status.daily_limit_secs / 60
    );
}

fn list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
