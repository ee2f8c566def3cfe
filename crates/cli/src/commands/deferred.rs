// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hs deferred` - Inspect pending post-processing operations

use crate::context::Context;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct DeferredArgs {
    #[command(subcommand)]
    pub command: Option<DeferredCommand>,
}

#[derive(Subcommand, Debug)]
pub enum DeferredCommand {
    /// List pending operations (default)
    List,
    /// Mark an operation as done without re-checking it
    Complete {
        /// Operation name
        name: String,
    },
}

pub fn handle(ctx: &Context, args: DeferredArgs, format: OutputFormat) -> Result<()> {
    let tracker = ctx.tracker()?;

    match args.command.unwrap_or(DeferredCommand::List) {
        DeferredCommand::List => {
            let ledger = tracker.deferred_ledger();
            output::print(&ledger, format, |ledger| {
                if ledger.is_empty() {
                    println!("No pending operations");
                }
                for (name, entry) in ledger {
                    println!("{:<24} since {}", name, entry.timestamp);
                }
            });
        }
        DeferredCommand::Complete { name } => {
            if !tracker.is_operation_deferred(&name) {
                anyhow::bail!("no pending operation named '{}'", name);
            }
            tracker.mark_operation_complete(&name);
            println!("Marked {} complete", name);
        }
    }
    Ok(())
}
