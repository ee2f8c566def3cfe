// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hs reset` - Forget the checkpoint so the next run starts from the top

use crate::context::Context;
use anyhow::Result;

#[derive(clap::Args, Debug)]
pub struct ResetArgs {
    /// Also drop pending post-processing operations
    #[arg(long)]
    pub deferred: bool,
}

pub fn handle(ctx: &Context, args: ResetArgs) -> Result<()> {
    let tracker = ctx.tracker()?;
    tracker.reset();

    if args.deferred {
        for operation in tracker.deferred_operations() {
            tracker.mark_operation_complete(&operation);
        }
    }

    println!("Reset import state for {}", ctx.config.document);
    Ok(())
}
