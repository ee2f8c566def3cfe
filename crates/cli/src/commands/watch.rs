// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hs watch` - Fire triggers on an interval until interrupted
//!
//! The first trigger fires immediately, the rest on the interval. Triggers
//! never overlap within one watcher; each one runs to completion before the
//! next tick is awaited.
//!
//! A trigger paused for quota keeps its active flag until `active_timeout`
//! lapses, so with a shorter interval this watcher's own later triggers are
//! skipped as if another import were running.

use crate::commands::run::trigger;
use crate::context::Context;
use anyhow::Result;
use hs_engine::RunOutcome;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::{interval, MissedTickBehavior};

#[derive(clap::Args, Debug)]
pub struct WatchArgs {
    /// Time between triggers (e.g. "30m", "1h")
    #[arg(long, default_value = "1h", value_parser = humantime::parse_duration)]
    pub interval: Duration,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Exit after this many triggers
    #[arg(long)]
    pub max_triggers: Option<u64>,
}

pub async fn handle(ctx: &Context, args: WatchArgs) -> Result<()> {
    let orchestrator = ctx.orchestrator()?;

    let shutdown = Arc::new(Notify::new());
    let s = shutdown.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nShutting down watcher...");
        s.notify_one();
    })?;

    tracing::info!(
        document = %ctx.config.document,
        interval = %humantime::format_duration(args.interval),
        "watching"
    );

    let mut timer = interval(args.interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut fired = 0u64;

    loop {
        tokio::select! {
            _ = timer.tick() => {}
            _ = shutdown.notified() => break,
        }

        fired += 1;
        match trigger(ctx, &orchestrator).await {
            Ok(RunOutcome::AlreadyRunning) => tracing::info!(
                "active flag still held (possibly by this watcher's paused run), trigger skipped"
            ),
            Ok(RunOutcome::Completed { steps, .. }) => {
                tracing::info!(steps = steps.len(), "trigger finished")
            }
            Ok(RunOutcome::Stopped { remaining, .. }) => {
                tracing::info!(remaining = remaining.len(), "trigger paused for quota")
            }
            Err(e) => tracing::error!("{}", e.message),
        }

        if args.max_triggers.is_some_and(|max| fired >= max) {
            break;
        }
    }

    tracing::info!(triggers = fired, "watcher stopped");
    Ok(())
}
