// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hs run` - Fire one import trigger

use crate::context::{Context, Orchestrator};
use crate::error::HsError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use hs_engine::{ImportError, RunOutcome};

pub async fn handle(ctx: &Context, format: OutputFormat) -> Result<()> {
    let orchestrator = ctx.orchestrator()?;
    let outcome = trigger(ctx, &orchestrator).await?;
    output::print(&outcome, format, print_outcome);
    Ok(())
}

/// One trigger, with engine errors turned into operator-facing ones
pub async fn trigger(ctx: &Context, orchestrator: &Orchestrator) -> Result<RunOutcome, HsError> {
    orchestrator.run_once().await.map_err(|e| match e {
        ImportError::Configuration(_) => HsError::missing_api_key(&ctx.config.credentials.env),
        ImportError::Step {
            step,
            completed,
            source,
        } => HsError::step_failed(step, &completed, source.to_string()),
    })
}

pub fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::AlreadyRunning => {
            println!("Import already running, nothing to do");
        }
        RunOutcome::Completed { steps, deferred } => {
            if steps.is_empty() {
                println!("Import complete, nothing left to import");
            }
            for s in steps {
                println!(
                    "  {:<16} {:>6} imported  ({:.1}s)",
                    s.step.as_str(),
                    s.imported,
                    s.elapsed.as_secs_f64()
                );
            }
            if !steps.is_empty() {
                println!("Import complete");
            }
            if !deferred.is_empty() {
                println!("Pending post-processing: {}", deferred.join(", "));
            }
        }
        RunOutcome::Stopped {
            steps,
            remaining,
            warning,
        } => {
            for s in steps {
                println!("  {:<16} {:>6} imported", s.step.as_str(), s.imported);
            }
            let names: Vec<&str> = remaining.iter().map(|s| s.as_str()).collect();
            println!("Paused: {}", warning);
            println!("Remaining: {}", names.join(", "));
        }
    }
}
