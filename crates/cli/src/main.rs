// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! hs - resumable Hevy to spreadsheet import

mod commands;
mod completions;
mod context;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{deferred, reset, run, status, watch};
use context::{Context, Overrides};
use error::HsError;
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "hs",
    version,
    about = "hevy-sheets - resumable workout data import"
)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = "hs.toml")]
    config: PathBuf,

    /// Document whose import state is used (overrides config)
    #[arg(long, global = true)]
    document: Option<String>,

    /// Directory holding import state (overrides config)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one import trigger, resuming from the last checkpoint
    Run,
    /// Trigger imports on an interval until interrupted
    Watch(watch::WatchArgs),
    /// Show import progress for the document
    Status,
    /// Clear the checkpoint and active flag
    Reset(reset::ResetArgs),
    /// Pending post-processing operations
    Deferred(deferred::DeferredArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    match execute(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<HsError>() {
                Some(hs) => eprint!("{}", hs),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let log_file = match &cli.command {
        Commands::Watch(args) => args.log_file.clone(),
        _ => None,
    };
    let _log_guard = logging::init(cli.verbose, log_file.as_deref())?;

    let ctx = Context::load(
        &cli.config,
        Overrides {
            document: cli.document,
            state_dir: cli.state_dir,
        },
    )?;

    match cli.command {
        Commands::Run => run::handle(&ctx, cli.format).await,
        Commands::Watch(args) => watch::handle(&ctx, args).await,
        Commands::Status => status::handle(&ctx, cli.format),
        Commands::Reset(args) => reset::handle(&ctx, args),
        Commands::Deferred(args) => deferred::handle(&ctx, args, cli.format),
        // handled before config is loaded
        Commands::Completions(_) => Ok(()),
    }
}
