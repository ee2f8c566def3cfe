// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-command step executor
//!
//! Runs an operator-supplied command per step. The command sees `HS_STEP`,
//! `HS_DOCUMENT` and `HS_API_KEY` in its environment. On stdout, a line of the
//! form `deferred: <name>` queues a deferred operation and the last line that
//! parses as an integer is taken as the imported count.

use super::{StepContext, StepExecutionError, StepExecutor, StepReport};
use async_trait::async_trait;
use hs_core::StepName;
use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

const DEFERRED_PREFIX: &str = "deferred:";

#[derive(Clone, Debug)]
pub struct CommandStepExecutor {
    command: String,
    confirm: Option<String>,
    timeout: Option<Duration>,
    cwd: Option<PathBuf>,
}

impl CommandStepExecutor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            confirm: None,
            timeout: None,
            cwd: None,
        }
    }

    pub fn with_confirm(mut self, confirm: impl Into<String>) -> Self {
        self.confirm = Some(confirm.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    async fn run(
        &self,
        script: &str,
        ctx: &StepContext,
        env: &[(&str, &str)],
    ) -> Result<Output, StepExecutionError> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(script)
            .env("HS_DOCUMENT", &ctx.document)
            .env("HS_API_KEY", &ctx.api_key)
            .kill_on_drop(true);
        for (key, value) in env {
            cmd.env(key, value);
        }
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output();
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output)
                .await
                .map_err(|_| StepExecutionError::TimedOut(limit))?,
            None => output.await,
        };
        result.map_err(|e| StepExecutionError::Spawn(e.to_string()))
    }
}

#[async_trait]
impl StepExecutor for CommandStepExecutor {
    async fn import_step(
        &self,
        step: StepName,
        ctx: &StepContext,
    ) -> Result<StepReport, StepExecutionError> {
        let script = self.command.replace("{step}", step.as_str());
        let output = self.run(&script, ctx, &[("HS_STEP", step.as_str())]).await?;

        if !output.status.success() {
            return Err(StepExecutionError::CommandFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_output(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn confirm_deferred(
        &self,
        operation: &str,
        ctx: &StepContext,
    ) -> Result<bool, StepExecutionError> {
        let Some(confirm) = &self.confirm else {
            // Nothing can confirm it, so it stays queued
            return Ok(false);
        };
        let script = confirm.replace("{operation}", operation);
        let output = self.run(&script, ctx, &[("HS_OPERATION", operation)]).await?;
        Ok(output.status.success())
    }
}

/// Extract the imported count and deferred operations from command stdout
pub fn parse_output(stdout: &str) -> StepReport {
    let mut report = StepReport::default();
    for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(name) = line.strip_prefix(DEFERRED_PREFIX) {
            let name = name.trim();
            if !name.is_empty() && !report.deferred.iter().any(|d| d == name) {
                report.deferred.push(name.to_string());
            }
        } else if let Ok(count) = line.parse::<u64>() {
            report.imported = count;
        }
    }
    report
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
