// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wiring from CLI flags and `hs.toml` to the engine

use crate::error::HsError;
use hs_adapters::{
    Both, CommandStepExecutor, DesktopNotifier, EnvCredentials, LogNotifier, TracedStepExecutor,
};
use hs_core::{ImportConfig, SystemClock};
use hs_engine::{ImportOrchestrator, ImportProgressTracker, OrchestratorDeps, QuotaTracker};
use hs_storage::{JsonFileBackend, ProgressStore};
use std::path::{Path, PathBuf};

pub type Notifier = Both<LogNotifier, Option<DesktopNotifier>>;

pub type Orchestrator =
    ImportOrchestrator<TracedStepExecutor<CommandStepExecutor>, EnvCredentials, Notifier, SystemClock>;

/// Overrides shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub document: Option<String>,
    pub state_dir: Option<PathBuf>,
}

/// Resolved configuration plus where it came from
pub struct Context {
    pub config: ImportConfig,
    pub config_path: PathBuf,
}

impl Context {
    pub fn load(config_path: &Path, overrides: Overrides) -> Result<Self, HsError> {
        let mut config = ImportConfig::load_or_default(config_path)
            .map_err(|e| HsError::invalid_config(config_path, e))?;
        apply_overrides(&mut config, overrides);
        config
            .validate()
            .map_err(|e| HsError::invalid_config(config_path, e))?;
        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
        })
    }

    pub fn store(&self) -> Result<ProgressStore, HsError> {
        let backend = JsonFileBackend::open(&self.config.state_dir, &self.config.document)
            .map_err(|e| HsError::storage(&self.config.document_dir(), e))?;
        tracing::debug!(path = %backend.path().display(), "opened document store");
        Ok(ProgressStore::new(backend))
    }

    pub fn tracker(&self) -> Result<ImportProgressTracker<SystemClock>, HsError> {
        Ok(ImportProgressTracker::new(self.store()?, SystemClock)
            .with_active_timeout(self.config.active_timeout))
    }

    pub fn quota(&self) -> Result<QuotaTracker<SystemClock>, HsError> {
        Ok(QuotaTracker::new(
            self.store()?,
            SystemClock,
            self.config.quota.clone(),
        ))
    }

    pub fn executor(&self) -> Result<TracedStepExecutor<CommandStepExecutor>, HsError> {
        let steps = &self.config.steps;
        let command = steps
            .command
            .as_deref()
            .ok_or_else(|| HsError::missing_step_command(&self.config_path))?;

        let mut executor = CommandStepExecutor::new(command);
        if let Some(confirm) = &steps.confirm {
            executor = executor.with_confirm(confirm);
        }
        if let Some(timeout) = steps.timeout {
            executor = executor.with_timeout(timeout);
        }
        if let Some(dir) = self.config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            executor = executor.with_cwd(dir);
        }
        Ok(TracedStepExecutor::new(executor))
    }

    pub fn notifier(&self) -> Notifier {
        Both(
            LogNotifier,
            self.config.notify.desktop.then(DesktopNotifier::default),
        )
    }

    pub fn orchestrator(&self) -> Result<Orchestrator, HsError> {
        let deps = OrchestratorDeps {
            executor: self.executor()?,
            credentials: EnvCredentials::new(&self.config.credentials.env),
            notify: self.notifier(),
        };
        Ok(ImportOrchestrator::new(
            deps,
            self.store()?,
            SystemClock,
            &self.config,
        ))
    }
}

fn apply_overrides(config: &mut ImportConfig, overrides: Overrides) {
    if let Some(document) = overrides.document {
        config.document = document;
    }
    if let Some(state_dir) = overrides.state_dir {
        config.state_dir = state_dir;
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
