// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, adds context lines for why it may have
//! happened, and lists suggestions for how to fix it.

use hs_core::StepName;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct HsError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HsError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for HsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures operators actually hit
impl HsError {
    pub fn invalid_config(path: &Path, source: hs_core::ConfigError) -> Self {
        HsError::new(format!("Could not load config from {}", path.display()))
            .with_context(source.to_string())
            .with_suggestion(format!("Fix the file or remove it: {}", path.display()))
            .with_source(source)
    }

    pub fn missing_step_command(config_path: &Path) -> Self {
        HsError::new("No step command configured")
            .with_context("hs runs one shell command per import step")
            .with_suggestion(format!(
                "Add to {}:\n       [steps]\n       command = \"hevy-export --step {{step}}\"",
                config_path.display()
            ))
    }

    pub fn missing_api_key(env_var: &str) -> Self {
        HsError::new("No API key configured")
            .with_context(format!("Environment variable {} is unset or empty", env_var))
            .with_suggestion(format!("export {}=<your key>", env_var))
            .with_suggestion("Or point credentials.env at another variable in hs.toml")
    }

    pub fn step_failed(step: StepName, completed: &[StepName], cause: String) -> Self {
        let mut err = HsError::new(format!("Importing {} failed", step.label()))
            .with_context(cause);
        if !completed.is_empty() {
            let done: Vec<&str> = completed.iter().map(|s| s.as_str()).collect();
            err = err.with_context(format!("Checkpoint kept for: {}", done.join(", ")));
        }
        err.with_suggestion(format!("Run again to resume at {}: hs run", step.as_str()))
            .with_suggestion("Start over from the first step: hs reset && hs run")
    }

    pub fn storage(path: &Path, source: hs_storage::StoreError) -> Self {
        HsError::new(format!("Cannot open state directory {}", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Check permissions or pass --state-dir")
            .with_source(source)
    }
}
