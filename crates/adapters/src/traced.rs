// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::executor::{StepContext, StepExecutionError, StepExecutor, StepReport};
use async_trait::async_trait;
use hs_core::StepName;
use tracing::Instrument;

/// Wrapper that adds tracing to any StepExecutor
#[derive(Clone)]
pub struct TracedStepExecutor<E> {
    inner: E,
}

impl<E> TracedStepExecutor<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<E: StepExecutor> StepExecutor for TracedStepExecutor<E> {
    async fn import_step(
        &self,
        step: StepName,
        ctx: &StepContext,
    ) -> Result<StepReport, StepExecutionError> {
        let span = tracing::info_span!("step.import", step = %step, document = %ctx.document);

        async {
            tracing::info!("starting");
            let start = std::time::Instant::now();
            let result = self.inner.import_step(step, ctx).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(report) => tracing::info!(
                    imported = report.imported,
                    deferred = report.deferred.len(),
                    elapsed_ms,
                    "step finished"
                ),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "step failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn confirm_deferred(
        &self,
        operation: &str,
        ctx: &StepContext,
    ) -> Result<bool, StepExecutionError> {
        let span = tracing::info_span!("step.confirm", operation);

        async {
            let result = self.inner.confirm_deferred(operation, ctx).await;
            match &result {
                Ok(true) => tracing::info!("confirmed"),
                Ok(false) => tracing::debug!("still pending"),
                Err(e) => tracing::warn!(error = %e, "confirmation check failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
