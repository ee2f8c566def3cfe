// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapters
//!
//! Notifications are fire-and-forget: callers log a failed delivery and move
//! on, so nothing here may influence pipeline state.

mod desktop;

pub use desktop::DesktopNotifier;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifyAdapter;

use async_trait::async_trait;
use hs_core::{Notification, NotifyUrgency};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification failed: {0}")]
    Failed(String),
}

/// Adapter trait for notification delivery
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// Drops every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifyAdapter;

#[async_trait]
impl NotifyAdapter for NoOpNotifyAdapter {
    async fn notify(&self, _notification: Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Writes notifications to the log at a level matching their urgency
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotifyAdapter for LogNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let Notification { title, message, .. } = &notification;
        match notification.urgency {
            NotifyUrgency::Normal => tracing::info!(%title, "{}", message),
            NotifyUrgency::Important => tracing::warn!(%title, "{}", message),
            NotifyUrgency::Critical => tracing::error!(%title, "{}", message),
        }
        Ok(())
    }
}

/// Fan a notification out to two adapters; the first failure is returned
/// after both have been attempted.
#[derive(Clone, Debug, Default)]
pub struct Both<A, B>(pub A, pub B);

#[async_trait]
impl<A: NotifyAdapter, B: NotifyAdapter> NotifyAdapter for Both<A, B> {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let first = self.0.notify(notification.clone()).await;
        let second = self.1.notify(notification).await;
        first.and(second)
    }
}

/// An absent adapter drops notifications, so optional sinks compose with [`Both`]
#[async_trait]
impl<N: NotifyAdapter> NotifyAdapter for Option<N> {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        match self {
            Some(inner) => inner.notify(notification).await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
