// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notifications via `osascript` (macOS) or `notify-send` (elsewhere)

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use hs_core::{Notification, NotifyUrgency};
use tokio::process::Command;

#[derive(Clone, Debug)]
pub struct DesktopNotifier {
    app_name: String,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("hevy-sheets")
    }
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    fn osascript(&self, notification: &Notification) -> Command {
        let mut script = format!(
            r#"display notification "{}" with title "{}" subtitle "{}""#,
            escape_applescript(&notification.message),
            escape_applescript(&self.app_name),
            escape_applescript(&notification.title),
        );
        match notification.urgency {
            NotifyUrgency::Normal => {}
            NotifyUrgency::Important => script.push_str(r#" sound name "default""#),
            NotifyUrgency::Critical => script.push_str(r#" sound name "Sosumi""#),
        }
        let mut cmd = Command::new("osascript");
        cmd.arg("-e").arg(script);
        cmd
    }

    fn notify_send(&self, notification: &Notification) -> Command {
        let urgency = match notification.urgency {
            NotifyUrgency::Normal => "low",
            NotifyUrgency::Important => "normal",
            NotifyUrgency::Critical => "critical",
        };
        let mut cmd = Command::new("notify-send");
        cmd.arg("--app-name")
            .arg(&self.app_name)
            .arg("--urgency")
            .arg(urgency)
            .arg(&notification.title)
            .arg(&notification.message);
        cmd
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let mut cmd = if cfg!(target_os = "macos") {
            self.osascript(&notification)
        } else {
            self.notify_send(&notification)
        };

        let output = cmd
            .output()
            .await
            .map_err(|e| NotifyError::Failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::Failed(stderr.trim().to_string()));
        }

        Ok(())
    }
}

/// Escape special characters for AppleScript strings
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
