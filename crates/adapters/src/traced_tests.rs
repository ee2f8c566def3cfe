// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::executor::FakeStepExecutor;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn ctx() -> StepContext {
    StepContext {
        api_key: "secret-api-key".to_string(),
        document: "training-log".to_string(),
    }
}

#[test]
fn traced_import_logs_step_and_count() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeStepExecutor::new();
        fake.set_report(StepName::Workouts, StepReport::new(17));
        TracedStepExecutor::new(fake)
            .import_step(StepName::Workouts, &ctx())
            .await
    });

    assert_eq!(result.unwrap().imported, 17);
    assert!(logs.contains("step.import"), "Logs:\n{}", logs);
    assert!(logs.contains("workouts"), "Logs:\n{}", logs);
    assert!(logs.contains("imported=17"), "Logs:\n{}", logs);
}

#[test]
fn traced_import_logs_failure() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeStepExecutor::new();
        fake.fail_on(StepName::Routines, "sheet is protected");
        TracedStepExecutor::new(fake)
            .import_step(StepName::Routines, &ctx())
            .await
    });

    assert!(result.is_err());
    assert!(logs.contains("step failed"), "Logs:\n{}", logs);
    assert!(logs.contains("sheet is protected"), "Logs:\n{}", logs);
}

#[test]
fn traced_import_never_logs_api_key() {
    let (logs, _) = with_tracing(|| async {
        TracedStepExecutor::new(FakeStepExecutor::new())
            .import_step(StepName::Exercises, &ctx())
            .await
    });

    assert!(!logs.contains("secret-api-key"), "Logs:\n{}", logs);
}

#[test]
fn traced_confirm_logs_outcome() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeStepExecutor::new();
        fake.set_confirmable("sort-sheet");
        TracedStepExecutor::new(fake)
            .confirm_deferred("sort-sheet", &ctx())
            .await
    });

    assert!(result.unwrap());
    assert!(logs.contains("step.confirm"), "Logs:\n{}", logs);
    assert!(logs.contains("confirmed"), "Logs:\n{}", logs);
}
