//! Watch loop specs

use crate::prelude::*;

#[test]
fn watch_fires_immediately_and_stops_after_max_triggers() {
    let project = Project::with_step_command(RECORDING_STEP);

    project
        .hs()
        .args(&["watch", "--interval", "1s", "--max-triggers", "2"])
        .passes();

    // second trigger starts a fresh pass since the first one completed
    assert_eq!(project.steps_seen().len(), 8);
}

#[test]
fn watch_writes_log_file() {
    let project = Project::with_step_command(RECORDING_STEP);

    project
        .hs()
        .env("HS_LOG", "info")
        .args(&[
            "watch",
            "--interval",
            "1s",
            "--max-triggers",
            "1",
            "--log-file",
            "logs/hs.log",
        ])
        .passes();

    assert!(project.read("logs/hs.log").contains("import run completed"));
}

#[test]
fn watch_keeps_going_after_a_failed_trigger() {
    let project = Project::with_step_command(r#"echo "$HS_STEP" >> steps.log; exit 1"#);

    project
        .hs()
        .args(&["watch", "--interval", "1s", "--max-triggers", "2"])
        .passes();

    assert_eq!(project.steps_seen(), vec!["exercises", "exercises"]);
}

#[test]
fn watch_reports_flag_left_by_its_own_paused_run() {
    let project = Project::empty();
    project.config(&format!(
        "document = \"lifts\"\n\n[quota]\ndaily_limit = \"10m\"\n\n[steps]\ncommand = '''{}'''\n",
        RECORDING_STEP
    ));
    project.file(
        ".hs/lifts/quota-usage.json",
        &format!(
            "{{\"executions\":[{{\"timestamp\":\"{}\",\"durationMs\":590000}}]}}",
            utc_now()
        ),
    );

    let run = project
        .hs()
        .env("HS_LOG", "info")
        .args(&["watch", "--interval", "1s", "--max-triggers", "2"])
        .passes();

    assert!(run.stderr.contains("trigger paused for quota"));
    assert!(run
        .stderr
        .contains("active flag still held (possibly by this watcher's paused run)"));
    assert!(project.steps_seen().is_empty());
}
