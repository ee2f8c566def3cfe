//! Full import run specs

use crate::prelude::*;

#[test]
fn run_imports_every_step_in_order() {
    let project = Project::with_step_command(RECORDING_STEP);

    project
        .hs()
        .args(&["run"])
        .passes()
        .stdout_has("exercises")
        .stdout_has("workouts")
        .stdout_has("Import complete");

    assert_eq!(
        project.steps_seen(),
        vec!["exercises", "routineFolders", "routines", "workouts"]
    );
}

#[test]
fn completed_run_leaves_no_checkpoint_or_active_flag() {
    let project = Project::with_step_command(RECORDING_STEP);
    project.hs().args(&["run"]).passes();

    assert!(!project.state_file("import-progress").exists());
    assert!(!project.state_file("active-import").exists());
    assert!(project.state_file("identity").exists());
    assert!(project.state_file("quota-usage").exists());
}

#[test]
fn step_receives_document_and_key() {
    let project =
        Project::with_step_command(r#"echo "$HS_DOCUMENT:$HS_API_KEY" >> env.log; echo 0"#);
    project.hs().args(&["run"]).passes();

    let seen = project.read("env.log");
    assert_eq!(seen.lines().next(), Some(format!("lifts:{}", API_KEY).as_str()));
}

#[test]
fn run_json_output_reports_outcome() {
    let project = Project::with_step_command("echo 7");
    let run = project.hs().args(&["run", "--format", "json"]).passes();

    let json = run.json();
    assert_eq!(json["outcome"], "completed");
    assert_eq!(json["steps"].as_array().unwrap().len(), 4);
    assert_eq!(json["steps"][0]["step"], "exercises");
    assert_eq!(json["steps"][0]["imported"], 7);
}

#[test]
fn live_active_flag_skips_run() {
    let project = Project::with_step_command(RECORDING_STEP);
    let now = utc_now();
    project.file(
        ".hs/lifts/active-import.json",
        &format!("{{\"timestamp\":\"{}\"}}", now),
    );

    project
        .hs()
        .args(&["run"])
        .passes()
        .stdout_has("already running");
    assert!(project.steps_seen().is_empty());
}

#[test]
fn stale_active_flag_is_taken_over() {
    let project = Project::with_step_command(RECORDING_STEP);
    project.file(
        ".hs/lifts/active-import.json",
        "{\"timestamp\":\"2020-01-01T00:00:00Z\"}",
    );

    project
        .hs()
        .args(&["run"])
        .passes()
        .stdout_has("Import complete");
    assert_eq!(project.steps_seen().len(), 4);
}
