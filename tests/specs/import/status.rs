//! Status specs

use crate::prelude::*;

#[test]
fn fresh_document_is_idle_with_every_step_remaining() {
    let project = Project::with_step_command(RECORDING_STEP);
    project
        .hs()
        .args(&["status"])
        .passes()
        .stdout_has("Document: lifts")
        .stdout_has("State:     idle")
        .stdout_has("Remaining: exercises, routineFolders, routines, workouts");
}

#[test]
fn status_json_shows_checkpoint() {
    let project = Project::with_step_command(RECORDING_STEP);
    project.file(
        ".hs/lifts/import-progress.json",
        "{\"completedSteps\":[\"exercises\"],\"timestamp\":\"2026-01-05T10:00:00Z\",\"isResuming\":true}",
    );

    let run = project.hs().args(&["status", "--format", "json"]).passes();
    let json = run.json();
    assert_eq!(json["completedSteps"], serde_json::json!(["exercises"]));
    assert_eq!(
        json["remainingSteps"],
        serde_json::json!(["routineFolders", "routines", "workouts"])
    );
    assert_eq!(json["active"]["state"], "idle");
}

#[test]
fn status_reports_stale_flag_without_clearing_it() {
    let project = Project::with_step_command(RECORDING_STEP);
    project.file(
        ".hs/lifts/active-import.json",
        "{\"timestamp\":\"2020-01-01T00:00:00Z\"}",
    );

    project.hs().args(&["status"]).passes().stdout_has("stale");
    assert!(project.state_file("active-import").exists());
}

#[test]
fn document_flag_selects_other_state() {
    let project = Project::with_step_command(RECORDING_STEP);
    project.hs().args(&["run", "--document", "cardio"]).passes();

    assert!(project.path().join(".hs/cardio/identity.json").exists());
    assert!(!project.path().join(".hs/lifts").join("identity.json").exists());
}
