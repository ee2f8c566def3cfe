//! Checkpoint and resume specs

use crate::prelude::*;

const FAIL_ON_ROUTINES: &str =
    r#"echo "$HS_STEP" >> steps.log; if [ "$HS_STEP" = routines ] && [ ! -f fixed ]; then echo "sheet locked" >&2; exit 2; fi; echo 1"#;

#[test]
fn failed_step_keeps_earlier_checkpoint() {
    let project = Project::with_step_command(FAIL_ON_ROUTINES);

    project
        .hs()
        .args(&["run"])
        .fails()
        .stderr_has("Importing routines failed")
        .stderr_has("sheet locked")
        .stderr_has("exercises, routineFolders");

    let progress: serde_json::Value =
        serde_json::from_str(&project.read(".hs/lifts/import-progress.json")).unwrap();
    assert_eq!(
        progress["completedSteps"],
        serde_json::json!(["exercises", "routineFolders"])
    );
    assert!(!project.state_file("active-import").exists());
}

#[test]
fn next_run_resumes_at_failed_step() {
    let project = Project::with_step_command(FAIL_ON_ROUTINES);
    project.hs().args(&["run"]).fails();

    project.file("fixed", "");
    project.hs().args(&["run"]).passes().stdout_has("Import complete");

    assert_eq!(
        project.steps_seen(),
        vec!["exercises", "routineFolders", "routines", "routines", "workouts"]
    );
}

#[test]
fn reset_starts_over_from_first_step() {
    let project = Project::with_step_command(FAIL_ON_ROUTINES);
    project.hs().args(&["run"]).fails();

    project
        .hs()
        .args(&["reset"])
        .passes()
        .stdout_eq("Reset import state for lifts\n");
    assert!(!project.state_file("import-progress").exists());

    project.file("fixed", "");
    project.hs().args(&["run"]).passes();
    assert_eq!(project.steps_seen()[3..], ["exercises", "routineFolders", "routines", "workouts"]);
}

#[test]
fn changing_api_key_discards_checkpoint() {
    let project = Project::with_step_command(FAIL_ON_ROUTINES);
    project.hs().args(&["run"]).fails();

    project.file("fixed", "");
    project
        .hs()
        .env("HEVY_API_KEY", "someone-else")
        .args(&["run"])
        .passes();

    assert_eq!(project.steps_seen()[3..], ["exercises", "routineFolders", "routines", "workouts"]);
}

#[test]
fn exhausted_daily_quota_pauses_before_first_step() {
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

    project
        .hs()
        .args(&["run"])
        .passes()
        .stdout_has("Paused: daily execution time")
        .stdout_has("Remaining: exercises, routineFolders, routines, workouts");
    assert!(project.steps_seen().is_empty());
}
