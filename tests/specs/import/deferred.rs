//! Deferred post-processing specs

use crate::prelude::*;

const DEFER_SORT: &str =
    r#"if [ "$HS_STEP" = workouts ]; then echo "deferred: sortWorkouts"; fi; echo 2"#;

#[test]
fn deferred_operation_is_reported_and_listed() {
    let project = Project::with_step_command(DEFER_SORT);

    project
        .hs()
        .args(&["run"])
        .passes()
        .stdout_has("Pending post-processing: sortWorkouts");

    project
        .hs()
        .args(&["deferred"])
        .passes()
        .stdout_has("sortWorkouts");
}

#[test]
fn confirmed_operation_is_cleared_on_next_run() {
    let project = Project::empty();
    project.config(&format!(
        "document = \"lifts\"\n\n[steps]\ncommand = '''{}'''\nconfirm = '''test -f sorted'''\n",
        DEFER_SORT
    ));
    project.hs().args(&["run"]).passes();

    project.file("sorted", "");
    project.file(
        "hs.toml",
        "document = \"lifts\"\n\n[steps]\ncommand = 'echo 0'\nconfirm = '''test -f sorted'''\n",
    );
    project
        .hs()
        .args(&["run"])
        .passes()
        .stdout_lacks("Pending post-processing");

    project
        .hs()
        .args(&["deferred"])
        .passes()
        .stdout_has("No pending operations");
}

#[test]
fn complete_marks_operation_done() {
    let project = Project::with_step_command(DEFER_SORT);
    project.hs().args(&["run"]).passes();

    project
        .hs()
        .args(&["deferred", "complete", "sortWorkouts"])
        .passes()
        .stdout_has("Marked sortWorkouts complete");
    assert!(!project.state_file("deferred-post-processing").exists());

    project
        .hs()
        .args(&["deferred", "complete", "sortWorkouts"])
        .fails()
        .stderr_has("no pending operation");
}

#[test]
fn reset_keeps_deferred_unless_asked() {
    let project = Project::with_step_command(DEFER_SORT);
    project.hs().args(&["run"]).passes();

    project.hs().args(&["reset"]).passes();
    assert!(project.state_file("deferred-post-processing").exists());

    project.hs().args(&["reset", "--deferred"]).passes();
    assert!(!project.state_file("deferred-post-processing").exists());
}
