//! Error reporting specs

use crate::prelude::*;

#[test]
fn run_without_step_command_explains_config() {
    let project = Project::empty();
    project
        .hs()
        .args(&["run"])
        .fails()
        .stderr_has("No step command configured")
        .stderr_has("[steps]");
}

#[test]
fn run_without_api_key_fails_before_any_step() {
    let project = Project::with_step_command(RECORDING_STEP);
    project
        .hs()
        .env_remove("HEVY_API_KEY")
        .args(&["run"])
        .fails()
        .stderr_has("No API key configured")
        .stderr_has("HEVY_API_KEY");

    assert!(project.steps_seen().is_empty());
    assert!(!project.state_file("import-progress").exists());
    assert!(!project.state_file("active-import").exists());
}

#[test]
fn custom_credential_variable_is_honoured() {
    let project = Project::empty();
    project.config(&format!(
        "document = \"lifts\"\n\n[credentials]\nenv = \"MY_KEY\"\n\n[steps]\ncommand = '''{}'''\n",
        RECORDING_STEP
    ));

    project
        .hs()
        .args(&["run"])
        .fails()
        .stderr_has("MY_KEY is unset");

    project
        .hs()
        .env("MY_KEY", "other")
        .args(&["run"])
        .passes()
        .stdout_has("Import complete");
}

#[test]
fn malformed_config_is_reported() {
    let project = Project::empty();
    project.config("active_timeout = \"soon\"\n");
    project
        .hs()
        .args(&["status"])
        .fails()
        .stderr_has("Could not load config");
}
