//! Help and completion specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let project = Project::empty();
    project
        .hs()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("watch")
        .stdout_has("status")
        .stdout_has("reset")
        .stdout_has("deferred");
}

#[test]
fn completions_are_generated_without_config() {
    let project = Project::empty();
    project.config("not = [valid toml");
    project
        .hs()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("_hs()");
}
