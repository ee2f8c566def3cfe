//! Behavioral specifications for the hs CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, exit codes and the state files left behind.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// import/
#[path = "specs/import/deferred.rs"]
mod import_deferred;
#[path = "specs/import/resume.rs"]
mod import_resume;
#[path = "specs/import/run.rs"]
mod import_run;
#[path = "specs/import/status.rs"]
mod import_status;
#[path = "specs/import/watch.rs"]
mod import_watch;
