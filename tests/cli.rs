//! CLI integration tests for paths that do not need a running engine.
//!
//! Configuration errors are detected before any engine connection, so
//! malformed filters and templates must fail identically with or without
//! a daemon.

use assert_cmd::Command;
use predicates::prelude::*;

fn dockview() -> Command {
    Command::cargo_bin("dockview").unwrap()
}

#[test]
fn malformed_filter_token_exits_one() {
    dockview()
        .args(["--filters", "a=%zz"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid filter token"))
        .stderr(predicate::str::contains("a=%zz"));
}

#[test]
fn malformed_repeated_filter_exits_one() {
    dockview()
        .args(["--filter", "status=running", "--filter", "b=%"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("b=%"));
}

#[test]
fn malformed_template_exits_one_and_names_index() {
    dockview()
        .args(["--template", "{{ this | json }}", "--template", "{% if"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template #1"));
}

#[test]
fn config_errors_leave_stdout_empty() {
    dockview()
        .args(["--filters", "a=%zz"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_lists_all_flags() {
    dockview()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--filters")
                .and(predicate::str::contains("--filter"))
                .and(predicate::str::contains("--template"))
                .and(predicate::str::contains("--verbose")),
        );
}
