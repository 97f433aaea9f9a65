//! Multi-session revert specs.
//!
//! Session log files are named by start time; the directory pass must run
//! newest session first so compensations stay reverse-chronological across
//! session boundaries.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn processes_session_logs_newest_first() {
    let project = Project::new();
    project.file(
        "old/session-20260801-090000.log",
        "ts : NEW_BLOB: blob-old\n",
    );
    project.file(
        "old/session-20260803-090000.log",
        "ts : NEW_BLOB: blob-mid\n",
    );
    project.file(
        "old/session-20260805-090000.log",
        "ts : NEW_BLOB: blob-new\n",
    );
    // Not a session log; must not appear in the pass.
    project.file("old/notes.txt", "ts : NEW_BLOB: blob-x\n");

    let assert = project
        .tg()
        .args(["revert", "all", "--dir"])
        .arg(project.path().join("old"))
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt").not());

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let newest = stdout.find("session-20260805-090000.log").unwrap();
    let mid = stdout.find("session-20260803-090000.log").unwrap();
    let oldest = stdout.find("session-20260801-090000.log").unwrap();
    assert!(newest < mid && mid < oldest, "unexpected order:\n{stdout}");
}

#[test]
fn defaults_to_the_sessions_directory_of_the_log_dir() {
    let project = Project::new();
    project.file(
        "logs/sessions/session-20250101-000000.log",
        "ts : NEW_BLOB: blob-1\n",
    );

    project
        .tg()
        .args(["revert", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session-20250101-000000.log"))
        .stdout(predicate::str::contains("1 compensated, 0 skipped, 0 failed"));
}

#[test]
fn empty_directory_reports_no_session_logs() {
    let project = Project::new();
    std::fs::create_dir_all(project.path().join("empty")).unwrap();

    project
        .tg()
        .args(["revert", "all", "--dir"])
        .arg(project.path().join("empty"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No session logs"));
}

#[test]
fn missing_directory_is_fatal() {
    let project = Project::new();

    project
        .tg()
        .args(["revert", "all", "--dir", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to revert sessions"));
}
