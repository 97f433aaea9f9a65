//! Single-session revert specs.
//!
//! The store domain is unroutable, so "0 failed" doubles as proof that a
//! simulated compensation never dialed the network.

use crate::prelude::*;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn reverts_every_line_of_a_session_log() {
    let project = Project::new();
    let log = project.file(
        "old-session.log",
        concat!(
            "05-Aug-26 10:00:01 : NEW_ELEMENT_IRI: https://store.example/objects/e-1\n",
            "05-Aug-26 10:00:02 : NEW_LINK_NODE_TASK_TYPE: https://store.example/objects/e-1, https://onto.example/tt-1\n",
            "05-Aug-26 10:00:03 : UPDATE_isAsDesigned_PARAM_NODE_OPERATION: https://store.example/objects/e-1\n",
        ),
    );

    project
        .tg()
        .args(["revert", "session"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 compensated, 0 skipped, 0 failed"));
}

#[test]
fn restores_updated_nodes_from_backup_dumps() {
    let project = Project::new();
    let dump = project.file(
        "dumps/a-1.json",
        &json!({
            "items": [{
                "_domain": "https://store.example/",
                "_iri": "https://store.example/objects/a-1",
                "_classes": ["https://onto.example/AsPerformedAction"]
            }],
            "size": 1
        })
        .to_string(),
    );
    let log = project.file(
        "old-session.log",
        &format!(
            "05-Aug-26 10:00:01 : UPDATE_ACTION_IRI: https://store.example/objects/a-1, {}\n",
            dump.display()
        ),
    );

    project
        .tg()
        .args(["revert", "session"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 compensated, 0 skipped, 0 failed"));
}

#[test]
fn bad_line_does_not_abort_the_pass() {
    let project = Project::new();
    let log = project.file(
        "old-session.log",
        concat!(
            "05-Aug-26 10:00:01 : NEW_ELEMENT_IRI: https://store.example/objects/e-1\n",
            "05-Aug-26 10:00:02 : NEW_LINK_ELEMENT_BLOB: only-one-field\n",
            "05-Aug-26 10:00:03 : NEW_ELEMENT_IRI: https://store.example/objects/e-2\n",
        ),
    );

    project
        .tg()
        .args(["revert", "session"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 compensated, 0 skipped, 1 failed"));
}

#[test]
fn unmarked_lines_are_skipped() {
    let project = Project::new();
    let log = project.file(
        "old-session.log",
        concat!(
            "05-Aug-26 10:00:00 : session opened\n",
            "05-Aug-26 10:00:01 : NEW_BLOB: blob-1\n",
        ),
    );

    project
        .tg()
        .args(["revert", "session"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 compensated, 1 skipped, 0 failed"));
}

#[test]
fn missing_log_file_is_fatal() {
    let project = Project::new();

    project
        .tg()
        .args(["revert", "session", "no-such-session.log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to revert"));
}
