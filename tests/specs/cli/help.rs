//! CLI help and usage specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    tg_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("revert"))
        .stdout(predicate::str::contains("exists"))
        .stdout(predicate::str::contains("node"));
}

#[test]
fn revert_help_lists_session_and_all() {
    tg_bare()
        .args(["revert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("all"));
}

#[test]
fn version_prints_and_exits() {
    tg_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tg"));
}
