//! Configuration and argument failure specs

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn missing_config_flag_is_a_usage_error() {
    tg_bare()
        .args(["revert", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn missing_config_file_fails() {
    let project = Project::bare();
    tg_bare()
        .current_dir(project.path())
        .args(["--config", "no-such.toml", "revert", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn malformed_config_toml_fails() {
    let project = Project::bare();
    project.file("twingraph.toml", "domain = [");
    project.file("token.txt", "test-token");

    project
        .tg()
        .args(["revert", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn missing_token_file_fails() {
    let project = Project::bare();
    project.file("twingraph.toml", STORE_CONFIG);
    // No token.txt written.

    project
        .tg()
        .args(["revert", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn empty_token_file_fails() {
    let project = Project::bare();
    project.file("twingraph.toml", STORE_CONFIG);
    project.file("token.txt", "  \n");

    project
        .tg()
        .args(["revert", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token file is empty"));
}

#[test]
fn invalid_domain_fails() {
    let project = Project::bare();
    project.file(
        "twingraph.toml",
        r#"
domain = "not a url"
log_dir = "logs"
token_file = "token.txt"
"#,
    );
    project.file("token.txt", "test-token");

    project
        .tg()
        .args(["revert", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid URL"));
}
