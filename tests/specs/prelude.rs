//! Shared fixtures for CLI specs.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Store configuration with every endpoint and ontology term the revert
/// compensations resolve. The domain is unroutable, so any spec that
/// accidentally leaves simulation mode fails loudly.
pub const STORE_CONFIG: &str = r#"
version = "1"
domain = "https://store.example/"
log_dir = "logs"
token_file = "token.txt"

[api_urls]
get_find_elements = "https://store.example/api/find"
update_set = "https://store.example/api/update/set"
update_unset = "https://store.example/api/update/unset"
delete_avatar = "https://store.example/api/avatars/_ID_"
delete_blob = "https://store.example/api/blobs/_ID_"
unlink_blob = "https://store.example/api/blobs/unlink"

[ontology_uris]
isAsDesigned = "https://onto.example/isAsDesigned"
hasElementType = "https://onto.example/hasElementType"
hasOperation = "https://onto.example/hasOperation"
hasAction = "https://onto.example/hasAction"
hasTarget = "https://onto.example/hasTarget"
hasTaskType = "https://onto.example/hasTaskType"
"#;

pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Temp directory with a valid store config and token file.
    pub fn new() -> Self {
        let project = Self::bare();
        project.file("twingraph.toml", STORE_CONFIG);
        project.file("token.txt", "test-token\n");
        project
    }

    /// Temp directory with nothing in it.
    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the project root, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// `tg` against this project's config, simulation on.
    pub fn tg(&self) -> Command {
        let mut cmd = tg_bare();
        cmd.current_dir(self.path())
            .arg("--config")
            .arg(self.path().join("twingraph.toml"))
            .arg("--simulate");
        cmd
    }
}

/// `tg` with no arguments wired in.
pub fn tg_bare() -> Command {
    Command::cargo_bin("tg").unwrap()
}
