// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node backup dumps.
//!
//! Updates and deletions that cannot be inverted from the log line alone
//! snapshot the node first. Each run writes into its own `nodes-<stamp>`
//! directory; the dump path is recorded in the session-log line and read
//! back verbatim by the revert path. Dumps are never cleaned up here.

use crate::error::StoreError;
use crate::pages::Page;
use std::path::{Path, PathBuf};

/// Per-run directory of node snapshots
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    /// Create the dump directory (and parents) if needed.
    pub fn create(dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Snapshot the fetch response for a node, keyed by the last path
    /// segment of its IRI or identifier. Returns the dump path.
    pub fn dump(&self, node_ref: &str, response: &Page) -> Result<PathBuf, StoreError> {
        let name = node_ref.rsplit('/').next().unwrap_or(node_ref);
        let path = self.dir.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(response)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Read a dump back and return the node payload (`items[0]`).
    pub fn load_payload(path: &Path) -> Result<serde_json::Value, StoreError> {
        let text = std::fs::read_to_string(path)?;
        let page: Page = serde_json::from_str(&text)?;
        page.items
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::EmptyDump {
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
#[path = "backup_tests.rs"]
mod tests;
