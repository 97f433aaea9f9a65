// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session log writers.
//!
//! One line per successful mutation: `<timestamp> : <message>`. The sink is
//! polymorphic over anything that can record a line with a timestamp, so
//! multi-process callers can route every worker through one centralized
//! logger instead of opening a file per process.

use super::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Timestamp format at the head of every session-log line.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%y %H:%M:%S";

/// The timestamp prefix of a session-log line (everything before `" : "`).
pub fn timestamp_of(line: &str) -> &str {
    match line.find(" : ") {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

/// Sink for session-log records
pub trait SessionLog: Send + Sync {
    /// Record one successful mutation.
    fn record(&self, record: &LogRecord);
}

/// Append-only file-backed session log.
///
/// Created at session start and never explicitly closed; the handle is
/// released at process teardown. Write failures are reported through the
/// diagnostic log and never fail the mutation that triggered them.
pub struct FileSessionLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSessionLog {
    /// Open or create the log file, creating parent directories as needed.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionLog for FileSessionLog {
    fn record(&self, record: &LogRecord) {
        let line = format!(
            "{} : {}\n",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.message()
        );
        match self.file.lock() {
            Ok(mut file) => {
                if let Err(e) = file.write_all(line.as_bytes()) {
                    tracing::warn!(
                        error = %e,
                        path = %self.path.display(),
                        "failed to append session log line"
                    );
                }
            }
            Err(_) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "session log lock poisoned; line dropped"
                );
            }
        }
    }
}

/// In-memory session log for tests
#[derive(Default)]
pub struct MemorySessionLog {
    lines: Mutex<Vec<String>>,
}

impl MemorySessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lines in append order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Parsed-back records in append order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lines()
            .iter()
            .filter_map(|line| LogRecord::parse(line).ok().flatten())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionLog for MemorySessionLog {
    fn record(&self, record: &LogRecord) {
        let line = format!(
            "{} : {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            record.message()
        );
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

/// Session log that discards everything
#[derive(Clone, Copy, Default)]
pub struct NoopSessionLog;

impl SessionLog for NoopSessionLog {
    fn record(&self, _record: &LogRecord) {}
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
