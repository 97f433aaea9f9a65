// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reverse-chronological session revert.
//!
//! A session log is walked from its last line to its first so that each
//! compensation runs before the one for the mutation that preceded it (later
//! mutations may depend on earlier ones). One bad line never aborts the
//! walk: parse failures, lookup failures, and store rejections are logged
//! with the line's timestamp and counted, then the walk continues.

use crate::api::RevertApi;
use crate::error::StoreError;
use std::path::{Path, PathBuf};
use tg_core::{timestamp_of, LogRecord};

/// Per-file outcome of a revert pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevertReport {
    /// Non-empty lines visited.
    pub lines: u64,
    /// Lines whose compensation succeeded.
    pub compensated: u64,
    /// Lines carrying no recognized marker.
    pub skipped: u64,
    /// Lines that failed to parse or to compensate.
    pub failed: u64,
}

/// Issue the inverse operation for one recorded mutation.
///
/// This is the closed marker-to-inverse mapping: every record variant has
/// exactly one compensation. Multi-target link records are undone with a
/// single unlink call covering the whole sub-list.
pub fn compensate<R>(api: &R, record: &LogRecord) -> Result<(), StoreError>
where
    R: RevertApi + ?Sized,
{
    match record {
        LogRecord::NewElement { iri }
        | LogRecord::NewDefect { iri }
        | LogRecord::NewAction { iri }
        | LogRecord::NewOperation { iri }
        | LogRecord::NewConstruction { iri }
        | LogRecord::NewKpi { iri } => api.delete_node(iri),
        LogRecord::LinkElementBlob {
            element_uuid,
            blob_uuid,
        } => api.unlink_element_blob(element_uuid, blob_uuid),
        LogRecord::NewBlob { blob_uuid } => api.delete_blob(blob_uuid),
        LogRecord::UpdateAsDesigned { node_iri } => api.clear_as_designed(node_iri),
        LogRecord::UpdateAction {
            node_iri,
            dump_path,
        }
        | LogRecord::UpdateOperation {
            node_iri,
            dump_path,
        }
        | LogRecord::UpdateConstruction {
            node_iri,
            dump_path,
        } => api.restore_node(node_iri, Path::new(dump_path)),
        LogRecord::RemovedParam {
            node_iri,
            field,
            previous_value,
        } => api.readd_param(node_iri, field, previous_value),
        LogRecord::AddedParam { node_iri, field } => api.remove_param(node_iri, field),
        LogRecord::LinkElementType {
            node_iri,
            element_type_iri,
        } => api.unlink_element_type(node_iri, element_type_iri),
        LogRecord::LinkConstrOperation {
            constr_iri,
            operation_iris,
        } => api.unlink_constr_operations(constr_iri, operation_iris),
        LogRecord::LinkOperationAction {
            operation_iri,
            action_iris,
        } => api.unlink_operation_actions(operation_iri, action_iris),
        LogRecord::LinkActionAsBuilt {
            action_iri,
            target_iri,
        } => api.unlink_action_target(action_iri, target_iri),
        LogRecord::LinkTaskType {
            node_iri,
            task_type_iri,
        } => api.unlink_task_type(node_iri, task_type_iri),
    }
}

/// Roll one session back, newest line first.
///
/// A missing or unreadable log file is a fatal precondition failure; every
/// per-line failure is contained.
pub fn revert_session<R>(api: &R, log_path: &Path) -> Result<RevertReport, StoreError>
where
    R: RevertApi + ?Sized,
{
    let content = std::fs::read_to_string(log_path)?;
    let mut report = RevertReport::default();

    for line in content.lines().rev() {
        if line.trim().is_empty() {
            continue;
        }
        report.lines += 1;
        let stamp = timestamp_of(line);

        match LogRecord::parse(line) {
            Ok(Some(record)) => match compensate(api, &record) {
                Ok(()) => {
                    report.compensated += 1;
                    tracing::info!(timestamp = stamp, marker = %record.marker(), "entry reverted");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(timestamp = stamp, error = %e, "failed to revert entry");
                }
            },
            Ok(None) => {
                report.skipped += 1;
                tracing::debug!(timestamp = stamp, "no marker in line, skipped");
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!(timestamp = stamp, error = %e, "unparseable session log line");
            }
        }
    }

    Ok(report)
}

/// Roll every session log in a directory back, newest session first.
///
/// Session log files are named by start time, so the descending filename
/// sort is reverse-chronological. Each file gets the same per-line fault
/// tolerance as [`revert_session`]; a missing directory or unreadable file
/// is fatal.
pub fn revert_sessions<R>(
    api: &R,
    dir: &Path,
) -> Result<Vec<(PathBuf, RevertReport)>, StoreError>
where
    R: RevertApi + ?Sized,
{
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "log"))
        .collect();
    files.sort();
    files.reverse();

    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        tracing::info!(file = %file.display(), "reverting session");
        let report = revert_session(api, &file)?;
        reports.push((file, report));
    }
    Ok(reports)
}

#[cfg(test)]
#[path = "revert_tests.rs"]
mod tests;
