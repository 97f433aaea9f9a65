// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability APIs over the store.
//!
//! Each concern is an explicit trait (fetch, create, link, update, transfer,
//! revert); [`StoreClient`] composes injected parts (config, gateway, session
//! log, backups, id generator) and implements all of them.

mod client;
mod create;
mod fetch;
mod link;
mod revert_ops;
mod transfer;
mod update;

pub use client::StoreClient;

use crate::error::StoreError;
use crate::pages::Page;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outgoing edge of a graph node.
///
/// Edge lists are explicit and ordered; repeated link calls append without
/// deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(rename = "_label")]
    pub label: String,
    #[serde(rename = "_targetIRI")]
    pub target_iri: String,
}

impl Edge {
    pub fn new(label: impl Into<String>, target_iri: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_iri: target_iri.into(),
        }
    }
}

/// Optional attributes of an action node
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionSpec<'a> {
    pub task_type: Option<&'a str>,
    pub task_iri: Option<&'a str>,
    pub target_asbuilt_iri: Option<&'a str>,
    pub contractor: Option<&'a str>,
    pub process_start: Option<&'a str>,
    pub process_end: Option<&'a str>,
}

/// Optional attributes of an operation node
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationSpec<'a> {
    pub task_type: Option<&'a str>,
    pub target_activity_iri: Option<&'a str>,
    pub action_iris: &'a [String],
    pub process_start: Option<&'a str>,
    pub last_updated: Option<&'a str>,
    pub process_end: Option<&'a str>,
}

/// Optional attributes of a construction node
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructionSpec<'a> {
    pub production_method_type: Option<&'a str>,
    pub workpackage_iri: Option<&'a str>,
    pub operation_iris: &'a [String],
}

/// Attributes of a defects-per-work KPI node
#[derive(Debug, Clone, Copy)]
pub struct KpiSpec<'a> {
    pub task_type: &'a str,
    pub value: f64,
    pub reference_quantity: f64,
    pub sample_quantity: f64,
    pub interval_start: &'a str,
    pub interval_end: &'a str,
}

/// Read operations; unguarded, so they dial the store even in simulation
/// (except the identifier lookup, which hands out a placeholder).
pub trait FetchApi {
    /// Resolve an IRI to the store-internal identifier.
    fn uuid_for_iri(&self, iri: &str) -> Result<String, StoreError>;

    fn node_by_iri(&self, iri: &str) -> Result<Page, StoreError>;

    fn node_by_uuid(&self, uuid: &str) -> Result<Page, StoreError>;

    fn node_exists(&self, iri: &str) -> Result<bool, StoreError>;

    /// All element nodes, every page merged.
    fn element_nodes(&self) -> Result<Page, StoreError>;

    /// All as-performed construction nodes, every page merged.
    fn construction_nodes(&self) -> Result<Page, StoreError>;

    /// Operation nodes connected to a construction, every page merged.
    fn operations_of_construction(&self, constr_iri: &str) -> Result<Page, StoreError>;

    /// Action nodes connected to an operation, every page merged.
    fn actions_of_operation(&self, oper_iri: &str) -> Result<Page, StoreError>;

    fn blobs_for_node(&self, node_uuid: &str) -> Result<serde_json::Value, StoreError>;

    fn download_blob(&self, blob_uuid: &str) -> Result<String, StoreError>;
}

/// Node creation; guarded, records a node-creation marker on success
pub trait CreateApi {
    fn create_element_node(
        &self,
        iri: &str,
        progress: i64,
        timestamp: &str,
        element_type: &str,
        target_iri: &str,
    ) -> Result<bool, StoreError>;

    fn create_defect_node(
        &self,
        iri: &str,
        defect_class: &str,
        criticality: i64,
        timestamp: &str,
        defect_type: &str,
    ) -> Result<bool, StoreError>;

    fn create_action_node(&self, iri: &str, spec: &ActionSpec<'_>) -> Result<bool, StoreError>;

    fn create_operation_node(&self, iri: &str, spec: &OperationSpec<'_>)
        -> Result<bool, StoreError>;

    fn create_construction_node(
        &self,
        iri: &str,
        spec: &ConstructionSpec<'_>,
    ) -> Result<bool, StoreError>;

    fn create_kpi_node(&self, iri: &str, spec: &KpiSpec<'_>) -> Result<bool, StoreError>;
}

/// Edge creation; guarded, records a link marker on success
pub trait LinkApi {
    fn link_element_blob(&self, element_uuid: &str, blob_uuid: &str) -> Result<bool, StoreError>;

    fn link_element_type(&self, node_iri: &str, element_type_iri: &str)
        -> Result<bool, StoreError>;

    /// Link operations to a construction in one call. The log line records
    /// the newly linked IRIs so the compensation unlinks exactly these.
    fn link_constr_operations(
        &self,
        constr_iri: &str,
        operation_iris: &[String],
    ) -> Result<bool, StoreError>;

    /// Link actions to an operation in one call; same logging contract as
    /// [`link_constr_operations`](Self::link_constr_operations).
    fn link_operation_actions(
        &self,
        oper_iri: &str,
        action_iris: &[String],
    ) -> Result<bool, StoreError>;

    fn link_action_asbuilt(&self, action_iri: &str, target_iri: &str)
        -> Result<bool, StoreError>;

    fn link_task_type(&self, node_iri: &str, task_type_iri: &str) -> Result<bool, StoreError>;
}

/// Node updates; guarded, records an update marker on success
pub trait UpdateApi {
    /// Set the as-designed flag on a node.
    fn set_as_designed(&self, node_iri: &str, value: bool) -> Result<bool, StoreError>;

    /// Update an action node, snapshotting it to a backup dump first.
    fn update_action_node(&self, iri: &str, spec: &ActionSpec<'_>) -> Result<bool, StoreError>;

    /// Update an operation node, snapshotting it to a backup dump first.
    fn update_operation_node(&self, iri: &str, spec: &OperationSpec<'_>)
        -> Result<bool, StoreError>;

    /// Update a construction node, snapshotting it to a backup dump first.
    fn update_construction_node(
        &self,
        iri: &str,
        spec: &ConstructionSpec<'_>,
    ) -> Result<bool, StoreError>;

    fn add_param(&self, node_iri: &str, field: &str, value: &str) -> Result<bool, StoreError>;

    /// Remove a field, logging its previous value so the removal can be
    /// compensated.
    fn delete_param(
        &self,
        node_iri: &str,
        field: &str,
        previous_value: &str,
    ) -> Result<bool, StoreError>;
}

/// Blob transfer; guarded, records `NEW_BLOB` on success
pub trait TransferApi {
    /// Upload a local file and return the new blob identifier.
    fn send_blob(&self, filename: &str, path: &Path) -> Result<String, StoreError>;
}

/// Inverse operations used by the revert engine.
///
/// These are guarded like any mutation but never write session-log lines:
/// a compensation is not itself compensated.
pub trait RevertApi {
    /// Delete a node given its IRI (identifier resolved via lookup).
    fn delete_node(&self, iri: &str) -> Result<(), StoreError>;

    fn delete_node_by_uuid(&self, node_uuid: &str) -> Result<(), StoreError>;

    fn unlink_element_blob(&self, element_uuid: &str, blob_uuid: &str) -> Result<(), StoreError>;

    fn delete_blob(&self, blob_uuid: &str) -> Result<(), StoreError>;

    /// Drop the as-designed flag from a node.
    fn clear_as_designed(&self, node_iri: &str) -> Result<(), StoreError>;

    /// Overwrite a node with the snapshot taken before its update.
    fn restore_node(&self, node_iri: &str, dump_path: &Path) -> Result<(), StoreError>;

    fn readd_param(&self, node_iri: &str, field: &str, value: &str) -> Result<(), StoreError>;

    fn remove_param(&self, node_iri: &str, field: &str) -> Result<(), StoreError>;

    fn unlink_element_type(&self, node_iri: &str, element_type_iri: &str)
        -> Result<(), StoreError>;

    /// Unlink operations from a construction in one call.
    fn unlink_constr_operations(
        &self,
        constr_iri: &str,
        operation_iris: &[String],
    ) -> Result<(), StoreError>;

    /// Unlink actions from an operation in one call.
    fn unlink_operation_actions(
        &self,
        oper_iri: &str,
        action_iris: &[String],
    ) -> Result<(), StoreError>;

    fn unlink_action_target(&self, action_iri: &str, target_iri: &str)
        -> Result<(), StoreError>;

    fn unlink_task_type(&self, node_iri: &str, task_type_iri: &str) -> Result<(), StoreError>;
}
