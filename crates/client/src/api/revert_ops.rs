// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inverse operations.
//!
//! These undo previously logged mutations. They are guarded like any other
//! mutation, fail loudly (a rejected compensation is an error, not a
//! `false`), and never write session-log lines of their own.

use super::client::NodeDoc;
use super::{Edge, FetchApi, RevertApi, StoreClient};
use crate::backup::BackupStore;
use crate::error::StoreError;
use crate::transport::Method;
use serde_json::json;
use std::path::Path;
use tg_core::{validate_identifier, validate_iri};

impl StoreClient {
    /// Remove labelled edges from a node via the unset endpoint.
    fn unlink_edges(
        &self,
        node_iri: &str,
        edges: &[Edge],
        action: &'static str,
    ) -> Result<(), StoreError> {
        validate_iri(node_iri)?;
        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .edges(edges)
            .into_payload();
        self.guarded_expect(Method::Put, &self.api_url("update_unset")?, Some(&payload), action)
    }
}

impl RevertApi for StoreClient {
    fn delete_node(&self, iri: &str) -> Result<(), StoreError> {
        let node_uuid = self.uuid_for_iri(iri)?;
        self.delete_node_by_uuid(&node_uuid)
    }

    fn delete_node_by_uuid(&self, node_uuid: &str) -> Result<(), StoreError> {
        validate_identifier(node_uuid)?;

        // Safety net: snapshot the node before it disappears. A simulated
        // delete removes nothing, so there is no state to snapshot.
        if !self.simulation() {
            let node = self.node_by_uuid(node_uuid)?;
            let dump_path = self.backups.dump(node_uuid, &node)?;
            tracing::debug!(node_uuid, dump = %dump_path.display(), "node backed up before delete");
        }

        let url = self.config.api_url_with_id("delete_avatar", node_uuid)?;
        self.guarded_expect(Method::Delete, &url, None, "delete node")
    }

    fn unlink_element_blob(&self, element_uuid: &str, blob_uuid: &str) -> Result<(), StoreError> {
        validate_identifier(element_uuid)?;
        validate_identifier(blob_uuid)?;

        let payload = json!({
            "blob_uuid": blob_uuid,
            "avatar_uuids": [element_uuid],
            "ignore_conflicts": false
        });
        self.guarded_expect(
            Method::Post,
            &self.api_url("unlink_blob")?,
            Some(&payload),
            "unlink blob",
        )
    }

    fn delete_blob(&self, blob_uuid: &str) -> Result<(), StoreError> {
        validate_identifier(blob_uuid)?;
        let url = self.config.api_url_with_id("delete_blob", blob_uuid)?;
        self.guarded_expect(Method::Delete, &url, None, "delete blob")
    }

    fn clear_as_designed(&self, node_iri: &str) -> Result<(), StoreError> {
        validate_iri(node_iri)?;
        // "delete" is a placeholder value; the unset endpoint only looks at
        // the key.
        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .field(self.onto("isAsDesigned")?, "delete")
            .into_payload();
        self.guarded_expect(
            Method::Put,
            &self.api_url("update_unset")?,
            Some(&payload),
            "clear as-designed flag",
        )
    }

    fn restore_node(&self, node_iri: &str, dump_path: &Path) -> Result<(), StoreError> {
        validate_iri(node_iri)?;
        let node = BackupStore::load_payload(dump_path)?;
        let payload = json!([node]);
        self.guarded_expect(
            Method::Put,
            &self.api_url("update_set")?,
            Some(&payload),
            "restore node",
        )
    }

    fn readd_param(&self, node_iri: &str, field: &str, value: &str) -> Result<(), StoreError> {
        validate_iri(node_iri)?;
        validate_identifier(field)?;
        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .field(field, value)
            .into_payload();
        self.guarded_expect(
            Method::Put,
            &self.api_url("update_set")?,
            Some(&payload),
            "re-add field",
        )
    }

    fn remove_param(&self, node_iri: &str, field: &str) -> Result<(), StoreError> {
        validate_iri(node_iri)?;
        validate_identifier(field)?;
        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .field(field, "delete")
            .into_payload();
        self.guarded_expect(
            Method::Put,
            &self.api_url("update_unset")?,
            Some(&payload),
            "remove field",
        )
    }

    fn unlink_element_type(
        &self,
        node_iri: &str,
        element_type_iri: &str,
    ) -> Result<(), StoreError> {
        let edge = Edge::new(self.onto("hasElementType")?, element_type_iri);
        self.unlink_edges(node_iri, &[edge], "unlink element type")
    }

    fn unlink_constr_operations(
        &self,
        constr_iri: &str,
        operation_iris: &[String],
    ) -> Result<(), StoreError> {
        let has_operation = self.onto("hasOperation")?;
        let edges: Vec<Edge> = operation_iris
            .iter()
            .map(|iri| Edge::new(has_operation.clone(), iri.clone()))
            .collect();
        self.unlink_edges(constr_iri, &edges, "unlink operations")
    }

    fn unlink_operation_actions(
        &self,
        oper_iri: &str,
        action_iris: &[String],
    ) -> Result<(), StoreError> {
        let has_action = self.onto("hasAction")?;
        let edges: Vec<Edge> = action_iris
            .iter()
            .map(|iri| Edge::new(has_action.clone(), iri.clone()))
            .collect();
        self.unlink_edges(oper_iri, &edges, "unlink actions")
    }

    fn unlink_action_target(&self, action_iri: &str, target_iri: &str) -> Result<(), StoreError> {
        let edge = Edge::new(self.onto("hasTarget")?, target_iri);
        self.unlink_edges(action_iri, &[edge], "unlink as-built target")
    }

    fn unlink_task_type(&self, node_iri: &str, task_type_iri: &str) -> Result<(), StoreError> {
        let edge = Edge::new(self.onto("hasTaskType")?, task_type_iri);
        self.unlink_edges(node_iri, &[edge], "unlink task type")
    }
}
