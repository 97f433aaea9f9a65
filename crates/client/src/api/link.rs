// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edge creation.
//!
//! Multi-target links fetch the node's current edge list first and append
//! the new edges; the store's `update_set` replaces the whole `_outE` list,
//! so dropping the existing edges would disconnect the node.

use super::client::NodeDoc;
use super::{Edge, LinkApi, StoreClient};
use crate::error::StoreError;
use crate::transport::Method;
use serde_json::json;
use tg_core::{validate_identifier, validate_iri, LogRecord, ValidationError};

impl LinkApi for StoreClient {
    fn link_element_blob(&self, element_uuid: &str, blob_uuid: &str) -> Result<bool, StoreError> {
        validate_identifier(element_uuid)?;
        validate_identifier(blob_uuid)?;

        let payload = json!({
            "blob_uuid": blob_uuid,
            "avatar_uuids": [element_uuid],
            "ignore_conflicts": false
        });
        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("link_blob")?,
            &payload,
            "link blob",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::LinkElementBlob {
                element_uuid: element_uuid.into(),
                blob_uuid: blob_uuid.into(),
            },
        ))
    }

    fn link_element_type(
        &self,
        node_iri: &str,
        element_type_iri: &str,
    ) -> Result<bool, StoreError> {
        validate_iri(node_iri)?;
        validate_iri(element_type_iri)?;

        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .edges(&[Edge::new(self.onto("hasElementType")?, element_type_iri)])
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "link element type",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::LinkElementType {
                node_iri: node_iri.into(),
                element_type_iri: element_type_iri.into(),
            },
        ))
    }

    fn link_constr_operations(
        &self,
        constr_iri: &str,
        operation_iris: &[String],
    ) -> Result<bool, StoreError> {
        validate_iri(constr_iri)?;
        if operation_iris.is_empty() {
            return Err(ValidationError::Empty.into());
        }
        for iri in operation_iris {
            validate_iri(iri)?;
        }

        let has_operation = self.onto("hasOperation")?;
        let mut edges = self.existing_edges(constr_iri)?;
        edges.extend(
            operation_iris
                .iter()
                .map(|iri| Edge::new(has_operation.clone(), iri.clone())),
        );

        let payload = NodeDoc::new(self.config.domain(), constr_iri)
            .edges(&edges)
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "link operations",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::LinkConstrOperation {
                constr_iri: constr_iri.into(),
                operation_iris: operation_iris.to_vec(),
            },
        ))
    }

    fn link_operation_actions(
        &self,
        oper_iri: &str,
        action_iris: &[String],
    ) -> Result<bool, StoreError> {
        validate_iri(oper_iri)?;
        if action_iris.is_empty() {
            return Err(ValidationError::Empty.into());
        }
        for iri in action_iris {
            validate_iri(iri)?;
        }

        let has_action = self.onto("hasAction")?;
        let mut edges = self.existing_edges(oper_iri)?;
        edges.extend(
            action_iris
                .iter()
                .map(|iri| Edge::new(has_action.clone(), iri.clone())),
        );

        let payload = NodeDoc::new(self.config.domain(), oper_iri)
            .edges(&edges)
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "link actions",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::LinkOperationAction {
                operation_iri: oper_iri.into(),
                action_iris: action_iris.to_vec(),
            },
        ))
    }

    fn link_action_asbuilt(&self, action_iri: &str, target_iri: &str) -> Result<bool, StoreError> {
        validate_iri(action_iri)?;
        validate_iri(target_iri)?;

        let payload = NodeDoc::new(self.config.domain(), action_iri)
            .edges(&[Edge::new(self.onto("hasTarget")?, target_iri)])
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "link as-built target",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::LinkActionAsBuilt {
                action_iri: action_iri.into(),
                target_iri: target_iri.into(),
            },
        ))
    }

    fn link_task_type(&self, node_iri: &str, task_type_iri: &str) -> Result<bool, StoreError> {
        validate_iri(node_iri)?;
        validate_iri(task_type_iri)?;

        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .edges(&[Edge::new(self.onto("hasTaskType")?, task_type_iri)])
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "link task type",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::LinkTaskType {
                node_iri: node_iri.into(),
                task_type_iri: task_type_iri.into(),
            },
        ))
    }
}
