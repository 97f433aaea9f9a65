// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node updates.
//!
//! The structural updates snapshot the node to a backup dump before the
//! mutation; the dump path lands in the session-log line so the revert path
//! can restore the node verbatim.

use super::client::NodeDoc;
use super::{ActionSpec, ConstructionSpec, Edge, FetchApi, OperationSpec, StoreClient, UpdateApi};
use crate::error::StoreError;
use crate::transport::Method;
use std::path::PathBuf;
use tg_core::{validate_identifier, validate_iri, LogRecord};

impl StoreClient {
    /// Snapshot a node before updating it. Returns the dump path recorded in
    /// the log line.
    fn backup_node(&self, node_iri: &str) -> Result<PathBuf, StoreError> {
        let page = self.node_by_iri(node_iri)?;
        self.backups.dump(node_iri, &page)
    }
}

impl UpdateApi for StoreClient {
    fn set_as_designed(&self, node_iri: &str, value: bool) -> Result<bool, StoreError> {
        validate_iri(node_iri)?;

        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .field(self.onto("isAsDesigned")?, value)
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "set as-designed flag",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::UpdateAsDesigned {
                node_iri: node_iri.into(),
            },
        ))
    }

    fn update_action_node(&self, iri: &str, spec: &ActionSpec<'_>) -> Result<bool, StoreError> {
        validate_iri(iri)?;
        let dump_path = self.backup_node(iri)?;

        let mut edges = Vec::new();
        if let Some(target) = spec.target_asbuilt_iri {
            edges.push(Edge::new(self.onto("hasTarget")?, target));
        }
        if let Some(task) = spec.task_iri {
            edges.push(Edge::new(self.onto("intentStatusRelation")?, task));
        }
        if let Some(task_type) = spec.task_type {
            edges.push(Edge::new(self.onto("hasTaskType")?, task_type));
        }

        let payload = NodeDoc::new(self.config.domain(), iri)
            .opt_field(self.onto("constructionContractor")?, spec.contractor)
            .opt_field(self.onto("processStart")?, spec.process_start)
            .opt_field(self.onto("processEnd")?, spec.process_end)
            .edges(&edges)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "update action",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::UpdateAction {
                node_iri: iri.into(),
                dump_path: dump_path.display().to_string(),
            },
        ))
    }

    fn update_operation_node(
        &self,
        iri: &str,
        spec: &OperationSpec<'_>,
    ) -> Result<bool, StoreError> {
        validate_iri(iri)?;
        let dump_path = self.backup_node(iri)?;

        // New action edges are appended after whatever the node already has.
        let mut edges = if spec.action_iris.is_empty() {
            Vec::new()
        } else {
            self.existing_edges(iri)?
        };
        let has_action = self.onto("hasAction")?;
        edges.extend(
            spec.action_iris
                .iter()
                .map(|action| Edge::new(has_action.clone(), action.clone())),
        );
        if let Some(activity) = spec.target_activity_iri {
            edges.push(Edge::new(self.onto("intentStatusRelation")?, activity));
        }
        if let Some(task_type) = spec.task_type {
            edges.push(Edge::new(self.onto("hasTaskType")?, task_type));
        }

        let payload = NodeDoc::new(self.config.domain(), iri)
            .opt_field(self.onto("processStart")?, spec.process_start)
            .opt_field(self.onto("lastUpdatedOn")?, spec.last_updated)
            .opt_field(self.onto("processEnd")?, spec.process_end)
            .edges(&edges)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "update operation",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::UpdateOperation {
                node_iri: iri.into(),
                dump_path: dump_path.display().to_string(),
            },
        ))
    }

    fn update_construction_node(
        &self,
        iri: &str,
        spec: &ConstructionSpec<'_>,
    ) -> Result<bool, StoreError> {
        validate_iri(iri)?;
        let dump_path = self.backup_node(iri)?;

        let mut edges = if spec.operation_iris.is_empty() {
            Vec::new()
        } else {
            self.existing_edges(iri)?
        };
        let has_operation = self.onto("hasOperation")?;
        edges.extend(
            spec.operation_iris
                .iter()
                .map(|oper| Edge::new(has_operation.clone(), oper.clone())),
        );
        if let Some(method_type) = spec.production_method_type {
            edges.push(Edge::new(self.onto("hasProductionMethodType")?, method_type));
        }
        if let Some(workpackage) = spec.workpackage_iri {
            edges.push(Edge::new(self.onto("intentStatusRelation")?, workpackage));
        }

        let payload = NodeDoc::new(self.config.domain(), iri)
            .edges(&edges)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "update construction",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::UpdateConstruction {
                node_iri: iri.into(),
                dump_path: dump_path.display().to_string(),
            },
        ))
    }

    fn add_param(&self, node_iri: &str, field: &str, value: &str) -> Result<bool, StoreError> {
        validate_iri(node_iri)?;
        validate_identifier(field)?;

        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .field(field, value)
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_set")?,
            &payload,
            "add field",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::AddedParam {
                node_iri: node_iri.into(),
                field: field.into(),
            },
        ))
    }

    fn delete_param(
        &self,
        node_iri: &str,
        field: &str,
        previous_value: &str,
    ) -> Result<bool, StoreError> {
        validate_iri(node_iri)?;
        validate_identifier(field)?;
        validate_identifier(previous_value)?;

        // The endpoint needs a value for the field being unset; "delete" is
        // a placeholder to keep the document valid.
        let payload = NodeDoc::new(self.config.domain(), node_iri)
            .field(field, "delete")
            .into_payload();
        let ok = self.guarded_mutation(
            Method::Put,
            &self.api_url("update_unset")?,
            &payload,
            "remove field",
        )?;
        Ok(self.log_success(
            ok,
            LogRecord::RemovedParam {
                node_iri: node_iri.into(),
                field: field.into(),
                previous_value: previous_value.into(),
            },
        ))
    }
}
