// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node creation.
//!
//! Every method posts one node document to the `add_node` endpoint and, on
//! success, records the matching node-creation marker.

use super::client::NodeDoc;
use super::{ActionSpec, ConstructionSpec, CreateApi, Edge, KpiSpec, OperationSpec, StoreClient};
use crate::error::StoreError;
use crate::transport::Method;
use tg_core::{validate_iri, LogRecord};

impl CreateApi for StoreClient {
    fn create_element_node(
        &self,
        iri: &str,
        progress: i64,
        timestamp: &str,
        element_type: &str,
        target_iri: &str,
    ) -> Result<bool, StoreError> {
        validate_iri(iri)?;
        validate_iri(target_iri)?;

        let mut doc = NodeDoc::new(self.config.domain(), iri)
            .classes(&[&self.onto("classElement")?, element_type])
            .visibility(0)
            .field(self.onto("isAsDesigned")?, false)
            .field(self.onto("timeStamp")?, timestamp)
            .field(self.onto("progress")?, progress);
        // Fully detected geometry is only asserted at 100% progress.
        if progress == 100 {
            doc = doc.field(
                self.onto("hasGeometryStatusType")?,
                self.onto("completelyDetected")?,
            );
        }
        let payload = doc
            .edges(&[Edge::new(self.onto("intentStatusRelation")?, target_iri)])
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("add_node")?,
            &payload,
            "create element",
        )?;
        Ok(self.log_success(ok, LogRecord::NewElement { iri: iri.into() }))
    }

    fn create_defect_node(
        &self,
        iri: &str,
        defect_class: &str,
        criticality: i64,
        timestamp: &str,
        defect_type: &str,
    ) -> Result<bool, StoreError> {
        validate_iri(iri)?;

        let payload = NodeDoc::new(self.config.domain(), iri)
            .classes(&[defect_class])
            .visibility(0)
            .field(self.onto("hasDefectType")?, defect_type)
            .field(self.onto("timeStamp")?, timestamp)
            .field(self.onto("defectCriticality")?, criticality)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("add_node")?,
            &payload,
            "create defect",
        )?;
        Ok(self.log_success(ok, LogRecord::NewDefect { iri: iri.into() }))
    }

    fn create_action_node(&self, iri: &str, spec: &ActionSpec<'_>) -> Result<bool, StoreError> {
        validate_iri(iri)?;

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
            .classes(&[&self.onto("asPerformedAction")?])
            .visibility(0)
            .opt_field(self.onto("constructionContractor")?, spec.contractor)
            .opt_field(self.onto("processStart")?, spec.process_start)
            .opt_field(self.onto("processEnd")?, spec.process_end)
            .edges(&edges)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("add_node")?,
            &payload,
            "create action",
        )?;
        Ok(self.log_success(ok, LogRecord::NewAction { iri: iri.into() }))
    }

    fn create_operation_node(
        &self,
        iri: &str,
        spec: &OperationSpec<'_>,
    ) -> Result<bool, StoreError> {
        validate_iri(iri)?;

        let has_action = self.onto("hasAction")?;
        let mut edges: Vec<Edge> = spec
            .action_iris
            .iter()
            .map(|action| Edge::new(has_action.clone(), action.clone()))
            .collect();
        if let Some(activity) = spec.target_activity_iri {
            edges.push(Edge::new(self.onto("intentStatusRelation")?, activity));
        }
        if let Some(task_type) = spec.task_type {
            edges.push(Edge::new(self.onto("hasTaskType")?, task_type));
        }

        let payload = NodeDoc::new(self.config.domain(), iri)
            .classes(&[&self.onto("asPerformedOperation")?])
            .visibility(0)
            .opt_field(self.onto("processStart")?, spec.process_start)
            .opt_field(self.onto("lastUpdatedOn")?, spec.last_updated)
            .opt_field(self.onto("processEnd")?, spec.process_end)
            .edges(&edges)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("add_node")?,
            &payload,
            "create operation",
        )?;
        Ok(self.log_success(ok, LogRecord::NewOperation { iri: iri.into() }))
    }

    fn create_construction_node(
        &self,
        iri: &str,
        spec: &ConstructionSpec<'_>,
    ) -> Result<bool, StoreError> {
        validate_iri(iri)?;

        let has_operation = self.onto("hasOperation")?;
        let mut edges: Vec<Edge> = spec
            .operation_iris
            .iter()
            .map(|oper| Edge::new(has_operation.clone(), oper.clone()))
            .collect();
        if let Some(method_type) = spec.production_method_type {
            edges.push(Edge::new(self.onto("hasProductionMethodType")?, method_type));
        }
        if let Some(workpackage) = spec.workpackage_iri {
            edges.push(Edge::new(self.onto("intentStatusRelation")?, workpackage));
        }

        let payload = NodeDoc::new(self.config.domain(), iri)
            .classes(&[&self.onto("asPerformedConstruction")?])
            .visibility(0)
            .edges(&edges)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("add_node")?,
            &payload,
            "create construction",
        )?;
        Ok(self.log_success(ok, LogRecord::NewConstruction { iri: iri.into() }))
    }

    fn create_kpi_node(&self, iri: &str, spec: &KpiSpec<'_>) -> Result<bool, StoreError> {
        validate_iri(iri)?;
        let domain = self
            .config
            .kpi_domain()
            .unwrap_or_else(|| self.config.domain())
            .to_string();

        let payload = NodeDoc::new(&domain, iri)
            .classes(&[&self.onto("kpiNumberOfDefectsPerWork")?])
            .visibility(0)
            .field(self.onto("kpiHasTaskType")?, spec.task_type)
            .field(self.onto("kpiValue")?, spec.value)
            .field(self.onto("kpiReferenceQuantity")?, spec.reference_quantity)
            .field(self.onto("kpiSampleQuantity")?, spec.sample_quantity)
            .field(self.onto("kpiIntervalStartDate")?, spec.interval_start)
            .field(self.onto("kpiIntervalEndDate")?, spec.interval_end)
            .into_payload();

        let ok = self.guarded_mutation(
            Method::Post,
            &self.api_url("add_node")?,
            &payload,
            "create kpi",
        )?;
        Ok(self.log_success(ok, LogRecord::NewKpi { iri: iri.into() }))
    }
}
