// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The store client façade.

use super::Edge;
use crate::backup::BackupStore;
use crate::error::StoreError;
use crate::pages::Page;
use crate::transport::{Gateway, Method};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tg_core::{Config, FileSessionLog, IdGen, LogRecord, SessionLog, UuidIdGen};

/// Client over one store session.
///
/// Composes the configuration, the mutation gateway, the session log, the
/// node backup store, and the placeholder-id generator. All parts can be
/// injected; `connect` wires the production set.
pub struct StoreClient {
    pub(super) config: Arc<Config>,
    pub(super) gateway: Gateway,
    pub(super) session: Arc<dyn SessionLog>,
    pub(super) backups: BackupStore,
    pub(super) ids: Arc<dyn IdGen>,
}

impl StoreClient {
    /// Open a session: file-backed session log under
    /// `<log_path>/sessions/`, backup dumps under `<log_path>/nodes-<stamp>/`.
    pub fn connect(config: Arc<Config>, simulation: bool) -> Result<Self, StoreError> {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        let session_path: PathBuf = config
            .log_path()
            .join("sessions")
            .join(format!("session-{stamp}.log"));
        let session = Arc::new(FileSessionLog::open(&session_path)?);
        tracing::info!(path = %session_path.display(), "session log opened");

        let backups = BackupStore::create(&config.log_path().join(format!("nodes-{stamp}")))?;
        let gateway = Gateway::new(config.token(), simulation);

        Ok(Self {
            config,
            gateway,
            session,
            backups,
            ids: Arc::new(UuidIdGen),
        })
    }

    /// Assemble a client from injected parts: an external session logger for
    /// multi-process workers, fakes for tests.
    pub fn with_parts(
        config: Arc<Config>,
        gateway: Gateway,
        session: Arc<dyn SessionLog>,
        backups: BackupStore,
        ids: Arc<dyn IdGen>,
    ) -> Self {
        Self {
            config,
            gateway,
            session,
            backups,
            ids,
        }
    }

    /// Whether simulation mode is on.
    pub fn simulation(&self) -> bool {
        self.gateway.simulation()
    }

    /// Switch simulation mode, returning the previous value.
    pub fn set_simulation(&self, on: bool) -> bool {
        self.gateway.set_simulation(on)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backups(&self) -> &BackupStore {
        &self.backups
    }

    // ---- shared plumbing for the capability impls ----

    pub(super) fn api_url(&self, name: &str) -> Result<String, StoreError> {
        Ok(self.config.api_url(name)?.to_string())
    }

    pub(super) fn onto(&self, name: &str) -> Result<String, StoreError> {
        Ok(self.config.ontology_uri(name)?.to_string())
    }

    /// POST a find query (unguarded), following the `next` cursor the caller
    /// passes through from the pagination walker.
    pub(super) fn find(
        &self,
        payload: &serde_json::Value,
        url: Option<&str>,
    ) -> Result<Page, StoreError> {
        let req_url = match url {
            Some(u) => u.to_string(),
            None => self.api_url("get_find_elements")?,
        };
        let response = self
            .gateway
            .request(Method::Post, &req_url, Some(&payload.to_string()))?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Issue a guarded mutation. `Ok(true)` covers simulated calls; a store
    /// rejection is reported and returned as `Ok(false)`.
    pub(super) fn guarded_mutation(
        &self,
        method: Method,
        url: &str,
        payload: &serde_json::Value,
        action: &'static str,
    ) -> Result<bool, StoreError> {
        match self
            .gateway
            .guarded(method, url, Some(&payload.to_string()))?
        {
            None => Ok(true),
            Some(response) if response.ok() => Ok(true),
            Some(response) => {
                tracing::error!(action, status = response.status, "store rejected mutation");
                Ok(false)
            }
        }
    }

    /// Guarded mutation on a compensation path: rejection is an error.
    pub(super) fn guarded_expect(
        &self,
        method: Method,
        url: &str,
        payload: Option<&serde_json::Value>,
        action: &'static str,
    ) -> Result<(), StoreError> {
        let body = payload.map(|p| p.to_string());
        match self.gateway.guarded(method, url, body.as_deref())? {
            None => Ok(()),
            Some(response) if response.ok() => Ok(()),
            Some(response) => Err(StoreError::Rejected {
                action,
                status: response.status,
            }),
        }
    }

    /// Record the session-log line for a successful (or simulated) mutation.
    pub(super) fn log_success(&self, ok: bool, record: LogRecord) -> bool {
        if ok {
            self.session.record(&record);
        }
        ok
    }

    /// Outgoing edges already present on a node, in store order.
    pub(super) fn existing_edges(&self, node_iri: &str) -> Result<Vec<Edge>, StoreError> {
        let page = self.find(
            &json!({"query": {"$domain": self.config.domain(), "$iri": node_iri}}),
            None,
        )?;
        let Some(node) = page.items.into_iter().next() else {
            return Err(StoreError::Lookup {
                iri: node_iri.to_string(),
            });
        };
        match node.get("_outE") {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Ok(Vec::new()),
        }
    }
}

/// Builder for node documents sent to the add/update endpoints.
///
/// Field keys are ontology URIs, so they are inserted dynamically; edge
/// lists keep their insertion order.
pub(super) struct NodeDoc {
    doc: serde_json::Map<String, serde_json::Value>,
}

impl NodeDoc {
    pub(super) fn new(domain: &str, iri: &str) -> Self {
        let mut doc = serde_json::Map::new();
        doc.insert("_domain".to_string(), json!(domain));
        doc.insert("_iri".to_string(), json!(iri));
        Self { doc }
    }

    pub(super) fn classes(mut self, classes: &[&str]) -> Self {
        self.doc.insert("_classes".to_string(), json!(classes));
        self
    }

    pub(super) fn visibility(mut self, visibility: i64) -> Self {
        self.doc.insert("_visibility".to_string(), json!(visibility));
        self
    }

    pub(super) fn field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.doc.insert(key.into(), value.into());
        self
    }

    pub(super) fn opt_field(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub(super) fn edges(mut self, edges: &[Edge]) -> Self {
        self.doc.insert("_outE".to_string(), json!(edges));
        self
    }

    /// The store's update/add endpoints take a one-element array of node
    /// documents.
    pub(super) fn into_payload(self) -> serde_json::Value {
        json!([serde_json::Value::Object(self.doc)])
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
