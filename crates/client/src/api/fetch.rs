// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read operations.

use super::{FetchApi, StoreClient};
use crate::error::StoreError;
use crate::pages::{fetch_all, Page};
use crate::transport::Method;
use serde_json::json;
use tg_core::validate_iri;

impl StoreClient {
    /// Find-query for nodes reachable over one labelled edge, filtered by
    /// target class.
    fn connected_query(
        &self,
        node_iri: &str,
        edge_term: &str,
        class_term: &str,
    ) -> Result<serde_json::Value, StoreError> {
        let label = self.onto(edge_term)?;
        let class_uri = self.onto(class_term)?;
        let domain = self.config.domain();

        let mut head = serde_json::Map::new();
        head.insert("$domain".to_string(), json!(domain));
        head.insert("$iri".to_string(), json!(node_iri));
        head.insert(format!("->{label}"), json!({ "$alias": edge_term }));

        Ok(json!({
            "query": [
                head,
                {
                    "$alias": edge_term,
                    "$domain": domain,
                    "$classes": { "$contains": class_uri, "$inheritance": true }
                }
            ],
            "return": edge_term
        }))
    }
}

impl FetchApi for StoreClient {
    fn uuid_for_iri(&self, iri: &str) -> Result<String, StoreError> {
        validate_iri(iri)?;
        if self.simulation() {
            return Ok(self.ids.next());
        }
        let page = self.find(
            &json!({"query": {"$domain": self.config.domain(), "$iri": iri}}),
            None,
        )?;
        page.items
            .first()
            .and_then(|node| node.get("_uuid"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| StoreError::Lookup {
                iri: iri.to_string(),
            })
    }

    fn node_by_iri(&self, iri: &str) -> Result<Page, StoreError> {
        validate_iri(iri)?;
        self.find(
            &json!({"query": {"$domain": self.config.domain(), "$iri": iri}}),
            None,
        )
    }

    fn node_by_uuid(&self, uuid: &str) -> Result<Page, StoreError> {
        self.find(
            &json!({"query": {"$domain": self.config.domain(), "$uuid": uuid}}),
            None,
        )
    }

    fn node_exists(&self, iri: &str) -> Result<bool, StoreError> {
        Ok(self.node_by_iri(iri)?.size != 0)
    }

    fn element_nodes(&self) -> Result<Page, StoreError> {
        let payload = json!({
            "query": {
                "$domain": self.config.domain(),
                "$classes": {
                    "$contains": self.onto("classElement")?,
                    "$inheritance": true
                }
            }
        });
        fetch_all(|url| self.find(&payload, url))
    }

    fn construction_nodes(&self) -> Result<Page, StoreError> {
        let payload = json!({
            "query": {
                "$domain": self.config.domain(),
                "$classes": {
                    "$contains": self.onto("asPerformedConstruction")?,
                    "$inheritance": true
                }
            }
        });
        fetch_all(|url| self.find(&payload, url))
    }

    fn operations_of_construction(&self, constr_iri: &str) -> Result<Page, StoreError> {
        validate_iri(constr_iri)?;
        let payload = self.connected_query(constr_iri, "hasOperation", "asPerformedOperation")?;
        fetch_all(|url| self.find(&payload, url))
    }

    fn actions_of_operation(&self, oper_iri: &str) -> Result<Page, StoreError> {
        validate_iri(oper_iri)?;
        let payload = self.connected_query(oper_iri, "hasAction", "asPerformedAction")?;
        fetch_all(|url| self.find(&payload, url))
    }

    fn blobs_for_node(&self, node_uuid: &str) -> Result<serde_json::Value, StoreError> {
        let url = self.config.api_url_with_id("get_blobs_per_element", node_uuid)?;
        let response = self.gateway.request(Method::Get, &url, None)?;
        Ok(response.json()?)
    }

    fn download_blob(&self, blob_uuid: &str) -> Result<String, StoreError> {
        let url = self.config.api_url_with_id("download_blob", blob_uuid)?;
        let response = self.gateway.request(Method::Get, &url, None)?;
        Ok(response.body)
    }
}
