// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session-log marker tokens.
//!
//! Every mutating call appends one line whose message carries exactly one of
//! these uppercase tokens. The token fully determines the payload shape that
//! follows it; writer and parser agree on that shape through
//! [`LogRecord`](super::LogRecord).

use serde::{Deserialize, Serialize};

/// Operation kind token embedded in a session-log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    // Node-creation markers: payload is a single IRI and the compensation
    // deletes the node outright.
    NewElement,
    NewDefect,
    NewAction,
    NewOperation,
    NewConstruction,
    NewKpi,

    // Link/update/param markers: payload shape varies per marker.
    LinkElementBlob,
    NewBlob,
    UpdateAsDesigned,
    UpdateAction,
    UpdateOperation,
    UpdateConstruction,
    RemovedParam,
    AddedParam,
    LinkElementType,
    LinkConstrOperation,
    LinkOperationAction,
    LinkActionAsBuilt,
    LinkTaskType,
}

impl Marker {
    /// Every marker, in detection priority order.
    ///
    /// Link/update markers are scanned before the node-creation set, matching
    /// the dispatch order of the revert engine. No token is a substring of
    /// another, so the order only decides ties that cannot occur in practice.
    pub const ALL: [Marker; 19] = [
        Marker::LinkElementBlob,
        Marker::NewBlob,
        Marker::UpdateAsDesigned,
        Marker::UpdateAction,
        Marker::UpdateOperation,
        Marker::UpdateConstruction,
        Marker::RemovedParam,
        Marker::AddedParam,
        Marker::LinkElementType,
        Marker::LinkConstrOperation,
        Marker::LinkOperationAction,
        Marker::LinkActionAsBuilt,
        Marker::LinkTaskType,
        Marker::NewElement,
        Marker::NewDefect,
        Marker::NewAction,
        Marker::NewOperation,
        Marker::NewConstruction,
        Marker::NewKpi,
    ];

    /// The token string as it appears in log lines.
    pub fn token(self) -> &'static str {
        match self {
            Marker::NewElement => "NEW_ELEMENT_IRI",
            Marker::NewDefect => "NEW_DEFECT_IRI",
            Marker::NewAction => "NEW_ACTION_IRI",
            Marker::NewOperation => "NEW_OPERATION_IRI",
            Marker::NewConstruction => "NEW_CONSTRUCTION_IRI",
            Marker::NewKpi => "NEW_KPI_IRI",
            Marker::LinkElementBlob => "NEW_LINK_ELEMENT_BLOB",
            Marker::NewBlob => "NEW_BLOB",
            Marker::UpdateAsDesigned => "UPDATE_isAsDesigned_PARAM_NODE_OPERATION",
            Marker::UpdateAction => "UPDATE_ACTION_IRI",
            Marker::UpdateOperation => "UPDATE_OPERATION_IRI",
            Marker::UpdateConstruction => "UPDATE_CONSTRUCTION_IRI",
            Marker::RemovedParam => "REMOVED_PARAM_NODE_OPERATION",
            Marker::AddedParam => "ADD_PARAM_NODE_OPERATION",
            Marker::LinkElementType => "NEW_LINK_ELEMENT_ELEMENT_TYPE",
            Marker::LinkConstrOperation => "NEW_LINK_CONSTR_OPERATION",
            Marker::LinkOperationAction => "NEW_LINK_OPERATION_ACTION",
            Marker::LinkActionAsBuilt => "NEW_LINK_ACTION_ASBUILT",
            Marker::LinkTaskType => "NEW_LINK_NODE_TASK_TYPE",
        }
    }

    /// Whether this marker records a node creation.
    pub fn is_node_creation(self) -> bool {
        matches!(
            self,
            Marker::NewElement
                | Marker::NewDefect
                | Marker::NewAction
                | Marker::NewOperation
                | Marker::NewConstruction
                | Marker::NewKpi
        )
    }

    /// Find the first marker whose token occurs anywhere in `line`.
    pub fn find_in(line: &str) -> Option<Marker> {
        Marker::ALL
            .iter()
            .copied()
            .find(|m| line.contains(m.token()))
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
