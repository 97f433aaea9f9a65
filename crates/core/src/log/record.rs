// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed session-log records.
//!
//! Each mutating operation is recorded as one variant with a typed payload.
//! `message()` renders the exact line format the field extractor understands,
//! and `parse()` turns a raw line back into the variant, so writer and parser
//! cannot drift apart.

use super::fields::{extract_fields, Fields, ParseError};
use super::marker::Marker;
use serde::{Deserialize, Serialize};

/// One recorded mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    // Node creations
    NewElement { iri: String },
    NewDefect { iri: String },
    NewAction { iri: String },
    NewOperation { iri: String },
    NewConstruction { iri: String },
    NewKpi { iri: String },

    // Blob operations
    LinkElementBlob { element_uuid: String, blob_uuid: String },
    NewBlob { blob_uuid: String },

    // Field updates
    UpdateAsDesigned { node_iri: String },
    UpdateAction { node_iri: String, dump_path: String },
    UpdateOperation { node_iri: String, dump_path: String },
    UpdateConstruction { node_iri: String, dump_path: String },
    RemovedParam {
        node_iri: String,
        field: String,
        previous_value: String,
    },
    AddedParam { node_iri: String, field: String },

    // Edge creations
    LinkElementType {
        node_iri: String,
        element_type_iri: String,
    },
    LinkConstrOperation {
        constr_iri: String,
        operation_iris: Vec<String>,
    },
    LinkOperationAction {
        operation_iri: String,
        action_iris: Vec<String>,
    },
    LinkActionAsBuilt {
        action_iri: String,
        target_iri: String,
    },
    LinkTaskType {
        node_iri: String,
        task_type_iri: String,
    },
}

impl LogRecord {
    /// The marker token this record carries.
    pub fn marker(&self) -> Marker {
        match self {
            LogRecord::NewElement { .. } => Marker::NewElement,
            LogRecord::NewDefect { .. } => Marker::NewDefect,
            LogRecord::NewAction { .. } => Marker::NewAction,
            LogRecord::NewOperation { .. } => Marker::NewOperation,
            LogRecord::NewConstruction { .. } => Marker::NewConstruction,
            LogRecord::NewKpi { .. } => Marker::NewKpi,
            LogRecord::LinkElementBlob { .. } => Marker::LinkElementBlob,
            LogRecord::NewBlob { .. } => Marker::NewBlob,
            LogRecord::UpdateAsDesigned { .. } => Marker::UpdateAsDesigned,
            LogRecord::UpdateAction { .. } => Marker::UpdateAction,
            LogRecord::UpdateOperation { .. } => Marker::UpdateOperation,
            LogRecord::UpdateConstruction { .. } => Marker::UpdateConstruction,
            LogRecord::RemovedParam { .. } => Marker::RemovedParam,
            LogRecord::AddedParam { .. } => Marker::AddedParam,
            LogRecord::LinkElementType { .. } => Marker::LinkElementType,
            LogRecord::LinkConstrOperation { .. } => Marker::LinkConstrOperation,
            LogRecord::LinkOperationAction { .. } => Marker::LinkOperationAction,
            LogRecord::LinkActionAsBuilt { .. } => Marker::LinkActionAsBuilt,
            LogRecord::LinkTaskType { .. } => Marker::LinkTaskType,
        }
    }

    /// Build the node-creation record for a creation marker.
    ///
    /// Returns `None` for markers outside the creation subset.
    pub fn node_created(marker: Marker, iri: impl Into<String>) -> Option<LogRecord> {
        let iri = iri.into();
        match marker {
            Marker::NewElement => Some(LogRecord::NewElement { iri }),
            Marker::NewDefect => Some(LogRecord::NewDefect { iri }),
            Marker::NewAction => Some(LogRecord::NewAction { iri }),
            Marker::NewOperation => Some(LogRecord::NewOperation { iri }),
            Marker::NewConstruction => Some(LogRecord::NewConstruction { iri }),
            Marker::NewKpi => Some(LogRecord::NewKpi { iri }),
            _ => None,
        }
    }

    /// Render the log-line message: token, separator, comma-joined payload.
    pub fn message(&self) -> String {
        let token = self.marker().token();
        match self {
            LogRecord::NewElement { iri }
            | LogRecord::NewDefect { iri }
            | LogRecord::NewAction { iri }
            | LogRecord::NewOperation { iri }
            | LogRecord::NewConstruction { iri }
            | LogRecord::NewKpi { iri } => format!("{token}: {iri}"),
            LogRecord::LinkElementBlob {
                element_uuid,
                blob_uuid,
            } => format!("{token}: {element_uuid}, {blob_uuid}"),
            LogRecord::NewBlob { blob_uuid } => format!("{token}: {blob_uuid}"),
            LogRecord::UpdateAsDesigned { node_iri } => format!("{token}: {node_iri}"),
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
            } => format!("{token}: {node_iri}, {dump_path}"),
            LogRecord::RemovedParam {
                node_iri,
                field,
                previous_value,
            } => format!("{token}: {node_iri}, {field}, {previous_value}"),
            LogRecord::AddedParam { node_iri, field } => {
                format!("{token}: {node_iri}, {field}")
            }
            LogRecord::LinkElementType {
                node_iri,
                element_type_iri,
            } => format!("{token}: {node_iri}, {element_type_iri}"),
            LogRecord::LinkConstrOperation {
                constr_iri,
                operation_iris,
            } => format!("{token}: {constr_iri}, [{}]", operation_iris.join(", ")),
            LogRecord::LinkOperationAction {
                operation_iri,
                action_iris,
            } => format!("{token}: {operation_iri}, [{}]", action_iris.join(", ")),
            LogRecord::LinkActionAsBuilt {
                action_iri,
                target_iri,
            } => format!("{token}: {action_iri}, {target_iri}"),
            LogRecord::LinkTaskType {
                node_iri,
                task_type_iri,
            } => format!("{token}: {node_iri}, {task_type_iri}"),
        }
    }

    /// Parse a raw log line into a typed record.
    ///
    /// `Ok(None)` means the line carries no recognized marker (skipped, not
    /// an error). A recognized marker with a payload that does not match its
    /// contract is a [`ParseError`].
    pub fn parse(line: &str) -> Result<Option<LogRecord>, ParseError> {
        let Some(marker) = Marker::find_in(line) else {
            return Ok(None);
        };
        let fields = extract_fields(line, marker.token())?;
        Self::from_fields(marker, fields).map(Some)
    }

    fn from_fields(marker: Marker, fields: Fields) -> Result<LogRecord, ParseError> {
        match marker {
            Marker::NewElement => {
                let [iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewElement { iri })
            }
            Marker::NewDefect => {
                let [iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewDefect { iri })
            }
            Marker::NewAction => {
                let [iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewAction { iri })
            }
            Marker::NewOperation => {
                let [iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewOperation { iri })
            }
            Marker::NewConstruction => {
                let [iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewConstruction { iri })
            }
            Marker::NewKpi => {
                let [iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewKpi { iri })
            }
            Marker::LinkElementBlob => {
                let [element_uuid, blob_uuid] = flat::<2>(marker, fields)?;
                Ok(LogRecord::LinkElementBlob {
                    element_uuid,
                    blob_uuid,
                })
            }
            Marker::NewBlob => {
                let [blob_uuid] = flat::<1>(marker, fields)?;
                Ok(LogRecord::NewBlob { blob_uuid })
            }
            Marker::UpdateAsDesigned => {
                let [node_iri] = flat::<1>(marker, fields)?;
                Ok(LogRecord::UpdateAsDesigned { node_iri })
            }
            Marker::UpdateAction => {
                let [node_iri, dump_path] = flat::<2>(marker, fields)?;
                Ok(LogRecord::UpdateAction {
                    node_iri,
                    dump_path,
                })
            }
            Marker::UpdateOperation => {
                let [node_iri, dump_path] = flat::<2>(marker, fields)?;
                Ok(LogRecord::UpdateOperation {
                    node_iri,
                    dump_path,
                })
            }
            Marker::UpdateConstruction => {
                let [node_iri, dump_path] = flat::<2>(marker, fields)?;
                Ok(LogRecord::UpdateConstruction {
                    node_iri,
                    dump_path,
                })
            }
            Marker::RemovedParam => {
                let [node_iri, field, previous_value] = flat::<3>(marker, fields)?;
                Ok(LogRecord::RemovedParam {
                    node_iri,
                    field,
                    previous_value,
                })
            }
            Marker::AddedParam => {
                let [node_iri, field] = flat::<2>(marker, fields)?;
                Ok(LogRecord::AddedParam { node_iri, field })
            }
            Marker::LinkElementType => {
                let [node_iri, element_type_iri] = flat::<2>(marker, fields)?;
                Ok(LogRecord::LinkElementType {
                    node_iri,
                    element_type_iri,
                })
            }
            Marker::LinkConstrOperation => {
                let (constr_iri, operation_iris) = listed(marker, fields)?;
                Ok(LogRecord::LinkConstrOperation {
                    constr_iri,
                    operation_iris,
                })
            }
            Marker::LinkOperationAction => {
                let (operation_iri, action_iris) = listed(marker, fields)?;
                Ok(LogRecord::LinkOperationAction {
                    operation_iri,
                    action_iris,
                })
            }
            Marker::LinkActionAsBuilt => {
                let [action_iri, target_iri] = flat::<2>(marker, fields)?;
                Ok(LogRecord::LinkActionAsBuilt {
                    action_iri,
                    target_iri,
                })
            }
            Marker::LinkTaskType => {
                let [node_iri, task_type_iri] = flat::<2>(marker, fields)?;
                Ok(LogRecord::LinkTaskType {
                    node_iri,
                    task_type_iri,
                })
            }
        }
    }
}

fn flat<const N: usize>(marker: Marker, fields: Fields) -> Result<[String; N], ParseError> {
    match fields {
        Fields::Flat(values) => {
            let found = values.len();
            values
                .try_into()
                .map_err(|_| ParseError::FieldCount {
                    marker: marker.token(),
                    expected: N,
                    found,
                })
        }
        Fields::WithList(..) => Err(ParseError::UnexpectedList {
            marker: marker.token(),
        }),
    }
}

fn listed(marker: Marker, fields: Fields) -> Result<(String, Vec<String>), ParseError> {
    match fields {
        Fields::WithList(head, items) => Ok((head, items)),
        Fields::Flat(_) => Err(ParseError::ExpectedList {
            marker: marker.token(),
        }),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
