// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn as_line(record: &LogRecord) -> String {
    format!("05-Aug-26 10:15:00 : {}", record.message())
}

fn roundtrip(record: LogRecord) {
    let parsed = LogRecord::parse(&as_line(&record)).unwrap();
    assert_eq!(parsed, Some(record));
}

#[parameterized(
    element = { Marker::NewElement },
    defect = { Marker::NewDefect },
    action = { Marker::NewAction },
    operation = { Marker::NewOperation },
    construction = { Marker::NewConstruction },
    kpi = { Marker::NewKpi },
)]
fn node_creation_records_roundtrip(marker: Marker) {
    let record = LogRecord::node_created(marker, "https://site.example/objects/n-1").unwrap();
    assert_eq!(record.marker(), marker);
    roundtrip(record);
}

#[test]
fn node_created_rejects_non_creation_markers() {
    assert_eq!(LogRecord::node_created(Marker::NewBlob, "x"), None);
}

#[test]
fn flat_records_roundtrip() {
    roundtrip(LogRecord::LinkElementBlob {
        element_uuid: "elem-1".to_string(),
        blob_uuid: "blob-9".to_string(),
    });
    roundtrip(LogRecord::NewBlob {
        blob_uuid: "blob-9".to_string(),
    });
    roundtrip(LogRecord::UpdateAsDesigned {
        node_iri: "https://site.example/objects/n-1".to_string(),
    });
    roundtrip(LogRecord::UpdateOperation {
        node_iri: "https://site.example/objects/op-1".to_string(),
        dump_path: "/var/log/tg/nodes-20260805/op-1.json".to_string(),
    });
    roundtrip(LogRecord::RemovedParam {
        node_iri: "https://site.example/objects/n-1".to_string(),
        field: "https://ontology.example/progress".to_string(),
        previous_value: "42".to_string(),
    });
    roundtrip(LogRecord::AddedParam {
        node_iri: "https://site.example/objects/n-1".to_string(),
        field: "https://ontology.example/progress".to_string(),
    });
    roundtrip(LogRecord::LinkActionAsBuilt {
        action_iri: "https://site.example/objects/act-1".to_string(),
        target_iri: "https://site.example/objects/ab-1".to_string(),
    });
}

#[test]
fn list_records_roundtrip() {
    roundtrip(LogRecord::LinkConstrOperation {
        constr_iri: "https://site.example/objects/c-1".to_string(),
        operation_iris: vec![
            "https://site.example/objects/op-1".to_string(),
            "https://site.example/objects/op-2".to_string(),
        ],
    });
    roundtrip(LogRecord::LinkOperationAction {
        operation_iri: "https://site.example/objects/op-1".to_string(),
        action_iris: vec!["https://site.example/objects/act-1".to_string()],
    });
}

#[test]
fn message_renders_bracketed_sublist() {
    let record = LogRecord::LinkConstrOperation {
        constr_iri: "https://c/1".to_string(),
        operation_iris: vec!["https://o/1".to_string(), "https://o/2".to_string()],
    };
    assert_eq!(
        record.message(),
        "NEW_LINK_CONSTR_OPERATION: https://c/1, [https://o/1, https://o/2]"
    );
}

#[test]
fn unmarked_lines_parse_to_none() {
    assert_eq!(LogRecord::parse("05-Aug-26 10:15:00 : hello").unwrap(), None);
    assert_eq!(LogRecord::parse("").unwrap(), None);
}

#[test]
fn wrong_field_count_is_an_error() {
    let line = "ts : NEW_LINK_ELEMENT_BLOB: only-one-field";
    assert_eq!(
        LogRecord::parse(line),
        Err(ParseError::FieldCount {
            marker: "NEW_LINK_ELEMENT_BLOB",
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn flat_payload_for_list_marker_is_an_error() {
    let line = "ts : NEW_LINK_CONSTR_OPERATION: https://c/1, https://o/1";
    assert_eq!(
        LogRecord::parse(line),
        Err(ParseError::ExpectedList {
            marker: "NEW_LINK_CONSTR_OPERATION",
        })
    );
}

#[test]
fn list_payload_for_flat_marker_is_an_error() {
    let line = "ts : NEW_LINK_ELEMENT_BLOB: elem-1, [blob-1]";
    assert_eq!(
        LogRecord::parse(line),
        Err(ParseError::UnexpectedList {
            marker: "NEW_LINK_ELEMENT_BLOB",
        })
    );
}

#[test]
fn parse_survives_marker_at_line_end() {
    assert_eq!(
        LogRecord::parse("ts : NEW_BLOB"),
        Err(ParseError::EmptyPayload)
    );
}
