// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

// Nothing listens here; any dial fails fast with connection refused.
const DEAD_URL: &str = "http://127.0.0.1:9/store";

#[test]
fn guarded_call_in_simulation_never_touches_the_network() {
    let gateway = Gateway::new("token", true);

    // The URL is unreachable, so any network attempt would error.
    let result = gateway.guarded(Method::Post, DEAD_URL, Some("{}")).unwrap();
    assert!(result.is_none());

    let result = gateway.guarded_bytes(DEAD_URL, "application/octet-stream", b"x").unwrap();
    assert!(result.is_none());
}

#[test]
fn guarded_call_dials_when_simulation_is_off() {
    let gateway = Gateway::new("token", false);
    assert!(gateway.guarded(Method::Put, DEAD_URL, Some("{}")).is_err());
}

#[test]
fn unguarded_request_always_dials() {
    let gateway = Gateway::new("token", true);
    // Unguarded calls ignore simulation mode entirely.
    assert!(gateway.request(Method::Get, DEAD_URL, None).is_err());
}

#[test]
fn set_simulation_returns_previous_value() {
    let gateway = Gateway::new("token", false);
    assert!(!gateway.set_simulation(true));
    assert!(gateway.simulation());
    assert!(gateway.set_simulation(false));
    assert!(!gateway.simulation());
}

#[test]
fn method_displays_as_http_verb() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[test]
fn response_ok_covers_2xx_only() {
    let mut response = StoreResponse {
        status: 201,
        location: None,
        body: String::new(),
    };
    assert!(response.ok());
    response.status = 404;
    assert!(!response.ok());
    response.status = 199;
    assert!(!response.ok());
}

#[test]
fn response_json_parses_body() {
    let response = StoreResponse {
        status: 200,
        location: None,
        body: r#"{"size": 2}"#.to_string(),
    };
    assert_eq!(response.json().unwrap()["size"], 2);
}
