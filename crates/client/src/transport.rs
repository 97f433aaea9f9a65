// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutation gateway over blocking HTTP.
//!
//! Two request paths: *unguarded* calls (reads and compensation lookups)
//! always hit the network and fail on non-2xx statuses; *guarded* calls
//! (anything that mutates the store) are suppressed entirely while
//! simulation mode is on. Every request is logged before the branch is
//! taken, so simulated calls remain auditable.

use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors raised by the HTTP transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("store returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("http transport failure: {0}")]
    Http(#[from] Box<ureq::Error>),
}

/// HTTP method of a store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Raw response from the store
#[derive(Debug, Clone)]
pub struct StoreResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl StoreResponse {
    /// Whether the status is 2xx.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Gateway owning the HTTP agent, the bearer token, and the simulation flag
pub struct Gateway {
    agent: ureq::Agent,
    token: String,
    simulation: AtomicBool,
}

impl Gateway {
    pub fn new(token: impl Into<String>, simulation: bool) -> Self {
        // Non-2xx statuses come back as responses: guarded callers interpret
        // success themselves.
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
            token: token.into(),
            simulation: AtomicBool::new(simulation),
        }
    }

    /// Whether simulation mode is on.
    pub fn simulation(&self) -> bool {
        self.simulation.load(Ordering::Relaxed)
    }

    /// Switch simulation mode, returning the previous value.
    pub fn set_simulation(&self, on: bool) -> bool {
        self.simulation.swap(on, Ordering::Relaxed)
    }

    /// Unguarded request: always performs the call, errors on non-2xx.
    pub fn request(
        &self,
        method: Method,
        url: &str,
        payload: Option<&str>,
    ) -> Result<StoreResponse, TransportError> {
        log_request(method, url, payload);
        let response = self.send(method, url, payload)?;
        if response.ok() {
            Ok(response)
        } else {
            Err(TransportError::Status {
                status: response.status,
                url: url.to_string(),
            })
        }
    }

    /// Guarded request: no network I/O at all while simulation mode is on.
    ///
    /// Returns `Ok(None)` for a simulated call, otherwise the raw response
    /// whatever its status.
    pub fn guarded(
        &self,
        method: Method,
        url: &str,
        payload: Option<&str>,
    ) -> Result<Option<StoreResponse>, TransportError> {
        log_request(method, url, payload);
        if self.simulation() {
            return Ok(None);
        }
        self.send(method, url, payload).map(Some)
    }

    /// Guarded upload of a raw byte stream.
    pub fn guarded_bytes(
        &self,
        url: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<Option<StoreResponse>, TransportError> {
        tracing::info!(method = "POST", url, bytes = data.len(), "store request");
        if self.simulation() {
            return Ok(None);
        }
        let bearer = format!("Bearer {}", self.token);
        let result = self
            .agent
            .post(url)
            .header("Content-Type", content_type)
            .header("Authorization", &bearer)
            .send(data);
        finish(result).map(Some)
    }

    fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&str>,
    ) -> Result<StoreResponse, TransportError> {
        let bearer = format!("Bearer {}", self.token);
        let body = payload.unwrap_or("");
        let result = match method {
            Method::Get => self
                .agent
                .get(url)
                .header("Accept", "application/json")
                .header("Authorization", &bearer)
                .call(),
            Method::Delete => self
                .agent
                .delete(url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .header("Authorization", &bearer)
                .call(),
            Method::Post => self
                .agent
                .post(url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .header("Authorization", &bearer)
                .send(body),
            Method::Put => self
                .agent
                .put(url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .header("Authorization", &bearer)
                .send(body),
        };
        finish(result)
    }
}

fn finish(
    result: Result<ureq::http::Response<ureq::Body>, ureq::Error>,
) -> Result<StoreResponse, TransportError> {
    let mut response = result.map_err(Box::new)?;
    let status = response.status().as_u16();
    let location = response
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let body = response.body_mut().read_to_string().map_err(Box::new)?;
    tracing::info!(status, "store response");
    Ok(StoreResponse {
        status,
        location,
        body,
    })
}

fn log_request(method: Method, url: &str, payload: Option<&str>) {
    tracing::info!(
        method = %method,
        url,
        payload = payload.unwrap_or(""),
        "store request"
    );
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
