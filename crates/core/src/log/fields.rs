// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Marker-agnostic payload extraction from raw log lines.
//!
//! A line's message carries a marker token followed by one separator
//! character and a comma-separated payload; multi-target operations carry one
//! leading field plus a bracketed sub-list. The extractor returns raw string
//! fields; [`LogRecord`](super::LogRecord) enforces the per-marker shape.

use thiserror::Error;

/// Errors raised while decoding a log line's payload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no recognized marker in line")]
    NoMarker,
    #[error("empty payload after marker")]
    EmptyPayload,
    #[error("expected a field before the bracketed list")]
    MissingListHead,
    #[error("unterminated '[' in payload")]
    UnterminatedList,
    #[error("{marker}: expected {expected} fields, found {found}")]
    FieldCount {
        marker: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{marker}: expected a bracketed list payload")]
    ExpectedList { marker: &'static str },
    #[error("{marker}: unexpected bracketed list payload")]
    UnexpectedList { marker: &'static str },
}

/// Payload fields extracted from one log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields {
    /// Plain comma-separated identifiers.
    Flat(Vec<String>),
    /// One leading identifier plus a bracketed sub-list.
    WithList(String, Vec<String>),
}

/// Extract the payload that follows `token` in `line`.
///
/// Takes the substring after the token plus one separator character and
/// trims it. A `[` in the remainder switches to head + sub-list form: split
/// once on the first comma, then take the span between the first `[` and the
/// following `]`.
pub fn extract_fields(line: &str, token: &str) -> Result<Fields, ParseError> {
    let start = line.find(token).ok_or(ParseError::NoMarker)?;
    let rest = line
        .get(start + token.len() + 1..)
        .unwrap_or("")
        .trim();
    if rest.is_empty() {
        return Err(ParseError::EmptyPayload);
    }

    if rest.contains('[') {
        let (head, tail) = rest.split_once(',').ok_or(ParseError::MissingListHead)?;
        let open = tail.find('[').ok_or(ParseError::MissingListHead)?;
        let close = tail[open..]
            .find(']')
            .map(|i| open + i)
            .ok_or(ParseError::UnterminatedList)?;
        let inner = tail[open + 1..close].trim();
        let items = if inner.is_empty() {
            Vec::new()
        } else {
            split_trim(inner)
        };
        Ok(Fields::WithList(head.trim().to_string(), items))
    } else {
        Ok(Fields::Flat(split_trim(rest)))
    }
}

fn split_trim(payload: &str) -> Vec<String> {
    payload.split(',').map(|f| f.trim().to_string()).collect()
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
