// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier validation, performed before any network I/O.

use thiserror::Error;
use url::Url;

/// Rejections raised before a request is built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("not a valid IRI: {0}")]
    NotAUrl(String),
    #[error("identifier is empty")]
    Empty,
    #[error("identifier contains reserved character {ch:?}: {value}")]
    ReservedCharacter { ch: char, value: String },
}

/// Check that an IRI is an absolute http(s) URL.
pub fn validate_iri(iri: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(iri).map_err(|_| ValidationError::NotAUrl(iri.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::NotAUrl(iri.to_string()));
    }
    validate_identifier(iri)
}

/// Check that an identifier can be embedded in a session-log line.
///
/// Log lines separate payload fields with commas and brackets, so those
/// characters cannot appear inside a logged identifier.
pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    for ch in [',', '[', ']'] {
        if value.contains(ch) {
            return Err(ValidationError::ReservedCharacter {
                ch,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_iris() {
        validate_iri("https://site.example/objects/element-1").unwrap();
        validate_iri("http://site.example/objects/element-1").unwrap();
    }

    #[test]
    fn rejects_non_url_iris() {
        assert!(matches!(
            validate_iri("not a url"),
            Err(ValidationError::NotAUrl(_))
        ));
        assert!(matches!(
            validate_iri("ftp://site.example/x"),
            Err(ValidationError::NotAUrl(_))
        ));
    }

    #[test]
    fn rejects_log_separator_characters() {
        for bad in [
            "https://site.example/a,b",
            "https://site.example/a%5B?q=[1]",
        ] {
            assert!(matches!(
                validate_iri(bad),
                Err(ValidationError::ReservedCharacter { .. })
            ));
        }
        assert!(matches!(
            validate_identifier("uuid,with,commas"),
            Err(ValidationError::ReservedCharacter { ch: ',', .. })
        ));
    }

    #[test]
    fn rejects_empty_identifiers() {
        assert_eq!(validate_identifier("  "), Err(ValidationError::Empty));
    }
}
