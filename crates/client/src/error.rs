// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client error taxonomy.
//!
//! Live mutation calls propagate these to the caller; the revert engine
//! catches them per line and keeps walking.

use std::path::PathBuf;
use thiserror::Error;

use crate::transport::TransportError;
use tg_core::{ConfigError, ParseError, ValidationError};

/// Errors surfaced by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no identifier found in the store for {iri}")]
    Lookup { iri: String },

    #[error("store rejected {action} (status {status})")]
    Rejected { action: &'static str, status: u16 },

    #[error("malformed store response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backup dump has no node payload: {path}")]
    EmptyDump { path: PathBuf },
}
