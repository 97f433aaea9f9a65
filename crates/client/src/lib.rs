// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tg-client: HTTP client for the twingraph store
//!
//! This crate provides:
//! - A mutation gateway with guarded (simulation-aware) requests
//! - A pagination walker that merges multi-page result sets
//! - Capability APIs (fetch/create/link/update/transfer/revert) composed into
//!   one `StoreClient` façade
//! - The reverse-chronological session revert engine

pub mod api;
pub mod backup;
pub mod error;
pub mod pages;
pub mod revert;
pub mod transport;

// Re-exports
pub use api::{
    ActionSpec, ConstructionSpec, CreateApi, Edge, FetchApi, KpiSpec, LinkApi, OperationSpec,
    RevertApi, StoreClient, TransferApi, UpdateApi,
};
pub use backup::BackupStore;
pub use error::StoreError;
pub use pages::{fetch_all, Page};
pub use revert::{compensate, revert_session, revert_sessions, RevertReport};
pub use transport::{Gateway, Method, StoreResponse, TransportError};
