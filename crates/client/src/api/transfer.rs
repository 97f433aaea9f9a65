// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blob upload.

use super::{StoreClient, TransferApi};
use crate::error::StoreError;
use std::path::Path;
use tg_core::{validate_identifier, LogRecord};

impl TransferApi for StoreClient {
    fn send_blob(&self, filename: &str, path: &Path) -> Result<String, StoreError> {
        validate_identifier(filename)?;
        let data = std::fs::read(path)?;

        let url = self.config.api_url_with_id("send_blob", filename)?;
        let blob_uuid = match self
            .gateway
            .guarded_bytes(&url, "application/octet-stream", &data)?
        {
            // Simulated upload: hand out a placeholder identifier.
            None => self.ids.next(),
            Some(response) if response.status == 201 => response
                .location
                .as_deref()
                .and_then(|loc| loc.rsplit('/').next())
                .map(String::from)
                .ok_or(StoreError::Rejected {
                    action: "send blob",
                    status: response.status,
                })?,
            Some(response) => {
                tracing::error!(status = response.status, "blob upload failed");
                return Err(StoreError::Rejected {
                    action: "send blob",
                    status: response.status,
                });
            }
        };

        self.session.record(&LogRecord::NewBlob {
            blob_uuid: blob_uuid.clone(),
        });
        Ok(blob_uuid)
    }
}
