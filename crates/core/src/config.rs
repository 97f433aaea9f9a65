// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store configuration loaded from a TOML file.
//!
//! The configuration supplies the store domain(s), the developer token, the
//! per-function endpoint URL table, and the ontology term URIs. The token
//! lives in a separate file referenced by `token_file`, so configs can be
//! shared without credentials.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Placeholder substituted with a concrete identifier in endpoint URLs.
const ID_PLACEHOLDER: &str = "_ID_";

/// Errors raised while loading or querying the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] Box<toml::de::Error>),
    #[error("token file is empty: {0}")]
    EmptyToken(PathBuf),
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("unknown API endpoint: {0}")]
    UnknownApi(String),
    #[error("unknown ontology term: {0}")]
    UnknownOntology(String),
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    version: String,
    domain: String,
    #[serde(default)]
    kpi_domain: Option<String>,
    log_dir: PathBuf,
    token_file: PathBuf,
    #[serde(default)]
    api_urls: BTreeMap<String, String>,
    #[serde(default)]
    ontology_uris: BTreeMap<String, String>,
}

/// Store connection settings: domain, token, endpoint and ontology tables
#[derive(Debug, Clone)]
pub struct Config {
    version: String,
    domain: String,
    kpi_domain: Option<String>,
    token: String,
    log_dir: PathBuf,
    api_urls: BTreeMap<String, String>,
    ontology_uris: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// The token file and log directory are resolved relative to the config
    /// file's directory when given as relative paths.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = toml::from_str(&text).map_err(Box::new)?;
        let base = path.parent().unwrap_or(Path::new("."));

        let token_path = resolve(base, &raw.token_file);
        let token = read_token(&token_path)?;

        Ok(Self {
            version: raw.version,
            domain: normalize_domain("domain", &raw.domain)?,
            kpi_domain: raw
                .kpi_domain
                .as_deref()
                .map(|d| normalize_domain("kpi_domain", d))
                .transpose()?,
            token,
            log_dir: resolve(base, &raw.log_dir),
            api_urls: raw.api_urls,
            ontology_uris: raw.ontology_uris,
        })
    }

    /// Assemble a configuration directly, without files.
    ///
    /// Intended for tests and embedders; production code loads `from_file`.
    pub fn from_parts(
        domain: impl Into<String>,
        token: impl Into<String>,
        log_dir: impl Into<PathBuf>,
    ) -> Self {
        let mut domain = domain.into();
        if !domain.ends_with('/') {
            domain.push('/');
        }
        Self {
            version: String::new(),
            domain,
            kpi_domain: None,
            token: token.into(),
            log_dir: log_dir.into(),
            api_urls: BTreeMap::new(),
            ontology_uris: BTreeMap::new(),
        }
    }

    /// Register an endpoint URL (builder-style, for `from_parts`).
    pub fn with_api_url(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.api_urls.insert(name.into(), url.into());
        self
    }

    /// Register an ontology term URI (builder-style, for `from_parts`).
    pub fn with_ontology_uri(mut self, name: impl Into<String>, uri: impl Into<String>) -> Self {
        self.ontology_uris.insert(name.into(), uri.into());
        self
    }

    /// Config file version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The store domain, normalized to a trailing slash.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The KPI domain, when configured.
    pub fn kpi_domain(&self) -> Option<&str> {
        self.kpi_domain.as_deref()
    }

    /// The developer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Root directory for session logs and node backup dumps.
    pub fn log_path(&self) -> &Path {
        &self.log_dir
    }

    /// Endpoint URL for a named API function.
    pub fn api_url(&self, name: &str) -> Result<&str, ConfigError> {
        self.api_urls
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownApi(name.to_string()))
    }

    /// Endpoint URL for a named API function with its `_ID_` slot filled in.
    pub fn api_url_with_id(&self, name: &str, id: &str) -> Result<String, ConfigError> {
        Ok(self.api_url(name)?.replace(ID_PLACEHOLDER, id))
    }

    /// Ontology URI for a named term.
    pub fn ontology_uri(&self, name: &str) -> Result<&str, ConfigError> {
        self.ontology_uris
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::UnknownOntology(name.to_string()))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn read_token(path: &Path) -> Result<String, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // Tokens may be wrapped over several lines; join and strip whitespace.
    let token: String = raw.split_whitespace().collect();
    if token.is_empty() {
        return Err(ConfigError::EmptyToken(path.to_path_buf()));
    }
    Ok(token)
}

fn normalize_domain(field: &'static str, value: &str) -> Result<String, ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })?;
    let mut domain = value.to_string();
    if !domain.ends_with('/') {
        domain.push('/');
    }
    Ok(domain)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
