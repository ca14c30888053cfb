//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into [`LookupService`]. Nothing in
//! the request path reads environment variables. The `*_from_env_value` helpers take the raw value
//! so binaries do the `std::env::var` call and tests do not need to touch process state.
//!
//! [`LookupService`]: crate::gateway::LookupService

use std::time::Duration;

use url::Url;

use crate::constants::{DEFAULT_STORE_TIMEOUT, GRAPHDB_TIMEOUT_ENV, GRAPHDB_URL_ENV};
use crate::error::{CatalogError, CatalogResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    graphdb_url: Url,
    store_timeout: Duration,
}

impl CatalogConfig {
    /// Create a new `CatalogConfig`.
    pub fn new(graphdb_url: Url, store_timeout: Duration) -> CatalogResult<Self> {
        if store_timeout.is_zero() {
            return Err(CatalogError::Configuration(
                "store timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            graphdb_url,
            store_timeout,
        })
    }

    /// Build a configuration from raw environment values.
    ///
    /// # Errors
    /// Returns `CatalogError::Configuration` if the endpoint is missing or unparseable, or the
    /// timeout is not a positive whole number of seconds.
    pub fn from_env_values(
        graphdb_url: Option<String>,
        store_timeout: Option<String>,
    ) -> CatalogResult<Self> {
        Self::new(
            graphdb_url_from_env_value(graphdb_url)?,
            timeout_from_env_value(store_timeout)?,
        )
    }

    pub fn graphdb_url(&self) -> &Url {
        &self.graphdb_url
    }

    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }
}

/// Parse the required SPARQL endpoint from an optional string value.
///
/// # Errors
/// Returns `CatalogError::Configuration` if the value is missing, blank or not an absolute URL.
pub fn graphdb_url_from_env_value(value: Option<String>) -> CatalogResult<Url> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            CatalogError::Configuration(format!(
                "Required environment variable '{GRAPHDB_URL_ENV}' is not set"
            ))
        })?;

    let url = Url::parse(&value).map_err(|e| {
        CatalogError::Configuration(format!("{GRAPHDB_URL_ENV} is not a valid URL: {e}"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Configuration(format!(
            "{GRAPHDB_URL_ENV} must use http or https, got '{other}'"
        ))),
    }
}

/// Parse the store timeout from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_STORE_TIMEOUT`].
pub fn timeout_from_env_value(value: Option<String>) -> CatalogResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_STORE_TIMEOUT);
    };

    match value.parse::<u64>() {
        Ok(0) | Err(_) => Err(CatalogError::Configuration(format!(
            "{GRAPHDB_TIMEOUT_ENV} must be a positive number of seconds, got '{value}'"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
