//! The lookup service.
//!
//! `LookupService::lookup` runs resolve, build, execute and project in that order and stops at the
//! first failure. It never panics on bad input or store faults; every failure is folded into
//! [`LookupOutcome::Failure`].

use std::collections::HashMap;
use std::sync::Arc;

use dme_sparql::{SharedStore, SparqlHttpStore, TripleStore};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult, ErrorKind};
use crate::projection::{project, ResultRow};
use crate::query::build;
use crate::resolver::resolve;

/// What a lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Success(Vec<ResultRow>),
    Failure { kind: ErrorKind, message: String },
}

impl From<CatalogError> for LookupOutcome {
    fn from(err: CatalogError) -> Self {
        LookupOutcome::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Catalog lookups against one triple store.
pub struct LookupService<S = SharedStore> {
    store: S,
}

impl LookupService<SharedStore> {
    /// Service backed by the configured SPARQL endpoint.
    pub fn from_config(cfg: &CatalogConfig) -> Self {
        let store = SparqlHttpStore::new(cfg.graphdb_url().clone(), cfg.store_timeout());
        Self::with_store(Arc::new(store))
    }
}

impl<S: TripleStore> LookupService<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up catalog products for raw request parameters.
    ///
    /// This blocks on the store; async callers should run it on a blocking thread.
    ///
    /// # Returns
    /// `LookupOutcome::Success` with one row per solution, in store order, or
    /// `LookupOutcome::Failure` carrying the error kind and the caller-facing message. Rejected
    /// parameters are logged at info and store failures at warn.
    pub fn lookup(&self, params: &HashMap<String, String>) -> LookupOutcome {
        match self.try_lookup(params) {
            Ok(rows) => LookupOutcome::Success(rows),
            Err(err) => {
                match err.kind() {
                    ErrorKind::InvalidParameters => tracing::info!("Rejected lookup: {}", err),
                    // Callers surface execution failures at error level themselves.
                    _ => tracing::warn!("Lookup failed against {}: {}", self.store.endpoint(), err),
                }
                err.into()
            }
        }
    }

    fn try_lookup(&self, params: &HashMap<String, String>) -> CatalogResult<Vec<ResultRow>> {
        let request = resolve(params)?;
        let query = build(&request);
        tracing::debug!("Lookup by {} composed query:\n{}", request.kind(), query);

        let cursor = self.store.select(query.as_str())?;
        let rows = project(cursor)?;
        tracing::debug!("Lookup by {} returned {} row(s)", request.kind(), rows.len());

        Ok(rows)
    }
}
