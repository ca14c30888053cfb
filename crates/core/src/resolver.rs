//! Identifier resolution.
//!
//! A request may carry `productId`, `hcpcs` and `dx` all at once. The first one present in
//! [`IdentifierKind::PRECEDENCE`] order wins and the others are ignored. Presence is decided by the
//! key alone, so `?productId=&hcpcs=K0001` resolves to the product identifier and is then rejected
//! for having an empty value rather than falling through to `hcpcs`.

use std::collections::HashMap;

use dme_types::{IdentifierKind, IdentifierValue};

use crate::constants::MISSING_IDENTIFIER_MESSAGE;
use crate::error::{CatalogError, CatalogResult};

/// One validated identifier to look up.
///
/// Only [`resolve`] constructs these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupRequest {
    kind: IdentifierKind,
    value: IdentifierValue,
}

impl LookupRequest {
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn value(&self) -> &IdentifierValue {
        &self.value
    }
}

/// Pick the identifier to look up from raw request parameters.
///
/// The winning value is passed on exactly as received. Surrounding whitespace is not stripped, so
/// `hcpcs=%20K0001` filters on `" K0001"` and matches nothing. A value made only of whitespace is
/// treated as empty.
///
/// # Errors
/// Returns `CatalogError::InvalidParameters` if none of the accepted keys is present, or if the
/// winning key has a blank value.
pub fn resolve(params: &HashMap<String, String>) -> CatalogResult<LookupRequest> {
    let (kind, raw) = IdentifierKind::PRECEDENCE
        .into_iter()
        .find_map(|kind| params.get(kind.param_name()).map(|raw| (kind, raw)))
        .ok_or_else(|| CatalogError::InvalidParameters(MISSING_IDENTIFIER_MESSAGE.into()))?;

    let value = IdentifierValue::new(raw).map_err(|_| {
        CatalogError::InvalidParameters(format!(
            "query parameter '{}' cannot be empty",
            kind.param_name()
        ))
    })?;

    Ok(LookupRequest { kind, value })
}
