//! # DME Core
//!
//! Query construction and result projection for the DME product catalog.
//!
//! A lookup runs in four steps:
//! - [`resolver`]: pick the single identifier a caller supplied (`productId`, `hcpcs` or `dx`)
//! - [`query`]: compose the SPARQL SELECT for that identifier, escaping the caller's value
//! - execute it against a [`dme_sparql::TripleStore`]
//! - [`projection`]: turn the result bindings into sparse string records
//!
//! [`gateway::LookupService`] wires these together and reports a [`LookupOutcome`].
//!
//! **No API concerns**: HTTP routing and response framing belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod projection;
pub mod query;
pub mod resolver;

pub use config::CatalogConfig;
pub use constants::*;
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use gateway::{LookupOutcome, LookupService};
pub use projection::{project, ResultRow};
pub use query::{build, QueryText};
pub use resolver::{resolve, LookupRequest};

pub use dme_types::{IdentifierKind, IdentifierValue};
