//! # DME SPARQL
//!
//! The triple-store side of the DME catalog.
//!
//! Contains:
//! - [`TripleStore`], the seam the lookup core executes queries through
//! - RDF terms ([`RdfTerm`]) and result rows ([`Solution`]) with the canonical string rendering
//!   callers see
//! - A parser for the SPARQL 1.1 Query Results JSON format
//! - [`SparqlHttpStore`], a blocking SPARQL 1.1 protocol client (GraphDB, RDF4J, Fuseki, ...)
//! - `MemoryStore`, a scripted store for tests (`test-utils` feature)
//!
//! **No query construction here**: which query runs for which identifier belongs in `dme-core`.

pub mod error;
pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod results;
pub mod store;
pub mod term;

pub use error::{SparqlError, SparqlResult};
pub use http::SparqlHttpStore;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use results::{parse_select_results, SelectResults, Solution};
pub use store::{SharedStore, SolutionCursor, TripleStore};
pub use term::RdfTerm;
