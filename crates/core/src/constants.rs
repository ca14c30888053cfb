//! Constants used throughout the DME core crate.

use std::time::Duration;

/// Environment variable holding the SPARQL endpoint of the catalog repository.
pub const GRAPHDB_URL_ENV: &str = "GRAPHDB_URL";

/// Environment variable overriding the store request timeout, in whole seconds.
pub const GRAPHDB_TIMEOUT_ENV: &str = "GRAPHDB_TIMEOUT_SECS";

/// Store request timeout when none is configured.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable for the REST listen address.
pub const REST_ADDR_ENV: &str = "DME_REST_ADDR";

/// REST listen address when none is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Namespace of the DME catalog vocabulary, bound to the `ex:` prefix.
pub const DME_NAMESPACE: &str = "http://synapsehealth.com/dme/";

/// RDF syntax namespace, bound to the `rdf:` prefix.
pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Message returned when a request carries none of the accepted identifiers.
pub const MISSING_IDENTIFIER_MESSAGE: &str =
    "Please provide one of: productId, hcpcs, or dx as a query parameter";
