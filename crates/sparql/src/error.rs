#[derive(Debug, thiserror::Error)]
pub enum SparqlError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("SPARQL endpoint request failed: {0}")]
    Transport(reqwest::Error),
    #[error("SPARQL endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed SPARQL results: {0}")]
    MalformedResults(serde_json::Error),
    #[error("unsupported RDF term type '{kind}' bound to ?{variable}")]
    UnsupportedTerm { variable: String, kind: String },
    #[error("{0}")]
    Store(String),
}

pub type SparqlResult<T> = std::result::Result<T, SparqlError>;
