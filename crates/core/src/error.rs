use dme_sparql::SparqlError;

/// Coarse error classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ErrorKind {
    /// None of the recognised identifiers was usable. Caller error.
    InvalidParameters,
    /// The store failed while executing or streaming a query.
    ExecutionError,
    /// Required configuration was missing or invalid at startup.
    ConfigurationError,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidParameters(String),
    #[error("Error processing request: {0}")]
    Execution(#[from] SparqlError),
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidParameters(_) => ErrorKind::InvalidParameters,
            CatalogError::Execution(_) => ErrorKind::ExecutionError,
            CatalogError::Configuration(_) => ErrorKind::ConfigurationError,
        }
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
