//! The store seam.
//!
//! Services hold a [`TripleStore`] rather than a concrete client so that tests can hand them a
//! scripted store. Implementations must be safe to share between concurrent requests.

use std::sync::Arc;

use crate::error::SparqlResult;
use crate::results::Solution;

/// Rows of a SELECT query. Errors may still surface while iterating.
pub type SolutionCursor<'a> = Box<dyn Iterator<Item = SparqlResult<Solution>> + Send + 'a>;

/// A store that can be shared behind one handle by every request handler.
pub type SharedStore = Arc<dyn TripleStore>;

pub trait TripleStore: Send + Sync {
    /// Execute a SELECT query and return its rows in store order.
    ///
    /// # Errors
    /// Returns a `SparqlError` if the query cannot be sent or the store rejects it. Failures while
    /// converting individual rows surface from the cursor instead.
    fn select(&self, query: &str) -> SparqlResult<SolutionCursor<'_>>;

    /// Where queries go, for logging.
    fn endpoint(&self) -> &str;
}

impl<T: TripleStore + ?Sized> TripleStore for Arc<T> {
    fn select(&self, query: &str) -> SparqlResult<SolutionCursor<'_>> {
        (**self).select(query)
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::term::RdfTerm;

    #[test]
    fn test_shared_store_delegates_to_inner_store() {
        let store: SharedStore = Arc::new(MemoryStore::new(vec![
            Solution::new().with("productName", RdfTerm::plain("Cane")),
        ]));

        let rows: Vec<Solution> = store
            .select("SELECT * WHERE {}")
            .expect("select")
            .collect::<SparqlResult<_>>()
            .expect("rows");

        assert_eq!(rows.len(), 1);
        assert_eq!(store.endpoint(), "memory://");
    }
}
