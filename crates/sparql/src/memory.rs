//! A scripted, in-memory store for tests.

use std::sync::Mutex;

use crate::error::{SparqlError, SparqlResult};
use crate::results::Solution;
use crate::store::{SolutionCursor, TripleStore};

/// Returns the same fixed rows for every query and remembers what it was asked.
///
/// Failures can be scripted either at `select` time or part-way through iteration.
#[derive(Debug, Default)]
pub struct MemoryStore {
    solutions: Vec<Solution>,
    fail_on_select: Option<String>,
    fail_after: Option<(usize, String)>,
    queries: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new(solutions: Vec<Solution>) -> Self {
        Self {
            solutions,
            ..Self::default()
        }
    }

    /// Every `select` fails immediately with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_on_select: Some(message.into()),
            ..Self::default()
        }
    }

    /// Yield the first `rows` solutions, then fail with `message`.
    pub fn failing_after(mut self, rows: usize, message: impl Into<String>) -> Self {
        self.fail_after = Some((rows, message.into()));
        self
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    pub fn query_count(&self) -> usize {
        self.queries().len()
    }
}

impl TripleStore for MemoryStore {
    fn select(&self, query: &str) -> SparqlResult<SolutionCursor<'_>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }

        if let Some(message) = &self.fail_on_select {
            return Err(SparqlError::Store(message.clone()));
        }

        match &self.fail_after {
            Some((rows, message)) => {
                let failure = SparqlError::Store(message.clone());
                Ok(Box::new(
                    self.solutions
                        .iter()
                        .take(*rows)
                        .cloned()
                        .map(Ok)
                        .chain(std::iter::once(Err(failure))),
                ))
            }
            None => Ok(Box::new(self.solutions.iter().cloned().map(Ok))),
        }
    }

    fn endpoint(&self) -> &str {
        "memory://"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::RdfTerm;

    fn rows(n: usize) -> Vec<Solution> {
        (0..n)
            .map(|i| Solution::new().with("productName", RdfTerm::plain(format!("p{i}"))))
            .collect()
    }

    #[test]
    fn test_memory_store_records_queries() {
        let store = MemoryStore::new(rows(1));
        let _ = store.select("q1").expect("select").count();
        let _ = store.select("q2").expect("select").count();
        assert_eq!(store.queries(), vec!["q1".to_string(), "q2".to_string()]);
    }

    #[test]
    fn test_memory_store_fails_after_n_rows() {
        let store = MemoryStore::new(rows(5)).failing_after(2, "connection reset");
        let items: Vec<_> = store.select("q").expect("select").collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_ok());
        assert!(matches!(&items[2], Err(SparqlError::Store(m)) if m == "connection reset"));
    }

    #[test]
    fn test_failing_store_errors_on_select() {
        let store = MemoryStore::failing("endpoint unreachable");
        let err = match store.select("q") {
            Ok(_) => panic!("select should fail"),
            Err(e) => e,
        };
        assert_eq!(err.to_string(), "endpoint unreachable");
        assert_eq!(store.query_count(), 1);
    }
}
