//! Result projection: store solutions to caller-facing records.

use std::collections::BTreeMap;

use dme_sparql::{SparqlResult, Solution};
use serde::Serialize;

/// One result record: bound variable name to its rendered value.
///
/// Variables that were not bound in the underlying solution have no key at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultRow(BTreeMap<String, String>);

impl ResultRow {
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(String::as_str)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.0.contains_key(variable)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&Solution> for ResultRow {
    fn from(solution: &Solution) -> Self {
        ResultRow(
            solution
                .iter()
                .map(|(var, term)| (var.to_string(), term.to_string()))
                .collect(),
        )
    }
}

impl FromIterator<(String, String)> for ResultRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ResultRow(iter.into_iter().collect())
    }
}

/// Drain a solution cursor into records, in cursor order.
///
/// # Errors
/// The first error the cursor yields is returned and every record read before it is dropped.
pub fn project<I>(cursor: I) -> SparqlResult<Vec<ResultRow>>
where
    I: IntoIterator<Item = SparqlResult<Solution>>,
{
    cursor
        .into_iter()
        .map(|solution| solution.map(|s| ResultRow::from(&s)))
        .collect()
}
