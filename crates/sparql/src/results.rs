//! SPARQL 1.1 Query Results JSON Format.
//!
//! The whole response body is parsed up front, but individual bindings are only converted into
//! [`RdfTerm`]s as the caller iterates. A binding with a term type we do not understand therefore
//! fails at the row that carries it, not at parse time.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{SparqlError, SparqlResult};
use crate::term::RdfTerm;

#[derive(Debug, Deserialize)]
struct RawResults {
    #[serde(default)]
    head: RawHead,
    results: RawBindings,
}

#[derive(Debug, Default, Deserialize)]
struct RawHead {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawBindings {
    bindings: Vec<BTreeMap<String, RawTerm>>,
}

#[derive(Debug, Deserialize)]
struct RawTerm {
    #[serde(rename = "type")]
    kind: String,
    value: String,
    #[serde(rename = "xml:lang")]
    lang: Option<String>,
    datatype: Option<String>,
}

impl RawTerm {
    fn into_term(self, variable: &str) -> SparqlResult<RdfTerm> {
        match self.kind.as_str() {
            "uri" => Ok(RdfTerm::Iri(self.value)),
            "literal" | "typed-literal" => Ok(RdfTerm::Literal {
                lexical: self.value,
                language: self.lang,
                datatype: self.datatype,
            }),
            "bnode" => Ok(RdfTerm::BlankNode(self.value)),
            _ => Err(SparqlError::UnsupportedTerm {
                variable: variable.to_string(),
                kind: self.kind,
            }),
        }
    }
}

/// One result row: the variables bound in it, in the order the store listed them.
///
/// Unbound variables are simply not present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    bindings: Vec<(String, RdfTerm)>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style bind, mostly for fixtures.
    pub fn with(mut self, variable: impl Into<String>, term: RdfTerm) -> Self {
        self.bind(variable, term);
        self
    }

    /// Binds `variable`, replacing any earlier binding of the same name.
    pub fn bind(&mut self, variable: impl Into<String>, term: RdfTerm) {
        let variable = variable.into();
        match self.bindings.iter_mut().find(|(name, _)| *name == variable) {
            Some(slot) => slot.1 = term,
            None => self.bindings.push((variable, term)),
        }
    }

    pub fn get(&self, variable: &str) -> Option<&RdfTerm> {
        self.bindings
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, term)| term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RdfTerm)> {
        self.bindings.iter().map(|(name, term)| (name.as_str(), term))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Parsed SELECT results, not yet converted into terms.
#[derive(Debug)]
pub struct SelectResults {
    vars: Vec<String>,
    bindings: Vec<BTreeMap<String, RawTerm>>,
}

impl SelectResults {
    /// Projection variables declared in the result head.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Converts the rows lazily, in the order the store returned them.
    pub fn into_solutions(self) -> impl Iterator<Item = SparqlResult<Solution>> {
        let vars = self.vars;
        self.bindings
            .into_iter()
            .map(move |row| solution_from_raw(&vars, row))
    }
}

fn solution_from_raw(
    vars: &[String],
    mut row: BTreeMap<String, RawTerm>,
) -> SparqlResult<Solution> {
    let mut solution = Solution::new();
    // Head order first, then anything the store bound without declaring it.
    for var in vars {
        if let Some(raw) = row.remove(var) {
            let term = raw.into_term(var)?;
            solution.bind(var.clone(), term);
        }
    }
    for (var, raw) in row {
        let term = raw.into_term(&var)?;
        solution.bind(var, term);
    }
    Ok(solution)
}

/// Parses a `application/sparql-results+json` SELECT response body.
pub fn parse_select_results(body: &str) -> SparqlResult<SelectResults> {
    let raw: RawResults = serde_json::from_str(body).map_err(SparqlError::MalformedResults)?;
    Ok(SelectResults {
        vars: raw.head.vars,
        bindings: raw.results.bindings,
    })
}
