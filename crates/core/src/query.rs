//! SPARQL query templates for catalog lookups.
//!
//! Every query shares the same prefix block and the same product graph pattern:
//!
//! ```text
//! <product> ex:hasName ?productName ;
//!     ex:hasPrice ?price ;
//!     ex:hasSupplier ?supplier ;
//!     ex:hasHCPCSCode ?hcpcsCode ;
//!     ex:hasDXCode ?dxCode .
//! ?supplier ex:hasName ?supplierName .
//! ```
//!
//! The identifier kind decides how the caller's value is used:
//! - `ProductId` becomes the subject IRI of the pattern (`ex:product/<id>`), so no filter is needed
//!   and all five variables are projected.
//! - `HcpcsCode` and `DxCode` leave the subject as `?product` and add an equality `FILTER` on the
//!   matching code variable. The filtered variable is not projected.
//!
//! Caller values only ever reach the query through [`product_iri`] or [`string_literal`].

use std::fmt;

use dme_types::IdentifierKind;

use crate::constants::{DME_NAMESPACE, RDF_NAMESPACE};
use crate::resolver::LookupRequest;

pub const PRODUCT_NAME: &str = "productName";
pub const PRICE: &str = "price";
pub const SUPPLIER_NAME: &str = "supplierName";
pub const HCPCS_CODE: &str = "hcpcsCode";
pub const DX_CODE: &str = "dxCode";

/// A complete, executable SPARQL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryText(String);

impl QueryText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QueryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Variables a lookup of `kind` projects, in SELECT order.
pub fn projected_vars(kind: IdentifierKind) -> &'static [&'static str] {
    match kind {
        IdentifierKind::ProductId => &[PRODUCT_NAME, PRICE, SUPPLIER_NAME, HCPCS_CODE, DX_CODE],
        IdentifierKind::HcpcsCode => &[PRODUCT_NAME, PRICE, SUPPLIER_NAME, DX_CODE],
        IdentifierKind::DxCode => &[PRODUCT_NAME, PRICE, SUPPLIER_NAME, HCPCS_CODE],
    }
}

/// Compose the query for a resolved request.
///
/// # Returns
/// The full query text. The same request always yields byte-identical text, with the caller's
/// value escaped so it cannot change the shape of the query.
pub fn build(request: &LookupRequest) -> QueryText {
    let kind = request.kind();
    let value = request.value().as_str();

    let (subject, filter) = match kind {
        IdentifierKind::ProductId => (product_iri(value), None),
        IdentifierKind::HcpcsCode => ("?product".to_string(), Some((HCPCS_CODE, value))),
        IdentifierKind::DxCode => ("?product".to_string(), Some((DX_CODE, value))),
    };

    let select = projected_vars(kind)
        .iter()
        .map(|var| format!("?{var}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut body = format!(
        "SELECT {select}\n\
         WHERE {{\n\
         \x20   {subject} ex:hasName ?{PRODUCT_NAME} ;\n\
         \x20       ex:hasPrice ?{PRICE} ;\n\
         \x20       ex:hasSupplier ?supplier ;\n\
         \x20       ex:hasHCPCSCode ?{HCPCS_CODE} ;\n\
         \x20       ex:hasDXCode ?{DX_CODE} .\n\
         \x20   ?supplier ex:hasName ?{SUPPLIER_NAME} .\n"
    );
    if let Some((var, value)) = filter {
        body.push_str(&format!("    FILTER(?{var} = {})\n", string_literal(value)));
    }
    body.push_str("}\n");

    QueryText(format!("{}{body}", prefix_block()))
}

fn prefix_block() -> String {
    format!("PREFIX ex: <{DME_NAMESPACE}>\nPREFIX rdf: <{RDF_NAMESPACE}>\n")
}

/// The IRI of a catalog product, `ex:product/<id>` written out in full.
///
/// The identifier is percent-encoded as a single path segment, so it cannot close the IRI or add
/// path segments, query strings or fragments.
pub fn product_iri(product_id: &str) -> String {
    format!(
        "<{DME_NAMESPACE}product/{}>",
        urlencoding::encode(product_id)
    )
}

/// A double-quoted SPARQL string literal holding `value`.
pub fn string_literal(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for c in value.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\'' => result.push_str("\\'"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\u{08}' => result.push_str("\\b"),
            '\u{0c}' => result.push_str("\\f"),
            c if c.is_control() => result.push_str(&format!("\\u{:04X}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
