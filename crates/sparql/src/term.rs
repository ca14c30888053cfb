//! RDF terms as they come back in SPARQL result bindings.
//!
//! The `Display` implementation is the canonical rendering handed to API callers. It follows the
//! plain (unquoted) form used by Jena-style clients so existing consumers see the same strings:
//!
//! | Term | Rendering |
//! |---|---|
//! | IRI | `http://synapsehealth.com/dme/product/1234` |
//! | simple or `xsd:string` literal | `Power wheelchair` |
//! | language-tagged literal | `Rollstuhl@de` |
//! | other typed literal | `129.99^^http://www.w3.org/2001/XMLSchema#decimal` |
//! | blank node | its label |

use std::fmt;

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RdfTerm {
    Iri(String),
    Literal {
        lexical: String,
        language: Option<String>,
        datatype: Option<String>,
    },
    BlankNode(String),
}

impl RdfTerm {
    pub fn iri(value: impl Into<String>) -> Self {
        RdfTerm::Iri(value.into())
    }

    pub fn plain(lexical: impl Into<String>) -> Self {
        RdfTerm::Literal {
            lexical: lexical.into(),
            language: None,
            datatype: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        RdfTerm::Literal {
            lexical: lexical.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        RdfTerm::Literal {
            lexical: lexical.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }
}

impl fmt::Display for RdfTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfTerm::Iri(iri) => f.write_str(iri),
            RdfTerm::BlankNode(label) => f.write_str(label),
            RdfTerm::Literal {
                lexical,
                language: Some(lang),
                ..
            } if !lang.is_empty() => write!(f, "{lexical}@{lang}"),
            RdfTerm::Literal {
                lexical,
                datatype: Some(dt),
                ..
            } if dt != XSD_STRING && dt != RDF_LANG_STRING => write!(f, "{lexical}^^{dt}"),
            RdfTerm::Literal { lexical, .. } => f.write_str(lexical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_renders_bare() {
        let term = RdfTerm::iri("http://synapsehealth.com/dme/supplier/7");
        assert_eq!(term.to_string(), "http://synapsehealth.com/dme/supplier/7");
    }

    #[test]
    fn test_simple_and_xsd_string_literals_render_lexical_form() {
        assert_eq!(RdfTerm::plain("Walker").to_string(), "Walker");
        assert_eq!(RdfTerm::typed("Walker", XSD_STRING).to_string(), "Walker");
    }

    #[test]
    fn test_language_literal_renders_with_tag() {
        assert_eq!(RdfTerm::lang("Gehhilfe", "de").to_string(), "Gehhilfe@de");
    }

    #[test]
    fn test_typed_literal_renders_datatype() {
        let term = RdfTerm::typed("129.99", "http://www.w3.org/2001/XMLSchema#decimal");
        assert_eq!(
            term.to_string(),
            "129.99^^http://www.w3.org/2001/XMLSchema#decimal"
        );
    }

    #[test]
    fn test_blank_node_renders_label() {
        assert_eq!(RdfTerm::BlankNode("b0".into()).to_string(), "b0");
    }
}
