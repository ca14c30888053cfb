//! Identifier types for the DME product catalog.
//!
//! A catalog lookup is keyed by exactly one identifier. The accepted kinds, and the order in which
//! they take precedence when a caller supplies more than one, live here so that the core, the REST
//! API and the CLI agree on them.

use std::fmt;

/// Errors that can occur when creating validated identifier values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input text was empty or contained only whitespace
    #[error("identifier value cannot be empty")]
    Empty,
}

/// The kinds of identifier a catalog lookup accepts.
///
/// Variants are declared in precedence order: when several are present, the first one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum IdentifierKind {
    /// Catalog product identifier, anchored directly in the graph.
    ProductId,
    /// Healthcare Common Procedure Coding System code.
    HcpcsCode,
    /// Diagnosis code.
    DxCode,
}

impl IdentifierKind {
    /// All kinds, highest precedence first.
    pub const PRECEDENCE: [IdentifierKind; 3] = [
        IdentifierKind::ProductId,
        IdentifierKind::HcpcsCode,
        IdentifierKind::DxCode,
    ];

    /// The request parameter name callers use for this kind.
    pub fn param_name(&self) -> &'static str {
        match self {
            IdentifierKind::ProductId => "productId",
            IdentifierKind::HcpcsCode => "hcpcs",
            IdentifierKind::DxCode => "dx",
        }
    }

    /// Looks up a kind by its request parameter name.
    pub fn from_param_name(name: &str) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|kind| kind.param_name() == name)
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

/// An identifier value that is guaranteed to be non-empty.
///
/// Input made only of whitespace is rejected. Anything else is kept byte for byte, surrounding
/// whitespace included: the value is not checked for query syntax either, so anything that embeds
/// it in a query must escape it first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierValue(String);

impl IdentifierValue {
    /// Creates a new `IdentifierValue` from the given input.
    ///
    /// # Returns
    ///
    /// The input unchanged, or `Err(IdentifierError::Empty)` if it is empty or whitespace only.
    pub fn new(input: impl AsRef<str>) -> Result<Self, IdentifierError> {
        let input = input.as_ref();
        if input.trim().is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentifierValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for IdentifierValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for IdentifierValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IdentifierValue::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order_is_product_hcpcs_dx() {
        let names: Vec<_> = IdentifierKind::PRECEDENCE
            .iter()
            .map(IdentifierKind::param_name)
            .collect();
        assert_eq!(names, vec!["productId", "hcpcs", "dx"]);
    }

    #[test]
    fn test_from_param_name_is_case_sensitive() {
        assert_eq!(
            IdentifierKind::from_param_name("hcpcs"),
            Some(IdentifierKind::HcpcsCode)
        );
        assert_eq!(IdentifierKind::from_param_name("productid"), None);
        assert_eq!(IdentifierKind::from_param_name("HCPCS"), None);
    }

    #[test]
    fn test_identifier_value_keeps_surrounding_whitespace() {
        let value = IdentifierValue::new("  K0001 \n").expect("should accept padded value");
        assert_eq!(value.as_str(), "  K0001 \n");
    }

    #[test]
    fn test_identifier_value_rejects_blank() {
        assert_eq!(IdentifierValue::new(""), Err(IdentifierError::Empty));
        assert_eq!(IdentifierValue::new(" \t "), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_identifier_value_keeps_query_syntax_verbatim() {
        let value = IdentifierValue::new(r#"M17.11" || true"#).expect("non-empty");
        assert_eq!(value.as_str(), r#"M17.11" || true"#);
    }

    #[test]
    fn test_identifier_value_deserialize_rejects_empty() {
        let err = serde_json::from_str::<IdentifierValue>(r#""   ""#).expect_err("should reject");
        assert!(err.to_string().contains("cannot be empty"));
    }
}
