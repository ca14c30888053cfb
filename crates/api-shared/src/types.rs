//! Response bodies shared across the catalog APIs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    #[schema(example = "Please provide one of: productId, hcpcs, or dx as a query parameter")]
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// One catalog record.
///
/// Only variables bound for the row are present. A product-id lookup can return all five fields;
/// an HCPCS lookup never returns `hcpcsCode` and a diagnosis lookup never returns `dxCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Standard manual wheelchair")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "129.99^^http://www.w3.org/2001/XMLSchema#decimal")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Acme Medical Supply")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "K0001")]
    pub hcpcs_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "M17.11")]
    pub dx_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_record_uses_query_variable_names() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"productName":"Cane","dxCode":"M17.11"}"#)
                .expect("deserialize");
        assert_eq!(record.product_name.as_deref(), Some("Cane"));
        assert_eq!(record.dx_code.as_deref(), Some("M17.11"));
        assert!(record.hcpcs_code.is_none());

        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"productName":"Cane","dxCode":"M17.11"}"#);
    }

    #[test]
    fn test_error_res_shape() {
        let json = serde_json::to_string(&ErrorRes::new("boom")).expect("serialize");
        assert_eq!(json, r#"{"error":"boom"}"#);
    }
}
