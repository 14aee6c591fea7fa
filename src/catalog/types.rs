//! Raw catalog payloads and the simplified envelopes handed to the agent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upstream field names as the catalog returns them.
pub mod fields {
    pub const SUP_ID: &str = "SUP_ID";
    pub const SUP_BRAND: &str = "SUP_BRAND";
    pub const ART_ID: &str = "ART_ID";
    pub const ART_ARTICLE_NR: &str = "ART_ARTICLE_NR";
    pub const ART_PRODUCT_NAME: &str = "ART_PRODUCT_NAME";
    pub const ARL_NUMBER: &str = "ARL_NUMBER";
    pub const NAME: &str = "NAME";
}

/// Response body exactly as the catalog service returns it.
///
/// The schema belongs to the remote API; only presence is checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCatalogResponse {
    #[serde(default)]
    pub data: Option<RawList>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// `data` object of a catalog response.
///
/// `list` is untyped; anything other than an array reads as no items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawList {
    #[serde(default)]
    pub list: Option<Value>,
}

impl RawCatalogResponse {
    /// Items under `data.list`, empty when either level is missing or not a list.
    pub fn items(&self) -> &[Value] {
        self.data
            .as_ref()
            .and_then(|d| d.list.as_ref())
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Top-level `error` rendered as text, if the service reported one.
    ///
    /// `null`, `false` and blank strings mean no error.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Read a scalar field of a raw list item as a string.
///
/// Numbers and booleans are stringified; anything else reads as `""`.
pub fn field_str(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Whitelist projection of a catalog response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: EnvelopeData<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeData<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Default for EnvelopeData<T> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}

fn default_success() -> bool {
    true
}

impl<T> SimplifiedEnvelope<T> {
    pub fn new(list: Vec<T>) -> Self {
        Self {
            success: true,
            data: EnvelopeData { list },
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn items(&self) -> &[T] {
        &self.data.list
    }

    pub fn len(&self) -> usize {
        self.data.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.list.is_empty()
    }
}

impl<T> Default for SimplifiedEnvelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Supplier candidate from the first, article-only search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierRef {
    pub supplier_id: String,
    pub supplier_brand: String,
}

/// Article found by the supplier-scoped search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSummary {
    pub article_id: String,
    pub article_number: String,
    pub supplier_brand: String,
    pub product_name: String,
}

/// Original-equipment cross-reference number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OemNumber {
    pub oem_number: String,
}

/// Vehicle model a part fits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleApplicability {
    pub name: String,
}

/// Identity of a part as it accumulates over the first two searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartIdentity {
    pub part_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sup_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sup_brand: Option<String>,
}

impl PartIdentity {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            sup_id: None,
            sup_brand: None,
        }
    }

    /// Attach the supplier chosen from a first-stage search result.
    pub fn with_supplier(mut self, supplier: &SupplierRef) -> Self {
        self.sup_id = Some(supplier.supplier_id.clone());
        self.sup_brand = Some(supplier.supplier_brand.clone());
        self
    }
}
