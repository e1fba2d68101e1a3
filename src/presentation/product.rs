use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Physical dimensions of a product
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductDimensions {
    /// Width in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Length in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Product of an organization's catalogue
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier, absent before creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Product name
    pub name: String,
    /// Stock keeping unit
    pub sku: String,
    /// Universal product code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// Merchant side code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    /// European article number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    /// VAT as percentage
    #[serde(default)]
    pub vat: i64,
    /// Physical dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,
    /// Whether units are tracked by serial number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_serial_number: Option<bool>,
}
