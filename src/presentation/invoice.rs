use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Line of an invoice
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct InvoiceProduct {
    /// Product identifier
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Unit price, as a decimal string
    pub price: String,
    /// Invoiced quantity
    pub quantity: u32,
    /// VAT as percentage
    pub vat: String,
    /// Applied discount
    #[serde(default)]
    pub discount: Option<String>,
}

/// Invoice issued for an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Invoice identifier
    pub id: u64,
    /// Channel the order came from
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Invoice number within its series
    pub invoice_number: String,
    /// Issue date
    pub invoice_date: String,
    /// Reference of the invoiced order
    pub order_number: String,
    /// Invoiced lines
    pub products: Vec<InvoiceProduct>,
}

/// Invoice numbering series of an organization
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct InvoiceSeries {
    /// Series identifier
    pub id: u64,
    /// Owning organization, as sent by the API
    pub organization_id: String,
    /// Series prefix
    pub series: String,
    /// Current number in the series
    pub number: String,
}
