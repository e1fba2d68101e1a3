/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Organization (merchant account) registered in Frisbo
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    /// Organization identifier used in every scoped endpoint
    pub organization_id: u64,
    /// Whether the organization is active
    pub is_active: bool,
    /// Organization name
    pub name: String,
    /// Onboarding flag
    #[serde(default)]
    pub first_run_flag: Option<bool>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
    /// VAT registration number
    #[serde(default)]
    pub vat_registration_number: Option<String>,
    /// Trade register number
    #[serde(default)]
    pub trade_register_registration_number: Option<String>,
    /// Free text description
    #[serde(default)]
    pub description: Option<String>,
    /// Contract start date
    #[serde(default)]
    pub contract_start_date: Option<String>,
    /// Contract end date
    #[serde(default)]
    pub contract_end_date: Option<String>,
    /// Address identifier
    #[serde(default)]
    pub address_id: Option<u64>,
    /// Contact identifier
    #[serde(default)]
    pub contact_id: Option<u64>,
}

/// Sales channel of an organization
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    /// Channel identifier
    pub id: u64,
    /// Channel name
    pub name: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Warehouse available to an organization
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Warehouse {
    /// Warehouse identifier
    pub id: u64,
    /// Warehouse name
    pub name: String,
}
