/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status of an inbound (inventory) request
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum InboundStatus {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Declined")]
    Declined,
    #[serde(rename = "Pending approval")]
    PendingApproval,
    #[serde(rename = "Sending to WMS")]
    SendingToWms,
    #[serde(rename = "WMS error")]
    WmsError,
    #[serde(rename = "Ready for counting")]
    ReadyForCounting,
    #[serde(rename = "Pending Completion")]
    PendingCompletion,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Completed with differences")]
    CompletedWithDifferences,
    #[serde(rename = "Confirming")]
    Confirming,
    #[serde(rename = "Confirmed")]
    Confirmed,
    #[serde(rename = "Confirmed with differences")]
    ConfirmedWithDifferences,
    #[serde(rename = "Confirming error")]
    ConfirmingError,
}

impl InboundStatus {
    /// Whether the request reached a terminal state
    #[must_use]
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            InboundStatus::Declined
                | InboundStatus::Confirmed
                | InboundStatus::ConfirmedWithDifferences
        )
    }
}

/// Inbound inventory request (goods announced to a warehouse)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct InventoryItem {
    /// Identifier of the inbound request
    #[serde(
        rename = "_id",
        alias = "inventory_request_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inventory_request_id: Option<u64>,
    #[serde(default)]
    pub organization_id: Option<u64>,
    /// Destination warehouse
    #[serde(default)]
    pub warehouse_id: Option<u64>,
    /// Current status
    #[serde(default)]
    pub status: Option<InboundStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Announced products, passed through untouched
    #[serde(default)]
    pub products: Option<Vec<Value>>,
}
