use crate::application::pagination::Paginator;
use crate::error::AppError;
use crate::model::requests::{CreateInboundRequest, ListParams};
use crate::presentation::inbound::InventoryItem;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Interface to inbound inventory requests (goods announced to a warehouse)
pub trait InboundService: Send + Sync {
    /// Lists the inbound requests of an organization
    async fn list_inbound(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<InventoryItem>, AppError>;

    /// Gets a single inbound request
    async fn get_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<InventoryItem, AppError>;

    /// Announces a new inbound shipment
    async fn create_inbound(
        &self,
        organization_id: u64,
        inbound: &CreateInboundRequest,
    ) -> Result<InventoryItem, AppError>;

    /// Forwards an inbound request to the warehouse management system
    async fn send_inbound_to_wms(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError>;

    /// Approves an inbound request
    async fn approve_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError>;

    /// Marks an inbound request as completed
    async fn complete_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError>;

    /// Confirms the received quantities
    async fn confirm_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError>;

    /// Sends an inbound request through processing again
    async fn reprocess_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError>;
}
