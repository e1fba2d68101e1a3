use crate::application::pagination::Paginator;
use crate::error::AppError;
use crate::model::requests::{CreateOrderRequest, ListParams, UpdateOrderRequest};
use crate::presentation::order::Order;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Service for creating, updating and driving orders through fulfillment
///
/// Lifecycle actions (`cancel`, `shipOrder`, ...) each issue exactly one request
/// and return the server's JSON answer as is.
pub trait OrderService: Send + Sync {
    /// Lists the orders of an organization
    async fn list_orders(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Order>, AppError>;

    /// Gets a single order
    async fn get_order(&self, organization_id: u64, order_id: u64) -> Result<Order, AppError>;

    /// Creates a new order
    async fn create_order(
        &self,
        organization_id: u64,
        order: &CreateOrderRequest,
    ) -> Result<Order, AppError>;

    /// Updates the given fields of an order
    async fn update_order(
        &self,
        organization_id: u64,
        order_id: u64,
        update: &UpdateOrderRequest,
    ) -> Result<Order, AppError>;

    /// Cancels an order
    async fn cancel_order(&self, organization_id: u64, order_id: u64) -> Result<Value, AppError>;

    /// Sends an order through processing again
    async fn reprocess_order(&self, organization_id: u64, order_id: u64)
    -> Result<Value, AppError>;

    /// Confirms that an order has been fulfilled
    async fn confirm_fulfillment(
        &self,
        organization_id: u64,
        order_id: u64,
    ) -> Result<Value, AppError>;

    /// Marks an order as shipped, optionally with its air waybill number
    async fn ship_order(
        &self,
        organization_id: u64,
        order_id: u64,
        awb: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Marks an order as delivered
    async fn deliver_order(&self, organization_id: u64, order_id: u64) -> Result<Value, AppError>;

    /// Marks an order as returned
    async fn return_order(&self, organization_id: u64, order_id: u64) -> Result<Value, AppError>;
}
