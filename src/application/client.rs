/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::inbound::InboundService;
use crate::application::interfaces::invoice::InvoiceService;
use crate::application::interfaces::order::OrderService;
use crate::application::interfaces::organization::OrganizationService;
use crate::application::interfaces::product::ProductService;
use crate::application::pagination::Paginator;
use crate::constants::{ME_PATH, ORGANIZATIONS_PATH};
use crate::error::AppError;
use crate::model::auth::Session;
use crate::model::http::HttpClient;
use crate::model::requests::{
    CreateChannelRequest, CreateInboundRequest, CreateOrderRequest, CreateProductRequest,
    CreateUserRequest, ListParams, ShipOrderRequest, SyncInventoryRequest, UpdateOrderRequest,
    UpdateProductRequest,
};
use crate::model::responses::ListResponse;
use crate::presentation::inbound::InventoryItem;
use crate::presentation::invoice::{Invoice, InvoiceSeries};
use crate::presentation::order::Order;
use crate::presentation::organization::{Channel, Organization, Warehouse};
use crate::presentation::product::Product;
use crate::presentation::user::User;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

fn require_id(name: &str, id: u64) -> Result<(), AppError> {
    if id == 0 {
        return Err(AppError::InvalidInput(format!("{name} must be a positive id")));
    }
    Ok(())
}

fn organization_path(organization_id: u64, rest: &str) -> Result<String, AppError> {
    require_id("organization_id", organization_id)?;
    Ok(format!("{ORGANIZATIONS_PATH}/{organization_id}{rest}"))
}

/// Frisbo API client
///
/// Implements every resource service on top of a shared [`HttpClient`].
/// Cloning is cheap and clones share the same session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client and logs in straight away when the configuration allows it
    ///
    /// The initial login happens only with automatic authentication enabled, email
    /// and password present and no pre-issued token. Invalid credentials therefore
    /// fail here with [`AppError::Authentication`].
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        let config = client.http_client.config();
        if config.auto_authenticate
            && config.credentials.can_login()
            && !config.credentials.has_access_token()
        {
            client.authenticate().await?;
        }
        Ok(client)
    }

    /// Creates a client without contacting the API
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Logs in with the configured email and password
    pub async fn authenticate(&self) -> Result<Session, AppError> {
        self.http_client.auth().authenticate().await
    }

    /// Whether a non-expired token is held
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.auth().is_authenticated().await
    }

    /// Makes sure a valid token is held, logging in again when allowed
    pub async fn ensure_authenticated(&self) -> Result<(), AppError> {
        self.http_client.auth().ensure_token().await.map(|_| ())
    }

    /// Logs out and forgets the token
    pub async fn logout(&self) -> Result<(), AppError> {
        self.http_client.auth().logout().await
    }

    /// Gets the profile of the authenticated user
    pub async fn me(&self) -> Result<User, AppError> {
        debug!("Getting current user");
        self.http_client.get(ME_PATH, &[]).await
    }

    /// Underlying transport, for endpoints without a typed wrapper
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    fn paginate<T: DeserializeOwned + Send>(&self, path: String, params: ListParams) -> Paginator<T> {
        Paginator::new(self.http_client.clone(), path, params)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let list: ListResponse<T> = self.http_client.get(path, &[]).await?;
        Ok(list.into_vec())
    }

    async fn post_action(&self, path: String) -> Result<Value, AppError> {
        info!("Executing action: {}", path);
        self.http_client.post(&path, None::<&()>).await
    }

    fn order_action_path(
        organization_id: u64,
        order_id: u64,
        action: &str,
    ) -> Result<String, AppError> {
        require_id("order_id", order_id)?;
        organization_path(
            organization_id,
            &format!("/orders/{order_id}/actions/{action}"),
        )
    }

    fn inbound_action_path(
        organization_id: u64,
        inventory_request_id: u64,
        action: &str,
    ) -> Result<String, AppError> {
        require_id("inventory_request_id", inventory_request_id)?;
        organization_path(
            organization_id,
            &format!("/inventory/{inventory_request_id}/actions/{action}"),
        )
    }
}

#[async_trait]
impl OrganizationService for Client {
    async fn list_organizations(
        &self,
        params: ListParams,
    ) -> Result<Paginator<Organization>, AppError> {
        Ok(self.paginate(ORGANIZATIONS_PATH.to_string(), params))
    }

    async fn get_organization(&self, organization_id: u64) -> Result<Organization, AppError> {
        let path = organization_path(organization_id, "")?;
        info!("Getting organization: {}", organization_id);
        self.http_client.get(&path, &[]).await
    }

    async fn list_warehouses(&self, organization_id: u64) -> Result<Vec<Warehouse>, AppError> {
        let path = organization_path(organization_id, "/warehouses")?;
        self.get_list(&path).await
    }

    async fn list_channels(&self, organization_id: u64) -> Result<Vec<Channel>, AppError> {
        let path = organization_path(organization_id, "/channels")?;
        self.get_list(&path).await
    }

    async fn create_channel(
        &self,
        organization_id: u64,
        channel: &CreateChannelRequest,
    ) -> Result<Channel, AppError> {
        let path = organization_path(organization_id, "/channels")?;
        channel.validate()?;
        info!("Creating channel '{}' for organization {}", channel.name, organization_id);
        self.http_client.post(&path, Some(channel)).await
    }

    async fn list_users(&self, organization_id: u64) -> Result<Vec<User>, AppError> {
        let path = organization_path(organization_id, "/users")?;
        self.get_list(&path).await
    }

    async fn create_user(
        &self,
        organization_id: u64,
        user: &CreateUserRequest,
    ) -> Result<User, AppError> {
        let path = organization_path(organization_id, "/users")?;
        user.validate()?;
        info!("Creating user {} for organization {}", user.email, organization_id);
        self.http_client.post(&path, Some(user)).await
    }
}

#[async_trait]
impl ProductService for Client {
    async fn list_products(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Product>, AppError> {
        let path = organization_path(organization_id, "/products")?;
        Ok(self.paginate(path, params))
    }

    async fn get_product(
        &self,
        organization_id: u64,
        product_id: u64,
    ) -> Result<Product, AppError> {
        require_id("product_id", product_id)?;
        let path = organization_path(organization_id, &format!("/products/{product_id}"))?;
        self.http_client.get(&path, &[]).await
    }

    async fn create_product(
        &self,
        organization_id: u64,
        product: &CreateProductRequest,
    ) -> Result<Product, AppError> {
        let path = organization_path(organization_id, "/products")?;
        product.validate()?;
        info!("Creating product {} for organization {}", product.sku, organization_id);
        self.http_client.post(&path, Some(product)).await
    }

    async fn update_product(
        &self,
        organization_id: u64,
        product_id: u64,
        update: &UpdateProductRequest,
    ) -> Result<Product, AppError> {
        require_id("product_id", product_id)?;
        let path = organization_path(organization_id, &format!("/products/{product_id}"))?;
        info!("Updating product {} for organization {}", product_id, organization_id);
        self.http_client.put(&path, update).await
    }

    async fn list_inventory(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Value>, AppError> {
        let path = organization_path(organization_id, "/inventory")?;
        Ok(self.paginate(path, params))
    }

    async fn sync_inventory(
        &self,
        organization_id: u64,
        inventory: &SyncInventoryRequest,
    ) -> Result<Value, AppError> {
        let path = organization_path(organization_id, "/inventory")?;
        inventory.validate()?;
        info!(
            "Syncing {} stock lines for organization {}",
            inventory.products.len(),
            organization_id
        );
        self.http_client.post(&path, Some(inventory)).await
    }
}

#[async_trait]
impl OrderService for Client {
    async fn list_orders(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Order>, AppError> {
        let path = organization_path(organization_id, "/orders")?;
        Ok(self.paginate(path, params))
    }

    async fn get_order(&self, organization_id: u64, order_id: u64) -> Result<Order, AppError> {
        require_id("order_id", order_id)?;
        let path = organization_path(organization_id, &format!("/orders/{order_id}"))?;
        info!("Getting order {} of organization {}", order_id, organization_id);
        self.http_client.get(&path, &[]).await
    }

    async fn create_order(
        &self,
        organization_id: u64,
        order: &CreateOrderRequest,
    ) -> Result<Order, AppError> {
        let path = organization_path(organization_id, "/orders")?;
        order.validate()?;
        info!(
            "Creating order {} for organization {}",
            order.order_reference, organization_id
        );
        self.http_client.post(&path, Some(order)).await
    }

    async fn update_order(
        &self,
        organization_id: u64,
        order_id: u64,
        update: &UpdateOrderRequest,
    ) -> Result<Order, AppError> {
        require_id("order_id", order_id)?;
        let path = organization_path(organization_id, &format!("/orders/{order_id}"))?;
        info!("Updating order {} of organization {}", order_id, organization_id);
        self.http_client.put(&path, update).await
    }

    async fn cancel_order(&self, organization_id: u64, order_id: u64) -> Result<Value, AppError> {
        let path = Self::order_action_path(organization_id, order_id, "cancel")?;
        self.post_action(path).await
    }

    async fn reprocess_order(
        &self,
        organization_id: u64,
        order_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::order_action_path(organization_id, order_id, "reprocess")?;
        self.post_action(path).await
    }

    async fn confirm_fulfillment(
        &self,
        organization_id: u64,
        order_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::order_action_path(organization_id, order_id, "confirmFulfillment")?;
        self.post_action(path).await
    }

    async fn ship_order(
        &self,
        organization_id: u64,
        order_id: u64,
        awb: Option<&str>,
    ) -> Result<Value, AppError> {
        let path = Self::order_action_path(organization_id, order_id, "shipOrder")?;
        let body = ShipOrderRequest {
            awb: awb.filter(|a| !a.is_empty()),
        };
        info!("Executing action: {} (awb: {})", path, body.awb.unwrap_or("none"));
        self.http_client.post(&path, Some(&body)).await
    }

    async fn deliver_order(&self, organization_id: u64, order_id: u64) -> Result<Value, AppError> {
        let path = Self::order_action_path(organization_id, order_id, "deliverOrder")?;
        self.post_action(path).await
    }

    async fn return_order(&self, organization_id: u64, order_id: u64) -> Result<Value, AppError> {
        let path = Self::order_action_path(organization_id, order_id, "returnOrder")?;
        self.post_action(path).await
    }
}

#[async_trait]
impl InvoiceService for Client {
    async fn list_invoices(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Invoice>, AppError> {
        let path = organization_path(organization_id, "/invoices")?;
        Ok(self.paginate(path, params))
    }

    async fn list_invoice_series(
        &self,
        organization_id: u64,
    ) -> Result<Vec<InvoiceSeries>, AppError> {
        let path = organization_path(organization_id, "/invoices/series")?;
        self.get_list(&path).await
    }
}

#[async_trait]
impl InboundService for Client {
    async fn list_inbound(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<InventoryItem>, AppError> {
        let path = organization_path(organization_id, "/inventory")?;
        Ok(self.paginate(path, params))
    }

    async fn get_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<InventoryItem, AppError> {
        require_id("inventory_request_id", inventory_request_id)?;
        let path = organization_path(
            organization_id,
            &format!("/inventory/{inventory_request_id}"),
        )?;
        self.http_client.get(&path, &[]).await
    }

    async fn create_inbound(
        &self,
        organization_id: u64,
        inbound: &CreateInboundRequest,
    ) -> Result<InventoryItem, AppError> {
        let path = organization_path(organization_id, "/inventory")?;
        inbound.validate()?;
        info!(
            "Creating inbound request for warehouse {} of organization {}",
            inbound.warehouse_id, organization_id
        );
        self.http_client.post(&path, Some(inbound)).await
    }

    async fn send_inbound_to_wms(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::inbound_action_path(organization_id, inventory_request_id, "sendToWms")?;
        self.post_action(path).await
    }

    async fn approve_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::inbound_action_path(organization_id, inventory_request_id, "approve")?;
        self.post_action(path).await
    }

    async fn complete_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::inbound_action_path(organization_id, inventory_request_id, "complete")?;
        self.post_action(path).await
    }

    async fn confirm_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::inbound_action_path(organization_id, inventory_request_id, "confirm")?;
        self.post_action(path).await
    }

    async fn reprocess_inbound(
        &self,
        organization_id: u64,
        inventory_request_id: u64,
    ) -> Result<Value, AppError> {
        let path = Self::inbound_action_path(organization_id, inventory_request_id, "reprocess")?;
        self.post_action(path).await
    }
}
