/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Frisbo Client Prelude
//!
//! Brings the client, its configuration, the service traits and the resource
//! records into scope with a single import.
//!
//! ```rust,no_run
//! use frisbo_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::from_credentials("ops@shop.ro", "secret")).await?;
//! let _warehouses = client.list_warehouses(921).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND TRANSPORT
// ============================================================================

pub use crate::application::auth::Auth;
pub use crate::application::client::Client;
pub use crate::application::pagination::Paginator;
pub use crate::model::auth::Session;
pub use crate::model::http::HttpClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::inbound::InboundService;
pub use crate::application::interfaces::invoice::InvoiceService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::interfaces::organization::OrganizationService;
pub use crate::application::interfaces::product::ProductService;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

pub use crate::model::requests::{
    CreateChannelRequest, CreateInboundRequest, CreateOrderRequest, CreateProductRequest,
    CreateUserRequest, InventoryLine, ListParams, ShipOrderRequest, SyncInventoryRequest,
    UpdateOrderRequest, UpdateProductRequest,
};
pub use crate::model::responses::{ListResponse, PageResponse};

// ============================================================================
// RESOURCE RECORDS
// ============================================================================

pub use crate::presentation::inbound::{InboundStatus, InventoryItem};
pub use crate::presentation::invoice::{Invoice, InvoiceProduct, InvoiceSeries};
pub use crate::presentation::order::{
    Address, Courier, Customer, FulfillmentStage, FulfillmentStatus, Order, OrderProduct,
};
pub use crate::presentation::organization::{Channel, Organization, Warehouse};
pub use crate::presentation::product::{Product, ProductDimensions};
pub use crate::presentation::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
