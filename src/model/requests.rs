/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_START_PAGE;
use crate::error::AppError;
use crate::presentation::order::{Address, Customer, OrderProduct};
use crate::presentation::product::ProductDimensions;
use serde::Serialize;
use serde_json::{Map, Value};

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// First page to fetch (default: 1)
    pub page: Option<u32>,
    /// Requested page size; the server default applies when unset
    pub per_page: Option<u32>,
    /// Additional filters, sorting, etc. sent as query pairs
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    /// Create parameters starting at the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first page to fetch
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Add a filter query pair
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Page the paginator starts from (never below 1)
    #[must_use]
    pub fn start_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_START_PAGE).max(1)
    }

    /// Query pairs for the given page
    ///
    /// `page` and `per_page` in `filters` are ignored; the paginator owns them.
    #[must_use]
    pub fn to_query(&self, page: u32) -> Vec<(String, String)> {
        let mut query: Vec<(String, String)> = self
            .filters
            .iter()
            .filter(|(key, _)| key != "page" && key != "per_page")
            .cloned()
            .collect();
        query.push(("page".to_string(), page.to_string()));
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        query
    }
}

/// Model for creating a sales channel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateChannelRequest {
    /// Channel name
    pub name: String,
    /// Channel type (e.g. "shopify", "woocommerce")
    #[serde(rename = "type")]
    pub channel_type: String,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateChannelRequest {
    /// Create a request with the required fields
    pub fn new(name: impl Into<String>, channel_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel_type: channel_type.into(),
            extra: Map::new(),
        }
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("type", &self.channel_type)
    }
}

/// Model for adding a user to an organization
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateUserRequest {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Login email
    pub email: String,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateUserRequest {
    /// Create a request with the required fields
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_text("email", &self.email)
    }
}

/// Model for creating a product
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Stock keeping unit
    pub sku: String,
    /// VAT as percentage (default 0)
    pub vat: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_serial_number: Option<bool>,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateProductRequest {
    /// Create a request with name and SKU; VAT defaults to 0
    pub fn new(name: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            vat: 0,
            upc: None,
            external_code: None,
            ean: None,
            dimensions: None,
            has_serial_number: None,
            extra: Map::new(),
        }
    }

    /// Set the VAT percentage
    pub fn with_vat(mut self, vat: i64) -> Self {
        self.vat = vat;
        self
    }

    /// Set the EAN code
    pub fn with_ean(mut self, ean: impl Into<String>) -> Self {
        self.ean = Some(ean.into());
        self
    }

    /// Set the UPC code
    pub fn with_upc(mut self, upc: impl Into<String>) -> Self {
        self.upc = Some(upc.into());
        self
    }

    /// Set the merchant side code
    pub fn with_external_code(mut self, external_code: impl Into<String>) -> Self {
        self.external_code = Some(external_code.into());
        self
    }

    /// Set the physical dimensions
    pub fn with_dimensions(mut self, dimensions: ProductDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("sku", &self.sku)
    }
}

/// Partial update of a product; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ProductDimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_serial_number: Option<bool>,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpdateProductRequest {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the VAT percentage
    pub fn with_vat(mut self, vat: i64) -> Self {
        self.vat = Some(vat);
        self
    }

    /// Set the physical dimensions
    pub fn with_dimensions(mut self, dimensions: ProductDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Stock line used by inventory sync and inbound requests
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InventoryLine {
    /// Product SKU
    pub sku: String,
    /// Quantity in units
    pub quantity: u32,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InventoryLine {
    /// Create a line for `quantity` units of `sku`
    pub fn new(sku: impl Into<String>, quantity: u32) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            extra: Map::new(),
        }
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Model for synchronising stock levels
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SyncInventoryRequest {
    /// Stock levels per SKU
    pub products: Vec<InventoryLine>,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SyncInventoryRequest {
    /// Create a sync request for the given lines
    pub fn new(products: Vec<InventoryLine>) -> Self {
        Self {
            products,
            extra: Map::new(),
        }
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), AppError> {
        if self.products.is_empty() {
            return Err(AppError::InvalidInput("products is required".to_string()));
        }
        self.products
            .iter()
            .try_for_each(|line| require_text("products[].sku", &line.sku))
    }
}

/// Model for creating an order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateOrderRequest {
    /// Unique order reference
    pub order_reference: String,
    /// Customer receiving the parcel
    pub shipping_customer: Customer,
    /// Delivery address
    pub shipping_address: Address,
    /// Ordered lines
    pub products: Vec<OrderProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_delivery_time: Option<String>,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateOrderRequest {
    /// Create an order with the required fields
    pub fn new(
        order_reference: impl Into<String>,
        shipping_customer: Customer,
        shipping_address: Address,
        products: Vec<OrderProduct>,
    ) -> Self {
        Self {
            order_reference: order_reference.into(),
            shipping_customer,
            shipping_address,
            products,
            channel_id: None,
            warehouse_id: None,
            billing_customer: None,
            billing_address: None,
            discount: None,
            currency: None,
            notes: None,
            ordered_date: None,
            preferred_delivery_time: None,
            extra: Map::new(),
        }
    }

    /// Set the sales channel; 0 is treated as unset
    pub fn with_channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = (channel_id > 0).then_some(channel_id);
        self
    }

    /// Set the warehouse; 0 is treated as unset
    pub fn with_warehouse_id(mut self, warehouse_id: u64) -> Self {
        self.warehouse_id = (warehouse_id > 0).then_some(warehouse_id);
        self
    }

    /// Set billing customer and address
    pub fn with_billing(mut self, customer: Customer, address: Address) -> Self {
        self.billing_customer = Some(customer);
        self.billing_address = Some(address);
        self
    }

    /// Set the order currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set free text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("order_reference", &self.order_reference)?;
        if self.products.is_empty() {
            return Err(AppError::InvalidInput("products is required".to_string()));
        }
        Ok(())
    }
}

/// Partial update of an order; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<OrderProduct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_delivery_time: Option<String>,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpdateOrderRequest {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the delivery address
    pub fn with_shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }

    /// Replace the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Body of the `shipOrder` action; serializes to `{}` without an AWB
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ShipOrderRequest<'a> {
    /// Air waybill number of the shipment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awb: Option<&'a str>,
}

/// Model for announcing an inbound shipment to a warehouse
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateInboundRequest {
    /// Destination warehouse
    pub warehouse_id: u64,
    /// Announced products
    pub products: Vec<InventoryLine>,
    /// Any other field accepted by the API
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateInboundRequest {
    /// Create an inbound request for a warehouse
    pub fn new(warehouse_id: u64, products: Vec<InventoryLine>) -> Self {
        Self {
            warehouse_id,
            products,
            extra: Map::new(),
        }
    }

    /// Add a field not modelled explicitly
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<(), AppError> {
        if self.warehouse_id == 0 {
            return Err(AppError::InvalidInput("warehouse_id is required".to_string()));
        }
        if self.products.is_empty() {
            return Err(AppError::InvalidInput("products is required".to_string()));
        }
        Ok(())
    }
}
