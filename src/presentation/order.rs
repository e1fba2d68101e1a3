/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::product::Product;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fulfillment status of an order
///
/// Wire values are the exact labels emitted by the API.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FulfillmentStatus {
    // Processing
    #[serde(rename = "Processing")]
    Processing,
    #[serde(rename = "Split")]
    Split,
    #[serde(rename = "Split error")]
    SplitError,
    #[serde(rename = "Wms error")]
    WmsError,
    #[serde(rename = "Fulfill error")]
    FulfillError,
    #[serde(rename = "Error")]
    Error,
    #[serde(rename = "Pending awb")]
    PendingAwb,
    #[serde(rename = "Pending COD approval")]
    PendingCodApproval,
    #[serde(rename = "Pending invoice")]
    PendingInvoice,
    #[serde(rename = "Pending stock")]
    PendingStock,
    #[serde(rename = "Pending cancel")]
    PendingCancel,
    #[serde(rename = "Pending checks")]
    PendingChecks,
    #[serde(rename = "External awb")]
    ExternalAwb,
    #[serde(rename = "Preparing documents")]
    PreparingDocuments,
    #[serde(rename = "Delaying processing")]
    DelayingProcessing,
    #[serde(rename = "Stock error")]
    StockError,
    #[serde(rename = "Out of stock")]
    OutOfStock,
    #[serde(rename = "AWB error")]
    AwbError,
    #[serde(rename = "Invoice error")]
    InvoiceError,
    #[serde(rename = "Initializing fulfillment")]
    InitializingFulfillment,
    #[serde(rename = "Awaiting fulfillment order")]
    AwaitingFulfillmentOrder,
    #[serde(rename = "Pending payment")]
    PendingPayment,
    #[serde(rename = "Pending fulfillment")]
    PendingFulfillment,
    #[serde(rename = "Sending to wms")]
    SendingToWms,
    #[serde(rename = "Postponed")]
    Postponed,
    // Picking
    #[serde(rename = "Ready for picking")]
    ReadyForPicking,
    #[serde(rename = "In picking")]
    InPicking,
    #[serde(rename = "Waiting for courier.Invoice error")]
    WaitingForCourierInvoiceError,
    #[serde(rename = "Waiting for courier.Warranty error")]
    WaitingForCourierWarrantyError,
    #[serde(rename = "Waiting for courier")]
    WaitingForCourier,
    // Shipping
    #[serde(rename = "In transit")]
    InTransit,
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    #[serde(rename = "Customer pickup")]
    CustomerPickup,
    #[serde(rename = "Personal Pickup")]
    PersonalPickup,
    #[serde(rename = "Warehouse pickup")]
    WarehousePickup,
    #[serde(rename = "In parcel locker")]
    InParcelLocker,
    #[serde(rename = "Unsuccessful delivery")]
    UnsuccessfulDelivery,
    #[serde(rename = "Partially Delivered")]
    PartiallyDelivered,
    #[serde(rename = "Incorrect Address")]
    IncorrectAddress,
    #[serde(rename = "Delivered")]
    Delivered,
    #[serde(rename = "Refused")]
    Refused,
    #[serde(rename = "Canceled")]
    Canceled,
    #[serde(rename = "Redirected")]
    Redirected,
    #[serde(rename = "Late canceled")]
    LateCanceled,
    // Returning
    #[serde(rename = "Returning to sender")]
    ReturningToSender,
    #[serde(rename = "Received by sender")]
    ReceivedBySender,
    #[serde(rename = "Back to sender")]
    BackToSender,
    #[serde(rename = "Returned")]
    Returned,
    #[serde(rename = "Partially returned")]
    PartiallyReturned,
    #[serde(rename = "Storno failed")]
    StornoFailed,
    #[serde(rename = "Return error")]
    ReturnError,
    #[serde(rename = "Back to sender error")]
    BackToSenderError,
    // Other
    #[serde(rename = "Archived")]
    Archived,
}

/// Courier used to ship an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Courier {
    #[serde(rename = "123kurier")]
    Kurier123,
    AcsGr,
    Apc,
    Auto,
    BrtIt,
    Cargus,
    ColissimoFr,
    CorreosEs,
    CorreosExpress,
    Dhl,
    DhlDe,
    DhlNl,
    DhlUk,
    Dpd,
    DpdCz,
    DpdDe,
    DpdHr,
    DpdHu,
    DpdIt,
    DpdPl,
    DpdSk,
    DpdUk,
    Econt,
    Ecourier,
    EtrakUk,
    EvriUk,
    Exelot,
    Fan,
    FanMd,
    Fedex,
    Foxpost,
    Furdeco,
    GeisCz,
    Gfs,
    Gls,
    GlsAt,
    GlsCz,
    GlsDe,
    GlsHr,
    GlsHu,
    GlsPl,
    GlsSk,
    Inpost,
    Mmp,
    Mock,
    MrwEs,
    Muvi,
    Nemo,
    Novaposhta,
    Paack,
    Packeta,
    Palletforce,
    ParcelForceUk,
    PersonalPickup,
    Pgs,
    PostAt,
    PostCz,
    PostDe,
    PostDk,
    PostEe,
    PostFr,
    PostHr,
    PostIt,
    PostLu,
    PostNl,
    PostPl,
    PostSk,
    PostaMoldovei,
    Postnord,
    PplCz,
    Raben,
    RoyalMailUk,
    Sameday,
    SamedayHu,
    SdaIt,
    ShipvamGr,
    Speedy,
    Spring,
    SpsSk,
    TeamCourierRo,
    Tnt,
    Toyland,
    Tuffnells,
    Unknown,
    Ups,
    XpCourierGr,
}

/// Coarse lifecycle stage of a [`FulfillmentStatus`]
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FulfillmentStage {
    /// Order accepted, documents and stock being prepared
    Processing,
    /// Order in the warehouse picking flow
    Picking,
    /// Parcel handed to the courier
    Shipping,
    /// Parcel on its way back to the sender
    Returning,
    /// Archived orders
    Other,
}

impl FulfillmentStatus {
    /// Lifecycle stage this status belongs to
    #[must_use]
    pub fn stage(&self) -> FulfillmentStage {
        use FulfillmentStatus::*;
        match self {
            ReadyForPicking
            | InPicking
            | WaitingForCourierInvoiceError
            | WaitingForCourierWarrantyError
            | WaitingForCourier => FulfillmentStage::Picking,
            InTransit
            | OutForDelivery
            | CustomerPickup
            | PersonalPickup
            | WarehousePickup
            | InParcelLocker
            | UnsuccessfulDelivery
            | PartiallyDelivered
            | IncorrectAddress
            | Delivered
            | Refused
            | Canceled
            | Redirected
            | LateCanceled => FulfillmentStage::Shipping,
            ReturningToSender
            | ReceivedBySender
            | BackToSender
            | Returned
            | PartiallyReturned
            | StornoFailed
            | ReturnError
            | BackToSenderError => FulfillmentStage::Returning,
            Archived => FulfillmentStage::Other,
            _ => FulfillmentStage::Processing,
        }
    }
}

/// Postal address
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    /// Street and number
    pub street: String,
    /// City
    pub city: String,
    /// County or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// Country
    pub country: String,
    /// Postal code
    pub zip: String,
}

/// Shipping or billing customer
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    /// Customer email
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Phone number
    pub phone: String,
}

/// Line of an order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderProduct {
    /// Product SKU
    pub sku: String,
    /// Product name
    pub name: String,
    /// Unit price, as a decimal string
    pub price: String,
    /// Ordered quantity
    pub quantity: u32,
    /// VAT as percentage
    pub vat: String,
    /// Fixed amount or percentage (e.g. "10%")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_with_vat: Option<String>,
    /// Catalogue product, when expanded by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl OrderProduct {
    /// Creates an order line with the required fields
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: u32,
        vat: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price: price.into(),
            quantity,
            vat: vat.into(),
            ..Default::default()
        }
    }

    /// Sets the line discount
    pub fn with_discount(mut self, discount: impl Into<String>) -> Self {
        self.discount = Some(discount.into());
        self
    }
}

/// Customer order
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order reference chosen by the merchant
    pub order_reference: String,
    /// Frisbo identifier of the order
    #[serde(
        rename = "_id",
        alias = "order_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub order_id: Option<u64>,
    #[serde(default)]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub channel_id: Option<u64>,
    #[serde(default)]
    pub warehouse_id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    /// Fulfillment lifecycle status
    #[serde(default)]
    pub fulfillment_status: Option<FulfillmentStatus>,
    #[serde(default)]
    pub reason_status: Option<String>,
    #[serde(default)]
    pub ordered_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub returned_date: Option<String>,
    #[serde(default)]
    pub canceled_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Courier that shipped the order
    #[serde(default)]
    pub shipped_with: Option<Courier>,
    #[serde(default)]
    pub shipped_date: Option<String>,
    #[serde(default)]
    pub preferred_delivery_time: Option<String>,
    /// Customer receiving the parcel
    pub shipping_customer: Customer,
    /// Delivery address
    pub shipping_address: Address,
    #[serde(default)]
    pub billing_customer: Option<Customer>,
    #[serde(default)]
    pub billing_address: Option<Address>,
    /// Fixed amount or percentage (e.g. "10%")
    #[serde(default)]
    pub discount: Option<String>,
    /// Ordered lines
    pub products: Vec<OrderProduct>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Attached documents, passed through untouched
    #[serde(default)]
    pub attachments: Option<Vec<Value>>,
}

impl Order {
    /// Total number of units across all lines
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.products.iter().map(|p| p.quantity).sum()
    }
}

