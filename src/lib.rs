/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Frisbo Client
//!
//! An async client for the Frisbo e-commerce fulfillment REST API.
//!
//! The client takes care of:
//! - Logging in with email and password, or using a pre-issued access token
//! - Re-authenticating on demand when the token has expired
//! - Mapping HTTP failures to [`error::AppError`]
//! - Lazy pagination over list endpoints through [`application::pagination::Paginator`]
//!
//! Resources (organizations, products, orders, invoices and inbound requests) are
//! exposed as service traits implemented by [`application::client::Client`].
//!
//! ```ignore
//! use frisbo_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let mut orders = client.list_orders(921, ListParams::default()).await?;
//! while let Some(order) = orders.next().await? {
//!     info!("{}", order.order_reference);
//! }
//! ```

/// Application layer: authentication, client, configuration and services
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Wire-level models: transport, auth payloads, requests and responses
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Resource records returned by the API
pub mod presentation;
/// Configuration and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
