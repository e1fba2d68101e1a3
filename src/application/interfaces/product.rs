use crate::application::pagination::Paginator;
use crate::error::AppError;
use crate::model::requests::{
    CreateProductRequest, ListParams, SyncInventoryRequest, UpdateProductRequest,
};
use crate::presentation::product::Product;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Interface to the product catalogue and stock endpoints
pub trait ProductService: Send + Sync {
    /// Lists the products of an organization
    async fn list_products(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Product>, AppError>;

    /// Gets a single product
    async fn get_product(&self, organization_id: u64, product_id: u64)
    -> Result<Product, AppError>;

    /// Creates a product
    async fn create_product(
        &self,
        organization_id: u64,
        product: &CreateProductRequest,
    ) -> Result<Product, AppError>;

    /// Updates the given fields of a product
    async fn update_product(
        &self,
        organization_id: u64,
        product_id: u64,
        update: &UpdateProductRequest,
    ) -> Result<Product, AppError>;

    /// Lists stock levels; entries are returned as raw JSON
    async fn list_inventory(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Value>, AppError>;

    /// Pushes stock levels per SKU
    async fn sync_inventory(
        &self,
        organization_id: u64,
        inventory: &SyncInventoryRequest,
    ) -> Result<Value, AppError>;
}
