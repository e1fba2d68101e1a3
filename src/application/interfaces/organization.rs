use crate::application::pagination::Paginator;
use crate::error::AppError;
use crate::model::requests::{CreateChannelRequest, CreateUserRequest, ListParams};
use crate::presentation::organization::{Channel, Organization, Warehouse};
use crate::presentation::user::User;
use async_trait::async_trait;

#[async_trait]
/// Interface to the organization endpoints of the Frisbo API
///
/// Organizations are the tenants every other resource hangs from; their
/// identifier scopes products, orders, invoices and inbound requests.
pub trait OrganizationService: Send + Sync {
    /// Lists the organizations visible to the authenticated user
    async fn list_organizations(&self, params: ListParams)
    -> Result<Paginator<Organization>, AppError>;

    /// Gets a single organization
    async fn get_organization(&self, organization_id: u64) -> Result<Organization, AppError>;

    /// Lists the warehouses available to an organization
    async fn list_warehouses(&self, organization_id: u64) -> Result<Vec<Warehouse>, AppError>;

    /// Lists the sales channels of an organization
    async fn list_channels(&self, organization_id: u64) -> Result<Vec<Channel>, AppError>;

    /// Creates a sales channel
    async fn create_channel(
        &self,
        organization_id: u64,
        channel: &CreateChannelRequest,
    ) -> Result<Channel, AppError>;

    /// Lists the users of an organization
    async fn list_users(&self, organization_id: u64) -> Result<Vec<User>, AppError>;

    /// Adds a user to an organization
    async fn create_user(
        &self,
        organization_id: u64,
        user: &CreateUserRequest,
    ) -> Result<User, AppError>;
}
