use crate::application::pagination::Paginator;
use crate::error::AppError;
use crate::model::requests::ListParams;
use crate::presentation::invoice::{Invoice, InvoiceSeries};
use async_trait::async_trait;

#[async_trait]
/// Read-only access to invoices and invoice numbering series
pub trait InvoiceService: Send + Sync {
    /// Lists the invoices of an organization
    async fn list_invoices(
        &self,
        organization_id: u64,
        params: ListParams,
    ) -> Result<Paginator<Invoice>, AppError>;

    /// Lists the invoice series of an organization
    async fn list_invoice_series(&self, organization_id: u64)
    -> Result<Vec<InvoiceSeries>, AppError>;
}
