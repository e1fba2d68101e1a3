/// Inbound inventory service interface
pub mod inbound;
/// Invoice service interface
pub mod invoice;
/// Order service interface
pub mod order;
/// Organization service interface
pub mod organization;
/// Product and stock service interface
pub mod product;
