/// Token management
pub mod auth;
/// Frisbo API client implementing every resource service
pub mod client;
/// Application configuration module
pub mod config;
/// Resource service interfaces
pub mod interfaces;
/// Lazy iteration over paginated endpoints
pub mod pagination;
