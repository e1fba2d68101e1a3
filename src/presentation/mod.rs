/// Inbound inventory request models
pub mod inbound;
/// Invoice models
pub mod invoice;
/// Order, customer and courier models
pub mod order;
/// Organization, channel and warehouse models
pub mod organization;
/// Product catalogue models
pub mod product;
/// User models
pub mod user;

pub use inbound::*;
pub use invoice::*;
pub use order::*;
pub use organization::*;
pub use product::*;
pub use user::*;
