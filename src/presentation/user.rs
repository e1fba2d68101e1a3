use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Frisbo user, as returned by `/v1/me` and the organization users endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Whether the account is active
    pub status: bool,
    /// Role list as sent by the API
    #[serde(default)]
    pub roles: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Confirmation flag
    #[serde(default)]
    pub confirmed: Option<i64>,
    /// Pending confirmation code
    #[serde(default)]
    pub confirmation_code: Option<String>,
}
