/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_TOKEN_TYPE;
use chrono::{DateTime, Duration, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

/// Body sent to the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// User email
    pub email: &'a str,
    /// User password
    pub password: &'a str,
}

/// Response of the login endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Authorization {
    /// Bearer token for API authentication
    pub access_token: String,
    /// OpenID token, when issued
    #[serde(default)]
    pub id_token: Option<String>,
    /// Token lifetime in seconds
    pub expires_in: i64,
    /// Token type (usually "Bearer")
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl Authorization {
    /// Converts the login response into a session, anchoring the expiry at `now`
    ///
    /// A non-positive lifetime, or one past the representable range, leaves the expiry unknown.
    #[must_use]
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = (self.expires_in > 0)
            .then(|| Duration::try_seconds(self.expires_in))
            .flatten()
            .and_then(|lifetime| now.checked_add_signed(lifetime));
        Session {
            access_token: self.access_token,
            token_type: self.token_type,
            id_token: self.id_token,
            expires_at,
        }
    }
}

/// Bearer token currently held by the client
#[derive(Clone, PartialEq)]
pub struct Session {
    /// Access token attached to every authenticated request
    pub access_token: String,
    /// Token type (usually "Bearer")
    pub token_type: String,
    /// OpenID token, when issued
    pub id_token: Option<String>,
    /// Expiry instant; `None` when unknown (e.g. pre-issued tokens)
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session from a pre-issued token with no known expiry
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: default_token_type(),
            id_token: None,
            expires_at: None,
        }
    }

    /// Whether the token is past its expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether the token is past its expiry at the given instant
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    /// Value of the `Authorization` header for this session
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("has_id_token", &self.id_token.is_some())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
