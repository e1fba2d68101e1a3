/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Errors returned by the Frisbo client
#[derive(Debug)]
pub enum AppError {
    /// Login failed, credentials are missing or the token was rejected (401)
    Authentication(String),
    /// The requested resource does not exist (404)
    NotFound {
        /// Message extracted from the response
        message: String,
        /// Decoded JSON body, when the server sent one
        body: Option<Value>,
    },
    /// The API rejected the call because of rate limiting (429)
    RateLimitExceeded {
        /// Message extracted from the response
        message: String,
        /// Decoded JSON body, when the server sent one
        body: Option<Value>,
    },
    /// Any other non-2xx response
    Api {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Message extracted from the response
        message: String,
        /// Decoded JSON body, when the server sent one
        body: Option<Value>,
    },
    /// A required argument was missing or invalid; no request was sent
    InvalidInput(String),
    /// Transport failure reported by reqwest
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Response body did not match the expected model
    Deserialization(String),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// HTTP status carried by the error, if it came from an API response
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            AppError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            AppError::RateLimitExceeded { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether this error means the caller is not (or no longer) authenticated
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }

    /// Whether this error is a 404 from the API
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::NotFound { message, .. } => write!(f, "not found: {message}"),
            AppError::RateLimitExceeded { message, .. } => {
                write!(f, "rate limit exceeded: {message}")
            }
            AppError::Api {
                status, message, ..
            } => write!(f, "api error ({}): {message}", status.as_u16()),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
