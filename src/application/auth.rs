/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Token management for the Frisbo API
//!
//! This module handles:
//! - Login with email and password
//! - Pre-issued access tokens
//! - Re-authentication on demand when the token is missing or expired
//! - Logout

use crate::application::config::Config;
use crate::constants::{LOGIN_PATH, LOGOUT_PATH};
use crate::error::AppError;
use crate::model::auth::{Authorization, LoginRequest, Session};
use crate::model::http::{build_url, handle_response};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Authentication manager for the Frisbo API
///
/// Owns the only mutable state of the client: the current [`Session`].
/// There is no background refresh; a new login happens only when a request
/// finds the token missing or expired.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// A pre-issued access token from the configuration seeds the session
    /// without contacting the API.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        let session = config
            .credentials
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(Session::from_token);

        Self {
            config,
            client,
            session: Arc::new(RwLock::new(session)),
        }
    }

    /// Logs in with the configured email and password and stores the token
    ///
    /// # Returns
    /// * `Ok(Session)` - The freshly stored session
    /// * `Err(AppError::Authentication)` - Missing credentials, unreachable server, rejected
    ///   login or unreadable response
    pub async fn authenticate(&self) -> Result<Session, AppError> {
        let credentials = &self.config.credentials;
        let (Some(email), Some(password)) = (
            credentials.email.as_deref().filter(|e| !e.is_empty()),
            credentials.password.as_deref().filter(|p| !p.is_empty()),
        ) else {
            return Err(AppError::Authentication(
                "Email and password are required for authentication".to_string(),
            ));
        };

        info!("Authenticating user: {}", email);

        let url = build_url(&self.config.rest_api.base_url, LOGIN_PATH);
        debug!("Sending login request to: {}", url);

        let sent = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(AppError::from);

        let authorization: Authorization = match sent {
            Ok(response) => handle_response(response).await,
            Err(e) => Err(e),
        }
        .map_err(|e| {
            error!("Authentication failed for {}: {}", email, e);
            AppError::Authentication(format!("Authentication failed: {e}"))
        })?;

        let session = authorization.into_session(Utc::now());
        match session.expires_at {
            Some(expires_at) => info!(
                "Authentication successful (token expires at {})",
                expires_at.to_rfc3339()
            ),
            None => info!("Authentication successful"),
        }

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());
        Ok(session)
    }

    /// Whether a token is held and has not expired
    pub async fn is_authenticated(&self) -> bool {
        let session = self.session.read().await;
        match session.as_ref() {
            Some(sess) if sess.is_expired() => {
                warn!("Access token has expired");
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Returns a valid session, logging in again when allowed
    ///
    /// # Returns
    /// * `Ok(Session)` - Current or freshly obtained session
    /// * `Err(AppError::Authentication)` - No valid token and automatic login is disabled
    ///   or impossible for lack of credentials
    pub async fn ensure_token(&self) -> Result<Session, AppError> {
        {
            let session = self.session.read().await;
            if let Some(sess) = session.as_ref().filter(|s| !s.is_expired()) {
                return Ok(sess.clone());
            }
        }

        if !self.config.auto_authenticate {
            error!("Not authenticated and automatic authentication is disabled");
            return Err(AppError::Authentication(
                "Not authenticated and automatic authentication is disabled".to_string(),
            ));
        }

        if !self.config.credentials.can_login() {
            error!("Not authenticated and no credentials available");
            return Err(AppError::Authentication(
                "Not authenticated and no credentials available".to_string(),
            ));
        }

        info!("Re-authenticating due to expired or missing token");
        self.authenticate().await
    }

    /// Returns the stored session without validating or refreshing it
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Logs out and clears the current session
    ///
    /// The session is cleared even when the remote logout fails; the failure is
    /// still returned to the caller.
    pub async fn logout(&self) -> Result<(), AppError> {
        let Some(session) = self.current_session().await else {
            debug!("Logout requested without an active session");
            return Ok(());
        };

        info!(
            "Logging out user: {}",
            self.config.credentials.email.as_deref().unwrap_or("<token>")
        );

        let url = build_url(&self.config.rest_api.base_url, LOGOUT_PATH);
        let result = match self
            .client
            .get(&url)
            .header("Authorization", session.authorization_header())
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => handle_response::<Value>(response).await.map(|_| ()),
            Err(e) => Err(AppError::from(e)),
        };

        let mut sess = self.session.write().await;
        *sess = None;

        match &result {
            Ok(()) => info!("Logout successful"),
            Err(e) => warn!("Remote logout failed, local session cleared anyway: {}", e),
        }
        result
    }
}
