/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Method, Proxy, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Builds the underlying reqwest client from the configuration
///
/// Applies the user agent, the request timeout and the optional proxy.
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.rest_api.timeout));

    if let Some(proxy) = &config.proxy {
        let proxy = Proxy::all(proxy.as_str())
            .map_err(|e| AppError::InvalidInput(format!("invalid proxy URL '{proxy}': {e}")))?;
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}

/// Joins the base URL and an endpoint path
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

/// Picks a human readable message out of an error response
///
/// Prefers `error_description`, then `message`, then the raw body, then the status line.
pub fn extract_error_message(status: StatusCode, body_text: &str, body: Option<&Value>) -> String {
    let from_json = body.and_then(|json| {
        ["error_description", "message"]
            .iter()
            .find_map(|key| json.get(key).and_then(Value::as_str))
            .map(str::to_string)
    });

    match from_json {
        Some(message) if !message.is_empty() => message,
        _ if !body_text.trim().is_empty() => body_text.trim().to_string(),
        _ => format!("HTTP {}", status.as_u16()),
    }
}

/// Maps a non-success status and its body to the matching error variant
pub fn error_from_status(status: StatusCode, body_text: &str) -> AppError {
    let body: Option<Value> = serde_json::from_str(body_text).ok();
    let message = extract_error_message(status, body_text, body.as_ref());

    match status {
        StatusCode::UNAUTHORIZED => AppError::Authentication(message),
        StatusCode::NOT_FOUND => AppError::NotFound { message, body },
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limit exceeded: {}", message);
            AppError::RateLimitExceeded { message, body }
        }
        _ => AppError::Api {
            status,
            message,
            body,
        },
    }
}

/// Checks the status of a response and decodes its JSON body
///
/// An empty success body decodes as JSON `null`.
pub async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let url = response.url().clone();
    let body_text = response.text().await?;

    if !status.is_success() {
        let err = error_from_status(status, &body_text);
        error!("API Error: {} {} - {}", status.as_u16(), url.path(), err);
        return Err(err);
    }

    decode_body(&body_text)
}

/// Decodes a success body, treating an empty body as `null`
pub fn decode_body<T: DeserializeOwned>(body_text: &str) -> Result<T, AppError> {
    let decoded = if body_text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(body_text)
    };

    decoded.map_err(|e| {
        let snippet: String = body_text.chars().take(200).collect();
        AppError::Deserialization(format!("{e} (body: {snippet})"))
    })
}

/// Authenticated transport for the Frisbo API
///
/// Every call asks [`Auth`] for a valid token, attaches it as a bearer header,
/// sends the JSON body and maps the response status to [`AppError`].
/// No retries are performed.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the transport and its token manager without contacting the API
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        info!(
            "Initializing Frisbo HTTP client (base_url={}, proxy={})",
            config.rest_api.base_url,
            if config.proxy.is_some() { "configured" } else { "none" }
        );

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Token manager shared by this transport
    pub fn auth(&self) -> &Arc<Auth> {
        &self.auth
    }

    /// Configuration used by this transport
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Makes a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Makes a POST request; `body` is sent as JSON when present
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, &[], body).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// Makes an authenticated request and decodes the JSON response
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let session = self.auth.ensure_token().await?;
        let url = build_url(&self.config.rest_api.base_url, path);

        debug!(
            "API Request: {} {} (query params: {}, has body: {})",
            method,
            url,
            query.len(),
            body.is_some()
        );

        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header("Authorization", session.authorization_header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let elapsed_ms = started.elapsed().as_millis();

        info!(
            "API Response: {} {} - {} ({} ms)",
            method,
            path,
            response.status().as_u16(),
            elapsed_ms
        );

        handle_response(response).await
    }
}
