use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Authentication credentials for the Frisbo API
///
/// Either an email/password pair, a pre-issued access token, or both. Secrets are
/// never serialized, so displaying a configuration does not leak them.
pub struct Credentials {
    /// Email of the Frisbo user
    pub email: Option<String>,
    /// Password of the Frisbo user
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    /// Access token issued beforehand
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
}

impl Credentials {
    /// Whether an email and a password are both available for login
    #[must_use]
    pub fn can_login(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
            && self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Whether a pre-issued access token is available
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Frisbo REST API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Frisbo API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Proxy URL (`http://`, `https://`, `socks5://` or `socks5h://`)
    pub proxy: Option<String>,
    /// Log in at construction and whenever the token is missing or expired
    pub auto_authenticate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `FRISBO_EMAIL`, `FRISBO_PASSWORD`, `FRISBO_ACCESS_TOKEN`, `FRISBO_BASE_URL`,
    /// `FRISBO_TIMEOUT`, `FRISBO_PROXY` and `FRISBO_AUTO_AUTHENTICATE`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            email: get_env_non_empty("FRISBO_EMAIL"),
            password: get_env_non_empty("FRISBO_PASSWORD"),
            access_token: get_env_non_empty("FRISBO_ACCESS_TOKEN"),
        };

        if !credentials.can_login() && !credentials.has_access_token() {
            warn!(
                "Neither FRISBO_EMAIL/FRISBO_PASSWORD nor FRISBO_ACCESS_TOKEN found in environment variables or .env file"
            );
        }

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&get_env_or_default(
                    "FRISBO_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                )),
                timeout: get_env_or_default("FRISBO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            proxy: get_env_non_empty("FRISBO_PROXY"),
            auto_authenticate: get_env_or_default("FRISBO_AUTO_AUTHENTICATE", true),
        }
    }

    /// Creates a configuration that logs in with email and password
    pub fn from_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_defaults(Credentials {
            email: Some(email.into()),
            password: Some(password.into()),
            access_token: None,
        })
    }

    /// Creates a configuration that uses a pre-issued access token
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self::with_defaults(Credentials {
            email: None,
            password: None,
            access_token: Some(access_token.into()),
        })
    }

    fn with_defaults(credentials: Credentials) -> Self {
        Config {
            credentials,
            rest_api: RestApiConfig::default(),
            proxy: None,
            auto_authenticate: true,
        }
    }

    /// Sets the base URL, stripping any trailing slash
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = normalize_base_url(base_url);
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = timeout_secs;
        self
    }

    /// Routes every request through the given proxy
    #[must_use]
    pub fn with_proxy(mut self, proxy: &str) -> Self {
        self.proxy = Some(proxy.to_string());
        self
    }

    /// Enables or disables automatic login
    #[must_use]
    pub fn with_auto_authenticate(mut self, enabled: bool) -> Self {
        self.auto_authenticate = enabled;
        self
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
