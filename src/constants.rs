/// Default base URL of the Frisbo REST API
pub const DEFAULT_BASE_URL: &str = "https://api.frisbo.ro";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// First page requested by list endpoints
pub const DEFAULT_START_PAGE: u32 = 1;
/// User agent string used in HTTP requests to identify this client to the Frisbo API
pub const USER_AGENT: &str = concat!("frisbo-client/", env!("CARGO_PKG_VERSION"));
/// Token type assumed when the login response does not provide one
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Login endpoint
pub const LOGIN_PATH: &str = "/v1/auth/login";
/// Logout endpoint
pub const LOGOUT_PATH: &str = "/v1/auth/logout";
/// Current user endpoint
pub const ME_PATH: &str = "/v1/me";
/// Organizations collection endpoint
pub const ORGANIZATIONS_PATH: &str = "/v1/organizations";
