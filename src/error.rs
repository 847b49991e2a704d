//! Unified error types for the application shell.

use thiserror::Error;

/// Unified error type for the application shell.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route table construction or navigation error.
    #[error("route error: {0}")]
    Route(#[from] RouteError),

    /// API client error.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// HTTP request error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment deserialization failed.
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    /// Base URL is unset or empty.
    #[error("API_BASE_URL is required")]
    MissingBaseUrl,

    /// Base URL did not parse as an absolute http(s) URL.
    #[error("API_BASE_URL must be an absolute http(s) URL: {0}")]
    InvalidBaseUrl(String),

    /// API key is unset or empty.
    #[error("API_KEY is required")]
    MissingApiKey,

    /// API key cannot be carried as an HTTP header value.
    #[error("API_KEY is not a valid header value")]
    InvalidApiKey,
}

/// Route table construction and navigation errors.
#[derive(Error, Debug)]
pub enum RouteError {
    /// Route path does not begin with a slash.
    #[error("route path must begin with '/': {path:?}")]
    InvalidPath {
        /// The offending path.
        path: String,
    },

    /// Two routes declare the same path.
    #[error("duplicate route path: {path}")]
    DuplicatePath {
        /// The duplicated path.
        path: String,
    },

    /// No route matches the requested path.
    #[error("no route matches path: {path}")]
    NotFound {
        /// The unmatched path.
        path: String,
    },

    /// Route configuration failed to parse.
    #[error("failed to parse route config: {0}")]
    Parse(String),
}

/// API client request errors.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request path does not begin with a slash.
    #[error("request path must begin with '/': {0:?}")]
    InvalidPath(String),

    /// Assembled request URL was invalid.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("api returned HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: reqwest::StatusCode,
        /// Response body text, truncated for logging.
        body: String,
    },

    /// Response body could not be decoded.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ShellError>;
