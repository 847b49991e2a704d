//! Configured HTTP client for the backing API.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, ConfigError};
use crate::metrics;

use super::middleware::{ApiKeyAuth, Middleware, RequestContext, ResponseContext};

/// Cap on response-body text carried inside error values.
const ERROR_BODY_LIMIT: usize = 2048;

/// HTTP client bound to one API: base URL, key injection, middleware
/// chain.
///
/// Cloning is cheap; the underlying connection pool and the middleware
/// chain are shared between clones.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Base URL with any trailing slash removed.
    base_url: String,
    /// Hooks run around every request, in installation order.
    middleware: Vec<Arc<dyn Middleware>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("middleware", &self.middleware.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// Validation runs first so configuration problems surface here,
    /// before anything is sent. The API key middleware is installed as the
    /// first hook in the chain.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            // Configurable timeout (default 10s)
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            // Bounded connection establishment
            .connect_timeout(std::time::Duration::from_millis(2_000))
            // TCP_NODELAY for low-latency (disable Nagle's algorithm)
            .tcp_nodelay(true)
            // Keep connections alive for reuse
            .tcp_keepalive(std::time::Duration::from_secs(30))
            // Connection pool per host (default 10)
            .pool_max_idle_per_host(config.http_pool_size)
            // Keep idle connections for 90 seconds
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        let auth = ApiKeyAuth::new(&config.api_key)?;

        Ok(Self {
            http,
            base_url: config.base_url_trimmed().to_string(),
            middleware: vec![Arc::new(auth)],
        })
    }

    /// Append a middleware to the chain.
    ///
    /// Hooks run in installation order, after the built-in key injection.
    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assemble the absolute URL for an API path.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        if !path.starts_with('/') {
            return Err(ClientError::InvalidPath(path.to_string()));
        }
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Issue a request with an optional JSON body.
    ///
    /// The middleware chain runs around the exchange: request hooks before
    /// send, response hooks once the status and headers are in. Transport
    /// failures and non-success statuses surface as typed errors; nothing
    /// is retried here.
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;

        let mut ctx = RequestContext {
            method: method.clone(),
            url,
            headers: HeaderMap::new(),
        };
        for middleware in &self.middleware {
            middleware.on_request(&mut ctx)?;
        }

        let mut request = self
            .http
            .request(ctx.method.clone(), ctx.url.clone())
            .headers(ctx.headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        metrics::inc_requests();
        let started = Instant::now();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::inc_request_errors();
                warn!(error = %e, "api request failed to complete");
                return Err(ClientError::Http(e));
            }
        };
        let elapsed = started.elapsed();
        metrics::record_request_latency(started, path);

        let status = response.status();
        let resp_ctx = ResponseContext {
            status,
            url: ctx.url,
            headers: response.headers().clone(),
            elapsed,
        };
        for middleware in &self.middleware {
            middleware.on_response(&resp_ctx)?;
        }

        if !status.is_success() {
            metrics::inc_request_errors();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "api returned error status");
            return Err(ClientError::Status {
                status,
                body: truncate_body(body),
            });
        }

        debug!(
            %status,
            elapsed_ms = elapsed.as_millis() as u64,
            "api request completed"
        );

        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse {
            status,
            headers: resp_ctx.headers,
            body,
        })
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ClientError> {
        self.request::<()>(Method::GET, path, None).await
    }

    /// Issue a GET request and decode the JSON response body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.get(path).await?.json()
    }

    /// Issue a POST request with a JSON body.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }
}

/// Buffered API response: status, headers, raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Response body as text, lossily converted from UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ClientError::Parse(format!("failed to decode JSON body: {}", e)))
    }
}

/// Trim an oversized error body before it is carried in an error value.
fn truncate_body(body: String) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body;
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    let mut truncated = body[..end].to_string();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn test_config(base_url: &str) -> Config {
        Config {
            api_base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            http_timeout_ms: 2_000,
            http_pool_size: 4,
        }
    }

    #[test]
    fn client_creation_works() {
        let client = ApiClient::new(&test_config("https://api.example.com")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn client_creation_trims_trailing_slash() {
        let client = ApiClient::new(&test_config("https://api.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn client_creation_fails_on_missing_key() {
        let mut config = test_config("https://api.example.com");
        config.api_key = String::new();
        assert!(matches!(
            ApiClient::new(&config),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new(&test_config("https://api.example.com")).unwrap();
        let url = client.endpoint("/items/42").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/items/42");
    }

    #[test]
    fn endpoint_rejects_relative_path() {
        let client = ApiClient::new(&test_config("https://api.example.com")).unwrap();
        assert!(matches!(
            client.endpoint("items"),
            Err(ClientError::InvalidPath(_))
        ));
    }

    #[test]
    fn response_json_decodes_body() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Item {
            name: String,
        }

        let response = ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: br#"{"name":"lamp"}"#.to_vec(),
        };

        let item: Item = response.json().unwrap();
        assert_eq!(
            item,
            Item {
                name: "lamp".to_string()
            }
        );
    }

    #[test]
    fn response_json_reports_parse_errors() {
        let response = ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: b"not json".to_vec(),
        };
        let result = response.json::<serde_json::Value>();
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }

    #[test]
    fn response_text_decodes_lossily() {
        let response = ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: b"plain text".to_vec(),
        };
        assert_eq!(response.text(), "plain text");

        let response = ApiResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: vec![0x68, 0x69, 0xFF],
        };
        assert_eq!(response.text(), "hi\u{FFFD}");
    }

    #[test]
    fn request_rejects_relative_path_before_sending() {
        let client = ApiClient::new(&test_config("https://api.example.com")).unwrap();
        let result = tokio_test::block_on(client.request::<()>(Method::GET, "items", None));
        assert!(matches!(result, Err(ClientError::InvalidPath(_))));
    }

    #[test]
    fn truncate_body_caps_length() {
        let long = "x".repeat(ERROR_BODY_LIMIT + 100);
        let truncated = truncate_body(long);
        assert!(truncated.len() <= ERROR_BODY_LIMIT + 3);
        assert!(truncated.ends_with("..."));

        let short = "short".to_string();
        assert_eq!(truncate_body(short), "short");
    }
}
