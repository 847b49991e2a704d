//! Request/response middleware chain.
//!
//! Hooks run in installation order around every request the client sends.
//! The request side may mutate headers before the request goes out; the
//! response side observes the status and headers of every answer,
//! successful or not.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::error::{ClientError, ConfigError};

/// Header carrying the API key on every outgoing request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Mutable view of a request before it is sent.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP method.
    pub method: Method,
    /// Fully assembled request URL.
    pub url: Url,
    /// Headers that will be attached to the request.
    pub headers: HeaderMap,
}

/// Read-only view of a response after it arrived, before the body is read.
#[derive(Debug, Clone)]
pub struct ResponseContext {
    /// Response status code.
    pub status: StatusCode,
    /// URL the request was sent to.
    pub url: Url,
    /// Response headers.
    pub headers: HeaderMap,
    /// Wall-clock time between send and response arrival.
    pub elapsed: Duration,
}

/// A pre-request / post-response hook pair.
///
/// Both hooks default to no-ops so implementations override only the side
/// they care about.
pub trait Middleware: Send + Sync {
    /// Called before the request is sent; may mutate its headers.
    fn on_request(&self, ctx: &mut RequestContext) -> Result<(), ClientError> {
        let _ = ctx;
        Ok(())
    }

    /// Called after a response arrives, before the body is read.
    fn on_response(&self, ctx: &ResponseContext) -> Result<(), ClientError> {
        let _ = ctx;
        Ok(())
    }
}

/// Injects the configured API key into every outgoing request.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    value: HeaderValue,
}

impl ApiKeyAuth {
    /// Build the middleware, rejecting keys that cannot travel as a header
    /// value. The stored value is marked sensitive so it never shows up in
    /// debug output.
    pub fn new(api_key: &str) -> Result<Self, ConfigError> {
        let mut value = HeaderValue::from_str(api_key).map_err(|_| ConfigError::InvalidApiKey)?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl Middleware for ApiKeyAuth {
    fn on_request(&self, ctx: &mut RequestContext) -> Result<(), ClientError> {
        ctx.headers.insert(API_KEY_HEADER, self.value.clone());
        Ok(())
    }
}
