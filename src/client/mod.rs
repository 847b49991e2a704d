//! API client module for authenticated requests against the backing API.
//!
//! This module handles:
//! - The configured HTTP client and its request surface
//! - The request/response middleware chain
//! - The process-wide shared client accessor

pub mod api;
pub mod middleware;
pub mod shared;

pub use api::{ApiClient, ApiResponse};
pub use middleware::{ApiKeyAuth, Middleware, RequestContext, ResponseContext, API_KEY_HEADER};
pub use shared::shared;
