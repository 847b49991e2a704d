//! Client-side application shell: route table and shared API client.
//!
//! This library provides the two foundation pieces a single-page
//! application needs before any view renders: a validated path-to-view
//! route table with history-backed navigation, and a lazily constructed
//! process-wide HTTP client that authenticates every request against the
//! backing API.
//!
//! # Routing
//!
//! Routes are declared up front and validated as a whole table:
//!
//! ```
//! use app_shell::routing::Router;
//!
//! # fn main() -> app_shell::Result<()> {
//! let mut router = Router::builder()
//!     .route("/home", "HomeView")
//!     .route("/list", "ListView")
//!     .not_found("NotFoundView")
//!     .build()?;
//!
//! let view = router.navigate("/list")?;
//! assert_eq!(*view, "ListView");
//! assert_eq!(router.current_path(), Some("/list"));
//! # Ok(())
//! # }
//! ```
//!
//! # API access
//!
//! The shared client is fetched wherever a request needs to go out; the
//! first caller pays for construction, everyone else reuses it:
//!
//! ```no_run
//! # async fn demo() -> app_shell::Result<()> {
//! let api = app_shell::client::shared()?;
//! let response = api.get("/inventory").await?;
//! assert!(response.status().is_success());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`routing`]: Route table, resolution, and navigation history
//! - [`client`]: API client, middleware chain, and shared accessor
//! - [`metrics`]: Request and navigation metrics

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routing;

pub use client::{ApiClient, ApiResponse, Middleware};
pub use config::Config;
pub use error::{ClientError, ConfigError, Result, RouteError, ShellError};
pub use routing::{History, RouteConfig, Router, RouterBuilder};
