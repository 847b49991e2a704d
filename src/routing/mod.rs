//! Routing module for path-to-view resolution and navigation.
//!
//! This module handles:
//! - Route table construction and validation
//! - Path resolution and history-backed navigation
//! - Versioned route configuration

pub mod config;
pub mod history;
pub mod router;

pub use config::{RouteConfig, RouteEntry};
pub use history::History;
pub use router::{Route, Router, RouterBuilder};
