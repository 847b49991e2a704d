//! Versioned route configuration.
//!
//! The navigation structure changes between releases, so it travels as one
//! serializable object with a revision number and is rebuilt wholesale,
//! never patched route by route.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// One declared path-to-view binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL path, unique within the table, beginning with `/`.
    pub path: String,
    /// Opaque view identifier resolved by the host.
    pub view: String,
}

/// A complete route table revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Revision of this table, bumped whenever the navigation structure
    /// changes.
    pub version: u32,
    /// Declared routes in matching order.
    pub routes: Vec<RouteEntry>,
    /// View navigated to when no route matches, if the host defines one.
    #[serde(default)]
    pub not_found: Option<String>,
}

impl RouteConfig {
    /// Parse a route configuration from JSON.
    pub fn from_json(raw: &str) -> Result<Self, RouteError> {
        serde_json::from_str(raw)
            .map_err(|e| RouteError::Parse(format!("invalid route config: {}", e)))
    }
}
