//! Process-wide shared client accessor.
//!
//! The application talks to one API, so every call site gets the same
//! client instance, built from the environment on first use.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ShellError};

use super::api::ApiClient;

static SHARED: OnceCell<ApiClient> = OnceCell::new();

/// Return the process-wide API client, constructing it on first call.
///
/// The first caller loads and validates configuration from the
/// environment; every later caller gets the identical instance without
/// touching configuration again. Concurrent first calls are serialized by
/// the cell, so at most one client is ever constructed. A failed
/// construction leaves the cell empty, so a later call retries once the
/// environment is fixed.
pub fn shared() -> Result<&'static ApiClient> {
    SHARED.get_or_try_init(|| {
        let config = Config::load()?;
        let client = ApiClient::new(&config)?;
        debug!(base_url = client.base_url(), "shared API client constructed");
        Ok::<_, ShellError>(client)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the cell and the process environment are both global,
    // so assertions cannot be split across parallel test threads.
    #[test]
    fn shared_returns_one_instance() {
        std::env::set_var("API_BASE_URL", "https://api.example.com");
        std::env::set_var("API_KEY", "unit-test-key");

        let first = shared().expect("client should build");
        let second = shared().expect("client should build");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.base_url(), "https://api.example.com");
    }
}
