//! Quote service configuration.

use std::time::Duration;

use quote_common::deadline::{FETCH_TIMEOUT, STORE_TIMEOUT};
use quote_common::net::UPSTREAM_URL;

/// Per-request settings of the quote service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Upstream rate API URL.
    pub upstream_url: String,
    /// Deadline budget for the upstream fetch.
    pub fetch_timeout: Duration,
    /// Deadline budget for the store write, independent of `fetch_timeout`.
    pub store_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upstream_url: UPSTREAM_URL.to_string(),
            fetch_timeout: FETCH_TIMEOUT,
            store_timeout: STORE_TIMEOUT,
        }
    }
}
