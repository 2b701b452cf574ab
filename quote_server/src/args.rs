//! Command-line arguments for the Quote Server.
//!
//! Every flag can also be supplied through the environment variable named in
//! its `env` attribute.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::deadline::{FETCH_TIMEOUT, STORE_TIMEOUT};
use quote_common::net::{SERVICE_PORT, UPSTREAM_URL, addr};

use crate::config::ServiceConfig;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP endpoint binds to.
    #[clap(long, env = "QUOTE_BIND", default_value_t = addr("0.0.0.0", SERVICE_PORT))]
    pub bind: String,

    /// SQLite database file; created (with its directory) when missing.
    #[clap(long, env = "QUOTE_DATABASE", default_value = "./data/exchange.db")]
    pub database: PathBuf,

    /// Upstream rate API URL.
    #[clap(long, env = "QUOTE_UPSTREAM_URL", default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// Upstream fetch deadline in milliseconds.
    #[clap(long, env = "QUOTE_FETCH_TIMEOUT_MS", default_value_t = FETCH_TIMEOUT.as_millis() as u64)]
    pub fetch_timeout_ms: u64,

    /// Store write deadline in milliseconds.
    #[clap(long, env = "QUOTE_STORE_TIMEOUT_MS", default_value_t = STORE_TIMEOUT.as_millis() as u64)]
    pub store_timeout_ms: u64,
}

impl Args {
    /// Service settings derived from the arguments.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            upstream_url: self.upstream_url.clone(),
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            store_timeout: Duration::from_millis(self.store_timeout_ms),
        }
    }
}
