//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_common::deadline::CLIENT_TIMEOUT;
use quote_common::net::SERVICE_URL;

use crate::client::ClientConfig;
use crate::output::{OUTPUT_FILE, normalize_path};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote service endpoint.
    #[clap(long, env = "QUOTE_SERVICE_URL", default_value = SERVICE_URL)]
    pub url: String,

    /// File the bid is written to. Overwritten on every successful run.
    #[clap(long, env = "QUOTE_OUTPUT", default_value = OUTPUT_FILE)]
    pub output: String,

    /// Deadline for the whole call to the service, in milliseconds.
    #[clap(long, env = "QUOTE_TIMEOUT_MS", default_value_t = CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,
}

impl Args {
    /// Client settings derived from the arguments.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            url: self.url.trim().to_string(),
            output: normalize_path(&self.output),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_match_reference_configuration() {
        let config = Args::try_parse_from(["quote_client"]).unwrap().client_config();
        assert_eq!(config.url, "http://localhost:8080/cotacao");
        assert_eq!(config.output, PathBuf::from("cotacao.txt"));
        assert_eq!(config.timeout, Duration::from_millis(300));
    }

    #[test]
    fn quoted_output_path_is_unwrapped() {
        let args = Args::try_parse_from([
            "quote_client",
            "--output",
            "\"C:\\quotes\\today.txt\"",
            "--timeout-ms",
            "750",
        ])
        .unwrap();
        let config = args.client_config();
        assert_eq!(config.output, PathBuf::from("C:\\quotes\\today.txt"));
        assert_eq!(config.timeout, Duration::from_millis(750));
    }
}
