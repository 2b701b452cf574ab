//! Requesting the bid from the quote service.
//!
//! One GET per invocation, bounded by the client's own deadline. The service
//! has its own, tighter deadline for the upstream call, so under normal
//! conditions the client observes the service's failure status rather than
//! timing out itself.
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use quote_common::deadline::CLIENT_TIMEOUT;
use quote_common::net::SERVICE_URL;
use quote_common::{BidResponse, Deadline, QuoteError, Result};
use reqwest::Client;

use crate::output::{OUTPUT_FILE, write_bid};

/// Settings for one client invocation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Quote service endpoint.
    pub url: String,
    /// File receiving `Dólar: <bid>`.
    pub output: PathBuf,
    /// Deadline budget for the service call.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: SERVICE_URL.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
            timeout: CLIENT_TIMEOUT,
        }
    }
}

/// Single-shot client of the quote service.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    config: ClientConfig,
}

impl QuoteClient {
    /// Create a client with its own HTTP connection pool.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Settings this client runs with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch and decode the bid from the service.
    ///
    /// Fails with `Timeout` if not complete by `deadline`, `Status` when the
    /// service answers with a non-success status and `Decode` when the body is
    /// not a bid payload.
    pub async fn request_bid(&self, deadline: Deadline) -> Result<BidResponse> {
        debug!("Requesting bid from {} ({:?} budget)", self.config.url, deadline.budget());
        deadline
            .run("quote service call", async {
                let response = self.client.get(&self.config.url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(QuoteError::Status(status.as_u16()));
                }
                let body = response.bytes().await?;
                BidResponse::from_json(&body)
            })
            .await
    }

    /// Request the bid and write it to the output file.
    ///
    /// Nothing is written unless the bid was received and decoded in full.
    pub async fn run(&self) -> Result<()> {
        let bid = self
            .request_bid(Deadline::after(self.config.timeout))
            .await?;
        write_bid(&self.config.output, &bid.bid).await?;
        info!("Wrote bid {} to {}", bid.bid, self.config.output.display());
        Ok(())
    }
}
